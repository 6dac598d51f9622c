/// Two's complement of the byte sum, so that a record's bytes plus its
/// checksum add up to zero modulo 256.
pub fn checksum(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(bytes.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn known_record() {
        // :0B0010006164647265737320676170A7
        let bytes = [
            0x0B, 0x00, 0x10, 0x00, 0x61, 0x64, 0x64, 0x72, 0x65, 0x73, 0x73, 0x20, 0x67, 0x61,
            0x70,
        ];

        assert_eq!(checksum(&bytes), 0xA7);
    }

    #[test]
    fn closes_to_zero() {
        let bytes = [0x02, 0x00, 0x00, 0x04, 0xAB, 0xCD];
        let sum = checksum(&bytes);

        assert_eq!(sum, 0x82);
        assert_eq!(checksum(&[0x02, 0x00, 0x00, 0x04, 0xAB, 0xCD, sum]), 0);
    }

    #[test]
    fn wraps() {
        assert_eq!(checksum(&[0xFF, 0x01]), 0);
        assert_eq!(checksum(&[0xFF, 0xFF]), 0x02);
    }
}
