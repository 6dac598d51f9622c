use alloc::string::String;
use core::convert::Infallible;

/// Something that hands out text one line at a time.
pub trait LineSource {
    type Error;

    /// Append the next line to `buf`, with or without its terminator.
    /// Returns `Ok(false)` once the input is exhausted.
    fn read_line(&mut self, buf: &mut String) -> Result<bool, Self::Error>;
}

impl<I, T> LineSource for I
where
    I: Iterator<Item = T>,
    T: AsRef<str>,
{
    type Error = Infallible;

    fn read_line(&mut self, buf: &mut String) -> Result<bool, Self::Error> {
        match self.next() {
            Some(line) => {
                buf.push_str(line.as_ref());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Line source over a buffered reader.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoLines<R> {
    reader: R,
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> IoLines<R> {
    pub fn new(reader: R) -> Self {
        IoLines { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> LineSource for IoLines<R> {
    type Error = std::io::Error;

    fn read_line(&mut self, buf: &mut String) -> Result<bool, Self::Error> {
        Ok(std::io::BufRead::read_line(&mut self.reader, buf)? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn str_lines() {
        let mut source = ":00000001FF\r\n\n:02000004ABCD82".lines();
        let mut buf = String::new();

        assert_eq!(source.read_line(&mut buf), Ok(true));
        assert_eq!(buf, ":00000001FF");

        buf.clear();
        assert_eq!(source.read_line(&mut buf), Ok(true));
        assert_eq!(buf, "");

        buf.clear();
        assert_eq!(source.read_line(&mut buf), Ok(true));
        assert_eq!(buf, ":02000004ABCD82");

        assert_eq!(source.read_line(&mut buf), Ok(false));
    }

    #[test]
    fn owned_lines() {
        let mut source = vec![String::from(":00000001FF")].into_iter();
        let mut buf = String::new();

        assert_eq!(source.read_line(&mut buf), Ok(true));
        assert_eq!(buf, ":00000001FF");
        assert_eq!(source.read_line(&mut buf), Ok(false));
    }

    #[test]
    #[cfg(feature = "std")]
    fn io_lines() {
        let mut source = IoLines::new(&b":00000001FF\r\n\r\n"[..]);
        let mut buf = String::new();

        assert!(source.read_line(&mut buf).unwrap());
        assert_eq!(buf, ":00000001FF\r\n");

        buf.clear();
        assert!(source.read_line(&mut buf).unwrap());
        assert_eq!(buf, "\r\n");

        buf.clear();
        assert!(!source.read_line(&mut buf).unwrap());
        assert!(source.into_inner().is_empty());
    }
}
