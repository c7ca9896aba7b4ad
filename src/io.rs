//! Whitespace-delimited text input for containers.
//!
//! The on-stream format matches [`Display`](core::fmt::Display) output:
//! scalar values separated by arbitrary whitespace, row-major for
//! matrices. There is no size prefix; the reader must already hold a
//! container of the target size.
//!
//! ```
//! use dynalg::io::TokenReader;
//! use dynalg::SquareMatrix;
//!
//! let mut tokens = TokenReader::new("1 2\n3 4\n".as_bytes());
//! let mut m = SquareMatrix::<i32>::new(2).unwrap();
//! m.read_from(&mut tokens).unwrap();
//! assert_eq!(m[1][0], 3);
//! ```

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use crate::matrix::SquareMatrix;
use crate::traits::Scalar;
use crate::vector::DynVector;

/// Errors from reading containers off a text stream.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(std::io::Error),
    /// A token did not parse as the element type.
    Parse { token: String },
    /// The stream ended before enough tokens were read.
    UnexpectedEof,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "read failed: {}", e),
            ReadError::Parse { token } => write!(f, "cannot parse token {:?}", token),
            ReadError::UnexpectedEof => write!(f, "unexpected end of input"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Pulls whitespace-separated tokens off a buffered reader, refilling
/// line by line. Suitable for interactive streams: it never reads past
/// the line holding the requested token.
pub struct TokenReader<R> {
    reader: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next whitespace-separated token, or [`ReadError::UnexpectedEof`]
    /// when the stream is exhausted.
    ///
    /// ```
    /// use dynalg::io::TokenReader;
    /// let mut tokens = TokenReader::new("a  b\nc".as_bytes());
    /// assert_eq!(tokens.next_token().unwrap(), "a");
    /// assert_eq!(tokens.next_token().unwrap(), "b");
    /// assert_eq!(tokens.next_token().unwrap(), "c");
    /// assert!(tokens.next_token().is_err());
    /// ```
    pub fn next_token(&mut self) -> Result<&str, ReadError> {
        let (start, end) = loop {
            let bytes = self.line.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < bytes.len() {
                let start = self.pos;
                while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
                    self.pos += 1;
                }
                break (start, self.pos);
            }
            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(ReadError::UnexpectedEof);
            }
        };
        Ok(&self.line[start..end])
    }

    /// Next token parsed as `T` via its [`FromStr`] rule.
    pub fn parse<T: FromStr>(&mut self) -> Result<T, ReadError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| ReadError::Parse {
            token: token.to_string(),
        })
    }
}

impl<T: Scalar + FromStr> DynVector<T> {
    /// Read exactly `len` values into the buffer, in order.
    ///
    /// ```
    /// use dynalg::io::TokenReader;
    /// use dynalg::DynVector;
    ///
    /// let mut tokens = TokenReader::new("4 5 6".as_bytes());
    /// let mut v = DynVector::<i32>::new(3).unwrap();
    /// v.read_from(&mut tokens).unwrap();
    /// assert_eq!(v.as_slice(), &[4, 5, 6]);
    /// ```
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), ReadError> {
        for i in 0..self.len() {
            self.data[i] = tokens.parse()?;
        }
        Ok(())
    }
}

impl<T: Scalar + FromStr> SquareMatrix<T> {
    /// Read `size` rows, each via the row's own
    /// [`read_from`](DynVector::read_from).
    pub fn read_from<R: BufRead>(&mut self, tokens: &mut TokenReader<R>) -> Result<(), ReadError> {
        for row in self.rows.iter_mut() {
            row.read_from(tokens)?;
        }
        Ok(())
    }
}
