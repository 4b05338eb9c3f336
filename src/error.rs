use std::{convert::From, fmt};

/// Simple custom Error for the opcode table tools
pub struct Error {
    pub kind: ErrorKind,
    /// 1-based input line the error refers to, if any
    pub line: Option<usize>,
    pub msg: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// an opcode row that can't be split into the expected fields (recoverable)
    MalformedRow,
    /// addressing-mode token missing from the variant's mode table (fatal)
    UnknownAddressingMode,
    /// the search pattern given to awgrep isn't a valid regex
    Pattern,
    /// underlying io error
    IO,
}

impl Error {
    pub fn new(kind: ErrorKind, line: Option<usize>, message: &str) -> Error {
        Error {
            kind,
            line,
            msg: String::from(message),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}
impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self { Error::new(ErrorKind::Pattern, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", paint!(red!("optab::Error"), "optab::Error"), self)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: {}", line, self.msg)
        } else {
            write!(f, "{}", self.msg)
        }
    }
}
impl std::error::Error for Error {}
