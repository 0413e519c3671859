use super::LineGraphRule;
use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display)]
pub enum Error {
    #[display(fmt = "{}", _0)]
    Syntax(pest::error::Error<LineGraphRule>),
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "line {}: number out of range: {}", line, text)]
    InvalidNumber { line: usize, text: String },
    #[display(fmt = "line {}: vertex or edge before any graph header", line)]
    MissingHeader { line: usize },
    #[display(fmt = "line {}: duplicate vertex {}", line, vid)]
    DuplicateVertex { line: usize, vid: VId },
    #[display(fmt = "line {}: undeclared vertex {}", line, vid)]
    UndeclaredVertex { line: usize, vid: VId },
    #[display(fmt = "line {}: duplicate edge or self loop ({}, {})", line, src, dst)]
    InvalidEdge { line: usize, src: VId, dst: VId },
}

impl std::error::Error for Error {}

impl From<pest::error::Error<LineGraphRule>> for Error {
    fn from(e: pest::error::Error<LineGraphRule>) -> Self {
        Error::Syntax(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
