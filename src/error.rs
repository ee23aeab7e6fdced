use thiserror::Error;

use crate::ranges::CodepointRange;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid unicode codepoint: {0:#X}")]
    InvalidCodepoint(u32),
    #[error("invalid utf-16 surrogate pair: high {high:#06X}, low {low:#06X}")]
    InvalidSurrogatePair { high: u16, low: u16 },
    #[error("invalid codepoint range: {0}")]
    InvalidRange(CodepointRange),
    #[error("codepoint range {next} overlaps or precedes {previous}")]
    OverlappingRanges {
        previous: CodepointRange,
        next: CodepointRange,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
