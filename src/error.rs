use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while encoding to or decoding from a
/// [`CellBuf`](crate::CellBuf).
///
/// Write-side errors are always surfaced. Read-side errors are only surfaced
/// by strict reads; lenient reads absorb them into sentinel values (`-1`,
/// `None`, or a short byte sequence).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A value outside `[-128, 127]` was passed to the strict single-cell
    /// writer. The wrapping writer ([`CellBuf::write`](crate::CellBuf::write))
    /// never produces this.
    #[error("byte value {0} out of range (must be between -128 and 127)")]
    ByteRange(i64),

    /// A write would grow the buffer past its maximum length of
    /// 2,147,483,647 cells.
    #[error("buffer capacity exceeded (2147483647 cells)")]
    CapacityExceeded,

    /// A strict read ran past the end of the buffer.
    #[error("read past end of buffer")]
    EndOfStream,

    /// A tri-state boolean cell held something other than 0, 1 or 2.
    #[error("invalid boolean encoding: {0} (must be 0, 1 or 2)")]
    InvalidBool(i32),

    /// A strictly decoded string payload was not valid UTF-8.
    #[error("string payload contains invalid UTF-8")]
    InvalidString,

    /// A byte array was too long for the 3-cell extended length prefix.
    #[error("byte array length {got} exceeds maximum {max}")]
    LengthOverflow { max: u32, got: u64 },

    /// Base64 input could not be decoded during construction.
    #[error("invalid base64 input: {0}")]
    Base64(String),
}
