//! # cellbuf
//!
//! A compact binary serialization buffer: a single growable byte buffer
//! ([`CellBuf`]) with append-only writes and cursor-based sequential reads
//! of primitive and composite values, producing and consuming a flat,
//! bit-exact byte layout.
//!
//! ## Wire format
//!
//! All multi-cell integers are little-endian.
//!
//! | Value kind | Layout |
//! |------------|--------|
//! | byte | 1 cell, signed range `[-128, 127]` |
//! | generic integer (`write`) | 1 cell, low 8 bits, two's complement wrap |
//! | `i32` / `i64` | 4 / 8 cells, little-endian |
//! | `f32` / `f64` | int32 / int64 of the IEEE-754 bit pattern |
//! | tri-state bool (`Option<bool>`) | 1 cell: 0 = null, 1 = false, 2 = true |
//! | byte array | 1-cell length (≤ 253) or `254` + 3-cell length (≤ 16,777,215), payload, zero-padding to a 4-byte-aligned block |
//! | nullable array / string / bytes | 1 flag cell (0/1), then the non-nullable encoding |
//! | string | UTF-8 bytes framed as a byte array |
//!
//! ## Strict and lenient reads
//!
//! Every read takes a `strict` flag. Strict reads fail with
//! [`Error::EndOfStream`] past the end of the buffer and reject malformed
//! encodings; lenient reads absorb those conditions into sentinel values
//! (`-1` from [`CellBuf::read`], `None` from the nullable readers, a short
//! sequence from [`CellBuf::read_bytes`]) so truncated input can still be
//! decoded best-effort.
//!
//! ## Example
//!
//! ```rust
//! use cellbuf::CellBuf;
//!
//! let mut buf = CellBuf::new();
//! buf.write_int32(42).unwrap();
//! buf.write_double(std::f64::consts::PI).unwrap();
//! buf.write_nullable_string(Some("hello")).unwrap();
//!
//! // Export, ship out of band, re-import.
//! let text = buf.to_base64();
//! let mut decoded = CellBuf::from_base64(&text).unwrap();
//!
//! assert_eq!(decoded.read_int32(true).unwrap(), 42);
//! assert_eq!(decoded.read_double(true).unwrap(), std::f64::consts::PI);
//! assert_eq!(decoded.read_nullable_string(true).unwrap().as_deref(), Some("hello"));
//! ```

pub mod buf;
pub mod error;
pub mod wire;

pub use buf::CellBuf;
pub use error::{Error, Result};
pub use wire::Wire;
