//! Per-type encode/decode over a [`CellBuf`].
//!
//! [`Wire`] is the composition seam for user types: each field writes itself
//! in declaration order and reads back in the same order, with no schema and
//! no reflection. Decoding through the trait is always strict.
//!
//! ```rust
//! use cellbuf::{CellBuf, Result, Wire};
//!
//! #[derive(Debug, PartialEq)]
//! struct Handshake {
//!     version: i32,
//!     token: Vec<u8>,
//!     motd: Option<String>,
//! }
//!
//! impl Wire for Handshake {
//!     fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
//!         self.version.write_to(buf)?;
//!         self.token.write_to(buf)?;
//!         self.motd.write_to(buf)
//!     }
//!
//!     fn read_from(buf: &mut CellBuf) -> Result<Self> {
//!         Ok(Handshake {
//!             version: i32::read_from(buf)?,
//!             token: Vec::<u8>::read_from(buf)?,
//!             motd: Option::<String>::read_from(buf)?,
//!         })
//!     }
//! }
//!
//! let hs = Handshake { version: 3, token: vec![1, 2, 3], motd: None };
//! let mut buf = CellBuf::new();
//! hs.write_to(&mut buf).unwrap();
//! assert_eq!(Handshake::read_from(&mut buf).unwrap(), hs);
//! ```

use crate::buf::CellBuf;
use crate::error::Result;

/// A value that can write itself to and read itself back from a [`CellBuf`].
pub trait Wire: Sized {
    /// Encode `self` by appending to `buf`.
    fn write_to(&self, buf: &mut CellBuf) -> Result<()>;

    /// Decode a value from `buf` at its current cursor, strictly.
    fn read_from(buf: &mut CellBuf) -> Result<Self>;
}

impl Wire for i8 {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_byte(i64::from(*self))
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_byte()
    }
}

impl Wire for i32 {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_int32(*self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_int32(true)
    }
}

impl Wire for i64 {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_int64(*self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_int64(true)
    }
}

impl Wire for f32 {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_float(*self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_float(true)
    }
}

impl Wire for f64 {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_double(*self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_double(true)
    }
}

/// Tri-state boolean, one cell.
impl Wire for Option<bool> {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_bool(*self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_bool(true)
    }
}

/// Length-prefixed, 4-byte-aligned byte array.
impl Wire for Vec<u8> {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_byte_array(self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_byte_array(true)
    }
}

impl Wire for Option<Vec<u8>> {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_nullable_byte_array(self.as_deref())
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_nullable_byte_array(true)
    }
}

/// UTF-8 bytes framed as a byte array.
impl Wire for String {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_string(self)
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_string(true)
    }
}

impl Wire for Option<String> {
    fn write_to(&self, buf: &mut CellBuf) -> Result<()> {
        buf.write_nullable_string(self.as_deref())
    }
    fn read_from(buf: &mut CellBuf) -> Result<Self> {
        buf.read_nullable_string(true)
    }
}
