//! The compact binary read/write buffer.
//!
//! ## Wire format summary
//! - One cell is one byte; the signed view of a cell is `[-128, 127]`
//! - Multi-cell integers are little-endian: 4 cells for int32, 8 for int64
//! - Floats and doubles are the IEEE-754 bit pattern written as int32/int64
//! - Tri-state booleans occupy one cell: 0 = null, 1 = false, 2 = true
//! - Byte arrays carry a length prefix (1 cell up to 253, else a `254`
//!   marker plus 3 raw length cells) and are zero-padded so the whole block
//!   ends on a 4-byte boundary
//! - Nullable values carry a 1-cell presence flag: 0 = absent, 1 = present
//! - Strings are UTF-8 bytes framed as a byte array

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::error::{Error, Result};

/// The longest byte array representable by the 3-cell extended length prefix.
const MAX_ARRAY_LEN: usize = 0xFF_FFFF;

/// A growable byte buffer with append-only writes and cursor-based
/// sequential reads.
///
/// Writes always append at the end of the buffer; reads consume cells from
/// an independent cursor that starts at 0 and only ever moves forward (until
/// [`cleanup`](CellBuf::cleanup)). Both directions operate on the same
/// underlying buffer, so a buffer imported with [`from_bytes`] or
/// [`from_base64`] can still be appended to while it is being read.
///
/// Every read takes a `strict` flag selecting its failure policy: strict
/// reads surface [`Error::EndOfStream`] and malformed encodings, lenient
/// reads degrade to sentinel values (`-1`, `None`, a short byte sequence)
/// so truncated input can still be partially decoded.
///
/// ```rust
/// use cellbuf::CellBuf;
///
/// let mut buf = CellBuf::new();
/// buf.write_int32(-1).unwrap();
/// buf.write_string("hello").unwrap();
/// buf.write_bool(None).unwrap();
///
/// let mut decoded = CellBuf::from_base64(&buf.to_base64()).unwrap();
/// assert_eq!(decoded.read_int32(true).unwrap(), -1);
/// assert_eq!(decoded.read_string(true).unwrap(), "hello");
/// assert_eq!(decoded.read_bool(true).unwrap(), None);
/// ```
///
/// [`from_bytes`]: CellBuf::from_bytes
/// [`from_base64`]: CellBuf::from_base64
#[derive(Debug, Clone, Default)]
pub struct CellBuf {
    cells: Vec<u8>,
    cursor: usize,
}

impl CellBuf {
    /// Maximum number of cells a buffer may hold. A write that would cross
    /// this bound fails with [`Error::CapacityExceeded`].
    pub const MAX_LEN: usize = 2_147_483_647;

    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer pre-populated with `bytes`, cursor at 0.
    ///
    /// The buffer stays writable; appends continue after the imported bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            cells: bytes.into(),
            cursor: 0,
        }
    }

    /// Create a buffer from base64 text, as produced by
    /// [`to_base64`](CellBuf::to_base64).
    pub fn from_base64(text: &str) -> Result<Self> {
        let cells = BASE64
            .decode(text)
            .map_err(|e| Error::Base64(e.to_string()))?;
        Ok(Self { cells, cursor: 0 })
    }

    // ── Writes ─────────────────────────────────────────────────────────────

    /// Append one cell with the value's low 8 bits, two's complement.
    ///
    /// Total over all integers: out-of-range values wrap instead of failing,
    /// so `write(200)` stores the same cell as `write(-56)`. Callers that
    /// need the full value must use [`write_int32`](CellBuf::write_int32) or
    /// [`write_int64`](CellBuf::write_int64).
    pub fn write(&mut self, value: i64) -> Result<()> {
        self.push_cell(value as u8)
    }

    /// Append one cell, validating the signed-byte range.
    ///
    /// Fails with [`Error::ByteRange`] unless `-128 <= byte <= 127`.
    pub fn write_byte(&mut self, byte: i64) -> Result<()> {
        if !(-128..=127).contains(&byte) {
            return Err(Error::ByteRange(byte));
        }
        self.push_cell(byte as u8)
    }

    /// Append every byte of `bytes`, unframed.
    ///
    /// To write a sub-range, slice at the call site.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            self.push_cell(b)?;
        }
        Ok(())
    }

    /// Append a presence flag cell (0 = absent, 1 = present), then the bytes
    /// unframed.
    ///
    /// This form is not self-describing: no count is written, so the reader
    /// must pass the same count to
    /// [`read_nullable_bytes`](CellBuf::read_nullable_bytes) out of band.
    /// For a self-describing encoding use
    /// [`write_nullable_byte_array`](CellBuf::write_nullable_byte_array).
    pub fn write_nullable_bytes(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        match bytes {
            None => self.write_byte(0),
            Some(bytes) => {
                self.write_byte(1)?;
                self.write_bytes(bytes)
            }
        }
    }

    /// Append a tri-state boolean: `None` → 0, `Some(false)` → 1,
    /// `Some(true)` → 2.
    pub fn write_bool(&mut self, value: Option<bool>) -> Result<()> {
        match value {
            None => self.write_byte(0),
            Some(false) => self.write_byte(1),
            Some(true) => self.write_byte(2),
        }
    }

    /// Append a 32-bit integer as 4 cells, little-endian.
    pub fn write_int32(&mut self, value: i32) -> Result<()> {
        for i in 0..4 {
            self.write(i64::from(value >> (8 * i)))?;
        }
        Ok(())
    }

    /// Append a 64-bit integer as 8 cells, little-endian.
    pub fn write_int64(&mut self, value: i64) -> Result<()> {
        for i in 0..8 {
            self.write(value >> (8 * i))?;
        }
        Ok(())
    }

    /// Append a single-precision float as its IEEE-754 bit pattern, 4 cells
    /// little-endian.
    pub fn write_float(&mut self, value: f32) -> Result<()> {
        self.write_int32(value.to_bits() as i32)
    }

    /// Append a double-precision float as its IEEE-754 bit pattern, 8 cells
    /// little-endian.
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        self.write_int64(value.to_bits() as i64)
    }

    /// Append a length-prefixed, 4-byte-aligned byte array.
    ///
    /// Lengths up to 253 use a 1-cell prefix; longer arrays use a `254`
    /// marker cell plus 3 raw length cells (little-endian), up to
    /// 16,777,215 bytes. The payload is followed by zero cells until the
    /// whole block (prefix + payload + padding) is a multiple of 4 cells.
    pub fn write_byte_array(&mut self, bytes: &[u8]) -> Result<()> {
        let n = bytes.len();
        if n > MAX_ARRAY_LEN {
            return Err(Error::LengthOverflow {
                max: MAX_ARRAY_LEN as u32,
                got: n as u64,
            });
        }
        let mut prefix = if n <= 253 {
            self.write(n as i64)?;
            1
        } else {
            self.write(254)?;
            self.write(n as i64)?;
            self.write((n >> 8) as i64)?;
            self.write((n >> 16) as i64)?;
            4
        };
        self.write_bytes(bytes)?;
        while (n + prefix) % 4 != 0 {
            self.write_byte(0)?;
            prefix += 1;
        }
        Ok(())
    }

    /// Append a presence flag cell, then the byte array framed as in
    /// [`write_byte_array`](CellBuf::write_byte_array).
    pub fn write_nullable_byte_array(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        match bytes {
            None => self.write_byte(0),
            Some(bytes) => {
                self.write_byte(1)?;
                self.write_byte_array(bytes)
            }
        }
    }

    /// Append a string as its UTF-8 bytes framed as a byte array.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_byte_array(value.as_bytes())
    }

    /// Append a presence flag cell, then the string if present.
    pub fn write_nullable_string(&mut self, value: Option<&str>) -> Result<()> {
        match value {
            None => self.write_byte(0),
            Some(value) => {
                self.write_byte(1)?;
                self.write_string(value)
            }
        }
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    /// Consume one cell and return it as an unsigned value in `0..=255`.
    ///
    /// At or past the end of the buffer: `Ok(-1)` when lenient,
    /// [`Error::EndOfStream`] when strict. The cursor does not move past the
    /// end.
    pub fn read(&mut self, strict: bool) -> Result<i32> {
        if self.cursor < self.cells.len() {
            let cell = self.cells[self.cursor];
            self.cursor += 1;
            return Ok(i32::from(cell));
        }
        if strict { Err(Error::EndOfStream) } else { Ok(-1) }
    }

    /// Consume one cell and return it in the signed-byte domain
    /// `[-128, 127]`. Always strict.
    pub fn read_byte(&mut self) -> Result<i8> {
        let b = self.read(true)?;
        Ok(b as u8 as i8)
    }

    /// Consume up to `count` cells.
    ///
    /// A lenient read that hits end-of-stream mid-way returns the partial
    /// prefix collected so far (the cursor keeps the bytes it did consume).
    pub fn read_bytes(&mut self, count: usize, strict: bool) -> Result<Vec<u8>> {
        let available = self.cells.len().saturating_sub(self.cursor);
        let mut bytes = Vec::with_capacity(count.min(available));
        for _ in 0..count {
            match self.read(true) {
                Ok(b) => bytes.push(b as u8),
                Err(e) if strict => return Err(e),
                Err(_) => break,
            }
        }
        Ok(bytes)
    }

    /// Consume a presence flag cell; `0` yields `None`, anything else reads
    /// `count` bytes.
    ///
    /// `count` must match the length passed to
    /// [`write_nullable_bytes`](CellBuf::write_nullable_bytes) — the
    /// encoding carries no count of its own.
    pub fn read_nullable_bytes(&mut self, count: usize, strict: bool) -> Result<Option<Vec<u8>>> {
        if self.read(strict)? == 0 {
            return Ok(None);
        }
        self.read_bytes(count, strict).map(Some)
    }

    /// Consume a tri-state boolean cell.
    ///
    /// `0` → `None`, `1` → `Some(false)`, `2` → `Some(true)`. Any other
    /// value fails with [`Error::InvalidBool`] when strict and is absorbed
    /// to `None` when lenient, as is end-of-stream.
    pub fn read_bool(&mut self, strict: bool) -> Result<Option<bool>> {
        let cell = match self.read(true) {
            Ok(cell) => cell,
            Err(e) if strict => return Err(e),
            Err(_) => return Ok(None),
        };
        match cell {
            0 => Ok(None),
            1 => Ok(Some(false)),
            2 => Ok(Some(true)),
            other if strict => Err(Error::InvalidBool(other)),
            _ => Ok(None),
        }
    }

    /// Consume 4 cells and reassemble them little-endian into an `i32`.
    ///
    /// The lenient end-of-stream sentinel `-1` sets every bit it is OR-ed
    /// into, so a fully truncated lenient read yields `-1`.
    pub fn read_int32(&mut self, strict: bool) -> Result<i32> {
        let mut value = 0i64;
        for i in 0..4 {
            value |= i64::from(self.read(strict)?) << (8 * i);
        }
        Ok(value as i32)
    }

    /// Consume 8 cells and reassemble them little-endian into an `i64`.
    pub fn read_int64(&mut self, strict: bool) -> Result<i64> {
        let mut value = 0i64;
        for i in 0..8 {
            value |= i64::from(self.read(strict)?) << (8 * i);
        }
        Ok(value)
    }

    /// Consume 4 cells and reinterpret the bit pattern as an `f32`.
    pub fn read_float(&mut self, strict: bool) -> Result<f32> {
        Ok(f32::from_bits(self.read_int32(strict)? as u32))
    }

    /// Consume 8 cells and reinterpret the bit pattern as an `f64`.
    pub fn read_double(&mut self, strict: bool) -> Result<f64> {
        Ok(f64::from_bits(self.read_int64(strict)? as u64))
    }

    /// Consume a length-prefixed, 4-byte-aligned byte array.
    ///
    /// A first cell of 254 or above switches to the 3-cell extended length
    /// prefix. Padding cells are consumed and discarded.
    pub fn read_byte_array(&mut self, strict: bool) -> Result<Vec<u8>> {
        let mut prefix = 1i64;
        let mut len = i64::from(self.read(strict)?);
        if len >= 254 {
            len = i64::from(self.read(strict)?)
                | i64::from(self.read(strict)?) << 8
                | i64::from(self.read(strict)?) << 16;
            prefix = 4;
        }
        let bytes = self.read_bytes(len.max(0) as usize, strict)?;
        let mut i = prefix;
        while (len + i) % 4 != 0 {
            self.read(strict)?;
            i += 1;
        }
        Ok(bytes)
    }

    /// Consume a presence flag cell, then a byte array if present.
    pub fn read_nullable_byte_array(&mut self, strict: bool) -> Result<Option<Vec<u8>>> {
        if self.read(strict)? == 0 {
            return Ok(None);
        }
        self.read_byte_array(strict).map(Some)
    }

    /// Consume a byte array and decode it as UTF-8.
    ///
    /// Strict reads fail with [`Error::InvalidString`] on invalid UTF-8;
    /// lenient reads substitute the replacement character.
    pub fn read_string(&mut self, strict: bool) -> Result<String> {
        let bytes = self.read_byte_array(strict)?;
        if strict {
            String::from_utf8(bytes).map_err(|_| Error::InvalidString)
        } else {
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }

    /// Consume a presence flag cell, then a string if present.
    pub fn read_nullable_string(&mut self, strict: bool) -> Result<Option<String>> {
        if self.read(strict)? == 0 {
            return Ok(None);
        }
        self.read_string(strict).map(Some)
    }

    /// Advance the cursor by `count` cells without reading them.
    ///
    /// No bounds clamping: the cursor may end up past the buffer length, in
    /// which case subsequent reads observe end-of-stream.
    pub fn skip(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add(count);
    }

    // ── Buffer state ───────────────────────────────────────────────────────

    /// Number of cells written so far. Unaffected by reads.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells have been written.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The whole buffer as raw bytes, irrespective of the read cursor.
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// A copy of the whole buffer, irrespective of the read cursor.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// The whole buffer encoded as base64 text.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.cells)
    }

    /// Empty the buffer and reset the cursor to 0 for reuse.
    pub fn cleanup(&mut self) {
        self.cells.clear();
        self.cursor = 0;
    }

    fn push_cell(&mut self, cell: u8) -> Result<()> {
        if self.cells.len() >= Self::MAX_LEN {
            return Err(Error::CapacityExceeded);
        }
        self.cells.push(cell);
        Ok(())
    }
}
