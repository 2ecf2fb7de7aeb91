//! Property tests for the write/read round-trip laws.

use cellbuf::CellBuf;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_int32_roundtrip(v: i32) -> bool {
    let mut buf = CellBuf::new();
    buf.write_int32(v).unwrap();
    buf.read_int32(true).unwrap() == v
}

#[quickcheck]
fn prop_int64_roundtrip(v: i64) -> bool {
    let mut buf = CellBuf::new();
    buf.write_int64(v).unwrap();
    buf.read_int64(true).unwrap() == v
}

#[quickcheck]
fn prop_float_bits_roundtrip(v: f32) -> bool {
    let mut buf = CellBuf::new();
    buf.write_float(v).unwrap();
    buf.read_float(true).unwrap().to_bits() == v.to_bits()
}

#[quickcheck]
fn prop_double_bits_roundtrip(v: f64) -> bool {
    let mut buf = CellBuf::new();
    buf.write_double(v).unwrap();
    buf.read_double(true).unwrap().to_bits() == v.to_bits()
}

/// write(v) stores the low 8 bits of the two's complement representation.
#[quickcheck]
fn prop_write_wraparound_law(v: i64) -> bool {
    let mut buf = CellBuf::new();
    buf.write(v).unwrap();
    buf.as_bytes() == [v as u8]
}

/// The encoded block is prefix + payload rounded up to a multiple of 4.
#[quickcheck]
fn prop_byte_array_alignment(data: Vec<u8>) -> bool {
    let prefix = if data.len() <= 253 { 1 } else { 4 };
    let expected = (prefix + data.len()).div_ceil(4) * 4;
    let mut buf = CellBuf::new();
    buf.write_byte_array(&data).unwrap();
    buf.len() == expected && buf.read_byte_array(true).unwrap() == data
}

#[quickcheck]
fn prop_string_roundtrip(s: String) -> bool {
    let mut buf = CellBuf::new();
    buf.write_string(&s).unwrap();
    buf.read_string(true).unwrap() == s
}

/// Values written in sequence read back in the same order, and length
/// tracks writes only.
#[quickcheck]
fn prop_sequential_order_and_length(a: i32, b: Vec<u8>, c: Option<bool>) -> bool {
    let mut buf = CellBuf::new();
    buf.write_int32(a).unwrap();
    buf.write_byte_array(&b).unwrap();
    buf.write_bool(c).unwrap();
    let written = buf.len();

    let ok = buf.read_int32(true).unwrap() == a
        && buf.read_byte_array(true).unwrap() == b
        && buf.read_bool(true).unwrap() == c;
    ok && buf.len() == written
}

/// Export to base64 and re-import is lossless.
#[quickcheck]
fn prop_base64_roundtrip(data: Vec<u8>) -> bool {
    let buf = CellBuf::from_bytes(data.clone());
    let decoded = CellBuf::from_base64(&buf.to_base64()).unwrap();
    decoded.as_bytes() == data
}
