//! Wire format constants and the primitive byte encodings defined by the
//! format. All multi-byte integers on the wire are big-endian.

use crate::error::Error;

/// The four magic bytes that open every encoded record.
pub const MAGIC: [u8; 4] = *b"AXSR";

/// Stable numeric type tags. Changing these is a wire break.
pub const TAG_INT: u16 = 1;
pub const TAG_FLOAT: u16 = 2;
pub const TAG_STRING: u16 = 3;
pub const TAG_BOOL: u16 = 4;
pub const TAG_LIST: u16 = 5;

/// Stable numeric codec tags. Changing these is a wire break.
pub const CODEC_NONE: u8 = 0;
pub const CODEC_ZSTD: u8 = 1;
pub const CODEC_BROTLI: u8 = 2;

/// List-body encoding discriminators.
pub const LIST_GENERIC: u8 = 0x00;
pub const LIST_PACKED_INT: u8 = 0x01;
pub const LIST_PACKED_FLOAT: u8 = 0x02;

/// A primitive type tag, as it appears on the wire and in a [`crate::schema::Field`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
  Int,
  Float,
  Bool,
  String,
  List,
}

impl Type {
  pub fn tag(self) -> u16 {
    match self {
      Type::Int => TAG_INT,
      Type::Float => TAG_FLOAT,
      Type::String => TAG_STRING,
      Type::Bool => TAG_BOOL,
      Type::List => TAG_LIST,
    }
  }

  pub fn from_tag(tag: u16) -> Result<Type, Error> {
    match tag {
      TAG_INT => Ok(Type::Int),
      TAG_FLOAT => Ok(Type::Float),
      TAG_STRING => Ok(Type::String),
      TAG_BOOL => Ok(Type::Bool),
      TAG_LIST => Ok(Type::List),
      other => Err(Error::UnknownType(other)),
    }
  }

  pub fn name(self) -> &'static str {
    match self {
      Type::Int => "int",
      Type::Float => "float",
      Type::Bool => "bool",
      Type::String => "string",
      Type::List => "list",
    }
  }
}

/// A compression codec tag, as it appears on a [`crate::schema::Field`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Codec {
  #[default]
  None,
  Zstd,
  Brotli,
}

impl Codec {
  pub fn tag(self) -> u8 {
    match self {
      Codec::None => CODEC_NONE,
      Codec::Zstd => CODEC_ZSTD,
      Codec::Brotli => CODEC_BROTLI,
    }
  }

  pub fn from_tag(tag: u8) -> Result<Codec, Error> {
    match tag {
      CODEC_NONE => Ok(Codec::None),
      CODEC_ZSTD => Ok(Codec::Zstd),
      CODEC_BROTLI => Ok(Codec::Brotli),
      other => Err(Error::UnknownCodec(other)),
    }
  }
}

/// Appends a big-endian `u16` to `out`.
#[inline]
pub fn push_u16(out: &mut Vec<u8>, v: u16) {
  out.extend_from_slice(&v.to_be_bytes());
}

/// Appends a big-endian `u32` to `out`.
#[inline]
pub fn push_u32(out: &mut Vec<u8>, v: u32) {
  out.extend_from_slice(&v.to_be_bytes());
}

/// Appends a big-endian `i64` to `out`.
#[inline]
pub fn push_i64(out: &mut Vec<u8>, v: i64) {
  out.extend_from_slice(&v.to_be_bytes());
}

/// Appends a big-endian `f64` to `out`.
#[inline]
pub fn push_f64(out: &mut Vec<u8>, v: f64) {
  out.extend_from_slice(&v.to_be_bytes());
}

/// Reads a big-endian `u16` from the front of `buf`, returning the value and
/// the remaining slice.
pub fn read_u16(buf: &[u8]) -> Option<(u16, &[u8])> {
  if buf.len() < 2 {
    return None;
  }
  let (head, tail) = buf.split_at(2);
  Some((u16::from_be_bytes(head.try_into().unwrap()), tail))
}

/// Reads a big-endian `u32` from the front of `buf`, returning the value and
/// the remaining slice.
pub fn read_u32(buf: &[u8]) -> Option<(u32, &[u8])> {
  if buf.len() < 4 {
    return None;
  }
  let (head, tail) = buf.split_at(4);
  Some((u32::from_be_bytes(head.try_into().unwrap()), tail))
}

/// Reads a big-endian `i64` from a slice that must be exactly 8 bytes long.
pub fn read_i64(buf: &[u8]) -> Option<i64> {
  let arr: [u8; 8] = buf.try_into().ok()?;
  Some(i64::from_be_bytes(arr))
}

/// Reads a big-endian `f64` from a slice that must be exactly 8 bytes long.
pub fn read_f64(buf: &[u8]) -> Option<f64> {
  let arr: [u8; 8] = buf.try_into().ok()?;
  Some(f64::from_be_bytes(arr))
}
