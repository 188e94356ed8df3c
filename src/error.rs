//! The error taxonomy surfaced by every fallible operation in this crate.
//!
//! Every variant here is fatal for the operation that
//! raised it: no partial record is returned on decode, no partial buffer is
//! returned on encode.

use thiserror::Error;

/// A placeholder field label used when an error cannot be attributed to a
/// named field, e.g. inside a generically-encoded list element.
pub const LIST_ITEM: &str = "<list item>";

#[derive(Error, Debug)]
pub enum Error {
  /// Schema construction rejected the field list: a duplicate name, or an
  /// unrecognized type/codec tag.
  #[error("schema invalid: {0}")]
  SchemaInvalid(String),

  /// A required field was absent from the record being encoded.
  #[error("missing required field: {0}")]
  MissingField(String),

  /// The runtime value supplied for a field doesn't match its declared type.
  #[error("type mismatch for field {field}: expected {expected}, found {found}")]
  TypeMismatch {
    field: String,
    expected: &'static str,
    found: &'static str,
  },

  /// A string or list payload exceeded the `u32` length range the wire
  /// format can express.
  #[error("value too large for field {field}: {len} bytes exceeds u32 range")]
  ValueTooLarge { field: String, len: usize },

  /// The first four bytes of a decoded buffer were not `AXSR`.
  #[error("bad magic bytes")]
  BadMagic,

  /// The buffer ended before a required field (or a list/frame header)
  /// could be fully consumed.
  #[error("truncated buffer while decoding field {field}")]
  Truncated { field: String },

  /// A type tag read from the wire (or requested from a schema) is not one
  /// of the stable numeric constants this format defines.
  #[error("unknown type tag {0}")]
  UnknownType(u16),

  /// A codec tag read from the wire (or requested from a schema) is not
  /// one of the stable numeric constants this format defines.
  #[error("unknown codec tag {0}")]
  UnknownCodec(u8),

  /// A `STRING` field's decompressed body was not valid UTF-8.
  #[error("invalid utf-8 in field {field}: {source}")]
  InvalidUtf8 {
    field: String,
    #[source]
    source: std::str::Utf8Error,
  },

  /// A list body's count/discriminator/bytes were internally inconsistent.
  #[error("malformed list: {0}")]
  ListMalformed(String),

  /// The compressor or decompressor for a field's codec rejected its input.
  #[error("codec failure on field {field}: {source}")]
  CodecFailure {
    field: String,
    #[source]
    source: std::io::Error,
  },
}
