//! Per-field frame encoding, shared by the generic codec and by every
//! non-merged field in the specialized encoder's emit plan: a compressed
//! primitive, a string, or a list always falls back to this per-field path.
//!
//! Factoring this out of `GenericCodec::encode` is what lets
//! `SpecializedEncoder::encode` reuse it verbatim for `STRING`, `LIST`, and
//! any codec-compressed primitive, which is what makes the encoder
//! equivalence property hold trivially for everything outside the merged
//! fixed-width run.

use crate::codec;
use crate::error::Error;
use crate::primitive;
use crate::schema::Field;
use crate::value::Value;
use crate::wire;

/// Encodes one field's frame (`type_tag | length | body`) and appends it to
/// `out`. `value` is `None` when the field is absent from the record.
pub fn encode_field(out: &mut Vec<u8>, field: &Field, value: Option<&Value>) -> Result<(), Error> {
  let encoded = match value {
    None if field.optional => Vec::new(),
    None => return Err(Error::MissingField(field.name.clone())),
    Some(value) => {
      let raw = primitive::encode_value(field.ty, value, &field.name)?;
      let compressor = codec::for_codec(field.codec);
      compressor
        .compress(&raw)
        .map_err(|source| Error::CodecFailure {
          field: field.name.clone(),
          source,
        })?
    }
  };

  let len: u32 = encoded
    .len()
    .try_into()
    .map_err(|_| Error::ValueTooLarge {
      field: field.name.clone(),
      len: encoded.len(),
    })?;
  wire::push_u16(out, field.ty.tag());
  wire::push_u32(out, len);
  out.extend_from_slice(&encoded);
  Ok(())
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::wire::Type;

  #[test]
  fn missing_optional_field_emits_zero_length_frame() {
    let field = Field::new("x", Type::Int).optional();
    let mut out = Vec::new();
    encode_field(&mut out, &field, None).unwrap();
    assert_eq!(&out[2..6], &[0x00, 0x00, 0x00, 0x00]);
  }

  #[test]
  fn missing_required_field_errors() {
    let field = Field::new("x", Type::Int);
    let mut out = Vec::new();
    let err = encode_field(&mut out, &field, None).unwrap_err();
    assert!(matches!(err, Error::MissingField(f) if f == "x"));
  }
}
