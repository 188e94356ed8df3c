//! Primitive (codec-independent) encoding and decoding of a single value.
//! Used both for a top-level field's raw body (before its codec is applied)
//! and for each element of a generically-encoded list, since a list
//! element's body is primitive-encoded exactly as a top-level primitive.

use crate::error::Error;
use crate::list;
use crate::value::Value;
use crate::wire::{self, Type};

/// Encodes `value` as the raw (pre-codec) body for a field or list element of
/// declared type `ty`. Returns an error if `value`'s runtime kind disagrees
/// with `ty`.
pub fn encode_value(ty: Type, value: &Value, field: &str) -> Result<Vec<u8>, Error> {
  match (ty, value) {
    (Type::Int, Value::Int(v)) => {
      let mut out = Vec::with_capacity(8);
      wire::push_i64(&mut out, *v);
      Ok(out)
    }
    (Type::Float, Value::Float(v)) => {
      let mut out = Vec::with_capacity(8);
      wire::push_f64(&mut out, *v);
      Ok(out)
    }
    (Type::Bool, Value::Bool(v)) => Ok(vec![if *v { 0x01 } else { 0x00 }]),
    (Type::String, Value::Str(s)) => {
      let bytes = s.as_bytes();
      let len: u32 = bytes.len().try_into().map_err(|_| Error::ValueTooLarge {
        field: field.to_string(),
        len: bytes.len(),
      })?;
      let mut out = Vec::with_capacity(4 + bytes.len());
      wire::push_u32(&mut out, len);
      out.extend_from_slice(bytes);
      Ok(out)
    }
    (Type::List, Value::List(items)) => list::encode_list(items, field),
    (expected, found) => Err(Error::TypeMismatch {
      field: field.to_string(),
      expected: expected.name(),
      found: found.typename(),
    }),
  }
}

/// Decodes a raw (post-codec, pre-interpretation) body of declared type `ty`
/// back into a [`Value`].
pub fn decode_value(ty: Type, raw: &[u8], field: &str) -> Result<Value, Error> {
  match ty {
    Type::Int => {
      let v = wire::read_i64(raw).ok_or_else(|| Error::Truncated {
        field: field.to_string(),
      })?;
      Ok(Value::Int(v))
    }
    Type::Float => {
      let v = wire::read_f64(raw).ok_or_else(|| Error::Truncated {
        field: field.to_string(),
      })?;
      Ok(Value::Float(v))
    }
    Type::Bool => {
      let byte = *raw.first().ok_or_else(|| Error::Truncated {
        field: field.to_string(),
      })?;
      Ok(Value::Bool(byte != 0x00))
    }
    Type::String => {
      let (len, rest) = wire::read_u32(raw).ok_or_else(|| Error::Truncated {
        field: field.to_string(),
      })?;
      let len = len as usize;
      if rest.len() < len {
        return Err(Error::Truncated {
          field: field.to_string(),
        });
      }
      let s = std::str::from_utf8(&rest[..len])
        .map_err(|source| Error::InvalidUtf8 {
          field: field.to_string(),
          source,
        })?
        .to_string();
      Ok(Value::Str(s))
    }
    Type::List => {
      let items = list::decode_list(raw, field)?;
      Ok(Value::List(items))
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn int_roundtrip() {
    let raw = encode_value(Type::Int, &Value::Int(-7), "x").unwrap();
    assert_eq!(decode_value(Type::Int, &raw, "x").unwrap(), Value::Int(-7));
  }

  #[test]
  fn bool_true_is_single_byte_01() {
    let raw = encode_value(Type::Bool, &Value::Bool(true), "b").unwrap();
    assert_eq!(raw, vec![0x01]);
  }

  #[test]
  fn bool_false_is_single_byte_00() {
    let raw = encode_value(Type::Bool, &Value::Bool(false), "b").unwrap();
    assert_eq!(raw, vec![0x00]);
  }

  #[test]
  fn empty_string_roundtrip() {
    let raw = encode_value(Type::String, &Value::Str(String::new()), "s").unwrap();
    assert_eq!(raw, vec![0x00, 0x00, 0x00, 0x00]);
    assert_eq!(
      decode_value(Type::String, &raw, "s").unwrap(),
      Value::Str(String::new())
    );
  }

  #[test]
  fn type_mismatch_is_reported_with_field_name() {
    let err = encode_value(Type::Int, &Value::Str("no".into()), "age").unwrap_err();
    match err {
      Error::TypeMismatch { field, expected, found } => {
        assert_eq!(field, "age");
        assert_eq!(expected, "int");
        assert_eq!(found, "string");
      }
      other => panic!("unexpected error: {other:?}"),
    }
  }
}
