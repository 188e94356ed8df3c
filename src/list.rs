//! The list sub-format, shared by the generic codec and the specialized
//! encoder.
//!
//! A list body is `count: u32 | discriminator: u8 | payload`. The encode
//! heuristic is a closed rule: empty lists and heterogeneous/non-numeric
//! lists use the generic (per-item-framed) encoding; homogeneous integer
//! lists and homogeneous float lists use the packed encodings. `Value::Bool`
//! is matched before `Value::Int` during item-kind inference so that a list
//! of booleans is never folded into the packed-integer encoding, guarding
//! against the ambiguity that a bool-as-int runtime representation would
//! otherwise create, even though Rust's `Value` enum makes that ambiguity
//! impossible in the first place.

use crate::error::{self, Error};
use crate::primitive;
use crate::value::Value;
use crate::wire::{self, Type, LIST_GENERIC, LIST_PACKED_FLOAT, LIST_PACKED_INT};

/// Encodes `items` as a list body.
pub fn encode_list(items: &[Value], field: &str) -> Result<Vec<u8>, Error> {
  let count: u32 = items.len().try_into().map_err(|_| Error::ValueTooLarge {
    field: field.to_string(),
    len: items.len(),
  })?;

  let mut out = Vec::new();
  wire::push_u32(&mut out, count);

  if items.is_empty() {
    out.push(LIST_GENERIC);
    return Ok(out);
  }

  if items.iter().all(|v| matches!(v, Value::Int(_))) {
    out.push(LIST_PACKED_INT);
    for item in items {
      let Value::Int(v) = item else { unreachable!() };
      wire::push_i64(&mut out, *v);
    }
    return Ok(out);
  }

  if items.iter().all(|v| matches!(v, Value::Float(_))) {
    out.push(LIST_PACKED_FLOAT);
    for item in items {
      let Value::Float(v) = item else { unreachable!() };
      wire::push_f64(&mut out, *v);
    }
    return Ok(out);
  }

  out.push(LIST_GENERIC);
  for item in items {
    let ty = type_of(item);
    let encoded = primitive::encode_value(ty, item, error::LIST_ITEM)?;
    let len: u32 = encoded.len().try_into().map_err(|_| Error::ValueTooLarge {
      field: error::LIST_ITEM.to_string(),
      len: encoded.len(),
    })?;
    wire::push_u16(&mut out, ty.tag());
    wire::push_u32(&mut out, len);
    out.extend_from_slice(&encoded);
  }
  Ok(out)
}

/// Decodes a list body back into its items.
pub fn decode_list(data: &[u8], field: &str) -> Result<Vec<Value>, Error> {
  let (count, rest) = wire::read_u32(data).ok_or_else(|| Error::ListMalformed(
    format!("{field}: missing count"),
  ))?;
  let count = count as usize;

  let (discriminator, mut rest) = rest.split_first().ok_or_else(|| {
    Error::ListMalformed(format!("{field}: missing discriminator"))
  })?;

  match *discriminator {
    LIST_PACKED_INT => {
      let need = count
        .checked_mul(8)
        .ok_or_else(|| Error::ListMalformed(format!("{field}: length overflow")))?;
      if rest.len() < need {
        return Err(Error::ListMalformed(format!(
          "{field}: packed int list truncated"
        )));
      }
      let mut items = Vec::with_capacity(count);
      for chunk in rest[..need].chunks_exact(8) {
        items.push(Value::Int(wire::read_i64(chunk).unwrap()));
      }
      Ok(items)
    }
    LIST_PACKED_FLOAT => {
      let need = count
        .checked_mul(8)
        .ok_or_else(|| Error::ListMalformed(format!("{field}: length overflow")))?;
      if rest.len() < need {
        return Err(Error::ListMalformed(format!(
          "{field}: packed float list truncated"
        )));
      }
      let mut items = Vec::with_capacity(count);
      for chunk in rest[..need].chunks_exact(8) {
        items.push(Value::Float(wire::read_f64(chunk).unwrap()));
      }
      Ok(items)
    }
    LIST_GENERIC => {
      let mut items = Vec::with_capacity(count);
      for _ in 0..count {
        let (tag, r) = wire::read_u16(rest).ok_or_else(|| {
          Error::ListMalformed(format!("{field}: truncated item frame"))
        })?;
        let ty = Type::from_tag(tag)?;
        let (len, r) = wire::read_u32(r).ok_or_else(|| {
          Error::ListMalformed(format!("{field}: truncated item frame"))
        })?;
        let len = len as usize;
        if r.len() < len {
          return Err(Error::ListMalformed(format!(
            "{field}: item body shorter than declared length"
          )));
        }
        let (body, r) = r.split_at(len);
        items.push(primitive::decode_value(ty, body, error::LIST_ITEM)?);
        rest = r;
      }
      Ok(items)
    }
    other => Err(Error::ListMalformed(format!(
      "{field}: unknown list discriminator {other:#04x}"
    ))),
  }
}

fn type_of(value: &Value) -> Type {
  match value {
    Value::Bool(_) => Type::Bool,
    Value::Int(_) => Type::Int,
    Value::Float(_) => Type::Float,
    Value::Str(_) => Type::String,
    Value::List(_) => Type::List,
  }
}
