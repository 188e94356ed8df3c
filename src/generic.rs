//! The generic codec: interprets a schema at encode/decode time.
//! This is the only path that serves decode; the specialized encoder
//! (`crate::jit`) never does.

use crate::codec;
use crate::error::Error;
use crate::frame;
use crate::primitive;
use crate::schema::Schema;
use crate::value::{Record, Value};
use crate::wire::{self, Type};

/// The generic schema-interpreting codec.
///
/// Holds no per-instance state beyond the free functions in [`crate::wire`]
/// and [`crate::primitive`], so a `GenericCodec` is a zero-sized handle,
/// trivially `Send + Sync` and shareable across schemas and threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericCodec;

impl GenericCodec {
  pub fn new() -> Self {
    GenericCodec
  }

  /// Encodes `record` against `schema`.
  pub fn encode(&self, schema: &Schema, record: &Record) -> Result<Vec<u8>, Error> {
    log::trace!(
      "generic encode: schema '{}' ({} fields)",
      schema.name(),
      schema.fields().len()
    );

    let mut out = Vec::new();
    out.extend_from_slice(&wire::MAGIC);
    wire::push_u16(&mut out, schema.version());

    for field in schema.fields() {
      frame::encode_field(&mut out, field, record.get(&field.name))?;
    }

    Ok(out)
  }

  /// Decodes `bytes` against `schema`.
  pub fn decode(&self, schema: &Schema, bytes: &[u8]) -> Result<Record, Error> {
    log::trace!(
      "generic decode: schema '{}' ({} fields, {} bytes)",
      schema.name(),
      schema.fields().len(),
      bytes.len()
    );

    if bytes.len() < 4 || bytes[..4] != wire::MAGIC {
      return Err(Error::BadMagic);
    }
    let (version, mut rest) = wire::read_u16(&bytes[4..]).ok_or(Error::BadMagic)?;
    if version != schema.version() {
      log::debug!(
        "schema '{}': wire version {} differs from schema version {}, continuing",
        schema.name(),
        version,
        schema.version()
      );
    }

    let mut record = Record::new();
    let fields = schema.fields();
    for (i, field) in fields.iter().enumerate() {
      if rest.is_empty() {
        if fields[i..].iter().all(|f| f.optional) {
          break;
        }
        return Err(Error::Truncated {
          field: field.name.clone(),
        });
      }

      let (tag, r) = wire::read_u16(rest).ok_or_else(|| Error::Truncated {
        field: field.name.clone(),
      })?;
      let (len, r) = wire::read_u32(r).ok_or_else(|| Error::Truncated {
        field: field.name.clone(),
      })?;
      let len = len as usize;
      if r.len() < len {
        return Err(Error::Truncated {
          field: field.name.clone(),
        });
      }
      let (content, r) = r.split_at(len);
      rest = r;

      if len == 0 && field.optional {
        continue;
      }

      let wire_ty = Type::from_tag(tag)?;
      if wire_ty != field.ty {
        return Err(Error::TypeMismatch {
          field: field.name.clone(),
          expected: field.ty.name(),
          found: wire_ty.name(),
        });
      }

      let compressor = codec::for_codec(field.codec);
      let raw = compressor
        .decompress(content)
        .map_err(|source| Error::CodecFailure {
          field: field.name.clone(),
          source,
        })?;
      let value = primitive::decode_value(field.ty, &raw, &field.name)?;
      record.insert(field.name.clone(), value);
    }

    Ok(record)
  }
}
