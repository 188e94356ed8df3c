//! The schema model: a pure data description of a record's shape, validated
//! once at construction and immutable thereafter.
//!
//! Fields are kept in a `Vec` (not a sorted map) because this wire format's
//! field order is the *declared* order, not an alphabetical one.

use std::collections::HashSet;

use crate::error::Error;
use crate::wire::{Codec, Type};

/// A single named, typed, optionally-compressed slot in a [`Schema`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
  pub name: String,
  pub ty: Type,
  #[cfg_attr(feature = "serde", serde(default))]
  pub codec: Codec,
  #[cfg_attr(feature = "serde", serde(default))]
  pub optional: bool,
}

impl Field {
  /// Constructs a field with `codec = NONE` and `optional = false`.
  pub fn new(name: impl Into<String>, ty: Type) -> Self {
    Field {
      name: name.into(),
      ty,
      codec: Codec::None,
      optional: false,
    }
  }

  /// Returns this field with the given codec applied.
  pub fn with_codec(mut self, codec: Codec) -> Self {
    self.codec = codec;
    self
  }

  /// Returns this field marked optional.
  pub fn optional(mut self) -> Self {
    self.optional = true;
    self
  }
}

/// An ordered, named, versioned list of fields describing a record's shape.
///
/// Immutable once constructed: the validating constructor is the only way to
/// obtain a `Schema`, and no method mutates `fields` afterwards. This
/// immutability is what lets a `Schema` be shared freely across threads and
/// across many encode/decode calls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
  name: String,
  version: u16,
  fields: Vec<Field>,
}

impl Schema {
  /// Constructs a new schema, rejecting duplicate field names. Type and
  /// codec tags are already constrained to known variants by the `Type`/
  /// `Codec` enums, so the only remaining constructor-time check is name
  /// uniqueness.
  pub fn new(name: impl Into<String>, version: u16, fields: Vec<Field>) -> Result<Self, Error> {
    let name = name.into();
    let mut seen = HashSet::with_capacity(fields.len());
    for field in &fields {
      if !seen.insert(field.name.as_str()) {
        log::warn!(
          "rejecting schema '{}': duplicate field name '{}'",
          name,
          field.name
        );
        return Err(Error::SchemaInvalid(format!(
          "duplicate field name: {}",
          field.name
        )));
      }
    }
    log::debug!("validated schema '{}' ({} fields)", name, fields.len());
    Ok(Schema {
      name,
      version,
      fields,
    })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn version(&self) -> u16 {
    self.version
  }

  pub fn fields(&self) -> &[Field] {
    &self.fields
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn construction_preserves_declared_order() {
    let schema = Schema::new(
      "S",
      1,
      vec![
        Field::new("z", Type::Int),
        Field::new("a", Type::Int),
        Field::new("m", Type::Int),
      ],
    )
    .unwrap();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["z", "a", "m"]);
  }

  #[test]
  fn duplicate_field_name_is_rejected() {
    let err = Schema::new(
      "S",
      1,
      vec![Field::new("x", Type::Int), Field::new("x", Type::Bool)],
    )
    .unwrap_err();
    assert!(matches!(err, Error::SchemaInvalid(_)));
  }

  #[test]
  fn field_builder_defaults() {
    let f = Field::new("x", Type::Int);
    assert_eq!(f.codec, Codec::None);
    assert!(!f.optional);

    let f = Field::new("x", Type::String)
      .with_codec(Codec::Zstd)
      .optional();
    assert_eq!(f.codec, Codec::Zstd);
    assert!(f.optional);
  }
}
