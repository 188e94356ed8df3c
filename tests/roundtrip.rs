//! Integration tests exercising the public API end to end: building a
//! schema, encoding/decoding through both codecs, and checking they agree.

use axsr::{Codec, Field, GenericCodec, Record, Schema, Specializer, Type, Value};

fn user_schema() -> Schema {
  Schema::new(
    "User",
    3,
    vec![
      Field::new("id", Type::Int),
      Field::new("score", Type::Float),
      Field::new("active", Type::Bool),
      Field::new("name", Type::String).with_codec(Codec::Zstd),
      Field::new("tags", Type::List),
      Field::new("nickname", Type::String).optional(),
    ],
  )
  .unwrap()
}

#[test]
fn generic_roundtrip_preserves_every_field() {
  let schema = user_schema();
  let record = Record::new()
    .with("id", 42i64)
    .with("score", 98.6f64)
    .with("active", true)
    .with("name", "alice")
    .with("tags", vec!["admin", "beta"]);

  let codec = GenericCodec::new();
  let bytes = codec.encode(&schema, &record).unwrap();
  let decoded = codec.decode(&schema, &bytes).unwrap();
  assert_eq!(decoded, record);
}

#[test]
fn generic_and_specialized_encoders_agree() {
  let schema = user_schema();
  let record = Record::new()
    .with("id", -1i64)
    .with("score", 0.0f64)
    .with("active", false)
    .with("name", "bob")
    .with("tags", vec![1i64, 2, 3])
    .with("nickname", "bobby");

  let generic_bytes = GenericCodec::new().encode(&schema, &record).unwrap();
  let specialized_bytes = Specializer::new().specialize(&schema).encode(&record).unwrap();
  assert_eq!(generic_bytes, specialized_bytes);

  let decoded = GenericCodec::new().decode(&schema, &specialized_bytes).unwrap();
  assert_eq!(decoded, record);
}

#[test]
fn schema_rejects_duplicate_field_names() {
  let result = Schema::new(
    "Bad",
    1,
    vec![Field::new("x", Type::Int), Field::new("x", Type::Float)],
  );
  assert!(result.is_err());
}

#[test]
fn missing_required_field_is_rejected_by_both_encoders() {
  let schema = user_schema();
  let incomplete = Record::new().with("id", 1i64);

  assert!(GenericCodec::new().encode(&schema, &incomplete).is_err());
  assert!(Specializer::new()
    .specialize(&schema)
    .encode(&incomplete)
    .is_err());
}

#[test]
fn fixed_width_fields_roundtrip_exactly() {
  let schema = Schema::new(
    "Point",
    1,
    vec![Field::new("x", Type::Int), Field::new("y", Type::Int)],
  )
  .unwrap();
  let record = Record::new().with("x", 3i64).with("y", 4i64);
  let bytes = GenericCodec::new().encode(&schema, &record).unwrap();
  let decoded = GenericCodec::new().decode(&schema, &bytes).unwrap();
  assert_eq!(decoded.get("x"), Some(&Value::Int(3)));
  assert_eq!(decoded.get("y"), Some(&Value::Int(4)));
}

mod proptests {
  use super::*;
  use proptest::prelude::*;

  fn arb_schema_and_record() -> impl Strategy<Value = (Schema, Record)> {
    (
      any::<i64>(),
      any::<f64>(),
      any::<bool>(),
      "[a-z]{0,40}",
      prop::collection::vec(any::<i64>(), 0..8),
    )
      .prop_map(|(id, score, active, name, tags)| {
        let schema = Schema::new(
          "Prop",
          1,
          vec![
            Field::new("id", Type::Int),
            Field::new("score", Type::Float),
            Field::new("active", Type::Bool),
            Field::new("name", Type::String),
            Field::new("tags", Type::List),
          ],
        )
        .unwrap();
        let record = Record::new()
          .with("id", id)
          .with("score", score)
          .with("active", active)
          .with("name", name)
          .with("tags", tags);
        (schema, record)
      })
  }

  proptest! {
    #[test]
    fn prop_generic_roundtrip((schema, record) in arb_schema_and_record()) {
      let codec = GenericCodec::new();
      let bytes = codec.encode(&schema, &record).unwrap();
      let decoded = codec.decode(&schema, &bytes).unwrap();
      prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_generic_and_specialized_agree((schema, record) in arb_schema_and_record()) {
      let generic = GenericCodec::new().encode(&schema, &record).unwrap();
      let specialized = Specializer::new().specialize(&schema).encode(&record).unwrap();
      prop_assert_eq!(generic, specialized);
    }
  }
}
