//! Schema-driven binary serialization with per-field compression and a
//! specialized encoder that fuses fixed-width fields into one contiguous
//! write.
//!
//! A [`Schema`] describes a record's shape: an ordered list of named,
//! typed, optionally-compressed, optionally-absent [`Field`]s. Encoding a
//! [`Record`] against a `Schema` produces a self-describing byte stream
//! (magic, version, then one length-prefixed frame per field); decoding
//! walks the same frames back into a `Record`.
//!
//! Two encoders exist and always agree on their output:
//!
//! - [`GenericCodec`] interprets the schema at call time. It is the only
//!   path that can decode.
//! - [`Specializer`] compiles a schema once into a [`SpecializedEncoder`]
//!   that packs adjacent fixed-width fields into a single write, caching
//!   the result per schema name.
//!
//! ```
//! use axsr::{Field, Record, Schema, Type, GenericCodec};
//!
//! let schema = Schema::new("User", 1, vec![
//!     Field::new("id", Type::Int),
//!     Field::new("name", Type::String),
//! ]).unwrap();
//!
//! let record = Record::new().with("id", 7i64).with("name", "ada");
//! let codec = GenericCodec::new();
//! let bytes = codec.encode(&schema, &record).unwrap();
//! let decoded = codec.decode(&schema, &bytes).unwrap();
//! assert_eq!(decoded, record);
//! ```

mod codec;
mod error;
mod frame;
mod generic;
mod jit;
mod list;
mod primitive;
mod schema;
mod value;
mod wire;

pub use error::Error;
pub use generic::GenericCodec;
pub use jit::{SpecializedEncoder, Specializer};
pub use schema::{Field, Schema};
pub use value::{Record, Value};
pub use wire::{Codec, Type};
