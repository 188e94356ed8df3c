//! A dynamically-typed value and the record (field-name -> value mapping)
//! that an [`crate::schema::Schema`] is applied to.
//!
//! This is the dynamically-typed value representation for a record field,
//! since nested/compound list fields are part of this format.

use std::collections::HashMap;

/// A primitive or compound runtime value being encoded or produced by decode.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Int(i64),
  Float(f64),
  Bool(bool),
  Str(String),
  List(Vec<Value>),
}

impl Value {
  /// A textual description of the variant type; used in `TypeMismatch` errors.
  pub fn typename(&self) -> &'static str {
    match self {
      Value::Int(_) => "int",
      Value::Float(_) => "float",
      Value::Bool(_) => "bool",
      Value::Str(_) => "string",
      Value::List(_) => "list",
    }
  }
}

impl From<i64> for Value {
  fn from(v: i64) -> Self {
    Value::Int(v)
  }
}

impl From<f64> for Value {
  fn from(v: f64) -> Self {
    Value::Float(v)
  }
}

impl From<bool> for Value {
  fn from(v: bool) -> Self {
    Value::Bool(v)
  }
}

impl From<String> for Value {
  fn from(v: String) -> Self {
    Value::Str(v)
  }
}

impl From<&str> for Value {
  fn from(v: &str) -> Self {
    Value::Str(v.to_string())
  }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(v: Vec<T>) -> Self {
    Value::List(v.into_iter().map(Into::into).collect())
  }
}

/// A mapping from field name to value. Field lookup is by name only; the
/// wire format never carries field names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record(HashMap<String, Value>);

impl Record {
  pub fn new() -> Self {
    Record(HashMap::new())
  }

  pub fn get(&self, name: &str) -> Option<&Value> {
    self.0.get(name)
  }

  pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
    self.0.insert(name.into(), value.into());
    self
  }

  pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
    self.insert(name, value);
    self
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl FromIterator<(String, Value)> for Record {
  fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
    Record(iter.into_iter().collect())
  }
}
