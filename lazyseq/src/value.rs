use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use crate::append::{Flatten,Part};
use crate::error::{Result,SeqError};
use crate::index::AsIndex;
use crate::materialize::Purge;
use crate::seq::Seq;
use crate::transform::Truthy;

/// A dynamically typed element, for sequences that mix atoms, lists
/// and nested sequences.
#[derive(Clone,Debug)]
pub enum Value {
  Nil,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(Rc<str>),
  List(Vec<Value>),
  Seq(Seq<Value>)
}

impl Value {
  pub fn str(s: &str) -> Self { Value::Str(s.into()) }

  pub fn is_nil(&self) -> bool { matches!(self, Value::Nil) }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      _ => None
    }
  }
}

/// Integers and floats compare numerically. Nested sequences are equal
/// only when they are the same sequence.
impl PartialEq for Value {
  fn eq(&self, other: &Value) -> bool {
    use Value::*;
    match (self, other) {
      (Nil, Nil)               => true,
      (Bool(a), Bool(b))       => a == b,
      (Int(a), Int(b))         => a == b,
      (Float(a), Float(b))     => a == b,
      (Int(a), Float(b)) |
        (Float(b), Int(a))     => *a as f64 == *b,
      (Str(a), Str(b))         => a == b,
      (List(a), List(b))       => a == b,
      (Seq(a), Seq(b))         => a.ptr_eq(b),
      _                        => false
    }
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<i32> for Value {
  fn from(n: i32) -> Self { Value::Int(n.into()) }
}

impl From<i64> for Value {
  fn from(n: i64) -> Self { Value::Int(n) }
}

impl From<f64> for Value {
  fn from(x: f64) -> Self { Value::Float(x) }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self { Value::str(s) }
}

impl From<String> for Value {
  fn from(s: String) -> Self { Value::Str(s.into()) }
}

impl From<Vec<Value>> for Value {
  fn from(v: Vec<Value>) -> Self { Value::List(v) }
}

impl From<Seq<Value>> for Value {
  fn from(s: Seq<Value>) -> Self { Value::Seq(s) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(x: Option<T>) -> Self { x.map_or(Value::Nil, Into::into) }
}


impl Truthy for Value {
  fn truthy(&self) -> bool {
    match self {
      Value::Nil      => false,
      Value::Bool(b)  => *b,
      Value::Int(n)   => n.truthy(),
      Value::Float(x) => x.truthy(),
      Value::Str(s)   => !s.is_empty(),
      Value::List(_) | Value::Seq(_) => true
    }
  }
}

impl Flatten for Value {
  type Atom = Value;
  fn spread(&self) -> Part<Value> {
    match self {
      Value::List(v) => Part::Many(v.clone()),
      Value::Seq(s)  => Part::Seq(s.clone()),
      x              => Part::One(x.clone())
    }
  }
}

impl Purge for Value {
  type Output = Value;
  fn purge(&self) -> Result<Value> {
    match self {
      Value::List(v) => Ok(Value::List(v.purge()?)),
      Value::Seq(s)  => Ok(Value::List(s.purge()?)),
      x              => Ok(x.clone())
    }
  }
}

impl AsIndex for Value {
  fn as_index(&self) -> Result<usize> {
    match self {
      Value::Int(n)   => n.as_index(),
      Value::Float(x) => x.as_index(),
      Value::Str(s)   => s.as_index(),
      other => Err(SeqError::type_error(format!("expected an integer, got {}", other)))
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Value::Nil      => write!(f, "nil"),
      Value::Bool(b)  => write!(f, "{}", b),
      Value::Int(n)   => write!(f, "{}", n),
      Value::Float(x) => write!(f, "{}", x),
      Value::Str(s)   => write!(f, "{:?}", s),
      Value::List(v)  => {
        write!(f, "[")?;
        for (i, x) in v.iter().enumerate() {
          if i > 0 { write!(f, ", ")? }
          write!(f, "{}", x)?
        }
        write!(f, "]")
      }
      Value::Seq(s)   => write!(f, "{}", s)
    }
  }
}


impl Seq<Value> {

  /// Build an object from `[value, key]` pairs, as produced by zipping
  /// values with their names. Keys must be strings or integers.
  pub fn to_object(&self) -> Result<BTreeMap<String, Value>> {
    let mut obj = BTreeMap::new();
    for entry in self.iter_finite("to_object") {
      let pair = match entry?.purge()? {
        Value::List(pair) if pair.len() == 2 => pair,
        other => return Err(SeqError::type_error(
                   format!("expected a [value, key] pair, got {}", other)))
      };
      let key = match &pair[1] {
        Value::Str(s) => s.to_string(),
        Value::Int(n) => n.to_string(),
        other => return Err(SeqError::type_error(
                   format!("object keys must be strings, got {}", other)))
      };
      obj.insert(key, pair[0].clone());
    }
    Ok(obj)
  }
}
