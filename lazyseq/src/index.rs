use crate::error::{Result,SeqError};
use crate::seq::Seq;

/// Things that may be used as a position or a count.
/// Negative, fractional and non-numeric values are rejected with
/// `SeqError::Type`.
pub trait AsIndex {
  fn as_index(&self) -> Result<usize>;
}

macro_rules! unsigned_index {
  ($($t:ty),*) => { $(
    impl AsIndex for $t {
      fn as_index(&self) -> Result<usize> {
        usize::try_from(*self).map_err(|_|
          SeqError::type_error(format!("index {} does not fit in usize", self)))
      }
    }
  )* }
}

macro_rules! signed_index {
  ($($t:ty),*) => { $(
    impl AsIndex for $t {
      fn as_index(&self) -> Result<usize> {
        usize::try_from(*self).map_err(|_|
          SeqError::type_error(
            format!("expected a non-negative integer, got {}", self)))
      }
    }
  )* }
}

macro_rules! float_index {
  ($($t:ty),*) => { $(
    impl AsIndex for $t {
      fn as_index(&self) -> Result<usize> {
        let x = *self;
        if !x.is_finite() || x < 0.0 || x.fract() != 0.0 || x > usize::MAX as $t {
          return Err(SeqError::type_error(
                   format!("expected a non-negative integer, got {}", x)))
        }
        Ok(x as usize)
      }
    }
  )* }
}

unsigned_index!(u8, u16, u32, u64, u128, usize);
signed_index!(i8, i16, i32, i64, i128, isize);
float_index!(f32, f64);

impl AsIndex for str {
  fn as_index(&self) -> Result<usize> {
    Err(SeqError::type_error(format!("expected an integer, got {:?}", self)))
  }
}

impl AsIndex for String {
  fn as_index(&self) -> Result<usize> { self.as_str().as_index() }
}

impl<T: AsIndex + ?Sized> AsIndex for &T {
  fn as_index(&self) -> Result<usize> { (**self).as_index() }
}


impl<T: Clone + 'static> Seq<T> {

  /// The element at position `i`, reached by walking `i` cells.
  pub fn nth<I: AsIndex>(&self, i: I) -> Result<T> {
    let index = i.as_index()?;

    if let Seq::Eager(e) = self {
      return e.get(index)
              .cloned()
              .ok_or(SeqError::Range { index, length: e.len() })
    }

    let mut cur = self.clone();
    for walked in 0 .. index {
      if cur.is_empty() {
        return Err(SeqError::Range { index, length: walked })
      }
      cur = cur.rest()?;
    }
    match cur.first() {
      Ok(x)  => Ok(x.clone()),
      Err(_) => Err(SeqError::Range { index, length: index })
    }
  }
}
