use std::cell::RefCell;
use std::rc::Rc;
use rand::Rng;
use crate::error::{Result,SeqError};
use crate::seq::Seq;

/// Where random integers come from.
pub trait IntSource {
  /// A value in `[low, high]`.
  fn next_int(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng> IntSource for R {
  fn next_int(&mut self, low: i64, high: i64) -> i64 { self.gen_range(low ..= high) }
}

/// Endless integers in `[low, high]` from the thread-local generator.
pub fn random_integers(low: i64, high: i64) -> Result<Seq<i64>> {
  random_integers_from(rand::thread_rng(), low, high)
}

/// Endless integers in `[low, high]` from `source`, which is asked once
/// for each element as the element is reached.
pub fn random_integers_from<S>(source: S, low: i64, high: i64) -> Result<Seq<i64>>
  where S: IntSource + 'static
{
  if low > high {
    return Err(SeqError::type_error(format!("empty range [{}, {}]", low, high)))
  }
  Ok(draw(Rc::new(RefCell::new(source)), low, high))
}

fn draw(source: Rc<RefCell<dyn IntSource>>, low: i64, high: i64) -> Seq<i64> {
  let x = source.borrow_mut().next_int(low, high);
  tracing::trace!(x, low, high, "drew random integer");
  Seq::infinite(x, move || Ok(draw(source.clone(), low, high)))
}
