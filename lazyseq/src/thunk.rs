use std::cell::RefCell;
use crate::error::{Result,SeqError};

enum State<T> {
  Unforced(Box<dyn Fn() -> Result<T>>),
  Forcing,
  Forced(T)
}

/// A deferred computation whose first successful result is cached.
/// A failed computation is not cached, so forcing again retries it.
pub struct Thunk<T> {
  state: RefCell<State<T>>
}

impl<T> Thunk<T> {

  pub fn new<F>(f: F) -> Self
    where F: Fn() -> Result<T> + 'static
  {
    Thunk { state: RefCell::new(State::Unforced(Box::new(f))) }
  }

  pub fn ready(value: T) -> Self {
    Thunk { state: RefCell::new(State::Forced(value)) }
  }

  pub fn is_forced(&self) -> bool {
    matches!(&*self.state.borrow(), State::Forced(_))
  }

  /// Move the cached value out, leaving the thunk unusable.
  /// Only used while tearing down chains of cells.
  pub(crate) fn take(&mut self) -> Option<T> {
    match std::mem::replace(self.state.get_mut(), State::Forcing) {
      State::Forced(v) => Some(v),
      _                => None
    }
  }
}

impl<T: Clone> Thunk<T> {

  pub fn force(&self) -> Result<T> {
    if let State::Forced(v) = &*self.state.borrow() { return Ok(v.clone()) }

    let f = {
      let mut st = self.state.borrow_mut();
      match std::mem::replace(&mut *st, State::Forcing) {
        State::Unforced(f) => f,
        State::Forcing     => return Err(SeqError::Reentrant),
        State::Forced(v)   => { *st = State::Forced(v.clone()); return Ok(v) }
      }
    };

    tracing::trace!("forcing suspension");
    match f() {
      Ok(v) => {
        *self.state.borrow_mut() = State::Forced(v.clone());
        Ok(v)
      }
      Err(e) => {
        tracing::trace!(error = %e, "suspension failed, keeping it unforced");
        *self.state.borrow_mut() = State::Unforced(f);
        Err(e)
      }
    }
  }
}
