pub mod error;
pub mod thunk;
pub mod seq;
pub mod index;
pub mod append;
pub mod split;
pub mod transform;
pub mod partition;
pub mod materialize;
pub mod zip;
pub mod generate;
pub mod range;
pub mod random;
pub mod matches;
pub mod value;
pub mod display;

#[cfg(test)]
mod proptest;

pub use error::{Result,SeqError};
pub use seq::{Eager,Iter,Len,Node,Seq};
pub use index::AsIndex;
pub use append::{Flatten,Part};
pub use split::SplitWith;
pub use transform::Truthy;
pub use materialize::Purge;
pub use zip::{combine,zip,zip2,zip_with};
pub use generate::{cycle,iterate,iterate2,recurrence,repeat};
pub use range::{range,range_step,range_to};
pub use random::{random_integers,random_integers_from,IntSource};
pub use matches::{matches,Match,Matcher};
pub use value::Value;
pub use display::PREVIEW;

pub mod trait_methods {
  pub use crate::index::AsIndex as _;
  pub use crate::append::Flatten as _;
  pub use crate::transform::Truthy as _;
  pub use crate::materialize::Purge as _;
  pub use crate::random::IntSource as _;
  pub use crate::matches::Matcher as _;
}

/// An eager sequence of the given elements.
#[macro_export]
macro_rules! list {
  () => { $crate::Seq::empty() };
  ($($x:expr),+ $(,)?) => { $crate::Seq::from_vec(vec![$($x),+]) };
}
