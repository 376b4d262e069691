use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;
use crate::error::Result;
use crate::seq::Seq;

/// Everything here walks the whole sequence and therefore refuses
/// infinite streams, including a finite prefix that turns out to continue
/// into one.
impl<T: Clone + 'static> Seq<T> {

  pub fn to_vec(&self) -> Result<Vec<T>> { self.finite_vec("to_vec") }

  pub(crate) fn finite_vec(&self, op: &'static str) -> Result<Vec<T>> {
    if let Seq::Eager(e) = self { return Ok(e.as_slice().to_vec()) }
    self.iter_finite(op).collect()
  }

  pub fn reduce<A, F>(&self, mut f: F, seed: A) -> Result<A>
    where F: FnMut(A, &T) -> A
  {
    let mut acc = seed;
    for x in self.iter_finite("reduce") {
      acc = f(acc, &x?)
    }
    Ok(acc)
  }

  pub fn sort<F>(&self, cmp: F) -> Result<Seq<T>>
    where F: FnMut(&T, &T) -> Ordering
  {
    let mut xs = self.finite_vec("sort")?;
    xs.sort_by(cmp);
    Ok(Seq::from_vec(xs))
  }

  pub fn sort_by_key<K, F>(&self, key: F) -> Result<Seq<T>>
    where K: Ord, F: FnMut(&T) -> K
  {
    let mut xs = self.finite_vec("sort")?;
    xs.sort_by_key(key);
    Ok(Seq::from_vec(xs))
  }

  /// Realize every element and hand back the receiver.
  pub fn do_run(&self) -> Result<&Self> {
    for x in self.iter_finite("do_run") { x?; }
    Ok(self)
  }

  pub fn for_each<F>(&self, mut f: F) -> Result<()>
    where F: FnMut(&T)
  {
    for x in self.iter_finite("for_each") { f(&x?) }
    Ok(())
  }

  /// Call `f` with all the elements at once.
  pub fn apply<R, F>(&self, f: F) -> Result<R>
    where F: FnOnce(&[T]) -> R
  {
    let xs = self.finite_vec("apply")?;
    Ok(f(&xs))
  }
}


impl<V, K> Seq<(V, K)>
  where V: Clone + 'static, K: Clone + Eq + Hash + 'static
{
  /// Build a map from `(value, key)` pairs, the pair shape produced by
  /// `from_map`. Later keys win.
  pub fn to_map(&self) -> Result<HashMap<K, V>> {
    let mut map = HashMap::new();
    for pair in self.iter_finite("to_map") {
      let (v, k) = pair?;
      map.insert(k, v);
    }
    Ok(map)
  }
}

impl<V: Clone + 'static> Seq<V> {

  /// The `(value, key)` pairs of a map, in the map's iteration order.
  pub fn from_map<K, M>(map: M) -> Seq<(V, K)>
    where K: Clone + 'static, M: IntoIterator<Item = (K, V)>
  {
    map.into_iter().map(|(k, v)| (v, k)).collect()
  }
}


/// Deep materialization: nested sequences become vectors too.
pub trait Purge {
  type Output;
  fn purge(&self) -> Result<Self::Output>;
}

impl<T: Purge + Clone + 'static> Purge for Seq<T> {
  type Output = Vec<T::Output>;
  fn purge(&self) -> Result<Self::Output> {
    self.iter_finite("purge").map(|x| x?.purge()).collect()
  }
}

impl<T: Purge> Purge for Vec<T> {
  type Output = Vec<T::Output>;
  fn purge(&self) -> Result<Self::Output> {
    self.iter().map(Purge::purge).collect()
  }
}

impl<A: Purge, B: Purge> Purge for (A, B) {
  type Output = (A::Output, B::Output);
  fn purge(&self) -> Result<Self::Output> {
    Ok((self.0.purge()?, self.1.purge()?))
  }
}

impl<T: Purge> Purge for Option<T> {
  type Output = Option<T::Output>;
  fn purge(&self) -> Result<Self::Output> {
    self.as_ref().map(Purge::purge).transpose()
  }
}

macro_rules! plain {
  ($($t:ty),*) => { $(
    impl Purge for $t {
      type Output = $t;
      fn purge(&self) -> Result<$t> { Ok(self.clone()) }
    }
  )* }
}

plain!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
       f32, f64, bool, char, String, &'static str);



#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeMap;
  use crate::error::SeqError;
  use crate::{iterate,list,repeat,zip2};

  #[test]
  fn eager_methods_on_finite() {
    let xs = list![3,1,2];
    assert_eq!(xs.reduce(|a, x| a + x, 0), Ok(6));
    assert_eq!(xs.sort(|a, b| a.cmp(b)).unwrap().to_vec(), Ok(vec![1,2,3]));
    assert_eq!(xs.sort_by_key(|x| -x).unwrap().to_vec(), Ok(vec![3,2,1]));
    assert!(std::ptr::eq(xs.do_run().unwrap(), &xs));
    assert_eq!(list![1,2,3,4].apply(|xs| xs[0] + xs[1] + xs[2] + xs[3]), Ok(10));

    let mut seen = vec![];
    xs.for_each(|x| seen.push(*x)).unwrap();
    assert_eq!(seen, vec![3,1,2]);
  }

  #[test]
  fn eager_methods_on_empty() {
    let nil = Seq::<i32>::empty();
    assert!(nil.sort(|a, b| a.cmp(b)).unwrap().is_empty());
    assert_eq!(nil.reduce(|a, x| a + x, 5), Ok(5));
  }

  #[test]
  fn eager_methods_reject_infinite() {
    let ones = repeat(1);
    assert_eq!(ones.to_vec(), Err(SeqError::Unsupported("to_vec")));
    assert_eq!(ones.do_run().err(), Some(SeqError::Unsupported("do_run")));
    assert_eq!(ones.sort(|a, b| a.cmp(b)).err(), Some(SeqError::Unsupported("sort")));
    assert_eq!(ones.reduce(|a, x| a + x, 0), Err(SeqError::Unsupported("reduce")));
    assert_eq!(ones.apply(|xs| xs.len()), Err(SeqError::Unsupported("apply")));
    assert_eq!(ones.for_each(|_| ()), Err(SeqError::Unsupported("for_each")));
    assert_eq!(ones.purge(), Err(SeqError::Unsupported("purge")));
    assert_eq!(zip2(&ones, &ones).to_map().err(), Some(SeqError::Unsupported("to_map")));
    assert_eq!(ones.first(), Ok(&1));
  }

  #[test]
  fn do_run_forces_everything() {
    let xs = iterate(0, |x| x + 1).take(5).map(|x| x * 2);
    assert!(!xs.is_forced());
    assert!(xs.do_run().is_ok());
    assert!(xs.is_forced());
  }

  #[test]
  fn to_map_later_pairs_win() {
    let pairs = list![(1, "1st"), (2, "2nd"), (3, "3rd"), (4, "1st")];
    let map   = pairs.to_map().unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map["1st"], 4);
    assert_eq!(map["3rd"], 3);
  }

  #[test]
  fn from_map_round_trips() {
    let mut m = BTreeMap::new();
    m.insert("foo", "bar");
    m.insert("baz", "quux");
    let xs = Seq::from_map(m);
    assert_eq!(xs.purge(), Ok(vec![("quux", "baz"), ("bar", "foo")]));
    let back = xs.to_map().unwrap();
    assert_eq!(back["foo"], "bar");
  }

  #[test]
  fn purge_nested() {
    let nested = list![list![1,2], list![3]];
    assert_eq!(nested.purge(), Ok(vec![vec![1,2], vec![3]]));
    assert_eq!(nested.to_vec().map(|v| v.len()), Ok(2));
  }
}
