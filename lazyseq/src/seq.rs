use std::fmt;
use std::rc::{Rc,Weak};
use crate::error::{Result,SeqError};
use crate::thunk::Thunk;

/// Length of a sequence. Infinite streams have no finite length.
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub enum Len {
  Fin(usize),
  Inf
}

impl Len {
  pub fn is_finite(self) -> bool { matches!(self, Len::Fin(_)) }

  pub fn to_usize(self) -> Option<usize> {
    match self {
      Len::Fin(n) => Some(n),
      Len::Inf    => None
    }
  }
}

impl fmt::Display for Len {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Len::Fin(n) => write!(f, "{}", n),
      Len::Inf    => write!(f, "inf")
    }
  }
}


/// A lazy cons cell: a realized head and a memoized tail.
pub struct Node<T> {
  head: T,
  tail: Thunk<Seq<T>>
}

// Forced tails are released in a loop, so that dropping a long realized
// stream does not recurse once per cell.
impl<T> Drop for Node<T> {
  fn drop(&mut self) {
    let mut next = self.tail.take();
    while let Some(seq) = next {
      next = match seq {
        Seq::Stream(node) | Seq::Infinite(node) =>
          match Rc::try_unwrap(node) {
            Ok(mut node) => node.tail.take(),
            Err(_)       => None
          },
        _ => None
      }
    }
  }
}


/// A window onto a shared, fully known slice.
/// Never empty: an exhausted window becomes `Seq::Empty`.
pub struct Eager<T> {
  items: Rc<[T]>,
  start: usize,
  end:   usize
}

impl<T> Clone for Eager<T> {
  fn clone(&self) -> Self {
    Eager { items: self.items.clone(), start: self.start, end: self.end }
  }
}

impl<T> Eager<T> {
  pub fn len(&self) -> usize { self.end - self.start }

  pub fn as_slice(&self) -> &[T] { &self.items[self.start .. self.end] }

  pub fn get(&self, i: usize) -> Option<&T> { self.as_slice().get(i) }

  /// Skip `k` elements, sharing the backing slice.
  pub(crate) fn advance(&self, k: usize) -> Seq<T> {
    if k >= self.len() { return Seq::Empty }
    Seq::Eager(Eager { items: self.items.clone()
                     , start: self.start + k
                     , end:   self.end })
  }

  /// Keep the first `k` elements, sharing the backing slice.
  pub(crate) fn prefix(&self, k: usize) -> Seq<T> {
    if k == 0 { return Seq::Empty }
    Seq::Eager(Eager { items: self.items.clone()
                     , start: self.start
                     , end:   self.end.min(self.start + k) })
  }
}


/// A sequence: empty, an eager slice, a finite lazy stream,
/// or a stream known to be infinite.
pub enum Seq<T> {
  Empty,
  Eager(Eager<T>),
  Stream(Rc<Node<T>>),
  Infinite(Rc<Node<T>>)
}

impl<T> Clone for Seq<T> {
  fn clone(&self) -> Self {
    match self {
      Seq::Empty       => Seq::Empty,
      Seq::Eager(e)    => Seq::Eager(e.clone()),
      Seq::Stream(n)   => Seq::Stream(n.clone()),
      Seq::Infinite(n) => Seq::Infinite(n.clone())
    }
  }
}

impl<T> Default for Seq<T> {
  fn default() -> Self { Seq::Empty }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Seq::Empty       => write!(f, "Empty"),
      Seq::Eager(e)    => write!(f, "Eager({:?})", e.as_slice()),
      Seq::Stream(n)   => write!(f, "Stream({:?}, ..)", n.head),
      Seq::Infinite(n) => write!(f, "Infinite({:?}, ..)", n.head)
    }
  }
}


/* Construction */

impl<T: Clone + 'static> Seq<T> {

  pub fn empty() -> Self { Seq::Empty }

  pub fn from_vec(items: Vec<T>) -> Self {
    if items.is_empty() { return Seq::Empty }
    let end = items.len();
    Seq::Eager(Eager { items: items.into(), start: 0, end })
  }

  pub fn from_slice(items: &[T]) -> Self { Self::from_vec(items.to_vec()) }

  /// A finite lazy cell. `tail` runs the first time the rest is demanded
  /// and its successful result is kept.
  pub fn stream<F>(head: T, tail: F) -> Self
    where F: Fn() -> Result<Seq<T>> + 'static
  {
    Seq::Stream(Rc::new(Node { head, tail: Thunk::new(tail) }))
  }

  /// A cell whose rest is already known.
  pub fn cons(head: T, rest: Seq<T>) -> Self {
    let infinite = rest.is_infinite();
    let node     = Rc::new(Node { head, tail: Thunk::ready(rest) });
    if infinite { Seq::Infinite(node) } else { Seq::Stream(node) }
  }

  /// Only for generators that never run out.
  pub(crate) fn infinite<F>(head: T, tail: F) -> Self
    where F: Fn() -> Result<Seq<T>> + 'static
  {
    Seq::Infinite(Rc::new(Node { head, tail: Thunk::new(tail) }))
  }

  pub(crate) fn lazy<F>(infinite: bool, head: T, tail: F) -> Self
    where F: Fn() -> Result<Seq<T>> + 'static
  {
    if infinite { Self::infinite(head, tail) } else { Self::stream(head, tail) }
  }

  /// A cell whose tail is computed from a handle to the cell itself,
  /// for recurrences defined in terms of the stream being built.
  /// The handle is weak, so the cell does not keep itself alive.
  pub fn recur<F>(head: T, infinite: bool, tail: F) -> Self
    where F: Fn(&Seq<T>) -> Result<Seq<T>> + 'static
  {
    let node = Rc::new_cyclic(|me: &Weak<Node<T>>| {
      let me = me.clone();
      Node { head, tail: Thunk::new(move || {
        let node = me.upgrade()
                     .ok_or_else(|| SeqError::failed("stream cell dropped"))?;
        let this = if infinite { Seq::Infinite(node) } else { Seq::Stream(node) };
        tail(&this)
      })}
    });
    if infinite { Seq::Infinite(node) } else { Seq::Stream(node) }
  }
}

impl<T: Clone + 'static> From<Vec<T>> for Seq<T> {
  fn from(items: Vec<T>) -> Self { Seq::from_vec(items) }
}

impl<T: Clone + 'static> FromIterator<T> for Seq<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Seq::from_vec(iter.into_iter().collect())
  }
}


/* The contract */

impl<T: Clone + 'static> Seq<T> {

  pub fn is_empty(&self) -> bool { matches!(self, Seq::Empty) }

  pub fn is_infinite(&self) -> bool { matches!(self, Seq::Infinite(_)) }

  pub fn first(&self) -> Result<&T> {
    match self {
      Seq::Empty                      => Err(SeqError::EmptyAccess("first")),
      Seq::Eager(e)                   => Ok(&e.as_slice()[0]),
      Seq::Stream(n) | Seq::Infinite(n) => Ok(&n.head)
    }
  }

  pub fn rest(&self) -> Result<Seq<T>> {
    match self {
      Seq::Empty     => Err(SeqError::EmptyAccess("rest")),
      Seq::Eager(e)  => Ok(e.advance(1)),
      Seq::Stream(n) => n.tail.force(),
      Seq::Infinite(n) =>
        match n.tail.force()? {
          Seq::Stream(m) | Seq::Infinite(m) => Ok(Seq::Infinite(m)),
          _ => Err(SeqError::Exhausted)
        }
    }
  }

  /// Number of elements. Finite lazy streams are traversed to count them.
  pub fn length(&self) -> Result<Len> {
    let mut count = 0;
    let mut cur   = self.clone();
    loop {
      cur = match cur {
        Seq::Empty       => return Ok(Len::Fin(count)),
        Seq::Eager(e)    => return Ok(Len::Fin(count + e.len())),
        Seq::Infinite(_) => return Ok(Len::Inf),
        Seq::Stream(n)   => { count += 1; n.tail.force()? }
      }
    }
  }

  /// Has the tail of this cell been computed yet?
  pub fn is_forced(&self) -> bool {
    match self {
      Seq::Stream(n) | Seq::Infinite(n) => n.tail.is_forced(),
      _ => true
    }
  }

  /// Do both handles refer to the same cell (or the same window)?
  pub fn ptr_eq(&self, other: &Seq<T>) -> bool {
    match (self, other) {
      (Seq::Empty, Seq::Empty) => true,
      (Seq::Eager(a), Seq::Eager(b)) =>
        Rc::ptr_eq(&a.items, &b.items) && a.start == b.start && a.end == b.end,
      (Seq::Stream(a), Seq::Stream(b)) |
        (Seq::Infinite(a), Seq::Infinite(b)) => Rc::ptr_eq(a, b),
      _ => false
    }
  }

  pub(crate) fn ensure_finite(&self, op: &'static str) -> Result<()> {
    if self.is_infinite() {
      tracing::debug!(op, "refusing to traverse an infinite stream");
      return Err(SeqError::Unsupported(op))
    }
    Ok(())
  }

  /// Traverse the sequence. Each tail is forced only when the next
  /// element is requested; a failing tail ends the iteration with `Err`.
  pub fn iter(&self) -> Iter<T> {
    Iter { cur: Some(self.clone()), advance: false, strict: None }
  }

  /// Like `iter`, but ends with `SeqError::Unsupported(op)` as soon as
  /// traversal reaches an infinite cell, however deep in the sequence.
  pub(crate) fn iter_finite(&self, op: &'static str) -> Iter<T> {
    Iter { cur: Some(self.clone()), advance: false, strict: Some(op) }
  }
}


pub struct Iter<T> {
  cur:     Option<Seq<T>>,
  advance: bool,
  strict:  Option<&'static str>
}

impl<T: Clone + 'static> Iterator for Iter<T> {
  type Item = Result<T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.advance {
      match self.cur.as_ref()?.rest() {
        Ok(rest) => self.cur = Some(rest),
        Err(e)   => { self.cur = None; return Some(Err(e)) }
      }
    }
    self.advance = true;

    let cur = self.cur.as_ref()?;
    if cur.is_empty() {
      self.cur = None;
      return None
    }
    if let Some(op) = self.strict {
      if let Err(e) = cur.ensure_finite(op) {
        self.cur = None;
        return Some(Err(e))
      }
    }
    cur.first().ok().cloned().map(Ok)
  }
}

impl<T: Clone + 'static> IntoIterator for Seq<T> {
  type Item     = Result<T>;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Iter<T> { Iter { cur: Some(self), advance: false, strict: None } }
}

impl<'a, T: Clone + 'static> IntoIterator for &'a Seq<T> {
  type Item     = Result<T>;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Iter<T> { self.iter() }
}



#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use crate::materialize::Purge;
  use crate::proptest::*;

  #[test]
  fn empty_accessors() {
    let nil = Seq::<i32>::empty();
    assert!(nil.is_empty());
    assert_eq!(nil.first(), Err(SeqError::EmptyAccess("first")));
    assert!(matches!(nil.rest(), Err(SeqError::EmptyAccess("rest"))));
    assert_eq!(nil.length(), Ok(Len::Fin(0)));
    assert_eq!(nil.to_vec(), Ok(vec![]));
  }

  #[test]
  fn eager_accessors() {
    let xs = Seq::from_vec(vec![1,2,3,4,5]);
    assert!(matches!(xs, Seq::Eager(_)));
    assert_eq!(xs.first(), Ok(&1));
    assert_eq!(xs.rest().unwrap().to_vec(), Ok(vec![2,3,4,5]));
    assert_eq!(xs.length(), Ok(Len::Fin(5)));
    assert!(!xs.is_empty());
    assert_eq!(xs.to_vec(), Ok(vec![1,2,3,4,5]));
    assert!(Seq::<u8>::from_vec(vec![]).is_empty());
  }

  #[test]
  fn eager_rest_shares_backing() {
    let xs = Seq::from_vec(vec![1,2,3]);
    let (a, b) = (xs.rest().unwrap(), xs.rest().unwrap());
    assert!(a.ptr_eq(&b));
    match (&xs, &a) {
      (Seq::Eager(x), Seq::Eager(y)) => assert!(Rc::ptr_eq(&x.items, &y.items)),
      _ => panic!("expected eager windows")
    }
    assert!(a.rest().unwrap().rest().unwrap().is_empty());
  }

  #[test]
  fn stream_tail_is_memoized() {
    let calls = Rc::new(Cell::new(0));
    let c     = calls.clone();
    let s     = Seq::stream(1, move || {
      c.set(c.get() + 1);
      Ok(Seq::from_vec(vec![2,3]))
    });
    assert!(!s.is_forced());
    let a = s.rest().unwrap();
    let b = s.rest().unwrap();
    assert!(a.ptr_eq(&b));
    assert_eq!(calls.get(), 1);
    assert_eq!(s.to_vec(), Ok(vec![1,2,3]));
    assert_eq!(calls.get(), 1);
  }

  #[test]
  fn failing_tail_surfaces_and_stays_usable() {
    let s = Seq::stream(4, || Err(SeqError::failed("fail")));
    assert_eq!(s.first(), Ok(&4));
    assert_eq!(s.rest().err(), Some(SeqError::failed("fail")));
    assert_eq!(s.to_vec(), Err(SeqError::failed("fail")));
    assert_eq!(s.first(), Ok(&4));
  }

  #[test]
  fn infinite_rest_stays_infinite() {
    let ones = crate::repeat(1);
    assert!(ones.is_infinite());
    assert!(ones.rest().unwrap().is_infinite());
    assert_eq!(ones.length(), Ok(Len::Inf));
    assert!(!ones.is_empty());
    assert_eq!(ones.to_vec(), Err(SeqError::Unsupported("to_vec")));
  }

  #[test]
  fn recur_sees_its_own_cell() {
    let nats = Seq::recur(0u64, true, |this| {
      let n = *this.first()?;
      Ok(Seq::stream(n + 1, || Ok(Seq::Empty)))
    });
    assert_eq!(nats.take(2).to_vec(), Ok(vec![0,1]));
    let second = nats.rest().unwrap();
    assert!(second.is_infinite());
    assert_eq!(second.rest().err(), Some(SeqError::Exhausted));
    assert_eq!(nats.first(), Ok(&0));
  }

  #[test]
  fn cons_keeps_infinite_tag() {
    let s = Seq::cons(0, crate::repeat(1));
    assert!(s.is_infinite());
    assert_eq!(s.take(3).to_vec(), Ok(vec![0,1,1]));
    assert!(!Seq::cons(0, Seq::Empty).is_infinite());
  }

  #[test]
  fn iterator_reports_failing_tail() {
    let s = Seq::from_vec(vec![1,2]).concat(&Seq::stream(3, || Err(SeqError::failed("x"))));
    let mut it = s.iter();
    assert_eq!(it.next(), Some(Ok(1)));
    assert_eq!(it.next(), Some(Ok(2)));
    assert_eq!(it.next(), Some(Ok(3)));
    assert_eq!(it.next(), Some(Err(SeqError::failed("x"))));
    assert_eq!(it.next(), None);
  }

  #[test]
  fn traversal_rejects_a_late_infinite_tail() {
    let s = Seq::stream(0, || Ok(crate::repeat(1)));
    assert!(!s.is_infinite());
    assert_eq!(s.length(), Ok(Len::Inf));
    assert_eq!(s.to_vec(), Err(SeqError::Unsupported("to_vec")));
    assert_eq!(s.reduce(|a, x| a + x, 0), Err(SeqError::Unsupported("reduce")));
    assert_eq!(s.do_run().err(), Some(SeqError::Unsupported("do_run")));
    assert_eq!(crate::list![s.clone()].purge(), Err(SeqError::Unsupported("purge")));
    assert_eq!(s.iter().take(3).collect::<Result<Vec<_>>>(), Ok(vec![0,1,1]));

    let doubled = s.map(|x| x * 2);
    assert!(doubled.rest().unwrap().is_infinite());
    assert_eq!(doubled.length(), Ok(Len::Inf));
    assert_eq!(doubled.to_vec(), Err(SeqError::Unsupported("to_vec")));
  }

  #[test]
  fn dropping_a_long_stream_does_not_overflow() {
    let s = crate::range(0i64, 200_000);
    assert_eq!(s.length(), Ok(Len::Fin(200_000)));
    drop(s);
  }

  #[test]
  fn length_matches_materialized() {
    do_test(small_vec(), |xs| {
      let eager = Seq::from_vec(xs.clone());
      let lazy  = Seq::from_vec(xs.clone()).map(|x| *x);
      let n     = Len::Fin(xs.len());
      Some( eager.length().ok()? == n
         && lazy.length().ok()?  == n
         && (lazy.length().ok()? == Len::Fin(0)) == lazy.is_empty()
         && lazy.to_vec().ok()?  == xs)
    })
  }
}
