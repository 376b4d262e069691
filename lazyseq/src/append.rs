use std::rc::Rc;
use crate::error::Result;
use crate::seq::Seq;

/// One argument to `append`: a single element, a finite vector,
/// or another sequence.
#[derive(Clone,Debug)]
pub enum Part<T> {
  One(T),
  Many(Vec<T>),
  Seq(Seq<T>)
}

impl<T: Clone + 'static> Part<T> {
  pub fn into_seq(self) -> Seq<T> {
    match self {
      Part::One(x)  => Seq::from_vec(vec![x]),
      Part::Many(v) => Seq::from_vec(v),
      Part::Seq(s)  => s
    }
  }
}

impl<T> From<Vec<T>> for Part<T> {
  fn from(v: Vec<T>) -> Self { Part::Many(v) }
}

impl<T> From<Seq<T>> for Part<T> {
  fn from(s: Seq<T>) -> Self { Part::Seq(s) }
}

impl<T> From<&Seq<T>> for Part<T> {
  fn from(s: &Seq<T>) -> Self { Part::Seq(s.clone()) }
}


/// Element types that `flatten` knows how to open up.
/// Containers spread into their elements, atoms stay as they are.
pub trait Flatten {
  type Atom;
  fn spread(&self) -> Part<Self::Atom>;
}

impl<T: Clone> Flatten for Part<T> {
  type Atom = T;
  fn spread(&self) -> Part<T> { self.clone() }
}

impl<T: Clone> Flatten for Vec<T> {
  type Atom = T;
  fn spread(&self) -> Part<T> { Part::Many(self.clone()) }
}

impl<T> Flatten for Seq<T> {
  type Atom = T;
  fn spread(&self) -> Part<T> { Part::Seq(self.clone()) }
}

macro_rules! atom {
  ($($t:ty),*) => { $(
    impl Flatten for $t {
      type Atom = $t;
      fn spread(&self) -> Part<$t> { Part::One(self.clone()) }
    }
  )* }
}

atom!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
      f32, f64, bool, char, String, &'static str);


impl<T: Clone + 'static> Seq<T> {

  /// Lazily concatenate this sequence with each part in order.
  /// A part is not looked into until traversal reaches it.
  pub fn append<I>(&self, parts: I) -> Seq<T>
    where I: IntoIterator<Item = Part<T>>
  {
    if self.is_infinite() { return self.clone() }
    let mut pieces = vec![self.clone()];
    pieces.extend(parts.into_iter().map(Part::into_seq));
    let infinite = pieces.iter().any(Seq::is_infinite);
    chain(Seq::Empty, pieces.into(), 0, infinite)
  }

  pub fn concat(&self, other: &Seq<T>) -> Seq<T> {
    self.append([Part::Seq(other.clone())])
  }

  /// Splice every element that is itself a container, one level deep.
  pub fn flatten(&self) -> Result<Seq<T::Atom>>
    where T: Flatten, T::Atom: Clone + 'static
  {
    let inner = match self.first() {
      Ok(x)  => x.spread().into_seq(),
      Err(_) => return Ok(Seq::Empty)
    };
    spliced(self.clone(), inner, self.is_infinite())
  }
}

// `cur` is being traversed; `pieces[next ..]` follow it.
fn chain<T: Clone + 'static>
  (cur: Seq<T>, pieces: Rc<[Seq<T>]>, next: usize, infinite: bool) -> Seq<T> {
  let mut cur  = cur;
  let mut next = next;
  while cur.is_empty() {
    match pieces.get(next) {
      Some(p) => { cur = p.clone(); next += 1 }
      None    => return Seq::Empty
    }
  }

  // Nothing after an infinite piece is reachable, and the last piece
  // can be shared as is.
  if next == pieces.len() || cur.is_infinite() { return cur }

  let head = match cur.first() {
    Ok(x)  => x.clone(),
    Err(_) => return Seq::Empty
  };
  Seq::lazy(infinite, head, move ||
    Ok(chain(cur.rest()?, pieces.clone(), next, infinite)))
}

// `inner` holds what remains of the spread of `outer.first()`.
fn spliced<T>(outer: Seq<T>, inner: Seq<T::Atom>, infinite: bool)
  -> Result<Seq<T::Atom>>
  where T: Flatten + Clone + 'static, T::Atom: Clone + 'static
{
  let mut outer = outer;
  let mut inner = inner;
  loop {
    // Nothing after an infinite element is reachable.
    if inner.is_infinite() { return Ok(inner) }
    if !inner.is_empty() {
      let head = inner.first()?.clone();
      return Ok(Seq::lazy(infinite, head, move ||
        spliced(outer.clone(), inner.rest()?, infinite)))
    }
    outer = outer.rest()?;
    if outer.is_empty() { return Ok(Seq::Empty) }
    inner = outer.first()?.spread().into_seq();
  }
}
