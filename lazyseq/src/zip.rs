use std::rc::Rc;
use crate::error::{Result,SeqError};
use crate::seq::Seq;

/// Tuples of the elements at the same position. Stops with the shortest
/// input; infinite only if every input is.
pub fn zip<T: Clone + 'static>(seqs: Vec<Seq<T>>) -> Seq<Vec<T>> {
  if seqs.is_empty() || seqs.iter().any(Seq::is_empty) { return Seq::Empty }
  let infinite = seqs.iter().all(Seq::is_infinite);
  let head     = seqs.iter().filter_map(|s| s.first().ok().cloned()).collect();
  Seq::lazy(infinite, head, move || {
    let rests = seqs.iter().map(Seq::rest).collect::<Result<Vec<_>>>()?;
    Ok(zip(rests))
  })
}

pub fn zip2<A, B>(a: &Seq<A>, b: &Seq<B>) -> Seq<(A, B)>
  where A: Clone + 'static, B: Clone + 'static
{
  zip_with(a, b, |x, y| (x.clone(), y.clone()))
}

pub fn zip_with<A, B, C, F>(a: &Seq<A>, b: &Seq<B>, f: F) -> Seq<C>
  where A: Clone + 'static, B: Clone + 'static, C: Clone + 'static,
        F: Fn(&A, &B) -> C + 'static
{
  zipped(a.clone(), b.clone(), Rc::new(f))
}

fn zipped<A, B, C>(a: Seq<A>, b: Seq<B>, f: Rc<dyn Fn(&A, &B) -> C>) -> Seq<C>
  where A: Clone + 'static, B: Clone + 'static, C: Clone + 'static
{
  let head = match (a.first(), b.first()) {
    (Ok(x), Ok(y)) => f(x, y),
    _              => return Seq::Empty
  };
  let infinite = a.is_infinite() && b.is_infinite();
  Seq::lazy(infinite, head, move ||
    Ok(zipped(a.rest()?, b.rest()?, f.clone())))
}


/// Every element of `a` paired with every element of `b`,
/// with `b` varying fastest.
pub fn combine<A, B>(a: &Seq<A>, b: Vec<B>) -> Seq<(A, B)>
  where A: Clone + 'static, B: Clone + 'static
{
  if b.is_empty() { return Seq::Empty }
  pairs(a.clone(), b.into(), 0)
}

fn pairs<A, B>(a: Seq<A>, b: Rc<[B]>, j: usize) -> Seq<(A, B)>
  where A: Clone + 'static, B: Clone + 'static
{
  let head = match a.first() {
    Ok(x)  => (x.clone(), b[j].clone()),
    Err(_) => return Seq::Empty
  };
  Seq::lazy(a.is_infinite(), head, move || {
    if j + 1 < b.len() { return Ok(pairs(a.clone(), b.clone(), j + 1)) }
    Ok(pairs(a.rest()?, b.clone(), 0))
  })
}


impl<T: Clone + 'static> Seq<Vec<T>> {

  /// Undo `zip`: one sequence per tuple component. The width is taken
  /// from the first tuple; a later, narrower tuple is a type error.
  pub fn unzip(&self) -> Result<Vec<Seq<T>>> {
    let width = match self.first() {
      Ok(t)  => t.len(),
      Err(_) => return Ok(Vec::new())
    };
    (0 .. width).map(|i| component(self.clone(), i)).collect()
  }
}

fn component<T: Clone + 'static>(seq: Seq<Vec<T>>, i: usize) -> Result<Seq<T>> {
  let head = match seq.first() {
    Ok(t)  => t.get(i).cloned().ok_or_else(||
                SeqError::type_error(
                  format!("tuple of width {} has no component {}", t.len(), i)))?,
    Err(_) => return Ok(Seq::Empty)
  };
  Ok(Seq::lazy(seq.is_infinite(), head, move || component(seq.rest()?, i)))
}

impl<A: Clone + 'static, B: Clone + 'static> Seq<(A, B)> {

  pub fn unzip2(&self) -> (Seq<A>, Seq<B>) {
    (self.map(|p| p.0.clone()), self.map(|p| p.1.clone()))
  }
}
