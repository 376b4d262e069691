use std::cell::OnceCell;
use std::rc::Rc;
use crate::error::Result;
use crate::seq::Seq;

impl<T: Clone + 'static> Seq<T> {

  /// The first `n` elements. Traversal stops after the `n`-th element,
  /// so the tail behind it is never forced.
  pub fn take(&self, n: usize) -> Seq<T> {
    if n == 0 { return Seq::Empty }
    let head = match self {
      Seq::Empty    => return Seq::Empty,
      Seq::Eager(e) => return e.prefix(n),
      Seq::Stream(_) | Seq::Infinite(_) =>
        match self.first() {
          Ok(x)  => x.clone(),
          Err(_) => return Seq::Empty
        }
    };
    let this = self.clone();
    Seq::stream(head, move || {
      if n == 1 { return Ok(Seq::Empty) }
      Ok(this.rest()?.take(n - 1))
    })
  }

  /// Skip `n` elements. Dropping from an infinite stream gives an
  /// infinite stream.
  pub fn drop(&self, n: usize) -> Result<Seq<T>> {
    if let Seq::Eager(e) = self { return Ok(e.advance(n)) }
    let mut cur = self.clone();
    for _ in 0 .. n {
      if cur.is_empty() { break }
      cur = cur.rest()?;
    }
    Ok(cur)
  }

  pub fn split_at(&self, n: usize) -> Result<(Seq<T>, Seq<T>)> {
    Ok((self.take(n), self.drop(n)?))
  }

  /// Split before the first element that fails `pred`.
  pub fn split_with<F>(&self, pred: F) -> SplitWith<T>
    where F: Fn(&T) -> bool + 'static
  {
    SplitWith { seq: self.clone(), pred: Rc::new(pred), point: OnceCell::new() }
  }
}


/// The two halves of `split_with`. The split point is found on first use
/// and shared by both halves.
pub struct SplitWith<T> {
  seq:   Seq<T>,
  pred:  Rc<dyn Fn(&T) -> bool>,
  point: OnceCell<(Seq<T>, Seq<T>)>
}

impl<T: Clone + 'static> SplitWith<T> {

  fn point(&self) -> Result<&(Seq<T>, Seq<T>)> {
    if let Some(p) = self.point.get() { return Ok(p) }

    let mut prefix = Vec::new();
    let mut cur    = self.seq.clone();
    loop {
      let x = match cur.first() {
        Ok(x) if (self.pred)(x) => x.clone(),
        _ => break
      };
      prefix.push(x);
      cur = cur.rest()?;
    }
    tracing::trace!(at = prefix.len(), "split point found");
    Ok(self.point.get_or_init(|| (Seq::from_vec(prefix), cur)))
  }

  /// The longest prefix satisfying the predicate.
  pub fn take(&self) -> Result<Seq<T>> { Ok(self.point()?.0.clone()) }

  /// Everything from the first element failing the predicate.
  pub fn drop(&self) -> Result<Seq<T>> { Ok(self.point()?.1.clone()) }

  pub fn is_split(&self) -> bool { self.point.get().is_some() }
}



#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;
  use crate::error::SeqError;
  use crate::{iterate,list,repeat};

  #[test]
  fn eager_split_at() {
    let xs = Seq::from_vec(vec![1,2,3,4,5]);
    assert_eq!(xs.drop(2).unwrap().to_vec(), Ok(vec![3,4,5]));
    assert_eq!(xs.drop(2).unwrap().length(), Ok(crate::Len::Fin(3)));
    assert_eq!(xs.take(2).to_vec(), Ok(vec![1,2]));
    assert!(matches!(xs.take(2), Seq::Eager(_)));
    assert!(xs.drop(10).unwrap().is_empty());
    assert_eq!(xs.take(10).to_vec(), Ok(vec![1,2,3,4,5]));
    assert!(xs.take(0).is_empty());

    let (a, b) = xs.split_at(3).unwrap();
    assert_eq!(a.to_vec(), Ok(vec![1,2,3]));
    assert_eq!(b.to_vec(), Ok(vec![4,5]));
  }

  #[test]
  fn infinite_split_at() {
    let nats = iterate(1, |x| x + 1);
    assert_eq!(nats.take(5).to_vec(), Ok(vec![1,2,3,4,5]));
    let later = nats.drop(5).unwrap();
    assert!(later.is_infinite());
    assert_eq!(later.first(), Ok(&6));
    assert!(!repeat(0).take(3).is_infinite());
  }

  #[test]
  fn take_is_lazy() {
    let fail = Seq::stream(4, || Err(SeqError::failed("fail")));
    let xs   = list![1,2,3].concat(&fail);
    assert_eq!(xs.take(4).to_vec(), Ok(vec![1,2,3,4]));
  }

  #[test]
  fn take_forces_only_what_it_needs() {
    let forced = Rc::new(Cell::new(0));
    let f      = forced.clone();
    let counted = iterate(0, move |x| { f.set(f.get() + 1); x + 1 });
    let first3  = counted.take(3);
    assert_eq!(forced.get(), 0);
    assert_eq!(first3.to_vec(), Ok(vec![0,1,2]));
    assert_eq!(forced.get(), 2);
  }

  #[test]
  fn split_with() {
    let xs    = Seq::from_vec(vec![1,2,3,4,5]);
    let split = xs.split_with(|x| *x <= 3);
    assert!(!split.is_split());
    assert_eq!(split.take().unwrap().to_vec(), Ok(vec![1,2,3]));
    assert!(split.is_split());
    assert_eq!(split.drop().unwrap().to_vec(), Ok(vec![4,5]));

    let none = xs.split_with(|x| *x > 10);
    assert!(none.take().unwrap().is_empty());
    assert_eq!(none.drop().unwrap().to_vec(), Ok(vec![1,2,3,4,5]));
  }

  #[test]
  fn split_with_scans_once() {
    let calls = Rc::new(Cell::new(0));
    let c     = calls.clone();
    let split = crate::range(0i64, 10).split_with(move |x| { c.set(c.get() + 1); *x < 4 });
    assert_eq!(split.drop().unwrap().first(), Ok(&4));
    assert_eq!(split.take().unwrap().to_vec(), Ok(vec![0,1,2,3]));
    assert_eq!(split.drop().unwrap().to_vec(), Ok(vec![4,5,6,7,8,9]));
    assert_eq!(calls.get(), 5);
  }

  #[test]
  fn split_with_on_infinite() {
    let split = iterate(0, |x| x + 1).split_with(|x| *x < 3);
    assert_eq!(split.take().unwrap().to_vec(), Ok(vec![0,1,2]));
    assert!(split.drop().unwrap().is_infinite());
  }
}
