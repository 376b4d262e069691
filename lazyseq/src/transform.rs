use std::rc::Rc;
use crate::error::Result;
use crate::seq::Seq;

/// Whether a value counts as "true" when no predicate is given.
pub trait Truthy {
  fn truthy(&self) -> bool;
}

impl Truthy for bool {
  fn truthy(&self) -> bool { *self }
}

macro_rules! int_truthy {
  ($($t:ty),*) => { $(
    impl Truthy for $t { fn truthy(&self) -> bool { *self != 0 } }
  )* }
}

int_truthy!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Truthy for f32 { fn truthy(&self) -> bool { *self != 0.0 && !self.is_nan() } }
impl Truthy for f64 { fn truthy(&self) -> bool { *self != 0.0 && !self.is_nan() } }

impl Truthy for str { fn truthy(&self) -> bool { !self.is_empty() } }
impl Truthy for String { fn truthy(&self) -> bool { !self.is_empty() } }

impl<T: Truthy> Truthy for Option<T> {
  fn truthy(&self) -> bool { self.as_ref().is_some_and(Truthy::truthy) }
}

impl<T: Truthy + ?Sized> Truthy for &T {
  fn truthy(&self) -> bool { (**self).truthy() }
}


type Pred<T> = Rc<dyn Fn(&T) -> bool>;

impl<T: Clone + 'static> Seq<T> {

  /// Apply `f` to every element, lazily.
  pub fn map<U, F>(&self, f: F) -> Seq<U>
    where U: Clone + 'static, F: Fn(&T) -> U + 'static
  {
    mapped(self.clone(), Rc::new(f))
  }

  /// Keep the elements satisfying `pred`. The first match is found
  /// eagerly, the rest on demand.
  pub fn filter<F>(&self, pred: F) -> Result<Seq<T>>
    where F: Fn(&T) -> bool + 'static
  {
    selected(self.clone(), Rc::new(pred))
  }

  /// Drop the elements satisfying `pred`.
  pub fn remove<F>(&self, pred: F) -> Result<Seq<T>>
    where F: Fn(&T) -> bool + 'static
  {
    self.filter(move |x| !pred(x))
  }

  pub fn filter_truthy(&self) -> Result<Seq<T>> where T: Truthy {
    self.filter(T::truthy)
  }

  pub fn remove_truthy(&self) -> Result<Seq<T>> where T: Truthy {
    self.remove(T::truthy)
  }

  /// First occurrences only, in order.
  pub fn distinct(&self) -> Result<Seq<T>> where T: PartialEq {
    self.distinct_by(|a: &T, b: &T| a == b)
  }

  /// First occurrences only, where `eq` decides sameness. Each element is
  /// compared with every element kept before it.
  pub fn distinct_by<F>(&self, eq: F) -> Result<Seq<T>>
    where F: Fn(&T, &T) -> bool + 'static
  {
    unique(self.clone(), Seq::Empty, Rc::new(eq))
  }
}

fn mapped<T, U>(seq: Seq<T>, f: Rc<dyn Fn(&T) -> U>) -> Seq<U>
  where T: Clone + 'static, U: Clone + 'static
{
  let head = match seq.first() {
    Ok(x)  => f(x),
    Err(_) => return Seq::Empty
  };
  let infinite = seq.is_infinite();
  Seq::lazy(infinite, head, move || Ok(mapped(seq.rest()?, f.clone())))
}

fn selected<T: Clone + 'static>(seq: Seq<T>, pred: Pred<T>) -> Result<Seq<T>> {
  let mut cur = seq;
  loop {
    let head = match cur.first() {
      Ok(x)  => if pred(x) { Some(x.clone()) } else { None },
      Err(_) => return Ok(Seq::Empty)
    };
    if let Some(head) = head {
      return Ok(Seq::lazy(cur.is_infinite(), head, move ||
        selected(cur.rest()?, pred.clone())))
    }
    cur = cur.rest()?;
  }
}

// `kept` holds the accepted elements, most recent first.
fn unique<T: Clone + 'static>
  (seq: Seq<T>, kept: Seq<T>, eq: Rc<dyn Fn(&T, &T) -> bool>) -> Result<Seq<T>> {
  let mut cur = seq;
  loop {
    let x = match cur.first() {
      Ok(x)  => x.clone(),
      Err(_) => return Ok(Seq::Empty)
    };
    if !seen(&kept, &x, &*eq)? {
      let kept = Seq::cons(x.clone(), kept);
      return Ok(Seq::lazy(cur.is_infinite(), x, move ||
        unique(cur.rest()?, kept.clone(), eq.clone())))
    }
    cur = cur.rest()?;
  }
}

fn seen<T: Clone + 'static>(kept: &Seq<T>, x: &T, eq: &dyn Fn(&T, &T) -> bool)
  -> Result<bool> {
  for k in kept {
    if eq(&k?, x) { return Ok(true) }
  }
  Ok(false)
}
