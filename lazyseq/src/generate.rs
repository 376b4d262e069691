use std::rc::Rc;
use crate::seq::Seq;

/// `value` forever.
pub fn repeat<T: Clone + 'static>(value: T) -> Seq<T> {
  let next = value.clone();
  Seq::infinite(value, move || Ok(repeat(next.clone())))
}

/// The given values, over and over. Nothing to cycle gives the empty
/// sequence.
pub fn cycle<T: Clone + 'static>(values: Vec<T>) -> Seq<T> {
  if values.is_empty() { return Seq::Empty }
  cycle_at(values.into(), 0)
}

fn cycle_at<T: Clone + 'static>(values: Rc<[T]>, i: usize) -> Seq<T> {
  let head = values[i].clone();
  Seq::infinite(head, move || Ok(cycle_at(values.clone(), (i + 1) % values.len())))
}

/// `seed`, `f(seed)`, `f(f(seed))`, ...
/// Each cell computes its successor from its own head.
pub fn iterate<T, F>(seed: T, f: F) -> Seq<T>
  where T: Clone + 'static, F: Fn(&T) -> T + 'static
{
  iterate_from(seed, Rc::new(f))
}

fn iterate_from<T: Clone + 'static>(x: T, f: Rc<dyn Fn(&T) -> T>) -> Seq<T> {
  Seq::recur(x, true, move |this| Ok(iterate_from(f(this.first()?), f.clone())))
}

/// `a`, `b`, `f(a, b)`, `f(b, f(a, b))`, ...
pub fn iterate2<T, F>(a: T, b: T, f: F) -> Seq<T>
  where T: Clone + 'static, F: Fn(&T, &T) -> T + 'static
{
  iterate2_from(a, b, Rc::new(f))
}

fn iterate2_from<T: Clone + 'static>(a: T, b: T, f: Rc<dyn Fn(&T, &T) -> T>) -> Seq<T> {
  Seq::recur(a, true, move |this| {
    let next = f(this.first()?, &b);
    Ok(iterate2_from(b.clone(), next, f.clone()))
  })
}

/// A stream defined by its first few elements and a rule computing each
/// later element from the `init.len()` elements before it.
pub fn recurrence<T, F>(init: Vec<T>, step: F) -> Seq<T>
  where T: Clone + 'static, F: Fn(&[T]) -> T + 'static
{
  if init.is_empty() { return Seq::Empty }
  sliding(init.into(), Rc::new(step))
}

fn sliding<T: Clone + 'static>(history: Rc<[T]>, step: Rc<dyn Fn(&[T]) -> T>) -> Seq<T> {
  let head = history[0].clone();
  Seq::infinite(head, move || {
    let mut next: Vec<T> = history[1 ..].to_vec();
    next.push(step(&history[..]));
    Ok(sliding(next.into(), step.clone()))
  })
}
