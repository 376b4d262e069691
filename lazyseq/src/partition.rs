use std::rc::Rc;
use crate::error::Result;
use crate::generate::repeat;
use crate::index::AsIndex;
use crate::seq::Seq;

impl<T: Clone + 'static> Seq<T> {

  /// Consecutive, non-overlapping windows of `n` elements.
  pub fn partition<N: AsIndex>(&self, n: N) -> Result<Seq<Vec<T>>> {
    let n = n.as_index()?;
    self.windows(n, n)
  }

  /// Windows of `n` elements whose starts are `step` apart.
  /// A size of 0 gives endless empty windows, and a step of 0 repeats
  /// the first window forever.
  pub fn partition_step<N, S>(&self, n: N, step: S) -> Result<Seq<Vec<T>>>
    where N: AsIndex, S: AsIndex
  {
    let n    = n.as_index()?;
    let step = step.as_index()?;
    self.windows(n, step)
  }

  fn windows(&self, n: usize, step: usize) -> Result<Seq<Vec<T>>> {
    if n == 0 { return Ok(repeat(Vec::new())) }

    let first = self.take(n).to_vec()?;
    if first.len() < n { return Ok(Seq::Empty) }
    if step == 0 { return Ok(repeat(first)) }

    let this = self.clone();
    Ok(Seq::lazy(self.is_infinite(), first, move ||
      this.drop(step)?.windows(n, step)))
  }

  /// All `k`-element combinations, in lexicographic order of positions.
  pub fn choose(&self, k: usize) -> Result<Seq<Vec<T>>> {
    let pool: Rc<[T]> = self.finite_vec("choose")?.into();
    if k > pool.len() { return Ok(Seq::Empty) }
    Ok(combinations(pool, (0 .. k).collect()))
  }
}

fn combinations<T: Clone + 'static>(pool: Rc<[T]>, picks: Vec<usize>) -> Seq<Vec<T>> {
  let head = picks.iter().map(|&i| pool[i].clone()).collect();
  Seq::stream(head, move || {
    Ok(match next_picks(&picks, pool.len()) {
      Some(next) => combinations(pool.clone(), next),
      None       => Seq::Empty
    })
  })
}

// Advance the rightmost position that still has room, and pack the
// positions after it directly behind it.
fn next_picks(picks: &[usize], n: usize) -> Option<Vec<usize>> {
  let k    = picks.len();
  let i    = (0 .. k).rev().find(|&i| picks[i] < n - k + i)?;
  let mut next = picks.to_vec();
  next[i] += 1;
  for j in i + 1 .. k { next[j] = next[j - 1] + 1 }
  Some(next)
}
