use num::Signed;
use crate::seq::Seq;

/// `start, start+1, ...` up to but excluding `end`, counting down instead
/// when `end` is below `start`.
pub fn range<N>(start: N, end: N) -> Seq<N>
  where N: Signed + PartialOrd + Copy + 'static
{
  let step = if end > start { N::one() } else { -N::one() };
  range_step(start, end, step)
}

/// `0, 1, ...` up to but excluding `end`.
pub fn range_to<N>(end: N) -> Seq<N>
  where N: Signed + PartialOrd + Copy + 'static
{
  range(N::zero(), end)
}

/// `start, start+step, ...` while strictly before `end` in the direction
/// of `step`. A step pointing away from `end`, or a zero step, gives the
/// empty sequence.
pub fn range_step<N>(start: N, end: N, step: N) -> Seq<N>
  where N: Signed + PartialOrd + Copy + 'static
{
  if step.is_zero() { return Seq::Empty }
  from_to(start, end, step)
}

fn from_to<N>(current: N, last: N, step: N) -> Seq<N>
  where N: Signed + PartialOrd + Copy + 'static
{
  let before = if step.is_positive() { current < last } else { current > last };
  if !before { return Seq::Empty }
  Seq::stream(current, move || Ok(from_to(current + step, last, step)))
}



#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counting_up() {
    assert_eq!(range(1, 6).to_vec(), Ok(vec![1,2,3,4,5]));
    assert_eq!(range_step(1, 10, 2).to_vec(), Ok(vec![1,3,5,7,9]));
    assert_eq!(range_to(3).to_vec(), Ok(vec![0,1,2]));
  }

  #[test]
  fn fractional_steps() {
    assert_eq!(range_step(1.0, 3.0, 0.5).to_vec(), Ok(vec![1.0, 1.5, 2.0, 2.5]));
  }

  #[test]
  fn counting_down() {
    assert_eq!(range_step(5, 0, -1).to_vec(), Ok(vec![5,4,3,2,1]));
    assert_eq!(range(3, 0).to_vec(), Ok(vec![3,2,1]));
  }

  #[test]
  fn wrong_direction_is_empty() {
    assert!(range_step(5, 0, 1).is_empty());
    assert!(range_step(0, 5, -1).is_empty());
    assert!(range_step(0, 5, 0).is_empty());
    assert!(range(4, 4).is_empty());
  }

  #[test]
  fn range_is_lazy() {
    let big = range(0i64, i64::MAX);
    assert!(!big.is_infinite());
    assert_eq!(big.nth(1000), Ok(1000));
  }
}
