use std::fmt;
use crate::seq::Seq;

/// How many elements of a lazy sequence are shown by default.
/// Formatter precision overrides it: `format!("{:.3}", s)`.
pub const PREVIEW: usize = 10;

/// Shows `[a, b, c]`. Eager sequences are shown in full unless a
/// precision is given; lazy ones are forced only as far as shown, so a
/// lazy sequence cut at the limit ends in `...` even when nothing follows.
impl<T: fmt::Display + Clone + 'static> fmt::Display for Seq<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    let limit = match (f.precision(), self) {
      (Some(n), _)                       => Some(n),
      (None, Seq::Empty | Seq::Eager(_)) => None,
      (None, _)                          => Some(PREVIEW)
    };

    write!(f, "[")?;
    let mut cur   = self.clone();
    let mut shown = 0;
    while !cur.is_empty() {
      if shown > 0 { write!(f, ", ")? }
      if limit == Some(shown) {
        write!(f, "...")?;
        break
      }
      if let Ok(x) = cur.first() { write!(f, "{}", x)? }
      shown += 1;
      // At the limit, only a tail that is already known is looked at.
      if limit == Some(shown) && !cur.is_forced() {
        write!(f, ", ...")?;
        break
      }
      cur = match cur.rest() {
        Ok(rest) => rest,
        Err(e)   => { write!(f, ", <{}>", e)?; break }
      };
    }
    write!(f, "]")
  }
}
