use std::rc::Rc;
use regex::Regex;
use crate::seq::Seq;

/// One occurrence of a pattern.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Match {
  pub text:   String,
  pub start:  usize,
  pub end:    usize,
  /// Capture groups after the whole match; `None` for groups that did
  /// not take part.
  pub groups: Vec<Option<String>>
}

/// A pattern engine able to find the next match at or after a byte offset.
/// Case and line-anchor behavior belong to the pattern.
pub trait Matcher {
  fn find_next(&self, text: &str, from: usize) -> Option<Match>;
}

impl Matcher for Regex {
  fn find_next(&self, text: &str, from: usize) -> Option<Match> {
    let caps  = self.captures_at(text, from)?;
    let whole = caps.get(0)?;
    Some(Match {
      text:   whole.as_str().to_string(),
      start:  whole.start(),
      end:    whole.end(),
      groups: caps.iter().skip(1)
                  .map(|g| g.map(|m| m.as_str().to_string()))
                  .collect()
    })
  }
}

/// Successive non-overlapping matches of `pattern` in `text`, left to right.
/// Each search starts where the previous match ended.
pub fn matches<M>(pattern: M, text: impl Into<String>) -> Seq<Match>
  where M: Matcher + 'static
{
  scan(Rc::new(pattern), text.into().into(), 0)
}

fn scan(pattern: Rc<dyn Matcher>, text: Rc<str>, from: usize) -> Seq<Match> {
  if from > text.len() { return Seq::Empty }
  tracing::trace!(from, "scanning for next match");
  let found = match pattern.find_next(&text, from) {
    Some(m) => m,
    None    => return Seq::Empty
  };

  // An empty match would be found again at the same place.
  let next = if found.end > found.start { found.end } else {
    found.end + text[found.end ..].chars().next().map_or(1, char::len_utf8)
  };
  Seq::stream(found, move || Ok(scan(pattern.clone(), text.clone(), next)))
}
