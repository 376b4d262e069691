use proptest::prelude::*;
use proptest::test_runner::*;

pub fn do_test<S: Strategy>(s: S, p: fn(S::Value) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&s, |arg| {
    match p(arg) {
      Some(result) =>
        if result { Ok(()) }
        else {
          Err(TestCaseError::Fail("unexpected result".into()))
        },
      None => Err(TestCaseError::Reject("invalid input".into()))
    }
  }).unwrap()
}

pub fn small_vec() -> impl Strategy<Value = Vec<i64>> {
  proptest::collection::vec(-50i64 .. 50, 0 .. 24)
}

pub fn vec_and_count() -> impl Strategy<Value = (Vec<i64>, usize)> {
  (small_vec(), 0usize .. 30)
}
