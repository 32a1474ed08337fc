use crate::{Element, Stream};
use proptest::prelude::*;
use proptest::collection::{vec, VecStrategy};
use proptest::strategy::Map;
use proptest::test_runner::*;

/// Finite streams of up to 64 elements.
impl<T: Arbitrary + Element> Arbitrary for Stream<T> {
  type Parameters = T::Parameters;
  type Strategy   = Map<VecStrategy<T::Strategy>, fn(Vec<T>) -> Stream<T>>;

  fn arbitrary_with(args: T::Parameters) -> Self::Strategy {
    vec(any_with::<T>(args), 0 .. 64)
      .prop_map(Stream::<T>::of::<Vec<T>> as fn(Vec<T>) -> Stream<T>)
  }
}


/// Check that `p` holds for randomly generated inputs.
/// `p` returns `None` to reject an input.
pub fn do_test<T: Arbitrary>(p: fn(T) -> Option<bool>) {
  let mut cfg: Config = <_>::default();
  cfg.failure_persistence = None;
  let mut runner = TestRunner::new(cfg);
  runner.run(&any::<T>(), |arg| {
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
