use tracing::debug;
use crate::traits::Element;
use crate::Stream;

impl<T: Element> Stream<T> {

  /// The elements in reverse order.
  /// Forces the whole stream, so it does not terminate on an infinite one.
  pub fn reverse(&self) -> Self {
    let (result, len) =
      self.aggregate((Stream::<T>::empty(), 0_usize), |(acc, n), x| {
        (acc.cons(x.clone()), n + 1)
      });
    debug!(?len, "reversed stream");
    result
  }
}
