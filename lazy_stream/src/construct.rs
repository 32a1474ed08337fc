use std::sync::Arc;
use crate::core::Node;
use crate::traits::{Element, Shared};
use crate::Stream;

/// Make a finite stream out of the listed elements.
///
/// `stream![]` is the empty stream, `stream![1,2,3]` yields `1`, `2`, `3`.
#[macro_export]
macro_rules! stream {
  () => { $crate::Stream::empty() };
  ( $( $x:expr ),+ $(,)? ) => { $crate::Stream::of([ $( $x ),+ ]) };
}

impl<T: Element> Stream<T> {

  /// A finite stream with the given elements, in order.
  pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
    let items: Vec<T> = elements.into_iter().collect();
    let mut result = Stream::empty();
    for x in items.into_iter().rev() {
      result = result.cons(x)
    }
    result
  }

  /// Put `element` in front of a lazily rebuilt copy of `stream`.
  ///
  /// Yields the same elements as `stream.cons(element)`, but the tail is a
  /// new chain of nodes, built one node per forced tail. Nothing is shared
  /// with `stream` except the element values, and the copy never forces
  /// `stream` further than the copy itself has been forced.
  ///
  /// Rebuilding an appended stream copies from the stream it was built
  /// from, so nesting appends does not nest the work of forcing or dropping
  /// them.
  pub fn append(element: T, stream: &Stream<T>) -> Self {
    Stream::prepend_rebuilt(element, stream)
  }

  /// The elements of `self` followed by the elements of `other`.
  /// Lazy: each node of the result is built when its predecessor's tail is
  /// forced.
  pub fn concat(&self, other: &Stream<T>) -> Self {
    if other.is_empty() { return self.clone() }
    match self.node() {
      Node::Empty     => other.clone(),
      Node::Cons(x,_) => {
        let source = self.clone();
        let other  = other.clone();
        Stream::lazy(x.clone(), move || source.rest().concat(&other))
      }
    }
  }

  /// An infinite stream of values produced by calling `f` repeatedly.
  /// The head is produced right away, every other element when the
  /// corresponding tail is forced.
  pub fn generate<F>(f: F) -> Self
    where F: Fn() -> T + Shared {
    Stream::generate_with(Arc::new(f))
  }

  fn generate_with<F>(f: Arc<F>) -> Self
    where F: Fn() -> T + Shared {
    let x = f();
    Stream::lazy(x, move || Stream::generate_with(f))
  }

  /// The infinite stream `initial, f(initial), f(f(initial)), ...`
  pub fn iterate<F>(initial: T, f: F) -> Self
    where F: Fn(&T) -> T + Shared {
    Stream::iterate_with(initial, Arc::new(f))
  }

  fn iterate_with<F>(x: T, f: Arc<F>) -> Self
    where F: Fn(&T) -> T + Shared {
    let seed = x.clone();
    Stream::lazy(x, move || {
      let next = f(&seed);
      Stream::iterate_with(next, f)
    })
  }
}

impl<T: Element> FromIterator<T> for Stream<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Stream::of(iter) }
}
