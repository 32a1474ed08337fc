use std::sync::Arc;
use crate::core::Node;
use crate::traits::{Element, Shared};
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Pair up corresponding elements.
  /// The result is as long as the shorter of the two streams.
  pub fn zip<U: Element>(&self, other: &Stream<U>) -> Stream<(T,U)> {
    self.zip_with(other, |x, y| (x.clone(), y.clone()))
  }

  /// Combine corresponding elements with `f`.
  /// The result is as long as the shorter of the two streams.
  pub fn zip_with<U, V, F>(&self, other: &Stream<U>, f: F) -> Stream<V>
    where U: Element, V: Element, F: Fn(&T, &U) -> V + Shared {
    self.zip_with_shared(other, Arc::new(f))
  }

  fn zip_with_shared<U, V, F>(&self, other: &Stream<U>, f: Arc<F>) -> Stream<V>
    where U: Element, V: Element, F: Fn(&T, &U) -> V + Shared {
    match (self.node(), other.node()) {
      (Node::Cons(x,_), Node::Cons(y,_)) => {
        let lhs = self.clone();
        let rhs = other.clone();
        Stream::lazy(f(x,y), move || lhs.rest().zip_with_shared(&rhs.rest(), f))
      }
      _ => Stream::empty()
    }
  }
}
