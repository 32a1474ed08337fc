use std::sync::Arc;
use crate::core::Node;
use crate::traits::{Element, Shared};
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Apply `f` to every element.
  pub fn map<U, F>(&self, f: F) -> Stream<U>
    where U: Element, F: Fn(&T) -> U + Shared {
    self.map_with(Arc::new(f))
  }

  fn map_with<U, F>(&self, f: Arc<F>) -> Stream<U>
    where U: Element, F: Fn(&T) -> U + Shared {
    match self.node() {
      Node::Empty     => Stream::empty(),
      Node::Cons(x,_) => {
        let source = self.clone();
        Stream::lazy(f(x), move || source.rest().map_with(f))
      }
    }
  }

  /// Replace every element with the stream computed from it, and
  /// concatenate the results.
  ///
  /// Elements whose stream is empty are skipped with a loop, so a long run
  /// of them does not grow the stack. Building the result forces `self` only
  /// as far as needed to find the first element of the result.
  pub fn flat_map<U, F>(&self, f: F) -> Stream<U>
    where U: Element, F: Fn(&T) -> Stream<U> + Shared {
    match self.node() {
      Node::Empty     => Stream::empty(),
      Node::Cons(x,_) => {
        let inner = f(x);
        flat_map_from(self.clone(), inner, Arc::new(f))
      }
    }
  }

  /// The running results of folding with `f`, starting from `identity`:
  /// `f(identity,x0), f(f(identity,x0),x1), ...`
  /// The identity itself is not part of the result.
  pub fn scan<A, F>(&self, identity: A, f: F) -> Stream<A>
    where A: Element, F: Fn(&A, &T) -> A + Shared {
    self.scan_with(identity, Arc::new(f))
  }

  fn scan_with<A, F>(&self, acc: A, f: Arc<F>) -> Stream<A>
    where A: Element, F: Fn(&A, &T) -> A + Shared {
    match self.node() {
      Node::Empty     => Stream::empty(),
      Node::Cons(x,_) => {
        let next   = f(&acc, x);
        let seed   = next.clone();
        let source = self.clone();
        Stream::lazy(next, move || source.rest().scan_with(seed, f))
      }
    }
  }
}

/// Continue a flat map: first what is left of `inner`, the stream for the
/// head of `outer`, then the streams for the rest of `outer`.
fn flat_map_from<T, U, F>(outer: Stream<T>, inner: Stream<U>, f: Arc<F>)
  -> Stream<U>
  where T: Element, U: Element, F: Fn(&T) -> Stream<U> + Shared {

  let mut outer = outer;
  let mut inner = inner;
  loop {
    if let Node::Cons(y,_) = inner.node() {
      let y    = y.clone();
      let rest = inner.clone();
      return Stream::lazy(y, move || flat_map_from(outer, rest.rest(), f))
    }
    outer = outer.rest();
    match outer.node() {
      Node::Empty     => return Stream::empty(),
      Node::Cons(x,_) => inner = f(x)
    }
  }
}
