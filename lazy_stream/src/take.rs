use crate::core::Node;
use crate::traits::Element;
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Keep at most the first `n` elements.
  /// The source is never forced past its `n`-th element.
  pub fn take(&self, n: usize) -> Self {
    if n == 0 { return Stream::empty() }
    match self.node() {
      Node::Empty               => Stream::empty(),
      Node::Cons(x,_) if n == 1 => Stream::strict(x.clone(), Stream::empty()),
      Node::Cons(x,_)           => {
        let source = self.clone();
        Stream::lazy(x.clone(), move || source.rest().take(n - 1))
      }
    }
  }

  /// Skip the first `n` elements.
  /// The skipped elements are forced immediately; `drop(0)` returns the
  /// stream itself.
  pub fn drop(&self, n: usize) -> Self {
    let mut current = self.clone();
    for _ in 0 .. n {
      let next = match current.step() {
        None        => break,
        Some((_,xs)) => xs.clone()
      };
      current = next;
    }
    current
  }
}
