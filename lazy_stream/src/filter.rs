use std::sync::Arc;
use tracing::trace;
use crate::core::Node;
use crate::traits::{Element, Shared};
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Keep only the elements satisfying `pred`.
  ///
  /// Building a filtered node searches forward for the next matching
  /// element right away, so filtering an infinite stream in which no further
  /// element matches does not terminate. The search is a loop, and a long
  /// non-matching run costs no stack.
  pub fn filter<P>(&self, pred: P) -> Self
    where P: Fn(&T) -> bool + Shared {
    filter_from(self.clone(), Arc::new(pred))
  }

  /// The longest prefix whose elements all satisfy `pred`.
  pub fn take_while<P>(&self, pred: P) -> Self
    where P: Fn(&T) -> bool + Shared {
    self.take_while_with(Arc::new(pred))
  }

  fn take_while_with<P>(&self, pred: Arc<P>) -> Self
    where P: Fn(&T) -> bool + Shared {
    match self.node() {
      Node::Cons(x,_) if pred(x) => {
        let source = self.clone();
        Stream::lazy(x.clone(), move || source.rest().take_while_with(pred))
      }
      _ => Stream::empty()
    }
  }

  /// The suffix starting at the first element that does not satisfy `pred`.
  /// The skipped prefix is forced immediately.
  pub fn drop_while<P>(&self, mut pred: P) -> Self
    where P: FnMut(&T) -> bool {
    let mut current = self.clone();
    let mut skipped = 0_usize;
    loop {
      let next = match current.node() {
        Node::Cons(x,_) if pred(x) => current.rest(),
        _                          => break
      };
      current = next;
      skipped += 1;
    }
    if skipped > 0 { trace!(?skipped, "drop_while skipped prefix") }
    current
  }
}

fn filter_from<T, P>(source: Stream<T>, pred: Arc<P>) -> Stream<T>
  where T: Element, P: Fn(&T) -> bool + Shared {
  let mut current = source;
  let mut skipped = 0_usize;
  loop {
    let next = match current.node() {
      Node::Empty => break,
      Node::Cons(x,_) if pred(x) => {
        if skipped > 0 { trace!(?skipped, "filter skipped non-matching elements") }
        let x      = x.clone();
        let source = current.clone();
        return Stream::lazy(x, move || filter_from(source.rest(), pred))
      }
      Node::Cons(_,_) => current.rest()
    };
    current = next;
    skipped += 1;
  }
  if skipped > 0 { trace!(?skipped, "filter skipped non-matching elements") }
  Stream::empty()
}
