use crate::core::Node;
use crate::traits::Element;
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Iterate over the elements, cloning each one.
  pub fn iter(&self) -> Iter<T> {
    Iter { current: self.clone(), started: false }
  }

  /// Collect the elements of a finite stream, in order.
  pub fn to_vec(&self) -> Vec<T> { self.iter().collect() }
}

/// Iterator over the elements of a stream.
///
/// The tail of a node is forced only when the element after it is
/// requested, so stopping early leaves the rest of the stream unforced.
#[derive(Clone)]
pub struct Iter<T> {
  current: Stream<T>,
  started: bool
}

impl<T: Element> Iterator for Iter<T> {
  type Item = T;
  fn next(&mut self) -> Option<Self::Item> {
    if self.started {
      let next = self.current.rest();
      self.current = next;
    }
    match self.current.node() {
      Node::Empty     => None,
      Node::Cons(x,_) => { self.started = true; Some(x.clone()) }
    }
  }
}

impl<T: Element> IntoIterator for Stream<T> {
  type Item = T;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Self::IntoIter { Iter { current: self, started: false } }
}

impl<'a, T: Element> IntoIterator for &'a Stream<T> {
  type Item = T;
  type IntoIter = Iter<T>;
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
