// Streams: lazy, persistent, possibly infinite lists.

use std::sync::Arc;
use crate::cell::Cell;
use crate::error::{EmptySequenceError, Result};

pub(crate) enum Node<T> {
  Empty,
  Cons(T, Cell<Stream<T>>)
}

/// Where the tail of a rebuilt node comes from.
/// The tail cell of such a node is `pending`, and the stream it copies is
/// kept here instead of inside a closure, so `Drop` can reach it.
enum Rebuild<T> {
  /// The tail is a rebuilt copy of this stream.
  Prepend(Stream<T>),
  /// The node is a rebuilt copy of this stream's first node, which is
  /// never itself a rebuilt copy.
  Copy(Stream<T>)
}

struct Link<T> {
  node:    Node<T>,
  rebuild: Option<Rebuild<T>>
}

/// A lazy, immutable, possibly infinite sequence.
///
/// A stream is a shared handle to a node. A non-empty node holds its head
/// and a deferred tail that is computed the first time somebody asks for it,
/// and then cached for everybody holding the node. Cloning a stream is cheap
/// and shares all nodes, forced or not.
pub struct Stream<T> {
  link: Arc<Link<T>>
}

impl<T> Clone for Stream<T> {
  fn clone(&self) -> Self { Stream { link: self.link.clone() } }
}

impl<T> Default for Stream<T> {
  fn default() -> Self { Stream::empty() }
}

// Forced tails and rebuild sources are released with a work list, so that
// dropping a long or deeply nested stream does not recurse once per node.
impl<T> Drop for Stream<T> {
  fn drop(&mut self) {
    let mut pending: Vec<Stream<T>> =
      self.detach().into_iter().flatten().collect();
    while let Some(mut stream) = pending.pop() {
      pending.extend(stream.detach().into_iter().flatten())
    }
  }
}

impl<T> Rebuild<T> {
  fn into_stream(self) -> Stream<T> {
    match self {
      Rebuild::Prepend(s) | Rebuild::Copy(s) => s
    }
  }
}

impl<T: Clone> Rebuild<T> {
  fn next(&self) -> Stream<T> {
    match self {
      Rebuild::Prepend(s) => Stream::rebuilt(s),
      Rebuild::Copy(s)    => Stream::rebuilt(&s.rest())
    }
  }
}

impl<T> Stream<T> {

  pub(crate) fn from_node(node: Node<T>) -> Self {
    Stream { link: Arc::new(Link { node, rebuild: None }) }
  }

  fn from_rebuild(head: T, rebuild: Rebuild<T>) -> Self {
    let node = Node::Cons(head, Cell::pending());
    Stream { link: Arc::new(Link { node, rebuild: Some(rebuild) }) }
  }

  pub(crate) fn node(&self) -> &Node<T> { &self.link.node }

  /// A non-empty stream whose tail is computed by `tail` on first access.
  pub(crate) fn lazy<F>(head: T, tail: F) -> Self
    where F: FnOnce() -> Stream<T> + Send + 'static {
    Stream::from_node(Node::Cons(head, Cell::new(tail)))
  }

  /// A non-empty stream with an already computed tail.
  pub(crate) fn strict(head: T, tail: Stream<T>) -> Self {
    Stream::from_node(Node::Cons(head, Cell::ready(tail)))
  }

  /// `head` in front of a rebuilt copy of `stream`.
  pub(crate) fn prepend_rebuilt(head: T, stream: &Stream<T>) -> Self {
    Stream::from_rebuild(head, Rebuild::Prepend(stream.clone()))
  }

  /// If we are the only owner of this node, detach its forced tail and the
  /// stream it was rebuilt from.
  fn detach(&mut self) -> [Option<Stream<T>>; 2] {
    match Arc::get_mut(&mut self.link) {
      None       => [None, None],
      Some(link) => {
        let tail = match &mut link.node {
          Node::Empty        => None,
          Node::Cons(_,tail) => tail.take()
        };
        [tail, link.rebuild.take().map(Rebuild::into_stream)]
      }
    }
  }

  /// The empty stream.
  pub fn empty() -> Self { Stream::from_node(Node::Empty) }

  pub fn is_empty(&self) -> bool { matches!(self.node(), Node::Empty) }

  /// The first element.
  pub fn head(&self) -> Result<&T> {
    match self.node() {
      Node::Empty     => Err(EmptySequenceError::new("head")),
      Node::Cons(x,_) => Ok(x)
    }
  }

  /// Has the tail of this node been computed already.
  /// Always `false` for the empty stream.
  pub fn is_tail_forced(&self) -> bool {
    match self.node() {
      Node::Empty        => false,
      Node::Cons(_,tail) => tail.is_forced()
    }
  }

  /// Prepend an element. O(1), the new stream shares `self` as its tail.
  pub fn cons(&self, element: T) -> Self {
    Stream::strict(element, self.clone())
  }

  /// Do the two streams share the same first node.
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.link, &other.link)
  }

}

impl<T: Clone> Stream<T> {

  /// Everything but the first element.
  /// Forces the tail if this is the first time it is requested.
  pub fn tail(&self) -> Result<Stream<T>> {
    match self.forced_tail() {
      None       => Err(EmptySequenceError::new("tail")),
      Some(tail) => Ok(tail.clone())
    }
  }

  /// Split into head and (forced) tail.
  pub fn uncons(&self) -> Option<(&T, Stream<T>)> {
    let (x,xs) = self.step()?;
    Some((x, xs.clone()))
  }

  /// Like `uncons`, but borrows the tail.
  pub(crate) fn step(&self) -> Option<(&T, &Stream<T>)> {
    match self.node() {
      Node::Empty     => None,
      Node::Cons(x,_) => Some((x, self.forced_tail()?))
    }
  }

  /// The tail, or the empty stream if there is none.
  /// Used inside deferred tails, where the source node is known to be
  /// non-empty.
  pub(crate) fn rest(&self) -> Stream<T> {
    self.forced_tail().cloned().unwrap_or_default()
  }

  /// Force the tail of a non-empty node.
  pub(crate) fn forced_tail(&self) -> Option<&Stream<T>> {
    match (self.node(), &self.link.rebuild) {
      (Node::Empty, _)               => None,
      (Node::Cons(_,tail), None)     => Some(tail.force()),
      (Node::Cons(_,tail), Some(rb)) => Some(tail.force_with(|| rb.next()))
    }
  }

  /// A rebuilt copy of `stream`: same elements, new nodes.
  /// A copy of a copy is made from the original, so forcing one node of a
  /// deeply nested rebuild only forces one node of the original.
  fn rebuilt(stream: &Stream<T>) -> Self {
    let origin = match &stream.link.rebuild {
      Some(Rebuild::Copy(origin)) => origin.clone(),
      _                           => stream.clone()
    };
    let head = match origin.node() {
      Node::Empty     => return Stream::empty(),
      Node::Cons(x,_) => x.clone()
    };
    Stream::from_rebuild(head, Rebuild::Copy(origin))
  }
}
