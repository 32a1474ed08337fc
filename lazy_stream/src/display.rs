use std::fmt;
use crate::core::Node;
use crate::Stream;

// Rendering shows only the head: the tail is never forced.

impl<T: fmt::Display> fmt::Display for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.node() {
      Node::Empty     => write!(f, "Empty"),
      Node::Cons(x,_) => write!(f, "Stream({}, ?)", x)
    }
  }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.node() {
      Node::Empty     => write!(f, "Empty"),
      Node::Cons(x,_) => write!(f, "Stream({:?}, ?)", x)
    }
  }
}


#[cfg(test)]
mod test {
  use crate::{stream, Stream};

  #[test]
  fn render_empty() {
    assert_eq!(Stream::<u8>::empty().to_string(), "Empty");
    assert_eq!(format!("{:?}", Stream::<u8>::empty()), "Empty");
  }

  #[test]
  fn render_head_only() {
    assert_eq!(stream![2,1].to_string(), "Stream(2, ?)");
    assert_eq!(format!("{:?}", stream!["a"]), "Stream(\"a\", ?)");
  }

  #[test]
  fn render_does_not_force() {
    let nats = Stream::iterate(0_u64, |x| x + 1);
    assert_eq!(nats.to_string(), "Stream(0, ?)");
    assert_eq!(format!("{:?}", nats), "Stream(0, ?)");
    assert!(!nats.is_tail_forced());
  }
}
