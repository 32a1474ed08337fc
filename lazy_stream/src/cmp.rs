use crate::traits::Element;
use crate::Stream;

/// Element-wise equality.
/// Forces both streams until they differ, end, or reach a shared node, so
/// comparing two distinct infinite streams with equal elements does not
/// terminate.
impl<T: Element + PartialEq> PartialEq for Stream<T> {
  fn eq(&self, other: &Self) -> bool {
    let mut lhs = self.clone();
    let mut rhs = other.clone();
    loop {
      if lhs.ptr_eq(&rhs) { return true }
      let (l,r) = match (lhs.step(), rhs.step()) {
        (None, None) => return true,
        (Some((x,xs)), Some((y,ys))) => {
          if x != y { return false }
          (xs.clone(), ys.clone())
        }
        _ => return false
      };
      lhs = l;
      rhs = r;
    }
  }
}

impl<T: Element + Eq> Eq for Stream<T> {}


#[cfg(test)]
mod test {
  use crate::{stream, Stream};

  #[test]
  fn test_eq() {
    assert_eq!(stream![1,2,3], Stream::of(vec![1,2,3]));
    assert_ne!(stream![1,2,3], stream![1,2]);
    assert_ne!(stream![1,2], stream![1,2,3]);
    assert_ne!(stream![1,2,4], stream![1,2,3]);
    assert_eq!(Stream::<u8>::empty(), Stream::empty());
  }

  #[test]
  fn shared_infinite_suffix_is_equal() {
    let nats = Stream::iterate(0_u64, |x| x + 1);
    assert_eq!(nats, nats.clone());
    assert_eq!(nats.cons(7), nats.cons(7));
    assert_ne!(nats.cons(7), nats.cons(8));
  }
}
