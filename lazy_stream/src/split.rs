use tracing::debug;
use crate::traits::Element;
use crate::Stream;

impl<T: Element> Stream<T> {

  /// Partition a finite stream into the elements that satisfy `pred` and
  /// those that do not, both in their original order.
  /// Forces the whole stream once.
  pub fn split<P>(&self, mut pred: P) -> (Self, Self)
    where P: FnMut(&T) -> bool {
    let mut matched = 0_usize;
    let (yes, no) =
      self.aggregate((Stream::<T>::empty(), Stream::<T>::empty()), |(yes, no), x| {
        if pred(x) { matched += 1; (yes.cons(x.clone()), no) }
        else       { (yes, no.cons(x.clone())) }
      });
    debug!(?matched, "split stream");
    let yes = yes.reverse();
    let no  = no.reverse();
    (yes, no)
  }
}
