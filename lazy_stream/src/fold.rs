use crate::traits::Element;
use crate::Stream;

// Eager consumers. None of these terminate on an infinite stream unless
// they can stop early.
impl<T: Element> Stream<T> {

  /// Call `action` on every element, in order.
  pub fn for_each<F>(&self, mut action: F)
    where F: FnMut(&T) {
    let mut current = self.clone();
    loop {
      let next = match current.step() {
        None        => return,
        Some((x,xs)) => { action(x); xs.clone() }
      };
      current = next;
    }
  }

  /// Fold from the left: `f(...f(f(identity,x0),x1)...,xn)`.
  pub fn aggregate<A, F>(&self, identity: A, mut f: F) -> A
    where F: FnMut(A, &T) -> A {
    let mut acc     = identity;
    let mut current = self.clone();
    loop {
      let next = match current.step() {
        None        => return acc,
        Some((x,xs)) => { acc = f(acc, x); xs.clone() }
      };
      current = next;
    }
  }

  /// Do all elements satisfy `pred`.
  /// Stops at the first element that does not, without forcing its tail.
  pub fn all<P>(&self, mut pred: P) -> bool
    where P: FnMut(&T) -> bool {
    !self.any(|x| !pred(x))
  }

  /// Does some element satisfy `pred`.
  /// Stops at the first element that does, without forcing its tail.
  pub fn any<P>(&self, mut pred: P) -> bool
    where P: FnMut(&T) -> bool {
    self.iter().any(|x| pred(&x))
  }

  /// The number of elements in a finite stream.
  pub fn count(&self) -> usize { self.aggregate(0, |n, _| n + 1) }
}
