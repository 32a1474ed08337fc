// Enumerations of numbers, in the style of Cryptol's `[a ..]`,
// `[a, b ..]`, `[a .. c]` and `[a, b .. c]`.

use num::{CheckedAdd, CheckedSub, Num};
use crate::traits::Element;
use crate::Stream;

impl<T: Element + Num> Stream<T> {

  /// Sum of the elements of a finite stream.
  pub fn sum(&self) -> T {
    self.aggregate(T::zero(), |acc, x| acc + x.clone())
  }

  /// Product of the elements of a finite stream.
  pub fn product(&self) -> T {
    self.aggregate(T::one(), |acc, x| acc * x.clone())
  }
}

// Enumerations over bounded types end at the last value the type can
// represent instead of overflowing.
impl<T> Stream<T>
  where T: Element + Num + PartialOrd + CheckedAdd + CheckedSub {

  /// `[start ..]`: the stream `start, start + 1, ...`
  pub fn numbers_from(start: T) -> Self {
    enumerate(start, T::one(), None, true)
  }

  /// `[first, second ..]`: stepping by `second - first`.
  /// Equal `first` and `second` repeat `first` forever.
  pub fn from_then(first: T, second: T) -> Self {
    let up = second >= first;
    match distance(&first, &second, up) {
      Some(step) => enumerate(first, step, None, up),
      None       => Stream::of([first, second])
    }
  }

  /// `[first .. last]`: inclusive, empty if `first > last`.
  pub fn from_to(first: T, last: T) -> Self {
    if first > last { return Stream::empty() }
    enumerate(first, T::one(), Some(last), true)
  }

  /// `[first, second .. last]`: inclusive, counting up or down depending on
  /// whether `second` is above or below `first`.
  /// Equal `first` and `second` repeat `first` forever, unless it is already
  /// past `last`.
  pub fn from_then_to(first: T, second: T, last: T) -> Self {
    let up = second >= first;
    if (up && first > last) || (!up && first < last) { return Stream::empty() }
    match distance(&first, &second, up) {
      Some(step) => enumerate(first, step, Some(last), up),
      None if within(&second, &last, up) => Stream::of([first, second]),
      None => Stream::strict(first, Stream::empty())
    }
  }
}

/// The step from `first` to `second`, if the type can represent it.
/// When it cannot, the value after `second` is out of range too.
fn distance<T>(first: &T, second: &T, up: bool) -> Option<T>
  where T: CheckedSub {
  if up { second.checked_sub(first) } else { first.checked_sub(second) }
}

fn within<T: PartialOrd>(x: &T, last: &T, up: bool) -> bool {
  if up { x <= last } else { x >= last }
}

/// Count from `x` by `step`, stopping before the first value past `last`
/// or outside the range of the type. Assumes `x` itself is in bounds.
fn enumerate<T>(x: T, step: T, last: Option<T>, up: bool) -> Stream<T>
  where T: Element + PartialOrd + CheckedAdd + CheckedSub {
  let next = if up { x.checked_add(&step) } else { x.checked_sub(&step) };
  let next = next.filter(|n| last.as_ref().map_or(true, |l| within(n, l, up)));
  match next {
    None       => Stream::strict(x, Stream::empty()),
    Some(next) => Stream::lazy(x, move || enumerate(next, step, last, up))
  }
}


#[cfg(test)]
mod test {
  use crate::{stream, Stream};

  #[test]
  fn numbers_from_start() {
    assert_eq!(Stream::numbers_from(5_i32).take(3).to_vec(), vec![5,6,7]);
  }

  #[test]
  fn from_then_steps() {
    assert_eq!(Stream::from_then(1_i64, 4).take(4).to_vec(), vec![1,4,7,10]);
    assert_eq!(Stream::from_then(10_u8, 7).take(4).to_vec(), vec![10,7,4,1]);
    assert_eq!(Stream::from_then(2_u8, 2).take(3).to_vec(), vec![2,2,2]);
  }

  #[test]
  fn enumerations_stop_at_type_bounds() {
    assert_eq!(Stream::numbers_from(254_u8).to_vec(), vec![254,255]);
    assert_eq!(Stream::from_then(100_u8, 200).to_vec(), vec![100,200]);
    assert_eq!(Stream::from_then(5_u8, 3).to_vec(), vec![5,3,1]);
    assert_eq!(Stream::from_then(120_i8, 125).to_vec(), vec![120,125]);
  }

  #[test]
  fn signed_spans_wider_than_half_the_type() {
    assert_eq!(Stream::from_to(-100_i8, 100).count(), 201);
    assert_eq!(Stream::from_to(i8::MIN, i8::MAX).count(), 256);
    assert_eq!(Stream::from_to(i8::MIN, i8::MAX).aggregate(0_i32, |a, x| a + *x as i32), -128);
    assert_eq!(Stream::from_then(-100_i8, 100).to_vec(), vec![-100,100]);
    assert_eq!(Stream::from_then(100_i8, -100).to_vec(), vec![100,-100]);
    assert_eq!(Stream::from_then_to(100_i8, -100, -128).to_vec(), vec![100,-100]);
    assert_eq!(Stream::from_then_to(-100_i8, 100, 50).to_vec(), vec![-100]);
    assert_eq!(Stream::from_then_to(-128_i8, 0, 127).to_vec(), vec![-128,0]);
    assert_eq!(Stream::from_then_to(127_i8, 0, -128).to_vec(), vec![127,0,-127]);
  }

  #[test]
  fn from_to_inclusive() {
    assert_eq!(Stream::from_to(1, 5).to_vec(), vec![1,2,3,4,5]);
    assert_eq!(Stream::from_to(3, 3).to_vec(), vec![3]);
    assert!(Stream::from_to(4, 3).is_empty());
    assert_eq!(Stream::from_to(253_u8, 255).to_vec(), vec![253,254,255]);
  }

  #[test]
  fn from_then_to_both_directions() {
    assert_eq!(Stream::from_then_to(1, 3, 8).to_vec(), vec![1,3,5,7]);
    assert_eq!(Stream::from_then_to(5_u32, 3, 0).to_vec(), vec![5,3,1]);
    assert_eq!(Stream::from_then_to(6_u32, 3, 0).to_vec(), vec![6,3,0]);
    assert!(Stream::from_then_to(1, 3, 0).is_empty());
    assert!(Stream::from_then_to(1, 0, 3).is_empty());
  }

  #[test]
  fn big_integers() {
    let big = Stream::from_to(num::BigInt::from(1), num::BigInt::from(30)).product();
    assert_eq!(big.to_string(), "265252859812191058636308480000000");
  }

  #[test]
  fn sum_and_product() {
    assert_eq!(stream![1,2,3,4].sum(), 10);
    assert_eq!(stream![1,2,3,4].product(), 24);
    assert_eq!(Stream::<i32>::empty().sum(), 0);
    assert_eq!(Stream::<i32>::empty().product(), 1);
  }
}
