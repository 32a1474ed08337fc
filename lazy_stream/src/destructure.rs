use crate::error::{EmptySequenceError, Result};
use crate::traits::Element;
use crate::Stream;

// Taking a stream apart into its leading elements and the rest.
impl<T: Element> Stream<T> {

  /// The first element and the rest of the stream.
  pub fn first(&self) -> Result<(T, Stream<T>)> {
    let (x,xs) = self.uncons().ok_or(EmptySequenceError::new("first"))?;
    Ok((x.clone(), xs))
  }

  /// The first two elements and the rest of the stream.
  pub fn first_two(&self) -> Result<(T, T, Stream<T>)> {
    let err = || EmptySequenceError::new("first_two");
    let (x,xs) = self.uncons().ok_or_else(err)?;
    let (y,ys) = xs.uncons().ok_or_else(err)?;
    Ok((x.clone(), y.clone(), ys))
  }

  /// The first three elements and the rest of the stream.
  pub fn first_three(&self) -> Result<(T, T, T, Stream<T>)> {
    let err = || EmptySequenceError::new("first_three");
    let (x,xs) = self.uncons().ok_or_else(err)?;
    let (y,ys) = xs.uncons().ok_or_else(err)?;
    let (z,zs) = ys.uncons().ok_or_else(err)?;
    Ok((x.clone(), y.clone(), z.clone(), zs))
  }
}
