use std::fmt;
use std::sync::{Mutex, PoisonError};
use once_cell::sync::OnceCell;
use tracing::trace;

type Thunk<T> = Box<dyn FnOnce() -> T + Send>;

/// A deferred computation that runs at most once.
///
/// The first `force` runs the computation and caches its result.
/// Later calls, from this or any other thread, return the cached value.
/// Concurrent callers block until the single running computation publishes
/// its result.
pub struct Cell<T> {
  value: OnceCell<T>,
  thunk: Mutex<Option<Thunk<T>>>
}

impl<T> Cell<T> {

  /// Defer `f` until the first `force`.
  pub fn new<F>(f: F) -> Self
    where F: FnOnce() -> T + Send + 'static {
    Cell { value: OnceCell::new(), thunk: Mutex::new(Some(Box::new(f))) }
  }

  /// A cell with no computation of its own. Its value is supplied by the
  /// first `force_with`.
  pub(crate) fn pending() -> Self {
    Cell { value: OnceCell::new(), thunk: Mutex::new(None) }
  }

  /// A cell that is already forced.
  pub fn ready(value: T) -> Self {
    Cell { value: OnceCell::with_value(value), thunk: Mutex::new(None) }
  }

  /// Get the value, running the computation if this is the first access.
  /// Panics if an earlier run of the computation panicked.
  pub fn force(&self) -> &T {
    self.value.get_or_init(|| {
      let thunk =
        self.thunk.lock().unwrap_or_else(PoisonError::into_inner).take();
      match thunk {
        Some(f) => { trace!("forcing deferred cell"); f() }
        None    => panic!("deferred cell forced after its computation panicked")
      }
    })
  }

  /// Get the value of a `pending` cell, computing it with `f` on first
  /// access. Concurrent callers still see a single result.
  pub(crate) fn force_with<F: FnOnce() -> T>(&self, f: F) -> &T {
    self.value.get_or_init(f)
  }

  /// The value, if the cell has been forced.
  pub fn get(&self) -> Option<&T> { self.value.get() }

  pub fn is_forced(&self) -> bool { self.value.get().is_some() }

  /// Move the value out of a forced cell.
  pub(crate) fn take(&mut self) -> Option<T> { self.value.take() }
}

impl<T: fmt::Debug> fmt::Debug for Cell<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.get() {
      Some(v) => write!(f, "Cell({:?})", v),
      None    => write!(f, "Cell(?)")
    }
  }
}


#[cfg(test)]
mod test {
  use super::Cell;
  use std::sync::Arc;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  fn counted(calls: &Arc<AtomicUsize>) -> Cell<u64> {
    let calls = calls.clone();
    Cell::new(move || {
      calls.fetch_add(1, Ordering::SeqCst);
      std::thread::sleep(Duration::from_millis(5));
      42
    })
  }

  #[test]
  fn runs_once_when_forced_repeatedly() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cell  = counted(&calls);
    assert!(!cell.is_forced());
    for _ in 0 .. 10 {
      assert_eq!(*cell.force(), 42);
    }
    assert!(cell.is_forced());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn runs_once_under_concurrent_force() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cell  = counted(&calls);
    std::thread::scope(|scope| {
      for _ in 0 .. 16 {
        scope.spawn(|| assert_eq!(*cell.force(), 42));
      }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
  }

  #[test]
  fn ready_cell_is_forced() {
    let cell = Cell::ready("x");
    assert!(cell.is_forced());
    assert_eq!(cell.get(), Some(&"x"));
    assert_eq!(format!("{:?}", cell), "Cell(\"x\")");
  }

  #[test]
  fn debug_does_not_force() {
    let cell = Cell::new(|| 1);
    assert_eq!(format!("{:?}", cell), "Cell(?)");
    assert!(!cell.is_forced());
  }

  #[test]
  fn pending_cell_keeps_first_value() {
    let cell = Cell::pending();
    assert!(!cell.is_forced());
    assert_eq!(*cell.force_with(|| 3), 3);
    assert_eq!(*cell.force_with(|| 4), 3);
    assert_eq!(*cell.force(), 3);
  }

  #[test]
  fn panicking_computation_is_not_retried() {
    let cell = Cell::new(|| -> u8 { panic!("boom") });
    let first  = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      cell.force();
    }));
    assert!(first.is_err());
    let second = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
      cell.force();
    }));
    assert!(second.is_err());
  }
}
