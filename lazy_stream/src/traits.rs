
/// Types that can be stored in a stream.
/// Elements are cloned out of shared nodes and may cross threads together
/// with the stream that holds them.
pub trait Element : Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> Element for T {}


/// Functions stored inside deferred tails.
/// They are shared by every tail of the derived stream, so they must be
/// callable many times and from any thread.
pub trait Shared : Send + Sync + 'static {}

impl<F: Send + Sync + 'static> Shared for F {}
