//! Time source for the blink states

/// Monotonic millisecond clock
///
/// Implemented by the board support (SysTick counter, timer peripheral,
/// `Instant` on a host) and read by the ON state.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch
    fn now_ms(&self) -> u64;

    /// Milliseconds elapsed since `since`
    ///
    /// Saturates at zero if `since` lies in the future.
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().saturating_sub(since)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
