use crate::err::*;
use crate::syscall::{ClockId, clock_gettime};
use crate::types::timespec;

/// Get monotonically increasing time
///
/// Uses CLOCK_MONOTONIC rather than the coarse variant: the thread benchmark finishes in tens of
/// milliseconds, so tick-level resolution would swallow the measurement.
///
/// Returns a timespec with tv_sec (seconds) and tv_nsec (nanoseconds).
#[inline]
pub fn get_time_monotonic() -> Result<timespec, Errno> {
    let mut tp = timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    // Safety: Only concern is that `tp` is a valid pointer, which we've just created.
    unsafe { clock_gettime(ClockId::CLOCK_MONOTONIC, &mut tp) }?;
    Ok(tp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_never_goes_backward() {
        let a = get_time_monotonic().expect("clock_gettime failed");
        let b = get_time_monotonic().expect("clock_gettime failed");
        assert!(b.nanos_since(a) >= 0);
    }
}
