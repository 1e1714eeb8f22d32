use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

// `man 2 futex` operations.  Only the ones thread join needs.
const FUTEX_WAIT: c_int = 0;

/// Block until the futex word at `uaddr` no longer holds `expected`
///
/// Returns Ok(()) on wakeup.  Returns EAGAIN if the word already differs from `expected` and
/// EINTR if interrupted by a signal; callers re-check the word and retry in both cases.
///
/// # Safety
///
/// The caller must ensure `uaddr` is valid for reads for the duration of the call.
pub unsafe fn futex_wait(uaddr: *const c_int, expected: c_int) -> Result<(), Errno> {
    syscall!(
        Sysno::futex,
        uaddr,
        FUTEX_WAIT,
        expected,
        0, // timeout pointer (NULL): wait indefinitely
        0, // uaddr2 (unused by FUTEX_WAIT)
        0  // val3 (unused by FUTEX_WAIT)
    )
    .map(|_| ())
}
