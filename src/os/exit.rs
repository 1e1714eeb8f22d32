use crate::types::c_int;

/// Exit the whole process
///
/// Routes through exit_group rather than plain exit: forked workers exit whole (single-threaded)
/// processes either way, but an abort partway through the thread benchmark must take every
/// spawned worker thread down with it.
#[inline]
pub fn exit(status: c_int) -> ! {
    unsafe { crate::syscall::exit(status) }
}
