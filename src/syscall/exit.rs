use crate::types::c_int;
use syscalls::{Sysno, syscall};

// `man 2 exit_group`:
//
// SYNOPSIS
//       void exit_group(int status);
//
// RETURN VALUE
//      This system call does not return.
//
// exit_group rather than exit: plain exit() terminates only the calling thread, and an abort
// mid-way through the thread benchmark must take the whole process down.  The thread trampoline
// in syscall/clone.rs is the one place plain exit() is wanted.
pub unsafe fn exit(status: c_int) -> ! {
    let _ = syscall!(Sysno::exit_group, status);
    // Inform the compiler that this function does not return
    unsafe { core::hint::unreachable_unchecked() };
}
