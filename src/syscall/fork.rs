use crate::err::*;
use crate::types::pid_t;
use syscalls::{Sysno, syscall};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForkResult {
    /// In parent process with child PID
    Parent(pid_t),
    /// In child process
    Child,
}

/// Fork the current process
///
/// Returns ForkResult::Parent(pid) in the parent process, ForkResult::Child in the child
///
/// # Safety
///
/// This function can be called safely in single-threaded contexts.
#[cfg(target_arch = "x86_64")]
pub unsafe fn fork() -> Result<ForkResult, Errno> {
    let pid = syscall!(Sysno::fork)? as pid_t;
    if pid == 0 {
        Ok(ForkResult::Child)
    } else {
        Ok(ForkResult::Parent(pid))
    }
}

/// Fork the current process
///
/// AArch64 dropped the fork system call; clone with SIGCHLD and no flags is the kernel's fork.
///
/// # Safety
///
/// This function can be called safely in single-threaded contexts.
#[cfg(target_arch = "aarch64")]
pub unsafe fn fork() -> Result<ForkResult, Errno> {
    const SIGCHLD: u64 = 17;

    let pid = syscall!(Sysno::clone, SIGCHLD, 0, 0, 0, 0)? as pid_t;
    if pid == 0 {
        Ok(ForkResult::Child)
    } else {
        Ok(ForkResult::Parent(pid))
    }
}
