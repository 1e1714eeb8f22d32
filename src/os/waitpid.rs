use crate::err::*;
use crate::types::*;

pub use crate::syscall::WaitPidOptions;

/// Wait for a child process to change state
///
/// Returns (pid, status) of the child that changed state
#[inline]
pub fn waitpid(pid: pid_t, options: WaitPidOptions) -> Result<(pid_t, c_int), Errno> {
    // SAFETY: waitpid is always safe to call
    unsafe { crate::syscall::waitpid(pid, options) }
}

/// Extract exit status from wait status
pub const fn wexitstatus(status: c_int) -> c_int {
    crate::syscall::wexitstatus(status)
}

/// Check if process exited normally
pub const fn wifexited(status: c_int) -> bool {
    crate::syscall::wifexited(status)
}

/// Check if process was terminated by signal
pub const fn wifsignaled(status: c_int) -> bool {
    crate::syscall::wifsignaled(status)
}

/// Extract termination signal from wait status
pub const fn wtermsig(status: c_int) -> c_int {
    crate::syscall::wtermsig(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wait statuses in the kernel's encoding: exit code in bits 8..16, signal in bits 0..7.

    #[test]
    fn test_normal_exit_status() {
        let status = 42 << 8;
        assert!(wifexited(status));
        assert!(!wifsignaled(status));
        assert_eq!(wexitstatus(status), 42);
    }

    #[test]
    fn test_signaled_status() {
        let status = 9; // SIGKILL
        assert!(!wifexited(status));
        assert!(wifsignaled(status));
        assert_eq!(wtermsig(status), 9);
    }
}
