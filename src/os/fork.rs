use crate::err::Errno;

pub type ForkResult = crate::syscall::ForkResult;

/// Fork the current process
///
/// # Safety
///
/// fork() is unsafe in:
/// - Multithreaded environments
/// - Async environments
/// - non-signalfd Signal handling
///
/// Spawnmark runs its process benchmarks before its thread benchmark and joins every thread it
/// spawns, so fork() only ever runs while single-threaded, and reasonable usage is safe.
pub fn fork() -> Result<ForkResult, Errno> {
    // SAFETY: spawnmark is single-threaded whenever it forks, so fork is safe
    unsafe { crate::syscall::fork() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::{WaitPidOptions, waitpid, wexitstatus, wifexited};

    #[test]
    fn test_fork_child_status_round_trip() {
        let pid = match fork().expect("fork failed") {
            ForkResult::Parent(pid) => pid,
            ForkResult::Child => crate::os::exit(42),
        };

        let (reaped, status) = waitpid(pid, WaitPidOptions::empty()).expect("waitpid failed");
        assert_eq!(reaped, pid);
        assert!(wifexited(status));
        assert_eq!(wexitstatus(status), 42);
    }
}
