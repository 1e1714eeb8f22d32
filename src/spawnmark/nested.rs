//! Nested process benchmark: one intermediate parent forks all the workers
//!
//! Measures what the direct benchmark measures plus the cost of routing the work through a
//! freshly forked parent, the pattern a process-per-request design with a dedicated spawner pays.

use crate::worker::do_task;
use spawnmark::constants::{WORKER_EXIT_FORK_FAILED, WORKER_EXIT_OK};
use spawnmark::err::*;
use spawnmark::os::*;
use spawnmark::report;

pub fn run(workers: usize) {
    let start = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    let pid = match fork().or_abort("Unable to fork intermediate parent") {
        ForkResult::Parent(pid) => pid,
        ForkResult::Child => run_intermediate(workers),
    };

    let (_, status) =
        waitpid(pid, WaitPidOptions::empty()).or_abort("Unable to wait for intermediate parent");
    if !wifexited(status) || wexitstatus(status) != WORKER_EXIT_OK {
        eprintln("WARNING: Intermediate parent exited abnormally; timing may be meaningless");
    }

    let end = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    report::row(
        "Child Processes",
        end.secs_since(start),
        workers,
        "child processes (via parent process)",
    );
}

/// The intermediate parent: fork and reap every grandchild worker, then exit
///
/// Runs in a forked child of the benchmark process.  Failures exit rather than abort so the outer
/// process can report them from the wait status.
fn run_intermediate(workers: usize) -> ! {
    for _ in 0..workers {
        match fork() {
            Ok(ForkResult::Parent(_)) => {}
            Ok(ForkResult::Child) => {
                do_task();
                exit(WORKER_EXIT_OK);
            }
            Err(_) => {
                eprintln("ERROR: Unable to fork grandchild worker");
                exit(WORKER_EXIT_FORK_FAILED);
            }
        }
    }

    for _ in 0..workers {
        if waitpid(-1, WaitPidOptions::empty()).is_err() {
            exit(WORKER_EXIT_FORK_FAILED);
        }
    }

    exit(WORKER_EXIT_OK)
}
