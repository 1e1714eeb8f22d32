//! Direct process benchmark: fork a worker per unit of work, then reap them all

use crate::worker::do_task;
use spawnmark::constants::WORKER_EXIT_OK;
use spawnmark::err::*;
use spawnmark::os::*;
use spawnmark::report;

pub fn run(workers: usize) {
    let start = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    for _ in 0..workers {
        match fork().or_abort("Unable to fork worker process") {
            ForkResult::Parent(_) => {}
            ForkResult::Child => {
                do_task();
                exit(WORKER_EXIT_OK);
            }
        }
    }

    // Reap exactly as many children as were spawned.  Waiting on -1 (any child) makes a pid list
    // unnecessary; nothing else in the process has children to confuse it.
    for _ in 0..workers {
        let _ = waitpid(-1, WaitPidOptions::empty()).or_abort("Unable to wait for worker process");
    }

    let end = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    report::row("Processes", end.secs_since(start), workers, "processes");
}
