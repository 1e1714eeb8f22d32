//! Thread benchmark: spawn a kernel thread per unit of work, then join them all
//!
//! Handles live in a fixed buffer sized for MAX_WORKERS; there is no allocator to grow into, and
//! parse_workers() already enforced the bound.

use crate::worker::do_task;
use spawnmark::constants::MAX_WORKERS;
use spawnmark::err::*;
use spawnmark::os::*;
use spawnmark::report;

pub fn run(workers: usize) {
    let start = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    let mut handles: [Option<Thread>; MAX_WORKERS] = [const { None }; MAX_WORKERS];

    for slot in handles.iter_mut().take(workers) {
        *slot = Some(Thread::spawn(do_task).or_abort("Unable to spawn worker thread"));
    }

    for slot in handles.iter_mut().take(workers) {
        if let Some(thread) = slot.take() {
            thread.join().or_abort("Unable to join worker thread");
        }
    }

    let end = get_time_monotonic().or_abort("Unable to read the monotonic clock");

    report::row("Threads", end.secs_since(start), workers, "threads");
}
