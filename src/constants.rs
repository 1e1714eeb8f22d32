use crate::types::c_int;

/// Number of workers each benchmark spawns when no count is given on the command line
pub const DEFAULT_WORKERS: usize = 1000;

/// Upper bound on the worker count
///
/// Thread handles live in a fixed-size buffer (there is no allocator), so the command-line
/// override must be bounded at compile time.
pub const MAX_WORKERS: usize = 4096;

/// Width of the label column in the report table
pub const COL_WIDTH: usize = 16;

/// Size of each thread's stack mapping
///
/// Workers run a no-op task, so the stack only has to absorb the trampoline frame and the entry
/// function.  One page would do; 64 KiB leaves room without being measurable in the timings.
pub const THREAD_STACK_SIZE: usize = 64 * 1024;

/// Size of the buffer a report row is rendered into before the single write to stdout
///
/// Worst case is the child-process row: label(16) + glue(2) + seconds(24) + text(~40) + count(20).
pub const ROW_SIZE: usize = 128;

/// Exit status workers report on success
pub const WORKER_EXIT_OK: c_int = 0;

/// Exit status the intermediate parent reports when a grandchild fork fails
pub const WORKER_EXIT_FORK_FAILED: c_int = 1;
