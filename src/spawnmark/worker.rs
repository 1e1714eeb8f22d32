/// The task every worker runs
///
/// Intentionally empty: the benchmarks measure creation and teardown overhead, so the work itself
/// must cost nothing.
#[inline(never)]
pub fn do_task() {}
