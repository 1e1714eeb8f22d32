#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

// Implementation of features Rust core expects from libc
//
// This conflicts with anything which uses std, including src/build/main.rs and tests.  To avoid
// this conflict, the spawnmark binary `mod`s this directly rather than `mod`ing it in the shared
// `lib.rs`.
//
// We don't need to use this, just make it visible to the linker.
#[cfg(not(test))]
#[path = "../libc_shim/mod.rs"]
mod libc_shim;

mod nested;
mod processes;
mod threads;
mod worker;

use spawnmark::constants::*;
use spawnmark::err::*;
use spawnmark::os::*;
use spawnmark::report;
use spawnmark::types::*;

/// # Safety
///
/// Platform ABI guarantees incoming C-style format
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn main(
    argc: isize,
    argv: *const *const core::ffi::c_char,
    _envp: *const *const core::ffi::c_char,
) -> isize {
    let argv = unsafe { Argv::from_raw(argc, argv) };
    let workers = parse_workers(&argv);

    report::header();

    // Same order as the table prints: direct processes, nested processes, then threads.  Running
    // the thread benchmark last also keeps every fork() call on a single-threaded process.
    processes::run(workers);
    nested::run(workers);
    threads::run(workers);

    0
}

/// Worker count: `spawnmark [workers]`, validated and bounded by the library
fn parse_workers(argv: &Argv) -> usize {
    let Some(arg) = argv.get(1) else {
        return DEFAULT_WORKERS;
    };

    match arg.parse_worker_count() {
        Ok(workers) => workers,
        Err(WorkerCountError::Invalid) => abort_with_msg("Worker count must be a decimal integer"),
        Err(WorkerCountError::Zero) => abort_with_msg("Worker count must be at least 1"),
        Err(WorkerCountError::TooMany) => {
            eprint("ERROR: Worker count must be at most ");
            eprint(MAX_WORKERS);
            eprint("\n");
            exit(1);
        }
    }
}
