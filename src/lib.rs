#![cfg_attr(not(test), allow(unused_attributes))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

// Implementation of features Rust core expects from libc
//
// This conflicts with anything which uses std, including src/build/main.rs and tests.  To avoid
// this conflict, the spawnmark binary `mod`s this directly rather than `mod`ing it in the shared
// `lib.rs`.
//
// mod libc_shim;

pub mod constants;
pub mod err;
pub mod os;
pub mod report;
pub mod syscall;
pub mod types;
pub mod util;
