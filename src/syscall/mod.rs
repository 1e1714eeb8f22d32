//! Thin unsafe wrappers over raw Linux system calls
//!
//! One file per system call.  Safety arguments live a layer up, in `crate::os`.

mod clock_gettime;
mod clone;
mod exit;
mod fork;
mod futex;
mod mmap;
mod waitpid;
mod write;

pub use clock_gettime::*;
pub use clone::*;
pub use exit::*;
pub use fork::*;
pub use futex::*;
pub use mmap::*;
pub use waitpid::*;
pub use write::*;
