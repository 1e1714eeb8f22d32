//! Safe wrappers over `crate::syscall`
//!
//! Each wrapper carries the safety argument for why the underlying unsafe call is fine in
//! spawnmark's usage.

mod argv;
mod exit;
mod fd;
mod fork;
mod print;
mod thread;
mod time;
mod waitpid;

pub use argv::*;
pub use exit::*;
pub use fd::*;
pub use fork::*;
pub use print::*;
pub use thread::*;
pub use time::*;
pub use waitpid::*;
