//! # Error handling
//!
//! Every unrecoverable scenario in spawnmark resolves the same way: print a message to stderr and
//! exit nonzero.  The benchmark holds no state worth recovering and is never PID 1, so there is
//! nothing gentler to do.
//!
//! Our print machinery does not support typical Rust `{}`-formatting.  Instead, failure sites go
//! through the `or_abort` extension traits which append the errno description when one exists.

use crate::os::*;

pub type Errno = syscalls::Errno;

fn abort() -> ! {
    exit(1);
}

pub fn abort_with_msg(msg: &str) -> ! {
    eprint("ERROR: ");
    eprint(msg);
    eprint("\n");

    abort()
}

pub trait OrAbortResult<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortResult<T> for Result<T, Errno> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        let e = match self {
            Ok(t) => return t,
            Err(e) => e,
        };

        eprint("ERROR: ");
        eprint(msg);
        if let Some(e) = e.description() {
            eprint(": ");
            eprint(e);
        }
        eprint("\n");

        abort();
    }
}

pub trait OrAbortOption<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortOption<T> for Option<T> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        if let Some(t) = self {
            return t;
        };

        eprint("ERROR: ");
        eprint(msg);
        eprint("\n");

        abort();
    }
}
