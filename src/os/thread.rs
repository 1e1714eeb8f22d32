//! Minimal kernel threads
//!
//! With no libc there is no pthreads, so threads are assembled from the kernel primitives
//! directly: an anonymous mapping for the stack, clone() with the standard thread flag set, and a
//! futex on the child-tid word for join.
//!
//! Mapping layout:
//!
//! ```text
//! mapping                                              mapping + THREAD_STACK_SIZE
//! |                                                    |
//! [tid futex word][ ............ stack grows down ... ][0][entry]
//! ```
//!
//! The tid word sits at the base of the mapping, far below anything a worker's stack reaches.
//! CLONE_CHILD_SETTID has the kernel store the new TID there before the thread runs, and
//! CLONE_CHILD_CLEARTID has it zero the word and futex-wake it when the thread exits, which is
//! exactly the handshake join() waits on.

use crate::constants::THREAD_STACK_SIZE;
use crate::err::Errno;
use crate::syscall::{
    CloneFlags, MapFlags, ProtFlags, clone_thread, futex_wait, mmap_anonymous, munmap,
};
use crate::types::{c_int, pid_t};
use core::sync::atomic::{AtomicI32, Ordering};

/// Placeholder tid word value between mmap and the kernel's CLONE_CHILD_SETTID store
///
/// Must be nonzero so a join racing the store does not mistake a brand-new thread for an exited
/// one.  Real TIDs are positive, so -1 can never collide.
const TID_PENDING: c_int = -1;

/// Handle to a running thread
///
/// Owns the thread's stack mapping; join() is the only way to release it.
pub struct Thread {
    mapping: *mut u8,
    tid: pid_t,
}

impl Thread {
    /// Spawn a thread running `entry`
    ///
    /// `entry` must not unwind; there is no unwinding machinery on the other side, only the
    /// trampoline's thread-exit system call.
    pub fn spawn(entry: fn()) -> Result<Self, Errno> {
        // SAFETY: fresh anonymous mapping, unmapped only by join()
        let mapping = unsafe {
            mmap_anonymous(
                THREAD_STACK_SIZE,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_PRIVATE | MapFlags::MAP_STACK,
            )
        }?;

        let tid_slot = mapping as *mut c_int;
        // SAFETY: the mapping is at least a page, is aligned, and nothing else references it yet
        unsafe { (*(tid_slot as *const AtomicI32)).store(TID_PENDING, Ordering::Relaxed) };

        // Seed [entry, 0] at the top of the stack for the clone trampoline.  The zero filler
        // keeps the stack pointer 16-byte aligned once the trampoline pops both slots.
        let top = unsafe { mapping.add(THREAD_STACK_SIZE) };
        let slots = unsafe { top.sub(2 * size_of::<usize>()) } as *mut usize;
        // SAFETY: both slots are in bounds of the mapping
        unsafe {
            slots.write(entry as usize);
            slots.add(1).write(0);
        }

        let flags = CloneFlags::CLONE_VM
            | CloneFlags::CLONE_FS
            | CloneFlags::CLONE_FILES
            | CloneFlags::CLONE_SIGHAND
            | CloneFlags::CLONE_THREAD
            | CloneFlags::CLONE_SYSVSEM
            | CloneFlags::CLONE_CHILD_SETTID
            | CloneFlags::CLONE_CHILD_CLEARTID;

        // SAFETY: the stack points at the seeded entry slot of a live writable mapping, and the
        // tid slot stays valid until join() unmaps it, after the thread has exited
        let tid = match unsafe { clone_thread(flags, slots as *mut u8, tid_slot) } {
            Ok(tid) => tid,
            Err(e) => {
                // SAFETY: the thread never started; nothing uses the mapping
                let _ = unsafe { munmap(mapping, THREAD_STACK_SIZE) };
                return Err(e);
            }
        };

        Ok(Self { mapping, tid })
    }

    pub fn tid(&self) -> pid_t {
        self.tid
    }

    /// Wait for the thread to exit, then release its stack
    pub fn join(self) -> Result<(), Errno> {
        let tid_slot = self.mapping as *const AtomicI32;

        loop {
            // SAFETY: the mapping is still live; the kernel's exit-time store is the only writer
            let val = unsafe { &*tid_slot }.load(Ordering::Acquire);
            if val == 0 {
                break;
            }

            // SAFETY: tid_slot is valid for reads while the mapping is live
            match unsafe { futex_wait(tid_slot as *const c_int, val) } {
                Ok(()) => {}
                // EAGAIN: the word changed between the load and the wait.  EINTR: signal.
                // Either way, re-check the word.
                Err(Errno::EAGAIN) | Err(Errno::EINTR) => {}
                Err(e) => return Err(e),
            }
        }

        // SAFETY: the kernel cleared the tid word, so the thread has exited and nothing can
        // touch the stack again
        unsafe { munmap(self.mapping, THREAD_STACK_SIZE) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    #[test]
    fn test_spawn_and_join_runs_entry() {
        static RAN: AtomicUsize = AtomicUsize::new(0);
        fn entry() {
            RAN.fetch_add(1, Ordering::SeqCst);
        }

        let thread = Thread::spawn(entry).expect("spawn failed");
        assert!(thread.tid() > 0);
        thread.join().expect("join failed");
        assert_eq!(RAN.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_spawn_many_then_join_all() {
        static RAN: AtomicUsize = AtomicUsize::new(0);
        fn entry() {
            RAN.fetch_add(1, Ordering::SeqCst);
        }

        const COUNT: usize = 16;
        let mut threads: [Option<Thread>; COUNT] = [const { None }; COUNT];
        for slot in threads.iter_mut() {
            *slot = Some(Thread::spawn(entry).expect("spawn failed"));
        }
        for slot in threads.iter_mut() {
            slot.take().unwrap().join().expect("join failed");
        }
        assert_eq!(RAN.load(Ordering::SeqCst), COUNT);
    }
}
