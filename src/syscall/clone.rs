use crate::err::*;
use crate::types::{c_int, pid_t};
use core::ops::BitOr;

#[derive(Clone, Copy)]
pub struct CloneFlags(u64);

impl CloneFlags {
    pub const CSIGNAL: Self = Self(0x000000ff);
    pub const CLONE_VM: Self = Self(0x00000100);
    pub const CLONE_FS: Self = Self(0x00000200);
    pub const CLONE_FILES: Self = Self(0x00000400);
    pub const CLONE_SIGHAND: Self = Self(0x00000800);
    pub const CLONE_VFORK: Self = Self(0x00004000);
    pub const CLONE_THREAD: Self = Self(0x00010000);
    pub const CLONE_SYSVSEM: Self = Self(0x00040000);
    pub const CLONE_SETTLS: Self = Self(0x00080000);
    pub const CLONE_PARENT_SETTID: Self = Self(0x00100000);
    pub const CLONE_CHILD_CLEARTID: Self = Self(0x00200000);
    pub const CLONE_CHILD_SETTID: Self = Self(0x01000000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for CloneFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

// A raw clone() cannot go through the `syscalls` crate the way every other system call here does:
// the child comes back from the syscall instruction on the brand-new stack, with no frame, so any
// compiler-generated code between the syscall and the entry function would read through stack
// slots that only exist in the parent.  The assembly below keeps the child's path free of such
// code: it immediately pops the entry function off the new stack, calls it, and exits the thread.
//
// The caller seeds the top two slots of the new stack with [entry, 0] and passes `stack` pointing
// at the entry slot.  Popping both slots leaves the stack pointer 16-byte aligned at the entry
// function's first instruction, as both ABIs require.
#[cfg(not(any(
    all(target_os = "linux", target_arch = "aarch64"),
    all(target_os = "linux", target_arch = "x86_64"),
)))]
compile_error!("src/syscall/clone.rs only supports Linux x86_64 and Linux AArch64.");

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
core::arch::global_asm!(
    "
    .globl spawnmark_clone_thread
    .type spawnmark_clone_thread, @function
spawnmark_clone_thread:
    # In (SysV): rdi=flags, rsi=stack, rdx=child_tid
    # Kernel clone: rdi=flags, rsi=stack, rdx=parent_tid, r10=child_tid, r8=tls
    mov r10, rdx
    xor edx, edx              # parent_tid = NULL
    xor r8d, r8d              # tls = 0
    mov eax, 56               # __NR_clone
    syscall
    test rax, rax
    jnz 2f
    # Child, on the new stack: [entry, 0]
    pop rax
    pop rdi
    call rax
    xor edi, edi
    mov eax, 60               # __NR_exit; exits only this thread under CLONE_THREAD
    syscall
2:
    ret
    .size spawnmark_clone_thread, . - spawnmark_clone_thread
"
);

#[cfg(all(target_os = "linux", target_arch = "aarch64"))]
core::arch::global_asm!(
    "
    .globl spawnmark_clone_thread
    .type spawnmark_clone_thread, %function
spawnmark_clone_thread:
    // In (AAPCS): x0=flags, x1=stack, x2=child_tid
    // Kernel clone: x0=flags, x1=stack, x2=parent_tid, x3=tls, x4=child_tid
    mov x4, x2
    mov x2, xzr               // parent_tid = NULL
    mov x3, xzr               // tls = 0
    mov x8, #220              // __NR_clone
    svc #0
    cbnz x0, 2f
    // Child, on the new stack: [entry, 0]
    ldp x9, x0, [sp], #16
    blr x9
    mov x0, xzr
    mov x8, #93               // __NR_exit; exits only this thread under CLONE_THREAD
    svc #0
2:
    ret
    .size spawnmark_clone_thread, . - spawnmark_clone_thread
"
);

unsafe extern "C" {
    fn spawnmark_clone_thread(flags: u64, stack: *mut u8, child_tid: *mut c_int) -> isize;
}

/// Start a thread whose entry function has been seeded onto `stack`
///
/// Returns the new thread's TID in the caller.  The child never returns here; it calls the seeded
/// entry function and exits.
///
/// # Safety
///
/// - `stack` must point at the entry-function slot of a writable mapping laid out as described
///   above, with enough room below it for the entry function's frames.
/// - `child_tid` must be valid for writes for the life of the thread if `flags` includes
///   `CLONE_CHILD_SETTID` or `CLONE_CHILD_CLEARTID`.
pub unsafe fn clone_thread(
    flags: CloneFlags,
    stack: *mut u8,
    child_tid: *mut c_int,
) -> Result<pid_t, Errno> {
    let ret = unsafe { spawnmark_clone_thread(flags.bits(), stack, child_tid) };
    Errno::from_ret(ret as usize).map(|tid| tid as pid_t)
}
