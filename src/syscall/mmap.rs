use crate::err::*;
use crate::types::c_int;
use core::ops::BitOr;
use syscalls::{Sysno, syscall};

#[derive(Clone, Copy)]
pub struct ProtFlags(c_int);

impl ProtFlags {
    pub const PROT_NONE: Self = Self(0x0);
    pub const PROT_READ: Self = Self(0x1);
    pub const PROT_WRITE: Self = Self(0x2);
    pub const PROT_EXEC: Self = Self(0x4);

    pub const fn bits(self) -> c_int {
        self.0
    }
}

impl BitOr for ProtFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy)]
pub struct MapFlags(c_int);

impl MapFlags {
    pub const MAP_PRIVATE: Self = Self(0x02);
    pub const MAP_ANONYMOUS: Self = Self(0x20);
    /// Hints that the mapping is a thread stack.  Same value on x86_64 and AArch64.
    pub const MAP_STACK: Self = Self(0x20000);

    pub const fn bits(self) -> c_int {
        self.0
    }
}

impl BitOr for MapFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

/// Map anonymous memory
///
/// Only the anonymous form is wrapped; spawnmark never maps files, so fd and offset are pinned to
/// -1 and 0.
///
/// # Safety
///
/// The returned region is uninitialized from Rust's perspective; the caller is responsible for
/// how it is used and for unmapping it.
pub unsafe fn mmap_anonymous(
    length: usize,
    prot: ProtFlags,
    flags: MapFlags,
) -> Result<*mut u8, Errno> {
    syscall!(
        Sysno::mmap,
        0, // addr hint (NULL): kernel picks
        length,
        prot.bits(),
        (flags | MapFlags::MAP_ANONYMOUS).bits(),
        -1isize, // fd
        0        // offset
    )
    .map(|addr| addr as *mut u8)
}

/// Unmap a region previously returned by mmap
///
/// # Safety
///
/// The caller must ensure nothing reads or writes the region afterward, including any thread
/// whose stack lives inside it.
pub unsafe fn munmap(addr: *mut u8, length: usize) -> Result<(), Errno> {
    syscall!(Sysno::munmap, addr, length).map(|_| ())
}
