use core::ffi::{CStr, c_char};

/// Ergonomic wrapper over ABI standard argv pointer.
pub struct Argv<'a> {
    raw: &'a [*const c_char],
}

impl<'a> Argv<'a> {
    /// # Safety
    /// - `argv..argv+argc` must be valid for reads during `'a`.
    /// - Ideally immediately use ABI-provided argc+argv in main()
    pub const unsafe fn from_raw(argc: isize, argv: *const *const c_char) -> Self {
        Self {
            raw: unsafe { core::slice::from_raw_parts(argv, argc as usize) },
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&'a CStr> {
        self.raw.get(i).map(|&p| unsafe { CStr::from_ptr(p) })
    }
}
