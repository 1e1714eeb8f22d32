/// bcmp implementation to satisfy Rust core crate requirements
///
/// Without this, some core functions will fail to compile/link.  bcmp only needs to report
/// equal/not-equal, not an ordering.
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bcmp(
    a: *const core::ffi::c_void,
    b: *const core::ffi::c_void,
    n: usize,
) -> i32 {
    // Safety:
    // - Caller must ensure both regions are valid for n bytes.
    // - Volatile reads keep the compiler from rewriting the loop as a memcmp call.
    unsafe {
        let a_ptr = a as *const u8;
        let b_ptr = b as *const u8;

        let mut i = 0;
        while i < n {
            if core::ptr::read_volatile(a_ptr.add(i)) != core::ptr::read_volatile(b_ptr.add(i)) {
                return 1;
            }
            i += 1;
        }
    }
    0
}
