/// memset implementation to satisfy Rust core crate requirements
///
/// Without this, some core functions will fail to compile/link.  Array zero-initialization (the
/// report row buffer, the thread-handle table) and `write_bytes` padding both lower to memset.
#[cfg(not(test))]
#[unsafe(no_mangle)]
unsafe extern "C" fn memset(
    s: *mut core::ffi::c_void,
    c: core::ffi::c_int,
    n: usize,
) -> *mut core::ffi::c_void {
    // Safety:
    // - This is satisfying a C API requirement which isn't really safe.
    // - Caller must ensure the region is valid for n bytes.
    // - Volatile writes keep the compiler from rewriting the loop as a call back into memset.
    unsafe {
        let s_ptr = s as *mut u8;
        let byte = c as u8;

        let mut i = 0;
        while i < n {
            core::ptr::write_volatile(s_ptr.add(i), byte);
            i += 1;
        }
    }
    s
}
