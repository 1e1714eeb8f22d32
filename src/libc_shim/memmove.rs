/// memmove implementation to satisfy Rust core crate requirements
///
/// Without this, some core functions will fail to compile/link.  Slice copies whose ranges the
/// compiler cannot prove disjoint lower to memmove rather than memcpy.
#[cfg(not(test))]
#[unsafe(no_mangle)]
unsafe extern "C" fn memmove(
    dest: *mut core::ffi::c_void,
    src: *const core::ffi::c_void,
    n: usize,
) -> *mut core::ffi::c_void {
    // Safety:
    // - This is satisfying a C API requirement which isn't really safe.
    // - Caller must ensure both regions are valid for n bytes; overlap is allowed.
    // - Copy direction follows the overlap: forward when dest sits below src, backward when it
    //   sits above, so bytes are never read after they've been overwritten.
    // - Volatile accesses keep the compiler from rewriting the loop as a call back into memmove.
    unsafe {
        let dest_ptr = dest as *mut u8;
        let src_ptr = src as *const u8;

        if (dest_ptr as usize) < (src_ptr as usize) {
            let mut i = 0;
            while i < n {
                core::ptr::write_volatile(
                    dest_ptr.add(i),
                    core::ptr::read_volatile(src_ptr.add(i)),
                );
                i += 1;
            }
        } else {
            let mut i = n;
            while i > 0 {
                i -= 1;
                core::ptr::write_volatile(
                    dest_ptr.add(i),
                    core::ptr::read_volatile(src_ptr.add(i)),
                );
            }
        }
    }
    dest
}
