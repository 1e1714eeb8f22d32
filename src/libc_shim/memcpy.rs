/// memcpy implementation to satisfy Rust core crate requirements
///
/// Without this, some core functions will fail to compile/link.
#[cfg(not(test))]
#[unsafe(no_mangle)]
unsafe extern "C" fn memcpy(
    dest: *mut core::ffi::c_void,
    src: *const core::ffi::c_void,
    n: usize,
) -> *mut core::ffi::c_void {
    // Safety:
    // - This is satisfying a C API requirement which isn't really safe.
    // - Caller must ensure regions do not overlap and are valid for n bytes.
    // - Implemented byte-at-a-time with volatile accesses so the compiler cannot replace the loop
    //   with a call back into memcpy itself.  Spawnmark copies almost nothing through this path,
    //   so the simple loop costs nothing that matters.
    unsafe {
        let dest_ptr = dest as *mut u8;
        let src_ptr = src as *const u8;

        let mut i = 0;
        while i < n {
            core::ptr::write_volatile(dest_ptr.add(i), core::ptr::read_volatile(src_ptr.add(i)));
            i += 1;
        }
    }
    dest
}
