/// rust_eh_personality stub to satisfy Rust core crate requirements
///
/// The prebuilt `core` rlib is compiled with unwinding support, so its unwind tables reference
/// the `rust_eh_personality` symbol even though this crate builds with `panic = "abort"` and can
/// never unwind.  This stub only exists so the linker can resolve that reference; it is never
/// called.
#[cfg(not(test))]
#[unsafe(no_mangle)]
extern "C" fn rust_eh_personality() {}
