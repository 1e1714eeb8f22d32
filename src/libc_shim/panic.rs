use spawnmark::os::{Print, eprint, eprintln, exit};

/// Panic handler
///
/// Spawnmark strives to ensure the compiler can prove no spawnmark code could panic; every
/// fallible path goes through Result or an or_abort.  However, some part of Rust (rustc? core?)
/// expects a panic handler to exist, even if it is removed as dead code.
#[cfg_attr(not(test), panic_handler)]
fn panic(info: &core::panic::PanicInfo) -> ! {
    #[cfg(debug_assertions)]
    {
        eprint("Panic!");
        if let Some(e) = info.message().as_str() {
            eprint(" ");
            eprint(e);
        }
        eprint("\n");
        if let Some(loc) = info.location() {
            eprint("File: ");
            eprint(loc.file());
            eprint(":");
            eprint(loc.line());
            eprint(":");
            eprint(loc.column());
            eprint("\n");
        }
    }

    // If this code path shows up in the resulting binary, it means the compiler thinks a panic is
    // possible somewhere.
    eprintln("unexpected panic");
    exit(1);
}
