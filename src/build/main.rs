// build.rs has its own module namespace, separate from the main crate.  All it has to do for
// spawnmark is hand the linker the arguments a nostd, nolibc binary needs; there is no user
// configuration to check or generate.

fn main() {
    compiler_instructions();
}

/// Linker arguments needed for spawnmark to be a nostd, nolibc program.
fn compiler_instructions() {
    println!("cargo:rustc-link-arg-bin=spawnmark=-nostartfiles");
    println!("cargo:rustc-link-arg-bin=spawnmark=-nostdlib");
    println!("cargo:rustc-link-arg-bin=spawnmark=-static");
    println!("cargo:rustc-link-arg-bin=spawnmark=-no-pie");
}
