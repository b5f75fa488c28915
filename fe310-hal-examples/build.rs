//! Set up linker scripts for the fe310-hal examples

use std::{env, fs, path::PathBuf};

fn add_linker_script() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Put the linker script somewhere the linker can find it.
    fs::write(out_dir.join("memory.x"), include_bytes!("memory.x")).unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");

    // riscv-rt's link.x puts `_start` first in REGION_TEXT, i.e. at the
    // FLASH origin from memory.x.
    println!("cargo:rustc-link-arg-bins=-Tmemory.x");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
}

fn main() {
    add_linker_script();

    println!("cargo:rerun-if-changed=build.rs");
}
