//! Build script for focus-panel-simulator
//!
//! On Windows, links against a vendored SDL2 and copies SDL2.dll next to the
//! simulator binary. Other platforms use the system SDL2.

use std::path::PathBuf;
use std::{env, fs};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let Some(vendor_sdl2) = env::var("CARGO_MANIFEST_DIR")
        .ok()
        .map(PathBuf::from)
        .and_then(|dir| dir.parent().map(|root| root.join("vendor").join("sdl2")))
    else {
        println!("cargo:warning=Could not locate workspace root for SDL2 lookup");
        return;
    };
    println!("cargo:rerun-if-changed={}", vendor_sdl2.display());

    if !vendor_sdl2.exists() {
        println!("cargo:warning=SDL2 not found at {}; put SDL2.lib and SDL2.dll there", vendor_sdl2.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", vendor_sdl2.display());

    // OUT_DIR is target/<profile>/build/<pkg>/out
    let Some(profile_dir) = env::var("OUT_DIR").ok().map(PathBuf::from).and_then(|out| {
        out.ancestors()
            .find(|p| p.file_name().is_some_and(|n| n == "release" || n == "debug"))
            .map(PathBuf::from)
    }) else {
        return;
    };

    let dll_src = vendor_sdl2.join("SDL2.dll");
    let dll_dst = profile_dir.join("SDL2.dll");
    if dll_src.exists() && !dll_dst.exists() {
        match fs::copy(&dll_src, &dll_dst) {
            Ok(_) => println!("cargo:warning=Copied SDL2.dll to {}", dll_dst.display()),
            Err(e) => println!("cargo:warning=Failed to copy SDL2.dll: {e}"),
        }
    }
}
