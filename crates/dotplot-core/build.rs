// File: crates/dotplot-core/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU used by the raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
