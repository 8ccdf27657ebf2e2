// File: crates/graph-core/build.rs
// Summary: Build script to link Windows system libraries Skia/ICU depend on.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
