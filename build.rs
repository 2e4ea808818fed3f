use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let crate_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=build.rs");

    // Only the C ABI needs a header.
    if env::var_os("CARGO_FEATURE_FFI").is_none() {
        return;
    }

    let bindings = match cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("FASTXOR_H")
        .generate()
    {
        Ok(bindings) => bindings,
        Err(e) => {
            println!("cargo:warning=cbindgen generation failed: {}", e);
            return;
        }
    };

    let header_path = Path::new(&crate_dir).join("include/fastxor.h");
    if let Some(parent) = header_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            println!("cargo:warning=Failed to create include/ directory: {}", e);
            return;
        }
    }

    if !bindings.write_to_file(&header_path) {
        println!("cargo:warning=fastxor.h unchanged");
    }
}
