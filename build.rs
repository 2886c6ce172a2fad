fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    println!("cargo:rerun-if-changed=build.rs");
    // content/ is embedded into the binary, so edits must trigger a rebuild
    println!("cargo:rerun-if-changed=content");
}
