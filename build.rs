fn main() {
    // Stamp the build time so the footer can display it via env!
    let build_time = chrono::Utc::now().to_rfc3339();

    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
