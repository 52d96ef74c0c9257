fn main() {
    // Re-run if git HEAD changes (new commits, checkouts, etc.)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let git = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .output()
            .ok()
            .filter(|o| o.status.success())
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
    };

    // On an exact release tag, report the crate version; between tags,
    // report dev@<short-hash> so bug reports pin an actual commit.
    let on_tag = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();
    let version = if on_tag {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_default()
    } else {
        match git(&["rev-parse", "--short", "HEAD"]) {
            Some(hash) => format!("dev@{hash}"),
            None => "dev@unknown".to_string(),
        }
    };

    println!("cargo:rustc-env=BUILD_VERSION={version}");
}
