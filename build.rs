use std::process::Command;

/// Run `git rev-parse` with the given args, falling back to "unknown" outside a checkout.
fn rev_parse(args: &[&str]) -> String {
    match Command::new("git").arg("rev-parse").args(args).output() {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string()),
        _ => "unknown".to_string(),
    }
}

fn main() {
    // shown by `aurebesh --version` and in the WASM debug report
    println!("cargo:rustc-env=GIT_HASH={}", rev_parse(&["--short", "HEAD"]));
    println!("cargo:rustc-env=GIT_HASH_FULL={}", rev_parse(&["HEAD"]));

    println!("cargo:rerun-if-changed=.git/HEAD");
}
