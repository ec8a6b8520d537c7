use std::process::{Command, Output};

/// Run the CLI binary against `base_url`.
///
/// Colors and the User-Agent environment override are disabled so output is
/// stable.
pub fn run_cli(base_url: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_constellation"));
    cmd.arg("--base-url").arg(base_url);
    cmd.args(args);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("CONSTELLATION_USER_AGENT");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(base_url: &str, args: &[&str]) -> String {
    let output = run_cli(base_url, args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(base_url: &str, args: &[&str]) -> String {
    let output = run_cli(base_url, args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
