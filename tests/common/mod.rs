use std::path::{Path, PathBuf};
use std::process::Command;

pub fn stdlib_tour_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_stdlib-tour"))
}

/// Command reading its config from `config` (which need not exist) and
/// ignoring environment overrides.
#[allow(dead_code)]
pub fn isolated_command(config: &Path) -> Command {
    let mut cmd = Command::new(stdlib_tour_bin());
    cmd.env_remove("STDLIB_TOUR_WORKERS")
        .env_remove("STDLIB_TOUR_DB")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

/// Path to a config file that is never created.
#[allow(dead_code)]
pub fn missing_config(dir: &Path) -> PathBuf {
    dir.join("no-config.toml")
}
