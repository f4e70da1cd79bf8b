use std::env;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn config_dir() -> PathBuf {
    portable_dir().unwrap_or_else(|| {
        dirs_next::config_dir()
            .expect("expected valid config dir")
            .join("vitrine")
    })
}

/// Checks if a config file exists in the same directory as the executable.
/// If so, it'll use that directory as the config dir.
fn portable_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?;

    dir.join(CONFIG_FILE_NAME)
        .is_file()
        .then(|| dir.to_path_buf())
}
