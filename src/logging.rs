// Logging setup.
// Routes env_logger output to a file so the terminal UI stays intact.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};

/// Start logging to `bloom.log` under `dir`. `BLOOM_LOG` overrides the
/// configured filter. Returns the log file path on success.
pub fn init(dir: &Path, default_filter: &str) -> Option<PathBuf> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("bloom: logging disabled, cannot create {}: {}", dir.display(), e);
        return None;
    }
    let path = dir.join("bloom.log");
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("bloom: logging disabled, cannot open {}: {}", path.display(), e);
            return None;
        }
    };

    let filter = std::env::var("BLOOM_LOG").unwrap_or_else(|_| default_filter.to_string());
    Builder::new()
        .parse_filters(&filter)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .ok()?;
    Some(path)
}
