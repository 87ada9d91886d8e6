use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Name of the log file inside the data directory
pub const LOG_FILE: &str = "finpocket.log";

const ROTATED_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size-based truncation of the log file.
#[derive(Debug, Clone, Copy)]
struct LogRotation {
    /// Size above which the file is truncated
    max_size: u64,
    /// Bytes of recent entries kept after truncation
    keep_size: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_size: 5 * 1024 * 1024,
            keep_size: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Truncate `log_path` to its most recent whole lines if it grew past
    /// `max_size`. A missing file is left alone.
    fn apply(&self, log_path: &Path) -> std::io::Result<()> {
        let len = match fs::metadata(log_path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e),
        };
        if len <= self.max_size {
            return Ok(());
        }

        let tail = self.read_tail(log_path, len)?;

        // Rewrite the file with the marker and the kept entries
        let mut file = File::create(log_path)?;
        file.write_all(ROTATED_MARKER)?;
        file.write_all(&tail)?;
        Ok(())
    }

    /// Last `keep_size` bytes of the file, starting after the first newline
    fn read_tail(&self, log_path: &Path, len: u64) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(self.keep_size)))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        // Drop the partial line the seek landed in
        let skip = buffer
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        buffer.drain(..skip);
        Ok(buffer)
    }
}

/// Initialize logging to write to a file in the data directory.
///
/// Logs are written to `{data_dir}/finpocket.log` with size-based rotation.
/// When the log exceeds 5MB, older entries are removed keeping only the last 1MB.
/// The log level can be controlled via the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = LogRotation::default().apply(&log_path) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // RUST_LOG wins over the --log-level flag
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("finpocket={level},finpocket_core=warn"))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "finpocket logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rotation(max_size: u64, keep_size: u64) -> LogRotation {
        LogRotation {
            max_size,
            keep_size,
        }
    }

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        fs::write(&path, "line one\nline two\n").unwrap();

        rotation(1024, 16).apply(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_rotation_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        let content: String = (0..100).map(|i| format!("entry {i:03}\n")).collect();
        fs::write(&path, &content).unwrap();

        rotation(100, 30).apply(&path).unwrap();

        let rotated = fs::read_to_string(&path).unwrap();
        let mut lines = rotated.lines();
        assert_eq!(lines.next(), Some("--- Log rotated (older entries removed) ---"));
        let kept: Vec<&str> = lines.collect();
        assert_eq!(kept, ["entry 098", "entry 099"]);
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempdir().unwrap();
        rotation(1, 1).apply(&dir.path().join(LOG_FILE)).unwrap();
    }

    #[test]
    fn test_default_rotation_sizes() {
        let defaults = LogRotation::default();
        assert_eq!(defaults.max_size, 5 * 1024 * 1024);
        assert_eq!(defaults.keep_size, 1024 * 1024);
    }
}
