//! Append-only mirror file.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Flat-file mirror of the durable store: one `[<stamp>] <message>` line
/// per entry, UTF-8, newest last.
///
/// Appends from concurrent requests are serialized behind a process-local
/// mutex so partial lines cannot interleave. Writers in other processes
/// sharing the file still depend on OS append semantics.
#[derive(Clone)]
pub struct FileLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileLog {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, creating the parent directory and the file as needed.
    pub async fn append(&self, line: &str) -> io::Result<()> {
        let _guard = self.write_lock.lock().await;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }

    /// Last `n` lines in file order, trailing whitespace trimmed.
    ///
    /// Reads the whole file into memory; fine for a demo-sized mirror, not a
    /// tuned tail. A missing file reads as empty.
    pub async fn tail(&self, n: usize) -> io::Result<Vec<String>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let lines: Vec<&str> = content.lines().collect();
        let start = lines.len().saturating_sub(n);
        Ok(lines[start..]
            .iter()
            .map(|l| l.trim_end().to_string())
            .collect())
    }
}
