//! Spawning and talking to a single worker process.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};

use crate::error::{Error, Result};
use crate::ipc::protocol::{JobRequest, WorkerReply, read_frame_async, write_frame_async};

/// Name of the worker binary on disk.
const WORKER_BIN: &str = if cfg!(windows) {
    "crucible-worker.exe"
} else {
    "crucible-worker"
};

/// Handle to one spawned worker process.
///
/// A worker serves exactly one job: the dispatcher sends the job frame,
/// reads reply frames until the channel closes, then reaps the process.
pub(crate) struct WorkerChild {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

impl WorkerChild {
    /// Spawn a worker process with piped stdio.
    ///
    /// `explicit` bypasses binary discovery when set. The child carries
    /// `kill_on_drop`, so a dropped dispatch future cannot leak it.
    pub(crate) fn spawn(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => find_worker_binary()?,
        };

        let mut child = Command::new(&path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                Error::Ipc(format!(
                    "failed to spawn worker '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Ipc("worker stdin not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| Error::Ipc("worker stdout not captured".to_string()))?;

        // Forward worker stderr to the log. Lines from concurrent workers
        // may interleave.
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(async move {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    tracing::warn!(target: "crucible::worker", "{line}");
                }
            });
        }

        Ok(Self {
            child,
            stdin: Some(stdin),
            stdout: BufReader::new(stdout),
        })
    }

    /// Send the single job frame, then close the worker's stdin.
    pub(crate) async fn send_job(&mut self, job: &JobRequest) -> Result<()> {
        let mut stdin = self
            .stdin
            .take()
            .ok_or_else(|| Error::Ipc("job already sent".to_string()))?;
        write_frame_async(&mut stdin, job).await?;
        stdin
            .shutdown()
            .await
            .map_err(|e| Error::Ipc(format!("failed to close worker stdin: {e}")))?;
        Ok(())
    }

    /// Next reply frame, or `None` once the worker closes its stdout.
    pub(crate) async fn next_reply(&mut self) -> Result<Option<WorkerReply>> {
        read_frame_async(&mut self.stdout).await
    }

    /// Begin forcible termination. Completion is observed as channel EOF,
    /// never reported directly.
    pub(crate) fn start_kill(&mut self) {
        if let Err(e) = self.child.start_kill() {
            // InvalidInput means the process has already exited.
            if e.kind() != std::io::ErrorKind::InvalidInput {
                tracing::warn!("failed to kill worker: {e}");
            }
        }
    }

    /// Reap the worker process.
    pub(crate) async fn wait(&mut self) -> Result<std::process::ExitStatus> {
        self.child
            .wait()
            .await
            .map_err(|e| Error::Ipc(format!("failed to reap worker: {e}")))
    }
}

/// Locate the worker binary.
///
/// Order: `CRUCIBLE_WORKER_PATH`, the directory of the current
/// executable, the system `PATH`, then the development `target/`
/// directories.
fn find_worker_binary() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CRUCIBLE_WORKER_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
    }

    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let candidate = exe_dir.join(WORKER_BIN);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    if let Ok(path) = which::which(WORKER_BIN) {
        return Ok(path);
    }

    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        for profile in ["debug", "release"] {
            let candidate = PathBuf::from(&manifest_dir)
                .join("..")
                .join("..")
                .join("target")
                .join(profile)
                .join(WORKER_BIN);
            if candidate.exists() {
                return Ok(candidate.canonicalize().unwrap_or(candidate));
            }
        }
    }

    Err(Error::Ipc(
        "could not find the crucible-worker binary; set CRUCIBLE_WORKER_PATH or put it on PATH"
            .to_string(),
    ))
}
