//! The isolated transpilation front door.

use std::path::PathBuf;
use std::time::Duration;

use crate::ipc::protocol::JobRequest;

use super::task::{DispatchOutcome, Disposition, TranspileTask};
use super::worker::WorkerChild;

/// Default time budget for one job.
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Runs each transpilation request in a dedicated worker process.
///
/// Every call spawns a fresh worker, bounds it with a timeout, and
/// resolves exactly once. The public contract is failure-opaque: unknown
/// languages, compile failures, timeouts and transport faults all fold
/// into an empty or partial string, never an error. Use
/// [`Dispatcher::dispatch`] when the cause matters.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    timeout: Duration,
    worker_path: Option<PathBuf>,
}

impl Dispatcher {
    /// A dispatcher with the default 1000 ms budget and automatic worker
    /// binary discovery.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            worker_path: None,
        }
    }

    /// Override the per-job time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use an explicit worker binary instead of discovery.
    pub fn with_worker_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.worker_path = Some(path.into());
        self
    }

    /// Transform `source` in an isolated worker process.
    ///
    /// Resolves with the concatenated worker output; infallible by
    /// design. Tasks share nothing, so concurrent calls cannot
    /// cross-contaminate.
    pub async fn run(&self, language: &str, source: &str) -> String {
        self.dispatch(language, source).await.output
    }

    /// Like [`Dispatcher::run`], but keeps the terminal disposition
    /// alongside the output.
    pub async fn dispatch(&self, language: &str, source: &str) -> DispatchOutcome {
        let worker = match WorkerChild::spawn(self.worker_path.as_deref()) {
            Ok(worker) => worker,
            Err(e) => {
                tracing::error!(language, "failed to spawn worker: {e}");
                return DispatchOutcome {
                    output: String::new(),
                    disposition: Disposition::Transport,
                };
            }
        };

        let job = JobRequest {
            language: language.to_string(),
            source: source.to_string(),
        };
        TranspileTask::new(language, worker).drive(&job, self.timeout).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
