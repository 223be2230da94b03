//! One in-flight dispatch.

use std::time::Duration;

use crate::ipc::protocol::{JobRequest, WorkerReply};

use super::worker::WorkerChild;

/// How a dispatch reached its terminal state.
///
/// The public contract folds every case into a string; this tag keeps the
/// cause observable for callers and tests that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The worker exited after sending output.
    Completed,
    /// The worker reported a compile diagnostic and sent no output.
    CompileFailed,
    /// The worker exited with neither output nor diagnostic; either the
    /// language has no registered compiler, or the compiler produced
    /// nothing.
    Silent,
    /// The deadline killed the worker. The output holds whatever partial
    /// content had already arrived, usually nothing.
    TimedOut,
    /// The worker could not be spawned or the channel faulted.
    Transport,
}

/// Terminal result of one dispatch.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// Concatenation of every output frame received before the terminal
    /// event. Empty when none arrived.
    pub output: String,
    /// Why the dispatch ended.
    pub disposition: Disposition,
}

/// One in-flight transpilation: the worker, the ordered output
/// accumulator, and the deadline that bounds them.
pub(crate) struct TranspileTask {
    language: String,
    worker: WorkerChild,
    chunks: Vec<String>,
}

impl TranspileTask {
    pub(crate) fn new(language: &str, worker: WorkerChild) -> Self {
        Self {
            language: language.to_string(),
            worker,
            chunks: Vec::new(),
        }
    }

    /// Drive the task to its single resolution.
    ///
    /// Event reactions: output frame → accumulate; diagnostic frame →
    /// log only; deadline → kill the worker without resolving; channel
    /// close → reap and resolve with whatever accumulated. The timer dies
    /// with this function, so it can never outlive the outcome.
    pub(crate) async fn drive(mut self, job: &JobRequest, budget: Duration) -> DispatchOutcome {
        let mut timed_out = false;
        let mut diagnosed = false;
        let mut transport_fault = false;

        if let Err(e) = self.worker.send_job(job).await {
            tracing::warn!(language = %self.language, "failed to send job: {e}");
            transport_fault = true;
            self.worker.start_kill();
        }

        let deadline = tokio::time::sleep(budget);
        tokio::pin!(deadline);

        loop {
            tokio::select! {
                reply = self.worker.next_reply() => match reply {
                    Ok(Some(WorkerReply::Output { text })) => self.chunks.push(text),
                    Ok(Some(WorkerReply::Diagnostic { message })) => {
                        diagnosed = true;
                        tracing::warn!(language = %self.language, "{message}");
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(language = %self.language, "worker channel fault: {e}");
                        transport_fault = true;
                        self.worker.start_kill();
                        break;
                    }
                },
                _ = &mut deadline, if !timed_out => {
                    tracing::error!(language = %self.language, "worker timed out");
                    timed_out = true;
                    self.worker.start_kill();
                    // Keep draining: the kill closes the channel, and the
                    // close performs the one resolution below.
                }
            }
        }

        // Reap before resolving; no worker outlives its outcome.
        let _ = self.worker.wait().await;

        let disposition = if timed_out {
            Disposition::TimedOut
        } else if transport_fault {
            Disposition::Transport
        } else if !self.chunks.is_empty() {
            Disposition::Completed
        } else if diagnosed {
            Disposition::CompileFailed
        } else {
            Disposition::Silent
        };

        DispatchOutcome {
            output: self.chunks.concat(),
            disposition,
        }
    }
}
