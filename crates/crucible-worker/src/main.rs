//! Crucible worker process.
//!
//! Spawned by the dispatcher with exactly one job to serve: read the job
//! frame from stdin, compile, reply on stdout, exit. Every path exits
//! with status 0 — failures are reported through diagnostics, not exit
//! codes, and an unknown language produces no reply at all.

use std::io;

use crucible_core::ipc::{JobRequest, WorkerReply, read_frame, write_frame};
use crucible_core::language::Language;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let mut stdin = io::stdin().lock();
    let job: JobRequest = match read_frame(&mut stdin) {
        Ok(job) => job,
        Err(e) => {
            tracing::error!("failed to read job frame: {e}");
            return;
        }
    };

    // Unknown keys take the silent path: no output, no diagnostic, clean
    // exit.
    let Some(language) = Language::from_key(&job.language) else {
        return;
    };

    let mut stdout = io::stdout().lock();
    match language.compile(&job.source) {
        Ok(text) => {
            if let Err(e) = write_frame(&mut stdout, &WorkerReply::Output { text }) {
                tracing::error!("failed to send output frame: {e}");
            }
        }
        Err(e) => {
            tracing::error!("{e}");
            let reply = WorkerReply::Diagnostic {
                message: e.to_string(),
            };
            if let Err(e) = write_frame(&mut stdout, &reply) {
                tracing::error!("failed to send diagnostic frame: {e}");
            }
        }
    }
}
