//! Process-isolated dispatch.
//!
//! One worker process per request, so a hung or crashing compiler can
//! always be killed without touching the dispatcher or other in-flight
//! jobs.
//!
//! ```text
//! Dispatcher::run(language, source)
//!     │
//!     └── WorkerChild (one per job, kill_on_drop)
//!             │
//!             ├── stdin:  one JobRequest frame
//!             ├── stdout: reply frames (accumulated)
//!             ├── stderr: forwarded to the log
//!             │
//!             └── channel close → reap → single resolution
//! ```

mod dispatcher;
mod task;
mod worker;

pub use dispatcher::Dispatcher;
pub use task::{DispatchOutcome, Disposition};
