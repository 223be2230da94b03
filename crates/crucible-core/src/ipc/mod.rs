//! Inter-process communication with worker processes.
//!
//! The channel carries exactly one inbound job and at most one outbound
//! result per worker lifetime, and closes when the worker exits.

pub mod protocol;

pub use protocol::{
    Frame, JobRequest, WorkerReply, read_frame, read_frame_async, write_frame, write_frame_async,
};
