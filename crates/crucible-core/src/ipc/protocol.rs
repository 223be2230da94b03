//! Frame encoding for the worker channel.
//!
//! Frames are length-prefixed rkyv messages over stdin/stdout:
//! a 4-byte length (u32 LE) followed by the encoded body. The worker side
//! reads synchronously; the dispatcher side reads through tokio, where a
//! closed channel surfaces as `None` instead of an error.

use std::io::{Read, Write};

use rkyv::{Archive, Deserialize, Serialize};
use rkyv::util::AlignedVec;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::{Error, Result};

/// Upper bound on a single frame body. Snippets are small; anything past
/// this is a corrupt length prefix, not a real job.
const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

/// The single job sent from the dispatcher to a worker.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct JobRequest {
    /// Canonical language key.
    pub language: String,
    /// Source text to transform.
    pub source: String,
}

/// A reply sent from a worker to the dispatcher.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub enum WorkerReply {
    /// Compiled output. At most one per job.
    Output { text: String },

    /// A compile diagnostic. Log-only; never alters the outcome.
    Diagnostic { message: String },
}

/// A message that can cross the worker channel.
pub trait Frame: Sized {
    fn to_frame_bytes(&self) -> Result<AlignedVec>;
    fn from_frame_bytes(bytes: &[u8]) -> Result<Self>;
}

macro_rules! impl_frame {
    ($ty:ty, $name:literal) => {
        impl Frame for $ty {
            fn to_frame_bytes(&self) -> Result<AlignedVec> {
                rkyv::to_bytes::<rkyv::rancor::Error>(self).map_err(|e| {
                    Error::Serialization(format!("failed to encode {} frame: {}", $name, e))
                })
            }

            fn from_frame_bytes(bytes: &[u8]) -> Result<Self> {
                // SAFETY: frames only ever come from our own dispatcher or
                // worker processes; unchecked deserialization skips the
                // CheckBytes machinery for this trusted boundary.
                unsafe { rkyv::from_bytes_unchecked::<Self, rkyv::rancor::Error>(bytes) }.map_err(
                    |e| Error::Serialization(format!("failed to decode {} frame: {}", $name, e)),
                )
            }
        }
    };
}

impl_frame!(JobRequest, "job");
impl_frame!(WorkerReply, "reply");

fn check_len(len: usize) -> Result<()> {
    if len > MAX_FRAME_LEN {
        return Err(Error::Ipc(format!("frame too large: {len} bytes")));
    }
    Ok(())
}

/// Write a frame to a blocking writer.
pub fn write_frame<W: Write>(writer: &mut W, frame: &impl Frame) -> Result<()> {
    let bytes = frame.to_frame_bytes()?;
    let len = bytes.len() as u32;
    writer
        .write_all(&len.to_le_bytes())
        .map_err(|e| Error::Ipc(format!("failed to write frame length: {e}")))?;
    writer
        .write_all(&bytes)
        .map_err(|e| Error::Ipc(format!("failed to write frame body: {e}")))?;
    writer
        .flush()
        .map_err(|e| Error::Ipc(format!("failed to flush frame: {e}")))?;
    Ok(())
}

/// Read a frame from a blocking reader.
///
/// The worker expects its one job to be there; a closed channel is an
/// error on this side.
pub fn read_frame<R: Read, T: Frame>(reader: &mut R) -> Result<T> {
    let mut len_bytes = [0u8; 4];
    reader
        .read_exact(&mut len_bytes)
        .map_err(|e| Error::Ipc(format!("failed to read frame length: {e}")))?;
    let len = u32::from_le_bytes(len_bytes) as usize;
    check_len(len)?;

    let mut bytes = vec![0u8; len];
    reader
        .read_exact(&mut bytes)
        .map_err(|e| Error::Ipc(format!("failed to read frame body: {e}")))?;

    T::from_frame_bytes(&bytes)
}

/// Write a frame to an async writer.
pub async fn write_frame_async<W>(writer: &mut W, frame: &impl Frame) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let bytes = frame.to_frame_bytes()?;
    let len = bytes.len() as u32;
    writer
        .write_all(&len.to_le_bytes())
        .await
        .map_err(|e| Error::Ipc(format!("failed to write frame length: {e}")))?;
    writer
        .write_all(&bytes)
        .await
        .map_err(|e| Error::Ipc(format!("failed to write frame body: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| Error::Ipc(format!("failed to flush frame: {e}")))?;
    Ok(())
}

/// Read a frame from an async reader.
///
/// Returns `None` once the channel closes. A worker killed mid-write
/// counts as a close; a frame truncated past its length prefix is a
/// transport error.
pub async fn read_frame_async<R, T>(reader: &mut R) -> Result<Option<T>>
where
    R: AsyncRead + Unpin,
    T: Frame,
{
    let mut len_bytes = [0u8; 4];
    match reader.read_exact(&mut len_bytes).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(Error::Ipc(format!("failed to read frame length: {e}"))),
    }
    let len = u32::from_le_bytes(len_bytes) as usize;
    check_len(len)?;

    let mut bytes = vec![0u8; len];
    reader
        .read_exact(&mut bytes)
        .await
        .map_err(|e| Error::Ipc(format!("failed to read frame body: {e}")))?;

    T::from_frame_bytes(&bytes).map(Some)
}
