//! Frame log - records raw protocol frames to an append-only file.
//!
//! The log sits between the process streams and the MCP service: every
//! newline-delimited frame is written to the file as `[IN] ...` or
//! `[OUT] ...` and then forwarded untouched. Failing to write the log never
//! interrupts the protocol stream.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::{File, OpenOptions};
use tokio::io::{
    AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, DuplexStream,
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use super::{TransportError, TransportResult};

/// Capacity of the in-memory pipe between the tap and the MCP service.
const FRAME_BUFFER_SIZE: usize = 64 * 1024;

/// Direction of a protocol frame relative to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Client to server (stdin).
    Inbound,
    /// Server to client (stdout).
    Outbound,
}

impl Direction {
    /// Tag written in front of each logged frame.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Inbound => "IN",
            Self::Outbound => "OUT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Append-only log of protocol frames.
pub struct FrameLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FrameLog {
    /// Open (or create) the log file in append mode, creating parent
    /// directories as needed.
    pub async fn open(path: impl AsRef<Path>) -> TransportResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| TransportError::frame_log(path, e))?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| TransportError::frame_log(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one frame and flush it to disk.
    pub async fn record(&self, direction: Direction, frame: &[u8]) {
        let line = format_frame(direction, frame);
        let mut file = self.file.lock().await;

        if let Err(e) = file.write_all(line.as_bytes()).await {
            warn!("Failed to write frame log {}: {}", self.path.display(), e);
            return;
        }
        if let Err(e) = file.flush().await {
            warn!("Failed to flush frame log {}: {}", self.path.display(), e);
        }
    }

    /// Insert the log between the process streams and the MCP service.
    ///
    /// Returns the stream the service should be served on. Two background
    /// tasks pump frames in each direction; when `input` reaches EOF the
    /// service sees EOF too, and once the service closes its side `output`
    /// is shut down.
    pub fn tap<R, W>(self, input: R, output: W) -> DuplexStream
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (service_side, tap_side) = tokio::io::duplex(FRAME_BUFFER_SIZE);
        let (from_service, to_service) = tokio::io::split(tap_side);
        let log = Arc::new(self);

        tokio::spawn(pump(input, to_service, log.clone(), Direction::Inbound));
        tokio::spawn(pump(from_service, output, log, Direction::Outbound));

        service_side
    }
}

/// Render a frame as a single log line.
pub fn format_frame(direction: Direction, frame: &[u8]) -> String {
    format!(
        "[{}] {}\n",
        direction,
        String::from_utf8_lossy(frame).trim()
    )
}

/// Forward newline-delimited frames from `reader` to `writer`, logging each.
async fn pump<R, W>(reader: R, mut writer: W, log: Arc<FrameLog>, direction: Direction)
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut frame = Vec::new();

    loop {
        frame.clear();
        match reader.read_until(b'\n', &mut frame).await {
            Ok(0) => break,
            Ok(_) => {
                log.record(direction, &frame).await;

                if let Err(e) = writer.write_all(&frame).await {
                    warn!("{} frame forwarding failed: {}", direction, e);
                    break;
                }
                if let Err(e) = writer.flush().await {
                    warn!("{} frame flush failed: {}", direction, e);
                    break;
                }
            }
            Err(e) => {
                warn!("{} frame read failed: {}", direction, e);
                break;
            }
        }
    }

    if let Err(e) = writer.shutdown().await {
        debug!("{} stream shutdown: {}", direction, e);
    }
    debug!("{} frame pump closed", direction);
}
