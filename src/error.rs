//! The status taxonomy shared across the decoding engine.

use thiserror::Error;

/// An error surfaced by a decoder, the factory, or a transport collaborator.
///
/// The taxonomy is shared by the whole engine: decoders report only a subset
/// (typically [`Unsupported`](Error::Unsupported),
/// [`InvalidArguments`](Error::InvalidArguments), and [`Io`](Error::Io)),
/// while the remaining states are reserved for the transport layer that
/// acquires raw dive buffers from hardware.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Operation not implemented, or fact not present in this dive.
    #[error("Unsupported operation or unset field.")]
    Unsupported,
    /// An argument is out of range or otherwise invalid.
    #[error("Invalid arguments.")]
    InvalidArguments,
    /// Memory could not be allocated.
    #[error("Out of memory.")]
    NoMemory,
    /// No device present.
    #[error("No device found.")]
    NoDevice,
    /// Insufficient permission to access the device.
    #[error("Access denied.")]
    NoAccess,
    /// An input or output failure, including undersized dive buffers.
    #[error("Input/output error.")]
    Io,
    /// The operation did not complete in time.
    #[error("Operation timed out.")]
    Timeout,
    /// The device violated its communication protocol.
    #[error("Protocol error.")]
    Protocol,
    /// The dive data is malformed or corrupt.
    #[error("Malformed or corrupt data.")]
    DataFormat,
    /// The operation was cancelled.
    #[error("Operation cancelled.")]
    Cancelled,
}
