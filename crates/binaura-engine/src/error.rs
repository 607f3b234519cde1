use thiserror::Error;

/// Errors surfaced by the block-processing path.
///
/// Every variant is non-fatal: the offending block is skipped with its
/// samples left untouched, and the next block may process normally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpatializerError {
    #[error("stereo processing requires at least 2 channels, got {0}")]
    ChannelCount(usize),
    #[error("buffer length {len} is not a multiple of the channel count {channels}")]
    FrameAlignment { len: usize, channels: usize },
}
