use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BrightnessError {
    /// The caller handed over an empty luma plane. A fabricated default
    /// sample would mask the pipeline bug, so this is reported instead.
    #[error("invalid input: luma buffer is empty")]
    InvalidInput,
}

/// Mean luma of a frame's pixel buffer, truncated toward zero.
///
/// Plain arithmetic mean, no weighting or gamma correction: the estimate
/// feeds a coarse three-band lighting check and runs at frame rate, so
/// speed wins over photometric accuracy.
pub fn estimate(luma: &[u8]) -> Result<u8, BrightnessError> {
    if luma.is_empty() {
        return Err(BrightnessError::InvalidInput);
    }
    let sum: u64 = luma.iter().map(|&sample| sample as u64).sum();
    Ok((sum / luma.len() as u64) as u8)
}
