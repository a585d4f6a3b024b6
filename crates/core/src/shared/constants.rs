/// Lowest mean luma considered usable for capture. Below this the frame
/// is reported as too dark.
pub const MIN_USABLE_BRIGHTNESS: u8 = 100;

/// Highest mean luma considered usable for capture. Above this the frame
/// is reported as too bright.
pub const MAX_USABLE_BRIGHTNESS: u8 = 220;

/// Consecutive identical raw verdicts required before the published
/// verdict switches.
pub const DEFAULT_HOLD_FRAMES: usize = 3;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
