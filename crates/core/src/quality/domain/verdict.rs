use serde::Serialize;

/// Per-frame capture quality verdict.
///
/// Exactly one variant holds for every evaluated frame. `TooBlurry` is
/// reserved: the classifier never produces it today (no blur signal is
/// wired in), but capture UIs already branch on the full set, so it
/// stays part of the closed enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityVerdict {
    Good,
    TooDark,
    TooBright,
    TooBlurry,
    NoFaceDetected,
    MultipleFaces,
}

impl QualityVerdict {
    /// Banner text for the capture UI. `Good` shows no banner.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            QualityVerdict::Good => None,
            QualityVerdict::TooDark => Some("Too dark — raise brightness"),
            QualityVerdict::TooBright => Some("Too bright — lower brightness"),
            QualityVerdict::TooBlurry => Some("Too blurry — hold the camera steady"),
            QualityVerdict::NoFaceDetected => {
                Some("No face detected – please position your face in view")
            }
            QualityVerdict::MultipleFaces => {
                Some("Multiple faces detected – use only one face at a time")
            }
        }
    }

    /// True when the frame is usable for the dataset.
    pub fn is_usable(&self) -> bool {
        matches!(self, QualityVerdict::Good)
    }
}
