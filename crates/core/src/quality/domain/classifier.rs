use crate::quality::domain::verdict::QualityVerdict;
use crate::quality::domain::verdict_debouncer::VerdictSmoother;
use crate::shared::constants::{MAX_USABLE_BRIGHTNESS, MIN_USABLE_BRIGHTNESS};
use crate::shared::region::Region;

/// Outcome of the face-detection oracle for one frame.
///
/// `Failed` is a first-class input, not an error: the person capturing
/// cannot tell a model fault from an absent face, and the remedial
/// action (reposition) is the same.
#[derive(Clone, Debug)]
pub enum FaceDetectionResult {
    Faces(Vec<Region>),
    Failed,
}

impl FaceDetectionResult {
    pub fn face_count(&self) -> Option<usize> {
        match self {
            FaceDetectionResult::Faces(regions) => Some(regions.len()),
            FaceDetectionResult::Failed => None,
        }
    }
}

/// Maps one frame's detection outcome and brightness sample to a verdict.
///
/// Checks run in strict priority order; face presence and count are more
/// actionable feedback than lighting, so they dominate. Brightness is
/// consulted only when exactly one face is in frame — with zero or
/// several faces a lighting banner would compete with the one that
/// actually helps. A future blur signal would slot in between the
/// brightness band and `Good`.
pub fn classify(detection: &FaceDetectionResult, brightness: u8) -> QualityVerdict {
    match detection.face_count() {
        None | Some(0) => QualityVerdict::NoFaceDetected,
        Some(count) if count > 1 => QualityVerdict::MultipleFaces,
        Some(_) => {
            if brightness < MIN_USABLE_BRIGHTNESS {
                QualityVerdict::TooDark
            } else if brightness > MAX_USABLE_BRIGHTNESS {
                QualityVerdict::TooBright
            } else {
                QualityVerdict::Good
            }
        }
    }
}

/// Stateful wrapper around [`classify`] that optionally smooths the
/// emitted verdict stream.
///
/// Without a smoother every raw verdict passes through. With one, the
/// published verdict lags the raw stream per the smoother's policy so a
/// single borderline frame cannot flicker the banner.
pub struct FrameQualityClassifier {
    smoother: Option<Box<dyn VerdictSmoother>>,
}

impl FrameQualityClassifier {
    pub fn new() -> Self {
        Self { smoother: None }
    }

    pub fn with_smoother(smoother: Box<dyn VerdictSmoother>) -> Self {
        Self {
            smoother: Some(smoother),
        }
    }

    pub fn evaluate(&mut self, detection: &FaceDetectionResult, brightness: u8) -> QualityVerdict {
        let raw = classify(detection, brightness);
        match self.smoother.as_mut() {
            Some(smoother) => smoother.smooth(raw),
            None => raw,
        }
    }
}

impl Default for FrameQualityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn faces(count: usize) -> FaceDetectionResult {
        let regions = (0..count)
            .map(|i| Region::new(i as i32 * 110, 0, 100, 100))
            .collect();
        FaceDetectionResult::Faces(regions)
    }

    // Every detection outcome crossed with brightness values around both
    // thresholds yields exactly one defined verdict.
    #[rstest]
    fn test_totality(
        #[values(FaceDetectionResult::Failed, faces(0), faces(1), faces(2), faces(5))]
        detection: FaceDetectionResult,
        #[values(0, 99, 100, 150, 220, 221, 255)] brightness: u8,
    ) {
        let verdict = classify(&detection, brightness);
        // TooBlurry is reserved; no input may produce it.
        assert_ne!(verdict, QualityVerdict::TooBlurry);
    }

    #[test]
    fn test_face_count_dominates_brightness() {
        assert_eq!(classify(&faces(2), 50), QualityVerdict::MultipleFaces);
        assert_eq!(classify(&faces(0), 50), QualityVerdict::NoFaceDetected);
    }

    #[rstest]
    #[case::lower_bound_inclusive(100, QualityVerdict::Good)]
    #[case::just_below_lower_bound(99, QualityVerdict::TooDark)]
    #[case::upper_bound_inclusive(220, QualityVerdict::Good)]
    #[case::just_above_upper_bound(221, QualityVerdict::TooBright)]
    #[case::mid_band(150, QualityVerdict::Good)]
    #[case::black(0, QualityVerdict::TooDark)]
    #[case::white(255, QualityVerdict::TooBright)]
    fn test_single_face_brightness_band(#[case] brightness: u8, #[case] expected: QualityVerdict) {
        assert_eq!(classify(&faces(1), brightness), expected);
    }

    #[rstest]
    fn test_detection_failure_equals_zero_faces(
        #[values(0, 99, 150, 221, 255)] brightness: u8,
    ) {
        assert_eq!(
            classify(&FaceDetectionResult::Failed, brightness),
            QualityVerdict::NoFaceDetected
        );
        assert_eq!(
            classify(&FaceDetectionResult::Failed, brightness),
            classify(&faces(0), brightness)
        );
    }

    #[test]
    fn test_three_faces_mid_brightness_is_multiple_faces() {
        assert_eq!(classify(&faces(3), 150), QualityVerdict::MultipleFaces);
    }

    #[test]
    fn test_repeated_classification_is_deterministic() {
        let detection = faces(1);
        let first = classify(&detection, 80);
        for _ in 0..10 {
            assert_eq!(classify(&detection, 80), first);
        }
        assert_eq!(first, QualityVerdict::TooDark);
    }

    #[test]
    fn test_classifier_without_smoother_passes_raw_verdicts() {
        let mut classifier = FrameQualityClassifier::new();
        assert_eq!(classifier.evaluate(&faces(1), 150), QualityVerdict::Good);
        assert_eq!(
            classifier.evaluate(&faces(0), 150),
            QualityVerdict::NoFaceDetected
        );
    }

    #[test]
    fn test_face_count_accessor() {
        assert_eq!(faces(2).face_count(), Some(2));
        assert_eq!(FaceDetectionResult::Failed.face_count(), None);
    }
}
