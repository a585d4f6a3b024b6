use crate::detection::domain::face_detector::FaceDetector;
use crate::quality::domain::brightness;
use crate::quality::domain::classifier::{FaceDetectionResult, FrameQualityClassifier};
use crate::quality::domain::verdict::QualityVerdict;
use crate::shared::frame::Frame;

/// Per-frame orchestration: detect faces, sample brightness, classify.
///
/// One instance serves one capture stream and is driven sequentially,
/// one frame at a time; classifier smoothing state carries across calls.
pub struct AnalyzeFrameUseCase {
    detector: Box<dyn FaceDetector>,
    classifier: FrameQualityClassifier,
}

impl AnalyzeFrameUseCase {
    pub fn new(detector: Box<dyn FaceDetector>, classifier: FrameQualityClassifier) -> Self {
        Self {
            detector,
            classifier,
        }
    }

    /// Produces the verdict for one frame.
    ///
    /// A detector error degrades to `NoFaceDetected` rather than
    /// propagating; the stream must keep flowing through bad frames.
    /// The only error out of here is an empty luma plane, which is a
    /// pipeline bug upstream and must surface instead of being coerced
    /// to a fake brightness sample.
    pub fn execute(&mut self, frame: &Frame) -> Result<QualityVerdict, Box<dyn std::error::Error>> {
        let detection = match self.detector.detect(frame) {
            Ok(regions) => FaceDetectionResult::Faces(regions),
            Err(e) => {
                log::warn!("face detection failed on frame {}: {e}", frame.index());
                FaceDetectionResult::Failed
            }
        };

        // Brightness only matters in the single-face branch; skip the
        // pixel pass otherwise.
        let brightness = match detection.face_count() {
            Some(1) => brightness::estimate(frame.luma())?,
            _ => 0,
        };

        let verdict = self.classifier.evaluate(&detection, brightness);
        log::debug!(
            "frame {}: faces={:?} brightness={} verdict={:?}",
            frame.index(),
            detection.face_count(),
            brightness,
            verdict
        );
        Ok(verdict)
    }
}
