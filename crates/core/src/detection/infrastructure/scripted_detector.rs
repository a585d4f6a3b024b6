use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// One scripted per-frame outcome.
#[derive(Clone, Debug)]
pub enum ScriptedOutcome {
    Faces(Vec<Region>),
    Fail(&'static str),
}

impl ScriptedOutcome {
    /// Convenience: `count` identically sized faces laid out left to right.
    pub fn face_count(count: usize) -> Self {
        let regions = (0..count)
            .map(|i| Region::new(i as i32 * 120, 40, 100, 100))
            .collect();
        ScriptedOutcome::Faces(regions)
    }
}

/// Detector that replays a fixed script of outcomes, cycling when the
/// script is shorter than the stream.
///
/// Stands in for a real model during tests and pipeline bring-up; model
/// inference itself lives outside this crate.
pub struct ScriptedDetector {
    script: Vec<ScriptedOutcome>,
    call_count: usize,
}

impl ScriptedDetector {
    pub fn new(script: Vec<ScriptedOutcome>) -> Result<Self, &'static str> {
        if script.is_empty() {
            return Err("script must contain at least one outcome");
        }
        Ok(Self {
            script,
            call_count: 0,
        })
    }

    /// Detector that reports the same face count on every frame.
    pub fn constant(count: usize) -> Self {
        Self {
            script: vec![ScriptedOutcome::face_count(count)],
            call_count: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.call_count
    }
}

impl FaceDetector for ScriptedDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let outcome = self.script[self.call_count % self.script.len()].clone();
        self.call_count += 1;
        match outcome {
            ScriptedOutcome::Faces(regions) => Ok(regions),
            ScriptedOutcome::Fail(reason) => Err(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Frame {
        Frame::new(vec![128u8; 16], 4, 4, 0)
    }

    #[test]
    fn test_empty_script_errors() {
        assert!(ScriptedDetector::new(vec![]).is_err());
    }

    #[test]
    fn test_constant_reports_same_count_every_frame() {
        let mut detector = ScriptedDetector::constant(2);
        for _ in 0..3 {
            assert_eq!(detector.detect(&frame()).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_script_cycles() {
        let mut detector = ScriptedDetector::new(vec![
            ScriptedOutcome::face_count(1),
            ScriptedOutcome::face_count(0),
        ])
        .unwrap();

        assert_eq!(detector.detect(&frame()).unwrap().len(), 1);
        assert_eq!(detector.detect(&frame()).unwrap().len(), 0);
        assert_eq!(detector.detect(&frame()).unwrap().len(), 1);
        assert_eq!(detector.calls(), 3);
    }

    #[test]
    fn test_fail_outcome_surfaces_as_error() {
        let mut detector =
            ScriptedDetector::new(vec![ScriptedOutcome::Fail("inference timeout")]).unwrap();
        let err = detector.detect(&frame()).unwrap_err();
        assert_eq!(err.to_string(), "inference timeout");
    }

    #[test]
    fn test_face_count_regions_do_not_overlap() {
        let ScriptedOutcome::Faces(regions) = ScriptedOutcome::face_count(3) else {
            panic!("expected faces");
        };
        assert_eq!(regions.len(), 3);
        assert!(regions[0].x + regions[0].width <= regions[1].x);
        assert!(regions[1].x + regions[1].width <= regions[2].x);
    }
}
