use crate::quality::domain::verdict::QualityVerdict;
use crate::shared::constants::DEFAULT_HOLD_FRAMES;

/// Domain interface for temporal smoothing of the verdict stream.
pub trait VerdictSmoother: Send {
    fn smooth(&mut self, raw: QualityVerdict) -> QualityVerdict;
}

/// Debouncer that switches the published verdict only after the raw
/// stream has agreed on a new one for `hold` consecutive frames.
///
/// A borderline frame (e.g. mean luma oscillating around a threshold)
/// otherwise flickers the banner at analysis rate. The first verdict of
/// a stream is always published immediately; `hold = 1` is pass-through.
/// State is one verdict plus one counter, so memory use is flat no
/// matter how long the stream runs.
pub struct VerdictDebouncer {
    hold: usize,
    published: Option<QualityVerdict>,
    candidate: Option<QualityVerdict>,
    candidate_run: usize,
}

impl VerdictDebouncer {
    pub fn new(hold: usize) -> Self {
        Self {
            hold: hold.max(1),
            published: None,
            candidate: None,
            candidate_run: 0,
        }
    }
}

impl Default for VerdictDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_FRAMES)
    }
}

impl VerdictSmoother for VerdictDebouncer {
    fn smooth(&mut self, raw: QualityVerdict) -> QualityVerdict {
        let Some(published) = self.published else {
            self.published = Some(raw);
            return raw;
        };

        if raw == published {
            self.candidate = None;
            self.candidate_run = 0;
            return published;
        }

        if self.candidate == Some(raw) {
            self.candidate_run += 1;
        } else {
            self.candidate = Some(raw);
            self.candidate_run = 1;
        }

        if self.candidate_run >= self.hold {
            self.published = Some(raw);
            self.candidate = None;
            self.candidate_run = 0;
            return raw;
        }

        published
    }
}
