use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::pipeline::analyze_frame_use_case::AnalyzeFrameUseCase;
use crate::pipeline::latest_channel::{latest_channel, LatestReceiver, LatestSender};
use crate::quality::domain::verdict::QualityVerdict;
use crate::shared::frame::Frame;

/// Handles to a running analysis worker.
///
/// `frames` feeds the worker through a keep-only-latest slot: a frame
/// that arrives while the previous one is still being analyzed replaces
/// it instead of queueing, so the feedback loop can never fall behind
/// the camera. `verdicts` is the matching single-slot output; the UI
/// polls it with `latest()` once per render.
pub struct AnalysisHandle {
    pub frames: LatestSender<Frame>,
    pub verdicts: LatestReceiver<QualityVerdict>,
    pub cancelled: Arc<AtomicBool>,
}

/// Spawns the analysis thread for one capture stream.
///
/// The thread runs `recv frame → analyze → publish verdict` until the
/// frame sender is dropped or the cancellation flag is set. A frame
/// that fails analysis is logged and skipped; the stream keeps flowing.
pub fn spawn(mut use_case: AnalyzeFrameUseCase) -> AnalysisHandle {
    let (frame_tx, frame_rx) = latest_channel::<Frame>();
    let (verdict_tx, verdict_rx) = latest_channel::<QualityVerdict>();
    let cancelled = Arc::new(AtomicBool::new(false));
    let cancelled_worker = cancelled.clone();

    thread::spawn(move || {
        while let Ok(frame) = frame_rx.recv() {
            if cancelled_worker.load(Ordering::Relaxed) {
                break;
            }
            match use_case.execute(&frame) {
                Ok(verdict) => verdict_tx.send(verdict),
                Err(e) => log::warn!("skipping frame {}: {e}", frame.index()),
            }
        }
    });

    AnalysisHandle {
        frames: frame_tx,
        verdicts: verdict_rx,
        cancelled,
    }
}
