use crossbeam_channel::{bounded, Receiver, RecvError, Sender, TrySendError};

/// Creates a single-slot channel that keeps only the newest value.
///
/// A send overwrites any value the receiver has not consumed yet, so the
/// producer never blocks and no backlog forms. Frames go through one of
/// these into the analysis worker (at most one frame awaits analysis at
/// a time) and verdicts come out through another (the UI only ever wants
/// the current one; stale verdicts are worthless).
pub fn latest_channel<T>() -> (LatestSender<T>, LatestReceiver<T>) {
    let (tx, rx) = bounded(1);
    (
        LatestSender {
            tx,
            drain: rx.clone(),
        },
        LatestReceiver { rx },
    )
}

pub struct LatestSender<T> {
    tx: Sender<T>,
    // Same channel viewed from the receiving side, used to evict a stale
    // value when the slot is full.
    drain: Receiver<T>,
}

impl<T> LatestSender<T> {
    /// Publishes `value`, dropping the currently pending value if the
    /// receiver has fallen behind.
    pub fn send(&self, value: T) {
        let mut pending = value;
        loop {
            match self.tx.try_send(pending) {
                Ok(()) => return,
                Err(TrySendError::Full(v)) => {
                    let _ = self.drain.try_recv();
                    pending = v;
                }
                // Receiver gone: the value has nowhere to go.
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }
}

pub struct LatestReceiver<T> {
    rx: Receiver<T>,
}

impl<T> LatestReceiver<T> {
    /// Blocks until the next value arrives or all senders disconnect.
    pub fn recv(&self) -> Result<T, RecvError> {
        self.rx.recv()
    }

    /// Returns the newest pending value without blocking, or `None`
    /// when nothing new has been published since the last read.
    pub fn latest(&self) -> Option<T> {
        let mut newest = None;
        while let Ok(value) = self.rx.try_recv() {
            newest = Some(value);
        }
        newest
    }
}
