//! Background extraction with "latest wins" delivery.
//!
//! The caller may submit several bitmaps in quick succession (for example
//! while a user flips through uploads). Each submission gets a [`Ticket`];
//! only the result for the most recent ticket is ever handed back, and the
//! worker skips requests that are already stale when it reaches them.
//!
//! One thread, two channels, one atomic counter. No locks.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

use super::{extract_palette, ExtractorOptions, PixelBuffer};
use crate::models::ColorPalette;

/// Generation number identifying one extraction request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(pub u64);

/// A finished extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Request this result answers
    pub ticket: Ticket,
    /// Extracted palette
    pub palette: ColorPalette,
}

struct Request {
    ticket: Ticket,
    buffer: PixelBuffer,
}

/// Runs extraction on a dedicated thread.
pub struct ExtractionWorker {
    requests: Option<mpsc::Sender<Request>>,
    results: mpsc::Receiver<ExtractionResult>,
    latest: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

impl ExtractionWorker {
    /// Spawns the worker thread.
    #[must_use]
    pub fn spawn(options: ExtractorOptions) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (result_tx, result_rx) = mpsc::channel::<ExtractionResult>();
        let latest = Arc::new(AtomicU64::new(0));

        let worker_latest = Arc::clone(&latest);
        let handle = thread::spawn(move || {
            for request in request_rx {
                if request.ticket.0 < worker_latest.load(Ordering::Acquire) {
                    debug!(ticket = request.ticket.0, "skipping stale extraction request");
                    continue;
                }
                let palette = extract_palette(&request.buffer, options);
                let result = ExtractionResult {
                    ticket: request.ticket,
                    palette,
                };
                if result_tx.send(result).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: Some(request_tx),
            results: result_rx,
            latest,
            handle: Some(handle),
        }
    }

    /// Queues a bitmap for extraction and returns its ticket.
    ///
    /// Every earlier ticket becomes stale.
    pub fn submit(&self, buffer: PixelBuffer) -> Ticket {
        let ticket = Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1);
        let sent = self
            .requests
            .as_ref()
            .is_some_and(|tx| tx.send(Request { ticket, buffer }).is_ok());
        if !sent {
            warn!(ticket = ticket.0, "extraction worker is gone; request dropped");
        }
        ticket
    }

    /// The most recently issued ticket, if any.
    #[must_use]
    pub fn latest_ticket(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }

    /// Blocks until the result for the latest ticket arrives.
    ///
    /// Results for older tickets are discarded. Returns `None` when nothing
    /// was submitted or the worker thread has stopped.
    pub fn recv_latest(&self) -> Option<ExtractionResult> {
        self.latest_ticket()?;
        loop {
            let result = self.results.recv().ok()?;
            if result.ticket.0 == self.latest.load(Ordering::Acquire) {
                return Some(result);
            }
            debug!(ticket = result.ticket.0, "dropping stale extraction result");
        }
    }

    /// Non-blocking variant of [`recv_latest`](Self::recv_latest): drains
    /// what is ready and returns the latest result if it is among them.
    pub fn try_recv_latest(&self) -> Option<ExtractionResult> {
        let latest = self.latest.load(Ordering::Acquire);
        self.results
            .try_iter()
            .filter(|result| result.ticket.0 == latest)
            .last()
    }
}

impl Drop for ExtractionWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("extraction worker panicked");
            }
        }
    }
}
