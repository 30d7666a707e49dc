use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing::debug;

use pantry_core::traits::RatingPredictor;
use pantry_core::{Error, RecipeId, Result};

pub const DEFAULT_MAX_IN_FLIGHT: usize = 4;

/// Bounds every call to an inner predictor.
///
/// Each call runs on a worker thread; when no answer arrives within `limit`
/// the candidate fails with `Error::PredictorUnavailable` and the late answer
/// is discarded. A timed-out worker keeps its slot until the inner call
/// returns, and at most `max_in_flight` workers exist at once. Calls made
/// while every slot is taken fail immediately.
pub struct TimeoutPredictor<P: ?Sized> {
    inner: Arc<P>,
    limit: Duration,
    max_in_flight: usize,
    in_flight: Arc<AtomicUsize>,
}

/// Releases a worker slot when the worker thread finishes.
struct Slot(Arc<AtomicUsize>);

impl Drop for Slot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

impl<P: RatingPredictor + ?Sized + 'static> TimeoutPredictor<P> {
    pub fn new(inner: Arc<P>, limit: Duration) -> Self {
        Self { inner, limit, max_in_flight: DEFAULT_MAX_IN_FLIGHT, in_flight: Arc::new(AtomicUsize::new(0)) }
    }

    /// `max` is raised to 1 if given as 0.
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.max_in_flight = max.max(1);
        self
    }

    pub fn limit(&self) -> Duration { self.limit }

    pub fn max_in_flight(&self) -> usize { self.max_in_flight }

    /// Worker threads currently alive, including ones whose caller timed out.
    pub fn in_flight(&self) -> usize { self.in_flight.load(Ordering::Acquire) }

    fn acquire(&self) -> Option<Slot> {
        self.in_flight
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| (n < self.max_in_flight).then_some(n + 1))
            .ok()
            .map(|_| Slot(Arc::clone(&self.in_flight)))
    }
}

impl<P: RatingPredictor + ?Sized + 'static> RatingPredictor for TimeoutPredictor<P> {
    fn predict(&self, user: &str, recipe: RecipeId) -> Result<f64> {
        let slot = self.acquire().ok_or_else(|| Error::PredictorUnavailable {
            recipe,
            reason: format!("all {} predictor workers busy", self.max_in_flight),
        })?;
        let (tx, rx) = mpsc::sync_channel(1);
        let inner = Arc::clone(&self.inner);
        let user = user.to_string();
        // on spawn failure the closure, and the slot with it, is dropped
        let _worker = thread::Builder::new()
            .name(format!("predict-{}", recipe))
            .spawn(move || {
                let _slot = slot;
                // receiver may be gone after a timeout
                let _ = tx.send(inner.predict(&user, recipe));
            })
            .map_err(|e| Error::PredictorUnavailable { recipe, reason: format!("spawn failed: {}", e) })?;

        match rx.recv_timeout(self.limit) {
            Ok(result) => result,
            Err(mpsc::RecvTimeoutError::Timeout) => {
                debug!(%recipe, limit_ms = self.limit.as_millis() as u64, "rating prediction timed out");
                Err(Error::PredictorUnavailable {
                    recipe,
                    reason: format!("no estimate within {:?}", self.limit),
                })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(Error::PredictorUnavailable {
                recipe,
                reason: "predictor worker exited without an estimate".to_string(),
            }),
        }
    }
}
