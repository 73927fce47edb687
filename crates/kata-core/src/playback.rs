//! Character-by-character playback of canned feedback text.
//!
//! Simulated AI responses are revealed one character at a time with a
//! fixed per-character delay, mimicking live generation. Playback is
//! cooperative and decoupled from state mutation: outcomes are applied
//! eagerly before streaming begins, so an aborted stream can never leave
//! the session in a corrupted state; the worst case is a stalled
//! animation.
//!
//! Only one stream is meaningfully live at a time. Starting a new stream
//! supersedes any in-flight one: the superseded task observes a stale
//! generation and stops without touching the shared snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::time::sleep;

/// Read-only view of the playback state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackSnapshot {
    /// The prefix of the feedback text revealed so far
    pub text: String,

    /// Whether a stream is currently appending characters
    pub is_streaming: bool,
}

#[derive(Debug, Default)]
struct PlaybackState {
    text: String,
    is_streaming: bool,
    generation: u64,
}

/// Cancellable feedback streamer shared between the engine and its
/// presentation layer.
///
/// Cloning is cheap; clones share the same underlying state so a UI task
/// can poll [`snapshot`](Self::snapshot) while the stream runs.
#[derive(Debug, Clone, Default)]
pub struct FeedbackPlayback {
    state: Arc<Mutex<PlaybackState>>,
    abort: Arc<AtomicBool>,
}

impl FeedbackPlayback {
    /// Creates an idle playback controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveals `full_text` one character at a time with `delay` between
    /// characters, resolving once the text is fully revealed, aborted via
    /// [`stop`](Self::stop), or superseded by a newer stream.
    ///
    /// Starting a stream clears any previously revealed text and resets
    /// the abort flag.
    pub async fn stream(&self, full_text: &str, delay: Duration) {
        let my_generation = {
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            state.generation += 1;
            state.text.clear();
            state.is_streaming = true;
            self.abort.store(false, Ordering::SeqCst);
            state.generation
        };

        for ch in full_text.chars() {
            // Abort flag is checked before each reveal, per the
            // cooperative cancellation contract.
            if self.abort.load(Ordering::SeqCst) {
                break;
            }
            sleep(delay).await;
            let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
            if state.generation != my_generation {
                // Superseded by a newer stream; leave its state alone.
                return;
            }
            if self.abort.load(Ordering::SeqCst) {
                break;
            }
            state.text.push(ch);
        }

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.generation == my_generation {
            state.is_streaming = false;
        }
    }

    /// Halts an in-flight stream, retaining the text revealed so far.
    pub fn stop(&self) {
        self.abort.store(true, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.is_streaming = false;
    }

    /// Clears text and flags, returning to the idle state.
    ///
    /// Any in-flight stream is superseded, so its remaining characters
    /// never reappear after the reset.
    pub fn reset(&self) {
        self.abort.store(false, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.generation += 1;
        state.text.clear();
        state.is_streaming = false;
    }

    /// Returns the current text prefix and streaming flag.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        PlaybackSnapshot {
            text: state.text.clone(),
            is_streaming: state.is_streaming,
        }
    }
}
