//! Cooperative control of a running search.
//!
//! The search driver calls [`Checkpoint::checkpoint`] once before each dictionary word.
//! This is the only point where a search hands back control: a checkpoint can
//! yield the thread, report progress, or stop the search by returning an error.
use crate::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Called once per dictionary word, with the index and the word about to be searched.
pub trait Checkpoint {
    /// ## Errors
    /// An error stops the search, and is returned by it.
    fn checkpoint(&mut self, index: usize, word: &str) -> Result<(), Error>;
}

/// Any closure `FnMut(index, word) -> Result<(), Error>` is a checkpoint.
impl<F> Checkpoint for F
where
    F: FnMut(usize, &str) -> Result<(), Error>,
{
    fn checkpoint(&mut self, index: usize, word: &str) -> Result<(), Error> {
        self(index, word)
    }
}

/// Never stops the search, and does not yield.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl Checkpoint for Unbounded {
    fn checkpoint(&mut self, _index: usize, _word: &str) -> Result<(), Error> {
        Ok(())
    }
}

/// Yields the thread to the scheduler before each word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yield;

impl Checkpoint for Yield {
    fn checkpoint(&mut self, _index: usize, _word: &str) -> Result<(), Error> {
        std::thread::yield_now();
        Ok(())
    }
}

/// A shared flag to cancel a search from another thread.
///
/// ## Examples
/// ```
/// use wordgrid_solver::{CancelToken, Checkpoint};
/// let token = CancelToken::new();
/// let mut checkpoint = token.clone();
/// assert!(checkpoint.checkpoint(0, "CAT").is_ok());
/// token.cancel();
/// assert!(checkpoint.checkpoint(1, "DOG").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    /// Request every search holding this token to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Checkpoint for CancelToken {
    fn checkpoint(&mut self, index: usize, _word: &str) -> Result<(), Error> {
        if self.is_cancelled() {
            Err(Error::Cancelled { index })
        } else {
            Ok(())
        }
    }
}

/// Stops the search once a time limit has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `limit` from now
    pub fn after(limit: Duration) -> Deadline {
        Deadline(Instant::now() + limit)
    }

    /// A deadline at `instant`
    pub fn at(instant: Instant) -> Deadline {
        Deadline(instant)
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.0
    }
}

impl Checkpoint for Deadline {
    fn checkpoint(&mut self, index: usize, _word: &str) -> Result<(), Error> {
        if self.is_expired() {
            Err(Error::TimedOut { index })
        } else {
            std::thread::yield_now();
            Ok(())
        }
    }
}
