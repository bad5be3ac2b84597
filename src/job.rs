//! Searching a dictionary in slices, on one or more workers.
//!
//! A [`JobRequest`] carries everything a worker needs, in the JSON form used between processes.
//! A [`Coordinator`] splits one dictionary into contiguous slices, hands them to its
//! workers and merges the partial results.
use crate::control::{Deadline, Yield};
use crate::search::{Playables, Search};
use crate::{Board, Dictionary, Error, LetterValues, Rack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::time::Duration;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A request to search the words `dictionary[start..start + count]`.
///
/// Field names follow the JSON protocol (`boardStateTransferrable`, `hand`, `dictionary`,
/// `weighter`, `dictionaryWordsStartIndex`, `dictionaryWordsIndexingCount`).
/// A `null` in `hand` is a blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    /// The board in transfer JSON, see [`Board::to_transferable`]
    pub board_state_transferrable: String,
    pub hand: Vec<Option<char>>,
    pub dictionary: Vec<String>,
    /// Letter values, keyed by letter
    pub weighter: BTreeMap<String, u32>,
    pub dictionary_words_start_index: usize,
    pub dictionary_words_indexing_count: usize,
}

impl JobRequest {
    /// A request for the whole dictionary.
    /// ## Errors
    /// If the board can not be encoded.
    pub fn new(
        board: &Board,
        rack: &Rack,
        dictionary: &Dictionary,
        values: &LetterValues,
    ) -> Result<JobRequest, Error> {
        Ok(JobRequest {
            board_state_transferrable: board.to_transferable()?,
            hand: rack.to_hand(),
            dictionary: dictionary.words().to_vec(),
            weighter: values.to_map(),
            dictionary_words_start_index: 0,
            dictionary_words_indexing_count: dictionary.len(),
        })
    }

    /// Restrict the request to `count` words from `start`, and return the modified request.
    #[must_use]
    pub fn with_slice(mut self, start: usize, count: usize) -> JobRequest {
        self.dictionary_words_start_index = start;
        self.dictionary_words_indexing_count = count;
        self
    }

    /// ## Errors
    /// If serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// ## Errors
    /// If `text` is not a valid request.
    pub fn from_json(text: &str) -> Result<JobRequest, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// The slice of the dictionary this request covers, clamped to the dictionary.
    fn range(&self) -> (usize, usize) {
        let len = self.dictionary.len();
        let start = self.dictionary_words_start_index.min(len);
        let end = start
            .saturating_add(self.dictionary_words_indexing_count)
            .min(len);
        (start, end - start)
    }
}

/// Something that can execute a [`JobRequest`]: in this process, or behind a transport.
pub trait Worker: Send + Sync {
    /// ## Errors
    /// When the job could not be completed. The coordinator may retry it elsewhere.
    fn run(&self, job: &JobRequest) -> Result<Playables, Error>;
}

/// Executes jobs in the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorker {
    timeout: Option<Duration>,
}

impl LocalWorker {
    pub fn new() -> LocalWorker {
        LocalWorker::default()
    }

    /// Give up a job that runs longer than `limit`, and return the modified worker.
    #[must_use]
    pub fn with_timeout(mut self, limit: Duration) -> LocalWorker {
        self.timeout = Some(limit);
        self
    }

    /// Execute a job given as JSON, and return the result as JSON.
    /// This is the whole request handler of a worker process.
    ///
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Error, LocalWorker, Playables};
    /// let request = r#"{
    ///     "boardStateTransferrable": "[]",
    ///     "hand": ["A", null],
    ///     "dictionary": ["AT"],
    ///     "weighter": {"A": 1, "T": 1},
    ///     "dictionaryWordsStartIndex": 0,
    ///     "dictionaryWordsIndexingCount": 1
    /// }"#;
    /// let response = LocalWorker::new().handle_json(request)?;
    /// assert!(Playables::from_json(&response)?.is_empty());
    /// # Ok::<(), Error>(())
    /// ```
    /// ## Errors
    /// If the request can not be decoded, or the job fails.
    pub fn handle_json(&self, request: &str) -> Result<String, Error> {
        let job = JobRequest::from_json(request)?;
        self.run(&job)?.to_json()
    }
}

impl Worker for LocalWorker {
    fn run(&self, job: &JobRequest) -> Result<Playables, Error> {
        let board = Board::from_transferable(&job.board_state_transferrable)?;
        let rack = Rack::from_hand(&job.hand)?;
        let dictionary = Dictionary::from_words(&job.dictionary)?;
        let values = LetterValues::try_from(&job.weighter)?;
        let search = Search::new(&board, &rack, &dictionary, &values);
        let (start, count) = job.range();
        match self.timeout {
            Some(limit) => search.run_slice(start, count, &mut Deadline::after(limit)),
            None => search.run_slice(start, count, &mut Yield),
        }
    }
}

/// Split `count` items from `start` into at most `parts` contiguous (start, count) slices.
/// Earlier slices get the remainder, one item each.
fn partition(start: usize, count: usize, parts: usize) -> Vec<(usize, usize)> {
    let parts = parts.max(1).min(count.max(1));
    let size = count / parts;
    let extra = count % parts;
    let mut slices = Vec::with_capacity(parts);
    let mut offset = start;
    for i in 0..parts {
        let len = size + if i < extra { 1 } else { 0 };
        slices.push((offset, len));
        offset += len;
    }
    slices
}

/// Spreads one search over several workers.
///
/// The dictionary range of a request is split into slices, and slice `i` goes to worker
/// `i % workers`. A slice that fails is retried on the next worker, until every worker
/// has been tried. The results are merged in slice order, so the result is the same as
/// a search of the whole range by a single worker.
///
/// ## Examples
/// ```
/// # use wordgrid_solver::{Board, Coordinator, Dictionary, Error, JobRequest, LetterValues, LocalWorker, Rack, Search};
/// let board = Board::standard();
/// let rack: Rack = "CATS".parse()?;
/// let dictionary = Dictionary::from_words(&["CAT", "AT", "CATS", "ACTS", "SCAT"])?;
/// let values = LetterValues::standard();
/// let coordinator = Coordinator::new()
///     .with_worker(LocalWorker::new())
///     .with_worker(LocalWorker::new());
/// let job = JobRequest::new(&board, &rack, &dictionary, &values)?;
/// let playables = coordinator.run(&job)?;
/// assert_eq!(playables, Search::new(&board, &rack, &dictionary, &values).run());
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct Coordinator {
    workers: Vec<Box<dyn Worker>>,
    slices: Option<usize>,
}

impl Coordinator {
    pub fn new() -> Coordinator {
        Coordinator::default()
    }

    /// Add a worker, and return the modified coordinator.
    #[must_use]
    pub fn with_worker<W: Worker + 'static>(mut self, worker: W) -> Coordinator {
        self.workers.push(Box::new(worker));
        self
    }

    /// Split the dictionary in `slices` parts instead of one per worker,
    /// and return the modified coordinator.
    #[must_use]
    pub fn with_slices(mut self, slices: usize) -> Coordinator {
        self.slices = Some(slices);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers.len()
    }

    /// Search the dictionary range of `job`, spread over the workers.
    /// ## Errors
    /// [`Error::NoWorkers`] without workers, or [`Error::WorkerFailed`] for the first
    /// slice that failed on every worker.
    pub fn run(&self, job: &JobRequest) -> Result<Playables, Error> {
        if self.workers.is_empty() {
            return Err(Error::NoWorkers);
        }
        let (start, count) = job.range();
        let slices = partition(start, count, self.slices.unwrap_or(self.workers.len()));

        #[cfg(feature = "rayon")]
        let results = slices
            .par_iter()
            .enumerate()
            .map(|(i, &(start, count))| self.run_slice(job, i, start, count))
            .collect::<Result<Vec<_>, Error>>()?;
        #[cfg(not(feature = "rayon"))]
        let results = slices
            .iter()
            .enumerate()
            .map(|(i, &(start, count))| self.run_slice(job, i, start, count))
            .collect::<Result<Vec<_>, Error>>()?;

        let mut playables = Playables::new();
        for result in results {
            playables.merge(result);
        }
        Ok(playables)
    }

    fn run_slice(
        &self,
        job: &JobRequest,
        index: usize,
        start: usize,
        count: usize,
    ) -> Result<Playables, Error> {
        let request = job.clone().with_slice(start, count);
        let n = self.workers.len();
        let mut reason = String::new();
        for attempt in 0..n {
            match self.workers[(index + attempt) % n].run(&request) {
                Ok(playables) => return Ok(playables),
                Err(err) => reason = err.to_string(),
            }
        }
        Err(Error::WorkerFailed {
            start,
            count,
            reason,
        })
    }
}
