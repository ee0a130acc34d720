//! Comparison session - sources, working buffers, and the round loop

use crate::combinations::CombinationSet;
use crate::source::Source;
use crate::types::{CmpyError, Pair, Verdict};

/// Callback for reporting comparison progress
///
/// Arguments:
/// - `rounds_completed`: Number of read-then-evaluate rounds finished so far
/// - `bytes_read`: Total bytes pulled from all sources so far
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// Fixed-capacity read buffer for one source, plus the valid byte count of
/// the most recent fill. Reused every round, never resized.
#[derive(Debug)]
struct WorkingBuffer {
    data: Vec<u8>,
    len: usize,
}

impl WorkingBuffer {
    fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity],
            len: 0,
        }
    }

    fn valid(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// Owning context for one comparison run.
///
/// Bundles the open sources, one working buffer per source, and the
/// pair/verdict table. Everything is dropped together when the session
/// goes out of scope; regular files are closed, the standard input
/// binding is released without closing the process channel.
pub struct Session {
    sources: Vec<Source>,
    buffers: Vec<WorkingBuffer>,
    combinations: CombinationSet,
}

impl Session {
    /// Build a session over already-open sources.
    ///
    /// Allocates one `buffer_capacity`-byte working buffer per source and
    /// the full pair table. A failed build drops the sources it was
    /// handed; no half-initialized session is ever reachable.
    ///
    /// # Errors
    /// `CmpyError::Config` when no sources were provided or
    /// `buffer_capacity` is zero.
    pub fn build(sources: Vec<Source>, buffer_capacity: usize) -> Result<Self, CmpyError> {
        if sources.is_empty() {
            return Err(CmpyError::Config(
                "at least one source is required".to_string(),
            ));
        }
        if buffer_capacity == 0 {
            return Err(CmpyError::Config(
                "buffer capacity must be at least 1 byte".to_string(),
            ));
        }

        let buffers = sources
            .iter()
            .map(|_| WorkingBuffer::new(buffer_capacity))
            .collect();
        let combinations = CombinationSet::new(sources.len());

        Ok(Self {
            sources,
            buffers,
            combinations,
        })
    }

    /// Number of pairs under comparison.
    pub fn pair_count(&self) -> usize {
        self.combinations.len()
    }

    /// Pair at `position` in enumeration order, for the reporting layer.
    pub fn pair_at(&self, position: usize) -> Option<Pair> {
        self.combinations.get(position)
    }

    /// Verdict of the pair at `position`.
    pub fn verdict_at(&self, position: usize) -> Option<Verdict> {
        self.combinations.verdict(position)
    }

    /// Identity of the source at `index`.
    pub fn identity(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(|source| source.identity())
    }

    /// Re-enumerate the pair table and reset every verdict to Unknown.
    pub fn rebuild(&mut self) -> bool {
        self.combinations.rebuild()
    }

    /// Run the comparison to its fixed point. See [`run_with_progress`].
    ///
    /// [`run_with_progress`]: Session::run_with_progress
    pub fn run(&mut self) -> Result<bool, CmpyError> {
        self.run_with_progress(None)
    }

    /// Drive synchronized read-then-evaluate rounds until every pair holds
    /// a terminal verdict.
    ///
    /// Each round refills the working buffer of every source still touched
    /// by an undecided pair, then evaluates every undecided pair against
    /// the fresh blocks. Decided pairs are skipped for good; verdicts only
    /// move Unknown → Matched or Unknown → NotMatched. A source read
    /// failure settles every pair touching that source as NotMatched and
    /// the run continues for the rest.
    ///
    /// Returns true iff every pair's final verdict is Matched. Calling
    /// `run` again on a finished session is a no-op that reports the same
    /// answer.
    ///
    /// # Errors
    /// `CmpyError::Config` when the session holds fewer than 2 sources.
    pub fn run_with_progress(
        &mut self,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<bool, CmpyError> {
        if self.sources.len() < 2 {
            return Err(CmpyError::Config(
                "at least 2 sources are required for a comparison".to_string(),
            ));
        }

        let total = self.combinations.len();
        let mut rounds = 0u64;
        let mut bytes_read = 0u64;

        while !self.all_decided() {
            // Read phase: refill every still-relevant buffer. A source at
            // end-of-stream or in error reports an empty fill without
            // another read on the handle.
            for index in 0..self.sources.len() {
                if !self.is_relevant(index) {
                    continue;
                }
                let filled = self.sources[index].fill(&mut self.buffers[index].data);
                self.buffers[index].len = filled;
                bytes_read += filled as u64;
            }

            // Evaluate phase: settle whatever the fresh blocks allow.
            for position in 0..total {
                let decided = self
                    .combinations
                    .verdict(position)
                    .map(|verdict| verdict.is_terminal())
                    .unwrap_or(true);
                if decided {
                    continue;
                }

                if let Some(pair) = self.combinations.get(position) {
                    let verdict = self.evaluate(pair);
                    if verdict.is_terminal() {
                        self.combinations.record(position, verdict);
                    }
                }
            }

            rounds += 1;
            if let Some(callback) = on_progress {
                callback(rounds, bytes_read);
            }
        }

        Ok(self.all_matched())
    }

    /// Decide one pair against the most recent blocks. Returns Unknown
    /// when the blocks are equal but neither stream has finished.
    fn evaluate(&self, pair: Pair) -> Verdict {
        let a = &self.sources[pair.a];
        let b = &self.sources[pair.b];

        // An unreadable source cannot be asserted equal to anything.
        if a.errored() || b.errored() {
            return Verdict::NotMatched;
        }

        // One stream ended before the other: total lengths differ.
        if a.at_eof() != b.at_eof() {
            return Verdict::NotMatched;
        }

        let block_a = self.buffers[pair.a].valid();
        let block_b = self.buffers[pair.b].valid();

        // Divergent read lengths signal divergent remaining lengths.
        if block_a.len() != block_b.len() {
            return Verdict::NotMatched;
        }

        if !block_a.is_empty() {
            if block_a != block_b {
                return Verdict::NotMatched;
            }
            // Blocks equal so far; the next round decides.
            return Verdict::Unknown;
        }

        if a.at_eof() && b.at_eof() {
            // Both streams exhausted with every prior block equal.
            return Verdict::Matched;
        }

        // A zero-length read that is not end-of-stream: a conforming
        // source must not do this, so treat it as terminal disagreement.
        Verdict::NotMatched
    }

    fn all_decided(&self) -> bool {
        (0..self.combinations.len()).all(|position| {
            self.combinations
                .verdict(position)
                .map(|verdict| verdict.is_terminal())
                .unwrap_or(true)
        })
    }

    fn all_matched(&self) -> bool {
        (0..self.combinations.len())
            .all(|position| self.combinations.verdict(position) == Some(Verdict::Matched))
    }

    /// A source still matters while some undecided pair touches it.
    fn is_relevant(&self, index: usize) -> bool {
        (0..self.combinations.len()).any(|position| {
            match (
                self.combinations.get(position),
                self.combinations.verdict(position),
            ) {
                (Some(pair), Some(verdict)) => !verdict.is_terminal() && pair.touches(index),
                _ => false,
            }
        })
    }
}
