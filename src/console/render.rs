//! Staggered line rendering.
//!
//! Console responses are revealed one line at a time. Every enqueued
//! response becomes a sequence of steps in one linear chain: each step is
//! due a fixed delay after its predecessor was appended, so lines always
//! appear in order and two responses never interleave.
//!
//! The queue is driven by the caller's clock through [`RenderQueue::poll`];
//! nothing here sleeps or spawns.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use super::line::DisplayLine;

/// Identifies one enqueued response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(u64);

/// One scheduled append.
#[derive(Debug, Clone)]
struct Step {
    line: DisplayLine,
    /// Delay after the predecessor step (or after enqueue, for the head)
    delay: Duration,
    sequence: SequenceId,
    /// Queue epoch the step was scheduled in
    epoch: u64,
}

/// Pair each line with its stagger: no delay for the first line, `interval`
/// after its predecessor for every other line.
pub fn staggered(lines: Vec<DisplayLine>, interval: Duration) -> Vec<(DisplayLine, Duration)> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| (line, if i == 0 { Duration::ZERO } else { interval }))
        .collect()
}

/// Linear chain of delayed line appends.
#[derive(Debug, Default)]
pub struct RenderQueue {
    steps: VecDeque<Step>,
    /// When the head step's delay started counting
    anchor: Option<Instant>,
    epoch: u64,
    next_sequence: u64,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response to the end of the chain.
    ///
    /// If nothing is pending, the first step's delay counts from `now`;
    /// otherwise it counts from the completion of the last pending step.
    pub fn enqueue(
        &mut self,
        now: Instant,
        steps: impl IntoIterator<Item = (DisplayLine, Duration)>,
    ) -> SequenceId {
        let sequence = SequenceId(self.next_sequence);
        self.next_sequence += 1;

        if self.steps.is_empty() {
            self.anchor = Some(now);
        }
        let epoch = self.epoch;
        self.steps
            .extend(steps.into_iter().map(|(line, delay)| Step {
                line,
                delay,
                sequence,
                epoch,
            }));
        if self.steps.is_empty() {
            self.anchor = None;
        }
        sequence
    }

    /// Pop every step that is due at `now`, in order.
    ///
    /// Steps scheduled before the last [`cancel`](Self::cancel) are dropped
    /// rather than returned.
    pub fn poll(&mut self, now: Instant) -> Vec<DisplayLine> {
        let mut due = Vec::new();

        while let Some(anchor) = self.anchor {
            let Some(step) = self.steps.front() else {
                self.anchor = None;
                break;
            };
            let due_at = anchor + step.delay;
            if due_at > now {
                break;
            }
            if let Some(step) = self.steps.pop_front() {
                if step.epoch == self.epoch {
                    due.push(step.line);
                }
            }
            self.anchor = if self.steps.is_empty() {
                None
            } else {
                Some(due_at)
            };
        }

        due
    }

    /// Drop every pending step and invalidate anything scheduled so far.
    pub fn cancel(&mut self) {
        self.epoch += 1;
        self.steps.clear();
        self.anchor = None;
    }

    /// True when all lines of `sequence` have been appended (or cancelled).
    pub fn is_finished(&self, sequence: SequenceId) -> bool {
        sequence.0 < self.next_sequence && !self.steps.iter().any(|s| s.sequence == sequence)
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.steps.len()
    }

    /// When the next step becomes due, if any.
    pub fn next_due(&self) -> Option<Instant> {
        let anchor = self.anchor?;
        self.steps.front().map(|step| anchor + step.delay)
    }
}
