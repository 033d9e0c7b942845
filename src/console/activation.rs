//! Activation phrase detection.
//!
//! Keystrokes typed on the dossier page feed a rolling window the length of
//! the activation phrase. The console opens when the window matches.

use std::collections::VecDeque;

/// The hidden phrase that opens the console (matched case-insensitively).
pub const ACTIVATION_PHRASE: &str = "BATMAN";

/// Rolling window over the most recent keystrokes.
#[derive(Debug, Clone)]
pub struct ActivationBuffer {
    window: VecDeque<char>,
    capacity: usize,
}

impl Default for ActivationBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationBuffer {
    pub fn new() -> Self {
        let capacity = ACTIVATION_PHRASE.chars().count();
        Self {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record one typed character.
    ///
    /// Returns true when the window now spells the activation phrase; the
    /// window is emptied in that case.
    pub fn push(&mut self, c: char) -> bool {
        for upper in c.to_uppercase() {
            if self.window.len() == self.capacity {
                self.window.pop_front();
            }
            self.window.push_back(upper);
        }

        if self.window.iter().copied().eq(ACTIVATION_PHRASE.chars()) {
            self.window.clear();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.window.clear();
    }

    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Current window contents, oldest first.
    pub fn contents(&self) -> String {
        self.window.iter().collect()
    }
}
