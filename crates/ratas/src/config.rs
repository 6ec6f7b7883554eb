// Run-time configuration: the mutable snapshot of one traversal.

use crate::symbol::{State, BOTTOM_MARKER};

/// The complete mutable state of an in-progress run.
///
/// One `Configuration` is created fresh per `run` invocation, mutated
/// step by step by the traversal, and discarded once the verdict is
/// produced; it is never shared or reused across runs. The descriptor
/// itself stays untouched, which is what makes concurrent runs against
/// the same automaton safe.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Current state.
    pub state: State,
    /// The whole input, as characters.
    pub input: Vec<char>,
    /// Number of input characters already consumed.
    pub cursor: usize,
    /// Memory stack, last element on top. Empty for memoryless runs;
    /// memoried runs start with just the bottom marker and keep the
    /// stack non-empty for their entire lifetime.
    pub memory: Vec<char>,
}

impl Configuration {
    /// Fresh memoryless configuration.
    pub fn fsa(start: &State, input: &str) -> Self {
        Self {
            state: start.clone(),
            input: input.chars().collect(),
            cursor: 0,
            memory: Vec::new(),
        }
    }

    /// Fresh memoried configuration with the bottom marker in place.
    pub fn pda(start: &State, input: &str) -> Self {
        Self {
            state: start.clone(),
            input: input.chars().collect(),
            cursor: 0,
            memory: vec![BOTTOM_MARKER],
        }
    }

    /// First unconsumed input character, if any.
    #[inline]
    pub fn lookahead(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Consume one input character.
    #[inline]
    pub fn consume(&mut self) {
        debug_assert!(self.cursor < self.input.len());
        self.cursor += 1;
    }

    /// `true` once every input character has been consumed.
    #[inline]
    pub fn input_exhausted(&self) -> bool {
        self.cursor == self.input.len()
    }

    /// `true` when the memory stack holds nothing but the bottom marker.
    #[inline]
    pub fn memory_drained(&self) -> bool {
        self.memory == [BOTTOM_MARKER]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fsa_configuration_starts_clean() {
        let c = Configuration::fsa(&"q0".to_string(), "ab");
        assert_eq!(c.state, "q0");
        assert_eq!(c.lookahead(), Some('a'));
        assert!(!c.input_exhausted());
        assert!(c.memory.is_empty());
    }

    #[test]
    fn pda_configuration_has_bottom_marker() {
        let c = Configuration::pda(&"q0".to_string(), "");
        assert_eq!(c.memory, vec![BOTTOM_MARKER]);
        assert!(c.memory_drained());
        assert!(c.input_exhausted());
    }

    #[test]
    fn consume_advances_cursor() {
        let mut c = Configuration::fsa(&"q0".to_string(), "xy");
        c.consume();
        assert_eq!(c.lookahead(), Some('y'));
        c.consume();
        assert_eq!(c.lookahead(), None);
        assert!(c.input_exhausted());
    }

    #[test]
    fn memory_drained_only_at_bottom_marker() {
        let mut c = Configuration::pda(&"q0".to_string(), "");
        c.memory.push('a');
        assert!(!c.memory_drained());
        c.memory.pop();
        assert!(c.memory_drained());
    }
}
