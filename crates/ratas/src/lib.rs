//! Deterministic automaton execution engine.
//!
//! This crate evaluates two families of deterministic automata --
//! memoryless finite-state automata (FSA) and single-stack pushdown
//! automata (PDA) -- each optionally extended with a symbol-translation
//! capability, for four concrete kinds in total.
//!
//! # Architecture
//!
//! - [`symbol`] -- Symbols, state labels, epsilon and the bottom marker
//! - [`rule`] -- Transition rule shapes and the memory-capability seam
//! - [`table`] -- Ordered rule storage with a per-state index
//! - [`config`] -- The mutable per-run configuration
//! - [`engine`] -- The traversal algorithm and its step ceiling
//! - [`translate`] -- The independent symbol-translation pass
//! - [`automaton`] -- Validated descriptors and the run facade
//!
//! # Termination
//!
//! The traversal offers no cycle detection: a transition table whose
//! first applicable rule for some reachable state is an epsilon
//! self-loop makes `run` spin forever by construction. That trap is
//! part of the execution model (see [`engine::drive`]); callers that
//! cannot vouch for their descriptors should prefer the `run_bounded`
//! operations, which trade the hang for a
//! [`RatasError::StepLimitExceeded`].

pub mod automaton;
pub mod config;
pub mod engine;
pub mod rule;
pub mod symbol;
pub mod table;
pub mod translate;

pub use automaton::{Fsa, Machine, Pda};
pub use engine::StepLimit;
pub use rule::{FsaRule, PdaRule, Rule};
pub use symbol::{State, Symbol, BOTTOM_MARKER};
pub use translate::Translator;

/// Error type for descriptor construction and bounded runs.
#[derive(Debug, thiserror::Error)]
pub enum RatasError {
    #[error("transition table has no rules")]
    EmptyRuleTable,
    #[error("start state {state:?} is not in the state set")]
    UnknownStartState { state: String },
    #[error("final state {state:?} is not in the state set")]
    UnknownFinalState { state: String },
    #[error("rule references state {state:?} outside the state set")]
    UnknownRuleState { state: String },
    #[error("translation key {key:?} is not a single symbol")]
    BadTranslationKey { key: String },
    #[error("run did not terminate within {steps} steps")]
    StepLimitExceeded { steps: u64 },
}
