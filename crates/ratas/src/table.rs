// Rule table: ordered storage plus a per-state index.

use hashbrown::HashMap;

use crate::rule::Rule;
use crate::symbol::State;
use crate::RatasError;

/// The static, immutable transition relation of one automaton.
///
/// Declaration order is semantically significant: when several rules are
/// applicable from the same configuration, the first-declared rule wins.
/// The per-state index only narrows the scan to rules leaving a given
/// state; inside each bucket the declaration order is preserved, so the
/// tie-break is identical to a linear scan over the whole table.
#[derive(Debug, Clone)]
pub struct RuleTable<R: Rule> {
    rules: Vec<R>,
    by_state: HashMap<State, Vec<usize>>,
}

impl<R: Rule> RuleTable<R> {
    /// Build a table from rules in declaration order.
    ///
    /// An automaton with no rules at all is rejected: it could never
    /// move and is a descriptor-construction mistake, not a run-time
    /// condition.
    pub fn new(rules: Vec<R>) -> Result<Self, RatasError> {
        if rules.is_empty() {
            return Err(RatasError::EmptyRuleTable);
        }
        let mut by_state: HashMap<State, Vec<usize>> = HashMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            by_state.entry(rule.from_state().clone()).or_default().push(idx);
        }
        Ok(Self { rules, by_state })
    }

    /// Number of rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule at a table index, or `None` when the index is out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&R> {
        self.rules.get(idx)
    }

    /// All rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rules.iter()
    }

    /// Rules leaving `state`, as indices in declaration order.
    pub fn candidates(&self, state: &State) -> &[usize] {
        self.by_state.get(state).map(Vec::as_slice).unwrap_or(&[])
    }
}
