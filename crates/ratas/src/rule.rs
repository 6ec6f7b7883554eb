// Transition rules for both automaton families.
//
// The two families share one traversal through the `Rule` trait: a
// memoryless rule fixes the memory hooks to no-ops, a memoried rule
// implements the stack discipline. Composition over a capability seam,
// not an inheritance hierarchy.

use crate::symbol::{State, Symbol};

/// One element of an automaton's static move relation.
///
/// `from_state`/`read`/`to_state` are the input-and-state axis shared by
/// every family; the memory hooks are the optional stack capability.
/// Whether a rule is applicable from a configuration is split across
/// [`read`](Rule::read) (checked against the input lookahead by the
/// traversal) and [`memory_matches`] (checked against the stack here).
///
/// [`memory_matches`]: Rule::memory_matches
pub trait Rule {
    /// State this rule leaves.
    fn from_state(&self) -> &State;

    /// State this rule enters.
    fn to_state(&self) -> &State;

    /// Input symbol consumed by this rule, epsilon to consume nothing.
    fn read(&self) -> Symbol;

    /// Whether this rule's memory precondition holds against the stack.
    ///
    /// The stack is the full memory contents with the *last* element as
    /// the top. Memoryless rules always match.
    fn memory_matches(&self, memory: &[char]) -> bool;

    /// Apply this rule's memory effect (pop, then push).
    ///
    /// Only called after `memory_matches` returned `true` for the same
    /// stack. Memoryless rules do nothing.
    fn apply_memory(&self, memory: &mut Vec<char>);
}

/// Transition rule of a finite-state automaton: ⟨from, read, to⟩.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsaRule {
    pub from: State,
    pub read: Symbol,
    pub to: State,
}

impl FsaRule {
    pub fn new(from: impl Into<State>, read: Symbol, to: impl Into<State>) -> Self {
        Self { from: from.into(), read, to: to.into() }
    }
}

impl Rule for FsaRule {
    fn from_state(&self) -> &State {
        &self.from
    }

    fn to_state(&self) -> &State {
        &self.to
    }

    fn read(&self) -> Symbol {
        self.read
    }

    fn memory_matches(&self, _memory: &[char]) -> bool {
        true
    }

    fn apply_memory(&self, _memory: &mut Vec<char>) {}
}

/// Transition rule of a pushdown automaton: ⟨from, read, pop, push, to⟩.
///
/// `read` and `pop` may independently be epsilon (consume no input /
/// touch no memory). `push` is a possibly empty sequence of symbols
/// appended to the top of the stack, last character ending up topmost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdaRule {
    pub from: State,
    pub read: Symbol,
    pub pop: Symbol,
    pub push: String,
    pub to: State,
}

impl PdaRule {
    pub fn new(
        from: impl Into<State>,
        read: Symbol,
        pop: Symbol,
        push: impl Into<String>,
        to: impl Into<State>,
    ) -> Self {
        Self {
            from: from.into(),
            read,
            pop,
            push: push.into(),
            to: to.into(),
        }
    }
}

impl Rule for PdaRule {
    fn from_state(&self) -> &State {
        &self.from
    }

    fn to_state(&self) -> &State {
        &self.to
    }

    fn read(&self) -> Symbol {
        self.read
    }

    /// Stack precondition: an epsilon pop always holds; a concrete pop
    /// requires the top of the stack to carry that symbol.
    ///
    /// A pop that would leave the stack empty is treated as "no match"
    /// rather than an error: the bottom marker is only removable by a
    /// rule that explicitly binds it as its pop symbol *and* pushes a
    /// replacement, so no legal run ever drains the stack. An already
    /// empty stack is an engine defect, not malformed input, and trips
    /// the assertion.
    fn memory_matches(&self, memory: &[char]) -> bool {
        assert!(!memory.is_empty(), "memory stack drained below the bottom marker");
        match self.pop {
            Symbol::Epsilon => true,
            Symbol::Char(c) => {
                memory.last() == Some(&c) && (memory.len() > 1 || !self.push.is_empty())
            }
        }
    }

    fn apply_memory(&self, memory: &mut Vec<char>) {
        if !self.pop.is_epsilon() {
            memory.pop();
        }
        memory.extend(self.push.chars());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::BOTTOM_MARKER;

    #[test]
    fn fsa_rule_ignores_memory() {
        let r = FsaRule::new("q0", Symbol::Char('a'), "q1");
        assert!(r.memory_matches(&[]));
        let mut mem = vec!['x'];
        r.apply_memory(&mut mem);
        assert_eq!(mem, vec!['x']);
    }

    #[test]
    fn pda_epsilon_pop_always_matches() {
        let r = PdaRule::new("q0", Symbol::Char('('), Symbol::Epsilon, "(", "q0");
        assert!(r.memory_matches(&[BOTTOM_MARKER]));
        assert!(r.memory_matches(&[BOTTOM_MARKER, 'x']));
    }

    #[test]
    fn pda_concrete_pop_needs_matching_top() {
        let r = PdaRule::new("q0", Symbol::Char(')'), Symbol::Char('('), "", "q0");
        assert!(r.memory_matches(&[BOTTOM_MARKER, '(']));
        assert!(!r.memory_matches(&[BOTTOM_MARKER, 'x']));
        assert!(!r.memory_matches(&[BOTTOM_MARKER]));
    }

    #[test]
    fn pda_bottom_marker_pop_requires_replacement() {
        // Explicitly bound to the bottom marker but pushing nothing:
        // would drain the stack, so it must not match.
        let drain = PdaRule::new("q0", Symbol::Epsilon, Symbol::Char(BOTTOM_MARKER), "", "q1");
        assert!(!drain.memory_matches(&[BOTTOM_MARKER]));

        // Same binding with a replacement push is fine.
        let swap = PdaRule::new("q0", Symbol::Epsilon, Symbol::Char(BOTTOM_MARKER), "a", "q1");
        assert!(swap.memory_matches(&[BOTTOM_MARKER]));
        let mut mem = vec![BOTTOM_MARKER];
        swap.apply_memory(&mut mem);
        assert_eq!(mem, vec!['a']);
    }

    #[test]
    fn pda_pop_then_push_order() {
        let r = PdaRule::new("q0", Symbol::Epsilon, Symbol::Char('a'), "bc", "q0");
        let mut mem = vec![BOTTOM_MARKER, 'a'];
        assert!(r.memory_matches(&mem));
        r.apply_memory(&mut mem);
        // 'a' popped, then "bc" pushed with 'c' on top
        assert_eq!(mem, vec![BOTTOM_MARKER, 'b', 'c']);
    }

    #[test]
    #[should_panic(expected = "bottom marker")]
    fn pda_empty_stack_is_a_defect() {
        let r = PdaRule::new("q0", Symbol::Epsilon, Symbol::Char('a'), "", "q0");
        r.memory_matches(&[]);
    }
}
