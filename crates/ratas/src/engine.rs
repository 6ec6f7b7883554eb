// The traversal algorithm: drive a configuration until no rule applies.

use crate::config::Configuration;
use crate::rule::Rule;
use crate::table::RuleTable;
use crate::RatasError;

/// Work bound for one traversal.
///
/// A malformed transition table can make the traversal spin forever (see
/// [`drive`]); callers that cannot trust their descriptors should use
/// [`StepLimit::Bounded`] and treat the resulting error as "did not
/// terminate within bound" rather than hanging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLimit {
    /// No ceiling: termination is the descriptor's responsibility.
    Unbounded,
    /// At most this many applied moves before giving up.
    Bounded(u64),
}

/// Drive `config` through the transition relation until it halts.
///
/// Repeatedly scans the rules leaving the current state in declaration
/// order and applies the first one whose input and memory preconditions
/// hold: an epsilon read always satisfies the input axis, a concrete
/// read requires unconsumed input starting with that character. On a
/// match the input is consumed (unless the read is epsilon), the memory
/// effect is applied, the state moves, and the scan restarts. The
/// traversal halts when a full scan finds no applicable rule. The
/// verdict is the caller's to compute from the final configuration.
///
/// First-match semantics are deliberate: ties are broken by declaration
/// order, so an epsilon rule declared before a consuming rule for the
/// same state always wins.
///
/// # Non-termination
///
/// A table whose first applicable rule for some state is an epsilon
/// self-loop makes the traversal loop forever once that state is
/// reached: every scan picks the same rule, consumes nothing, and
/// restarts. The engine performs no cycle detection and does not try to
/// "fix" such tables -- termination is a well-formedness property of
/// the descriptor, not of this algorithm. Use [`StepLimit::Bounded`] to
/// bound the damage.
pub fn drive<R: Rule>(
    table: &RuleTable<R>,
    config: &mut Configuration,
    limit: StepLimit,
) -> Result<(), RatasError> {
    let mut steps: u64 = 0;

    loop {
        let mut applied = false;

        for &idx in table.candidates(&config.state) {
            let Some(rule) = table.get(idx) else { continue };

            let input_ok = rule.read().is_epsilon()
                || config.lookahead().is_some_and(|ch| rule.read().matches_char(ch));
            if !input_ok || !rule.memory_matches(&config.memory) {
                continue;
            }

            if !rule.read().is_epsilon() {
                config.consume();
            }
            rule.apply_memory(&mut config.memory);
            config.state = rule.to_state().clone();
            applied = true;
            break;
        }

        if !applied {
            // Full scan with no match: the automaton has halted.
            return Ok(());
        }

        steps += 1;
        if let StepLimit::Bounded(max) = limit {
            if steps > max {
                return Err(RatasError::StepLimitExceeded { steps: max });
            }
        }
    }
}
