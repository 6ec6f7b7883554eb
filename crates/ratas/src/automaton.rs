// Automaton descriptors and the run facade.

use hashbrown::HashSet;

use crate::config::Configuration;
use crate::engine::{drive, StepLimit};
use crate::rule::{FsaRule, PdaRule};
use crate::symbol::State;
use crate::table::RuleTable;
use crate::translate::Translator;
use crate::RatasError;

/// Descriptor of a deterministic finite-state automaton.
///
/// Immutable once constructed; `run` is a pure function of the
/// descriptor and the input, so one descriptor can serve any number of
/// runs, including concurrent ones.
#[derive(Debug, Clone)]
pub struct Fsa {
    states: HashSet<State>,
    alphabet: HashSet<char>,
    rules: RuleTable<FsaRule>,
    start: State,
    finals: HashSet<State>,
    translator: Option<Translator>,
}

impl Fsa {
    /// Build and validate a descriptor.
    ///
    /// The start state, every final state and both endpoints of every
    /// rule must be members of the state set; anything else is a
    /// rejected descriptor, never a silent acceptance. Input symbols
    /// are deliberately not validated against any alphabet: a symbol no
    /// rule reads simply never matches (spec'd as "no applicable rule",
    /// not an error).
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = char>,
        rules: Vec<FsaRule>,
        start: impl Into<State>,
        finals: impl IntoIterator<Item = State>,
    ) -> Result<Self, RatasError> {
        let states: HashSet<State> = states.into_iter().collect();
        let start = start.into();
        let finals: HashSet<State> = finals.into_iter().collect();
        check_membership(&states, &start, &finals, rules.iter().map(|r| (&r.from, &r.to)))?;
        Ok(Self {
            states,
            alphabet: alphabet.into_iter().collect(),
            rules: RuleTable::new(rules)?,
            start,
            finals,
            translator: None,
        })
    }

    /// Attach a translation capability, turning the recognizer into a
    /// translator variant.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Acceptance verdict for `input`.
    ///
    /// Accepts iff the traversal halts on a final state with every input
    /// character consumed. May fail to return on a malformed descriptor
    /// (see [`drive`]); use [`run_bounded`](Self::run_bounded) when that
    /// matters.
    pub fn run(&self, input: &str) -> bool {
        let mut config = Configuration::fsa(&self.start, input);
        // Unbounded drive never reports an error.
        let _ = drive(&self.rules, &mut config, StepLimit::Unbounded);
        self.verdict(&config)
    }

    /// Like [`run`](Self::run), but gives up after `max_steps` applied
    /// moves instead of hanging on a non-terminating table.
    pub fn run_bounded(&self, input: &str, max_steps: u64) -> Result<bool, RatasError> {
        let mut config = Configuration::fsa(&self.start, input);
        drive(&self.rules, &mut config, StepLimit::Bounded(max_steps))?;
        Ok(self.verdict(&config))
    }

    fn verdict(&self, config: &Configuration) -> bool {
        self.finals.contains(&config.state) && config.input_exhausted()
    }

    /// The translation capability, when this variant carries one.
    pub fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// The transition relation.
    pub fn rules(&self) -> &RuleTable<FsaRule> {
        &self.rules
    }

    pub fn start_state(&self) -> &State {
        &self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Declared input alphabet. Held as descriptor data only: symbols
    /// outside it simply never match a rule.
    pub fn alphabet(&self) -> &HashSet<char> {
        &self.alphabet
    }
}

/// Descriptor of a deterministic pushdown automaton.
///
/// Same shape as [`Fsa`] with the memory-stack capability added. The
/// memory stack starts as a single bottom marker and is kept non-empty
/// for the whole run.
#[derive(Debug, Clone)]
pub struct Pda {
    states: HashSet<State>,
    alphabet: HashSet<char>,
    rules: RuleTable<PdaRule>,
    start: State,
    finals: HashSet<State>,
    translator: Option<Translator>,
}

impl Pda {
    /// Build and validate a descriptor. Same membership rules as
    /// [`Fsa::new`].
    pub fn new(
        states: impl IntoIterator<Item = State>,
        alphabet: impl IntoIterator<Item = char>,
        rules: Vec<PdaRule>,
        start: impl Into<State>,
        finals: impl IntoIterator<Item = State>,
    ) -> Result<Self, RatasError> {
        let states: HashSet<State> = states.into_iter().collect();
        let start = start.into();
        let finals: HashSet<State> = finals.into_iter().collect();
        check_membership(&states, &start, &finals, rules.iter().map(|r| (&r.from, &r.to)))?;
        Ok(Self {
            states,
            alphabet: alphabet.into_iter().collect(),
            rules: RuleTable::new(rules)?,
            start,
            finals,
            translator: None,
        })
    }

    /// Attach a translation capability.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Acceptance verdict for `input`.
    ///
    /// Accepts iff the traversal halts on a final state with every input
    /// character consumed and the memory stack drained back to exactly
    /// the bottom marker. The drained-stack clause is what makes a
    /// balanced-parentheses machine reject "(()" -- final state and
    /// exhausted input alone would accept any prefix-balanced string.
    pub fn run(&self, input: &str) -> bool {
        let mut config = Configuration::pda(&self.start, input);
        let _ = drive(&self.rules, &mut config, StepLimit::Unbounded);
        self.verdict(&config)
    }

    /// Like [`run`](Self::run), with a ceiling on applied moves.
    pub fn run_bounded(&self, input: &str, max_steps: u64) -> Result<bool, RatasError> {
        let mut config = Configuration::pda(&self.start, input);
        drive(&self.rules, &mut config, StepLimit::Bounded(max_steps))?;
        Ok(self.verdict(&config))
    }

    fn verdict(&self, config: &Configuration) -> bool {
        self.finals.contains(&config.state)
            && config.input_exhausted()
            && config.memory_drained()
    }

    /// The translation capability, when this variant carries one.
    pub fn translator(&self) -> Option<&Translator> {
        self.translator.as_ref()
    }

    /// The transition relation.
    pub fn rules(&self) -> &RuleTable<PdaRule> {
        &self.rules
    }

    pub fn start_state(&self) -> &State {
        &self.start
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Declared input alphabet. Held as descriptor data only.
    pub fn alphabet(&self) -> &HashSet<char> {
        &self.alphabet
    }
}

/// One automaton of either family.
///
/// The four concrete kinds span two capability axes: the memory axis is
/// this enum's tag, the translation axis is the optional [`Translator`]
/// inside each variant.
#[derive(Debug, Clone)]
pub enum Machine {
    Fsa(Fsa),
    Pda(Pda),
}

impl Machine {
    /// Acceptance verdict for `input`.
    pub fn run(&self, input: &str) -> bool {
        match self {
            Machine::Fsa(m) => m.run(input),
            Machine::Pda(m) => m.run(input),
        }
    }

    /// Bounded acceptance verdict.
    pub fn run_bounded(&self, input: &str, max_steps: u64) -> Result<bool, RatasError> {
        match self {
            Machine::Fsa(m) => m.run_bounded(input, max_steps),
            Machine::Pda(m) => m.run_bounded(input, max_steps),
        }
    }

    /// The translation capability, when this variant carries one.
    pub fn translator(&self) -> Option<&Translator> {
        match self {
            Machine::Fsa(m) => m.translator(),
            Machine::Pda(m) => m.translator(),
        }
    }
}

/// Shared membership validation for descriptor construction.
fn check_membership<'a>(
    states: &HashSet<State>,
    start: &State,
    finals: &HashSet<State>,
    rule_endpoints: impl Iterator<Item = (&'a State, &'a State)>,
) -> Result<(), RatasError> {
    if !states.contains(start) {
        return Err(RatasError::UnknownStartState { state: start.clone() });
    }
    for f in finals {
        if !states.contains(f) {
            return Err(RatasError::UnknownFinalState { state: f.clone() });
        }
    }
    for (from, to) in rule_endpoints {
        for endpoint in [from, to] {
            if !states.contains(endpoint) {
                return Err(RatasError::UnknownRuleState { state: endpoint.clone() });
            }
        }
    }
    Ok(())
}
