//! Single-path simulation of deterministic finite automata.

use log::trace;

use crate::evaluator::Evaluator;
use crate::lookup::{StateTable, SymbolTable};

/// Runs `input` through a deterministic automaton, returning `true` if it
/// finishes in one of `accept_states`.
///
/// `transitions` is indexed by state position, then symbol position. An
/// absent or empty entry, a missing row or column, a symbol outside of
/// `alphabet` and a current state outside of `states` all reject the input.
/// None of these are reported as errors.
pub fn simulate_dfa<S, D, A>(
    states: &[S],
    alphabet: &[char],
    transitions: &[Vec<Option<D>>],
    start_state: &str,
    accept_states: &[A],
    input: &str,
) -> bool
where
    S: AsRef<str>,
    D: AsRef<str>,
    A: AsRef<str>,
{
    DfaEvaluator::new(states, alphabet, transitions, start_state, accept_states)
        .matches(input.chars())
}

/// Steps a deterministic automaton through its input one symbol at a time.
#[derive(Debug)]
pub struct DfaEvaluator<'a, D> {
    symbols: SymbolTable,
    states: StateTable<'a>,
    transitions: &'a [Vec<Option<D>>],
    start_state: &'a str,
    accept_states: Vec<&'a str>,
    current: Option<&'a str>,
}

impl<'a, D: AsRef<str>> DfaEvaluator<'a, D> {
    #[must_use]
    pub fn new<S, A>(
        states: &'a [S],
        alphabet: &[char],
        transitions: &'a [Vec<Option<D>>],
        start_state: &'a str,
        accept_states: &'a [A],
    ) -> Self
    where
        S: AsRef<str>,
        A: AsRef<str>,
    {
        Self {
            symbols: SymbolTable::new(alphabet),
            states: StateTable::new(states),
            transitions,
            start_state,
            accept_states: accept_states.iter().map(|state| state.as_ref()).collect(),
            current: Some(start_state),
        }
    }

    /// The state the evaluator is in, or `None` once the input was rejected.
    pub fn current_state(&self) -> Option<&'a str> {
        self.current
    }

    fn next_state(&self, current: &'a str, symbol: char) -> Option<&'a str> {
        let Some(symbol_idx) = self.symbols.position(symbol) else {
            trace!("rejecting, symbol {:?} is not in the alphabet", symbol);
            return None;
        };
        let Some(state_idx) = self.states.get(current) else {
            trace!("rejecting, state {:?} is not defined", current);
            return None;
        };

        let transitions = self.transitions;
        let next = transitions
            .get(state_idx)
            .and_then(|row| row.get(symbol_idx))
            .and_then(Option::as_ref)
            .map(AsRef::<str>::as_ref)
            .filter(|dest| !dest.is_empty());

        if next.is_none() {
            trace!(
                "rejecting, no transition from {:?} on {:?}",
                current,
                symbol
            );
        }

        next
    }
}

impl<'a, D: AsRef<str>> Evaluator for DfaEvaluator<'a, D> {
    type Item = char;

    fn initial_state_mut(&mut self) {
        self.current = Some(self.start_state);
    }

    fn is_in_accept_state(&self) -> bool {
        self.current
            .map_or(false, |current| self.accept_states.contains(&current))
    }

    fn is_rejected(&self) -> bool {
        self.current.is_none()
    }

    fn active_states(&self) -> Vec<&str> {
        self.current.into_iter().collect()
    }

    fn advance_mut<'b>(&mut self, next: &'b char) -> Option<&'b char> {
        let current = self.current?;

        self.current = self.next_state(current, *next);
        self.current.map(|_| next)
    }
}
