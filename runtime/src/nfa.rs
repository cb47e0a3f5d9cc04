//! Subset tracking simulation of non-deterministic finite automata without
//! epsilon transitions.

use log::trace;

use crate::evaluator::Evaluator;
use crate::lookup::{StateTable, SymbolTable};
use crate::sparse_set::SparseSet;

/// Runs `input` through a non-deterministic automaton, returning `true` if
/// any of the states active after the last symbol is one of `accept_states`.
///
/// `transitions` is indexed by state position, then symbol position, and
/// holds every destination for that pair. Duplicate and empty destination
/// names are ignored. Active states that are not declared in `states`
/// contribute no destinations. A symbol outside of `alphabet` or a step that
/// leaves no active state rejects the input.
pub fn simulate_nfa<S, D, A>(
    states: &[S],
    alphabet: &[char],
    transitions: &[Vec<Vec<D>>],
    start_state: &str,
    accept_states: &[A],
    input: &str,
) -> bool
where
    S: AsRef<str>,
    D: AsRef<str>,
    A: AsRef<str>,
{
    NfaEvaluator::new(states, alphabet, transitions, start_state, accept_states)
        .matches(input.chars())
}

/// Computes the set of states reachable from `active` on the symbol at
/// `symbol_idx`, interning destination names into `states` as they are met.
pub(crate) fn step<'a, D: AsRef<str>>(
    states: &mut StateTable<'a>,
    transitions: &'a [Vec<Vec<D>>],
    active: impl IntoIterator<Item = usize>,
    symbol_idx: usize,
    next: &mut SparseSet,
) {
    next.clear();

    for id in active {
        let Some(destinations) = states
            .row(id)
            .and_then(|row| transitions.get(row))
            .and_then(|row| row.get(symbol_idx))
        else {
            continue;
        };

        for dest in destinations {
            let name: &'a str = dest.as_ref();
            if !name.is_empty() {
                next.insert(states.intern(name));
            }
        }
    }
}

/// Steps a non-deterministic automaton through its input one symbol at a
/// time, tracking every state that could be active.
#[derive(Debug)]
pub struct NfaEvaluator<'a, D> {
    symbols: SymbolTable,
    states: StateTable<'a>,
    transitions: &'a [Vec<Vec<D>>],
    start_state: &'a str,
    accept_states: Vec<&'a str>,
    active: SparseSet,
    next: SparseSet,
    rejected: bool,
}

impl<'a, D: AsRef<str>> NfaEvaluator<'a, D> {
    #[must_use]
    pub fn new<S, A>(
        states: &'a [S],
        alphabet: &[char],
        transitions: &'a [Vec<Vec<D>>],
        start_state: &'a str,
        accept_states: &'a [A],
    ) -> Self
    where
        S: AsRef<str>,
        A: AsRef<str>,
    {
        let set_size = states.len() + 1;

        Self {
            symbols: SymbolTable::new(alphabet),
            states: StateTable::new(states),
            transitions,
            start_state,
            accept_states: accept_states.iter().map(|state| state.as_ref()).collect(),
            active: SparseSet::new(set_size),
            next: SparseSet::new(set_size),
            rejected: false,
        }
        .initial_state()
    }

    fn reject(&mut self) {
        self.rejected = true;
        self.active.clear();
        self.next.clear();
    }
}

impl<'a, D: AsRef<str>> Evaluator for NfaEvaluator<'a, D> {
    type Item = char;

    fn initial_state_mut(&mut self) {
        self.rejected = false;
        self.active.clear();
        self.next.clear();

        let start = self.states.intern(self.start_state);
        self.active.insert(start);
    }

    fn is_in_accept_state(&self) -> bool {
        !self.rejected
            && self
                .accept_states
                .iter()
                .filter_map(|name| self.states.get(name))
                .any(|id| self.active.contains(&id))
    }

    fn is_rejected(&self) -> bool {
        self.rejected
    }

    /// Active state names in declaration order, followed by undeclared names
    /// in the order they were first reached.
    fn active_states(&self) -> Vec<&str> {
        let mut ids: Vec<usize> = self.active.iter().collect();
        ids.sort_unstable();

        ids.into_iter()
            .filter_map(|id| self.states.name(id))
            .collect()
    }

    fn advance_mut<'b>(&mut self, next: &'b char) -> Option<&'b char> {
        if self.rejected {
            return None;
        }

        let Some(symbol_idx) = self.symbols.position(*next) else {
            trace!("rejecting, symbol {:?} is not in the alphabet", next);
            self.reject();
            return None;
        };

        step(
            &mut self.states,
            self.transitions,
            self.active.iter(),
            symbol_idx,
            &mut self.next,
        );

        if self.next.is_empty() {
            trace!("rejecting, no state is active after {:?}", next);
            self.reject();
            return None;
        }

        core::mem::swap(&mut self.active, &mut self.next);
        Some(next)
    }
}
