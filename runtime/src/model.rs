//! Owned automaton descriptions that can be edited in place, validated and
//! evaluated.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dfa::{simulate_dfa, DfaEvaluator};
use crate::error::ModelError;
use crate::evaluator::{Evaluator, Trace};
use crate::nfa::{simulate_nfa, NfaEvaluator};
use crate::powerset::{convert_nfa_to_dfa, PowersetDfa};

/// A single transition table entry.
pub trait Transition: Clone + Default {
    /// The non-empty destination names held by the entry.
    fn destinations(&self) -> Vec<&str>;

    /// Drops every reference to `state`, returning `true` if the entry
    /// changed.
    fn forget(&mut self, state: &str) -> bool;
}

impl Transition for Option<String> {
    fn destinations(&self) -> Vec<&str> {
        self.as_deref()
            .filter(|dest| !dest.is_empty())
            .into_iter()
            .collect()
    }

    fn forget(&mut self, state: &str) -> bool {
        if self.as_deref() == Some(state) {
            *self = None;
            true
        } else {
            false
        }
    }
}

impl Transition for Vec<String> {
    fn destinations(&self) -> Vec<&str> {
        self.iter()
            .map(String::as_str)
            .filter(|dest| !dest.is_empty())
            .collect()
    }

    fn forget(&mut self, state: &str) -> bool {
        let before = self.len();
        self.retain(|dest| dest != state);
        self.len() != before
    }
}

/// An automaton description owning its states, alphabet and transition
/// table. The table is indexed by state position, then symbol position.
///
/// Nothing about the description is enforced on construction. Use
/// [Automaton::validate] to check it is well formed; evaluation of an ill
/// formed description rejects rather than fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Automaton<T> {
    states: Vec<String>,
    alphabet: Vec<char>,
    #[cfg_attr(feature = "serde", serde(default))]
    transitions: Vec<Vec<T>>,
    start_state: String,
    #[cfg_attr(feature = "serde", serde(default))]
    accept_states: Vec<String>,
}

/// A deterministic automaton, at most one destination per entry.
pub type Dfa = Automaton<Option<String>>;

/// A non-deterministic automaton, any number of destinations per entry.
pub type Nfa = Automaton<Vec<String>>;

impl<T: Transition> Automaton<T> {
    #[must_use]
    pub fn new(
        states: Vec<String>,
        alphabet: Vec<char>,
        transitions: Vec<Vec<T>>,
        start_state: impl Into<String>,
        accept_states: Vec<String>,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            start_state: start_state.into(),
            accept_states,
        }
    }

    /// Creates an automaton without transitions or accept states, starting in
    /// the first of `states`.
    #[must_use]
    pub fn empty<S, A>(states: S, alphabet: A) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator<Item = char>,
    {
        let states: Vec<String> = states.into_iter().map(Into::into).collect();
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        let transitions = vec![vec![T::default(); alphabet.len()]; states.len()];
        let start_state = states.first().cloned().unwrap_or_default();

        Self {
            states,
            alphabet,
            transitions,
            start_state,
            accept_states: vec![],
        }
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn transitions(&self) -> &[Vec<T>] {
        &self.transitions
    }

    pub fn start_state(&self) -> &str {
        &self.start_state
    }

    pub fn accept_states(&self) -> &[String] {
        &self.accept_states
    }

    pub fn is_accept_state(&self, state: &str) -> bool {
        self.accept_states.iter().any(|accept| accept == state)
    }

    /// Returns the table entry for `from` on `symbol`, if both are defined
    /// and the table covers them.
    pub fn transition(&self, from: &str, symbol: char) -> Option<&T> {
        let state_idx = self.states.iter().position(|state| state == from)?;
        let symbol_idx = self.alphabet.iter().position(|&c| c == symbol)?;

        self.transitions
            .get(state_idx)
            .and_then(|row| row.get(symbol_idx))
    }

    /// Adds a state with an empty transition row, returning `false` if it
    /// is already defined.
    pub fn add_state(&mut self, state: impl Into<String>) -> bool {
        let state = state.into();
        if self.states.contains(&state) {
            return false;
        }

        let idx = self.states.len();
        self.states.push(state);
        if self.transitions.len() < idx {
            self.transitions.resize_with(idx, Vec::new);
        }
        self.transitions
            .insert(idx, vec![T::default(); self.alphabet.len()]);

        true
    }

    /// Removes a state along with its transition row and every transition
    /// into it. If it was the start state, the first remaining state becomes
    /// the start state.
    pub fn remove_state(&mut self, state: &str) -> bool {
        let Some(idx) = self.states.iter().position(|s| s == state) else {
            return false;
        };

        self.states.remove(idx);
        if idx < self.transitions.len() {
            self.transitions.remove(idx);
        }
        for cell in self.transitions.iter_mut().flatten() {
            cell.forget(state);
        }

        self.accept_states.retain(|accept| accept != state);
        if self.start_state == state {
            self.start_state = self.states.first().cloned().unwrap_or_default();
        }

        true
    }

    /// Adds a symbol with no transitions, returning `false` if it is already
    /// in the alphabet.
    pub fn add_symbol(&mut self, symbol: char) -> bool {
        if self.alphabet.contains(&symbol) {
            return false;
        }

        self.alphabet.push(symbol);
        let width = self.alphabet.len();
        for row in self.transitions.iter_mut() {
            if row.len() < width {
                row.resize_with(width, T::default);
            }
        }

        true
    }

    /// Removes a symbol and its transition column.
    pub fn remove_symbol(&mut self, symbol: char) -> bool {
        let Some(idx) = self.alphabet.iter().position(|&c| c == symbol) else {
            return false;
        };

        self.alphabet.remove(idx);
        for row in self.transitions.iter_mut() {
            if idx < row.len() {
                row.remove(idx);
            }
        }

        true
    }

    pub fn set_start_state(&mut self, state: &str) -> Result<(), ModelError> {
        self.state_position(state)?;
        self.start_state = state.to_string();
        Ok(())
    }

    /// Flips whether `state` accepts, returning its new status. Toggling off
    /// drops every entry naming `state`. A state that is not defined can
    /// only be toggled off.
    pub fn toggle_accept_state(&mut self, state: &str) -> Result<bool, ModelError> {
        if self.is_accept_state(state) {
            self.accept_states.retain(|accept| accept != state);
            return Ok(false);
        }

        self.state_position(state)?;
        self.accept_states.push(state.to_string());
        Ok(true)
    }

    /// Checks that the description is well formed: unique states and
    /// symbols, a defined start state and accept states, a table with one
    /// row per state and one column per symbol, and only defined
    /// destinations.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut defined = HashSet::with_capacity(self.states.len());
        for state in self.states.iter() {
            if !defined.insert(state.as_str()) {
                return Err(ModelError::DuplicateState(state.clone()));
            }
        }

        let mut symbols = HashSet::with_capacity(self.alphabet.len());
        for &symbol in self.alphabet.iter() {
            if !symbols.insert(symbol) {
                return Err(ModelError::DuplicateSymbol(symbol));
            }
        }

        if !defined.contains(self.start_state.as_str()) {
            return Err(ModelError::UndefinedState(self.start_state.clone()));
        }
        if let Some(accept) = self
            .accept_states
            .iter()
            .find(|accept| !defined.contains(accept.as_str()))
        {
            return Err(ModelError::UndefinedState(accept.clone()));
        }

        if self.transitions.len() != self.states.len() {
            return Err(ModelError::RowCount {
                expected: self.states.len(),
                received: self.transitions.len(),
            });
        }

        for (state, row) in self.states.iter().zip(self.transitions.iter()) {
            if row.len() != self.alphabet.len() {
                return Err(ModelError::RowWidth {
                    state: state.clone(),
                    expected: self.alphabet.len(),
                    received: row.len(),
                });
            }

            for (&symbol, cell) in self.alphabet.iter().zip(row.iter()) {
                if let Some(to) = cell
                    .destinations()
                    .into_iter()
                    .find(|dest| !defined.contains(dest))
                {
                    return Err(ModelError::UndefinedDestination {
                        from: state.clone(),
                        symbol,
                        to: to.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn state_position(&self, state: &str) -> Result<usize, ModelError> {
        self.states
            .iter()
            .position(|s| s == state)
            .ok_or_else(|| ModelError::UndefinedState(state.to_string()))
    }

    fn symbol_position(&self, symbol: char) -> Result<usize, ModelError> {
        self.alphabet
            .iter()
            .position(|&c| c == symbol)
            .ok_or(ModelError::UndefinedSymbol(symbol))
    }

    /// Returns the entry for `from` on `symbol`, padding a short table so
    /// the entry exists.
    fn cell_mut(&mut self, from: &str, symbol: char) -> Result<&mut T, ModelError> {
        let state_idx = self.state_position(from)?;
        let symbol_idx = self.symbol_position(symbol)?;
        let width = self.alphabet.len();

        if self.transitions.len() <= state_idx {
            self.transitions.resize_with(self.states.len(), Vec::new);
        }

        let row = &mut self.transitions[state_idx];
        if row.len() <= symbol_idx {
            row.resize_with(width, T::default);
        }

        Ok(&mut row[symbol_idx])
    }
}

impl Automaton<Option<String>> {
    /// Points the transition for `from` on `symbol` at `to`, replacing any
    /// previous destination.
    pub fn set_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<(), ModelError> {
        self.state_position(to)?;
        *self.cell_mut(from, symbol)? = Some(to.to_string());
        Ok(())
    }

    /// Removes the transition for `from` on `symbol`, returning its previous
    /// destination.
    pub fn clear_transition(
        &mut self,
        from: &str,
        symbol: char,
    ) -> Result<Option<String>, ModelError> {
        Ok(self.cell_mut(from, symbol)?.take())
    }

    pub fn evaluator(&self) -> DfaEvaluator<'_, String> {
        DfaEvaluator::new(
            &self.states,
            &self.alphabet,
            &self.transitions,
            &self.start_state,
            &self.accept_states,
        )
    }

    pub fn accepts(&self, input: &str) -> bool {
        simulate_dfa(
            &self.states,
            &self.alphabet,
            &self.transitions,
            &self.start_state,
            &self.accept_states,
            input,
        )
    }

    pub fn trace(&self, input: &str) -> Trace<char> {
        self.evaluator().trace(input.chars())
    }
}

impl Automaton<Vec<String>> {
    /// Adds `to` to the destinations of `from` on `symbol`, returning
    /// `false` if it was already one of them.
    pub fn add_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<bool, ModelError> {
        self.state_position(to)?;

        let cell = self.cell_mut(from, symbol)?;
        if cell.iter().any(|dest| dest == to) {
            return Ok(false);
        }

        cell.push(to.to_string());
        Ok(true)
    }

    /// Removes `to` from the destinations of `from` on `symbol`, returning
    /// `false` if it was not one of them.
    pub fn remove_transition(
        &mut self,
        from: &str,
        symbol: char,
        to: &str,
    ) -> Result<bool, ModelError> {
        Ok(self.cell_mut(from, symbol)?.forget(to))
    }

    pub fn evaluator(&self) -> NfaEvaluator<'_, String> {
        NfaEvaluator::new(
            &self.states,
            &self.alphabet,
            &self.transitions,
            &self.start_state,
            &self.accept_states,
        )
    }

    pub fn accepts(&self, input: &str) -> bool {
        simulate_nfa(
            &self.states,
            &self.alphabet,
            &self.transitions,
            &self.start_state,
            &self.accept_states,
            input,
        )
    }

    pub fn trace(&self, input: &str) -> Trace<char> {
        self.evaluator().trace(input.chars())
    }

    /// Builds the equivalent deterministic automaton.
    pub fn to_deterministic(&self) -> PowersetDfa {
        convert_nfa_to_dfa(
            &self.states,
            &self.alphabet,
            &self.transitions,
            &self.start_state,
            &self.accept_states,
        )
    }
}

/// Either kind of automaton, tagged by kind when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum AutomatonDescription {
    Dfa(Dfa),
    Nfa(Nfa),
}

impl AutomatonDescription {
    pub fn accepts(&self, input: &str) -> bool {
        match self {
            Self::Dfa(dfa) => dfa.accepts(input),
            Self::Nfa(nfa) => nfa.accepts(input),
        }
    }

    pub fn trace(&self, input: &str) -> Trace<char> {
        match self {
            Self::Dfa(dfa) => dfa.trace(input),
            Self::Nfa(nfa) => nfa.trace(input),
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Dfa(dfa) => dfa.validate(),
            Self::Nfa(nfa) => nfa.validate(),
        }
    }

    /// Returns the description as a deterministic automaton, converting a
    /// non-deterministic one.
    pub fn to_deterministic(&self) -> Dfa {
        match self {
            Self::Dfa(dfa) => dfa.clone(),
            Self::Nfa(nfa) => nfa.to_deterministic().into_dfa(),
        }
    }
}

impl From<Dfa> for AutomatonDescription {
    fn from(dfa: Dfa) -> Self {
        Self::Dfa(dfa)
    }
}

impl From<Nfa> for AutomatonDescription {
    fn from(nfa: Nfa) -> Self {
        Self::Nfa(nfa)
    }
}
