//! Name-to-position tables built once per evaluation.

use std::collections::HashMap;

/// Resolves input symbols to their position in an alphabet. A symbol listed
/// more than once resolves to its first position.
#[derive(Debug)]
pub(crate) struct SymbolTable {
    positions: HashMap<char, usize>,
}

impl SymbolTable {
    pub(crate) fn new(alphabet: &[char]) -> Self {
        let mut positions = HashMap::with_capacity(alphabet.len());
        for (idx, &symbol) in alphabet.iter().enumerate() {
            positions.entry(symbol).or_insert(idx);
        }

        Self { positions }
    }

    pub(crate) fn position(&self, symbol: char) -> Option<usize> {
        self.positions.get(&symbol).copied()
    }
}

/// Assigns dense ids to state names.
///
/// Declared states keep their declaration position as their id, so an id
/// below the declared count doubles as a transition table row. Names outside
/// the declared states are interned past that range the first time they are
/// seen.
#[derive(Debug)]
pub(crate) struct StateTable<'a> {
    ids: HashMap<&'a str, usize>,
    names: Vec<&'a str>,
    declared: usize,
}

impl<'a> StateTable<'a> {
    pub(crate) fn new<S: AsRef<str>>(states: &'a [S]) -> Self {
        let names: Vec<&'a str> = states.iter().map(|state| state.as_ref()).collect();
        let mut ids = HashMap::with_capacity(names.len());
        for (idx, &name) in names.iter().enumerate() {
            ids.entry(name).or_insert(idx);
        }

        Self {
            ids,
            declared: names.len(),
            names,
        }
    }

    /// Returns the id of an already known name.
    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Returns the id of `name`, assigning a fresh one if it is unknown.
    pub(crate) fn intern(&mut self, name: &'a str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.names.len();
        self.names.push(name);
        self.ids.insert(name, id);
        id
    }

    /// Maps an id to its transition table row, if it names a declared state.
    pub(crate) fn row(&self, id: usize) -> Option<usize> {
        (id < self.declared).then_some(id)
    }

    pub(crate) fn name(&self, id: usize) -> Option<&'a str> {
        self.names.get(id).copied()
    }
}
