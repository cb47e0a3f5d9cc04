//! Conversion of non-deterministic automata into equivalent deterministic
//! automata by the powerset construction.

use std::collections::{HashMap, HashSet};

use log::debug;

use crate::lookup::StateTable;
use crate::model::Dfa;
use crate::nfa::step;
use crate::sparse_set::SparseSet;

/// A deterministic automaton built from a non-deterministic one, along with
/// the non-deterministic states each of its states stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowersetDfa {
    dfa: Dfa,
    subsets: Vec<Vec<String>>,
}

impl PowersetDfa {
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    pub fn into_dfa(self) -> Dfa {
        self.dfa
    }

    /// The source states making up each constructed state, indexed like
    /// [Dfa::states].
    pub fn subsets(&self) -> &[Vec<String>] {
        &self.subsets
    }

    /// The source states making up the constructed state named `state`.
    pub fn subset_of(&self, state: &str) -> Option<&[String]> {
        self.dfa
            .states()
            .iter()
            .position(|name| name == state)
            .and_then(|idx| self.subsets.get(idx))
            .map(Vec::as_slice)
    }
}

/// Builds a deterministic automaton accepting exactly the inputs that
/// [crate::simulate_nfa] accepts for the same description.
///
/// Every subset of source states reachable from `{start_state}` becomes one
/// state, explored breadth first so the start subset is state `0`. A subset
/// accepts if it holds any of `accept_states`. Steps that leave no active
/// state have no transition. States are named after their members, e.g.
/// `{A,B}`, with a `#n` suffix where two subsets would otherwise render the
/// same.
pub fn convert_nfa_to_dfa<S, D, A>(
    states: &[S],
    alphabet: &[char],
    transitions: &[Vec<Vec<D>>],
    start_state: &str,
    accept_states: &[A],
) -> PowersetDfa
where
    S: AsRef<str>,
    D: AsRef<str>,
    A: AsRef<str>,
{
    let accept_names: HashSet<&str> = accept_states
        .iter()
        .map(|state| state.as_ref())
        .collect();
    let mut table = StateTable::new(states);

    let start = vec![table.intern(start_state)];
    let mut subset_ids: HashMap<Vec<usize>, usize> = HashMap::from([(start.clone(), 0)]);
    let mut subsets: Vec<Vec<usize>> = vec![start];
    let mut rows: Vec<Vec<Option<usize>>> = vec![];
    let mut next = SparseSet::new(states.len() + 1);

    // subsets grows while it is walked, giving a breadth first order.
    let mut current = 0;
    while current < subsets.len() {
        let mut row = Vec::with_capacity(alphabet.len());

        for symbol_idx in 0..alphabet.len() {
            step(
                &mut table,
                transitions,
                subsets[current].iter().copied(),
                symbol_idx,
                &mut next,
            );

            if next.is_empty() {
                row.push(None);
                continue;
            }

            let mut key: Vec<usize> = next.iter().collect();
            key.sort_unstable();

            let target = match subset_ids.get(&key) {
                Some(&id) => id,
                None => {
                    let id = subsets.len();
                    subset_ids.insert(key.clone(), id);
                    subsets.push(key);
                    id
                }
            };
            row.push(Some(target));
        }

        rows.push(row);
        current += 1;
    }

    let members: Vec<Vec<&str>> = subsets
        .iter()
        .map(|subset| subset.iter().filter_map(|&id| table.name(id)).collect())
        .collect();
    let names = unique_names(&members);

    let accept = members
        .iter()
        .zip(names.iter())
        .filter(|(subset, _)| subset.iter().any(|name| accept_names.contains(name)))
        .map(|(_, name)| name.clone())
        .collect();
    let dfa_transitions = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|target| target.and_then(|id| names.get(id).cloned()))
                .collect()
        })
        .collect();

    debug!(
        "powerset construction built {} states from {} source states",
        names.len(),
        states.len()
    );

    let start_name = names.first().cloned().unwrap_or_default();
    PowersetDfa {
        dfa: Dfa::new(
            names,
            alphabet.to_vec(),
            dfa_transitions,
            start_name,
            accept,
        ),
        subsets: members
            .into_iter()
            .map(|subset| subset.into_iter().map(str::to_string).collect())
            .collect(),
    }
}

fn unique_names(members: &[Vec<&str>]) -> Vec<String> {
    let mut taken = HashSet::with_capacity(members.len());

    members
        .iter()
        .map(|subset| {
            let base = format!("{{{}}}", subset.join(","));
            let mut name = base.clone();
            let mut suffix = 1;
            while !taken.insert(name.clone()) {
                name = format!("{}#{}", base, suffix);
                suffix += 1;
            }
            name
        })
        .collect()
}
