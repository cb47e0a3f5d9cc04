//! Provides simulation of deterministic and non-deterministic finite automata
//! over a character alphabet, and conversion between the two.
//!
//! # Example
//!
//! ```rust
//! // Automata are described by their states, alphabet, a transition table
//! // indexed by state position then symbol position, a start state and a set
//! // of accept states.
//! use automata_runtime::{convert_nfa_to_dfa, simulate_dfa, simulate_nfa};
//!
//! // A deterministic automaton accepting binary strings that end in `1`.
//! let states = ["S0", "S1"];
//! let alphabet = ['0', '1'];
//! let transitions = [
//!     vec![Some("S0"), Some("S1")],
//!     vec![Some("S0"), Some("S1")],
//! ];
//!
//! assert!(simulate_dfa(&states, &alphabet, &transitions, "S0", &["S1"], "101"));
//! assert!(!simulate_dfa(&states, &alphabet, &transitions, "S0", &["S1"], "100"));
//!
//! // Input outside of the alphabet is rejected, never reported as an error.
//! assert!(!simulate_dfa(&states, &alphabet, &transitions, "S0", &["S1"], "1x1"));
//!
//! // A non-deterministic automaton accepting strings containing `01`. Each
//! // entry lists every destination for that state and symbol.
//! let states = ["A", "B", "C"];
//! let transitions = [
//!     vec![vec!["A", "B"], vec!["A"]],
//!     vec![vec![], vec!["C"]],
//!     vec![vec!["C"], vec!["C"]],
//! ];
//!
//! assert!(simulate_nfa(&states, &alphabet, &transitions, "A", &["C"], "001"));
//! assert!(!simulate_nfa(&states, &alphabet, &transitions, "A", &["C"], "000"));
//!
//! // The powerset construction yields a deterministic automaton accepting the
//! // same inputs.
//! let dfa = convert_nfa_to_dfa(&states, &alphabet, &transitions, "A", &["C"]).into_dfa();
//! assert!(dfa.accepts("001"));
//! assert!(!dfa.accepts("000"));
//! ```

pub mod dfa;
pub mod error;
pub mod evaluator;
mod lookup;
pub mod model;
pub mod nfa;
pub mod powerset;
pub mod sparse_set;

pub use dfa::{simulate_dfa, DfaEvaluator};
pub use error::ModelError;
pub use evaluator::{Evaluator, Step, Trace};
pub use model::{Automaton, AutomatonDescription, Dfa, Nfa, Transition};
pub use nfa::{simulate_nfa, NfaEvaluator};
pub use powerset::{convert_nfa_to_dfa, PowersetDfa};
pub use sparse_set::SparseSet;
