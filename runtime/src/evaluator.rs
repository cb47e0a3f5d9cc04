//! Stepwise evaluation of an automaton against an input sequence.

/// An automaton that can be advanced through its input one item at a time.
///
/// # Examples
///
/// ```
/// use automata_runtime::{DfaEvaluator, Evaluator};
///
/// let states = ["S0", "S1"];
/// let alphabet = ['0', '1'];
/// let transitions = [
///     vec![Some("S0"), Some("S1")],
///     vec![Some("S0"), Some("S1")],
/// ];
/// let accept_states = ["S1"];
///
/// let mut ends_in_one =
///     DfaEvaluator::new(&states, &alphabet, &transitions, "S0", &accept_states);
///
/// // Advances one symbol that leads to the accept state.
/// assert_eq!(Some(&'1'), ends_in_one.advance_mut(&'1'));
/// assert!(ends_in_one.is_in_accept_state());
///
/// // Fails to advance on a symbol outside of the alphabet.
/// ends_in_one.initial_state_mut();
/// assert!(ends_in_one.advance_mut(&'x').is_none());
/// assert!(!ends_in_one.is_in_accept_state());
///
/// ends_in_one.initial_state_mut();
/// assert!(ends_in_one.matches("0101".chars()));
///
/// ends_in_one.initial_state_mut();
/// assert!(!ends_in_one.matches("10".chars()));
/// ```
pub trait Evaluator: Sized {
    /// The input item type consumed per step.
    type Item;

    fn initial_state(mut self) -> Self {
        self.initial_state_mut();
        self
    }

    /// Returns the evaluator to its start state, clearing any rejection.
    fn initial_state_mut(&mut self);

    /// Returns a boolean signifying if the evaluator is in an accept state.
    fn is_in_accept_state(&self) -> bool;

    /// Returns `true` once a step has rejected the input. A rejected
    /// evaluator stays rejected until it is returned to its initial state.
    fn is_rejected(&self) -> bool;

    /// Names of the states the evaluator currently occupies.
    fn active_states(&self) -> Vec<&str>;

    /// Attempts to advance to the next state, returning an [Option] signifying
    /// the success of that advance.
    fn advance_mut<'a>(&mut self, next: &'a Self::Item) -> Option<&'a Self::Item>;

    /// Consumes items until the input is exhausted or a step rejects,
    /// returning whether the evaluator finished in an accept state. Items
    /// after a rejecting step are never pulled from the iterator.
    fn matches<I>(&mut self, iter: I) -> bool
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in iter {
            if self.advance_mut(&item).is_none() {
                return false;
            }
        }

        self.is_in_accept_state()
    }

    /// Like [Evaluator::matches], recording the active states after every
    /// consumed item.
    fn trace<I>(&mut self, iter: I) -> Trace<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let initial = owned_names(self.active_states());
        let mut steps = vec![];

        for item in iter {
            let advanced = self.advance_mut(&item).is_some();
            let states = owned_names(self.active_states());
            steps.push(Step::new(item, states));

            if !advanced {
                break;
            }
        }

        Trace {
            initial,
            steps,
            accepted: self.is_in_accept_state(),
        }
    }
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// The states occupied after consuming a single symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub symbol: T,
    pub states: Vec<String>,
}

impl<T> Step<T> {
    #[must_use]
    pub fn new(symbol: T, states: Vec<String>) -> Self {
        Self { symbol, states }
    }
}

/// A recorded evaluation. A rejecting step is the last step recorded and
/// carries no states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<T> {
    pub initial: Vec<String>,
    pub steps: Vec<Step<T>>,
    pub accepted: bool,
}

impl<T> Trace<T> {
    /// The states occupied once evaluation stopped.
    pub fn final_states(&self) -> &[String] {
        self.steps
            .last()
            .map_or(self.initial.as_slice(), |step| step.states.as_slice())
    }

    /// Number of items consumed, including a rejecting one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
