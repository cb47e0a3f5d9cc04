/// Errors raised while editing or validating an [crate::Automaton].
///
/// Evaluation never produces these; an ill-formed automaton simply rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("state {0:?} is not defined")]
    UndefinedState(String),
    #[error("symbol {0:?} is not in the alphabet")]
    UndefinedSymbol(char),
    #[error("state {0:?} is defined more than once")]
    DuplicateState(String),
    #[error("symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(char),
    #[error("transition table row count mismatch, expected {expected}, received {received}")]
    RowCount { expected: usize, received: usize },
    #[error("transition row for state {state:?} has width {received}, expected {expected}")]
    RowWidth {
        state: String,
        expected: usize,
        received: usize,
    },
    #[error("transition from {from:?} on {symbol:?} leads to undefined state {to:?}")]
    UndefinedDestination {
        from: String,
        symbol: char,
        to: String,
    },
}
