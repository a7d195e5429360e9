use crate::grammar::Symbol;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ϵ-productions may not contain other symbols")]
    EmptyNotAlone,
    #[error("parse table has no entries")]
    EmptyTable,
    #[error("empty production body")]
    EmptyProductionBody,
    #[error("ϵ may not be used as a lookahead symbol")]
    EmptyLookahead,
    #[error("grammar is not LL(1): {0}")]
    GrammarNotLL1(String),
    #[error("invalid table key '{0}': expected a single character")]
    InvalidTableKey(String),
    #[error("reserved symbol {0} may not be used as a non-terminal")]
    ReservedNonTerminal(Symbol),
    #[error("derivation exceeded the step limit of {0}")]
    StepLimitExceeded(usize),
    #[error("notation characters must differ, got '{0}' for both")]
    NotationClash(char),
    #[error("failed to read table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode table: {0}")]
    Json(#[from] serde_json::Error),
}
