mod derivation;
pub mod samples;
mod stack;
mod table;

pub use derivation::{Derivation, State};
pub use table::{ParseTable, TableBuilder};

use crate::errors::{Error, Result};
use crate::grammar::Symbol;
use tracing::debug;

/// Returns true if the symbol is a non-terminal in the given table
pub fn is_non_terminal(symbol: Symbol, table: &ParseTable) -> bool {
    table.is_non_terminal(symbol)
}

/// Returns true if the input is accepted by the predictive parser for the
/// given table, starting from the given start symbol. The input must not
/// include an end-of-input marker, one is appended automatically.
pub fn parse(input: &[Symbol], start: Symbol, table: &ParseTable) -> bool {
    Derivation::new(table, input, start).run() == State::Accepted
}

/// A top-down, iterative predictive parser for LL(1) parse tables
pub struct Parser<'p> {
    table: &'p ParseTable,
    step_limit: Option<usize>,
}

impl<'p> Parser<'p> {
    /// Creates a new parser for an LL(1) parse table
    pub fn new(table: &ParseTable) -> Parser<'_> {
        Parser {
            table,
            step_limit: None,
        }
    }

    /// Sets the maximum number of steps a single parse may take. A table with
    /// a cycle of expansions that consume no input would otherwise never
    /// finish.
    pub fn with_step_limit(mut self, step_limit: Option<usize>) -> Parser<'p> {
        self.step_limit = step_limit;
        self
    }

    /// Parses an input, returning true if it is accepted. Fails only if the
    /// step limit is exceeded.
    pub fn parse(&self, input: &[Symbol], start: Symbol) -> Result<bool> {
        let mut derivation = Derivation::new(self.table, input, start);

        loop {
            match derivation.step() {
                State::Accepted => return Ok(true),
                State::Rejected => return Ok(false),
                State::Running => {}
            }

            if let Some(limit) = self.step_limit {
                if derivation.steps() >= limit {
                    debug!(limit, "step limit exceeded");
                    return Err(Error::StepLimitExceeded(limit));
                }
            }
        }
    }
}
