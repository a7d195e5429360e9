use super::stack::Stack;
use super::ParseTable;
use crate::grammar::Symbol;
use crate::parsers::reader::Reader;
use tracing::{debug, trace};

/// The state of a derivation
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum State {
    Running,
    Accepted,
    Rejected,
}

/// A single run of the predictive parsing automaton over one input. The
/// derivation can be advanced a step at a time, or run to completion.
pub struct Derivation<'t> {
    table: &'t ParseTable,
    stack: Stack,
    reader: Reader,
    state: State,
    steps: usize,
}

impl<'t> Derivation<'t> {
    /// Starts a leftmost derivation of the input from the start symbol
    pub fn new(table: &'t ParseTable, input: &[Symbol], start: Symbol) -> Derivation<'t> {
        Derivation {
            table,
            stack: Stack::new(start),
            reader: Reader::new(input),
            state: State::Running,
            steps: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the position of the input cursor
    pub fn cursor(&self) -> usize {
        self.reader.cursor()
    }

    /// Returns the length of the input, including the end-of-input marker
    pub fn input_len(&self) -> usize {
        self.reader.len()
    }

    /// Returns the number of symbols on the stack, including the
    /// end-of-input marker
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the number of steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Pops one symbol off the stack and either expands it, if it is a
    /// non-terminal, or matches it against the lookahead symbol. Stepping a
    /// finished derivation does nothing.
    pub fn step(&mut self) -> State {
        // Algorithm adapted from Aho et al (2007) p.227
        if self.state != State::Running {
            return self.state;
        }

        let Some(lookahead) = self.reader.lookahead() else {
            debug!(cursor = self.reader.cursor(), "input exhausted before stack");
            return self.reject();
        };

        let Some(top) = self.stack.pop() else {
            return self.finish();
        };
        self.steps += 1;

        let table = self.table;
        if table.is_non_terminal(top) {
            let Some(body) = table.production(top, lookahead) else {
                debug!(%top, %lookahead, "no production for non-terminal");
                return self.reject();
            };

            trace!(%top, %lookahead, length = body.len(), "expand");
            self.stack.push_body(body);
        } else if top == lookahead || lookahead.is_e() {
            // An ϵ lookahead matches any terminal
            trace!(%top, cursor = self.reader.cursor(), "match");
            self.reader.next();
        } else {
            debug!(%top, %lookahead, "failed to match terminal");
            return self.reject();
        }

        if self.stack.is_exhausted() {
            return self.finish();
        }

        State::Running
    }

    /// Runs the derivation until it is accepted or rejected
    pub fn run(&mut self) -> State {
        while self.step() == State::Running {}
        self.state
    }

    /// Decides the outcome once only the end-of-input marker is left on the
    /// stack. The input must have been consumed up to and including its
    /// end-of-input marker. If no input was consumed at all, the input itself
    /// must have been empty.
    fn finish(&mut self) -> State {
        // A cursor still at 0 has no symbol before it. Wrapping round to the
        // appended end-of-input marker would accept input that was never read.
        let last = if self.reader.cursor() == 0 {
            self.reader.lookahead()
        } else {
            self.reader.previous()
        };

        self.state = if self.stack.is_bottom() && last == Some(Symbol::EndOfInput) {
            State::Accepted
        } else {
            State::Rejected
        };

        debug!(state = ?self.state, steps = self.steps, "derivation finished");
        self.state
    }

    fn reject(&mut self) -> State {
        self.state = State::Rejected;
        self.state
    }
}
