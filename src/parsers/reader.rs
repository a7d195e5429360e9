use crate::grammar::Symbol;

/// Reads input symbols, with the end-of-input marker appended
pub struct Reader {
    input: Vec<Symbol>,
    cursor: usize,
}

impl Reader {
    pub fn new(input: &[Symbol]) -> Reader {
        let mut symbols = Vec::with_capacity(input.len() + 1);
        symbols.extend_from_slice(input);
        symbols.push(Symbol::EndOfInput);

        Reader {
            input: symbols,
            cursor: 0,
        }
    }

    /// Returns the symbol at the cursor, or None if the cursor has moved past
    /// the end-of-input marker
    pub fn lookahead(&self) -> Option<Symbol> {
        self.input.get(self.cursor).copied()
    }

    /// Returns the symbol immediately before the cursor, or None if the
    /// cursor has not moved
    pub fn previous(&self) -> Option<Symbol> {
        self.cursor
            .checked_sub(1)
            .and_then(|i| self.input.get(i).copied())
    }

    /// Advances the cursor by one symbol. The cursor never moves beyond the
    /// end of the input.
    pub fn next(&mut self) {
        if self.cursor < self.input.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the length of the input, including the end-of-input marker
    pub fn len(&self) -> usize {
        self.input.len()
    }
}
