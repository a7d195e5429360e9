use crate::utils::format_char;
use std::fmt;

/// A grammar symbol. Whether a character is a terminal or a non-terminal is
/// decided by the parse table it is used with, not by the symbol itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Symbol {
    Character(char),
    /// The empty string, valid only as the sole element of a production body
    Epsilon,
    /// The end-of-input marker
    EndOfInput,
}

impl Symbol {
    /// Returns true if the symbol is ϵ
    pub fn is_e(&self) -> bool {
        matches!(self, Symbol::Epsilon)
    }

    /// Returns the character of a Character symbol, and None for the
    /// reserved symbols
    pub fn character(&self) -> Option<char> {
        match self {
            Symbol::Character(c) => Some(*c),
            Symbol::Epsilon | Symbol::EndOfInput => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Symbol {
        Symbol::Character(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Character(c) => write!(f, "'{}'", format_char(*c)),
            Symbol::Epsilon => write!(f, "ϵ"),
            Symbol::EndOfInput => write!(f, "end of input"),
        }
    }
}
