use super::Symbol;
use crate::errors::{Error, Result};
use crate::utils::format_char;

/// The textual notation used for tables and input strings, which reserves
/// one character for ϵ and one for the end-of-input marker
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Notation {
    epsilon: char,
    end_of_input: char,
}

impl Default for Notation {
    fn default() -> Notation {
        Notation {
            epsilon: '#',
            end_of_input: '$',
        }
    }
}

impl Notation {
    /// Creates a notation with the given reserved characters
    pub fn new(epsilon: char, end_of_input: char) -> Result<Notation> {
        if epsilon == end_of_input {
            return Err(Error::NotationClash(epsilon));
        }

        Ok(Notation {
            epsilon,
            end_of_input,
        })
    }

    /// Converts a single character to a symbol
    pub fn symbol(&self, c: char) -> Symbol {
        if c == self.epsilon {
            Symbol::Epsilon
        } else if c == self.end_of_input {
            Symbol::EndOfInput
        } else {
            Symbol::Character(c)
        }
    }

    /// Converts a string to a sequence of symbols, one per character
    pub fn symbols(&self, s: &str) -> Vec<Symbol> {
        s.chars().map(|c| self.symbol(c)).collect()
    }

    /// Formats a symbol using the notation's reserved characters
    pub fn format_symbol(&self, symbol: Symbol) -> String {
        match symbol {
            Symbol::Character(c) => format_char(c),
            Symbol::Epsilon => self.epsilon.to_string(),
            Symbol::EndOfInput => self.end_of_input.to_string(),
        }
    }

    /// Formats a sequence of symbols using the notation's reserved characters
    pub fn format_symbols(&self, symbols: &[Symbol]) -> String {
        symbols.iter().map(|s| self.format_symbol(*s)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::assert_error_text;

    #[test]
    fn test_symbols() {
        let n = Notation::default();
        assert_eq!(
            n.symbols("E$"),
            vec![Symbol::Character('E'), Symbol::EndOfInput]
        );
        assert_eq!(n.symbols("#"), vec![Symbol::Epsilon]);
        assert_eq!(n.symbols(""), vec![]);
    }

    #[test]
    fn test_custom_notation() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let n = Notation::new('e', '!')?;
        assert_eq!(
            n.symbols("a$e!"),
            vec![
                Symbol::Character('a'),
                Symbol::Character('$'),
                Symbol::Epsilon,
                Symbol::EndOfInput
            ]
        );
        assert_eq!(n.format_symbols(&n.symbols("a$e!")), "a$e!");

        Ok(())
    }

    #[test]
    fn test_notation_clash() {
        assert_error_text(
            Notation::new('#', '#'),
            "notation characters must differ, got '#' for both",
        );
    }
}
