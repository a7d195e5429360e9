use crate::errors::{Error, Result};
use crate::grammar::{Notation, Symbol};
use indexmap::{IndexMap, IndexSet};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

type Row = IndexMap<Symbol, Vec<Symbol>>;

/// An LL(1) parse table, mapping a non-terminal and a lookahead symbol to
/// the body of the production to expand the non-terminal with. A table is
/// immutable once built and may be shared freely between parsers.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ParseTable {
    rows: IndexMap<char, Row>,
}

impl ParseTable {
    /// Returns a builder for a new parse table
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Loads a parse table from its JSON representation, an object mapping
    /// each non-terminal to an object which maps lookahead characters to
    /// production bodies, e.g. {"F": {"+": "+TF", "$": "#"}}. A non-terminal
    /// listed more than once adds to its earlier entries.
    pub fn from_json(json: &str, notation: &Notation) -> Result<ParseTable> {
        let raw: Entries<Entries<String>> = serde_json::from_str(json)?;

        let mut builder = TableBuilder::with_notation(*notation);
        for (head, row) in raw.0 {
            let head = notation.symbol(single_char(&head)?);
            for (lookahead, body) in row.0 {
                let lookahead = notation.symbol(single_char(&lookahead)?);
                builder = builder.entry(head, lookahead, notation.symbols(&body))?;
            }
        }

        let table = builder.build();
        debug!(
            non_terminals = table.rows.len(),
            entries = table.len(),
            "loaded parse table"
        );

        Ok(table)
    }

    /// Loads a parse table from a JSON file at the given path
    pub fn from_file<P: AsRef<Path>>(path: P, notation: &Notation) -> Result<ParseTable> {
        ParseTable::from_json(&std::fs::read_to_string(path)?, notation)
    }

    /// Returns true if the symbol is a non-terminal, i.e. if it has at least
    /// one entry in the table
    pub fn is_non_terminal(&self, symbol: Symbol) -> bool {
        match symbol {
            Symbol::Character(c) => self.rows.contains_key(&c),
            Symbol::Epsilon | Symbol::EndOfInput => false,
        }
    }

    /// Returns the body of the production for the given non-terminal and
    /// lookahead symbol, or None if the table has no such entry
    pub fn production(&self, non_terminal: Symbol, lookahead: Symbol) -> Option<&[Symbol]> {
        let c = non_terminal.character()?;
        self.rows.get(&c)?.get(&lookahead).map(Vec::as_slice)
    }

    /// Returns the non-terminals in the order they were added to the table
    pub fn non_terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.keys().map(|c| Symbol::Character(*c))
    }

    /// Returns the first non-terminal added to the table, which is
    /// conventionally the start symbol
    pub fn first_non_terminal(&self) -> Option<Symbol> {
        self.non_terminals().next()
    }

    /// Returns every lookahead symbol used in the table, in order of first
    /// appearance
    pub fn lookaheads(&self) -> Vec<Symbol> {
        self.rows
            .values()
            .flat_map(|row| row.keys().copied())
            .collect::<IndexSet<Symbol>>()
            .into_iter()
            .collect()
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds a parse table, checking each entry as it is added so that a
/// malformed table is reported before any input is parsed
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: IndexMap<char, Row>,
    notation: Notation,
}

impl TableBuilder {
    /// Creates a new, empty builder
    pub fn new() -> TableBuilder {
        TableBuilder::with_notation(Notation::default())
    }

    /// Creates a new, empty builder which reports conflicting productions
    /// using the given notation
    pub fn with_notation(notation: Notation) -> TableBuilder {
        TableBuilder {
            rows: IndexMap::new(),
            notation,
        }
    }

    /// Adds an entry to the table. Adding the same production for the same
    /// non-terminal and lookahead more than once is allowed; adding a
    /// different one means the grammar is not LL(1).
    pub fn entry(
        mut self,
        non_terminal: Symbol,
        lookahead: Symbol,
        body: Vec<Symbol>,
    ) -> Result<TableBuilder> {
        let Symbol::Character(head) = non_terminal else {
            return Err(Error::ReservedNonTerminal(non_terminal));
        };

        if lookahead.is_e() {
            return Err(Error::EmptyLookahead);
        }

        if body.is_empty() {
            return Err(Error::EmptyProductionBody);
        }

        if body.len() > 1 && body.iter().any(Symbol::is_e) {
            return Err(Error::EmptyNotAlone);
        }

        let row = self.rows.entry(head).or_default();
        if let Some(existing) = row.get(&lookahead) {
            if *existing != body {
                let notation = &self.notation;
                return Err(Error::GrammarNotLL1(format!(
                    "conflicting productions \"{}\" and \"{}\" for non-terminal {} on lookahead {}",
                    notation.format_symbols(existing),
                    notation.format_symbols(&body),
                    non_terminal,
                    lookahead,
                )));
            }
        } else {
            row.insert(lookahead, body);
        }

        Ok(self)
    }

    /// Finishes building the table
    pub fn build(self) -> ParseTable {
        ParseTable { rows: self.rows }
    }
}

/// The entries of a JSON object in document order. Unlike a map, repeated
/// keys are all kept.
struct Entries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Entries<V>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Entries<V>, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, V>()? {
            entries.push(entry);
        }

        Ok(Entries(entries))
    }
}

/// Returns the only character in a table key
fn single_char(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidTableKey(key.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::assert_error_text;

    fn c(c: char) -> Symbol {
        Symbol::Character(c)
    }

    #[test]
    fn test_builder() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = ParseTable::builder()
            .entry(c('S'), c('a'), vec![c('a'), c('S')])?
            .entry(c('S'), Symbol::EndOfInput, vec![Symbol::Epsilon])?
            .build();

        assert!(table.is_non_terminal(c('S')));
        assert!(!table.is_non_terminal(c('a')));
        assert!(!table.is_non_terminal(Symbol::Epsilon));
        assert!(!table.is_non_terminal(Symbol::EndOfInput));
        assert_eq!(table.production(c('S'), c('a')), Some(&[c('a'), c('S')][..]));
        assert_eq!(
            table.production(c('S'), Symbol::EndOfInput),
            Some(&[Symbol::Epsilon][..])
        );
        assert_eq!(table.production(c('S'), c('b')), None);
        assert_eq!(table.production(c('a'), c('a')), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.first_non_terminal(), Some(c('S')));

        Ok(())
    }

    #[test]
    fn test_duplicate_entry() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = ParseTable::builder()
            .entry(c('S'), c('a'), vec![c('a')])?
            .entry(c('S'), c('a'), vec![c('a')])?
            .build();
        assert_eq!(table.len(), 1);

        assert_error_text(
            ParseTable::builder()
                .entry(c('F'), c('+'), vec![c('+'), c('T'), c('F')])
                .and_then(|b| b.entry(c('F'), c('+'), vec![Symbol::Epsilon])),
            "grammar is not LL(1): conflicting productions \"+TF\" and \"#\" for non-terminal 'F' on lookahead '+'",
        );

        Ok(())
    }

    #[test]
    fn test_malformed_entries() {
        assert_error_text(
            ParseTable::builder().entry(Symbol::EndOfInput, c('a'), vec![c('a')]),
            "reserved symbol end of input may not be used as a non-terminal",
        );
        assert_error_text(
            ParseTable::builder().entry(Symbol::Epsilon, c('a'), vec![c('a')]),
            "reserved symbol ϵ may not be used as a non-terminal",
        );
        assert_error_text(
            ParseTable::builder().entry(c('S'), Symbol::Epsilon, vec![c('a')]),
            "ϵ may not be used as a lookahead symbol",
        );
        assert_error_text(
            ParseTable::builder().entry(c('S'), c('a'), vec![]),
            "empty production body",
        );
        assert_error_text(
            ParseTable::builder().entry(c('S'), c('a'), vec![c('a'), Symbol::Epsilon]),
            "ϵ-productions may not contain other symbols",
        );
    }

    #[test]
    fn test_from_json() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = ParseTable::from_json(
            r##"{"S": {"a": "aS", "$": "#"}, "X": {}}"##,
            &Notation::default(),
        )?;

        assert_eq!(table.len(), 2);
        assert!(!table.is_non_terminal(c('X')));
        assert_eq!(table.lookaheads(), vec![c('a'), Symbol::EndOfInput]);
        assert_eq!(
            table.production(c('S'), Symbol::EndOfInput),
            Some(&[Symbol::Epsilon][..])
        );

        Ok(())
    }

    #[test]
    fn test_from_json_errors() {
        let n = Notation::default();
        assert_error_text(
            ParseTable::from_json(r#"{"SS": {"a": "a"}}"#, &n),
            "invalid table key 'SS': expected a single character",
        );
        assert_error_text(
            ParseTable::from_json(r#"{"S": {"": "a"}}"#, &n),
            "invalid table key '': expected a single character",
        );
        assert_error_text(
            ParseTable::from_json(r#"{"$": {"a": "a"}}"#, &n),
            "reserved symbol end of input may not be used as a non-terminal",
        );
        assert!(matches!(
            ParseTable::from_json(r#"{"S": ["a"]}"#, &n),
            Err(Error::Json(_))
        ));

        // A cell given twice with different bodies
        assert_error_text(
            ParseTable::from_json(r#"{"S": {"a": "a", "a": "b"}}"#, &n),
            "grammar is not LL(1): conflicting productions \"a\" and \"b\" for non-terminal 'S' on lookahead 'a'",
        );

        // The same cell in two rows for the same non-terminal
        assert_error_text(
            ParseTable::from_json(r#"{"S": {"a": "a$"}, "S": {"a": "aa$"}}"#, &n),
            "grammar is not LL(1): conflicting productions \"a$\" and \"aa$\" for non-terminal 'S' on lookahead 'a'",
        );
    }

    #[test]
    fn test_from_json_repeated_non_terminal() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = ParseTable::from_json(
            r#"{"S": {"a": "a$"}, "S": {"b": "b$"}, "S": {"a": "a$"}}"#,
            &Notation::default(),
        )?;

        assert_eq!(table.len(), 2);
        assert_eq!(table.non_terminals().count(), 1);
        assert_eq!(
            table.production(c('S'), c('a')),
            Some(&[c('a'), Symbol::EndOfInput][..])
        );
        assert_eq!(
            table.production(c('S'), c('b')),
            Some(&[c('b'), Symbol::EndOfInput][..])
        );

        Ok(())
    }

    #[test]
    fn test_conflict_uses_notation() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let n = Notation::new('e', '!')?;
        assert_error_text(
            ParseTable::from_json(r#"{"S": {"a": "e", "a": "a!"}}"#, &n),
            "grammar is not LL(1): conflicting productions \"e\" and \"a!\" for non-terminal 'S' on lookahead 'a'",
        );

        Ok(())
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            ParseTable::from_file("no/such/table.json", &Notation::default()),
            Err(Error::Io(_))
        ));
    }
}
