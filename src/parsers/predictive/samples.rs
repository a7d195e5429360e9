//! Ready-made parse tables

use super::ParseTable;
use crate::errors::Result;
use crate::grammar::{Notation, Symbol};

/// The start symbol of the arithmetic expression table
pub const ARITHMETIC_START: Symbol = Symbol::Character('S');

/// Returns a parse table for arithmetic expressions over `i`, `+`, `*` and
/// parentheses:
///
/// ```text
/// S → E$
/// E → TF
/// F → +TF | ϵ
/// T → GU
/// U → *GU | ϵ
/// G → (E) | i
/// ```
pub fn arithmetic() -> Result<ParseTable> {
    let n = Notation::default();
    let rows: [(char, &[(char, &str)]); 6] = [
        ('S', &[('(', "E$"), ('i', "E$")]),
        ('E', &[('(', "TF"), ('i', "TF")]),
        ('F', &[('$', "#"), ('+', "+TF"), (')', "#")]),
        ('T', &[('(', "GU"), ('i', "GU")]),
        ('U', &[('$', "#"), ('+', "#"), ('*', "*GU"), (')', "#")]),
        ('G', &[('(', "(E)"), ('i', "i")]),
    ];

    let mut builder = ParseTable::builder();
    for (head, entries) in rows {
        for (lookahead, body) in entries {
            builder = builder.entry(n.symbol(head), n.symbol(*lookahead), n.symbols(body))?;
        }
    }

    Ok(builder.build())
}
