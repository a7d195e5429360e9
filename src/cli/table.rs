use crate::grammar::{Notation, Symbol};
use crate::parsers::predictive::ParseTable;

/// Formats a parse table as a grid with a row for each non-terminal and a
/// column for each lookahead symbol
pub fn format(table: &ParseTable, notation: &Notation) -> String {
    let non_terminals: Vec<Symbol> = table.non_terminals().collect();
    let lookaheads = table.lookaheads();

    let head_width = non_terminals
        .iter()
        .map(|nt| notation.format_symbol(*nt).chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let cells: Vec<Vec<String>> = non_terminals
        .iter()
        .map(|nt| {
            lookaheads
                .iter()
                .map(|la| {
                    table
                        .production(*nt, *la)
                        .map(|body| notation.format_symbols(body))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = lookaheads
        .iter()
        .enumerate()
        .map(|(i, la)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(notation.format_symbol(*la).chars().count()))
                .max()
                .unwrap_or(0)
                + 2
        })
        .collect();

    let header: Vec<String> = lookaheads.iter().map(|la| notation.format_symbol(*la)).collect();
    let header = format_row("", &header, head_width, &widths);
    let inner = header.chars().count() - 2;

    let mut out = String::new();
    out.push_str(&format!("+{}+\n", "-".repeat(inner)));
    out.push_str(&header);
    out.push('\n');
    out.push_str(&format!("|{}|\n", "=".repeat(inner)));
    for (nt, row) in non_terminals.iter().zip(cells.iter()) {
        out.push_str(&format_row(&notation.format_symbol(*nt), row, head_width, &widths));
        out.push('\n');
    }
    out.push_str(&format!("+{}+\n", "-".repeat(inner)));

    out
}

/// Formats a single row of the grid, centering each cell
fn format_row(head: &str, cells: &[String], head_width: usize, widths: &[usize]) -> String {
    let mut row = format!("|{:^w$}||", head, w = head_width);
    for (cell, width) in cells.iter().zip(widths) {
        row.push_str(&format!("{:^w$}|", cell, w = *width));
    }

    row
}
