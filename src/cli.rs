pub mod args;
pub mod parse;
pub mod table;

use crate::errors::{Error, Result};
use crate::grammar::Notation;
use crate::parsers::predictive::{samples, ParseTable, Parser};
use args::{Commands, Options};

/// Runs the command selected on the command line. Returns false if any input
/// given to the parse command was rejected.
pub fn run(options: &Options) -> Result<bool> {
    let notation = Notation::new(options.epsilon, options.end_of_input)?;

    let parse_table = match &options.table {
        Some(path) => ParseTable::from_file(path, &notation)?,
        None => samples::arithmetic()?,
    };

    match &options.command {
        Commands::Table => {
            print!("{}", table::format(&parse_table, &notation));
            Ok(true)
        }
        Commands::Parse { inputs } => {
            let start = match options.start {
                Some(c) => notation.symbol(c),
                None => parse_table.first_non_terminal().ok_or(Error::EmptyTable)?,
            };

            let parser = Parser::new(&parse_table).with_step_limit(options.step_limit);
            parse::output(&parser, &notation, start, inputs)
        }
    }
}
