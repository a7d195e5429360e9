use crate::errors::Result;
use crate::grammar::{Notation, Symbol};
use crate::parsers::predictive::Parser;

/// Parses each input and outputs whether it was accepted. Returns true if
/// every input was accepted.
pub fn output(
    parser: &Parser,
    notation: &Notation,
    start: Symbol,
    inputs: &[String],
) -> Result<bool> {
    let mut all_accepted = true;

    for input in inputs {
        let accepted = parser.parse(&notation.symbols(input), start)?;
        println!("{}", verdict(input, accepted));
        all_accepted &= accepted;
    }

    Ok(all_accepted)
}

/// Formats the result of parsing a single input
fn verdict(input: &str, accepted: bool) -> String {
    format!(
        "\"{}\": {}",
        input,
        if accepted { "Accepted!" } else { "Rejected!" }
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parsers::predictive::samples;

    #[test]
    fn test_verdict() {
        assert_eq!(verdict("i+i", true), "\"i+i\": Accepted!");
        assert_eq!(verdict("", false), "\"\": Rejected!");
    }

    #[test]
    fn test_output() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let table = samples::arithmetic()?;
        let parser = Parser::new(&table);
        let n = Notation::default();

        let accepted = ["i+i".to_string(), "(i+i)*i".to_string()];
        assert!(output(&parser, &n, samples::ARITHMETIC_START, &accepted)?);

        let mixed = ["i+i".to_string(), "i+".to_string()];
        assert!(!output(&parser, &n, samples::ARITHMETIC_START, &mixed)?);

        Ok(())
    }
}
