#[cfg(test)]
#[path = "../../tests/unit/ttp/reader_test.rs"]
mod reader_test;

use super::Solutions;
use pareto_core::prelude::{FrontError, FrontResult};
use std::io::{BufReader, Read};

/// A trait to read travelling thief problem results.
pub trait TtpResults {
    /// Reads results as solutions with negated profit.
    fn read_ttp_results(self) -> FrontResult<Solutions>;
}

impl<R: Read> TtpResults for BufReader<R> {
    fn read_ttp_results(mut self) -> FrontResult<Solutions> {
        let mut buffer = String::new();
        self.read_to_string(&mut buffer)?;

        parse_ttp_results(buffer.as_str())
    }
}

impl TtpResults for String {
    fn read_ttp_results(self) -> FrontResult<Solutions> {
        parse_ttp_results(self.as_str())
    }
}

/// Parses results text: values are separated by runs of spaces and line breaks, they are read as
/// alternating `travel_time profit` pairs. The last piece of the text is always discarded: it is
/// either a trailing value (e.g. a seed) or an empty piece after a final line break.
pub fn parse_ttp_results(text: &str) -> FrontResult<Solutions> {
    let text = text.replace("\r\n", "\n");

    let mut tokens = split_tokens(text.as_str());
    tokens.pop();

    if tokens.len() % 2 != 0 {
        return Err(FrontError::InvalidInput(format!(
            "expected an even amount of values before the trailing one, got {}",
            tokens.len()
        )));
    }

    let values =
        tokens.iter().enumerate().map(|(idx, token)| parse_value(token, idx)).collect::<FrontResult<Vec<_>>>()?;

    if values.is_empty() {
        return Err(FrontError::EmptyInput("no travel time and profit pairs found".to_string()));
    }

    Ok(Solutions::from_pairs(values.chunks_exact(2).map(|pair| (pair[0], pair[1]))))
}

/// Splits text on runs of separators. Empty pieces are kept only at the beginning and the end.
fn split_tokens(text: &str) -> Vec<&str> {
    let pieces = text.split([' ', '\n']).collect::<Vec<_>>();
    let last_idx = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .filter(|(idx, piece)| !piece.is_empty() || *idx == 0 || *idx == last_idx)
        .map(|(_, piece)| piece)
        .collect()
}

fn parse_value(token: &str, position: usize) -> FrontResult<f64> {
    let value = token.parse::<f64>().map_err(|err| {
        FrontError::InvalidInput(format!("cannot parse value '{token}' at position {position}: '{err}'"))
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(FrontError::NumericError(format!("value '{token}' at position {position} is not a finite number")))
    }
}
