use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::warn;

use crate::types::{parse_amount, NumericError};
use crate::validation::{FilterCatalog, FilterOptions};

/// Asks whether to filter and, if so, for a region and an amount range.
///
/// Blank answers leave the corresponding filter unset. An amount that is not a number is
/// reported back to the user and also left unset. Reaching end of input before answering is
/// treated as "no".
pub fn prompt_filter_options<R: BufRead, W: Write>(input: &mut R, output: &mut W, available: &FilterCatalog) -> std::io::Result<FilterOptions> {
    writeln!(output, "Regions: {}", available.regions.join(", "))?;
    if let (Some(min), Some(max)) = (available.min_amount, available.max_amount) {
        writeln!(output, "Amount Range: ₹{} - ₹{}", min.round_dp(0), max.round_dp(0))?;
    }

    let answer = ask(input, output, "\nDo you want to filter data? (y/n): ")?;
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(FilterOptions::default());
    }

    let region = ask(input, output, "Enter region (or press Enter to skip): ")?;
    let min_amount = ask_amount(input, output, "minimum")?;
    let max_amount = ask_amount(input, output, "maximum")?;

    Ok(FilterOptions {
        region: Some(region).filter(|region| !region.is_empty()),
        min_amount,
        max_amount
    })
}

/// Interprets an amount answer. Blank means unset.
pub fn parse_amount_answer(answer: &str) -> Result<Option<Decimal>, NumericError> {
    if answer.trim().is_empty() {
        return Ok(None);
    }

    parse_amount(answer).map(Some)
}

fn ask_amount<R: BufRead, W: Write>(input: &mut R, output: &mut W, bound: &str) -> std::io::Result<Option<Decimal>> {
    let answer = ask(input, output, &format!("Enter {bound} amount (or press Enter to skip): "))?;

    match parse_amount_answer(&answer) {
        Ok(amount) => Ok(amount),
        Err(error) => {
            warn!("Ignoring {bound} amount [{answer}]: {error}");
            writeln!(output, "Ignoring {bound} amount [{answer}]: not a number, no {bound} limit applied")?;
            Ok(None)
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> std::io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(answer.trim().to_string())
}
