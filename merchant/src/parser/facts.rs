use crate::error::MerchantError;
use crate::numeral::MAX_VALUE;
use crate::parser::{parse_alien_phrase, parse_alien_words, Rule};
use crate::query::Query;
use pest::iterators::Pair;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) fn parse_symbol_fact(pair: Pair<Rule>) -> Result<Query, MerchantError> {
    let mut alien_words = None;
    let mut roman_numeral = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::symbol_words => alien_words = Some(parse_alien_words(inner_pair)),
            Rule::roman_digit => {
                roman_numeral = inner_pair
                    .as_str()
                    .chars()
                    .next()
                    .map(|c| c.to_ascii_uppercase())
            }
            _ => {}
        }
    }

    let alien_words = alien_words.ok_or_else(|| {
        MerchantError::Grammar("symbol_fact missing symbol_words".to_string())
    })?;
    let roman_numeral = roman_numeral.ok_or_else(|| {
        MerchantError::Grammar("symbol_fact missing roman_digit".to_string())
    })?;

    Ok(Query::MapToRoman {
        alien_words,
        roman_numeral,
    })
}

pub(crate) fn parse_value_hint(pair: Pair<Rule>, line: &str) -> Result<Query, MerchantError> {
    let mut alien_phrase = None;
    let mut metal = None;
    let mut amount = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::hint_phrase => alien_phrase = Some(parse_alien_phrase(inner_pair)?),
            Rule::metal => metal = Some(inner_pair.as_str().to_string()),
            Rule::amount => amount = Some(inner_pair.as_str().to_string()),
            _ => {}
        }
    }

    let alien_phrase = alien_phrase
        .ok_or_else(|| MerchantError::Grammar("value_hint missing hint_phrase".to_string()))?;
    let metal =
        metal.ok_or_else(|| MerchantError::Grammar("value_hint missing metal".to_string()))?;
    let amount =
        amount.ok_or_else(|| MerchantError::Grammar("value_hint missing amount".to_string()))?;

    // Any amount above this bound could overflow once priced at the largest numeral.
    let amount = match Decimal::from_str(&amount) {
        Ok(amount) if amount <= max_amount() => amount,
        _ => return Ok(Query::unknown(line)),
    };

    Ok(Query::CompleteValueHint {
        alien_phrase,
        metal,
        amount,
    })
}

/// Largest amount a value hint may carry: `Decimal::MAX / 3999`, so that a
/// unit value times any numeral stays representable.
pub(crate) fn max_amount() -> Decimal {
    Decimal::MAX / Decimal::from(MAX_VALUE)
}
