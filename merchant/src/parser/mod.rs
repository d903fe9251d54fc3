use crate::error::MerchantError;
use crate::query::{AlienPhrase, Query};
use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use tracing::trace;

pub mod facts;
pub mod questions;

#[derive(Parser)]
#[grammar = "src/parser/query.pest"]
pub struct QueryParser;

/// Classify one input line.
///
/// Lines the grammar rejects become [`Query::Unknown`]; an `Err` here means
/// the parse tree itself was malformed.
pub fn parse_query(line: &str) -> Result<Query, MerchantError> {
    let pairs = match QueryParser::parse(Rule::query, line) {
        Ok(pairs) => pairs,
        Err(e) => {
            trace!(line, error = %e.variant, "line matched no query grammar");
            return Ok(Query::unknown(line));
        }
    };

    let query_pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| MerchantError::Grammar("No parse result for query".to_string()))?;

    let inner_pair = query_pair
        .into_inner()
        .next()
        .ok_or_else(|| MerchantError::Grammar("query has no inner rule".to_string()))?;

    match inner_pair.as_rule() {
        Rule::symbol_fact => facts::parse_symbol_fact(inner_pair),
        Rule::value_hint => facts::parse_value_hint(inner_pair, line),
        Rule::translate_question => questions::parse_translate_question(inner_pair),
        Rule::value_question => questions::parse_value_question(inner_pair),
        rule => Err(MerchantError::Grammar(format!(
            "Unexpected rule type for query: {:?}",
            rule
        ))),
    }
}

pub(crate) fn parse_alien_words(pair: Pair<Rule>) -> Vec<String> {
    pair.into_inner()
        .filter(|inner| inner.as_rule() == Rule::alien_word)
        .map(|inner| inner.as_str().to_string())
        .collect()
}

pub(crate) fn parse_alien_phrase(pair: Pair<Rule>) -> Result<AlienPhrase, MerchantError> {
    let rule = pair.as_rule();
    let words = parse_alien_words(pair);
    if words.is_empty() {
        return Err(MerchantError::Grammar(format!(
            "{:?} contains no alien words",
            rule
        )));
    }
    Ok(AlienPhrase::new(words))
}
