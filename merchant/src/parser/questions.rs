use crate::error::MerchantError;
use crate::parser::{parse_alien_phrase, Rule};
use crate::query::Query;
use pest::iterators::Pair;

pub(crate) fn parse_translate_question(pair: Pair<Rule>) -> Result<Query, MerchantError> {
    let phrase_pair = pair
        .into_inner()
        .find(|inner| inner.as_rule() == Rule::translate_phrase)
        .ok_or_else(|| {
            MerchantError::Grammar("translate_question missing translate_phrase".to_string())
        })?;

    Ok(Query::SimpleTranslation {
        alien_phrase: parse_alien_phrase(phrase_pair)?,
    })
}

pub(crate) fn parse_value_question(pair: Pair<Rule>) -> Result<Query, MerchantError> {
    let mut alien_words = None;
    let mut metal = None;

    for inner_pair in pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::credit_phrase => alien_words = Some(parse_alien_phrase(inner_pair)?),
            Rule::metal => metal = Some(inner_pair.as_str().to_string()),
            _ => {}
        }
    }

    let alien_words = alien_words.ok_or_else(|| {
        MerchantError::Grammar("value_question missing credit_phrase".to_string())
    })?;
    let metal =
        metal.ok_or_else(|| MerchantError::Grammar("value_question missing metal".to_string()))?;

    Ok(Query::GetValue { alien_words, metal })
}
