use crate::parser::parse_query;
use crate::query::{AlienPhrase, Query};
use crate::response::{Answer, FactSheet};
use crate::symbols::{SymbolTable, ValueHint};
use crate::{MerchantError, MerchantResult};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// The merchant query engine.
///
/// Owns the symbol table for one session. Every call to [`Engine::submit`]
/// classifies a line, applies it and answers it before returning.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    symbols: SymbolTable,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer one line as text. Facts answer with an empty string.
    ///
    /// Unknown words, unknown metals and unrecognised lines are answers, not
    /// errors. `Err` is reserved for recorded symbols that combine into an
    /// invalid numeral; the symbol table is left as it was.
    pub fn submit(&mut self, line: &str) -> MerchantResult<String> {
        Ok(self.answer(line)?.to_string())
    }

    /// Answer one line.
    pub fn answer(&mut self, line: &str) -> MerchantResult<Answer> {
        let line = line.trim_end_matches(['\r', '\n']);
        let query = parse_query(line)?;
        debug!(kind = query.kind(), line, "classified line");

        match self.apply(query) {
            Ok(answer) => Ok(answer),
            Err(MerchantError::UnknownFact(name)) => Ok(Answer::UnknownFact(name)),
            Err(e) => {
                warn!(line, error = %e, "line could not be answered");
                Err(e)
            }
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Snapshot of everything learned so far.
    pub fn facts(&self) -> FactSheet {
        self.symbols.facts()
    }

    fn apply(&mut self, query: Query) -> MerchantResult<Answer> {
        match query {
            Query::MapToRoman {
                alien_words,
                roman_numeral,
            } => {
                for word in &alien_words {
                    self.symbols.define_symbol(word, roman_numeral)?;
                }
                Ok(Answer::Recorded)
            }
            Query::CompleteValueHint {
                alien_phrase,
                metal,
                amount,
            } => self.record_value_hint(alien_phrase, &metal, amount),
            Query::SimpleTranslation { alien_phrase } => {
                let value = self.symbols.phrase_value(&alien_phrase)?;
                Ok(Answer::Translation {
                    phrase: alien_phrase.to_string(),
                    value,
                })
            }
            Query::GetValue { alien_words, metal } => self.price(&alien_words, &metal),
            Query::Unknown { .. } => Ok(Answer::Unrecognized),
        }
    }

    fn record_value_hint(
        &mut self,
        alien_phrase: AlienPhrase,
        metal: &str,
        amount: Decimal,
    ) -> MerchantResult<Answer> {
        // Validate now if possible; otherwise the phrase is resolved when the
        // metal is first priced.
        if self.symbols.is_resolvable(&alien_phrase) {
            self.symbols.phrase_value(&alien_phrase)?;
        } else {
            debug!(metal, phrase = %alien_phrase, "deferring hint with unmapped words");
        }

        self.symbols.record_hint(
            metal,
            ValueHint {
                phrase: alien_phrase,
                amount,
            },
        );
        Ok(Answer::Recorded)
    }

    fn price(&self, alien_words: &AlienPhrase, metal: &str) -> MerchantResult<Answer> {
        let quantity = self.symbols.phrase_value(alien_words)?;
        let unit_value = self.symbols.unit_value(metal)?;
        // Hint amounts are capped at parse time so this product fits.
        let credits = unit_value * Decimal::from(quantity);

        Ok(Answer::Credits {
            phrase: alien_words.to_string(),
            metal: metal.to_string(),
            credits,
        })
    }
}
