use crate::numeral::{convert, is_roman_digit};
use crate::query::AlienPhrase;
use crate::response::{FactSheet, MetalFact, SymbolFact};
use crate::{MerchantError, MerchantResult};
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// A recorded `<phrase> <Metal> is <amount> Credits` fact.
///
/// The price of one unit is derived from it on demand, so a hint recorded
/// before its words are mapped becomes usable as soon as they are.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueHint {
    pub phrase: AlienPhrase,
    pub amount: Decimal,
}

#[derive(Debug, Clone)]
struct MetalEntry {
    name: String,
    hint: ValueHint,
}

/// Everything the engine has learned so far.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    word_to_symbol: HashMap<String, char>,
    metals: HashMap<String, MetalEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `word` to `symbol`, replacing any earlier mapping.
    pub fn define_symbol(&mut self, word: &str, symbol: char) -> MerchantResult<()> {
        if !is_roman_digit(symbol) {
            return Err(MerchantError::invalid_numeral(symbol.to_string()));
        }
        let symbol = symbol.to_ascii_uppercase();
        let previous = self.word_to_symbol.insert(word.to_lowercase(), symbol);
        debug!(word, %symbol, ?previous, "defined symbol");
        Ok(())
    }

    pub fn symbol(&self, word: &str) -> Option<char> {
        self.word_to_symbol.get(&word.to_lowercase()).copied()
    }

    pub fn symbol_count(&self) -> usize {
        self.word_to_symbol.len()
    }

    /// Concatenate the symbols of `words` in order.
    ///
    /// Fails with [`MerchantError::UnknownFact`] naming the first word that has
    /// no mapping.
    pub fn numeral_for(&self, words: &[String]) -> MerchantResult<String> {
        words
            .iter()
            .map(|word| {
                self.symbol(word)
                    .ok_or_else(|| MerchantError::unknown_fact(word.as_str()))
            })
            .collect()
    }

    /// Decimal value of a phrase: its symbols read as one Roman numeral.
    pub fn phrase_value(&self, phrase: &AlienPhrase) -> MerchantResult<u32> {
        convert(&self.numeral_for(phrase.words())?)
    }

    pub fn is_resolvable(&self, phrase: &AlienPhrase) -> bool {
        phrase.words().iter().all(|word| self.symbol(word).is_some())
    }

    /// Record the latest hint for `metal`. The first spelling seen is kept
    /// for display.
    pub fn record_hint(&mut self, metal: &str, hint: ValueHint) {
        debug!(metal, phrase = %hint.phrase, amount = %hint.amount, "recorded value hint");
        match self.metals.entry(metal.to_lowercase()) {
            Entry::Occupied(mut entry) => entry.get_mut().hint = hint,
            Entry::Vacant(entry) => {
                entry.insert(MetalEntry {
                    name: metal.to_string(),
                    hint,
                });
            }
        }
    }

    pub fn hint(&self, metal: &str) -> Option<&ValueHint> {
        self.metals.get(&metal.to_lowercase()).map(|entry| &entry.hint)
    }

    pub fn metal_count(&self) -> usize {
        self.metals.len()
    }

    /// Credits per unit of `metal`.
    ///
    /// Fails with [`MerchantError::UnknownFact`] naming the metal when no hint
    /// exists, or naming the first unmapped word of the hint's phrase.
    pub fn unit_value(&self, metal: &str) -> MerchantResult<Decimal> {
        let hint = self
            .hint(metal)
            .ok_or_else(|| MerchantError::unknown_fact(metal))?;
        let quantity = self.phrase_value(&hint.phrase)?;
        if quantity == 0 {
            return Err(MerchantError::invalid_numeral(hint.phrase.to_string()));
        }
        Ok(hint.amount / Decimal::from(quantity))
    }

    /// Sorted snapshot of both tables.
    pub fn facts(&self) -> FactSheet {
        let mut symbols: Vec<SymbolFact> = self
            .word_to_symbol
            .iter()
            .map(|(word, symbol)| SymbolFact {
                word: word.clone(),
                symbol: *symbol,
            })
            .collect();
        symbols.sort_by(|a, b| a.word.cmp(&b.word));

        let mut metals: Vec<MetalFact> = self
            .metals
            .values()
            .map(|entry| MetalFact {
                metal: entry.name.clone(),
                phrase: entry.hint.phrase.to_string(),
                amount: entry.hint.amount,
                unit_value: self.unit_value(&entry.name).ok(),
            })
            .collect();
        metals.sort_by(|a, b| a.metal.cmp(&b.metal));

        FactSheet { symbols, metals }
    }
}
