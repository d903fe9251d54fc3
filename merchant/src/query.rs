use rust_decimal::Decimal;
use std::fmt;

/// A space separated run of alien words, as written in the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienPhrase {
    pub words: Vec<String>,
}

impl AlienPhrase {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl fmt::Display for AlienPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// `how much is <alien words> ?`
    SimpleTranslation { alien_phrase: AlienPhrase },

    /// `<alien word(s)> is <roman digit>`
    MapToRoman {
        alien_words: Vec<String>,
        roman_numeral: char,
    },

    /// `<alien words> <Metal> is <amount> Credits`
    CompleteValueHint {
        alien_phrase: AlienPhrase,
        metal: String,
        amount: Decimal,
    },

    /// `how many Credits is <alien words> <Metal> ?`
    GetValue {
        alien_words: AlienPhrase,
        metal: String,
    },

    /// Anything the grammar does not recognise
    Unknown { raw_query: String },
}

impl Query {
    pub fn unknown(raw_query: impl Into<String>) -> Self {
        Query::Unknown {
            raw_query: raw_query.into(),
        }
    }

    /// Facts mutate the symbol table; everything else only reads it.
    pub fn is_fact(&self) -> bool {
        matches!(
            self,
            Query::MapToRoman { .. } | Query::CompleteValueHint { .. }
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Query::SimpleTranslation { .. } => "simple_translation",
            Query::MapToRoman { .. } => "map_to_roman",
            Query::CompleteValueHint { .. } => "complete_value_hint",
            Query::GetValue { .. } => "get_value",
            Query::Unknown { .. } => "unknown",
        }
    }
}
