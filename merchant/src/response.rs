use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

pub const UNRECOGNIZED_ANSWER: &str = "I have no idea what you are talking about";

/// What the engine says back to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A fact was stored. Renders as the empty string.
    Recorded,
    /// `<phrase> is <value>`
    Translation { phrase: String, value: u32 },
    /// `<phrase> <metal> is <credits> Credits`
    Credits {
        phrase: String,
        metal: String,
        credits: Decimal,
    },
    /// `I don't know what <name> is`
    UnknownFact(String),
    /// The line matched no grammar
    Unrecognized,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Recorded => Ok(()),
            Answer::Translation { phrase, value } => write!(f, "{} is {}", phrase, value),
            Answer::Credits {
                phrase,
                metal,
                credits,
            } => write!(
                f,
                "{} {} is {} Credits",
                phrase,
                metal,
                format_credits(*credits)
            ),
            Answer::UnknownFact(name) => write!(f, "I don't know what {} is", name),
            Answer::Unrecognized => write!(f, "{}", UNRECOGNIZED_ANSWER),
        }
    }
}

/// Exactly two decimals, half away from zero.
pub fn format_credits(credits: Decimal) -> String {
    let rounded = credits.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // `rescale` cannot add digits past the 96-bit mantissa; the formatter pads instead.
    format!("{:.2}", rounded)
}

/// One `word is SYMBOL` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolFact {
    pub word: String,
    pub symbol: char,
}

/// The current price hint for one metal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetalFact {
    pub metal: String,
    pub phrase: String,
    pub amount: Decimal,
    /// `None` while the hint's phrase still has unmapped words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_value: Option<Decimal>,
}

/// Snapshot of everything an engine has learned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FactSheet {
    pub symbols: Vec<SymbolFact>,
    pub metals: Vec<MetalFact>,
}

impl FactSheet {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.metals.is_empty()
    }
}
