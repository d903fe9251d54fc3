use thiserror::Error;

/// Error types for the merchant engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerchantError {
    /// Text rejected by the Roman numeral grammar. Carries the input as given,
    /// before trimming or case folding.
    #[error("{input} is not a valid roman numeral number")]
    InvalidNumeral { input: String },

    /// A question referenced an alien word or metal with no recorded fact.
    ///
    /// The engine turns this into an ordinary answer; it never escapes
    /// [`Engine::submit`](crate::Engine::submit).
    #[error("I don't know what {0} is")]
    UnknownFact(String),

    /// Parse tree did not have the shape the grammar promises
    #[error("Grammar error: {0}")]
    Grammar(String),
}

impl MerchantError {
    pub fn invalid_numeral(input: impl Into<String>) -> Self {
        Self::InvalidNumeral {
            input: input.into(),
        }
    }

    pub fn unknown_fact(name: impl Into<String>) -> Self {
        Self::UnknownFact(name.into())
    }
}
