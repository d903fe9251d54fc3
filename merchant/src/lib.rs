//! # Galactic Merchant
//!
//! **Intergalactic numerals for merchants**
//!
//! A query engine that learns what alien words mean in Roman numerals and what
//! metals are worth, then answers questions about both in plain text.
//!
//! ## Quick Start
//!
//! ```rust
//! use merchant::{Engine, MerchantResult};
//!
//! fn main() -> MerchantResult<()> {
//!     let mut engine = Engine::new();
//!
//!     engine.submit("glob is I")?;
//!     engine.submit("prok is V")?;
//!     engine.submit("glob glob Silver is 34 Credits")?;
//!
//!     let answer = engine.submit("how many Credits is glob prok Silver ?")?;
//!     assert_eq!(answer, "glob prok Silver is 68.00 Credits");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Facts
//! `glob is I` maps an alien word to a Roman digit. `glob glob Silver is 34
//! Credits` records what a quantity of a metal sells for; the price of one unit
//! is derived from it when needed.
//!
//! ### Questions
//! `how much is pish tegj glob glob ?` translates a phrase into a number.
//! `how many Credits is glob prok Silver ?` prices a quantity of metal.
//!
//! ### Answers
//! Facts answer with an empty string. Questions about unknown words or metals
//! answer `I don't know what <name> is`. Anything else answers
//! `I have no idea what you are talking about`.

pub mod engine;
pub mod error;
pub mod numeral;
pub mod parser;
pub mod query;
pub mod response;
pub mod shared;
pub mod symbols;

pub use engine::Engine;
pub use error::MerchantError;
pub use numeral::{convert, to_roman};
pub use parser::parse_query;
pub use query::{AlienPhrase, Query};
pub use response::{Answer, FactSheet, MetalFact, SymbolFact};
pub use shared::SharedEngine;
pub use symbols::{SymbolTable, ValueHint};

/// Result type for merchant operations
pub type MerchantResult<T> = Result<T, MerchantError>;
