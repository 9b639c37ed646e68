//! Requestty engine for questionnaire.
//!
//! This crate asks questionnaire's one-off questions on the command line
//! using the `requestty` library.
//!
//! # Example
//!
//! ```ignore
//! use questionnaire::{InputOptions, Questionnaire};
//! use questionnaire_requestty::RequesttyEngine;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut q = Questionnaire::new(RequesttyEngine::new());
//!     let name = q.ask("What is your name?", InputOptions::default())?;
//!     let hungry = q.yes_or_no("Are you hungry yet?", false)?;
//!     println!("Hello, {name}! Hungry: {hungry}");
//!     Ok(())
//! }
//! ```

mod engine;

pub use engine::RequesttyEngine;
pub use engine::RequesttyError;
