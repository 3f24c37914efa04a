//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the TheoLingua domain.

mod errors;
mod ids;
mod money;
mod percentage;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{ChapterId, ProgramId, TopicId, UnitId};
pub use money::Paise;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
