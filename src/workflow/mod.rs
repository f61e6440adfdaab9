pub mod quiz_flow;
pub mod quiz_machine;

pub use quiz_flow::{QuizFlow, SessionOutcome};
pub use quiz_machine::{Advance, QuizSession, QuizState, QuizStateMachine};
