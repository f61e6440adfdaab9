pub mod input;
pub mod renderer;

pub use input::{LineInput, MenuCommand, QuizCommand, RetryCommand};
pub use renderer::{format_recipe, Renderer, TerminalRenderer, SUBMIT_FAILED_MESSAGE};
