pub mod answer;
pub mod loaders;
pub mod question;
pub mod recipe;

pub use answer::AnswerMap;
pub use loaders::{load_questionnaire, parse_questionnaire};
pub use question::{Presentation, Question, Questionnaire};
pub use recipe::{RecipeIngredient, RecipeResult};
