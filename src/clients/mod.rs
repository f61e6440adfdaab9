pub mod recipe_client;

pub use recipe_client::{decode_recipe, RecipeClient, GENERATE_RECIPE_PATH};
