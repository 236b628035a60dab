// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Welcome message, liveness and token acquisition.
pub mod health;
pub mod token;

pub use health::{health, root};
pub use token::token_post;
