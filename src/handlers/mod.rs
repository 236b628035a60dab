// handlers/mod.rs - Handler tiers
//
// Public (no auth) → Protected (bearer token + active user + module permission)
pub mod protected;
pub mod public;
