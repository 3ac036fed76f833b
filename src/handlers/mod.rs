// handlers/mod.rs - two security tiers
//
// Public (no auth) → Protected (JWT auth, session injected by middleware)
pub mod protected;
pub mod public;
