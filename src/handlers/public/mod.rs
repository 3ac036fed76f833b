// handlers/public/mod.rs - Public handlers (no authentication required)
//
// The setup probe is called before any account exists, and sign-in is how a
// session is obtained in the first place.
pub mod auth;
pub mod setup;

pub use auth::signin_post;
pub use setup::setup_get;
