//! Netlify DNS adapter: resolves zones, lists, creates and updates records
//! through the Netlify REST API behind a provider-agnostic interface.
pub mod error;
pub use error::*;

pub mod provider;
pub mod record;
pub mod wrapper;
