mod types;
pub use types::*;

pub mod netlify;
