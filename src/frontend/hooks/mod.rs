//! Data hooks shared by the page sections

mod use_auth;
mod use_collection;

pub use use_auth::*;
pub use use_collection::*;
