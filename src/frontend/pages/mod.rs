mod auth;
mod home;

pub use auth::Auth;
pub use home::Home;
