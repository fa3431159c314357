//! Authentication

mod client_login;
mod token;

pub use client_login::ClientLogin;
pub use token::AuthToken;
