pub mod admin;
pub mod layout;
pub mod public;
