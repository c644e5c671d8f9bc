pub mod speech;
pub mod text;
pub mod user;
