pub mod health;
pub mod speech;
pub mod text;
pub mod user;
