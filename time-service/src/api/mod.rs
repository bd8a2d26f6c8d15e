pub mod current;
pub mod health;
