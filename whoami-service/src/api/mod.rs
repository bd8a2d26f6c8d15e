pub mod health;
pub mod hostname;
pub mod id;
pub mod info;
pub mod ip;
