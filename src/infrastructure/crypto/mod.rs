//! Password hashing and bearer tokens

pub mod jwt;
pub mod password;
