//! Person aggregate
//!
//! Accounts that can sign in: owner, employees and clients.

pub mod model;
pub mod repository;

pub use model::{NewPerson, Person, PersonRole};
pub use repository::PersonRepository;
