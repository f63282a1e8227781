use async_trait::async_trait;

use super::{NewPerson, Person};
use crate::domain::DomainResult;

#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn create(&self, person: NewPerson) -> DomainResult<Person>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Person>>;
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Person>>;
    async fn count(&self) -> DomainResult<u64>;
}
