//! Service catalog repository interface

use async_trait::async_trait;

use super::{NewService, Service, ServiceCategory};
use crate::domain::DomainResult;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: NewService) -> DomainResult<Service>;

    /// Services whose id is in `ids`. Unknown ids are simply absent from the result.
    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Service>>;

    async fn list(&self, category: Option<ServiceCategory>) -> DomainResult<Vec<Service>>;
}
