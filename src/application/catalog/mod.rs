//! Service catalog reads

use std::sync::Arc;

use crate::domain::{DomainResult, RepositoryProvider, Service, ServiceCategory};

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All services, optionally restricted to one category, ordered by id.
    pub async fn list_services(&self, category: Option<ServiceCategory>) -> DomainResult<Vec<Service>> {
        self.repos.services().list(category).await
    }
}
