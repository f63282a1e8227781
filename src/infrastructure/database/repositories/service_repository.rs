use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainResult, NewService, Service, ServiceCategory, ServiceRepository};
use crate::infrastructure::database::entities::service;

pub struct SeaOrmServiceRepository {
    db: DatabaseConnection,
}

impl SeaOrmServiceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn category_to_domain(category: service::ServiceCategory) -> ServiceCategory {
    match category {
        service::ServiceCategory::Makeup => ServiceCategory::Makeup,
        service::ServiceCategory::Manicure => ServiceCategory::Manicure,
    }
}

fn category_to_entity(category: ServiceCategory) -> service::ServiceCategory {
    match category {
        ServiceCategory::Makeup => service::ServiceCategory::Makeup,
        ServiceCategory::Manicure => service::ServiceCategory::Manicure,
    }
}

pub(super) fn service_model_to_domain(model: service::Model) -> Service {
    Service {
        id: model.id,
        name: model.name,
        category: category_to_domain(model.category),
        price: model.price,
        duration_minutes: model.duration_minutes,
    }
}

/// Services with the given ids, by id. Unknown ids are skipped. Runs on
/// any connection so the assignment sync can call it inside its transaction.
pub(super) async fn services_by_ids<C: ConnectionTrait>(
    conn: &C,
    ids: &[i32],
) -> Result<Vec<Service>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let models = service::Entity::find()
        .filter(service::Column::Id.is_in(ids.iter().copied()))
        .order_by_asc(service::Column::Id)
        .all(conn)
        .await?;

    Ok(models.into_iter().map(service_model_to_domain).collect())
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn create(&self, dto: NewService) -> DomainResult<Service> {
        let model = service::ActiveModel {
            name: Set(dto.name),
            category: Set(category_to_entity(dto.category)),
            price: Set(dto.price),
            duration_minutes: Set(dto.duration_minutes),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(service_model_to_domain(model))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Service>> {
        Ok(services_by_ids(&self.db, ids).await?)
    }

    async fn list(&self, category: Option<ServiceCategory>) -> DomainResult<Vec<Service>> {
        let mut query = service::Entity::find();
        if let Some(category) = category {
            query = query.filter(service::Column::Category.eq(category_to_entity(category)));
        }

        let models = query
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(service_model_to_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::TransactionTrait;

    use super::services_by_ids;
    use crate::domain::{RepositoryProvider, ServiceCategory};
    use crate::infrastructure::database::test_support::{memory_repos, service};

    #[tokio::test]
    async fn lookup_runs_inside_a_transaction() {
        let (db, repos) = memory_repos().await;
        let gellac = service(&repos, "Gellac", ServiceCategory::Manicure).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;

        let txn = db.begin().await.unwrap();
        let found = services_by_ids(&txn, &[gellac.id, 999, day.id]).await.unwrap();
        txn.commit().await.unwrap();

        let ids: Vec<_> = found.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![day.id.min(gellac.id), day.id.max(gellac.id)]);
    }

    #[tokio::test]
    async fn list_filters_by_category() {
        let (_db, repos) = memory_repos().await;
        service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;
        service(&repos, "Gellac", ServiceCategory::Manicure).await;
        service(&repos, "Večernji makeup", ServiceCategory::Makeup).await;

        let all = repos.services().list(None).await.unwrap();
        assert_eq!(all.len(), 3);

        let makeup = repos
            .services()
            .list(Some(ServiceCategory::Makeup))
            .await
            .unwrap();
        assert_eq!(makeup.len(), 2);
        assert!(makeup.iter().all(|s| s.category == ServiceCategory::Makeup));
    }

    #[tokio::test]
    async fn find_by_ids_skips_unknown_ids() {
        let (_db, repos) = memory_repos().await;
        let gellac = service(&repos, "Gellac", ServiceCategory::Manicure).await;

        let found = repos
            .services()
            .find_by_ids(&[gellac.id, 999])
            .await
            .unwrap();
        assert_eq!(found, vec![gellac]);
        assert!(repos.services().find_by_ids(&[]).await.unwrap().is_empty());
    }
}
