//! Employee ↔ service assignments
//!
//! `replace_assignments` does its reads, checks and writes inside one
//! transaction. Every query in there must go through the transaction
//! handle: on a single-connection pool a query on `self.db` would wait
//! forever for the connection the transaction holds.

use std::collections::HashSet;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};

use super::employee_repository::load_employee;
use super::service_repository::{service_model_to_domain, services_by_ids};
use crate::domain::{
    check_assignment, distinct_ids, AssignmentRepository, DomainResult, Service,
};
use crate::infrastructure::database::entities::{employee_service, service};

pub struct SeaOrmAssignmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn current_service_ids(txn: &DatabaseTransaction, employee_id: i32) -> DomainResult<HashSet<i32>> {
    let rows = employee_service::Entity::find()
        .filter(employee_service::Column::EmployeeId.eq(employee_id))
        .all(txn)
        .await?;
    Ok(rows.into_iter().map(|r| r.service_id).collect())
}

#[async_trait]
impl AssignmentRepository for SeaOrmAssignmentRepository {
    async fn replace_assignments(&self, employee_id: i32, service_ids: &[i32]) -> DomainResult<u64> {
        let txn = self.db.begin().await?;

        let employee = load_employee(&txn, employee_id).await?;
        let known = services_by_ids(&txn, &distinct_ids(service_ids)).await?;

        if let Err(rejected) = check_assignment(employee.as_ref(), service_ids, &known).into_result() {
            txn.rollback().await?;
            debug!(employee_id, error = %rejected, "Assignment rejected");
            return Err(rejected);
        }

        let wanted: HashSet<i32> = known.iter().map(|s| s.id).collect();
        let current = current_service_ids(&txn, employee_id).await?;

        let stale: Vec<i32> = current.difference(&wanted).copied().collect();
        let mut missing: Vec<i32> = wanted.difference(&current).copied().collect();
        missing.sort_unstable();

        if !stale.is_empty() {
            employee_service::Entity::delete_many()
                .filter(employee_service::Column::EmployeeId.eq(employee_id))
                .filter(employee_service::Column::ServiceId.is_in(stale.iter().copied()))
                .exec(&txn)
                .await?;
        }

        if !missing.is_empty() {
            let rows = missing.iter().map(|service_id| employee_service::ActiveModel {
                employee_id: Set(employee_id),
                service_id: Set(*service_id),
            });
            employee_service::Entity::insert_many(rows)
                .exec_without_returning(&txn)
                .await?;
        }

        let assigned = employee_service::Entity::find()
            .filter(employee_service::Column::EmployeeId.eq(employee_id))
            .count(&txn)
            .await?;

        txn.commit().await?;

        info!(
            employee_id,
            added = missing.len(),
            removed = stale.len(),
            assigned,
            "Assignments replaced"
        );
        Ok(assigned)
    }

    async fn list_for_employee(&self, employee_id: i32) -> DomainResult<Vec<Service>> {
        let models = service::Entity::find()
            .join(JoinType::InnerJoin, service::Relation::EmployeeServices.def())
            .filter(employee_service::Column::EmployeeId.eq(employee_id))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(service_model_to_domain).collect())
    }

    async fn count_for_employee(&self, employee_id: i32) -> DomainResult<u64> {
        Ok(employee_service::Entity::find()
            .filter(employee_service::Column::EmployeeId.eq(employee_id))
            .count(&self.db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        DomainError, PersonRole, RepositoryProvider, ServiceCategory,
    };
    use crate::infrastructure::database::test_support::{employee, memory_repos, person, service};

    fn ids(services: &[crate::domain::Service]) -> Vec<i32> {
        services.iter().map(|s| s.id).collect()
    }

    #[tokio::test]
    async fn replace_is_idempotent_and_returns_count() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;
        let evening = service(&repos, "Večernji makeup", ServiceCategory::Makeup).await;
        let request = [day.id, evening.id];

        let first = repos
            .assignments()
            .replace_assignments(maja.person_id, &request)
            .await
            .unwrap();
        let second = repos
            .assignments()
            .replace_assignments(maja.person_id, &request)
            .await
            .unwrap();

        assert_eq!((first, second), (2, 2));
        let listed = repos.assignments().list_for_employee(maja.person_id).await.unwrap();
        assert_eq!(ids(&listed), vec![day.id, evening.id]);
    }

    #[tokio::test]
    async fn replace_removes_services_left_out() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;
        let evening = service(&repos, "Večernji makeup", ServiceCategory::Makeup).await;

        repos
            .assignments()
            .replace_assignments(maja.person_id, &[day.id, evening.id])
            .await
            .unwrap();
        let count = repos
            .assignments()
            .replace_assignments(maja.person_id, &[evening.id, evening.id])
            .await
            .unwrap();

        assert_eq!(count, 1);
        let listed = repos.assignments().list_for_employee(maja.person_id).await.unwrap();
        assert_eq!(ids(&listed), vec![evening.id]);
    }

    #[tokio::test]
    async fn empty_request_clears_assignments() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;

        repos
            .assignments()
            .replace_assignments(maja.person_id, &[day.id])
            .await
            .unwrap();
        let count = repos
            .assignments()
            .replace_assignments(maja.person_id, &[])
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert_eq!(repos.assignments().count_for_employee(maja.person_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn category_mismatch_leaves_previous_set_untouched() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;
        let gellac = service(&repos, "Gellac", ServiceCategory::Manicure).await;

        repos
            .assignments()
            .replace_assignments(maja.person_id, &[day.id])
            .await
            .unwrap();
        let err = repos
            .assignments()
            .replace_assignments(maja.person_id, &[day.id, gellac.id])
            .await
            .unwrap_err();

        match err {
            DomainError::Invalid(errors) => assert_eq!(
                errors.messages_for("serviceIds"),
                vec!["Role (sminkerka) cannot perform service: Gellac"]
            ),
            other => panic!("unexpected error: {:?}", other),
        }
        let listed = repos.assignments().list_for_employee(maja.person_id).await.unwrap();
        assert_eq!(ids(&listed), vec![day.id]);
    }

    #[tokio::test]
    async fn unknown_service_is_reported_by_position() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;

        let err = repos
            .assignments()
            .replace_assignments(maja.person_id, &[999])
            .await
            .unwrap_err();

        let DomainError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.messages_for("serviceIds.0"),
            vec!["The selected service id 999 is invalid."]
        );
    }

    #[tokio::test]
    async fn non_employee_target_is_invalid() {
        let (_db, repos) = memory_repos().await;
        let client = person(&repos, "Klara", PersonRole::Client).await;

        let err = repos
            .assignments()
            .replace_assignments(client.id, &[])
            .await
            .unwrap_err();

        let DomainError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            errors.messages_for("employeeId"),
            vec!["The selected employee is invalid."]
        );
    }

    #[tokio::test]
    async fn assignments_do_not_leak_between_employees() {
        let (_db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;
        let ana = employee(&repos, "Ana", PersonRole::MakeupArtist, 2).await;
        let milica = employee(&repos, "Milica", PersonRole::NailTechnician, 10).await;
        let day = service(&repos, "Dnevni makeup", ServiceCategory::Makeup).await;
        let evening = service(&repos, "Večernji makeup", ServiceCategory::Makeup).await;
        let gellac = service(&repos, "Gellac", ServiceCategory::Manicure).await;

        let a = repos.assignments();
        a.replace_assignments(maja.person_id, &[day.id, evening.id]).await.unwrap();
        a.replace_assignments(ana.person_id, &[evening.id]).await.unwrap();
        a.replace_assignments(milica.person_id, &[gellac.id]).await.unwrap();
        a.replace_assignments(maja.person_id, &[day.id]).await.unwrap();

        assert_eq!(ids(&a.list_for_employee(maja.person_id).await.unwrap()), vec![day.id]);
        assert_eq!(ids(&a.list_for_employee(ana.person_id).await.unwrap()), vec![evening.id]);
        assert_eq!(ids(&a.list_for_employee(milica.person_id).await.unwrap()), vec![gellac.id]);
    }
}
