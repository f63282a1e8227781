//! Employee repository: every read goes through the persons ⋈ employees join,
//! since name and role live on the person row and tenure on the employee row.

use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select, Set,
};
use tracing::debug;

use super::person_repository::{role_to_domain, role_to_entity};
use crate::domain::{
    DomainError, DomainResult, Employee, EmployeeFilter, EmployeeRepository, EmployeeSortField,
    SortOrder,
};
use crate::infrastructure::database::entities::{employee, person};
use crate::shared::PaginatedResult;

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Projection of one joined persons/employees row
#[derive(Debug, FromQueryResult)]
struct EmployeeRow {
    person_id: i32,
    first_name: String,
    last_name: String,
    role: person::PersonRole,
    tenure_years: i32,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            person_id: row.person_id,
            first_name: row.first_name,
            last_name: row.last_name,
            role: role_to_domain(row.role),
            tenure_years: row.tenure_years,
        }
    }
}

fn joined() -> Select<person::Entity> {
    person::Entity::find().join(JoinType::InnerJoin, person::Relation::Employee.def())
}

fn projected(query: Select<person::Entity>) -> Select<person::Entity> {
    query
        .select_only()
        .column_as(person::Column::Id, "person_id")
        .column_as(person::Column::FirstName, "first_name")
        .column_as(person::Column::LastName, "last_name")
        .column_as(person::Column::Role, "role")
        .column_as(employee::Column::TenureYears, "tenure_years")
}

/// `%` and `_` in user input match literally. The needle is folded the
/// same way as `first_name_lower`.
fn like_pattern(needle: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in person::search_name(needle).chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape('\\')
}

fn apply_filter(mut query: Select<person::Entity>, filter: &EmployeeFilter) -> Select<person::Entity> {
    if let Some(name) = filter.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        query = query.filter(person::Column::FirstNameLower.like(like_pattern(name)));
    }

    if let Some(role) = filter.role {
        query = query.filter(person::Column::Role.eq(role_to_entity(role)));
    }

    if let Some(min_tenure) = filter.min_tenure {
        query = query.filter(employee::Column::TenureYears.gte(min_tenure));
    }

    query
}

fn apply_sort(query: Select<person::Entity>, filter: &EmployeeFilter) -> Select<person::Entity> {
    let order = || match filter.sort.order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    let query = match filter.sort.field {
        EmployeeSortField::Id => return query.order_by(person::Column::Id, order()),
        EmployeeSortField::FirstName => query.order_by(person::Column::FirstName, order()),
        EmployeeSortField::LastName => query.order_by(person::Column::LastName, order()),
        // Must order on the joined employees column, not on persons.
        EmployeeSortField::Tenure => query.order_by(employee::Column::TenureYears, order()),
    };

    query.order_by_asc(person::Column::Id)
}

/// Load one employee over any connection, including an open transaction.
pub(super) async fn load_employee<C: ConnectionTrait>(
    conn: &C,
    person_id: i32,
) -> Result<Option<Employee>, DbErr> {
    let row = projected(joined().filter(person::Column::Id.eq(person_id)))
        .into_model::<EmployeeRow>()
        .one(conn)
        .await?;
    Ok(row.map(Employee::from))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn list(&self, filter: EmployeeFilter) -> DomainResult<PaginatedResult<Employee>> {
        let query = apply_filter(joined(), &filter);

        let total = query.clone().count(&self.db).await?;

        let rows = projected(apply_sort(query, &filter))
            .offset(filter.page.offset())
            .limit(filter.page.limit())
            .into_model::<EmployeeRow>()
            .all(&self.db)
            .await?;

        debug!(
            total,
            returned = rows.len(),
            page = filter.page.page,
            "Employee list query"
        );

        let items = rows.into_iter().map(Employee::from).collect();
        Ok(PaginatedResult::new(items, total, filter.page))
    }

    async fn find_by_id(&self, person_id: i32) -> DomainResult<Option<Employee>> {
        Ok(load_employee(&self.db, person_id).await?)
    }

    async fn create(&self, person_id: i32, tenure_years: i32) -> DomainResult<Employee> {
        if tenure_years < 0 {
            return Err(DomainError::Validation(
                "Tenure must be zero or more years".into(),
            ));
        }

        let person = person::Entity::find_by_id(person_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DomainError::not_found("Person", "id", person_id))?;

        let role = role_to_domain(person.role);
        if !role.is_employee() {
            return Err(DomainError::Validation(format!(
                "A person with role {} cannot be an employee",
                role
            )));
        }

        employee::ActiveModel {
            person_id: Set(person_id),
            tenure_years: Set(tenure_years),
        }
        .insert(&self.db)
        .await?;

        load_employee(&self.db, person_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Employee", "person_id", person_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeSort, PersonRole, RepositoryProvider};
    use crate::infrastructure::database::entities;
    use crate::infrastructure::database::test_support::{employee, memory_repos, person};
    use crate::shared::PageRequest;

    fn by_tenure_desc() -> EmployeeFilter {
        EmployeeFilter {
            sort: EmployeeSort {
                field: EmployeeSortField::Tenure,
                order: SortOrder::Desc,
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn persons_without_employee_row_are_excluded() {
        let (_db, repos) = memory_repos().await;
        person(&repos, "Vesna", PersonRole::Owner).await;
        person(&repos, "Klara", PersonRole::Client).await;
        employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;

        let page = repos.employees().list(EmployeeFilter::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].first_name, "Maja");
        assert_eq!(page.items[0].tenure_years, 5);
    }

    #[tokio::test]
    async fn name_filter_is_case_insensitive_substring_on_first_name() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Ana", PersonRole::MakeupArtist, 1).await;
        employee(&repos, "Milica", PersonRole::NailTechnician, 2).await;
        employee(&repos, "Jovana", PersonRole::NailTechnician, 3).await;

        let filter = EmployeeFilter {
            name: Some("AN".into()),
            ..Default::default()
        };
        let page = repos.employees().list(filter).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ana", "Jovana"]);
    }

    #[tokio::test]
    async fn name_filter_folds_non_ascii_letters() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Željana", PersonRole::NailTechnician, 4).await;
        employee(&repos, "Šejla", PersonRole::MakeupArtist, 2).await;

        for needle in ["Željana", "želj", "ŽELJANA", "eljana"] {
            let filter = EmployeeFilter {
                name: Some(needle.into()),
                ..Default::default()
            };
            let page = repos.employees().list(filter).await.unwrap();
            assert_eq!(page.total, 1, "search {:?}", needle);
            assert_eq!(page.items[0].first_name, "Željana");
        }

        let filter = EmployeeFilter {
            name: Some("šEJ".into()),
            ..Default::default()
        };
        let page = repos.employees().list(filter).await.unwrap();
        assert_eq!(page.items[0].first_name, "Šejla");
    }

    #[tokio::test]
    async fn like_wildcards_in_name_are_literal() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Ana", PersonRole::MakeupArtist, 1).await;

        let filter = EmployeeFilter {
            name: Some("%".into()),
            ..Default::default()
        };
        assert_eq!(repos.employees().list(filter).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn role_and_tenure_filters_are_conjunctive() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Junior", PersonRole::NailTechnician, 1).await;
        employee(&repos, "Senior", PersonRole::NailTechnician, 15).await;
        employee(&repos, "Maja", PersonRole::MakeupArtist, 8).await;

        let filter = EmployeeFilter {
            role: Some(PersonRole::NailTechnician),
            min_tenure: Some(5),
            ..Default::default()
        };
        let page = repos.employees().list(filter).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].first_name, "Senior");
        assert_eq!(page.items[0].tenure_years, 15);

        let inclusive = EmployeeFilter {
            min_tenure: Some(8),
            ..Default::default()
        };
        assert_eq!(repos.employees().list(inclusive).await.unwrap().total, 2);
    }

    #[tokio::test]
    async fn sorts_by_joined_tenure_column() {
        let (_db, repos) = memory_repos().await;
        employee(&repos, "Dve", PersonRole::MakeupArtist, 2).await;
        employee(&repos, "Deset", PersonRole::MakeupArtist, 10).await;
        employee(&repos, "Pet", PersonRole::NailTechnician, 5).await;

        let page = repos.employees().list(by_tenure_desc()).await.unwrap();
        let tenures: Vec<_> = page.items.iter().map(|e| e.tenure_years).collect();
        assert_eq!(tenures, vec![10, 5, 2]);
    }

    #[tokio::test]
    async fn total_counts_filtered_set_not_page() {
        let (_db, repos) = memory_repos().await;
        for i in 0..5 {
            employee(&repos, &format!("Radnica{}", i), PersonRole::MakeupArtist, i).await;
        }
        employee(&repos, "Druga", PersonRole::NailTechnician, 3).await;

        let filter = EmployeeFilter {
            role: Some(PersonRole::MakeupArtist),
            page: PageRequest::new(Some(2), Some(2)),
            ..by_tenure_desc()
        };
        let page = repos.employees().list(filter).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let tenures: Vec<_> = page.items.iter().map(|e| e.tenure_years).collect();
        assert_eq!(tenures, vec![2, 1]);
    }

    #[tokio::test]
    async fn default_order_is_identity_order() {
        let (_db, repos) = memory_repos().await;
        let first = employee(&repos, "Prva", PersonRole::MakeupArtist, 9).await;
        let second = employee(&repos, "Druga", PersonRole::MakeupArtist, 1).await;

        let page = repos.employees().list(EmployeeFilter::default()).await.unwrap();
        let ids: Vec<_> = page.items.iter().map(|e| e.person_id).collect();
        assert_eq!(ids, vec![first.person_id, second.person_id]);
    }

    #[tokio::test]
    async fn only_employee_roles_can_be_promoted() {
        let (_db, repos) = memory_repos().await;
        let owner = person(&repos, "Vesna", PersonRole::Owner).await;

        let err = repos.employees().create(owner.id, 3).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = repos.employees().create(4242, 3).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn deleting_person_removes_employee() {
        let (db, repos) = memory_repos().await;
        let maja = employee(&repos, "Maja", PersonRole::MakeupArtist, 5).await;

        entities::Person::delete_by_id(maja.person_id)
            .exec(&db)
            .await
            .unwrap();
        assert!(repos
            .employees()
            .find_by_id(maja.person_id)
            .await
            .unwrap()
            .is_none());
    }
}
