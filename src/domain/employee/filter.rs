//! Employee listing filter

use crate::domain::PersonRole;
use crate::shared::PageRequest;

/// Columns the employee list may be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmployeeSortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Tenure,
}

impl EmployeeSortField {
    /// Parse a `sort_by` value. `None` for keys outside the allow-list.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "tenure" | "tenure_years" | "radni_staz" => Some(Self::Tenure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeSort {
    pub field: EmployeeSortField,
    pub order: SortOrder,
}

impl EmployeeSort {
    /// Unknown keys or directions fall back to the default (id, ascending)
    /// instead of failing the request.
    pub fn from_params(sort_by: Option<&str>, order: Option<&str>) -> Self {
        let Some(field) = sort_by.and_then(EmployeeSortField::parse) else {
            return Self::default();
        };
        Self {
            field,
            order: order.and_then(SortOrder::parse).unwrap_or_default(),
        }
    }
}

/// Conjunctive filter for the employee list
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Case-insensitive substring of the first name
    pub name: Option<String>,
    pub role: Option<PersonRole>,
    /// Inclusive lower bound on tenure
    pub min_tenure: Option<i32>,
    pub sort: EmployeeSort,
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenure_sort_accepts_aliases() {
        assert_eq!(EmployeeSortField::parse("tenure"), Some(EmployeeSortField::Tenure));
        assert_eq!(EmployeeSortField::parse("radni_staz"), Some(EmployeeSortField::Tenure));
        assert_eq!(EmployeeSortField::parse("password_hash"), None);
    }

    #[test]
    fn unknown_sort_key_falls_back_to_default() {
        let sort = EmployeeSort::from_params(Some("email"), Some("desc"));
        assert_eq!(sort, EmployeeSort::default());
    }

    #[test]
    fn unknown_order_keeps_field_but_sorts_ascending() {
        let sort = EmployeeSort::from_params(Some("tenure"), Some("sideways"));
        assert_eq!(sort.field, EmployeeSortField::Tenure);
        assert_eq!(sort.order, SortOrder::Asc);

        let sort = EmployeeSort::from_params(Some("tenure"), Some("DESC"));
        assert_eq!(sort.order, SortOrder::Desc);
    }
}
