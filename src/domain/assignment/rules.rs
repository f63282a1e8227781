//! Assignment validation
//!
//! Pure checks run against freshly loaded employee and service records.
//! Every problem is recorded; nothing short-circuits.

use std::collections::{HashMap, HashSet};

use crate::domain::{Employee, FieldErrors, PersonRole, Service};

/// Request path of the employee reference
pub const EMPLOYEE_FIELD: &str = "employeeId";
/// Request path of the service list; indexed entries use `serviceIds.<i>`
pub const SERVICES_FIELD: &str = "serviceIds";

pub fn invalid_employee_message() -> String {
    "The selected employee is invalid.".to_string()
}

pub fn unknown_service_message(service_id: i32) -> String {
    format!("The selected service id {} is invalid.", service_id)
}

pub fn category_mismatch_message(role: PersonRole, service_name: &str) -> String {
    format!("Role ({}) cannot perform service: {}", role, service_name)
}

/// Check a requested assignment set.
///
/// `employee` is `None` when the id does not resolve to an employee.
/// `known` holds the services that exist among `requested`.
pub fn check_assignment(
    employee: Option<&Employee>,
    requested: &[i32],
    known: &[Service],
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let employee = employee.and_then(|e| e.category().map(|c| (e, c)));
    if employee.is_none() {
        errors.push(EMPLOYEE_FIELD, invalid_employee_message());
    }

    let by_id: HashMap<i32, &Service> = known.iter().map(|s| (s.id, s)).collect();
    let mut mismatched = HashSet::new();

    for (index, service_id) in requested.iter().enumerate() {
        let Some(service) = by_id.get(service_id) else {
            errors.push(
                format!("{}.{}", SERVICES_FIELD, index),
                unknown_service_message(*service_id),
            );
            continue;
        };

        if let Some((employee, category)) = employee {
            if service.category != category && mismatched.insert(service.id) {
                errors.push(
                    SERVICES_FIELD,
                    category_mismatch_message(employee.role, &service.name),
                );
            }
        }
    }

    errors
}

/// Distinct ids in first-seen order.
pub fn distinct_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceCategory;

    fn maja() -> Employee {
        Employee {
            person_id: 2,
            first_name: "Maja".into(),
            last_name: "Petrović".into(),
            role: PersonRole::MakeupArtist,
            tenure_years: 5,
        }
    }

    fn service(id: i32, name: &str, category: ServiceCategory) -> Service {
        Service {
            id,
            name: name.into(),
            category,
            price: 3000,
            duration_minutes: 60,
        }
    }

    #[test]
    fn matching_categories_pass() {
        let services = vec![
            service(1, "Dnevni makeup", ServiceCategory::Makeup),
            service(2, "Večernji makeup", ServiceCategory::Makeup),
        ];
        let errors = check_assignment(Some(&maja()), &[1, 2], &services);
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatch_names_role_and_service() {
        let services = vec![service(7, "Gellac", ServiceCategory::Manicure)];
        let errors = check_assignment(Some(&maja()), &[7], &services);

        assert_eq!(
            errors.messages_for(SERVICES_FIELD),
            vec!["Role (sminkerka) cannot perform service: Gellac"]
        );
    }

    #[test]
    fn every_problem_is_collected() {
        let services = vec![
            service(1, "Dnevni makeup", ServiceCategory::Makeup),
            service(7, "Gellac", ServiceCategory::Manicure),
            service(8, "Izlivanje noktiju", ServiceCategory::Manicure),
        ];
        let errors = check_assignment(Some(&maja()), &[7, 999, 1, 8, 1000], &services);

        assert_eq!(errors.messages_for(SERVICES_FIELD).len(), 2);
        assert_eq!(
            errors.messages_for("serviceIds.1"),
            vec!["The selected service id 999 is invalid."]
        );
        assert_eq!(errors.messages_for("serviceIds.4").len(), 1);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn unknown_service_is_keyed_by_position() {
        let errors = check_assignment(Some(&maja()), &[999], &[]);
        let map = errors.to_map();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["serviceIds.0"]);
    }

    #[test]
    fn duplicate_mismatch_is_reported_once() {
        let services = vec![service(7, "Gellac", ServiceCategory::Manicure)];
        let errors = check_assignment(Some(&maja()), &[7, 7], &services);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn missing_employee_is_reported_without_category_checks() {
        let services = vec![service(7, "Gellac", ServiceCategory::Manicure)];
        let errors = check_assignment(None, &[7, 999], &services);

        assert_eq!(errors.messages_for(EMPLOYEE_FIELD).len(), 1);
        assert!(errors.messages_for(SERVICES_FIELD).is_empty());
        assert_eq!(errors.messages_for("serviceIds.1").len(), 1);
    }

    #[test]
    fn distinct_ids_keeps_first_occurrence_order() {
        assert_eq!(distinct_ids(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
