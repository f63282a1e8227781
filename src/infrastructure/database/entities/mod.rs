//! Database entities module

pub mod employee;
pub mod employee_service;
pub mod person;
pub mod service;

pub use employee::Entity as Employee;
pub use employee_service::Entity as EmployeeService;
pub use person::Entity as Person;
pub use service::Entity as Service;
