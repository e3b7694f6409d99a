//! Employee model and related types.
//!
//! This module defines the Employee struct and the request/response shapes
//! used when an administrator adds someone to the directory.

use serde::{Deserialize, Serialize};

/// Represents a member of staff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: i64,
    /// Full display name.
    pub name: String,
    /// Job role (free text, e.g. "Chef").
    pub role: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number, used for pay notifications.
    #[serde(default)]
    pub phone: Option<String>,
}

impl Employee {
    /// Returns the login name derived from the employee's name.
    ///
    /// The first word of the name, lowercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: 4,
    ///     name: "Chajan Gurung".to_string(),
    ///     role: "Chef".to_string(),
    ///     email: None,
    ///     phone: None,
    /// };
    /// assert_eq!(employee.base_username(), "chajan");
    /// ```
    pub fn base_username(&self) -> String {
        self.name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }
}

/// An employee record submitted for creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full display name (required).
    #[serde(default)]
    pub name: String,
    /// Job role (required).
    #[serde(default)]
    pub role: String,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
}

/// Login credentials handed back when an employee account is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The generated username.
    pub username: String,
    /// The initial password.
    pub password: String,
}

/// The result of adding an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreated {
    /// The stored employee.
    #[serde(flatten)]
    pub employee: Employee,
    /// The login account created for them.
    pub user_created: Credentials,
}
