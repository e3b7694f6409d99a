//! Session context.
//!
//! Operations that act on behalf of a logged-in user take a [`Session`]
//! explicitly instead of consulting any global "current user".

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// The role attached to a login account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Manages employees and payroll.
    Admin,
    /// Logs work and swaps shifts.
    Employee,
}

/// The identity of an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The login name.
    pub username: String,
    /// The account role.
    pub role: UserRole,
    /// The linked employee record, if any (admins usually have none).
    #[serde(default)]
    pub employee_id: Option<i64>,
}

impl Session {
    /// Returns the linked employee ID.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::NotAnEmployee`] if the session has no employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{Session, UserRole};
    ///
    /// let session = Session {
    ///     username: "asha".to_string(),
    ///     role: UserRole::Employee,
    ///     employee_id: Some(7),
    /// };
    /// assert_eq!(session.require_employee().unwrap(), 7);
    /// ```
    pub fn require_employee(&self) -> PayrollResult<i64> {
        self.employee_id.ok_or(PayrollError::NotAnEmployee)
    }

    /// Returns true if the session belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_session_has_no_employee() {
        let session = Session {
            username: "admin".to_string(),
            role: UserRole::Admin,
            employee_id: None,
        };
        assert!(session.is_admin());
        assert!(matches!(
            session.require_employee(),
            Err(PayrollError::NotAnEmployee)
        ));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Employee).unwrap(),
            "\"employee\""
        );
    }

    #[test]
    fn test_deserialize_session() {
        let json = r#"{"username": "bo", "role": "employee", "employee_id": 3}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.employee_id, Some(3));
        assert!(!session.is_admin());
    }
}
