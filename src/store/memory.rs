//! In-memory workforce store.
//!
//! Holds employees, login accounts, work logs and shift requests behind one
//! lock. Every public operation takes the lock once, so multi-record updates
//! (batch pay, taking a shift) are atomic to concurrent callers.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, info};

use crate::calculation::{
    batch_pay_summary, cover_request_message, pay_notification, shift_taken_message,
};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    BatchPayConfirmation, BatchPayRequest, Credentials, Employee, EmployeeCreated, LogId,
    NewEmployee, NewWorkLog, Session, ShiftPosted, ShiftRequest, ShiftStatus, ShiftTaken,
    UserRole, WorkLogEntry,
};

use super::traits::LogStore;

#[derive(Debug, Clone)]
struct UserAccount {
    username: String,
    password: String,
    role: UserRole,
    employee_id: Option<i64>,
}

#[derive(Debug, Clone)]
struct StoredLog {
    employee_id: i64,
    date: NaiveDate,
    hours: f64,
    is_paid: bool,
    notes: Option<String>,
}

#[derive(Debug, Clone)]
struct StoredShift {
    requester_id: i64,
    date: NaiveDate,
    taker_id: Option<i64>,
    status: ShiftStatus,
}

#[derive(Debug, Default)]
struct StoreState {
    employees: BTreeMap<i64, Employee>,
    users: Vec<UserAccount>,
    work_logs: BTreeMap<i64, StoredLog>,
    shift_requests: BTreeMap<i64, StoredShift>,
    next_employee_id: i64,
    next_log_id: i64,
    next_shift_id: i64,
}

impl StoreState {
    fn allocate_employee_id(&mut self) -> i64 {
        self.next_employee_id += 1;
        self.next_employee_id
    }

    fn allocate_log_id(&mut self) -> i64 {
        self.next_log_id += 1;
        self.next_log_id
    }

    fn allocate_shift_id(&mut self) -> i64 {
        self.next_shift_id += 1;
        self.next_shift_id
    }

    fn employee(&self, employee_id: i64) -> PayrollResult<&Employee> {
        self.employees
            .get(&employee_id)
            .ok_or(PayrollError::EmployeeNotFound { employee_id })
    }

    fn username_taken(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    /// Validates and inserts a work log, returning its ID.
    fn insert_log(&mut self, employee_id: i64, date: &str, hours: f64) -> PayrollResult<i64> {
        let employee_name = self.employee(employee_id)?.name.clone();
        let id = self.next_log_id + 1;

        // Validate through the same rules aggregation applies.
        let candidate = WorkLogEntry {
            id: LogId::Number(id),
            employee_id,
            employee_name,
            date: date.to_string(),
            hours,
            is_paid: false,
            notes: None,
        };
        let date = candidate.work_date()?;
        candidate.worked_hours()?;

        let id = self.allocate_log_id();
        self.work_logs.insert(
            id,
            StoredLog {
                employee_id,
                date,
                hours,
                is_paid: false,
                notes: None,
            },
        );
        Ok(id)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// An in-memory store for the whole workforce application.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
/// use payroll_engine::models::{NewEmployee, NewWorkLog};
/// use payroll_engine::store::{InMemoryStore, LogStore};
///
/// let store = InMemoryStore::new(&PayrollConfig::default()).unwrap();
/// let created = store
///     .add_employee(NewEmployee {
///         name: "Asha Rai".to_string(),
///         role: "Chef".to_string(),
///         ..NewEmployee::default()
///     })
///     .unwrap();
///
/// store
///     .add_work_log(NewWorkLog {
///         employee_id: created.employee.id,
///         date: "2024-03-04".to_string(),
///         hours: None,
///     })
///     .unwrap();
///
/// let logs = store.work_logs().unwrap();
/// assert_eq!(logs.len(), 1);
/// assert_eq!(logs[0].hours, 7.0);
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
    default_shift_hours: f64,
    default_employee_password: String,
}

impl InMemoryStore {
    /// Creates an empty store with the configured administrator account.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: &PayrollConfig) -> PayrollResult<Self> {
        config.validate()?;

        let default_shift_hours =
            config
                .default_shift_hours
                .to_f64()
                .ok_or_else(|| PayrollError::InvalidConfig {
                    message: format!(
                        "default shift hours out of range: {}",
                        config.default_shift_hours
                    ),
                })?;

        let state = StoreState {
            users: vec![UserAccount {
                username: config.accounts.admin_username.clone(),
                password: config.accounts.admin_password.clone(),
                role: UserRole::Admin,
                employee_id: None,
            }],
            ..StoreState::default()
        };

        Ok(Self {
            state: RwLock::new(state),
            default_shift_hours,
            default_employee_password: config.accounts.default_employee_password.clone(),
        })
    }

    fn read(&self) -> PayrollResult<RwLockReadGuard<'_, StoreState>> {
        self.state.read().map_err(|_| PayrollError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    fn write(&self) -> PayrollResult<RwLockWriteGuard<'_, StoreState>> {
        self.state.write().map_err(|_| PayrollError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }

    /// Checks credentials and returns the session for the account.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidCredentials`] if no account matches.
    pub fn authenticate(&self, username: &str, password: &str) -> PayrollResult<Session> {
        let state = self.read()?;
        state
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .map(|u| Session {
                username: u.username.clone(),
                role: u.role,
                employee_id: u.employee_id,
            })
            .ok_or(PayrollError::InvalidCredentials)
    }

    /// Returns all employees, ordered by ID.
    pub fn list_employees(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    /// Adds an employee and creates their login account.
    ///
    /// The username is the first word of the name, lowercased. If that is
    /// already taken, the new employee's ID is appended to it.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::InvalidEmployee`] if the name or role is blank.
    pub fn add_employee(&self, new: NewEmployee) -> PayrollResult<EmployeeCreated> {
        let name = new.name.trim().to_string();
        let role = new.role.trim().to_string();

        if name.is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "name".to_string(),
                message: "is required".to_string(),
            });
        }
        if role.is_empty() {
            return Err(PayrollError::InvalidEmployee {
                field: "role".to_string(),
                message: "is required".to_string(),
            });
        }

        let mut state = self.write()?;
        let employee = Employee {
            id: state.allocate_employee_id(),
            name,
            role,
            email: non_blank(new.email),
            phone: non_blank(new.phone),
        };

        let mut username = employee.base_username();
        if state.username_taken(&username) {
            username = format!("{}{}", username, employee.id);
        }

        state.users.push(UserAccount {
            username: username.clone(),
            password: self.default_employee_password.clone(),
            role: UserRole::Employee,
            employee_id: Some(employee.id),
        });
        state.employees.insert(employee.id, employee.clone());

        info!(employee_id = employee.id, username = %username, "Employee added");

        Ok(EmployeeCreated {
            employee,
            user_created: Credentials {
                username,
                password: self.default_employee_password.clone(),
            },
        })
    }

    /// Removes an employee and their login account.
    ///
    /// Their work logs are kept but no longer listed.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::EmployeeNotFound`] if no such employee exists.
    pub fn delete_employee(&self, employee_id: i64) -> PayrollResult<()> {
        let mut state = self.write()?;
        if state.employees.remove(&employee_id).is_none() {
            return Err(PayrollError::EmployeeNotFound { employee_id });
        }
        state.users.retain(|u| u.employee_id != Some(employee_id));

        info!(employee_id, "Employee deleted");
        Ok(())
    }

    /// Records hours worked.
    ///
    /// Hours default to the configured shift length. New logs are unpaid.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::EmployeeNotFound`] if the employee does not exist
    /// - [`PayrollError::InvalidEntry`] if the date or hours are invalid
    pub fn add_work_log(&self, new: NewWorkLog) -> PayrollResult<LogId> {
        let hours = new.hours.unwrap_or(self.default_shift_hours);
        let mut state = self.write()?;
        let id = state.insert_log(new.employee_id, &new.date, hours)?;

        debug!(log_id = id, employee_id = new.employee_id, hours, "Work log added");
        Ok(LogId::Number(id))
    }

    /// Replaces the note on a work log.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LogNotFound`] if no such log exists.
    pub fn set_note(&self, log_id: i64, note: Option<String>) -> PayrollResult<()> {
        let mut state = self.write()?;
        let log = state
            .work_logs
            .get_mut(&log_id)
            .ok_or_else(|| PayrollError::LogNotFound {
                log_id: log_id.to_string(),
            })?;
        log.notes = non_blank(note);
        Ok(())
    }

    /// Flips a work log between paid and unpaid, returning the new state.
    ///
    /// This is the only way to take back a payment.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::LogNotFound`] if no such log exists.
    pub fn toggle_paid(&self, log_id: i64) -> PayrollResult<bool> {
        let mut state = self.write()?;
        let log = state
            .work_logs
            .get_mut(&log_id)
            .ok_or_else(|| PayrollError::LogNotFound {
                log_id: log_id.to_string(),
            })?;
        log.is_paid = !log.is_paid;
        let is_paid = log.is_paid;

        info!(log_id, is_paid, "Payment status toggled");
        Ok(is_paid)
    }

    /// Returns the open shift requests, earliest date first.
    pub fn open_shift_requests(&self) -> PayrollResult<Vec<ShiftRequest>> {
        let state = self.read()?;
        let mut requests: Vec<ShiftRequest> = state
            .shift_requests
            .iter()
            .filter(|(_, shift)| shift.status == ShiftStatus::Open)
            .filter_map(|(id, shift)| {
                state
                    .employees
                    .get(&shift.requester_id)
                    .map(|requester| ShiftRequest {
                        id: *id,
                        requester_id: shift.requester_id,
                        requester_name: requester.name.clone(),
                        date: shift.date,
                        taker_id: shift.taker_id,
                        status: shift.status,
                    })
            })
            .collect();

        requests.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(requests)
    }

    /// Posts a shift the session's employee needs covered.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::NotAnEmployee`] if the session has no employee
    /// - [`PayrollError::EmployeeNotFound`] if that employee no longer exists
    pub fn post_shift_request(&self, session: &Session, date: NaiveDate) -> PayrollResult<ShiftPosted> {
        let requester_id = session.require_employee()?;
        let mut state = self.write()?;
        state.employee(requester_id)?;

        let id = state.allocate_shift_id();
        state.shift_requests.insert(
            id,
            StoredShift {
                requester_id,
                date,
                taker_id: None,
                status: ShiftStatus::Open,
            },
        );

        info!(request_id = id, requester_id, %date, "Shift request posted");

        Ok(ShiftPosted {
            id,
            team_message: cover_request_message(date),
        })
    }

    /// Takes an open shift on behalf of the session's employee.
    ///
    /// Marks the request taken and logs the default shift length for the
    /// taker on that date, in one step.
    ///
    /// # Errors
    ///
    /// - [`PayrollError::NotAnEmployee`] if the session has no employee
    /// - [`PayrollError::ShiftUnavailable`] if the request is taken or missing
    /// - [`PayrollError::OwnShiftRequest`] if the taker posted the request
    pub fn take_shift(&self, session: &Session, request_id: i64) -> PayrollResult<ShiftTaken> {
        let taker_id = session.require_employee()?;
        let mut state = self.write()?;
        let taker_name = state.employee(taker_id)?.name.clone();

        let (requester_id, date) = match state.shift_requests.get(&request_id) {
            Some(shift) if shift.status == ShiftStatus::Open => (shift.requester_id, shift.date),
            _ => return Err(PayrollError::ShiftUnavailable { request_id }),
        };
        if requester_id == taker_id {
            return Err(PayrollError::OwnShiftRequest { request_id });
        }

        let log_id = state.insert_log(
            taker_id,
            &date.format("%Y-%m-%d").to_string(),
            self.default_shift_hours,
        )?;

        if let Some(shift) = state.shift_requests.get_mut(&request_id) {
            shift.status = ShiftStatus::Taken;
            shift.taker_id = Some(taker_id);
        }

        info!(request_id, taker_id, log_id, "Shift taken");

        Ok(ShiftTaken {
            work_log_id: LogId::Number(log_id),
            message: shift_taken_message(&taker_name, date),
        })
    }
}

impl LogStore for InMemoryStore {
    fn work_logs(&self) -> PayrollResult<Vec<WorkLogEntry>> {
        let state = self.read()?;
        let mut logs: Vec<(i64, NaiveDate, WorkLogEntry)> = state
            .work_logs
            .iter()
            .filter_map(|(id, log)| {
                state.employees.get(&log.employee_id).map(|employee| {
                    (
                        *id,
                        log.date,
                        WorkLogEntry {
                            id: LogId::Number(*id),
                            employee_id: log.employee_id,
                            employee_name: employee.name.clone(),
                            date: log.date.format("%Y-%m-%d").to_string(),
                            hours: log.hours,
                            is_paid: log.is_paid,
                            notes: log.notes.clone(),
                        },
                    )
                })
            })
            .collect();

        logs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        Ok(logs.into_iter().map(|(_, _, entry)| entry).collect())
    }

    fn batch_pay(&self, request: &BatchPayRequest) -> PayrollResult<BatchPayConfirmation> {
        if request.log_ids.is_empty() {
            return Err(PayrollError::EmptyBatch);
        }

        let mut state = self.write()?;

        // Resolve every ID before touching anything.
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(request.log_ids.len());
        for log_id in &request.log_ids {
            if !seen.insert(log_id) {
                continue;
            }
            match log_id {
                LogId::Number(id) if state.work_logs.contains_key(id) => targets.push(*id),
                _ => {
                    return Err(PayrollError::LogNotFound {
                        log_id: log_id.to_string(),
                    });
                }
            }
        }

        let mut names = BTreeSet::new();
        for id in &targets {
            if let Some(log) = state.work_logs.get_mut(id) {
                log.is_paid = true;
                let employee_id = log.employee_id;
                if let Some(employee) = state.employees.get(&employee_id) {
                    names.insert(employee.name.clone());
                }
            }
        }

        let employees: Vec<String> = names.into_iter().collect();
        let count = targets.len();
        info!(count, employees = ?employees, "Batch pay applied");

        Ok(BatchPayConfirmation {
            message: batch_pay_summary(count),
            count,
            notification: pay_notification(&employees),
            employees,
        })
    }
}
