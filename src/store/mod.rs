//! Persistence for employees, work logs and shift requests.
//!
//! The payroll service only depends on the [`LogStore`] trait. The
//! [`InMemoryStore`] implements it and also carries the directory, session
//! and shift-swap operations the HTTP layer exposes.

mod memory;
mod traits;

pub use memory::InMemoryStore;
pub use traits::LogStore;
