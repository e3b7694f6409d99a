//! Weekly payroll engine for small teams.
//!
//! This crate groups hourly work logs into per-employee, Monday-starting
//! weeks, costs them at a flat hourly rate, and turns the unpaid part of a
//! week into an all-or-nothing batch pay request. Around that core it keeps
//! an employee directory, work logs and a shift-swap board, and serves them
//! over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
