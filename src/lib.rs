//! Payroll and attendance engine for a small-office salary register.
//!
//! This crate tracks employees and their daily attendance codes across a
//! month and computes gross/net salary with ESI, PF, and flat deductions.
//! The pure calculation core lives in [`calculation`], the record stores
//! in [`store`], and the HTTP surface in [`api`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod store;
