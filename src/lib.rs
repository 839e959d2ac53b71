//! divvy - expense splitting for groups from the command line
//!
//! This library provides the core functionality for the divvy CLI. It tracks
//! shared expenses within groups, splits them equally, by custom amounts, or
//! by percentages, and computes who owes whom. All monetary arithmetic is done
//! in integer cents, so balances always reconcile to zero.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (groups, participants, expenses, settlements)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (split calculator, balance engine, entity services)
//! - `reports`: Group summary statistics
//! - `display`: Terminal output formatting
//! - `export`: Text and CSV summary export
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::DivvyError;
