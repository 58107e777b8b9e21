//! stdlib-tour library
//!
//! Three independent demonstrations: a fire-and-forget worker launcher,
//! URL defragmentation, and SQLite queries filtered by a regex user function.

pub mod config;
pub mod db;
pub mod defrag;
pub mod error;
pub mod launcher;

pub use error::{Result, TourError};
