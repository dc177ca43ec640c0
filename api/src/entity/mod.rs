//! Entity module for database models

pub mod categories;
pub mod notes;
