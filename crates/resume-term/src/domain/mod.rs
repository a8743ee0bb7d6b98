//! Core domain logic for the résumé terminal.
//!
//! This module contains the session state machine, the command interpreter and the
//! résumé formatters, independent of the terminal backend or where the document comes from.

pub mod models;
pub mod services;
