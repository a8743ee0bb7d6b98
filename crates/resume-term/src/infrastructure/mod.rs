//! Infrastructure layer providing external integrations.
//!
//! This module contains the résumé sources: GitHub gists and local files.

pub mod sources;
