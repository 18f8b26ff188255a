//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Multi-table writes run inside a single transaction.

pub mod errors;
pub mod domain;
pub mod auth;
pub mod user_service;
pub mod api_service;
pub mod dashboard_service;
#[cfg(test)]
pub mod test_support;
