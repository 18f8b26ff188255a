//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Password hashing lives here too so that user creation and login share one
//! argon2 configuration.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
