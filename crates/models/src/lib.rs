//! SeaORM entities for users, their APIs and dashboards.
//!
//! Entity graph: `users` 1─n `apis` 1─n `parameters`, `users` 1─n
//! `dashboards`, and `dashboards` n─m `apis` through `dashboard_panes`.
//! Every foreign key cascades on delete.

pub mod errors;
pub mod db;
pub mod user;
pub mod api;
pub mod parameter;
pub mod dashboard;
pub mod dashboard_pane;

#[cfg(test)]
mod tests;
