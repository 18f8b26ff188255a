use serde::Serialize;

/// Body of `GET /health`.
#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
    pub database: &'static str,
}

impl Health {
    pub fn ok() -> Self {
        Self { status: "ok", database: "ok" }
    }

    pub fn degraded() -> Self {
        Self { status: "degraded", database: "unavailable" }
    }
}
