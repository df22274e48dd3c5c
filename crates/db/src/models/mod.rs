//! Entity models mapped to database rows.

pub mod campaign;
pub mod phase;
pub mod theme;
