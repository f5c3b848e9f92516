//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Row structs keep status/kind columns as `String` (the TEXT the store
//! holds); the `wird-core` enums validate and interpret them.

pub mod achievement;
pub mod activity;
pub mod competition;
pub mod review_schedule;
