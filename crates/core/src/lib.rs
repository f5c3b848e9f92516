//! Domain logic for the wird study-tracking engine.
//!
//! This crate has zero internal deps so it can be used by the repository
//! layer and any future worker or CLI tooling. Everything here is pure:
//! the streak walk, the spaced-review curve, the competition joinability
//! gate, and input validation. Persistence lives in `wird-db`.

pub mod activity;
pub mod competition;
pub mod error;
pub mod passage;
pub mod review;
pub mod streak;
pub mod types;
