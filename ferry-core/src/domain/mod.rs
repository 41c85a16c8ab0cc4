//! Remote domain records
//!
//! Shapes of the externally-owned records the copier works with. Every
//! record is fetched fresh per run and held only for the duration of the
//! workflow; nothing here is persisted locally.

pub mod pipeline;
pub mod resource;
pub mod toolchain;
