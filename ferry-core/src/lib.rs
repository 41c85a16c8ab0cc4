//! Ferry Core
//!
//! Core types for the ferry pipeline-configuration copier.
//!
//! This crate contains:
//! - Domain types: the remote records the copier reads (resource groups,
//!   toolchains, tools, pipeline definitions and properties)
//! - DTOs: request bodies and wire envelopes exchanged with the cloud services

pub mod domain;
pub mod dto;
