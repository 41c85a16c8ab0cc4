//! Request and envelope shapes for the remote services
//!
//! These are the exact bodies sent to and unwrapped from the cloud
//! services; domain records never cross the wire directly on the write
//! path, so server-assigned fields cannot leak into create requests.

pub mod definition;
pub mod identity;
pub mod list;
pub mod property;
