//! Resource group domain types

use serde::{Deserialize, Serialize};

/// An account-level grouping used to scope visibility of toolchains
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceGroup {
    pub id: String,
    pub name: String,
}
