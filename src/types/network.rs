//! Network-related types.

use serde::{Deserialize, Serialize};

/// Presentation of the network a provider is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Chain id (`0` when the node reported something non-numeric).
    pub id: u64,
    /// Human-readable network name.
    pub name: String,
}
