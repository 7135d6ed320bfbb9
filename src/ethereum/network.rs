//! Known public network lookup.

use super::constants::{KnownNetwork, KNOWN_NETWORKS};

/// Find a known network by name, alias or decimal chain id string.
///
/// Name matching is case-insensitive. Returns `None` for anything else,
/// including URLs.
pub fn lookup_network(selector: &str) -> Option<&'static KnownNetwork> {
    let selector = selector.trim();

    if let Ok(chain_id) = selector.parse::<u64>() {
        return network_by_chain_id(chain_id);
    }

    KNOWN_NETWORKS.iter().find(|network| {
        network.name.eq_ignore_ascii_case(selector)
            || network.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(selector))
    })
}

/// Find a known network by chain id.
pub fn network_by_chain_id(chain_id: u64) -> Option<&'static KnownNetwork> {
    KNOWN_NETWORKS.iter().find(|network| network.chain_id == chain_id)
}
