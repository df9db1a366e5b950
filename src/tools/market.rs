//! Market-wide reference data.
//!
//! Tools: get-fiat-currencies, get-market-cap, get-currencies

use crate::endpoint::EndpointDescriptor;

/// Get all market tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-fiat-currencies",
            "Get a list of fiat currencies supported by CoinStats.",
            "/fiats",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-market-cap",
            "Get global market data.",
            "/markets",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-currencies",
            "Get a list of fiat currencies supported by CoinStats.",
            "/currencies",
            vec![],
        ),
    ]
}
