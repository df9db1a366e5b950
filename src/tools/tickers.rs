//! Ticker tools.
//!
//! Tools: get-ticker-exchanges, get-ticker-markets

use crate::endpoint::EndpointDescriptor;
use crate::params::Param;
use crate::tools::{limit, page};

/// Get all ticker tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-ticker-exchanges",
            "Get a list of supported exchanges.",
            "/tickers/exchanges",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-ticker-markets",
            "Get a list of tickers for a specific cryptocurrency across different exchanges.",
            "/tickers/markets",
            vec![
                page(),
                limit(),
                Param::string("exchange", "Exchange name"),
                Param::string("fromCoin", "From currency/coin symbol"),
                Param::string("toCoin", "To currency/coin symbol"),
                Param::string("coinId", "Coin identifier"),
                Param::boolean("onlyVerified", "Filter only verified exchanges"),
            ],
        ),
    ]
}
