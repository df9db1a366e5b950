//! Portfolio tools.
//!
//! Tools: get-portfolio-coins, get-portfolio-chart, get-portfolio-transactions,
//!        add-portfolio-transaction
//!
//! Reads can be scoped to a shared portfolio with `shareToken`.

use crate::endpoint::{EndpointDescriptor, HttpMethod};
use crate::params::Param;
use crate::tools::{limit, page};

const SHARE_TOKEN: &str = "Portfolio share token. You can get your share token from the portfolio \
     you want to retrive data from by clicking Share button on CoinStats web app portfolio \
     tracker section - top right.";

fn share_token() -> Param {
    Param::string("shareToken", SHARE_TOKEN)
}

/// Get all portfolio tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-portfolio-coins",
            "Get a list of portfolio coins with P/L and other data displayed on CoinStats web.",
            "/portfolio/coins",
            vec![
                share_token(),
                page(),
                limit(),
                Param::string(
                    "includeRiskScore",
                    "Include risk score: true or false. Default - false",
                ),
            ],
        ),
        EndpointDescriptor::remote(
            "get-portfolio-chart",
            "Get portfolio performance chart data.",
            "/portfolio/chart",
            vec![
                share_token(),
                Param::string("type", "One of 24h, 1w, 1m, 3m, 6m, 1y, all").required(),
            ],
        ),
        EndpointDescriptor::remote(
            "get-portfolio-transactions",
            "Get a list of portfolio transactions.",
            "/portfolio/transactions",
            vec![
                share_token(),
                page(),
                limit(),
                Param::string("currency", "Currency for price data").required(),
                Param::string("coinId", "Filter by coin ID"),
            ],
        ),
        EndpointDescriptor::remote(
            "add-portfolio-transaction",
            "Add a transaction to a manual portfolio.",
            "/portfolio/transaction",
            vec![
                Param::string("shareToken", "Portfolio share token"),
                Param::string("coinId", "Coin ID").required(),
                Param::string("type", "Transaction type").required(),
                Param::string("date", "Transaction date in ISO format").required(),
                Param::number("amount", "Transaction amount").required(),
                Param::number("price", "Price per coin").required(),
                Param::number("fee", "Transaction fee"),
                Param::string("notes", "Transaction notes"),
            ],
        )
        .method(HttpMethod::Post),
    ]
}
