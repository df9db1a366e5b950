//! Exchange portfolio tools.
//!
//! Tools: get-exchanges, get-exchange-balance, get-exchange-sync-status,
//!        get-exchange-transactions

use crate::endpoint::{EndpointDescriptor, HttpMethod};
use crate::params::Param;
use crate::tools::{currency, limit, page};

/// Get all exchange tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-exchanges",
            "Get a list of supported exchange portfolio connections by CoinStats.",
            "/exchange/support",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-exchange-balance",
            "Get the balance data for a provided Exchange.",
            "/exchange/balance",
            vec![
                Param::object(
                    "connectionFields",
                    "The credentials given from exchange. key, secret etc.",
                )
                .required(),
                Param::string("connectionId", "The exchange connection id").required(),
            ],
        )
        .method(HttpMethod::Post),
        EndpointDescriptor::remote(
            "get-exchange-sync-status",
            "Get the syncing status of the exchange portfolio.",
            "/exchange/status",
            vec![Param::string(
                "portfolioId",
                "The identifier of portfolio, which you received from /exchange/balance call response.",
            )
            .required()],
        ),
        EndpointDescriptor::remote(
            "get-exchange-transactions",
            "Get transaction data for a specific exchange.",
            "/exchange/transactions",
            vec![
                Param::string(
                    "portfolioId",
                    "The identifier of portfolio, which you received from /exchange/balance response.",
                )
                .required(),
                page(),
                limit(),
                Param::string("from", "Start date in ISO 8601 format"),
                Param::string("to", "End date in ISO 8601 format"),
                currency(),
                Param::string(
                    "types",
                    "Transaction types, comma separated (deposit,withdraw,approve,executed,balance,fee)",
                ),
            ],
        ),
    ]
}
