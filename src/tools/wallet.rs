//! Wallet tools.
//!
//! Tools: get-blockchains, get-wallet-balance, get-wallet-balances,
//!        get-wallet-sync-status, get-wallet-transactions, transactions-sync

use crate::endpoint::{EndpointDescriptor, HttpMethod};
use crate::params::Param;
use crate::tools::{currency, limit, page};

const CONNECTION_ID: &str =
    "The identifier of connection, which you received from /wallet/blockchains call response.";

fn address() -> Param {
    Param::string("address", "Wallet address").required()
}

fn connection_id() -> Param {
    Param::string("connectionId", CONNECTION_ID).required()
}

/// Get all wallet tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-blockchains",
            "Get a list of supported blockchains by CoinStats.",
            "/wallet/blockchains",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-wallet-balance",
            "Get the balance data for a provided wallet address on a specific blockchain network.",
            "/wallet/balance",
            vec![address(), connection_id()],
        ),
        EndpointDescriptor::remote(
            "get-wallet-balances",
            "Get the balance data for a provided wallet address on all CoinStats supported networks.",
            "/wallet/balances",
            vec![
                Param::string(
                    "address",
                    "The wallet address for which the balance is being queried",
                )
                .required(),
                Param::string(
                    "networks",
                    "Blockchain networks to query, comma-separated (e.g., \"ethereum,polygon,binance\")",
                )
                .default("all"),
            ],
        ),
        EndpointDescriptor::remote(
            "get-wallet-sync-status",
            "Get the syncing status of the wallet with the blockchain network.",
            "/wallet/status",
            vec![address(), connection_id()],
        ),
        EndpointDescriptor::remote(
            "get-wallet-transactions",
            "Get transaction data for a specific wallet. Ensure transactions are synced by \
             calling PATCH /transactions first.",
            "/wallet/transactions",
            vec![
                address(),
                connection_id(),
                page(),
                limit(),
                Param::string("from", "Start date in ISO 8601 format"),
                Param::string("to", "End date in ISO 8601 format"),
                currency(),
                Param::string(
                    "types",
                    "Transaction types, comma separated (deposit,withdraw,approve,executed,balance,fee)",
                ),
                Param::string("txId", "To search with transaction hash"),
            ],
        ),
        EndpointDescriptor::remote(
            "transactions-sync",
            "Initiate the syncing process to update transaction data for a specific wallet.",
            "/wallet/transactions",
            vec![address(), connection_id()],
        )
        .method(HttpMethod::Patch),
    ]
}
