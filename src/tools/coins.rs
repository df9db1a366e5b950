//! Coin tools.
//!
//! Tools: get-coins, get-coin-by-id, get-coin-chart-by-id, get-coin-avg-price,
//!        get-coin-exchange-price

use crate::endpoint::EndpointDescriptor;
use crate::params::Param;
use crate::tools::{currency, limit, page};
use crate::translate::COIN_LIST_PATH;

/// Range filters on the coin listing, declared as `field-op`.
const LIST_FILTERS: &[(&str, &str)] = &[
    ("marketCap-greaterThan", "Marketcap Greater Than"),
    ("marketCap-equals", "Marketcap Equals"),
    ("marketCap-lessThan", "Marketcap Less Than"),
    ("fullyDilutedValuation-greaterThan", "Fully Diluted Valuation Greater Than"),
    ("fullyDilutedValuation-equals", "Fully Diluted Valuation Equals"),
    ("fullyDilutedValuation-lessThan", "Fully Diluted Valuation Less Than"),
    ("volume-greaterThan", "Volume Greater Than"),
    ("volume-equals", "Volume Equals"),
    ("volume-lessThan", "Volume Less Than"),
    ("priceChange1h-greaterThan", "Price Change 1h Greater Than"),
    ("priceChange1h-equals", "Price Change 1h Equals"),
    ("priceChange1h-lessThan", "Price Change 1h Less Than"),
    ("priceChange1d-greaterThan", "Price Change 1d Greater Than"),
    ("priceChange1d-equals", "Price Change 1d Equals"),
    ("priceChange1d-lessThan", "Price Change 1d Less Than"),
    ("priceChange7d-greaterThan", "Price Change 7d Greater Than"),
    ("priceChange7d-equals", "Price Change 7d Equals"),
    ("priceChange7d-lessThan", "Price Change 7d Less Than"),
    ("availableSupply-greaterThan", "Available Supply Greater Than"),
    ("availableSupply-equals", "Available Supply Equals"),
    ("availableSupply-lessThan", "Available Supply Less Than"),
    ("totalSupply-greaterThan", "Total Supply Greater Than"),
    ("totalSupply-equals", "Total Supply Equals"),
    ("totalSupply-lessThan", "Total Supply Less Than"),
    ("rank-greaterThan", "Rank Greater Than"),
    ("rank-equals", "Rank Equals"),
    ("rank-lessThan", "Rank Less Than"),
    ("price-greaterThan", "Price Greater Than"),
    ("price-equals", "Price Equals"),
    ("price-lessThan", "Price Less Than"),
    ("riskScore-greaterThan", "Risk Score Greater Than (Only if includeRiskScore=true)"),
    ("riskScore-equals", "Risk Score Equals (Only if includeRiskScore=true)"),
    ("riskScore-lessThan", "Risk Score Less Than (Only if includeRiskScore=true)"),
];

const COIN_ID: &str = "The identifier of coin, which you received from /coins call response.";

fn coin_list_params() -> Vec<Param> {
    let mut params = vec![
        Param::string("name", "Search coins by name"),
        page(),
        limit(),
        currency(),
        Param::string("symbol", "Get coins by symbol"),
        Param::string(
            "blockchains",
            "Blockchain filters, separated by commas (e.g., ethereum,solana)",
        ),
        Param::string(
            "includeRiskScore",
            "Include risk score: true or false. Default - false",
        ),
        Param::string(
            "categories",
            "Category filters, separated by commas (e.g., memecoins,sports)",
        ),
        Param::string("sortBy", "Field to sort by"),
        Param::string("sortDir", "Sort direction").choices(&["asc", "desc"]),
    ];
    params.extend(
        LIST_FILTERS
            .iter()
            .map(|&(name, description)| Param::number(name, description)),
    );
    params
}

/// Get all coin tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-coins",
            "Get comprehensive data about all cryptocurrencies: Price, market cap, and volume. \
             Price changes (1h, 24h, 7d). Supply information. Trading metrics. Social links and metadata.",
            COIN_LIST_PATH,
            coin_list_params(),
        )
        .empty_message("No data found"),
        EndpointDescriptor::remote(
            "get-coin-by-id",
            "Get detailed information about a specific cryptocurrency based on its unique identifier.",
            "/coins/{coinId}",
            vec![Param::string("coinId", COIN_ID).required(), currency()],
        ),
        EndpointDescriptor::remote(
            "get-coin-chart-by-id",
            "Get chart data for a specific cryptocurrency based on its unique identifier, \
             specifying different time ranges.",
            "/coins/{coinId}/charts",
            vec![
                Param::string("coinId", COIN_ID).required(),
                Param::string("period", "Time period for chart data")
                    .choices(&["all", "24h", "1w", "1m", "3m", "6m", "1y"])
                    .required(),
            ],
        ),
        EndpointDescriptor::remote(
            "get-coin-avg-price",
            "Get the historical average price for a specific cryptocurrency based on its unique \
             identifier and a specific date.",
            "/coins/price/avg",
            vec![
                Param::string("coinId", "The identifier of coin").required(),
                Param::number("timestamp", "Unix timestamp").required(),
            ],
        ),
        EndpointDescriptor::remote(
            "get-coin-exchange-price",
            "Get the historical price data for a specific cryptocurrency on a particular exchange.",
            "/coins/price/exchange",
            vec![
                Param::string("exchange", "Exchange name").required(),
                Param::string("from", "From currency/coin symbol").required(),
                Param::string("to", "To currency/coin symbol").required(),
                Param::number("timestamp", "Unix timestamp").required(),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_filters_follow_naming_convention() {
        assert_eq!(LIST_FILTERS.len(), 33);
        for (name, _) in LIST_FILTERS {
            let (field, op) = name.split_once('-').unwrap();
            assert!(!field.is_empty());
            assert!(["greaterThan", "equals", "lessThan"].contains(&op), "{}", name);
        }
    }

    #[test]
    fn test_coin_list_has_no_required_params() {
        assert!(coin_list_params().iter().all(|p| !p.required));
    }
}
