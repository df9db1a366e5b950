//! Request translation.
//!
//! Turns a remote endpoint plus call arguments into a concrete HTTP request:
//! path placeholders are substituted, and the remaining arguments are placed in
//! the query string or the JSON body depending on the method.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Value as JsonValue};
use url::Url;

use crate::convert::{path_segment, query_value};
use crate::endpoint::{HttpMethod, RemoteEndpoint};
use crate::error::{McpError, Result};

/// Path of the coin listing, whose filter names use `~` on the wire.
pub const COIN_LIST_PATH: &str = "/coins";

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    /// Base URL joined with the substituted path, without query.
    pub endpoint: Url,
    /// HTTP method.
    pub method: HttpMethod,
    /// Query parameters, empty for body methods.
    pub query: Vec<(String, String)>,
    /// JSON body, present only for body methods.
    pub body: Option<Map<String, JsonValue>>,
}

impl ResolvedRequest {
    /// Final absolute URL including the encoded query string.
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        url
    }
}

/// Characters escaped in a substituted path value. Everything outside the
/// unreserved set is encoded, so a value always stays one segment.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Placeholder names in a path template, in order of first appearance.
fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else { break };
        let name = &after[..end];
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
        rest = &after[end + 1..];
    }
    names
}

/// Encode one path value. Dot segments cannot be expressed safely, since URL
/// parsing resolves them even when percent-encoded.
fn encode_segment(name: &str, value: &str) -> Result<String> {
    if value == "." || value == ".." {
        return Err(McpError::InvalidUrl {
            url: value.to_string(),
            reason: format!("path parameter '{}' cannot be a dot segment", name),
        });
    }
    Ok(utf8_percent_encode(value, PATH_VALUE).to_string())
}

/// Substitute every `{name}` in `template` in a single pass over the template.
fn substitute(template: &str, args: &Map<String, JsonValue>) -> Result<String> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else { break };
        let name = &after[..end];
        path.push_str(&rest[..start]);
        if name.is_empty() {
            path.push_str("{}");
        } else {
            let value = args
                .get(name)
                .and_then(path_segment)
                .ok_or_else(|| McpError::MissingPathParameter(name.to_string()))?;
            path.push_str(&encode_segment(name, &value)?);
        }
        rest = &after[end + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

/// Build the outbound request for `endpoint`.
///
/// `base_url` is used unless the endpoint carries its own. Fails with
/// [`McpError::MissingPathParameter`] before anything is sent when a placeholder
/// has no value. Path values are percent-encoded and cannot leave their segment.
pub fn translate(
    endpoint: &RemoteEndpoint,
    base_url: &str,
    mut args: Map<String, JsonValue>,
) -> Result<ResolvedRequest> {
    let path = substitute(endpoint.path, &args)?;
    for name in placeholders(endpoint.path) {
        args.remove(name);
    }

    // The remote filter syntax is `field~op`, but `~` cannot appear in declared
    // parameter names, so the listing declares `field-op` instead.
    if endpoint.path == COIN_LIST_PATH {
        args = args
            .into_iter()
            .map(|(key, value)| (key.replace('-', "~"), value))
            .collect();
    }

    let base = endpoint
        .base_url
        .as_deref()
        .unwrap_or(base_url)
        .trim_end_matches('/');
    let raw = format!("{}{}", base, path);
    let url = Url::parse(&raw).map_err(|e| McpError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let (query, body) = if endpoint.method.carries_body() {
        (Vec::new(), Some(args))
    } else {
        let mut query: Vec<(String, String)> = args
            .iter()
            .filter_map(|(key, value)| query_value(value).map(|v| (key.clone(), v)))
            .collect();
        query.sort();
        (query, None)
    };

    Ok(ResolvedRequest {
        endpoint: url,
        method: endpoint.method,
        query,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://api.example.com";

    fn remote(path: &'static str, method: HttpMethod) -> RemoteEndpoint {
        RemoteEndpoint {
            path,
            method,
            base_url: None,
            empty_message: None,
        }
    }

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("/coins"), Vec::<&str>::new());
        assert_eq!(placeholders("/coins/{coinId}/charts"), vec!["coinId"]);
        assert_eq!(placeholders("/{a}/{b}/{a}"), vec!["a", "b"]);
        assert_eq!(placeholders("/broken/{open"), Vec::<&str>::new());
    }

    #[test]
    fn test_coin_by_id() {
        let req = translate(
            &remote("/coins/{coinId}", HttpMethod::Get),
            BASE,
            args(json!({"coinId": "bitcoin", "currency": "USD"})),
        )
        .unwrap();

        assert_eq!(req.url().as_str(), "https://api.example.com/coins/bitcoin?currency=USD");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_add_portfolio_transaction_uses_body() {
        let req = translate(
            &remote("/portfolio/transaction", HttpMethod::Post),
            BASE,
            args(json!({
                "coinId": "bitcoin",
                "type": "buy",
                "date": "2024-01-01",
                "amount": 1,
                "price": 50000
            })),
        )
        .unwrap();

        assert_eq!(req.url().as_str(), "https://api.example.com/portfolio/transaction");
        assert_eq!(req.method, HttpMethod::Post);
        assert!(req.query.is_empty());
        let body = req.body.unwrap();
        assert_eq!(body.len(), 5);
        assert_eq!(body["coinId"], json!("bitcoin"));
        assert_eq!(body["type"], json!("buy"));
        assert_eq!(body["date"], json!("2024-01-01"));
        assert_eq!(body["amount"], json!(1));
        assert_eq!(body["price"], json!(50000));
    }

    #[test]
    fn test_missing_path_parameter() {
        let err = translate(
            &remote("/news/{id}", HttpMethod::Get),
            BASE,
            args(json!({"other": "x"})),
        )
        .unwrap_err();
        assert!(matches!(err, McpError::MissingPathParameter(ref n) if n == "id"));
    }

    #[test]
    fn test_null_path_value_is_missing() {
        let err = translate(
            &remote("/news/{id}", HttpMethod::Get),
            BASE,
            args(json!({"id": null})),
        )
        .unwrap_err();
        assert!(matches!(err, McpError::MissingPathParameter(_)));
    }

    #[test]
    fn test_repeated_placeholder_substituted_everywhere() {
        let req = translate(
            &remote("/a/{x}/b/{x}", HttpMethod::Get),
            BASE,
            args(json!({"x": 7})),
        )
        .unwrap();
        assert_eq!(req.url().as_str(), "https://api.example.com/a/7/b/7");
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_coin_list_filters_use_tilde() {
        let req = translate(
            &remote(COIN_LIST_PATH, HttpMethod::Get),
            BASE,
            args(json!({"marketCap-greaterThan": 1000, "limit": 20})),
        )
        .unwrap();

        assert!(req
            .query
            .contains(&("marketCap~greaterThan".to_string(), "1000".to_string())));
        assert!(!req.query.iter().any(|(k, _)| k.contains('-')));
    }

    #[test]
    fn test_other_endpoints_keep_hyphens() {
        let req = translate(
            &remote("/tickers/markets", HttpMethod::Get),
            BASE,
            args(json!({"field-greaterThan": 5})),
        )
        .unwrap();
        assert_eq!(req.query, vec![("field-greaterThan".to_string(), "5".to_string())]);

        let req = translate(
            &remote("/coins/{coinId}", HttpMethod::Get),
            BASE,
            args(json!({"coinId": "btc", "field-greaterThan": 5})),
        )
        .unwrap();
        assert_eq!(req.query, vec![("field-greaterThan".to_string(), "5".to_string())]);
    }

    #[test]
    fn test_body_methods_leave_query_empty() {
        for method in [
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Patch,
            HttpMethod::Delete,
        ] {
            let req = translate(
                &remote("/wallet/transactions", method),
                BASE,
                args(json!({"address": "0xabc", "connectionId": "ethereum"})),
            )
            .unwrap();
            assert!(req.query.is_empty(), "{} should not use the query", method);
            assert_eq!(req.body.as_ref().map(|b| b.len()), Some(2));
            assert_eq!(req.url().query(), None);
        }
    }

    #[test]
    fn test_body_method_without_args_sends_empty_object() {
        let req = translate(&remote("/exchange/balance", HttpMethod::Post), BASE, Map::new())
            .unwrap();
        assert_eq!(req.body, Some(Map::new()));
    }

    #[test]
    fn test_path_params_never_duplicated() {
        let req = translate(
            &remote("/coins/{coinId}/charts", HttpMethod::Get),
            BASE,
            args(json!({"coinId": "ethereum", "period": "24h"})),
        )
        .unwrap();
        assert_eq!(req.query, vec![("period".to_string(), "24h".to_string())]);
        assert_eq!(req.endpoint.path(), "/coins/ethereum/charts");
    }

    #[test]
    fn test_path_values_stay_in_their_segment() {
        let coin = |id: &str| {
            translate(
                &remote("/coins/{coinId}", HttpMethod::Get),
                BASE,
                args(json!({"coinId": id, "currency": "USD"})),
            )
        };

        let req = coin("a/b?c").unwrap();
        assert_eq!(req.endpoint.path(), "/coins/a%2Fb%3Fc");

        let req = coin("btc?x=1").unwrap();
        assert_eq!(req.url().as_str(), "https://api.example.com/coins/btc%3Fx%3D1?currency=USD");

        let req = coin("btc#frag").unwrap();
        assert_eq!(req.endpoint.path(), "/coins/btc%23frag");
        assert_eq!(req.url().fragment(), None);

        let req = coin("../wallet/balance").unwrap();
        assert_eq!(req.endpoint.path(), "/coins/..%2Fwallet%2Fbalance");

        let req = coin("usd-coin_v2.0~x").unwrap();
        assert_eq!(req.endpoint.path(), "/coins/usd-coin_v2.0~x");
    }

    #[test]
    fn test_dot_segment_values_rejected() {
        for id in [".", ".."] {
            let err = translate(
                &remote("/coins/{coinId}/charts", HttpMethod::Get),
                BASE,
                args(json!({"coinId": id, "period": "24h"})),
            )
            .unwrap_err();
            assert!(matches!(err, McpError::InvalidUrl { .. }));
            assert!(err.is_translation_failure());
        }
    }

    #[test]
    fn test_value_containing_placeholder_is_not_expanded() {
        let req = translate(
            &remote("/a/{x}/b/{y}", HttpMethod::Get),
            BASE,
            args(json!({"x": "{y}", "y": "z"})),
        )
        .unwrap();
        assert_eq!(req.endpoint.path(), "/a/%7By%7D/b/z");
    }

    #[test]
    fn test_query_sorted_by_key() {
        let req = translate(
            &remote("/news", HttpMethod::Get),
            BASE,
            args(json!({"page": 1, "from": "x", "limit": 20})),
        )
        .unwrap();
        let keys: Vec<&str> = req.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["from", "limit", "page"]);
    }

    #[test]
    fn test_endpoint_base_override() {
        let mut endpoint = remote("/markets", HttpMethod::Get);
        endpoint.base_url = Some("http://other.example/".to_string());
        let req = translate(&endpoint, BASE, Map::new()).unwrap();
        assert_eq!(req.url().as_str(), "http://other.example/markets");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = translate(&remote("/markets", HttpMethod::Get), "not a url", Map::new())
            .unwrap_err();
        assert!(matches!(err, McpError::InvalidUrl { .. }));
        assert!(err.is_translation_failure());
    }
}
