//! News tools.
//!
//! Tools: get-news-sources, get-news, get-news-by-type, get-news-by-id

use crate::endpoint::EndpointDescriptor;
use crate::params::Param;
use crate::tools::{limit, page};

/// Get all news tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::remote(
            "get-news-sources",
            "Get news sources.",
            "/news/sources",
            vec![],
        ),
        EndpointDescriptor::remote(
            "get-news",
            "Get news articles with pagination.",
            "/news",
            vec![
                page(),
                limit(),
                Param::string("from", "Start date in ISO 8601 format"),
                Param::string("to", "End date in ISO 8601 format"),
            ],
        ),
        EndpointDescriptor::remote(
            "get-news-by-type",
            "Get news articles based on a type.",
            "/news/type/{type}",
            vec![
                Param::string("type", "News type")
                    .choices(&["handpicked", "trending", "latest", "bullish", "bearish"])
                    .required(),
                page(),
                limit(),
            ],
        ),
        EndpointDescriptor::remote(
            "get-news-by-id",
            "Get news by id.",
            "/news/{id}",
            vec![Param::string("id", "News article ID").required()],
        ),
    ]
}
