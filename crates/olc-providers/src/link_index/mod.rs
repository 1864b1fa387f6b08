//! Link Index Adapters

pub mod rest;

pub use rest::{RestLinkIndexProvider, link_index_query_uri, parse_links};
