//! Unit tests for the REST link index provider

use mockito::{Matcher, Server};
use olc_domain::value_objects::{BacklinkQuery, BacklinkTriple};
use olc_providers::link_index::{link_index_query_uri, parse_links};
use olc_providers::{LinkIndexProvider, RestLinkIndexProvider};
use serde_json::json;

use crate::test_utils::{BASIC_AUTH, http_client};

const TERM: &str = "http://open-services.net/ns/cm#relatedTestCase";

#[test]
fn test_query_uri_uses_first_path_segment() {
    assert_eq!(
        link_index_query_uri("https://clm.example.com:9443/qm/oslc_qm/contexts/_p/resources/TestCase/_tc"),
        Some("https://clm.example.com:9443/qm/linkIndex/query?Accept=text/json".to_string())
    );
    assert_eq!(
        link_index_query_uri("https://rm.example.com/rm/resources/_req1"),
        Some("https://rm.example.com/rm/linkIndex/query?Accept=text/json".to_string())
    );
}

#[test]
fn test_query_uri_for_application_root() {
    let expected = Some("https://qm.example.com:9443/qm/linkIndex/query?Accept=text/json".to_string());
    assert_eq!(link_index_query_uri("https://qm.example.com:9443/qm"), expected);
    assert_eq!(link_index_query_uri("https://qm.example.com:9443/qm/"), expected);
}

#[test]
fn test_query_uri_drops_target_query_string() {
    assert_eq!(
        link_index_query_uri("https://qm.example.com:9443/qm/resources/_tc?x=1#frag"),
        Some("https://qm.example.com:9443/qm/linkIndex/query?Accept=text/json".to_string())
    );
}

#[test]
fn test_query_uri_requires_application_segment() {
    assert_eq!(link_index_query_uri("https://clm.example.com/"), None);
    assert_eq!(link_index_query_uri("https://clm.example.com"), None);
    assert_eq!(link_index_query_uri("not a uri"), None);
}

#[test]
fn test_parse_links_keeps_response_order() {
    let body = json!({
        "links": [
            {"sourceURL": "s1", "linkType": TERM, "targetURL": "t1"},
            {"sourceURL": "s2", "linkType": TERM, "targetURL": "t2", "extra": 1}
        ]
    });
    assert_eq!(
        parse_links(&body),
        vec![
            BacklinkTriple::new("s1", TERM, "t1"),
            BacklinkTriple::new("s2", TERM, "t2"),
        ]
    );
}

#[test]
fn test_parse_links_is_lenient() {
    assert!(parse_links(&json!({})).is_empty());
    assert!(parse_links(&json!({"links": "nope"})).is_empty());
    assert_eq!(
        parse_links(&json!({"links": [{"sourceURL": "s1"}, {"sourceURL": "s", "linkType": "l", "targetURL": "t"}]})),
        vec![BacklinkTriple::new("s", "l", "t")]
    );
}

#[tokio::test]
async fn test_query_posts_json_body_with_headers() {
    let mut server = Server::new_async().await;
    let target = format!("{}/qm/resources/TestCase/_tc1", server.url());
    let source = "https://ccm.example.com/ccm/resource/itemName/com.ibm.team.workitem.WorkItem/123";
    let mock = server
        .mock("POST", "/qm/linkIndex/query")
        .match_query(Matcher::UrlEncoded("Accept".into(), "text/json".into()))
        .match_header("authorization", BASIC_AUTH)
        .match_header("accept", "application/rdf+xml")
        .match_header("pragma", "no-cache")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "targetURLs": [target],
            "linkTypes": [TERM],
            "gcURL": "cfg://42"
        })))
        .with_status(200)
        .with_body(
            json!({"links": [{"sourceURL": source, "linkType": TERM, "targetURL": target}]})
                .to_string(),
        )
        .create_async()
        .await;

    let provider = RestLinkIndexProvider::new(http_client());
    let triples = provider
        .query_backlinks(&BacklinkQuery::new(&target, TERM, Some("cfg://42")))
        .await
        .unwrap();

    assert_eq!(triples, vec![BacklinkTriple::new(source, TERM, &target)]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_response_yields_no_triples() {
    let mut server = Server::new_async().await;
    let target = format!("{}/rm/resources/_req1", server.url());
    let _mock = server
        .mock("POST", "/rm/linkIndex/query")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<rdf:RDF/>")
        .create_async()
        .await;

    let provider = RestLinkIndexProvider::new(http_client());
    let triples = provider
        .query_backlinks(&BacklinkQuery::new(&target, TERM, None))
        .await
        .unwrap();

    assert!(triples.is_empty());
}

#[tokio::test]
async fn test_target_without_index_is_not_queried() {
    let provider = RestLinkIndexProvider::new(http_client());
    let triples = provider
        .query_backlinks(&BacklinkQuery::new("https://clm.example.com/", TERM, None))
        .await
        .unwrap();
    assert!(triples.is_empty());
}

#[tokio::test]
async fn test_unauthorized_is_fatal_and_server_error_is_not() {
    let mut server = Server::new_async().await;
    let _denied = server
        .mock("POST", "/qm/linkIndex/query")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;
    let _failing = server
        .mock("POST", "/rm/linkIndex/query")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let provider = RestLinkIndexProvider::new(http_client());
    let denied = provider
        .query_backlinks(&BacklinkQuery::new(
            &format!("{}/qm/resources/TestCase/_tc1", server.url()),
            TERM,
            None,
        ))
        .await
        .unwrap_err();
    assert!(denied.is_fatal());

    let failing = provider
        .query_backlinks(&BacklinkQuery::new(
            &format!("{}/rm/resources/_req1", server.url()),
            TERM,
            None,
        ))
        .await
        .unwrap_err();
    assert!(!failing.is_fatal());
}
