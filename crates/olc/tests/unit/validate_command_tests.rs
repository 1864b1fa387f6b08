//! End-to-end tests of `validateoslclinks` against a mock ALM server
//!
//! One mockito server plays the work item repository (`/ccm`), the QM
//! application with its link index (`/qm`) and the link targets.

use std::io::Write;

use mockito::{Matcher, Mock, Server, ServerGuard};
use olc::ValidateArgs;
use olc::commands::validate::execute;
use olc_application::OperationResult;
use olc_domain::Error;
use olc_infrastructure::ConsoleReporter;
use olc_infrastructure::config::AppConfig;
use serde_json::json;
use tempfile::NamedTempFile;

const PROJECT_AREA: &str = "JKE Banking (Change Management)";
const QUERY: &str = "All Defects";
const RELATED_TEST_CASE: &str = "com.ibm.team.workitem.linktype.qm.relatedTestCase";
const TEST_CASE_TERM: &str = "http://open-services.net/ns/cm#relatedTestCase";

struct Alm {
    server: ServerGuard,
    password: NamedTempFile,
    mocks: Vec<Mock>,
}

impl Alm {
    async fn new() -> Self {
        let mut password = NamedTempFile::new().unwrap();
        writeln!(password, "secret").unwrap();
        Self {
            server: Server::new_async().await,
            password,
            mocks: Vec::new(),
        }
    }

    fn target(&self) -> String {
        format!("{}/qm/resources/TestCase/_tc1", self.server.url())
    }

    fn work_item_uri(&self, id: i64) -> String {
        format!(
            "{}/ccm/resource/itemName/com.ibm.team.workitem.WorkItem/{id}",
            self.server.url()
        )
    }

    fn args(&self) -> ValidateArgs {
        ValidateArgs {
            repository: format!("{}/ccm", self.server.url()),
            user: "alice".to_string(),
            password_file: self.password.path().to_path_buf(),
            project_area: PROJECT_AREA.to_string(),
            query: QUERY.to_string(),
            querysource: None,
            trace: false,
            debug: false,
            probe_failure: None,
        }
    }

    async fn get(&mut self, path: &str, query: Matcher, status: usize, body: serde_json::Value) {
        let mock = self
            .server
            .mock("GET", path)
            .match_query(query)
            .with_status(status)
            .with_body(body.to_string())
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    /// Project area plus a personal query returning `ids`
    async fn with_query(&mut self, ids: &[i64]) {
        self.get(
            "/ccm/api/project-areas",
            Matcher::Any,
            200,
            json!([{"itemId": "_pa1", "name": PROJECT_AREA}]),
        )
        .await;
        self.get(
            "/ccm/api/queries",
            Matcher::UrlEncoded("scope".into(), "personal".into()),
            200,
            json!([{"itemId": "_q1", "name": QUERY}]),
        )
        .await;
        let work_items: Vec<_> = ids
            .iter()
            .map(|id| json!({"id": id, "itemId": format!("_wi{id}")}))
            .collect();
        self.get(
            "/ccm/api/queries/_q1/results",
            Matcher::Any,
            200,
            json!({"total": ids.len(), "workItems": work_items}),
        )
        .await;
    }

    /// Work item `id` links to the test case, in configuration `gc` if any
    async fn with_test_case_link(&mut self, id: i64, gc: Option<&str>) {
        let target = self.target();
        self.get(
            &format!("/ccm/api/workitems/{id}/references"),
            Matcher::Any,
            200,
            json!({"endPoints": [{
                "id": "qm.relatedTestCase.s",
                "displayName": "Related Test Case",
                "linkTypeId": RELATED_TEST_CASE,
                "references": [{"linkTypeId": RELATED_TEST_CASE, "uri": target}]
            }]}),
        )
        .await;
        let (status, body) = match gc {
            Some(gc) => (200, json!({"configurationUri": gc})),
            None => (404, json!({})),
        };
        self.get(
            &format!("/ccm/api/workitems/_wi{id}/configuration"),
            Matcher::Any,
            status,
            body,
        )
        .await;
    }

    /// Link index answer for the test case
    async fn with_backlink_from(&mut self, source_ids: &[i64]) {
        let target = self.target();
        let links: Vec<_> = source_ids
            .iter()
            .map(|id| {
                json!({"sourceURL": self.work_item_uri(*id), "linkType": TEST_CASE_TERM, "targetURL": target})
            })
            .collect();
        let mock = self
            .server
            .mock("POST", "/qm/linkIndex/query")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(json!({"links": links}).to_string())
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    async fn with_target_status(&mut self, query: Matcher, status: usize) {
        self.get("/qm/resources/TestCase/_tc1", query, status, json!({}))
            .await;
    }
}

async fn run(alm: &Alm) -> (Result<OperationResult, Error>, String) {
    let mut reporter = ConsoleReporter::new(Vec::new());
    let result = execute(&alm.args(), &AppConfig::default(), &mut reporter).await;
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    (result, output)
}

#[tokio::test]
async fn test_configured_link_with_backlink_and_live_target() {
    let mut alm = Alm::new().await;
    alm.with_query(&[123]).await;
    alm.with_test_case_link(123, Some("cfg://42")).await;
    alm.with_backlink_from(&[123]).await;
    alm.with_target_status(
        Matcher::UrlEncoded("oslc_config.context".into(), "cfg://42".into()),
        200,
    )
    .await;

    let (result, output) = run(&alm).await;
    let result = result.unwrap();

    assert!(result.is_success());
    assert_eq!(result.result_text(), format!("Project Area: {PROJECT_AREA}"));
    assert_eq!(result.summary().ok, 1);
    assert!(output.is_empty(), "unexpected warnings: {output}");
}

#[tokio::test]
async fn test_missing_backlink_is_warned_and_run_succeeds() {
    let mut alm = Alm::new().await;
    alm.with_query(&[77]).await;
    alm.with_test_case_link(77, Some("cfg://42")).await;
    alm.with_backlink_from(&[78]).await;

    let (result, output) = run(&alm).await;
    let result = result.unwrap();

    assert!(result.is_success());
    assert_eq!(result.summary().missing, 1);
    assert!(output.contains("### Warning ### Backlink not found for workitem: 77"));
    assert!(output.contains("If link was just created wait a few minutes"));
}

#[tokio::test]
async fn test_deleted_target_is_broken_link() {
    let mut alm = Alm::new().await;
    alm.with_query(&[9]).await;
    alm.with_test_case_link(9, Some("cfg://42")).await;
    alm.with_backlink_from(&[9]).await;
    alm.with_target_status(Matcher::Any, 404).await;

    let (result, output) = run(&alm).await;

    assert_eq!(result.unwrap().summary().broken, 1);
    assert!(output.contains("### Warning ### Broken link for workitem: 9"));
}

#[tokio::test]
async fn test_unconfigured_missing_backlink() {
    let mut alm = Alm::new().await;
    alm.with_query(&[77]).await;
    // Both the link type and its substitute answer 404
    alm.with_test_case_link(77, None).await;
    alm.with_backlink_from(&[]).await;

    let (result, output) = run(&alm).await;

    assert!(result.unwrap().is_success());
    assert!(output.contains("***** Missing backlinks found for item: 77 |Related Test Case"));
}

#[tokio::test]
async fn test_empty_query_warns_and_succeeds() {
    let mut alm = Alm::new().await;
    alm.with_query(&[]).await;

    let (result, output) = run(&alm).await;

    assert!(result.unwrap().is_success());
    assert_eq!(output, format!("Query {QUERY}: No work items found to analyze.\n"));
}

#[tokio::test]
async fn test_unknown_project_area_fails() {
    let mut alm = Alm::new().await;
    alm.get("/ccm/api/project-areas", Matcher::Any, 200, json!([]))
        .await;

    let (result, output) = run(&alm).await;

    assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_rejected_credentials_abort() {
    let mut alm = Alm::new().await;
    alm.get("/ccm/api/project-areas", Matcher::Any, 401, json!({}))
        .await;

    let (result, _) = run(&alm).await;

    assert!(result.unwrap_err().is_fatal());
}

#[tokio::test]
async fn test_missing_password_file_fails_before_any_request() {
    let alm = Alm::new().await;
    let mut args = alm.args();
    args.password_file = alm.password.path().with_extension("missing");

    let mut reporter = ConsoleReporter::new(Vec::new());
    let err = execute(&args, &AppConfig::default(), &mut reporter)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
}
