use crate::helpers::{detail_document, graphql_detail, graphql_page, graphql_row, TestApp};
use lc_sync::{
    detail::{GraphqlDetails, PageDetails},
    lister::{GraphqlPages, Lister, RestPages},
};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{body_partial_json, body_string_contains, header, method, path, query_param},
    Mock, ResponseTemplate,
};

async fn mount_graphql_page(app: &TestApp, offset: usize, body: serde_json::Value, times: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("submissionList"))
        .and(body_partial_json(json!({ "variables": { "offset": offset, "limit": 20 } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(&app.server)
        .await;
}

async fn mount_graphql_detail(app: &TestApp, id: u64, body: serde_json::Value, times: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("submissionDetails"))
        .and(body_partial_json(json!({ "variables": { "submissionId": id } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(&app.server)
        .await;
}

#[tokio::test]
async fn latest_accepted_submission_per_slug_is_written() {
    let app = TestApp::spawn().await;
    mount_graphql_page(
        &app,
        0,
        graphql_page(
            vec![
                graphql_row(4, "two-sum", "cpp", "Wrong Answer"),
                graphql_row(3, "two-sum", "cpp", "Accepted"),
                graphql_row(2, "two-sum", "cpp", "Accepted"),
            ],
            true,
        ),
        1,
    )
    .await;
    mount_graphql_page(
        &app,
        20,
        graphql_page(vec![graphql_row(1, "add-two-numbers", "python3", "Accepted")], false),
        1,
    )
    .await;
    mount_graphql_detail(&app, 3, graphql_detail("two-sum", "cpp", "// newest\n"), 1).await;
    mount_graphql_detail(&app, 2, graphql_detail("two-sum", "cpp", "// older\n"), 0).await;
    mount_graphql_detail(&app, 4, graphql_detail("two-sum", "cpp", "// wrong\n"), 0).await;
    mount_graphql_detail(
        &app,
        1,
        graphql_detail("add-two-numbers", "python3", "print(1)\n"),
        1,
    )
    .await;

    let settings = app.settings(json!({}));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(
        GraphqlPages::new(&session, &settings.username),
        20,
        Duration::ZERO,
    );
    let report = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &GraphqlDetails::new(&session))
        .await
        .expect("Failed to materialize.");

    assert_eq!(report.written.len(), 2);
    assert_eq!(report.duplicates, 1);
    assert!(report.failed.is_empty());
    assert_eq!(app.read("two-sum", "solution.cpp"), "// newest\n");
    assert_eq!(app.read("add-two-numbers", "solution.py"), "print(1)\n");
}

#[tokio::test]
async fn listing_stops_when_upstream_reports_no_more_pages() {
    let app = TestApp::spawn().await;
    let full = |base: u64| {
        (0..20)
            .map(|i| graphql_row(base + i, &format!("p{}", base + i), "cpp", "Wrong Answer"))
            .collect::<Vec<_>>()
    };
    mount_graphql_page(&app, 0, graphql_page(full(100), true), 1).await;
    mount_graphql_page(&app, 20, graphql_page(vec![], true), 1).await;
    mount_graphql_page(&app, 40, graphql_page(full(200), false), 1).await;
    mount_graphql_page(&app, 60, graphql_page(full(300), false), 0).await;

    let settings = app.settings(json!({}));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(
        GraphqlPages::new(&session, &settings.username),
        20,
        Duration::ZERO,
    );
    let report = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &GraphqlDetails::new(&session))
        .await
        .expect("Failed to materialize.");
    assert!(report.written.is_empty());
}

#[tokio::test]
async fn graphql_error_payload_aborts_listing() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "errors": [{ "message": "User does not exist" }] })),
        )
        .expect(1)
        .mount(&app.server)
        .await;

    let settings = app.settings(json!({}));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(
        GraphqlPages::new(&session, &settings.username),
        20,
        Duration::ZERO,
    );
    let err = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &GraphqlDetails::new(&session))
        .await
        .unwrap_err();
    assert!(err.is_protocol());
    assert!(err.to_string().contains("User does not exist"));
}

#[tokio::test]
async fn listing_transport_failure_is_fatal() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.server)
        .await;

    let settings = app.settings(json!({}));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(
        GraphqlPages::new(&session, &settings.username),
        20,
        Duration::ZERO,
    );
    let err = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &GraphqlDetails::new(&session))
        .await
        .unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn detail_transport_failure_skips_only_that_submission() {
    let app = TestApp::spawn().await;
    mount_graphql_page(
        &app,
        0,
        graphql_page(
            vec![
                graphql_row(2, "valid-parentheses", "java", "Accepted"),
                graphql_row(1, "two-sum", "java", "Accepted"),
            ],
            false,
        ),
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "submissionId": 2 } })))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.server)
        .await;
    mount_graphql_detail(&app, 1, graphql_detail("two-sum", "java", "class Solution {}"), 1).await;

    let settings = app.settings(json!({}));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(
        GraphqlPages::new(&session, &settings.username),
        20,
        Duration::ZERO,
    );
    let report = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &GraphqlDetails::new(&session))
        .await
        .expect("Failed to materialize.");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, 2);
    assert!(report.failed[0].error.is_network());
    assert!(!app.root.path().join("valid-parentheses").exists());
    assert_eq!(app.read("two-sum", "solution.java"), "class Solution {}");
}

#[tokio::test]
async fn rest_listing_with_scraped_pages() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/submissions/"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .and(header("cookie", "LEETCODE_SESSION=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "has_next": false,
            "last_key": "",
            "submissions_dump": [
                { "id": 12, "status_display": "Accepted", "lang": "cpp",
                  "title_slug": "broken", "timestamp": 1700000002 },
                { "id": 11, "status_display": "Accepted", "lang": "cpp",
                  "title_slug": "two-sum", "timestamp": 1700000001 },
                { "id": 10, "status_display": "Accepted", "lang": "cpp",
                  "title_slug": "two-sum", "timestamp": 1700000000 },
            ],
        })))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/submissions/detail/12/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login required</html>"))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/submissions/detail/11/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_document(
            "two-sum",
            "cpp",
            r"int main() {\u000A  return 0;\u000A}",
        )))
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/submissions/detail/10/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(detail_document(
            "two-sum", "cpp", "older",
        )))
        .expect(0)
        .mount(&app.server)
        .await;

    let settings = app.settings(json!({
        "listing": "rest",
        "detail": "page",
        "session_cookie": "secret",
    }));
    let session = app.session(&settings);
    let lister = Lister::with_pacing(RestPages::new(&session), 20, Duration::ZERO);
    let report = app
        .materializer(&settings)
        .materialize(lister.list_accepted(), &PageDetails::new(&session))
        .await
        .expect("Failed to materialize.");

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].error.is_extraction());
    assert!(!app.root.path().join("broken").exists());
    assert_eq!(
        app.read("two-sum", "solution.cpp"),
        "int main() {\n  return 0;\n}"
    );
}
