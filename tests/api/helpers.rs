use lc_sync::{
    client::Session,
    materializer::Materializer,
    settings::{Format, Settings},
};
use serde_json::{json, Value};
use std::{fs, path::PathBuf, time::Duration};
use tempfile::TempDir;
use wiremock::MockServer;

pub struct TestApp {
    pub server: MockServer,
    pub root: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self {
            server: MockServer::start().await,
            root: TempDir::new().expect("Failed to create output directory."),
        }
    }

    /// Settings pointing at the mock server, with `extra` merged on top.
    pub fn settings(&self, extra: Value) -> Settings {
        let mut config = json!({
            "username": "alice",
            "base_url": self.server.uri(),
            "output_root": self.root.path(),
        });
        if let (Some(base), Value::Object(extra)) = (config.as_object_mut(), extra) {
            base.extend(extra);
        }
        Settings::parse(&config.to_string(), Format::Json).expect("Failed to parse settings.")
    }

    pub fn session(&self, settings: &Settings) -> Session {
        Session::new(settings).expect("Failed to build session.")
    }

    pub fn materializer(&self, settings: &Settings) -> Materializer {
        Materializer::with_delay(
            settings.output_root.clone(),
            settings.primary_language.clone(),
            Duration::ZERO,
        )
    }

    pub fn solution(&self, slug: &str, file: &str) -> PathBuf {
        self.root.path().join(slug).join(file)
    }

    pub fn read(&self, slug: &str, file: &str) -> String {
        fs::read_to_string(self.solution(slug, file)).expect("Failed to read solution.")
    }
}

pub fn graphql_row(id: u64, slug: &str, lang: &str, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "statusDisplay": status,
        "lang": lang,
        "titleSlug": slug,
        "timestamp": "1700000000",
    })
}

pub fn graphql_page(rows: Vec<Value>, has_next: bool) -> Value {
    json!({ "data": { "submissionList": { "hasNext": has_next, "submissions": rows } } })
}

pub fn graphql_detail(slug: &str, lang: &str, code: &str) -> Value {
    json!({
        "data": {
            "submissionDetails": {
                "code": code,
                "lang": lang,
                "runtime": "0 ms",
                "memory": "8 MB",
                "question": { "titleSlug": slug, "title": slug },
            }
        }
    })
}

pub fn detail_document(slug: &str, lang: &str, code: &str) -> String {
    format!(
        "<html><script>\n  var pageData = {{\n    getLangDisplay: '{}',\n    submissionCode: '{}',\n    editCodeUrl: '/problems/{}/',\n  }};\n</script></html>",
        lang, code, slug
    )
}
