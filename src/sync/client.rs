extern crate reqwest;
extern crate serde;
extern crate serde_json;

use crate::{
    config::client::{GRAPHQL_PATH, REQUEST_TIMEOUT, USER_AGENT},
    error::{builder_error, config_error, network_error, protocol_error, Result},
    settings::Settings,
};
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, COOKIE, REFERER},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
struct Query<'a> {
    query: &'a str,
    variables: Value,
}
#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    errors: Option<Value>,
}

fn header_value(value: &str, name: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| config_error(format!("invalid {}", name)))
}

fn build_headers(settings: &Settings) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(REFERER, header_value(settings.base_url(), "base_url")?);
    let mut cookies = Vec::new();
    if let Some(session) = &settings.session_cookie {
        cookies.push(format!("LEETCODE_SESSION={}", session));
    }
    if let Some(csrf) = &settings.csrf_token {
        cookies.push(format!("csrftoken={}", csrf));
        headers.insert("x-csrftoken", header_value(csrf, "csrf_token")?);
    }
    if !cookies.is_empty() {
        headers.insert(COOKIE, header_value(&cookies.join("; "), "session_cookie")?);
    }
    Ok(headers)
}

/// Shared HTTP plumbing for every upstream call.
pub struct Session {
    client: Client,
    base_url: String,
}
impl Session {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Session {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .default_headers(build_headers(settings)?)
                .cookie_store(true)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .map_err(builder_error)?,
            base_url: settings.base_url().to_owned(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Posts a GraphQL query; an `errors` member in the reply is a protocol error.
    pub async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T> {
        debug!("graphql {}", variables);
        let envelope: Envelope<T> = self
            .client
            .post(self.url(GRAPHQL_PATH))
            .json(&Query { query, variables })
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?
            .json()
            .await
            .map_err(network_error)?;
        if let Some(errors) = envelope.errors {
            return Err(protocol_error(errors.to_string()));
        }
        envelope
            .data
            .ok_or_else(|| protocol_error("response carries no data"))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!("GET {} {:?}", path, query);
        self.client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?
            .json()
            .await
            .map_err(network_error)
    }

    pub async fn get_text(&self, path: &str) -> Result<String> {
        debug!("GET {}", path);
        self.client
            .get(self.url(path))
            .send()
            .await
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?
            .text()
            .await
            .map_err(network_error)
    }
}
