extern crate serde;
extern crate serde_json;
extern crate serde_yaml;

use crate::{
    config::{
        client::DEFAULT_BASE_URL,
        settings::{DEFAULT_LANGUAGE, DEFAULT_OUTPUT_ROOT, DEFAULT_README},
    },
    error::{config_error, io_error, json_error, yaml_error, Result},
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStrategy {
    #[default]
    Graphql,
    Rest,
}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailStrategy {
    #[default]
    Graphql,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}
impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|x| x.to_str()) {
            Some("yaml") | Some("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_owned()
}
fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}
fn default_readme() -> PathBuf {
    PathBuf::from(DEFAULT_README)
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

/// Loaded once at start and handed to every component by reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default, alias = "leetcode_username")]
    pub username: String,
    #[serde(default = "default_language")]
    pub primary_language: String,
    #[serde(default)]
    pub session_cookie: Option<String>,
    #[serde(default)]
    pub csrf_token: Option<String>,
    #[serde(default)]
    pub listing: ListingStrategy,
    #[serde(default)]
    pub detail: DetailStrategy,
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    #[serde(default = "default_readme")]
    pub readme_path: PathBuf,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Settings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| io_error(e, format!("reading {}", path.display())))?;
        Self::parse(&text, Format::from_path(path))
    }
    pub fn parse(text: &str, format: Format) -> Result<Self> {
        let ret: Settings = match format {
            Format::Json => serde_json::from_str(text).map_err(|e| {
                if e.is_data() {
                    config_error(e.to_string())
                } else {
                    json_error(e)
                }
            })?,
            Format::Yaml => serde_yaml::from_str(text).map_err(yaml_error)?,
        };
        ret.validate()?;
        Ok(ret)
    }
    fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(config_error("username is required"));
        }
        if self.session_cookie.is_none() {
            if self.listing == ListingStrategy::Rest {
                return Err(config_error("rest listing requires session_cookie"));
            }
            if self.detail == DetailStrategy::Page {
                return Err(config_error("page detail requires session_cookie"));
            }
        }
        Ok(())
    }
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
