extern crate handlebars;
extern crate reqwest;
extern crate serde_json;
extern crate serde_yaml;

use std::{error::Error as StdError, fmt, io, result::Result as StdResult};

#[derive(Debug)]
pub struct Error(Box<Inner>);

#[derive(Debug)]
pub(crate) enum Kind {
    Config,
    Builder(reqwest::Error),
    Network(reqwest::Error),
    Protocol,
    Extraction(u64),
    Io(io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
    Template(handlebars::TemplateError),
    Render(handlebars::RenderError),
}
#[derive(Debug)]
struct Inner {
    kind: Kind,
    description: Option<String>,
}

pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            Kind::Config => {
                write!(f, "Invalid configuration")?;
                self.write_description(f)
            }
            Kind::Builder(err) => write!(f, "Error building client: {}", err),
            Kind::Network(err) => write!(f, "Error sending request: {}", err),
            Kind::Protocol => {
                write!(f, "Upstream reported an error")?;
                self.write_description(f)
            }
            Kind::Extraction(id) => {
                write!(f, "Can't extract submission {}", id)?;
                self.write_description(f)
            }
            Kind::Io(err) => {
                write!(f, "I/O error")?;
                self.write_description(f)?;
                write!(f, ": {}", err)
            }
            Kind::Json(err) => write!(f, "Error parsing json: {}", err),
            Kind::Yaml(err) => write!(f, "Error parsing yaml: {}", err),
            Kind::Template(err) => write!(f, "Error parsing template: {}", err),
            Kind::Render(err) => write!(f, "Error rendering template: {}", err),
        }
    }
}
impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.0.kind {
            Kind::Builder(err) | Kind::Network(err) => Some(err),
            Kind::Io(err) => Some(err),
            Kind::Json(err) => Some(err),
            Kind::Yaml(err) => Some(err),
            Kind::Template(err) => Some(err),
            Kind::Render(err) => Some(err),
            Kind::Config | Kind::Protocol | Kind::Extraction(_) => None,
        }
    }
}
impl Error {
    fn new(inner: Inner) -> Self {
        Self(Box::new(inner))
    }
    pub(crate) fn with_kind(kind: Kind) -> Self {
        Self::new(Inner {
            kind,
            description: None,
        })
    }
    pub(crate) fn with_description<T: Into<String>>(kind: Kind, description: T) -> Self {
        Self::new(Inner {
            kind,
            description: Some(description.into()),
        })
    }
    fn write_description(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(d) = &self.0.description {
            write!(f, ": {}", d)
        } else {
            Ok(())
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self.0.kind, Kind::Config)
    }
    pub fn is_network(&self) -> bool {
        matches!(self.0.kind, Kind::Network(_))
    }
    pub fn is_protocol(&self) -> bool {
        matches!(self.0.kind, Kind::Protocol)
    }
    pub fn is_extraction(&self) -> bool {
        matches!(self.0.kind, Kind::Extraction(_))
    }
}

pub(crate) fn config_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Config, description)
}
pub(crate) fn builder_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Builder(err))
}
pub(crate) fn network_error(err: reqwest::Error) -> Error {
    Error::with_kind(Kind::Network(err))
}
pub(crate) fn protocol_error<T: Into<String>>(description: T) -> Error {
    Error::with_description(Kind::Protocol, description)
}
pub(crate) fn extraction_error(id: u64, field: &str) -> Error {
    Error::with_description(Kind::Extraction(id), format!("field {} not found", field))
}
pub(crate) fn io_error<T: Into<String>>(err: io::Error, description: T) -> Error {
    Error::with_description(Kind::Io(err), description)
}
pub(crate) fn json_error(err: serde_json::Error) -> Error {
    Error::with_kind(Kind::Json(err))
}
pub(crate) fn yaml_error(err: serde_yaml::Error) -> Error {
    Error::with_kind(Kind::Yaml(err))
}
pub(crate) fn template_error(err: handlebars::TemplateError) -> Error {
    Error::with_kind(Kind::Template(err))
}
pub(crate) fn render_error(err: handlebars::RenderError) -> Error {
    Error::with_kind(Kind::Render(err))
}
