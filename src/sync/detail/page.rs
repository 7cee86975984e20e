extern crate regex;

use super::DetailProvider;
use crate::{
    client::Session,
    error::{extraction_error, Result},
    types::SubmissionDetail,
};
use regex::{Captures, Regex};

struct Field {
    name: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

const CODE: Field = Field {
    name: "submissionCode",
    prefix: "submissionCode: '",
    suffix: "',",
};
const LANGUAGE: Field = Field {
    name: "getLangDisplay",
    prefix: "getLangDisplay: '",
    suffix: "'",
};
const SLUG: Field = Field {
    name: "editCodeUrl",
    prefix: "editCodeUrl: '/problems/",
    suffix: "/",
};

fn between<'a>(document: &'a str, field: &Field) -> Option<&'a str> {
    let begin = document.find(field.prefix)? + field.prefix.len();
    let rest = &document[begin..];
    rest.find(field.suffix).map(|end| &rest[..end])
}

fn escaped_char(caps: &Captures) -> String {
    if let (Some(high), Some(low)) = (caps.get(1), caps.get(2)) {
        let high = u32::from_str_radix(high.as_str(), 16).unwrap_or(0);
        let low = u32::from_str_radix(low.as_str(), 16).unwrap_or(0);
        let point = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        return char::from_u32(point).map_or_else(|| caps[0].to_owned(), String::from);
    }
    if let Some(unit) = caps.get(3) {
        return u32::from_str_radix(unit.as_str(), 16)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_owned(), String::from);
    }
    match &caps[4] {
        "n" => "\n".to_owned(),
        "r" => "\r".to_owned(),
        "t" => "\t".to_owned(),
        other => other.to_owned(),
    }
}

/// Recovers submission fields embedded as quoted script literals in the
/// submission page.
pub struct Scraper {
    escape: Regex,
}
impl Scraper {
    pub fn new() -> Self {
        Scraper {
            escape: Regex::new(
                r"\\u([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|\\u([0-9a-fA-F]{4})|\\(.)",
            )
            .unwrap(),
        }
    }

    pub fn unescape(&self, text: &str) -> String {
        self.escape.replace_all(text, escaped_char).into_owned()
    }

    fn field(&self, document: &str, id: u64, field: &Field) -> Result<String> {
        between(document, field)
            .map(|x| self.unescape(x))
            .ok_or_else(|| extraction_error(id, field.name))
    }

    pub fn extract(&self, document: &str, id: u64) -> Result<SubmissionDetail> {
        Ok(SubmissionDetail {
            code: self.field(document, id, &CODE)?,
            language: self.field(document, id, &LANGUAGE)?,
            slug: self.field(document, id, &SLUG)?,
        })
    }
}
impl Default for Scraper {
    fn default() -> Self {
        Self::new()
    }
}

/// Scrapes `/submissions/detail/<id>/`; needs an authenticated session.
pub struct PageDetails<'a> {
    session: &'a Session,
    scraper: Scraper,
}
impl<'a> PageDetails<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            scraper: Scraper::new(),
        }
    }
}
impl DetailProvider for PageDetails<'_> {
    async fn fetch_detail(&self, id: u64) -> Result<SubmissionDetail> {
        let document = self
            .session
            .get_text(&format!("/submissions/detail/{}/", id))
            .await?;
        self.scraper.extract(&document, id)
    }
}
