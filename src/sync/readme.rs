extern crate handlebars;
extern crate serde;

use crate::{
    config::materializer::SOLUTION_STEM,
    error::{io_error, render_error, template_error, Result},
    language::label_of_extension,
};
use handlebars::{no_escape, Handlebars};
use log::debug;
use serde::Serialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const TEMPLATE: &str = r#"# {{title}}

🔗 [{{base_url}}/problems/{{slug}}/]({{base_url}}/problems/{{slug}}/)

## Solution ({{language}})

See [`{{file}}`](./{{file}}).
"#;
const README: &str = "README.md";

#[derive(Serialize)]
struct View<'a> {
    title: String,
    slug: &'a str,
    language: String,
    file: &'a str,
    base_url: &'a str,
}

/// "two-sum" becomes "Two Sum".
pub fn title_of(slug: &str) -> String {
    slug.split('-')
        .filter(|x| !x.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn solution_in(folder: &Path) -> Result<Option<String>> {
    let prefix = format!("{}.", SOLUTION_STEM);
    let mut found = Vec::new();
    for entry in
        fs::read_dir(folder).map_err(|e| io_error(e, format!("reading {}", folder.display())))?
    {
        let entry = entry.map_err(|e| io_error(e, format!("reading {}", folder.display())))?;
        if let Some(name) = entry.file_name().to_str() {
            if name.starts_with(&prefix) && entry.path().is_file() {
                found.push(name.to_owned());
            }
        }
    }
    found.sort();
    Ok(found.into_iter().next())
}

pub struct ProblemReadme {
    engine: Handlebars<'static>,
    base_url: String,
}
impl ProblemReadme {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(no_escape);
        engine
            .register_template_string("problem", TEMPLATE)
            .map_err(template_error)?;
        Ok(Self {
            engine,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn render(&self, slug: &str, file: &str) -> Result<String> {
        let extension = file.rsplit('.').next().unwrap_or_default();
        self.engine
            .render(
                "problem",
                &View {
                    title: title_of(slug),
                    slug,
                    language: label_of_extension(extension),
                    file,
                    base_url: &self.base_url,
                },
            )
            .map_err(render_error)
    }

    /// Writes `README.md` next to every `solution.*` under `root`, in slug order.
    pub fn generate(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut folders = Vec::new();
        for entry in
            fs::read_dir(root).map_err(|e| io_error(e, format!("reading {}", root.display())))?
        {
            let path = entry
                .map_err(|e| io_error(e, format!("reading {}", root.display())))?
                .path();
            if path.is_dir() {
                folders.push(path);
            }
        }
        folders.sort();
        let mut ret = Vec::with_capacity(folders.len());
        for folder in folders {
            let slug = match folder.file_name().and_then(|x| x.to_str()) {
                Some(v) => v.to_owned(),
                None => continue,
            };
            let file = match solution_in(&folder)? {
                Some(v) => v,
                None => {
                    debug!("no solution in {}", folder.display());
                    continue;
                }
            };
            let path = folder.join(README);
            fs::write(&path, self.render(&slug, &file)?)
                .map_err(|e| io_error(e, format!("writing {}", path.display())))?;
            ret.push(path);
        }
        Ok(ret)
    }
}
