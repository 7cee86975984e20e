extern crate chrono;
extern crate handlebars;
extern crate serde;
extern crate serde_json;

use crate::{
    client::Session,
    error::{io_error, protocol_error, render_error, template_error, Result},
    language::label_of,
    settings::Settings,
    types::Counts,
};
use chrono::{DateTime, Local};
use handlebars::{no_escape, Handlebars};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{fs, path::Path};

const QUERY: &str = r#"
query userProfile($username: String!) {
  matchedUser(username: $username) {
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
  }
}
"#;

const TEMPLATE: &str = r#"# 🌸 {{username}}'s LeetCode Garden 🌸

> 🌱 *A LeetCode journey where each Accepted blooms into green.*

![Total Solved](https://img.shields.io/badge/Solved-{{counts.total}}-blue)
![Easy](https://img.shields.io/badge/Easy-{{counts.easy}}-brightgreen)
![Medium](https://img.shields.io/badge/Medium-{{counts.medium}}-yellow)
![Hard](https://img.shields.io/badge/Hard-{{counts.hard}}-red)
![Primary Lang](https://img.shields.io/badge/Language-{{label}}-informational)

---

## ⚔️ Status

- 👤 **User:** [{{username}}]({{base_url}}/{{username}}/)
- 💻 **Primary Weapon:** `{{label}}`
- 📚 **Total Problems Solved:** **{{counts.total}}**
- 🟢 Easy: **{{counts.easy}}**
- 🟡 Medium: **{{counts.medium}}**
- 🔴 Hard: **{{counts.hard}}**

🕒 **Last Synced:** `{{synced}}`

---

## 📁 Repository Layout

```bash
.
│
├── {{output_root}}/
│   ├── two-sum/
│   │   ├── solution.cpp
│   │   └── README.md
│   ├── best-time-to-buy-and-sell-stock/
│   │   ├── solution.cpp
│   │   └── README.md
│   └── ...
│
├── lc-fetch       # Fetch accepted submissions
├── lc-readme      # Per-problem READMEs
├── lc-stats       # This stats dashboard
└── config.json    # Your settings
```
"#;

#[derive(Deserialize)]
struct Entry {
    difficulty: String,
    count: u64,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Global {
    ac_submission_num: Vec<Entry>,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    submit_stats_global: Global,
}
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Data {
    matched_user: Option<MatchedUser>,
}

fn tally(entries: Vec<Entry>) -> Counts {
    let mut ret = Counts::default();
    for Entry { difficulty, count } in entries {
        match difficulty.as_str() {
            "All" => ret.total = count,
            "Easy" => ret.easy = count,
            "Medium" => ret.medium = count,
            "Hard" => ret.hard = count,
            _ => (),
        }
    }
    ret
}

pub async fn compute_stats(session: &Session, username: &str) -> Result<Counts> {
    let data: Data = session
        .graphql(QUERY, json!({ "username": username }))
        .await?;
    let user = data
        .matched_user
        .ok_or_else(|| protocol_error(format!("no such user {}", username)))?;
    Ok(tally(user.submit_stats_global.ac_submission_num))
}

#[derive(Serialize)]
struct View<'a> {
    username: &'a str,
    label: String,
    counts: Counts,
    synced: String,
    base_url: &'a str,
    output_root: String,
}

pub struct Reporter {
    engine: Handlebars<'static>,
}
impl Reporter {
    pub fn new() -> Result<Self> {
        let mut engine = Handlebars::new();
        engine.register_escape_fn(no_escape);
        engine
            .register_template_string("status", TEMPLATE)
            .map_err(template_error)?;
        Ok(Reporter { engine })
    }

    pub fn render(
        &self,
        settings: &Settings,
        counts: Counts,
        now: &DateTime<Local>,
    ) -> Result<String> {
        self.engine
            .render(
                "status",
                &View {
                    username: &settings.username,
                    label: label_of(&settings.primary_language),
                    counts,
                    synced: now.format("%Y-%m-%d %H:%M:%S").to_string(),
                    base_url: settings.base_url(),
                    output_root: settings.output_root.display().to_string(),
                },
            )
            .map_err(render_error)
    }

    pub fn write<P: AsRef<Path>>(&self, path: P, document: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, document).map_err(|e| io_error(e, format!("writing {}", path.display())))
    }
}
