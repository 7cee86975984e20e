extern crate futures;
extern crate tokio;

use crate::{
    config::materializer::{SOLUTION_STEM, WRITE_DELAY},
    detail::DetailProvider,
    error::{io_error, protocol_error, Error, Result},
    language::resolve_extension,
    settings::Settings,
    types::{SeenSlugs, SubmissionSummary},
};
use futures::{pin_mut, Stream, TryStreamExt};
use log::{debug, info, warn};
use std::{
    fs,
    path::{Component, Path, PathBuf},
    time::Duration,
};
use tokio::time::sleep;

#[derive(Debug)]
pub struct Failure {
    pub id: u64,
    pub slug: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub duplicates: usize,
    pub failed: Vec<Failure>,
}

/// A slug is used as a directory name, so it must be exactly one plain path
/// component.
fn is_plain_slug(slug: &str) -> bool {
    let mut parts = Path::new(slug).components();
    matches!(
        (parts.next(), parts.next()),
        (Some(Component::Normal(_)), None)
    ) && !slug.contains(['/', '\\'])
}

pub struct Materializer {
    output_root: PathBuf,
    primary_language: String,
    delay: Duration,
}
impl Materializer {
    pub fn new(settings: &Settings) -> Self {
        Self::with_delay(
            settings.output_root.clone(),
            settings.primary_language.clone(),
            WRITE_DELAY,
        )
    }
    pub fn with_delay(output_root: PathBuf, primary_language: String, delay: Duration) -> Self {
        Materializer {
            output_root,
            primary_language,
            delay,
        }
    }
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    async fn save<D: DetailProvider>(
        &self,
        provider: &D,
        summary: &SubmissionSummary,
    ) -> Result<PathBuf> {
        if !is_plain_slug(&summary.slug) {
            return Err(protocol_error(format!("unusable slug {:?}", summary.slug)));
        }
        let detail = provider.fetch_detail(summary.id).await?;
        if detail.slug != summary.slug {
            debug!(
                "submission {} reports slug {}, listed as {}",
                summary.id, detail.slug, summary.slug
            );
        }
        let folder = self.output_root.join(&summary.slug);
        fs::create_dir_all(&folder)
            .map_err(|e| io_error(e, format!("creating {}", folder.display())))?;
        let path = folder.join(format!(
            "{}.{}",
            SOLUTION_STEM,
            resolve_extension(&detail.language, &self.primary_language)
        ));
        fs::write(&path, detail.code.as_bytes())
            .map_err(|e| io_error(e, format!("writing {}", path.display())))?;
        Ok(path)
    }

    /// Writes the first listed submission of every slug.
    ///
    /// An error from `summaries` aborts the run. Errors fetching or writing a
    /// single submission are logged and recorded in the report; that slug stays
    /// marked as seen, so later duplicates of it are not tried.
    pub async fn materialize<St, D>(&self, summaries: St, provider: &D) -> Result<Report>
    where
        St: Stream<Item = Result<SubmissionSummary>>,
        D: DetailProvider,
    {
        pin_mut!(summaries);
        let mut seen = SeenSlugs::new();
        let mut report = Report::default();
        while let Some(summary) = summaries.try_next().await? {
            if !seen.insert(&summary.slug) {
                report.duplicates += 1;
                continue;
            }
            info!("Fetching code for {}", summary);
            match self.save(provider, &summary).await {
                Ok(path) => {
                    report.written.push(path);
                    sleep(self.delay).await;
                }
                Err(error) => {
                    warn!("Skipping {}: {}", summary, error);
                    report.failed.push(Failure {
                        id: summary.id,
                        slug: summary.slug,
                        error,
                    });
                }
            }
        }
        Ok(report)
    }
}
