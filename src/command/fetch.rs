extern crate termcolor;

use super::common::check;
use lc_sync::{
    client::Session,
    detail::{DetailProvider, GraphqlDetails, PageDetails},
    error::Result,
    lister::{GraphqlPages, Lister, PageSource, RestPages},
    materializer::{Materializer, Report},
    settings::{DetailStrategy, ListingStrategy, Settings},
};
use std::{io::Write, process::ExitCode};
use termcolor::{Color, StandardStream};

async fn run<S: PageSource, D: DetailProvider>(
    materializer: &Materializer,
    lister: Lister<S>,
    provider: D,
) -> Result<Report> {
    materializer
        .materialize(lister.list_accepted(), &provider)
        .await
}

pub async fn fetch(stdout: &mut StandardStream, settings: &Settings) -> ExitCode {
    let session = match check(stdout, Session::new(settings), "building session") {
        Some(v) => v,
        None => return ExitCode::FAILURE,
    };
    status!(
        stdout,
        Color::Blue,
        "Info",
        "Fetching accepted submissions for {} ...",
        settings.username
    );
    let materializer = Materializer::new(settings);
    let graphql = || Lister::new(GraphqlPages::new(&session, &settings.username));
    let rest = || Lister::new(RestPages::new(&session));
    let result = match (settings.listing, settings.detail) {
        (ListingStrategy::Graphql, DetailStrategy::Graphql) => {
            run(&materializer, graphql(), GraphqlDetails::new(&session)).await
        }
        (ListingStrategy::Graphql, DetailStrategy::Page) => {
            run(&materializer, graphql(), PageDetails::new(&session)).await
        }
        (ListingStrategy::Rest, DetailStrategy::Graphql) => {
            run(&materializer, rest(), GraphqlDetails::new(&session)).await
        }
        (ListingStrategy::Rest, DetailStrategy::Page) => {
            run(&materializer, rest(), PageDetails::new(&session)).await
        }
    };
    let report = match check(stdout, result, "listing submissions") {
        Some(v) => v,
        None => return ExitCode::FAILURE,
    };
    for failure in &report.failed {
        status!(
            stdout,
            Color::Yellow,
            "Skipped",
            "{} (submission {}): {}",
            failure.slug,
            failure.id,
            failure.error
        );
    }
    status!(
        stdout,
        Color::Green,
        "Finished",
        "Wrote {} solutions into {} ({} older duplicates, {} failed)",
        report.written.len(),
        materializer.output_root().display(),
        report.duplicates,
        report.failed.len()
    );
    ExitCode::SUCCESS
}
