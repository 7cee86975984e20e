extern crate chrono;
extern crate termcolor;

use super::common::check;
use chrono::Local;
use lc_sync::{
    client::Session,
    settings::Settings,
    stats::{compute_stats, Reporter},
};
use std::{io::Write, process::ExitCode};
use termcolor::{Color, StandardStream};

pub async fn stats(stdout: &mut StandardStream, settings: &Settings) -> ExitCode {
    let result: Option<()> = try_stats(stdout, settings).await;
    if result.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

async fn try_stats(stdout: &mut StandardStream, settings: &Settings) -> Option<()> {
    let session = check(stdout, Session::new(settings), "building session")?;
    let reporter = check(stdout, Reporter::new(), "loading template")?;
    status!(stdout, Color::Blue, "Info", "Fetching stats for {}", settings.username);
    let counts = check(
        stdout,
        compute_stats(&session, &settings.username).await,
        "fetching stats",
    )?;
    let document = check(
        stdout,
        reporter.render(settings, counts, &Local::now()),
        "rendering status",
    )?;
    check(
        stdout,
        reporter.write(&settings.readme_path, &document),
        "writing status",
    )?;
    status!(
        stdout,
        Color::Green,
        "Success",
        "{} generated: {} solved ({} easy, {} medium, {} hard)",
        settings.readme_path.display(),
        counts.total,
        counts.easy,
        counts.medium,
        counts.hard
    );
    Some(())
}
