extern crate termcolor;

use super::common::check;
use lc_sync::{readme::ProblemReadme, settings::Settings};
use std::{io::Write, process::ExitCode};
use termcolor::{Color, StandardStream};

pub fn readme(stdout: &mut StandardStream, settings: &Settings) -> ExitCode {
    let generator = match check(
        stdout,
        ProblemReadme::new(settings.base_url()),
        "loading template",
    ) {
        Some(v) => v,
        None => return ExitCode::FAILURE,
    };
    match check(
        stdout,
        generator.generate(&settings.output_root),
        format!("scanning {}", settings.output_root.display()),
    ) {
        Some(written) => {
            status!(
                stdout,
                Color::Green,
                "Success",
                "Generated {} problem READMEs",
                written.len()
            );
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}
