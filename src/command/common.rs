extern crate clap;
extern crate termcolor;

use clap::{Arg, ArgMatches, Command};
use lc_sync::{error::Result, settings::Settings};
use std::{fmt::Display, io::Write};
use termcolor::{Color, StandardStream};

const DEFAULT_CONFIG: &str = "config.json";

pub fn app(name: &'static str, about: &'static str) -> Command<'static> {
    Command::new(name)
        .about(about)
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .arg(
            Arg::new("config")
                .help("Path to configuration file")
                .default_value(DEFAULT_CONFIG),
        )
}

pub fn check<T, E: Display>(stdout: &mut StandardStream, result: Result<T>, what: E) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            status!(stdout, Color::Red, "Error", "{}: {}", what, e);
            None
        }
    }
}

pub fn load(stdout: &mut StandardStream, matches: &ArgMatches) -> Option<Settings> {
    let path = matches.value_of("config").unwrap_or(DEFAULT_CONFIG);
    check(stdout, Settings::load(path), format!("loading {}", path))
}
