extern crate termcolor;
extern crate tokio;

use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod common;
    pub mod fetch;
}
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = command::common::app(
        "lc-fetch",
        "Fetch the latest accepted submission of every solved problem",
    )
    .get_matches();
    let code = match command::common::load(&mut stdout, &matches) {
        Some(settings) => command::fetch::fetch(&mut stdout, &settings).await,
        None => ExitCode::FAILURE,
    };
    let _ = stdout.reset();
    code
}
