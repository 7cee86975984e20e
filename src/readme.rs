extern crate termcolor;
extern crate tokio;

use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod common;
    pub mod readme;
}
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logger::init();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let matches = command::common::app(
        "lc-readme",
        "Write a README next to every stored solution",
    )
    .get_matches();
    let code = match command::common::load(&mut stdout, &matches) {
        Some(settings) => command::readme::readme(&mut stdout, &settings),
        None => ExitCode::FAILURE,
    };
    let _ = stdout.reset();
    code
}
