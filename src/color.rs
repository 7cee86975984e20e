extern crate termcolor;

use std::io::{self, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

/// Writes `tag` right-aligned in `color`, followed by `": "` uncoloured.
pub fn write_tag(stdout: &mut StandardStream, color: Color, tag: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))?;
    write!(stdout, "{:>8}", tag)?;
    stdout.reset()?;
    write!(stdout, ": ")
}

// Console output is best effort; a closed stdout must not abort a sync.
macro_rules! status {
    ($dest:expr, $color:expr, $tag:expr, $($arg:tt)*) => {{
        let _ = $crate::color::write_tag($dest, $color, $tag);
        let _ = writeln!($dest, $($arg)*);
    }};
}
