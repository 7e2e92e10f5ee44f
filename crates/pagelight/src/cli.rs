//! The `pagelight` command-line interface.
//!
//! One operation: render a source template file to HTML and write it to a
//! destination file. Usage problems and help requests print the usage text
//! to standard output (help exits 0, problems exit non-zero); render and
//! write failures go to standard error naming the offending path.
//!
//! [`run`] takes its arguments and output streams as parameters so the
//! whole surface is testable without spawning a process; `main` wires it to
//! the real process environment.

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use pagelight_render::{compile_file, RenderOptions};

/// Exit code for success and help requests.
pub const EXIT_OK: i32 = 0;

/// Exit code for usage errors, render failures, and write failures.
pub const EXIT_FAILURE: i32 = 1;

/// Render a template file to HTML.
#[derive(Debug, Parser)]
#[command(name = "pagelight", version, about = "Render a template file to HTML")]
struct Cli {
    /// Source template file
    #[arg(value_name = "SRC")]
    source: PathBuf,

    /// Destination HTML file (created or overwritten)
    #[arg(value_name = "DST")]
    destination: PathBuf,
}

/// Runs the CLI against the given arguments and output streams.
///
/// Returns the process exit code. The first argument is the program name,
/// as in [`std::env::args_os`]. Rendering always uses the pretty
/// configuration; the output file is written as UTF-8.
pub fn run<I, T>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(parse_err) => {
            return match parse_err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{}", parse_err.render());
                    EXIT_OK
                }
                // Usage problems also go to stdout, matching the observed
                // contract; only the exit code distinguishes them.
                _ => {
                    let _ = write!(out, "{}", parse_err.render());
                    EXIT_FAILURE
                }
            };
        }
    };

    log::debug!(
        "rendering {} -> {}",
        cli.source.display(),
        cli.destination.display()
    );

    let html = match compile_file(&cli.source, &RenderOptions::default()) {
        Ok(html) => html,
        Err(render_err) => {
            let _ = writeln!(
                err,
                "error: cannot render {}: {}",
                cli.source.display(),
                render_err
            );
            return EXIT_FAILURE;
        }
    };

    if let Err(io_err) = fs::write(&cli.destination, &html) {
        let _ = writeln!(
            err,
            "error: cannot write {}: {}",
            cli.destination.display(),
            io_err
        );
        return EXIT_FAILURE;
    }

    EXIT_OK
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_capturing(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_args_prints_usage_to_stdout() {
        let (code, out, _) = run_capturing(&["pagelight"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("Usage"), "expected usage text, got: {}", out);
    }

    #[test]
    fn test_one_arg_prints_usage_to_stdout() {
        let (code, out, _) = run_capturing(&["pagelight", "index.jinja"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("Usage"));
    }

    #[test]
    fn test_help_flag_exits_zero() {
        for flag in ["--help", "-h"] {
            let (code, out, _) = run_capturing(&["pagelight", flag]);
            assert_eq!(code, EXIT_OK);
            assert!(out.contains("Usage"));
        }
    }

    #[test]
    fn test_help_flag_wins_over_further_arguments() {
        let (code, out, _) = run_capturing(&["pagelight", "--help", "a.jinja", "b.html"]);
        assert_eq!(code, EXIT_OK);
        assert!(out.contains("Usage"));
    }
}
