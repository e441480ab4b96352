use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use mgrep::options::DEFAULT_CONTEXT;
use mgrep::{Error, Grep, Options, Pattern};

/// Exit status of a command line usage error (EX_USAGE)
const EXIT_USAGE: u8 = 64;
/// Exit status when the search couldn't go on
const EXIT_TROUBLE: u8 = 2;

/// Search for the sequence of bytes represented by HEXPATTERN in one or more large binary FILEs.
#[derive(Parser, Debug)]
#[command(name = "mgrep", version, long_about = None)]
struct Args {
    /// Output NUM bytes after the found pattern
    #[arg(short = 'a', value_name = "NUM", default_value_t = DEFAULT_CONTEXT as u16,
          value_parser = clap::value_parser!(u16).range(1..1024))]
    after: u16,

    /// Output NUM bytes before the found pattern
    #[arg(short = 'b', value_name = "NUM", default_value_t = DEFAULT_CONTEXT as u16,
          value_parser = clap::value_parser!(u16).range(1..1024))]
    before: u16,

    /// Highlight the found pattern in color (only when writing to a terminal)
    #[arg(short = 'c')]
    color: bool,

    /// Do not convert HEXPATTERN from hex, search its bytes as-is
    #[arg(short = 'H')]
    literal: bool,

    /// Bytes to search for, 2 hex digits per byte (e.g. "cafebabe")
    #[arg(value_name = "HEXPATTERN")]
    pattern: String,

    /// Files to search in
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version land here too, on stdout
            let code = if err.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };
    debug!("{:?}", args);

    let stdout = io::stdout();
    let mut options = Options::default();
    options
        .set_after(args.after as usize)
        .set_before(args.before as usize)
        .set_color(args.color && stdout.is_terminal())
        .set_hexlify(!args.literal);

    let pattern = if options.hexlify() {
        Pattern::from_hex(&args.pattern)
    } else {
        Pattern::literal(&args.pattern)
    };
    let pattern = match pattern {
        Ok(pattern) => pattern,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let grep = Grep::new(pattern, &options);
    let mut out = BufWriter::new(stdout.lock());
    let mut err = io::stderr().lock();
    let summary = grep
        .run(&args.files, &mut out, &mut err)
        .and_then(|summary| out.flush().map(|_| summary));
    match summary {
        Ok(summary) => ExitCode::from(summary.exit_code()),
        Err(io_err) => {
            error!("Output error: {io_err}");
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}
