//! CLI that reads saved profile or post HTML and writes JSON to stdout.
//!
//! Usage: profile_extract [--mode analyze|profile|reactors|comments]
//!                        [--origin URL] [--limit N] [FILE]
//!
//! Reads stdin when FILE is omitted. Logs go to stderr; set `RUST_LOG`
//! (default `warn`) to see extraction decisions.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use profile_lens::encoding::decode_html;
use profile_lens::{
    analyze_bytes, dom, extract_comments, extract_profile_details, extract_reactors, Error,
    Options,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Analyze,
    Profile,
    Reactors,
    Comments,
}

impl Mode {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "analyze" => Some(Self::Analyze),
            "profile" => Some(Self::Profile),
            "reactors" => Some(Self::Reactors),
            "comments" => Some(Self::Comments),
            _ => None,
        }
    }
}

struct Args {
    mode: Mode,
    origin: Option<String>,
    limit: Option<usize>,
    file: Option<String>,
}

fn usage() -> ! {
    eprintln!("Usage: profile_extract [--mode analyze|profile|reactors|comments] [--origin URL] [--limit N] [FILE]");
    eprintln!("  --mode:   what to extract (default: analyze)");
    eprintln!("  --origin: base URL for relative links (default: https://www.linkedin.com)");
    eprintln!("  --limit:  maximum reactors/commenters returned");
    eprintln!("  FILE:     HTML file to read (default: stdin)");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = Args {
        mode: Mode::Analyze,
        origin: None,
        limit: None,
        file: None,
    };

    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--mode" => {
                args.mode = iter.next().as_deref().and_then(Mode::parse).unwrap_or_else(|| usage());
            }
            "--origin" => args.origin = Some(iter.next().unwrap_or_else(|| usage())),
            "--limit" => {
                args.limit = Some(iter.next().and_then(|n| n.parse().ok()).unwrap_or_else(|| usage()));
            }
            "-h" | "--help" => usage(),
            _ if arg.starts_with('-') => usage(),
            _ => args.file = Some(arg),
        }
    }
    args
}

fn read_input(file: Option<&str>) -> Result<Vec<u8>, Error> {
    match file {
        Some(path) => Ok(fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let mut options = match &args.origin {
        Some(origin) => Options::with_origin(origin)?,
        None => Options::default(),
    };
    options.reactor_limit = args.limit;
    options.comment_limit = args.limit;

    let bytes = read_input(args.file.as_deref())?;
    tracing::debug!(bytes = bytes.len(), mode = ?args.mode, "input read");

    let json = match args.mode {
        Mode::Analyze => serde_json::to_string_pretty(&analyze_bytes(&bytes, &options))?,
        mode => {
            let doc = dom::parse(&decode_html(&bytes));
            match mode {
                Mode::Profile => serde_json::to_string_pretty(&extract_profile_details(&doc, &options))?,
                Mode::Reactors => serde_json::to_string_pretty(&extract_reactors(&doc, &options))?,
                _ => serde_json::to_string_pretty(&extract_comments(&doc, &options))?,
            }
        }
    };
    Ok(json)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    match run(&args) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("profile_extract: {e}");
            process::exit(1);
        }
    }
}
