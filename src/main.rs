use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use std::fs;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

use py2basic::{ProgramRenderer, TranslateOptions, TreeParser};

fn init_tracing() {
    // PY2BASIC_LOG wins over RUST_LOG; warnings only by default
    let filter = std::env::var("PY2BASIC_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

const MAX_INDENT_WIDTH: i64 = 16;

fn cli() -> Command {
    Command::new("py2basic")
        .about("Translate a Python syntax tree (JSON) into BASIC source")
        .arg(
            Arg::new("input")
                .help("JSON syntax tree to translate; reads stdin when omitted or '-'")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the translation to this file instead of stdout"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Fail on node kinds without a translation rule")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .help("Spaces per indentation level")
                .value_parser(value_parser!(u8).range(..=MAX_INDENT_WIDTH))
                .default_value("4"),
        )
}

fn read_input(input: Option<&String>) -> Result<String> {
    match input.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read syntax tree from stdin")?;
            Ok(source)
        }
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let matches = cli().get_matches();

    let mut options = TranslateOptions::new();
    if let Some(width) = matches.get_one::<u8>("indent-width") {
        options = options.with_indent_width(usize::from(*width));
    }
    if matches.get_flag("strict") {
        options = options.strict();
    }

    // The whole tree is read before any output is produced
    let source = read_input(matches.get_one::<String>("input"))?;
    let module = TreeParser::new().parse_str(&source)?;
    let renderer = ProgramRenderer::new(options);

    let diagnostics = match matches.get_one::<String>("output") {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("failed to create '{}'", path))?;
            let mut sink = io::BufWriter::new(file);
            renderer.render_to(&module, &mut sink)?
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            let diagnostics = renderer.render_to(&module, &mut sink)?;
            sink.flush()?;
            diagnostics
        }
    };

    for diagnostic in &diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    Ok(())
}
