//! qtdoc: attach Qt reference documentation to a JSON declaration model.
//!
//! `qtdoc --docs /usr/share/qt5/doc --module Widgets model.json -o out.json`

use anyhow::{Context, Result};
use clap::Parser;
use qtdoc::{Documentation, DocumentationStore, MatchConfig, Model};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qtdoc",
    about = "Attach Qt reference documentation to parsed C++ declarations"
)]
struct Cli {
    /// Declaration model as JSON. If omitted, reads from stdin.
    model: Option<PathBuf>,

    /// Documentation root containing qt<module>.qch or qt<module>/*.html
    #[arg(short = 'd', long)]
    docs: PathBuf,

    /// Qt module name, e.g. Core or Widgets
    #[arg(short = 'm', long)]
    module: String,

    /// Output file. If omitted, writes to stdout.
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// JSON file overriding the matching tunables
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut model = read_model(cli.model.as_deref())?;
    model.validate().context("invalid declaration model")?;

    let config = match &cli.config {
        Some(path) => read_config(path)?,
        None => MatchConfig::default(),
    };

    let store = DocumentationStore::load(&cli.docs, &cli.module);
    let docs = Documentation::for_model(store, &model).with_config(config);
    let summary = document_all(&docs, &mut model);
    summary.log();

    let json = serde_json::to_string_pretty(&model).context("failed to serialize model")?;
    match &cli.output {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write stdout")?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_model(path: Option<&Path>) -> Result<Model> {
    let input = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };
    serde_json::from_str(&input).context("failed to parse declaration model")
}

fn read_config(path: &Path) -> Result<MatchConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

/// Documented/total counts per declaration kind.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    functions: (usize, usize),
    properties: (usize, usize),
    enums: (usize, usize),
    types: (usize, usize),
}

impl Summary {
    fn log(&self) {
        info!(
            functions = %ratio(self.functions),
            properties = %ratio(self.properties),
            enums = %ratio(self.enums),
            types = %ratio(self.types),
            "documentation attached"
        );
    }
}

fn ratio((documented, total): (usize, usize)) -> String {
    format!("{documented}/{total}")
}

/// Functions first, so properties can borrow accessor documentation.
fn document_all(docs: &Documentation, model: &mut Model) -> Summary {
    let mut summary = Summary::default();

    for id in model.function_ids() {
        tally(&mut summary.functions, docs.document_function(model, id));
    }
    for id in model.property_ids() {
        tally(&mut summary.properties, docs.document_property(model, id));
    }
    for id in model.enum_ids() {
        tally(&mut summary.enums, docs.document_enum(model, id));
    }
    let classes: Vec<_> = model.class_ids().collect();
    for id in classes {
        tally(&mut summary.types, docs.document_type(model, id));
    }
    summary
}

fn tally(count: &mut (usize, usize), documented: bool) {
    count.1 += 1;
    if documented {
        count.0 += 1;
    }
}
