use std::path::PathBuf;

use anyhow::{Context, Result};
use apidoc_swagger::{ConvertOptions, ProjectInfo, convert, parse_endpoints};
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(name = "apidoc-swagger")]
#[command(about = "Convert apidoc output into a Swagger 2.0 document")]
struct Args {
    /// apidoc `api_data.json`
    #[arg(short, long)]
    input: PathBuf,

    /// apidoc `api_project.json`
    #[arg(short, long)]
    project: Option<PathBuf>,

    /// Options file (TOML). Defaults apply when it does not exist.
    #[arg(short, long, default_value = "apidoc-swagger.toml")]
    config: PathBuf,

    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep every parameter group as plain parameters
    #[arg(long)]
    no_definitions: bool,

    /// Parameter group that never becomes a shared definition (repeatable)
    #[arg(long = "ignore-group")]
    ignore_groups: Vec<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let mut options = ConvertOptions::load(&args.config)
        .with_context(|| format!("reading options from {}", args.config.display()))?;
    if args.no_definitions {
        options.generate_definitions = false;
    }
    options.ignored_group_names.extend(args.ignore_groups);

    info!(input = %args.input.display(), "reading endpoints");
    let api_data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let endpoints = parse_endpoints(&api_data)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let project = match &args.project {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            ProjectInfo::parse(&content).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ProjectInfo::default(),
    };

    let conversion = convert(&endpoints, &project, &options);
    if !conversion.diagnostics.is_empty() {
        info!(count = conversion.diagnostics.len(), "conversion finished with diagnostics");
    }

    let json = if args.compact {
        serde_json::to_string(&conversion.document)?
    } else {
        conversion.document.to_json_pretty()?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            info!(output = %path.display(), endpoints = endpoints.len(), "wrote swagger document");
        }
        None => println!("{json}"),
    }

    Ok(())
}
