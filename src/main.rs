//! CLI for linkfield - prints the links of a link-list field value

use clap::Parser;
use linkfield::config::{DEFAULT_MEDIA_PREFIX, MEDIA_LINK_PREFIX, REQUEST_EXTENSION};
use linkfield::{Field, LinkListField, MemoryCatalog, ResolutionContext, LINKS_ROOT};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input XML file path (`-` reads stdin)
    input: PathBuf,

    /// Tab-separated item catalog: `<id>\t<url>[\t<media-url>]`
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Root element name of the field value
    #[arg(long, default_value = LINKS_ROOT)]
    root: String,

    /// Prefix for dynamic media URLs
    #[arg(long)]
    media_link_prefix: Option<String>,

    /// Prefix used when no media link prefix is set
    #[arg(long, default_value = "~/media/")]
    default_media_prefix: String,

    /// Extension forced onto dynamic media URLs
    #[arg(long)]
    request_extension: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!(error = %e, "link listing failed");
        eprintln!("Error reading links: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> linkfield::Result<()> {
    let value = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let catalog = match &args.catalog {
        Some(path) => MemoryCatalog::parse(&std::fs::read_to_string(path)?)?,
        None => MemoryCatalog::new(),
    };

    let mut config = HashMap::new();
    config.insert(DEFAULT_MEDIA_PREFIX.to_string(), args.default_media_prefix);
    if let Some(prefix) = args.media_link_prefix {
        config.insert(MEDIA_LINK_PREFIX.to_string(), prefix);
    }
    if let Some(ext) = args.request_extension {
        config.insert(REQUEST_EXTENSION.to_string(), ext);
    }

    let context = ResolutionContext::new(&catalog, &catalog, &catalog, &config);
    let field = Field::new(args.input.display().to_string(), String::new());
    let view = LinkListField::with_runtime_value(&field, args.root, value, context);

    for link in view.links()? {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            link.field_type(),
            link.title(),
            link.target(),
            link.url(),
            link.dynamic_url()
        );
    }

    Ok(())
}
