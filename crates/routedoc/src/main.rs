use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use routedoc::Manifest;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "routedoc", version, about = "OpenAPI documentation for declared routes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the document over HTTP
    Serve(ServeArgs),
    /// Print the document to stdout
    Dump(DumpArgs),
}

#[derive(Args)]
struct ManifestArgs {
    /// Route manifest (TOML)
    #[arg(short, long, env = "ROUTEDOC_MANIFEST")]
    manifest: PathBuf,

    /// Reject routes with an empty method, path, or parameter name
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct ServeArgs {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Address to bind, overriding the manifest
    #[arg(long, env = "ROUTEDOC_BIND")]
    bind: Option<SocketAddr>,

    /// Path to serve the document at, overriding the manifest
    #[arg(long, env = "ROUTEDOC_SPEC_PATH")]
    spec_path: Option<String>,
}

#[derive(Args)]
struct DumpArgs {
    #[command(flatten)]
    manifest: ManifestArgs,

    /// Indent the output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Serve(args) => serve(args).await,
        Command::Dump(args) => dump(args),
    }
}

fn load(args: &ManifestArgs) -> anyhow::Result<(Manifest, routedoc::RouteRegistry)> {
    let manifest = Manifest::load(&args.manifest)?;
    let registry = manifest
        .registry(args.strict)
        .with_context(|| format!("registering routes from {}", args.manifest.display()))?;
    Ok((manifest, registry))
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let (manifest, registry) = load(&args.manifest)?;
    let config = manifest
        .server
        .clone()
        .with_overrides(args.bind, args.spec_path)
        .context("invalid server settings")?;

    routedoc::http::serve(&config, Arc::new(registry), manifest.assembler())
        .await
        .with_context(|| format!("serving on {}", config.bind))
}

fn dump(args: DumpArgs) -> anyhow::Result<()> {
    let (manifest, registry) = load(&args.manifest)?;
    let document = manifest.assembler().generate(&registry.list());

    let output = if args.pretty {
        document.to_json_pretty()?
    } else {
        String::from_utf8(document.to_json()?).context("document is not valid UTF-8")?
    };
    println!("{output}");
    Ok(())
}
