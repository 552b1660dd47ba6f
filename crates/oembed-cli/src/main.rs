use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use oembed_resource::{OembedResource, ResourceFields, ResponseFormat};
use tracing::{debug, warn};

#[derive(Parser)]
#[command(name = "oembed-render")]
#[command(about = "Validate an oEmbed field document and render it as JSON or XML")]
struct Cli {
    /// Field document (JSON). Read from stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
    /// Response format: json or xml. Defaults to $OEMBED_RESPONSE_FORMAT, then json.
    #[arg(long)]
    format: Option<String>,
    /// Print Content-Type and Cache-Control lines before the body.
    #[arg(long)]
    headers: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let document = read_document(cli.input.as_ref())?;
    let fields: ResourceFields = serde_json::from_str(&document)
        .context("parse field document")?;
    let resource = fields.into_resource()?;

    let format = match cli.format.as_deref() {
        Some(name) => name.parse::<ResponseFormat>()?,
        None => ResponseFormat::from_env(),
    };
    debug!(kind = %resource.kind(), %format, "rendering resource");

    let body = resource.render(format).inspect_err(|err| {
        warn!(kind = %resource.kind(), %format, error = %err, "render failed");
    })?;

    let mut stdout = io::stdout().lock();
    if cli.headers {
        write_headers(&mut stdout, &resource, format)?;
    }
    stdout.write_all(body.as_bytes())?;
    if format == ResponseFormat::Json {
        writeln!(stdout)?;
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn read_document(path: Option<&PathBuf>) -> Result<String> {
    if let Some(path) = path {
        debug!(path = %path.display(), "reading field document");
        return fs::read_to_string(path)
            .with_context(|| format!("read field document {}", path.display()));
    }

    debug!("reading field document from stdin");
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Err(anyhow!("field document required via --input or stdin"));
    }
    Ok(buf)
}

fn write_headers(
    out: &mut impl Write,
    resource: &OembedResource,
    format: ResponseFormat,
) -> Result<()> {
    writeln!(out, "Content-Type: {}", format.content_type())?;
    if let Some(cache_control) = resource.cache_control() {
        writeln!(out, "Cache-Control: {cache_control}")?;
    }
    writeln!(out)?;
    Ok(())
}
