//! RDS model code generator.
//!
//! Reads the AWS RDS Smithy JSON AST model and generates Rust source files
//! for the `rdskit-model` crate. The only argument is the path of the
//! generator configuration (defaults to `rds.toml`). Written files are
//! passed through `rustfmt` when it is on `PATH`.

mod codegen;
mod config;
mod model;
mod shapes;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{CodegenConfig, DEFAULT_CONFIG};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);

    let config = CodegenConfig::load(&config_path)?;
    init_tracing(&config.log_level)?;

    info!(config = %config_path.display(), "loaded generator config");
    info!(model = %config.paths.model.display(), "reading Smithy model");

    let smithy_model = model::SmithyModel::load(&config.paths.model)?;
    info!(
        smithy = %smithy_model.smithy,
        shapes = smithy_model.shapes.len(),
        "parsed model"
    );

    // Resolve shapes and types.
    let resolved = shapes::resolve_model(&smithy_model, &config)
        .context("Failed to resolve model shapes")?;

    info!(
        operations = resolved.operations.len(),
        enums = resolved.enums.len(),
        shared_structs = resolved.shared_structs.len(),
        input_structs = resolved.input_count(),
        output_structs = resolved.output_count(),
        "resolved model"
    );

    // Generate code.
    let files = codegen::generate_all(&resolved, &config).context("Failed to generate code")?;

    // Write output files.
    let output_dir = &config.paths.output;
    let mut written = Vec::with_capacity(files.len());
    for (rel_path, content) in &files {
        let full_path = output_dir.join(rel_path);
        ensure_parent_dir(&full_path)?;
        fs::write(&full_path, content)
            .with_context(|| format!("Failed to write {}", full_path.display()))?;
        info!(path = %full_path.display(), bytes = content.len(), "wrote file");
        written.push(full_path);
    }

    format_sources(&written)?;

    info!(
        files = files.len(),
        output = %output_dir.display(),
        "code generation complete"
    );

    Ok(())
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the configured `log_level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Run `rustfmt` over the written sources.
///
/// A missing `rustfmt` binary is logged and skipped. A failing run is an error.
fn format_sources(paths: &[PathBuf]) -> Result<()> {
    let mut command = Command::new("rustfmt");
    command.args(["--edition", "2024"]).args(paths);
    let output = match command.output() {
        Ok(output) => output,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!("rustfmt not found, generated sources left unformatted");
            return Ok(());
        }
        Err(err) => return Err(err).context("Failed to invoke rustfmt"),
    };
    if !output.status.success() {
        bail!(
            "rustfmt failed with {}:\n{}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    info!(files = paths.len(), "formatted generated sources");
    Ok(())
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
