use anyhow::Context as _;
use std::io::Write as _;
use tracing::{debug, info, warn};

use crate::config::EmbedConfig;
use crate::discover::{discover, ResourceFile};
use crate::identifier::{colliding_identifiers, Identifier};
use crate::literal::write_literal;

/// Result of embedding one resource
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedLiteral {
    /// File the literal was written to
    pub target: std::path::PathBuf,
    /// Name of the declared array
    pub identifier: Identifier,
    /// Number of array entries, i.e. the size of the resource
    pub byte_count: u64,
}

/// `path` with `.<extension>` appended (not replacing any existing extension)
pub fn output_path<P: AsRef<std::path::Path>>(path: P, extension: &str) -> std::path::PathBuf {
    let mut target = path.as_ref().as_os_str().to_owned();
    target.push(".");
    target.push(extension);
    target.into()
}

/// Write the array literal for `resource` next to it.
///
/// Both files are closed before this returns, whether it succeeds or not.
/// If writing fails halfway, the truncated output is left behind.
pub fn embed_file(resource: &ResourceFile, extension: &str) -> anyhow::Result<EmittedLiteral> {
    let identifier = resource.identifier();
    let target = output_path(&resource.path, extension);

    let input = std::fs::File::open(&resource.path).with_context(|| format!("couldn't open resource '{}'", resource.path.display()))?;
    let output = std::fs::File::create(&target).with_context(|| format!("couldn't create '{}'", target.display()))?;
    let mut writer = std::io::BufWriter::new(output);
    let byte_count = write_literal(&identifier, input, &mut writer)
        .with_context(|| format!("couldn't embed '{}' into '{}'", resource.path.display(), target.display()))?;
    // dropping a BufWriter swallows errors, so flush explicitly
    writer.flush().with_context(|| format!("couldn't write '{}'", target.display()))?;

    debug!(target = %target.display(), bytes = byte_count, "wrote literal");
    Ok(EmittedLiteral {
        target,
        identifier,
        byte_count,
    })
}

/// Embed every resource below `config.root`, one after the other.
///
/// Before each resource is processed, its path and identifier are written to `progress` on separate lines.
/// The first error aborts the run; resources embedded up to that point keep their output.
pub fn run<W: std::io::Write>(config: &EmbedConfig, mut progress: W) -> anyhow::Result<std::vec::Vec<EmittedLiteral>> {
    let resources = discover(config)?;

    // colliding names still get written, the compiler will complain about them
    for identifier in colliding_identifiers(resources.iter().map(|r| &r.file_name)) {
        let paths: std::vec::Vec<_> = resources
            .iter()
            .filter(|r| r.identifier() == identifier)
            .map(|r| r.path.display().to_string())
            .collect();
        warn!(%identifier, ?paths, "several resources share an identifier");
    }

    let mut emitted = std::vec::Vec::with_capacity(resources.len());
    for resource in resources.iter() {
        writeln!(progress, "{}", resource.path.display()).context("couldn't report progress")?;
        writeln!(progress, "{}", resource.identifier()).context("couldn't report progress")?;
        emitted.push(embed_file(resource, &config.extension)?);
    }
    progress.flush().context("couldn't report progress")?;

    info!(count = emitted.len(), root = %config.root.display(), "embedded resources");
    Ok(emitted)
}
