pub(crate) mod config;
pub(crate) mod discover;
pub(crate) mod embed;
pub(crate) mod identifier;
pub(crate) mod literal;

pub use config::{EmbedConfig, DEFAULT_EXTENSION, DEFAULT_RESOURCE_DIR_NAME};
pub use discover::{discover, DiscoveryError, ResourceFile, SymlinkRules};
pub use embed::{embed_file, output_path, run, EmittedLiteral};
pub use identifier::{colliding_identifiers, derive_identifier, Identifier};
pub use literal::{write_literal, ENTRIES_PER_LINE, MARKER_INTERVAL};
