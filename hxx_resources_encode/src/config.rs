use crate::discover::SymlinkRules;

pub const DEFAULT_RESOURCE_DIR_NAME: &str = "resources";
pub const DEFAULT_EXTENSION: &str = "hxx";

/// Settings for one embedding pass.
#[derive(Clone, Debug)]
pub struct EmbedConfig {
    /// Directory below which `resources` directories are searched (recursively)
    pub root: std::path::PathBuf,
    /// Name of the directories whose files are resources
    pub resource_dir_name: String,
    /// Extension appended to a resource path to form its output path.
    ///
    /// Files already ending in `.<extension>` are never treated as resources.
    pub extension: String,
    /// What to do about symbolic links inside resource directories
    pub links: SymlinkRules,
}

impl EmbedConfig {
    pub fn new<P: Into<std::path::PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            resource_dir_name: DEFAULT_RESOURCE_DIR_NAME.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
            links: SymlinkRules::default(),
        }
    }

    pub fn with_resource_dir_name<S: Into<String>>(mut self, name: S) -> Self {
        self.resource_dir_name = name.into();
        self
    }

    pub fn with_extension<S: Into<String>>(mut self, extension: S) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_links(mut self, links: SymlinkRules) -> Self {
        self.links = links;
        self
    }

    /// Suffix (including the dot) that marks generated files
    pub(crate) fn output_suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}
