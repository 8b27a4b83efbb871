//! Configuration loading with template bootstrap

use std::path::PathBuf;

use cfg_fs::NormalizedPath;

use crate::config::Config;
use crate::error::Result;
use crate::parser::parse_str;

/// Loads a tagged INI configuration file, creating it from a template
/// on first use.
///
/// The first `load` after deployment finds no file, writes the template
/// content (or an empty file) to the config path, and reports
/// [`LoadOutcome::Created`] so the caller can detect first-run and exit
/// cleanly or prompt the operator. Every later `load` parses the file
/// and reports [`LoadOutcome::Loaded`].
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: NormalizedPath,
    template_path: Option<NormalizedPath>,
}

/// The two ways a `load` call can finish.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The file was missing and has been created; nothing was parsed.
    Created(PathBuf),
    /// The file existed and parsed cleanly.
    Loaded(Config),
}

impl LoadOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, LoadOutcome::Created(_))
    }

    pub fn loaded(&self) -> Option<&Config> {
        match self {
            LoadOutcome::Loaded(config) => Some(config),
            LoadOutcome::Created(_) => None,
        }
    }

    pub fn into_loaded(self) -> Option<Config> {
        match self {
            LoadOutcome::Loaded(config) => Some(config),
            LoadOutcome::Created(_) => None,
        }
    }
}

impl ConfigLoader {
    /// Create a loader for the given config file path.
    ///
    /// `config_path` must be non-empty; an empty path surfaces as an
    /// I/O error from [`ConfigLoader::load`].
    pub fn new(config_path: impl Into<NormalizedPath>) -> Self {
        Self {
            config_path: config_path.into(),
            template_path: None,
        }
    }

    /// Create a loader for `file_name` inside an explicitly passed base
    /// directory.
    pub fn in_dir(base: &NormalizedPath, file_name: &str) -> Self {
        Self::new(base.join(file_name))
    }

    /// Register a template whose content seeds the config file when it
    /// does not exist yet.
    ///
    /// Without a template, a missing config file is created empty. A
    /// registered template that is itself missing surfaces as an I/O
    /// error from the bootstrap call.
    pub fn with_template(mut self, template_path: impl Into<NormalizedPath>) -> Self {
        self.template_path = Some(template_path.into());
        self
    }

    /// The path this loader reads from and creates on first run.
    pub fn config_path(&self) -> &NormalizedPath {
        &self.config_path
    }

    /// Read and parse the config file, creating it first if missing.
    pub fn load(&self) -> Result<LoadOutcome> {
        if !self.config_path.exists() {
            let template = match &self.template_path {
                Some(path) => cfg_fs::read_text(path)?,
                None => String::new(),
            };
            cfg_fs::write_text(&self.config_path, &template)?;
            tracing::info!("created configuration file at {}", self.config_path);
            return Ok(LoadOutcome::Created(self.config_path.to_native()));
        }

        let content = cfg_fs::read_text(&self.config_path)?;
        let config = parse_str(&content, &self.config_path)?;
        Ok(LoadOutcome::Loaded(config))
    }
}
