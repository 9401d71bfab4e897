//! Feature name handling: derivation of the plugin identifier from the
//! human-readable feature name.

use std::path::PathBuf;

use crate::constants::PLUGIN_PREFIX;
use crate::error::{Error, Result};

/// A validated feature name together with its derived identifier.
///
/// The identifier is a pure function of the name: lower-cased, with spaces
/// replaced by dots. `"My Test Plugin"` becomes `"my.test.plugin"`, and the
/// plugins will be named `org.eclipse.tracecompass.extension.my.test.plugin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    name: String,
    identifier: String,
}

impl Feature {
    /// Validates the name and derives the identifier.
    ///
    /// # Errors
    /// * Returns `Error::InvalidName` if the name is empty or whitespace-only
    pub fn new(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::InvalidName("name must not be empty".to_string()));
        }
        let identifier = name.to_lowercase().replace(' ', ".");
        Ok(Self { name: name.to_string(), identifier })
    }

    /// The human-readable display name, as given on the command line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dot-separated lower-case identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The fully qualified plugin id, e.g.
    /// `org.eclipse.tracecompass.extension.my.test.plugin`.
    pub fn plugin_id(&self) -> String {
        format!("{}{}", PLUGIN_PREFIX, self.identifier)
    }

    /// The identifier with dots converted to path separators, used to build
    /// the internal package directory.
    pub fn identifier_path(&self) -> PathBuf {
        self.identifier.split('.').collect()
    }
}
