//! The skeleton table: which template trees exist, where they come from and
//! where their output goes.

use std::fmt;

/// The four skeleton trees a feature is built from.
///
/// Each kind maps to a fixed source directory, a destination suffix and an
/// optional internal subpackage into which its activator sources are moved
/// after copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonKind {
    /// The Eclipse feature wrapping the plugins
    Feature,
    /// The core (non-UI) plugin
    Core,
    /// Unit tests for the core plugin
    CoreTests,
    /// The UI plugin, skipped with `--no-ui`
    Ui,
}

impl SkeletonKind {
    /// All kinds, in generation order.
    pub const ALL: [SkeletonKind; 4] =
        [SkeletonKind::Feature, SkeletonKind::Core, SkeletonKind::CoreTests, SkeletonKind::Ui];

    /// Name of the source directory under the skeleton root.
    pub fn source_dir(self) -> &'static str {
        match self {
            SkeletonKind::Feature => "skeleton.feature",
            SkeletonKind::Core => "skeleton.core",
            SkeletonKind::CoreTests => "skeleton.core.tests",
            SkeletonKind::Ui => "skeleton.ui",
        }
    }

    /// Suffix appended to the destination root for this kind.
    pub fn suffix(self) -> &'static str {
        match self {
            SkeletonKind::Feature => "",
            SkeletonKind::Core => ".core",
            SkeletonKind::CoreTests => ".core.tests",
            SkeletonKind::Ui => ".ui",
        }
    }

    /// Internal subpackage the activator and package descriptor are moved
    /// into, when this kind has one.
    pub fn subpackage(self) -> Option<&'static str> {
        match self {
            SkeletonKind::Core => Some("core"),
            SkeletonKind::Ui => Some("ui"),
            SkeletonKind::Feature | SkeletonKind::CoreTests => None,
        }
    }

    /// Whether this kind is generated for the given invocation.
    pub fn included(self, no_ui: bool) -> bool {
        !(self == SkeletonKind::Ui && no_ui)
    }
}

impl fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_dir())
    }
}
