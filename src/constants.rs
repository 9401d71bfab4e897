//! Common constants used throughout the tc-skeleton application.

/// Placeholder token replaced with the dot-separated feature identifier
pub const ID_PLACEHOLDER: &str = "{%skeleton}";

/// Placeholder token replaced with the human-readable feature name
pub const NAME_PLACEHOLDER: &str = "{%skeletonName}";

/// Namespace prefix of every generated plugin
pub const PLUGIN_PREFIX: &str = "org.eclipse.tracecompass.extension.";

/// Root of the internal package inside a generated plugin, relative to the
/// plugin directory
pub const INTERNAL_SRC_ROOT: &str = "src/org/eclipse/tracecompass/extension/internal";

/// Generated files moved from `src/` into the internal package after copy
pub const RELOCATED_FILES: [&str; 2] = ["Activator.java", "package-info.java"];

/// Name of the directory holding the skeleton trees, co-located with the
/// executable
pub const SKELETONS_DIR: &str = "skeletons";
