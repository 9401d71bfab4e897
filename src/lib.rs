//! tc-skeleton generates the boilerplate plugins and feature for a new Trace
//! Compass extension. It copies a fixed set of skeleton directory trees to a
//! destination derived from the feature name and rewrites two placeholder
//! tokens in every copied file.

/// Command-line interface module for the tc-skeleton application
pub mod cli;

/// Common constants: placeholder tokens, plugin namespace, skeleton layout
pub mod constants;

/// Error types and handling for the tc-skeleton application
pub mod error;

/// Feature name validation and identifier derivation
pub mod feature;

/// Core scaffolding operations: copy, substitute, relocate
pub mod processor;

/// The skeleton table mapping template kinds to sources and destinations
pub mod skeleton;
