//! Core scaffolding operations: copying skeleton trees, substituting the
//! placeholder tokens and relocating the generated activator sources.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::constants::{
    ID_PLACEHOLDER, INTERNAL_SRC_ROOT, NAME_PLACEHOLDER, RELOCATED_FILES, SKELETONS_DIR,
};
use crate::error::{Error, Result};
use crate::feature::Feature;
use crate::skeleton::SkeletonKind;

/// Reads a skeleton file. Skeleton sources are fixed to ISO-8859-1, which
/// decodes any byte sequence, so this only fails on I/O errors.
fn read_latin1(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(encoding_rs::mem::decode_latin1(&bytes).into_owned())
}

/// Replaces every occurrence of both placeholder tokens. There is no escape
/// mechanism: a literal token cannot survive into the output.
fn substitute(content: &str, feature: &Feature) -> String {
    content
        .replace(ID_PLACEHOLDER, feature.identifier())
        .replace(NAME_PLACEHOLDER, feature.name())
}

/// Resolves the skeleton root directory.
///
/// The skeleton trees are co-located with the program: the `skeletons`
/// directory next to the executable is used when present, otherwise the one
/// in the current directory.
pub fn default_skeleton_root() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    if let Some(dir) = exe.parent() {
        let candidate = dir.join(SKELETONS_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }
    Ok(PathBuf::from(SKELETONS_DIR))
}

/// Computes the destination root for a feature, e.g.
/// `{base_dir}/org.eclipse.tracecompass.extension.my.test.plugin`.
pub fn destination_root(base_dir: &Path, feature: &Feature) -> PathBuf {
    base_dir.join(feature.plugin_id())
}

/// Destination directory for one skeleton kind: the root plus the kind's
/// suffix.
pub fn plugin_dir(base_dir: &Path, feature: &Feature, kind: SkeletonKind) -> PathBuf {
    base_dir.join(format!("{}{}", feature.plugin_id(), kind.suffix()))
}

/// Fails with a collision error if the destination already exists.
pub fn ensure_destination_free(dest: &Path) -> Result<()> {
    if dest.exists() {
        return Err(Error::DestinationExists { dest: dest.display().to_string() });
    }
    Ok(())
}

/// Recursively copies a skeleton tree to `dest`, rewriting the placeholder
/// tokens in every file.
///
/// # Errors
/// * `Error::MissingSkeleton` if `src` is not a directory
/// * `Error::DestinationExists` if `dest` already exists
pub fn copy_and_update(src: &Path, dest: &Path, feature: &Feature) -> Result<()> {
    if !src.is_dir() {
        return Err(Error::MissingSkeleton { path: src.display().to_string() });
    }
    ensure_destination_free(dest)?;

    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| Error::Io(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::Path(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target.display());
            fs::create_dir_all(&target)?;
        } else {
            debug!("Writing file: {}", target.display());
            let content = read_latin1(entry.path())?;
            fs::write(&target, substitute(&content, feature))?;
        }
    }
    Ok(())
}

/// Moves the activator and package descriptor from the plugin's `src/` root
/// into the internal package directory for `subpackage` (`core` or `ui`),
/// creating the package directory first.
pub fn relocate_sources(plugin_root: &Path, feature: &Feature, subpackage: &str) -> Result<()> {
    let package_dir = plugin_root
        .join(INTERNAL_SRC_ROOT)
        .join(feature.identifier_path())
        .join(subpackage);
    debug!("Creating package directory: {}", package_dir.display());
    fs::create_dir_all(&package_dir)?;

    for file in RELOCATED_FILES {
        let from = plugin_root.join("src").join(file);
        let to = package_dir.join(file);
        debug!("Moving {} -> {}", from.display(), to.display());
        fs::rename(from, to)?;
    }
    Ok(())
}

/// Generates all plugin trees for a feature.
///
/// Copies each included skeleton tree to the destination root plus the
/// kind's suffix, then relocates the activator sources of the kinds that
/// carry an internal subpackage. Destinations are checked for collisions up
/// front, before anything is written; a mid-copy I/O failure still leaves a
/// partial tree behind, there is no rollback.
pub fn generate(
    skeleton_root: &Path,
    base_dir: &Path,
    feature: &Feature,
    no_ui: bool,
) -> Result<()> {
    let dest_root = destination_root(base_dir, feature);
    let included: Vec<SkeletonKind> =
        SkeletonKind::ALL.into_iter().filter(|kind| kind.included(no_ui)).collect();

    for kind in &included {
        ensure_destination_free(&plugin_dir(base_dir, feature, *kind))?;
    }

    println!("Copying skeleton directories to {}[.*]", dest_root.display());
    for kind in &included {
        debug!("Processing {}", kind);
        let src = skeleton_root.join(kind.source_dir());
        let dest = plugin_dir(base_dir, feature, *kind);
        copy_and_update(&src, &dest, feature)?;
        if let Some(subpackage) = kind.subpackage() {
            relocate_sources(&dest, feature, subpackage)?;
        }
    }

    println!("------------------------------");
    println!(
        "Congratulations! Your new plugins are ready to be populated and add magnificent features to Trace Compass!"
    );
    println!();
    println!(
        "For the Hudson jobs to take them in, don't forget to add them to the appropriate pom.xml files and if necessary, create a pom.xml file in the parent directory"
    );
    Ok(())
}
