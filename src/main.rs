//! tc-skeleton's main application entry point.
//! Handles command-line argument parsing and drives the generation flow.

use tc_skeleton::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    feature::Feature,
    processor::{default_skeleton_root, generate},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the feature name and derives the identifier
/// 2. Resolves the skeleton root directory
/// 3. Copies every included skeleton tree and rewrites the placeholders
/// 4. Relocates the activator sources of the core and UI plugins
fn run(args: Args) -> Result<()> {
    let feature = Feature::new(&args.name)?;
    let skeleton_root = match args.skeletons {
        Some(path) => path,
        None => default_skeleton_root()?,
    };
    log::debug!("Using skeleton root: {}", skeleton_root.display());

    generate(&skeleton_root, &args.dir, &feature, args.no_ui)
}
