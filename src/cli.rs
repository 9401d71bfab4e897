//! Command-line interface implementation for tc-skeleton.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for tc-skeleton.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "tc-skeleton: creates the plugins and feature for a new Trace Compass extension",
    long_about = None
)]
pub struct Args {
    /// The human readable name of the plugins and feature to add. The plugin
    /// names will be the dot-separated lowercase name. For example if name is
    /// "My Test Plugin", plugins will be named
    /// org.eclipse.tracecompass.extension.my.test.plugin
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory in which to add the plugins
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Do not add a UI plugin for this feature
    #[arg(long)]
    pub no_ui: bool,

    /// Directory containing the skeleton trees.
    /// Defaults to the `skeletons` directory next to the executable.
    #[arg(long, value_name = "DIR")]
    pub skeletons: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
