//! Command-line interface implementation for instantiate.
//! Provides argument parsing with clap and the glue that turns arguments into
//! a project creation call.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::{Path, PathBuf};

use crate::{
    context::load_context,
    error::Result,
    ignore::SkipPatterns,
    processor::Processor,
    renderer::MiniJinjaRenderer,
};

/// Command-line arguments structure for instantiate.
#[derive(Parser, Debug)]
#[command(author, version, about = "instantiate: create numbered projects from a template", long_about = None)]
pub struct Args {
    /// Path to the template directory
    #[arg(value_name = "TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Name of the new project
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Prefix the project with the next number of this many digits
    #[arg(long, value_name = "DIGITS", value_parser = clap::value_parser!(u16).range(1..))]
    pub numbering: Option<u16>,

    /// YAML file whose contents are available to templates under the file's stem.
    /// May be given more than once.
    #[arg(long, value_name = "FILE")]
    pub context: Vec<PathBuf>,

    /// Glob patterns of file names that are copied without rendering
    #[arg(long = "no-replace", value_name = "PATTERN", num_args = 1..)]
    pub no_replace: Vec<String>,

    /// Directory in which to create the project (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

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
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Creates the project described by `args` inside `cwd`.
///
/// Relative template and context paths are resolved against `cwd`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the created project
pub fn run<P: AsRef<Path>>(args: &Args, cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();
    let template_dir = cwd.join(&args.template_dir);
    let context = load_context(args.context.iter().map(|path| cwd.join(path)))?;
    let skip = SkipPatterns::new(&args.no_replace)?;
    let renderer = MiniJinjaRenderer::new();

    Processor::new(&renderer, &skip, &context, args.numbering.map(usize::from)).make_project(
        cwd,
        template_dir,
        &args.project_name,
    )
}
