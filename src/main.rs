//! instantiate's application entry point.
//! Parses arguments, sets up logging and reports the outcome of creating a project.

use instantiate::{
    cli::{get_args, run},
    constants::DESTINATION_EXISTS_MESSAGE,
    error::{default_error_handler, Error},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let cwd = match &args.directory {
        Some(directory) => directory.clone(),
        None => match std::env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => return default_error_handler(Error::IoError(e)),
        },
    };

    match run(&args, &cwd) {
        Ok(destination) => println!("Created project in {}.", destination.display()),
        Err(Error::DestinationExistsError { .. }) => println!("{DESTINATION_EXISTS_MESSAGE}"),
        Err(err) => default_error_handler(err),
    }
}
