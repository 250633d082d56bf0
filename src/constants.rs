//! Common constants used throughout instantiate.

/// Top-level template variable reserved for project metadata
pub const PROJECT_KEY: &str = "project";

/// Separator between the project number and name in a numbered destination
pub const NUMBER_SEPARATOR: &str = "-";

/// Message printed when the destination is already present
pub const DESTINATION_EXISTS_MESSAGE: &str = "Destination already exists. Not overwriting!";
