//! instantiate creates new project directories from a template.
//! It copies the template, optionally prefixes the new directory with the next
//! sequential number among its siblings, and renders every file with MiniJinja.

/// Command-line interface module for the instantiate application
pub mod cli;

pub mod constants;

/// Context files and the variable mapping handed to templates
pub mod context;

/// Error types and handling for the instantiate application
pub mod error;

/// Glob patterns of files that are copied but not rendered
pub mod ignore;

pub mod logger;

/// Next-number inference over sibling directories
pub mod numbering;

/// Core project creation orchestration
/// Copies the template and renders the copy in place
pub mod processor;

/// Template rendering functionality
pub mod renderer;

/// Rollback of partially created projects
pub mod transaction;
