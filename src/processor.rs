//! Core project creation.
//! Copies a template directory next to its numbered siblings and renders
//! every file of the copy in place.

use crate::{
    constants::NUMBER_SEPARATOR,
    context::{build_variables, Context, ProjectInfo},
    error::{Error, Result},
    ignore::SkipPatterns,
    numbering::infer_next_number,
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    transaction::DestinationGuard,
};
use log::{debug, info, warn};
use std::collections::VecDeque;
use std::fs::{self, File, FileTimes, Metadata, Permissions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Directory permissions that are applied once the project is fully rendered.
type PendingPermissions = Vec<(PathBuf, Permissions)>;

/// Returns the destination directory name, `03-foo` or just `foo`.
pub fn destination_name(project_name: &str, number: Option<&str>) -> String {
    match number {
        Some(number) => format!("{number}{NUMBER_SEPARATOR}{project_name}"),
        None => project_name.to_string(),
    }
}

/// Creates the destination directory, failing if anything is already there.
fn create_destination(destination: &Path) -> Result<()> {
    match fs::create_dir(destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(Error::DestinationExistsError {
            destination: destination.display().to_string(),
        }),
        Err(e) => Err(Error::file(destination, e)),
    }
}

/// Recursively copies the contents of `template_dir` into the existing
/// directory `destination`.
///
/// Symlinks are followed and their targets copied. File permissions are
/// carried over by the copy itself and file timestamps are applied after it
/// where the platform allows; directory permissions are returned so
/// they can be applied after rendering, when nothing else needs to be
/// written into those directories.
pub fn copy_template(template_dir: &Path, destination: &Path) -> Result<PendingPermissions> {
    let template_dir = fs::canonicalize(template_dir).map_err(|e| Error::file(template_dir, e))?;
    let destination = fs::canonicalize(destination).map_err(|e| Error::file(destination, e))?;

    let root_permissions =
        fs::metadata(&template_dir).map_err(|e| Error::file(&template_dir, e))?.permissions();
    let mut pending = vec![(destination.clone(), root_permissions)];

    // A destination created inside the template must not be copied into itself.
    let walker = WalkDir::new(&template_dir)
        .follow_links(true)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| entry.path() != destination);

    for entry in walker {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(&template_dir)
            .map_err(|e| Error::file(entry.path(), io::Error::other(e)))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            debug!("Creating directory {}", target.display());
            fs::create_dir(&target).map_err(|e| Error::file(&target, e))?;
            pending.push((target, entry.metadata()?.permissions()));
        } else {
            debug!("Copying file {}", relative.display());
            fs::copy(entry.path(), &target).map_err(|e| Error::file(&target, e))?;
            copy_times(&entry.metadata()?, &target);
        }
    }

    Ok(pending)
}

/// Carries the source's access and modification times over to `target`.
///
/// Best-effort: a failure is logged and the copy is kept.
fn copy_times(source: &Metadata, target: &Path) {
    let mut times = FileTimes::new();
    if let Ok(modified) = source.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = source.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Err(e) = File::open(target).and_then(|file| file.set_times(times)) {
        warn!("Could not preserve timestamps of {}: {}", target.display(), e);
    }
}

fn apply_permissions(pending: PendingPermissions) -> Result<()> {
    // Deepest first, so a read-only parent is locked last.
    for (directory, permissions) in pending.into_iter().rev() {
        fs::set_permissions(&directory, permissions).map_err(|e| Error::file(&directory, e))?;
    }
    Ok(())
}

/// Renders the file at `path` and atomically replaces it with the result.
///
/// The rendered text goes to a temporary file in the same directory, which
/// then takes over the original's permissions and name. A failed render
/// leaves the original file untouched.
pub fn render_in_place(
    path: &Path,
    variables: &serde_json::Value,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    let rendered = renderer.render(&path.display().to_string(), &content, variables)?;
    if rendered == content {
        debug!("Unchanged {}", path.display());
        return Ok(());
    }

    let permissions = fs::metadata(path).map_err(|e| Error::file(path, e))?.permissions();
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(parent).map_err(|e| Error::file(parent, e))?;
    file.write_all(rendered.as_bytes()).map_err(|e| Error::file(file.path(), e))?;
    file.as_file().set_permissions(permissions).map_err(|e| Error::file(file.path(), e))?;
    file.persist(path).map_err(|e| Error::file(path, e.error))?;

    debug!("Rendered {}", path.display());
    Ok(())
}

/// Walks `root` breadth-first and renders every file in place.
///
/// Entries whose base name matches `skip` are left as they are. A skipped
/// directory is still descended into; the same check then applies to each of
/// its entries.
pub fn render_tree(
    root: &Path,
    variables: &serde_json::Value,
    renderer: &dyn TemplateRenderer,
    skip: &SkipPatterns,
) -> Result<()> {
    let mut queue = VecDeque::from([root.to_path_buf()]);

    while let Some(directory) = queue.pop_front() {
        let mut entries = fs::read_dir(&directory)
            .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
            .map_err(|e| Error::file(&directory, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::file(&path, e))?;
            let skipped = skip.should_skip(entry.file_name());

            if file_type.is_dir() {
                if skipped {
                    debug!("Skipping directory {} (contents still checked)", path.display());
                }
                queue.push_back(path);
            } else if skipped {
                debug!("Skipping {}", path.display());
            } else if file_type.is_file() {
                render_in_place(&path, variables, renderer)?;
            }
        }
    }

    Ok(())
}

/// Creates projects from templates.
pub struct Processor<'a> {
    renderer: &'a dyn TemplateRenderer,
    skip: &'a SkipPatterns,
    context: &'a Context,
    numbering: Option<usize>,
}

impl<'a> Processor<'a> {
    /// # Arguments
    /// * `renderer` - Engine used for file contents
    /// * `skip` - Patterns of files that are copied but not rendered
    /// * `context` - Extra template variables keyed by identity
    /// * `numbering` - Number of digits in the project number, `None` to disable
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        skip: &'a SkipPatterns,
        context: &'a Context,
        numbering: Option<usize>,
    ) -> Self {
        Self { renderer, skip, context, numbering }
    }

    /// Creates the project `project_name` inside `cwd` from `template_dir`.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the created project directory
    ///
    /// # Errors
    /// * `Error::TemplateNotFoundError` if the template directory is missing
    /// * `Error::DestinationExistsError` if the destination is already present
    /// * `Error::TemplateError` if a file fails to render
    ///
    /// Nothing is created for the first two. For any failure after the
    /// destination was created, the destination is removed before returning.
    pub fn make_project<P, Q>(&self, cwd: P, template_dir: Q, project_name: &str) -> Result<PathBuf>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let cwd = cwd.as_ref();
        let template_dir = template_dir.as_ref();
        if !template_dir.is_dir() {
            return Err(Error::TemplateNotFoundError {
                template_dir: template_dir.display().to_string(),
            });
        }

        let number = infer_next_number(cwd, self.numbering)?;
        let destination = cwd.join(destination_name(project_name, number.as_deref()));
        let project = ProjectInfo { number, name: project_name.to_string() };
        let variables = build_variables(&project, self.context)?;

        info!("Creating {} from {}", destination.display(), template_dir.display());
        create_destination(&destination)?;
        let guard = DestinationGuard::new(&destination);

        let pending = copy_template(template_dir, &destination)?;
        render_tree(&destination, &variables, self.renderer, self.skip)?;
        apply_permissions(pending)?;

        Ok(guard.commit())
    }
}

/// Creates a project with the default MiniJinja renderer.
///
/// See [`Processor::make_project`].
pub fn make_project<S: AsRef<str>>(
    cwd: &Path,
    template_dir: &Path,
    project_name: &str,
    context: &Context,
    numbering: Option<usize>,
    skip_patterns: &[S],
) -> Result<PathBuf> {
    let renderer = MiniJinjaRenderer::new();
    let skip = SkipPatterns::new(skip_patterns)?;
    Processor::new(&renderer, &skip, context, numbering).make_project(cwd, template_dir, project_name)
}
