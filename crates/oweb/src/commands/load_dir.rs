//! Load-dir command - upload every markdown file under a directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use walkdir::WalkDir;

use super::Context;
use super::upload::upload_file;

/// Arguments for the load-dir command.
#[derive(Args, Debug)]
pub struct LoadDirArgs {
    /// Path to the directory
    pub directory: PathBuf,
}

/// Run the load-dir command.
///
/// Files are uploaded one at a time. A rejected upload is reported and the
/// remaining files are still sent.
pub async fn run(args: LoadDirArgs, ctx: &Context) -> Result<()> {
    let directory = &args.directory;
    if !directory.is_dir() {
        println!("Error: {} is not a valid directory", directory.display());
        return Ok(());
    }

    let files = discover_markdown(directory);
    if files.is_empty() {
        println!("No .md files found in {}", directory.display());
        return Ok(());
    }

    println!("Found {} .md files. Uploading...", files.len());

    let client = ctx.client()?;
    let mut accepted = 0;
    for path in &files {
        println!("Uploading: {}", path.display());
        if upload_file(&client, path, ctx).await? {
            accepted += 1;
        }
    }

    tracing::info!(
        directory = %directory.display(),
        accepted,
        total = files.len(),
        "directory upload finished"
    );
    Ok(())
}

/// Collect markdown files under `root`, depth first, in file-name order.
///
/// Symlinks to files are included; symlinked directories are not descended
/// into. Unreadable entries are skipped with a warning.
pub fn discover_markdown(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| {
            !entry.file_type().is_dir() && entry.path().is_file() && is_markdown(entry.path())
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Whether the file name ends in `.md`, ignoring case.
fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".md"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown(Path::new("notes.md")));
        assert!(is_markdown(Path::new("dir/README.MD")));
        assert!(is_markdown(Path::new("Mixed.Md")));
        assert!(!is_markdown(Path::new("notes.markdown")));
        assert!(!is_markdown(Path::new("notes.md.txt")));
        assert!(!is_markdown(Path::new("md")));
    }

    #[test]
    fn test_discover_nested_case_insensitive() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.md");
        touch(dir.path(), "b.txt");
        touch(dir.path(), "sub/C.MD");
        touch(dir.path(), "sub/deeper/d.Md");
        touch(dir.path(), "sub/deeper/e.rs");

        let found = discover_markdown(dir.path());
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| is_markdown(p)));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_file_symlinks_only() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        touch(dir.path(), "plain.md");
        touch(elsewhere.path(), "real.md");
        touch(elsewhere.path(), "linked-dir/hidden.md");
        symlink(elsewhere.path().join("real.md"), dir.path().join("linked.md")).unwrap();
        symlink(elsewhere.path().join("linked-dir"), dir.path().join("subdir.md")).unwrap();
        symlink(elsewhere.path().join("gone.md"), dir.path().join("dangling.md")).unwrap();

        let names: Vec<String> = discover_markdown(dir.path())
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["linked.md", "plain.md"]);
    }

    #[test]
    fn test_discover_is_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "zeta.md");
        touch(dir.path(), "alpha.md");
        touch(dir.path(), "mid/beta.md");

        let found: Vec<PathBuf> = discover_markdown(dir.path())
            .into_iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            found,
            vec![
                PathBuf::from("alpha.md"),
                PathBuf::from("mid/beta.md"),
                PathBuf::from("zeta.md"),
            ]
        );
    }

    #[test]
    fn test_directory_named_like_markdown_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("folder.md")).unwrap();
        touch(dir.path(), "folder.md/inner.md");

        let found = discover_markdown(dir.path());
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("inner.md"));
    }

    #[test]
    fn test_discover_empty() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.txt");
        assert!(discover_markdown(dir.path()).is_empty());
    }
}
