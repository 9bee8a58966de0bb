//! Target directory preparation and boilerplate overlay

use crate::error::{Result, ScaffoldError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Create the project directory. Fails if anything already exists at `path`,
/// so an existing project is never written into.
pub async fn prepare_target(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).await.is_ok() {
        return Err(ScaffoldError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    fs::create_dir(path).await.map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            ScaffoldError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            ScaffoldError::io(format!("Failed to create directory: {}", path.display()), e)
        }
    })?;

    debug!("created {}", path.display());
    Ok(())
}

/// Copy the boilerplate tree at `source` over `target`.
///
/// Files that exist in both are overwritten with the boilerplate version;
/// files only in `target` are left alone. Returns the copied files relative
/// to `source`.
pub async fn stage_boilerplate(source: &Path, target: &Path) -> Result<Vec<PathBuf>> {
    if !fs::metadata(source).await.map(|m| m.is_dir()).unwrap_or(false) {
        return Err(ScaffoldError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }

    // Ensure target directory exists
    fs::create_dir_all(target)
        .await
        .map_err(|e| ScaffoldError::io("Failed to create target directory", e))?;

    let mut copied_files = Vec::new();

    for (relative, is_dir) in walk_source(source).await? {
        let target_path = target.join(&relative);

        if is_dir {
            fs::create_dir_all(&target_path).await.map_err(|e| {
                let context = format!("Failed to create directory: {}", target_path.display());
                ScaffoldError::io(context, e)
            })?;
            continue;
        }

        // Directories are listed before their contents, so the parent exists
        fs::copy(source.join(&relative), &target_path)
            .await
            .map_err(|e| {
                let context = format!("Failed to write file: {}", target_path.display());
                ScaffoldError::io(context, e)
            })?;
        debug!("staged {}", relative.display());

        copied_files.push(relative);
    }

    Ok(copied_files)
}

/// List the entries under `source` as paths relative to it, paired with
/// whether each is a directory. The walk runs on the blocking pool.
async fn walk_source(source: &Path) -> Result<Vec<(PathBuf, bool)>> {
    let root = source.to_path_buf();
    let walk = tokio::task::spawn_blocking(move || -> Result<Vec<(PathBuf, bool)>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let context = format!("Failed to read boilerplate: {}", root.display());
                ScaffoldError::io(context, e.into())
            })?;
            let relative = entry.path().strip_prefix(&root).map_err(|_| {
                ScaffoldError::configuration(format!(
                    "{} is outside {}",
                    entry.path().display(),
                    root.display()
                ))
            })?;
            entries.push((relative.to_path_buf(), entry.file_type().is_dir()));
        }
        Ok(entries)
    });

    walk.await.map_err(|e| {
        ScaffoldError::io(
            format!("Failed to read boilerplate: {}", source.display()),
            std::io::Error::other(e),
        )
    })?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_prepare_target_twice() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("demo");

        prepare_target(&target).await.unwrap();
        assert!(target.is_dir());
        std::fs::write(target.join("keep.txt"), "generated").unwrap();

        let err = prepare_target(&target).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
        assert_eq!(
            std::fs::read_to_string(target.join("keep.txt")).unwrap(),
            "generated"
        );
    }

    #[tokio::test]
    async fn test_prepare_target_rejects_existing_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("demo");
        std::fs::write(&target, "not a directory").unwrap();

        let err = prepare_target(&target).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_prepare_target_missing_parent() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("missing").join("demo");

        let err = prepare_target(&target).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[tokio::test]
    async fn test_stage_overwrites_and_preserves() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("boilerplate");
        let target = tmp.path().join("project");
        std::fs::create_dir_all(source.join("src/app")).unwrap();
        std::fs::create_dir_all(target.join("src/app")).unwrap();

        std::fs::write(source.join("a.txt"), "boilerplate").unwrap();
        std::fs::write(source.join("src/app/page.tsx"), "custom page").unwrap();
        std::fs::write(target.join("a.txt"), "generated").unwrap();
        std::fs::write(target.join("src/app/page.tsx"), "default page").unwrap();
        std::fs::write(target.join("package.json"), "{}").unwrap();
        std::fs::write(target.join("src/app/favicon.ico"), "icon").unwrap();

        let copied = stage_boilerplate(&source, &target).await.unwrap();

        assert_eq!(
            copied,
            vec![PathBuf::from("a.txt"), PathBuf::from("src/app/page.tsx")]
        );
        assert_eq!(std::fs::read_to_string(target.join("a.txt")).unwrap(), "boilerplate");
        assert_eq!(
            std::fs::read_to_string(target.join("src/app/page.tsx")).unwrap(),
            "custom page"
        );
        assert_eq!(std::fs::read_to_string(target.join("package.json")).unwrap(), "{}");
        assert_eq!(
            std::fs::read_to_string(target.join("src/app/favicon.ico")).unwrap(),
            "icon"
        );
    }

    #[tokio::test]
    async fn test_stage_creates_new_directories() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("boilerplate");
        let target = tmp.path().join("project");
        std::fs::create_dir_all(source.join("src/lib/api")).unwrap();
        std::fs::create_dir_all(source.join("empty")).unwrap();
        std::fs::write(source.join("src/lib/api/client.ts"), "export {}").unwrap();

        stage_boilerplate(&source, &target).await.unwrap();

        assert!(target.join("src/lib/api/client.ts").is_file());
        assert!(target.join("empty").is_dir());
    }

    #[tokio::test]
    async fn test_stage_missing_source() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("project");
        std::fs::create_dir(&target).unwrap();

        let err = stage_boilerplate(&tmp.path().join("nope"), &target)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::SourceNotFound { .. }));
        assert!(err.is_internal());
        assert_eq!(std::fs::read_dir(&target).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_walk_lists_directories_before_their_files() {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("boilerplate");
        std::fs::create_dir_all(source.join("src/app")).unwrap();
        std::fs::write(source.join("src/app/page.tsx"), "page").unwrap();
        std::fs::write(source.join(".versionrc.json"), "{}").unwrap();

        let entries = walk_source(&source).await.unwrap();

        assert_eq!(
            entries,
            vec![
                (PathBuf::from(".versionrc.json"), false),
                (PathBuf::from("src"), true),
                (PathBuf::from("src/app"), true),
                (PathBuf::from("src/app/page.tsx"), false),
            ]
        );
    }
}
