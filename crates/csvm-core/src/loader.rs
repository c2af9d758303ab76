//! Filesystem loader for building input documents from paths

use crate::document::InputDocument;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand a mixed list of file and directory paths into input documents
///
/// Files are read directly, whatever their extension. Directories are
/// walked recursively (following symlinks) and contribute their `.csv`
/// files in sorted path order.
pub fn collect_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<InputDocument>> {
    let mut documents = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            for csv_path in csv_files_in(path)? {
                documents.push(InputDocument::from_path(&csv_path)?);
            }
        } else {
            documents.push(InputDocument::from_path(path)?);
        }
    }

    Ok(documents)
}

fn csv_files_in(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "csv") {
            found.push(path.to_path_buf());
        }
    }

    found.sort();
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("csvm-loader-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_collect_from_directory_sorted() {
        let dir = temp_dir("sorted");
        fs::write(dir.join("b.csv"), "id\n2\n").unwrap();
        fs::write(dir.join("a.csv"), "id\n1\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let docs = collect_documents(&[&dir]).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_collect_explicit_file_any_extension() {
        let dir = temp_dir("explicit");
        let path = dir.join("data.txt");
        fs::write(&path, "id\n1\n").unwrap();

        let docs = collect_documents(&[&path]).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].name, "data.txt");
        assert_eq!(docs[0].content, b"id\n1\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_collect_missing_file_fails() {
        let result = collect_documents(&[Path::new("definitely/not/here.csv")]);
        assert!(result.is_err());
    }
}
