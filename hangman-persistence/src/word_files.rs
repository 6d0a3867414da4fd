//! Loading and saving word lists on disk.
//!
//! A word list path is either a single file or a directory; for a directory
//! every `.txt` file in it is read in file-name order.

use anyhow::{Context, Result};
use hangman_core::MemoryWordCatalog;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub async fn load_catalog(path: impl AsRef<Path>) -> Result<MemoryWordCatalog> {
    let path = path.as_ref();
    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("Word list not found at {}", path.display()))?;

    let files = if metadata.is_dir() {
        word_files_in(path).await?
    } else {
        vec![path.to_path_buf()]
    };

    let mut catalog = MemoryWordCatalog::new();
    for file in &files {
        let contents = fs::read_to_string(file)
            .await
            .with_context(|| format!("Failed to read word list {}", file.display()))?;
        let added = catalog.extend_from_word_list(&contents);
        info!("Loaded {} words from {}", added, file.display());
    }

    if catalog.is_empty() {
        warn!("No words found under {}", path.display());
    }
    Ok(catalog)
}

async fn word_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Write the catalog in the `<word> <category-index>` line format.
pub async fn save_catalog(catalog: &MemoryWordCatalog, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, catalog.to_word_list())
        .await
        .with_context(|| format!("Failed to write word list {}", path.display()))?;
    info!("Saved {} words to {}", catalog.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hangman_core::WordCatalog;
    use hangman_types::Category;

    #[tokio::test]
    async fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("words.txt");
        std::fs::write(&file, "cat 0\n# comment\n\nrose 1\nbroken\n").unwrap();

        let catalog = load_catalog(&file).await.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.count_in(Category::Plants), 1);
    }

    #[tokio::test]
    async fn test_load_directory_reads_txt_files_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "paris 3\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), "laptop 2\n").unwrap();
        std::fs::write(dir.path().join("notes.md"), "jaws 5\n").unwrap();

        let catalog = load_catalog(dir.path()).await.unwrap();
        let words: Vec<&str> = catalog.all_words().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(words, vec!["laptop", "paris"]);
    }

    #[tokio::test]
    async fn test_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("nope.txt")).await.unwrap_err();
        assert!(err.to_string().contains("Word list not found"));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out.txt");

        let mut catalog = MemoryWordCatalog::new();
        catalog.add_word("nurse", Category::Jobs);
        catalog.add_word("fern", Category::Plants);
        save_catalog(&catalog, &file).await.unwrap();

        let loaded = load_catalog(&file).await.unwrap();
        assert_eq!(loaded.all_words(), catalog.all_words());
    }
}
