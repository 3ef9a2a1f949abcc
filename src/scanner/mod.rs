use crate::error::{PriceFinderError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PriceFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// 価格表ファイルの選択条件
///
/// ファイル名に目印を含み（大文字小文字無視）、拡張子が一致するものを対象にする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelector {
    marker: String,
    extension: String,
}

impl Default for FileSelector {
    fn default() -> Self {
        Self::new("price", "csv")
    }
}

impl FileSelector {
    pub fn new(marker: &str, extension: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            extension: extension.trim_start_matches('.').to_lowercase(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        let ext_ok = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase() == self.extension)
            .unwrap_or(false);

        ext_ok && file_name.to_string_lossy().to_lowercase().contains(&self.marker)
    }
}

pub fn scan_folder(folder: &Path, selector: &FileSelector) -> Result<Vec<PriceFile>> {
    let access_error = |source| PriceFinderError::DirectoryAccess {
        path: folder.display().to_string(),
        source,
    };

    match std::fs::metadata(folder) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PriceFinderError::FolderNotFound(folder.display().to_string()));
        }
        Err(e) => return Err(access_error(e)),
        Ok(_) => {}
    }

    // 権限不足などはここで致命的エラーとする
    std::fs::read_dir(folder).map_err(access_error)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() || !selector.matches(path) {
            continue;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        files.push(PriceFile {
            path: path.to_path_buf(),
            file_name,
        });
    }

    // ファイル名でソート（カタログ順を決定的にする）
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_selector_matches() {
        let selector = FileSelector::default();
        assert!(selector.matches(Path::new("price_1.csv")));
        assert!(selector.matches(Path::new("Big_PRICE.CSV")));
        assert!(selector.matches(Path::new("/data/myprices.csv")));
        assert!(!selector.matches(Path::new("price.txt")));
        assert!(!selector.matches(Path::new("catalog.csv")));
        assert!(!selector.matches(Path::new("price")));
    }

    #[test]
    fn test_selector_custom() {
        let selector = FileSelector::new("Прайс", ".CSV");
        assert!(selector.matches(Path::new("прайс_январь.csv")));
        assert!(!selector.matches(Path::new("price.csv")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), &FileSelector::default());
        assert!(matches!(result, Err(PriceFinderError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("price.csv");
        File::create(&file).unwrap();

        let result = scan_folder(&file, &FileSelector::default());
        assert!(matches!(result, Err(PriceFinderError::DirectoryAccess { .. })));
    }

    #[test]
    fn test_scan_folder_unstatable_is_access_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("price.csv");
        File::create(&file).unwrap();

        // 親がファイルなので stat できない（NotFound ではない）
        let result = scan_folder(&file.join("sub"), &FileSelector::default());
        assert!(matches!(result, Err(PriceFinderError::DirectoryAccess { .. })));
    }

    #[test]
    fn test_scan_folder_selects_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["price_b.csv", "price_a.csv", "notes.csv", "price.txt", "PRICE_c.csv"] {
            File::create(dir.path().join(name)).unwrap();
        }
        std::fs::create_dir(dir.path().join("price_dir.csv")).unwrap();

        let result = scan_folder(dir.path(), &FileSelector::default()).unwrap();
        let names: Vec<&str> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["PRICE_c.csv", "price_a.csv", "price_b.csv"]);
    }
}
