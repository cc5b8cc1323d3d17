use crate::error::{AppError, FileError};
use crate::models::document::RawDocument;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从文本文件加载一份文档
pub async fn load_document(text_file_path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(text_file_path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", text_file_path.display()))?;

    let file_name = text_file_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    Ok(RawDocument::new(file_name, content))
}

/// 从文件夹中加载所有 `.txt` 文档，按文件名排序
///
/// 单个文件读取失败只记录警告，不影响其他文件。
pub async fn load_all_documents(folder_path: &str) -> Result<Vec<RawDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        })
        .into());
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    // read_dir 的顺序依赖平台
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_document(&path).await {
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    Ok(documents)
}
