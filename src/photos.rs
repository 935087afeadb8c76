//! Фотографии для отчёта: поиск в папке и чтение с диска

use crate::error::{PtobotError, Result};
use ptobot_common::PhotoAttachment;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "heic"];

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str())
}

/// MIME-тип по расширению
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}

/// Изображения в папке (без подпапок), по имени файла
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(PtobotError::FileNotFound(folder.display().to_string()));
    }

    let mut images: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .map(|ext| is_image_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(images)
}

/// Прочитать одну фотографию
pub fn load_photo(path: &Path) -> Result<PhotoAttachment> {
    if !path.is_file() {
        return Err(PtobotError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "photo.jpg".to_string());

    debug!(file = %file_name, size = bytes.len(), "photo loaded");

    Ok(PhotoAttachment {
        file_name,
        content_type: content_type_for(path).to_string(),
        bytes,
    })
}

/// Собрать фотографии из списка путей
///
/// Файл берётся как есть, папка раскрывается в лежащие в ней изображения.
/// Порядок сохраняется.
pub fn collect_photos(paths: &[PathBuf]) -> Result<Vec<PhotoAttachment>> {
    let mut photos = Vec::new();

    for path in paths {
        if path.is_dir() {
            let images = scan_folder(path)?;
            if images.is_empty() {
                return Err(PtobotError::NoPhotosFound(path.display().to_string()));
            }
            for image in images {
                photos.push(load_photo(&image)?);
            }
        } else {
            photos.push(load_photo(path)?);
        }
    }

    Ok(photos)
}
