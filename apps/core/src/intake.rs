//! Upload intake: turns an uploaded file into text for the file channel.
//! Accepts text-based source and documentation files only.

use infer::MatcherType;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Largest accepted upload, in bytes
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "md", "html", "json", "js", "ts", "jsx", "tsx", "py", "java", "cpp", "c", "go", "rs",
    "php", "rb", "swift", "kt",
];

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "text/plain",
    "text/markdown",
    "text/html",
    "application/json",
    "text/javascript",
    "text/typescript",
    "text/jsx",
    "text/tsx",
];

/// Read an upload identified only by its file name.
pub fn read_upload(file_name: &str, file_data: &[u8]) -> Result<String, AppError> {
    read_upload_with_mime(file_name, None, file_data)
}

/// Read an upload; a declared text MIME type admits files whose extension is
/// not on the allowlist.
pub fn read_upload_with_mime(
    file_name: &str,
    mime: Option<&str>,
    file_data: &[u8],
) -> Result<String, AppError> {
    info!("Reading upload: {} ({} bytes)", file_name, file_data.len());

    if file_data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Intake("File size must be less than 5MB".to_string()));
    }

    if !is_allowed(file_name, mime) {
        warn!("Rejected upload with unsupported type: {}", file_name);
        return Err(AppError::Intake(
            "Please upload a text-based file (txt, md, html, json, js, ts, jsx, tsx, py, etc.)"
                .to_string(),
        ));
    }

    // infer also recognizes text formats such as HTML and XML
    if let Some(kind) = infer::get(file_data).filter(|k| k.matcher_type() != MatcherType::Text) {
        warn!("Rejected binary upload {} sniffed as {}", file_name, kind.mime_type());
        return Err(AppError::Intake("Binary files are not supported".to_string()));
    }

    let content = String::from_utf8(file_data.to_vec())
        .map_err(|e| AppError::Intake(format!("Invalid UTF-8 content: {}", e)))?;

    // Basic check for binary files (contains null bytes)
    if content.contains('\0') {
        return Err(AppError::Intake("Binary files are not supported".to_string()));
    }

    Ok(content)
}

/// Read a file from disk and run it through intake.
pub fn read_path(path: &Path) -> Result<String, AppError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Intake(format!("Not a file: {}", path.display())))?;

    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_UPLOAD_BYTES as u64 {
        return Err(AppError::Intake("File size must be less than 5MB".to_string()));
    }

    let data = std::fs::read(path)?;
    read_upload(file_name, &data)
}

fn is_allowed(file_name: &str, mime: Option<&str>) -> bool {
    if mime.is_some_and(|m| ALLOWED_MIME_TYPES.contains(&m)) {
        return true;
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    ALLOWED_EXTENSIONS.contains(&extension.as_str())
}
