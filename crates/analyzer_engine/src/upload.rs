use std::path::Path;

use crate::{AnalysisError, FailureKind};

/// Content type sent with the `resume` part, guessed from the file name.
pub(crate) fn content_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("doc") => "application/msword",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Read the resume bytes at submit time.
pub(crate) async fn read_resume(path: &Path) -> Result<Vec<u8>, AnalysisError> {
    tokio::fs::read(path).await.map_err(|err| {
        AnalysisError::new(
            FailureKind::FileRead,
            format!("Could not read {}: {}", path.display(), err),
        )
    })
}
