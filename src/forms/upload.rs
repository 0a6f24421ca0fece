//! Historical bulk-upload acknowledgment
//!
//! The file is only acknowledged; its content is never read.

use super::error::UploadError;
use super::notify::Notification;

/// Accepted spreadsheet extensions
pub const ACCEPTED_EXTENSIONS: &[&str] = &["csv", "xlsx", "xls"];

/// Column headers the uploaded sheet is expected to carry
pub const EXPECTED_COLUMNS: &[&str] = &["Fecha", "Producción", "Inyección", "Bombeo", "Diluente"];

/// Check the file name and build the "file loaded" notification
pub fn acknowledge_upload(file_name: &str) -> Result<Notification, UploadError> {
    let name = file_name.trim();
    if name.is_empty() {
        return Err(UploadError::EmptyName);
    }

    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedType(name.to_string()));
    }

    tracing::info!(file = %name, "Historical upload acknowledged");
    Ok(Notification::success(
        "Archivo cargado",
        format!("Archivo \"{}\" cargado para procesamiento", name),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_spreadsheets() {
        let n = acknowledge_upload("produccion_2023.XLSX").unwrap();
        assert_eq!(n.title, "Archivo cargado");
        assert_eq!(
            n.description,
            "Archivo \"produccion_2023.XLSX\" cargado para procesamiento"
        );
        assert!(acknowledge_upload("datos.csv").is_ok());
        assert!(acknowledge_upload("datos.xls").is_ok());
    }

    #[test]
    fn test_rejects_other_files() {
        assert_eq!(acknowledge_upload("  "), Err(UploadError::EmptyName));
        assert!(matches!(
            acknowledge_upload("informe.pdf"),
            Err(UploadError::UnsupportedType(_))
        ));
        assert!(matches!(
            acknowledge_upload("csv"),
            Err(UploadError::UnsupportedType(_))
        ));
    }
}
