//! Multipart encoding of analysis requests

use aquatherm_core::error::ErrorInfo;
use aquatherm_core::request::AnalysisRequest;
use reqwest::multipart::{Form, Part};

/// Name of the multipart field carrying the uploaded image
pub const FILE_FIELD: &str = "file";

/// Encode a request as `multipart/form-data`
pub fn encode(request: &AnalysisRequest) -> Result<Form, ErrorInfo> {
    let mut form = Form::new();

    if let Some(file) = request.file() {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.filename.to_string())
            .mime_str(content_type_for(file.filename))
            .map_err(|e| ErrorInfo::transport(format!("Invalid upload content type: {}", e)))?;
        form = form.part(FILE_FIELD, part);
    }

    for field in request.form_fields() {
        form = form.text(field.name, field.value);
    }

    Ok(form)
}

/// Content type for an uploaded file, by extension.
///
/// The analysis service only accepts `image/*` uploads.
pub fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquatherm_core::models::{Coordinate, InputSource};
    use aquatherm_core::request;

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("tile.png"), "image/png");
        assert_eq!(content_type_for("DRONE.JPG"), "image/jpeg");
        assert_eq!(content_type_for("scene.b04.tiff"), "image/tiff");
        assert_eq!(content_type_for("notes.txt"), "application/octet-stream");
        assert_eq!(content_type_for("noextension"), "application/octet-stream");
    }

    #[test]
    fn test_encode_upload_and_satellite() {
        let upload = InputSource::Upload { file: vec![1, 2, 3], filename: "drone.png".into() };
        let request = request::build(Coordinate::MUMBAI, &upload, 0, false);
        assert!(encode(&request).is_ok());

        let request = request::build(Coordinate::MUMBAI, &InputSource::Satellite, 30, true);
        let form = encode(&request).unwrap();
        assert!(!form.boundary().is_empty());
    }
}
