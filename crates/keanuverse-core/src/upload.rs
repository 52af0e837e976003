//! File upload acceptance
//!
//! Client-side constraints for the fan-art surfaces: a 5 MB cap, an
//! extension-based accept list, and an inline data-URL preview for images
//! so the webview can render the picked file without touching disk again.

use base64::Engine;

use crate::error::{PortalError, PortalResult};

/// Size cap applied to every uploaded file
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Which file kinds an upload surface accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptPolicy {
    /// GVIPC art challenge: JPG, PNG, or GIF
    ImageOnly,
    /// Gallery submission form: images plus short videos
    ImageOrVideo,
}

impl AcceptPolicy {
    /// rfd filter extensions for this policy
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            AcceptPolicy::ImageOnly => &["jpg", "jpeg", "png", "gif"],
            AcceptPolicy::ImageOrVideo => &["jpg", "jpeg", "png", "gif", "webp", "mp4", "webm", "mov"],
        }
    }
}

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "mp4" => Some("video/mp4"),
        "webm" => Some("video/webm"),
        "mov" => Some("video/quicktime"),
        _ => None,
    }
}

/// Reject files over the cap before any decode work
pub fn check_upload_size(size: u64) -> PortalResult<()> {
    if size > MAX_UPLOAD_BYTES {
        return Err(PortalError::FileTooLarge {
            size,
            limit: MAX_UPLOAD_BYTES,
        });
    }
    Ok(())
}

/// Encode raw bytes as a `data:` URL for inline display
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

/// An accepted upload, held in memory until the simulated submit discards it
#[derive(Debug, Clone, PartialEq)]
pub struct ArtUpload {
    pub file_name: String,
    pub mime: String,
    pub size: u64,
    /// Data-URL preview; present for images, absent for videos
    pub preview: Option<String>,
}

impl ArtUpload {
    /// Accept a picked file: size gate, extension gate, and for images a
    /// decode check plus preview. The bytes themselves are not retained.
    pub fn from_bytes(file_name: &str, bytes: &[u8], policy: AcceptPolicy) -> PortalResult<Self> {
        check_upload_size(bytes.len() as u64)?;

        let ext = std::path::Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if !policy.extensions().contains(&ext.as_str()) {
            return Err(PortalError::UnsupportedFile(file_name.to_string()));
        }
        let mime = mime_for_extension(&ext)
            .ok_or_else(|| PortalError::UnsupportedFile(file_name.to_string()))?;

        let preview = if mime.starts_with("image/") {
            image::load_from_memory(bytes).map_err(|e| PortalError::Image(e.to_string()))?;
            Some(data_url(mime, bytes))
        } else {
            None
        };

        Ok(Self {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            size: bytes.len() as u64,
            preview,
        })
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    #[cfg(test)]
    pub(crate) fn accepted_for_test(file_name: &str, size: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            mime: "image/png".to_string(),
            size,
            preview: Some("data:image/png;base64,".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([10, 200, 10, 255]));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("encode png");
        buf
    }

    #[test]
    fn test_six_megabytes_rejected() {
        let err = check_upload_size(6 * 1024 * 1024).unwrap_err();
        assert!(matches!(err, PortalError::FileTooLarge { .. }));
        assert_eq!(format!("{}", err), "File is too large. Maximum size is 5MB.");
    }

    #[test]
    fn test_four_megabytes_within_cap() {
        assert!(check_upload_size(4 * 1024 * 1024).is_ok());
        assert!(check_upload_size(MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn test_oversize_bytes_never_decoded() {
        // Garbage content: the size gate must fire before any decode
        let bytes = vec![0u8; (MAX_UPLOAD_BYTES + 1) as usize];
        let err = ArtUpload::from_bytes("huge.png", &bytes, AcceptPolicy::ImageOnly).unwrap_err();
        assert!(matches!(err, PortalError::FileTooLarge { .. }));
    }

    #[test]
    fn test_accepted_image_gets_preview() {
        let bytes = tiny_png();
        let upload = ArtUpload::from_bytes("neo.png", &bytes, AcceptPolicy::ImageOnly).unwrap();
        assert!(upload.is_image());
        let preview = upload.preview.expect("image preview");
        assert!(preview.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_art_challenge_rejects_video() {
        let bytes = vec![0u8; 64];
        let err = ArtUpload::from_bytes("clip.mp4", &bytes, AcceptPolicy::ImageOnly).unwrap_err();
        assert!(matches!(err, PortalError::UnsupportedFile(_)));
    }

    #[test]
    fn test_form_accepts_video_without_preview() {
        let bytes = vec![0u8; 64];
        let upload = ArtUpload::from_bytes("clip.mp4", &bytes, AcceptPolicy::ImageOrVideo).unwrap();
        assert!(!upload.is_image());
        assert_eq!(upload.preview, None);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = ArtUpload::from_bytes("art.tiff", &[0u8; 8], AcceptPolicy::ImageOrVideo).unwrap_err();
        assert!(matches!(err, PortalError::UnsupportedFile(_)));
    }

    #[test]
    fn test_corrupt_image_surfaces_decode_error() {
        let err = ArtUpload::from_bytes("bad.png", &[1, 2, 3, 4], AcceptPolicy::ImageOnly).unwrap_err();
        assert!(matches!(err, PortalError::Image(_)));
    }

    #[test]
    fn test_data_url_shape() {
        let url = data_url("image/gif", &[0x47, 0x49, 0x46]);
        assert_eq!(url, "data:image/gif;base64,R0lG");
    }
}
