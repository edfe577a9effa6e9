//! Image normalization for transport to the vision model.
//!
//! The hosted endpoint enforces a hard 4 MB limit per inline image, so every
//! upload is bounded to 1024 px on the long edge and re-encoded as JPEG
//! before it is embedded in the prompt.

use base64::Engine;
use image::imageops::FilterType;
use image::ImageEncoder;

use crate::error::SectionError;

/// Long-edge bound applied before re-encoding
pub const MAX_IMAGE_DIM: u32 = 1024;
/// JPEG quality of the transport encoding
pub const JPEG_QUALITY: u8 = 85;
/// Per-image transport limit of the hosted endpoint
pub const MAX_ENCODED_BYTES: usize = 4 * 1024 * 1024;

/// Accepted upload extensions
const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// A normalized image ready for inline embedding.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Base64 of the JPEG re-encoding
    pub base64: String,
    /// JPEG size in bytes, before base64 expansion
    pub encoded_len: usize,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.base64)
    }
}

pub fn is_supported_filename(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported)),
        None => false,
    }
}

/// Decode the base64 `data` field of an upload.
pub fn decode_upload(data: &str) -> Result<Vec<u8>, SectionError> {
    base64::engine::general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| SectionError::ImageDecode(format!("invalid base64: {e}")))
}

/// Decode an uploaded raster and re-encode it for transport.
///
/// Images above [`MAX_IMAGE_DIM`] on either edge are downsampled with
/// Lanczos3, preserving aspect ratio; smaller images keep their dimensions.
pub fn encode_image(bytes: &[u8]) -> Result<EncodedImage, SectionError> {
    let img = image::load_from_memory(bytes).map_err(|e| SectionError::ImageDecode(e.to_string()))?;

    let img = if img.width() > MAX_IMAGE_DIM || img.height() > MAX_IMAGE_DIM {
        img.resize(MAX_IMAGE_DIM, MAX_IMAGE_DIM, FilterType::Lanczos3)
    } else {
        img
    };

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY);
    encoder
        .write_image(rgb.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .map_err(|e| SectionError::Internal(format!("JPEG encoding failed: {e}")))?;

    if jpeg.len() > MAX_ENCODED_BYTES {
        return Err(SectionError::ImageTooLarge {
            size: jpeg.len(),
            limit: MAX_ENCODED_BYTES,
        });
    }

    Ok(EncodedImage {
        base64: base64::engine::general_purpose::STANDARD.encode(&jpeg),
        encoded_len: jpeg.len(),
        width,
        height,
    })
}
