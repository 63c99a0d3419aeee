use base64::{engine::general_purpose, Engine as _};

/// Base64 text of an uploaded image, ready to be embedded in a `data:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(general_purpose::STANDARD.encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The format is not sniffed; uploads are always labelled as JPEG.
    pub fn data_uri(&self) -> String {
        format!("data:image/jpeg;base64,{}", self.0)
    }
}
