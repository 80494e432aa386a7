//! Image payloads and data URIs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Binary image produced by the generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedImage {
    /// MIME type, e.g. "image/png"
    pub mime: String,
    /// Raw image bytes
    pub data: Vec<u8>,
}

impl GeneratedImage {
    /// Encode as a `data:{mime};base64,{payload}` URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_core::GeneratedImage;
    ///
    /// let image = GeneratedImage { mime: "image/png".into(), data: b"png".to_vec() };
    /// assert_eq!(image.to_data_uri(), "data:image/png;base64,cG5n");
    /// ```
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}

/// Ways a data URI can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DataUriError {
    /// The text does not start with `data:`
    #[display("missing `data:` scheme")]
    MissingScheme,
    /// No comma separates the header from the payload
    #[display("missing `,` before payload")]
    MissingPayload,
    /// The header lacks the `;base64` marker
    #[display("payload is not base64-encoded")]
    NotBase64,
    /// The payload is not valid base64
    #[display("invalid base64 payload: {}", _0)]
    InvalidBase64(String),
}

impl std::error::Error for DataUriError {}

/// A parsed base64 data URI.
///
/// # Examples
///
/// ```
/// use storyboard_core::{DataUri, DataUriError};
///
/// let uri = DataUri::parse("data:image/png;base64,cG5n").unwrap();
/// assert_eq!(uri.mime, "image/png");
/// assert_eq!(uri.decode().unwrap(), b"png");
/// assert_eq!(DataUri::parse("not a data uri"), Err(DataUriError::MissingScheme));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// MIME type from the header
    pub mime: &'a str,
    /// Base64 payload after the comma
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    /// Split a `data:` URI into MIME type and base64 payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheme, the `;base64` marker or the comma is missing.
    pub fn parse(uri: &'a str) -> Result<Self, DataUriError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(DataUriError::MissingScheme)?;
        let (header, payload) = rest.split_once(',').ok_or(DataUriError::MissingPayload)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(DataUriError::NotBase64)?;
        Ok(Self { mime, payload })
    }

    /// Decode the base64 payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        STANDARD
            .decode(self.payload.trim())
            .map_err(|e| DataUriError::InvalidBase64(e.to_string()))
    }
}
