// src/problem.rs
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SolveError};

pub const EMPTY_SUBMISSION_MESSAGE: &str = "Enter problem text or upload an image.";
pub const NOT_AN_IMAGE_MESSAGE: &str = "Only image uploads are supported.";
pub const BAD_IMAGE_DATA_MESSAGE: &str = "The uploaded image could not be read.";

/// A base64-encoded image together with its declared media type, matching the
/// `inlineData` shape the model API expects on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePayload {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

/// Exactly one problem modality is active per submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemInput {
    Text(String),
    Image(ImagePayload),
}

/// The submit request body: free text, a staged image, or both. A staged
/// image always wins over typed text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolveRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

impl SolveRequest {
    /// Validates the submission and collapses it into a `ProblemInput`.
    /// Fails before any remote call when neither modality is usable.
    pub fn into_problem(self) -> Result<ProblemInput> {
        if let Some(image) = self.image {
            validate_image(&image)?;
            return Ok(ProblemInput::Image(image));
        }

        match self.text {
            Some(text) if !text.trim().is_empty() => Ok(ProblemInput::Text(text)),
            _ => Err(SolveError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string())),
        }
    }
}

fn validate_image(image: &ImagePayload) -> Result<()> {
    if !image.mime_type.starts_with("image/") {
        return Err(SolveError::Validation(NOT_AN_IMAGE_MESSAGE.to_string()));
    }

    match BASE64.decode(&image.data) {
        Ok(bytes) if !bytes.is_empty() => Ok(()),
        _ => Err(SolveError::Validation(BAD_IMAGE_DATA_MESSAGE.to_string())),
    }
}
