use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    /// The source image could not be read. The I/O error is passed through as-is.
    #[error(transparent)]
    Encoding(#[from] std::io::Error),

    #[error("Image generation failed for pose: {pose} ({instruction}). The model may have refused the request.")]
    Generation { pose: String, instruction: String },

    #[error("Transport error: {0}")]
    Transport(String),

    /// The model replied, but the body was not the JSON we expect.
    #[error("Response error: {0}")]
    Response(String),

    #[error("Unsupported MIME type: {0}")]
    UnsupportedMimeType(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SceneError {
    /// Label of the pose this error is attributed to, if any.
    pub fn pose(&self) -> Option<&str> {
        match self {
            SceneError::Generation { pose, .. } => Some(pose),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SceneError {
    fn from(e: reqwest::Error) -> Self {
        SceneError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        SceneError::Response(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_encoding_error_is_verbatim() {
        let err: SceneError = io::Error::new(io::ErrorKind::UnexpectedEof, "stream truncated").into();
        assert_eq!(err.to_string(), "stream truncated");
        assert!(err.pose().is_none());
    }

    #[test]
    fn test_generation_error_names_pose() {
        let err = SceneError::Generation {
            pose: "Thoughtful Profile".to_string(),
            instruction: "a thoughtful three-quarters profile shot, with a soft expression"
                .to_string(),
        };
        assert_eq!(err.pose(), Some("Thoughtful Profile"));
        assert!(err.to_string().contains("Thoughtful Profile"));
    }

    #[test]
    fn test_malformed_json_is_response_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SceneError = parse_err.into();
        assert!(matches!(err, SceneError::Response(_)));
        assert!(err.to_string().starts_with("Response error:"));
    }
}
