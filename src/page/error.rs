use std::fmt;

#[derive(Debug)]
pub enum PageError {
    /// A required element (the dialog container) is missing from the page
    MissingElement { id: String },

    /// An element is present but lacks a required attribute (form without action)
    MissingAttribute { element: String, attribute: String },

    /// HTTP request could not be sent or the response body could not be read
    Http { url: String, source: reqwest::Error },

    /// Response body was not the expected `{ ok, error }` JSON shape
    ResponseDecode { url: String, source: serde_json::Error },

    /// Transport-level failure with no underlying error (scripted mocks)
    Network(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::MissingElement { id } => {
                write!(f, "Element '#{}' not found in document", id)
            }
            PageError::MissingAttribute { element, attribute } => {
                write!(f, "Element '{}' has no '{}' attribute", element, attribute)
            }
            PageError::Http { url, source } => {
                write!(f, "Request to {} failed: {}", url, source)
            }
            PageError::ResponseDecode { url, source } => {
                write!(f, "Response from {} is not valid JSON: {}", url, source)
            }
            PageError::Network(msg) => {
                write!(f, "Network failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::Http { source, .. } => Some(source),
            PageError::ResponseDecode { source, .. } => Some(source),
            _ => None,
        }
    }
}
