use std::cell::RefCell;
use std::collections::VecDeque;

use serde::Deserialize;

use crate::page::error::PageError;

/// Header telling the server the request is script-initiated rather than a
/// full-page navigation.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// One form submission: endpoint URL plus the field set, form-encoded as the
/// body. Field order and repeated names are preserved verbatim.
#[derive(Debug, Clone)]
pub struct FormRequest {
    pub url: String,
    pub fields: Vec<(String, String)>,
}

/// Server reply to a form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// The environment's fetch primitive: one POST, one parsed reply. The caller
/// owns retry policy (there is none) and outcome mapping.
pub trait Transport {
    fn post_form(&self, request: &FormRequest) -> Result<SubmitResponse, PageError>;
}

// ============================================================================
// HTTP Transport (reqwest)
// ============================================================================

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, request: &FormRequest) -> Result<SubmitResponse, PageError> {
        let response = self
            .client
            .post(&request.url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .form(&request.fields)
            .send()
            .map_err(|e| PageError::Http {
                url: request.url.clone(),
                source: e,
            })?;

        let body = response.text().map_err(|e| PageError::Http {
            url: request.url.clone(),
            source: e,
        })?;

        serde_json::from_str(&body).map_err(|e| PageError::ResponseDecode {
            url: request.url.clone(),
            source: e,
        })
    }
}

// ============================================================================
// Mock Transport (for tests and the harness without a server)
// ============================================================================

/// Scripted transport: replays queued replies in order and records every
/// request it sees. With an empty script it answers `{ok: true}`.
pub struct MockTransport {
    script: RefCell<VecDeque<Result<SubmitResponse, PageError>>>,
    requests: RefCell<Vec<FormRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            script: RefCell::new(VecDeque::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Queue a `{ok: true}` reply.
    pub fn enqueue_ok(&self) {
        self.script.borrow_mut().push_back(Ok(SubmitResponse {
            ok: true,
            error: None,
        }));
    }

    /// Queue a `{ok: false, error: ...}` reply. `None` omits the error field.
    pub fn enqueue_rejection(&self, error: Option<&str>) {
        self.script.borrow_mut().push_back(Ok(SubmitResponse {
            ok: false,
            error: error.map(|e| e.to_string()),
        }));
    }

    /// Queue a transport-level failure (request rejected / body unparsable).
    pub fn enqueue_failure(&self, reason: &str) {
        self.script
            .borrow_mut()
            .push_back(Err(PageError::Network(reason.to_string())));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn requests(&self) -> Vec<FormRequest> {
        self.requests.borrow().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn post_form(&self, request: &FormRequest) -> Result<SubmitResponse, PageError> {
        self.requests.borrow_mut().push(request.clone());
        self.script.borrow_mut().pop_front().unwrap_or(Ok(SubmitResponse {
            ok: true,
            error: None,
        }))
    }
}
