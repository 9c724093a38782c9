use std::cell::Cell;
use std::rc::Rc;

use crate::dialog::controller::DialogController;
use crate::dom::element::{ElementRef, named_fields};
use crate::events::bus::{Event, EventBus, Subscription};
use crate::net::transport::{FormRequest, SubmitResponse, Transport};
use crate::page::error::PageError;
use crate::runtime::scheduler::Scheduler;

/// Delay between showing the confirmation and closing the dialog, so the
/// user perceives the confirmation first.
pub const CLOSE_DELAY_MS: u64 = 700;

/// Status text on `{ok: true}`.
pub const CONFIRMATION_MESSAGE: &str = "Message sent. We will get back to you.";

/// Status text on `{ok: false}` with no server-provided error.
pub const SUBMIT_ERROR_FALLBACK: &str = "Failed to send message.";

/// Status text when the request fails or the response is unparsable.
pub const NETWORK_ERROR_MESSAGE: &str = "Network or server error: failed to send.";

/// Outcome of one submission attempt. Produced once per attempt and
/// immediately consumed to update the status display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    ApplicationError { message: String },
    NetworkError { message: String },
}

impl SubmissionResult {
    pub fn from_response(response: SubmitResponse) -> Self {
        if response.ok {
            SubmissionResult::Success
        } else {
            SubmissionResult::ApplicationError {
                message: response
                    .error
                    .unwrap_or_else(|| SUBMIT_ERROR_FALLBACK.to_string()),
            }
        }
    }

    pub fn network_failure() -> Self {
        SubmissionResult::NetworkError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// The text shown in the status area for this outcome.
    pub fn status_text(&self) -> &str {
        match self {
            SubmissionResult::Success => CONFIRMATION_MESSAGE,
            SubmissionResult::ApplicationError { message } => message,
            SubmissionResult::NetworkError { message } => message,
        }
    }
}

/// Intercepts the contact form's submission: prevents the native action,
/// POSTs the field set to the form's endpoint, and reflects the outcome in
/// the status area and dialog visibility.
///
/// While a request is pending, further submits are ignored (one outcome per
/// user intent); the flag clears when the outcome is applied.
pub struct FormSubmitter {
    form: ElementRef,
    hint: Option<ElementRef>,
    endpoint: String,
    transport: Rc<dyn Transport>,
    scheduler: Rc<Scheduler>,
    dialog: Rc<DialogController>,
    in_flight: Cell<bool>,
}

impl FormSubmitter {
    /// The form's `action` attribute is the submission endpoint and is
    /// required; the status area is optional.
    pub fn new(
        form: ElementRef,
        hint: Option<ElementRef>,
        transport: Rc<dyn Transport>,
        scheduler: Rc<Scheduler>,
        dialog: Rc<DialogController>,
    ) -> Result<Rc<Self>, PageError> {
        let endpoint = form
            .borrow()
            .attribute("action")
            .map(str::to_string)
            .ok_or_else(|| PageError::MissingAttribute {
                element: "form".to_string(),
                attribute: "action".to_string(),
            })?;

        Ok(Rc::new(FormSubmitter {
            form,
            hint,
            endpoint,
            transport,
            scheduler,
            dialog,
            in_flight: Cell::new(false),
        }))
    }

    pub fn bind(this: &Rc<Self>, bus: &EventBus) -> Subscription {
        let submitter = Rc::clone(this);
        bus.on_submit(&this.form, move |event| {
            Self::handle_submit(&submitter, event);
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Current field values in document order, names and values verbatim.
    /// Repeated names stay repeated.
    pub fn collect_fields(&self) -> Vec<(String, String)> {
        named_fields(&self.form)
            .iter()
            .map(|field| {
                let field = field.borrow();
                (
                    field.field_name().unwrap_or_default().to_string(),
                    field.value().to_string(),
                )
            })
            .collect()
    }

    fn reset_fields(&self) {
        for field in named_fields(&self.form) {
            field.borrow_mut().set_value("");
        }
    }

    fn set_status(&self, text: &str) {
        if let Some(hint) = &self.hint {
            hint.borrow_mut().set_text(text);
        }
    }

    /// The submit listener. The native action is suppressed unconditionally;
    /// the round trip runs as a deferred task so the page stays interactive
    /// while the request is in flight.
    pub fn handle_submit(this: &Rc<Self>, event: &Event) {
        event.prevent_default();

        if this.in_flight.get() {
            return;
        }

        this.set_status("");
        let fields = this.collect_fields();
        this.in_flight.set(true);

        let submitter = Rc::clone(this);
        this.scheduler.post(move || {
            let request = FormRequest {
                url: submitter.endpoint.clone(),
                fields,
            };
            let outcome = match submitter.transport.post_form(&request) {
                Ok(response) => SubmissionResult::from_response(response),
                Err(_) => SubmissionResult::network_failure(),
            };
            submitter.apply_outcome(outcome);
        });
    }

    /// Reflect one outcome: status text always; on success also reset the
    /// fields and schedule the dialog close. No retry on any path.
    fn apply_outcome(&self, outcome: SubmissionResult) {
        self.set_status(outcome.status_text());

        if outcome == SubmissionResult::Success {
            self.reset_fields();
            let dialog = Rc::clone(&self.dialog);
            self.scheduler.set_timeout(CLOSE_DELAY_MS, move || {
                dialog.close();
            });
        }

        self.in_flight.set(false);
    }
}
