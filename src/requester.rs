//! Airdrop submit orchestration.
//!
//! Drives the one allowed state machine transition per user intent:
//! validate the address, issue exactly one airdrop call, and map the
//! outcome into a classified feedback message for the presentation layer.

use std::fmt;
use std::sync::Mutex;

use crate::address::is_valid_address;
use crate::rpc::{AirdropEndpoint, AIRDROP_LAMPORTS};

const MSG_EMPTY_ADDRESS: &str = "Please enter a public key";
const MSG_INVALID_ADDRESS: &str = "Please enter a valid Solana public key";
const MSG_PROCESSING: &str = "Processing...";
const MSG_FAILED: &str = "Airdrop failed. Check your address and try again.";

/// States of a submit cycle.
///
/// `Validating` is transient and synchronous; `InFlight` holds until the
/// remote call resolves or rejects. `Succeeded`/`Failed` are terminal
/// display states that re-enter the machine from the top on the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Validating,
    InFlight,
    Succeeded,
    Failed,
}

/// Classified message pushed to the presentation layer.
///
/// The variant drives styling; the rendered text carries the matching
/// marker prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Empty,
    Error(String),
    Success(String),
    Info(String),
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        matches!(self, Feedback::Empty)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Feedback::Success(_))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Empty => Ok(()),
            Feedback::Error(text) => write!(f, "❌ {}", text),
            Feedback::Success(text) => write!(f, "✅ {}", text),
            Feedback::Info(text) => write!(f, "{}", text),
        }
    }
}

/// Notify-on-change hook invoked after every state/feedback transition.
pub type StateListener = Box<dyn Fn(RequestState, &Feedback) + Send + Sync>;

struct Inner {
    address: String,
    state: RequestState,
    feedback: Feedback,
    signature: Option<String>,
    listener: Option<StateListener>,
}

impl Inner {
    fn transition(&mut self, state: RequestState, feedback: Feedback) {
        self.state = state;
        self.feedback = feedback;
        if let Some(listener) = &self.listener {
            listener(self.state, &self.feedback);
        }
    }
}

/// Submit state machine over a remote airdrop endpoint.
///
/// Owns the address buffer and the state/message pair; the presentation
/// layer only reads them. Intents take `&self` so the busy flag doubles as
/// the mutual-exclusion guard: while a call is in flight, further submits
/// are dropped, not queued.
pub struct AirdropRequester<E> {
    endpoint: E,
    inner: Mutex<Inner>,
}

impl<E: AirdropEndpoint> AirdropRequester<E> {
    /// Create an idle requester over the given endpoint.
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            inner: Mutex::new(Inner {
                address: String::new(),
                state: RequestState::Idle,
                feedback: Feedback::Empty,
                signature: None,
                listener: None,
            }),
        }
    }

    /// Install the notify-on-change hook.
    ///
    /// Invoked on the submitting task with the state lock held; it must not
    /// call back into the requester.
    pub fn set_listener(&self, listener: StateListener) {
        self.inner.lock().unwrap().listener = Some(listener);
    }

    /// Current input value.
    pub fn address(&self) -> String {
        self.inner.lock().unwrap().address.clone()
    }

    pub fn state(&self) -> RequestState {
        self.inner.lock().unwrap().state
    }

    pub fn feedback(&self) -> Feedback {
        self.inner.lock().unwrap().feedback.clone()
    }

    /// Rendered feedback text, marker prefix included.
    pub fn message(&self) -> String {
        self.inner.lock().unwrap().feedback.to_string()
    }

    /// `true` while a call is in flight; input is non-interactive then.
    pub fn is_busy(&self) -> bool {
        self.inner.lock().unwrap().state == RequestState::InFlight
    }

    /// Signature returned by the last successful cycle, if any.
    pub fn last_signature(&self) -> Option<String> {
        self.inner.lock().unwrap().signature.clone()
    }

    /// Presentation intent: the input text changed.
    ///
    /// Surrounding whitespace is trimmed on every change; no other
    /// normalization.
    pub fn on_address_change(&self, text: &str) {
        self.inner.lock().unwrap().address = text.trim().to_string();
    }

    /// Presentation intent: keyboard activation on the input field.
    ///
    /// Triggers submit identically to a button press, ignored while a call
    /// is in flight.
    pub async fn on_activate_key(&self) {
        if self.is_busy() {
            return;
        }
        self.on_submit().await;
    }

    /// Presentation intent: submit.
    ///
    /// Runs one full validate-then-call cycle. Every failure is terminal
    /// for the cycle and recovered locally: the busy flag clears and the
    /// form stays usable for another attempt.
    pub async fn on_submit(&self) {
        let address = {
            let mut inner = self.inner.lock().unwrap();
            if inner.state == RequestState::InFlight {
                // Duplicate submits are dropped, not queued.
                return;
            }

            inner.state = RequestState::Validating;
            inner.signature = None;

            if inner.address.is_empty() {
                inner.transition(
                    RequestState::Failed,
                    Feedback::Error(MSG_EMPTY_ADDRESS.to_string()),
                );
                return;
            }
            if !is_valid_address(&inner.address) {
                inner.transition(
                    RequestState::Failed,
                    Feedback::Error(MSG_INVALID_ADDRESS.to_string()),
                );
                return;
            }

            inner.transition(
                RequestState::InFlight,
                Feedback::Info(MSG_PROCESSING.to_string()),
            );
            inner.address.clone()
        };
        // Lock released before suspending at the network boundary.

        let outcome = self.endpoint.request_airdrop(&address, AIRDROP_LAMPORTS).await;

        let mut inner = self.inner.lock().unwrap();
        match outcome {
            Ok(reply) => match reply.signature() {
                Some(signature) => {
                    inner.signature = Some(signature.to_string());
                    inner.transition(
                        RequestState::Succeeded,
                        Feedback::Success(format!(
                            "Airdrop successful! Tx Signature: {}",
                            signature
                        )),
                    );
                }
                None => {
                    inner.transition(
                        RequestState::Failed,
                        Feedback::Error(MSG_FAILED.to_string()),
                    );
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "airdrop request failed");
                inner.transition(
                    RequestState::Failed,
                    Feedback::Error(format!("Error: {}", e)),
                );
            }
        }
    }
}
