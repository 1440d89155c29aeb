//! Contact form submission with a simulated round trip.

use log::{debug, info};

pub const CONTACT_SEND_MS: u64 = 2_000;
pub const CONTACT_SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FormState {
    Idle,
    Sending { done_at_ms: u64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitResult {
    Started,
    /// A submission is already in flight; the button is disabled.
    Ignored,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContactForm {
    state: FormState,
    sent_count: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub const fn new() -> Self {
        Self {
            state: FormState::Idle,
            sent_count: 0,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.state, FormState::Sending { .. })
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_sending() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn done_at_ms(&self) -> Option<u64> {
        match self.state {
            FormState::Sending { done_at_ms } => Some(done_at_ms),
            FormState::Idle => None,
        }
    }

    pub fn submit(&mut self, now_ms: u64) -> SubmitResult {
        if self.is_sending() {
            debug!("contact: submit ignored while sending");
            return SubmitResult::Ignored;
        }

        self.state = FormState::Sending {
            done_at_ms: now_ms.saturating_add(CONTACT_SEND_MS),
        };
        SubmitResult::Started
    }

    /// Completes a due submission and resets the form. Returns `true` once per send.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.state {
            FormState::Sending { done_at_ms } if now_ms >= done_at_ms => {
                self.state = FormState::Idle;
                self.sent_count = self.sent_count.saturating_add(1);
                info!("contact: message #{} sent", self.sent_count);
                true
            }
            _ => false,
        }
    }
}
