use tracing::debug;

use crate::Ticket;

pub const IDLE_LABEL: &str = "Send Message";
pub const PENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Sent!";

// Idle -> Submitting -> Sent -> Idle
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContactPhase {
    #[default]
    Idle,
    Submitting,
    Sent,
}

// contact form submission state
//
// like the modal, each phase change hands out a ticket and the delayed steps must
// present it.  a second submit while one is in flight is refused rather than
// stacking another round of timers
#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    phase: ContactPhase,
    ticket: Ticket,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm::default()
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    pub fn submit(&mut self) -> Option<Ticket> {
        if self.phase != ContactPhase::Idle {
            debug!(phase = ?self.phase, "ignoring contact submit while busy");
            return None;
        }

        self.phase = ContactPhase::Submitting;
        self.ticket = self.ticket.next();
        Some(self.ticket)
    }

    // the message went through; returns true if the caller should clear the fields
    // and schedule settle()
    pub fn delivered(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket || self.phase != ContactPhase::Submitting {
            return false;
        }

        self.phase = ContactPhase::Sent;
        self.ticket = self.ticket.next();
        true
    }

    pub fn failed(&mut self, ticket: Ticket) {
        if ticket == self.ticket && self.phase == ContactPhase::Submitting {
            self.phase = ContactPhase::Idle;
        }
    }

    // the ticket to pass to settle() once the success notice has been shown
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if ticket != self.ticket || self.phase != ContactPhase::Sent {
            return false;
        }

        self.phase = ContactPhase::Idle;
        true
    }

    pub fn label(&self) -> &'static str {
        match self.phase {
            ContactPhase::Idle => IDLE_LABEL,
            ContactPhase::Submitting => PENDING_LABEL,
            ContactPhase::Sent => SENT_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.phase != ContactPhase::Idle
    }

    pub fn is_pending(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.phase == ContactPhase::Sent
    }
}
