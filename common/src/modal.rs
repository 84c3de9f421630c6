use api::{Catalog, Project, ProjectId};
use tracing::debug;

use crate::{Ticket, config::ModalConfig};

// modal lifecycle
//
// Closed -> Opening -> Open -> Closing -> Closed
//
// the Opening and Closing phases exist so the css transition can run; each is left
// by a delayed call to settle() carrying the ticket handed out when the phase was
// entered.  any later open() or close() invalidates older tickets, so a timer that
// fires late after a rapid open/close/open does nothing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

// a delayed continuation the caller must schedule
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    pub ticket: Ticket,
    pub delay_ms: u32,
}

// what the caller should do once a transition lands
#[derive(Clone, Debug, PartialEq)]
pub enum Settled<F> {
    // the ticket was stale
    Ignored,
    // now fully open, focus the close button
    FocusClose,
    // now closed, refocus whatever had focus before opening (if anything)
    RestoreFocus(Option<F>),
}

// fields shown in the dialog
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalDetail {
    pub title: String,
    pub image: String,
    pub summary: String,
    pub problem: String,
    pub repo: String,
    pub demo: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    pub tag: String,
}

impl From<&Project> for ModalDetail {
    fn from(project: &Project) -> ModalDetail {
        ModalDetail {
            title: project.title.clone(),
            image: project.image.clone(),
            summary: project.summary.clone(),
            problem: project.problem.clone(),
            repo: project.repo.clone(),
            demo: project.demo.clone(),
            features: project.features.clone(),
            tech: project.tech.clone(),
            tag: project.category.as_str().to_uppercase(),
        }
    }
}

// F is whatever the front end uses to refer to a focusable element.  the controller
// only holds on to it to hand it back on close
#[derive(Clone, Debug)]
pub struct ModalController<F> {
    config: ModalConfig,
    phase: ModalPhase,
    selected: Option<ProjectId>,
    last_focused: Option<F>,
    ticket: Ticket,
}

impl<F: Clone> ModalController<F> {
    pub fn new(config: ModalConfig) -> Self {
        ModalController {
            config,
            phase: ModalPhase::Closed,
            selected: None,
            last_focused: None,
            ticket: Ticket::default(),
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    // overlay is displayed, possibly still transparent
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    // content is fully opaque and scaled up
    pub fn is_shown(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    pub fn aria_hidden(&self) -> bool {
        !self.is_visible()
    }

    pub fn should_close_on_escape(&self) -> bool {
        !self.aria_hidden()
    }

    // Tab is trapped for as long as the overlay covers the page, including both
    // transitions, regardless of where focus currently is
    pub fn should_trap_focus(&self) -> bool {
        self.is_visible()
    }

    pub fn open(
        &mut self,
        id: ProjectId,
        focused: Option<F>,
        catalog: &Catalog,
    ) -> Option<Transition> {
        if !catalog.contains(id) {
            debug!(id, "ignoring request to open unknown project");
            return None;
        }

        // re-opening while already visible keeps the first focus target, otherwise
        // focus would be restored into the dialog itself
        if self.phase == ModalPhase::Closed {
            self.last_focused = focused;
        }

        self.selected = Some(id);
        self.phase = ModalPhase::Opening;
        self.ticket = self.ticket.next();

        debug!(id, "opening project modal");
        Some(Transition {
            ticket: self.ticket,
            delay_ms: self.config.open_delay_ms,
        })
    }

    pub fn close(&mut self) -> Transition {
        if self.phase != ModalPhase::Closed {
            self.phase = ModalPhase::Closing;
        }
        self.ticket = self.ticket.next();

        Transition {
            ticket: self.ticket,
            delay_ms: self.config.close_delay_ms,
        }
    }

    pub fn settle(&mut self, ticket: Ticket) -> Settled<F> {
        if ticket != self.ticket {
            debug!(?ticket, current = ?self.ticket, "dropping stale modal transition");
            return Settled::Ignored;
        }

        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Open;
                Settled::FocusClose
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Closed;
                self.selected = None;
                Settled::RestoreFocus(self.last_focused.take())
            }
            ModalPhase::Open | ModalPhase::Closed => Settled::Ignored,
        }
    }

    pub fn detail(&self, catalog: &Catalog) -> Option<ModalDetail> {
        self.selected
            .and_then(|id| catalog.get(id))
            .map(ModalDetail::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ModalController<&'static str> {
        ModalController::new(ModalConfig::default())
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();

        assert_eq!(modal.open(99, Some("card-99"), &catalog), None);
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.is_visible());
        assert!(modal.aria_hidden());
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn open_then_close_restores_focus() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();

        let opening = modal.open(3, Some("card-3"), &catalog).unwrap();
        assert_eq!(opening.delay_ms, 10);
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert!(modal.is_visible());
        assert!(!modal.is_shown());
        assert!(!modal.aria_hidden());

        // close before the open delay lands
        let closing = modal.close();
        assert_eq!(closing.delay_ms, 300);
        assert_eq!(modal.phase(), ModalPhase::Closing);

        assert_eq!(modal.settle(opening.ticket), Settled::Ignored);
        assert_eq!(modal.settle(closing.ticket), Settled::RestoreFocus(Some("card-3")));
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert!(!modal.is_visible());
        assert!(modal.aria_hidden());
        assert_eq!(modal.selected(), None);
    }

    #[test]
    fn full_cycle() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();

        let opening = modal.open(1, None, &catalog).unwrap();
        assert_eq!(modal.settle(opening.ticket), Settled::FocusClose);
        assert!(modal.is_shown());
        assert!(modal.should_close_on_escape());

        let closing = modal.close();
        assert!(!modal.is_shown());
        assert_eq!(modal.settle(closing.ticket), Settled::RestoreFocus(None));
        assert!(!modal.should_close_on_escape());
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();

        let closing = modal.close();
        assert_eq!(modal.phase(), ModalPhase::Closed);
        assert_eq!(modal.settle(closing.ticket), Settled::Ignored);

        let opening = modal.open(2, Some("btn"), &catalog).unwrap();
        modal.settle(opening.ticket);

        let first = modal.close();
        let second = modal.close();
        assert_eq!(modal.settle(first.ticket), Settled::Ignored);
        assert_eq!(modal.settle(second.ticket), Settled::RestoreFocus(Some("btn")));
        assert_eq!(modal.settle(second.ticket), Settled::Ignored);
    }

    #[test]
    fn reopen_during_close_wins() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();

        let opening = modal.open(1, Some("card-1"), &catalog).unwrap();
        modal.settle(opening.ticket);

        let closing = modal.close();
        let reopening = modal.open(4, Some("close-modal"), &catalog).unwrap();

        // the late close timer must not hide the re-opened dialog
        assert_eq!(modal.settle(closing.ticket), Settled::Ignored);
        assert_eq!(modal.settle(reopening.ticket), Settled::FocusClose);
        assert_eq!(modal.selected(), Some(4));

        let closing = modal.close();
        assert_eq!(modal.settle(closing.ticket), Settled::RestoreFocus(Some("card-1")));
    }

    #[test]
    fn detail_reflects_selection() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();
        assert_eq!(modal.detail(&catalog), None);

        modal.open(5, None, &catalog);
        let detail = modal.detail(&catalog).unwrap();
        assert_eq!(detail.title, "Cloud Manager CLI");
        assert_eq!(detail.tag, "BACKEND");
        assert_eq!(detail.features.len(), 4);
        assert_eq!(detail.tech, vec!["Go", "Cobra", "AWS SDK"]);
    }

    #[test]
    fn traps_focus_while_overlay_covers_page() {
        let catalog = Catalog::bundled().unwrap();
        let mut modal = controller();
        assert!(!modal.should_trap_focus());

        let opening = modal.open(1, Some("card-1"), &catalog).unwrap();
        assert!(modal.should_trap_focus());

        modal.settle(opening.ticket);
        assert!(modal.should_trap_focus());

        let closing = modal.close();
        assert!(modal.should_trap_focus());

        modal.settle(closing.ticket);
        assert!(!modal.should_trap_focus());
    }
}
