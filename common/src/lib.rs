pub mod cards;
pub mod config;
pub mod contact;
pub mod filter;
pub mod focus;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod theme;

// delayed callback guard
//
// the browser timers we schedule cannot be cancelled once forgotten, so instead every
// state change that schedules one hands out a fresh ticket and the callback must
// present the current ticket to have any effect
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn next(self) -> Ticket {
        Ticket(self.0.wrapping_add(1))
    }
}
