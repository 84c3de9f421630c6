pub mod layout;
pub mod modal;
pub mod navigation;
pub mod reveal;
pub mod scroll;
