pub mod catalog;
pub mod contact;
pub mod project;

pub use catalog::Catalog;
pub use project::{Category, Filter, Project, ProjectId};
