use std::collections::HashSet;

use tracing::{Level, debug, instrument};

use crate::project::{Filter, Project, ProjectId};

// the bundled dataset
//
// the site has no backend, so the catalog ships inside the wasm binary
pub const PROJECTS_JSON: &str = include_str!("../data/projects.json");

// read-only, ordered project list
//
// order is the document order of the json array, and is the order cards are
// rendered in
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> anyhow::Result<Self> {
        let mut seen = HashSet::new();

        for project in &projects {
            if project.id == 0 {
                return Err(anyhow::Error::msg(format!(
                    "project \"{}\" has id 0, ids must be positive",
                    project.title
                )));
            }

            if !seen.insert(project.id) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }

        Ok(Catalog { projects })
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_json(doc: &str) -> anyhow::Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(doc)?;

        debug!(count = projects.len(), "parsed project catalog");
        Catalog::new(projects)
    }

    pub fn bundled() -> anyhow::Result<Self> {
        Catalog::from_json(PROJECTS_JSON)
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn filtered<'a>(&'a self, filter: &'a Filter) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Category;

    #[test]
    fn bundled_catalog_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get(2).unwrap().title, "Task Master API");
        assert!(!catalog.contains(42));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.filtered(&Filter::All).count(), 0);
    }

    #[test]
    fn filtered_keeps_catalog_order() {
        let catalog = Catalog::bundled().unwrap();
        let filter = Filter::Category(Category::Frontend);
        let ids: Vec<ProjectId> = catalog.filtered(&filter).map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let doc = r##"[
            {"id": 1, "title": "a", "category": "backend", "summary": "", "problem": "",
             "features": [], "image": "", "tech": [], "repo": "#", "demo": "#"},
            {"id": 1, "title": "b", "category": "frontend", "summary": "", "problem": "",
             "features": [], "image": "", "tech": [], "repo": "#", "demo": "#"}
        ]"##;

        let err = Catalog::from_json(doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project id 1"));
    }

    #[test]
    fn rejects_zero_id() {
        let doc = r##"[
            {"id": 0, "title": "zero", "category": "backend", "summary": "", "problem": "",
             "features": [], "image": "", "tech": [], "repo": "#", "demo": "#"}
        ]"##;

        assert!(Catalog::from_json(doc).is_err());
    }

    #[test]
    fn rejects_unknown_category() {
        let doc = r##"[
            {"id": 7, "title": "x", "category": "mobile", "summary": "", "problem": "",
             "features": [], "image": "", "tech": [], "repo": "#", "demo": "#"}
        ]"##;

        assert!(Catalog::from_json(doc).is_err());
    }
}
