use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types

pub type ProjectId = u32;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
}

impl Category {
    // order of the filter buttons
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Fullstack];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Fullstack => "Full Stack",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        match value {
            "frontend" => Some(Category::Frontend),
            "backend" => Some(Category::Backend),
            "fullstack" => Some(Category::Fullstack),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// a single portfolio entry
//
// these are only ever constructed by the catalog loader, and nothing downstream
// mutates them
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: Category,
    pub summary: String,
    pub problem: String,
    pub features: Vec<String>,
    pub image: String,
    pub tech: Vec<String>,
    pub repo: String,
    pub demo: String,
}

// project filter
//
// the buttons only ever produce All or a known category, but the value round-trips
// through a data-filter attribute, so anything else is kept as Unknown and simply
// matches nothing
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
    Unknown(String),
}

impl Filter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => project.category == *category,
            Filter::Unknown(_) => false,
        }
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Filter {
        match value {
            "all" => Filter::All,
            other => match Category::parse(other) {
                Some(category) => Filter::Category(category),
                None => Filter::Unknown(other.to_owned()),
            },
        }
    }
}

impl From<Category> for Filter {
    fn from(category: Category) -> Filter {
        Filter::Category(category)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(category) => write!(f, "{category}"),
            Filter::Unknown(value) => f.write_str(value),
        }
    }
}
