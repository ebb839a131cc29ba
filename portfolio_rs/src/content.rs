//! Static portfolio content.
//!
//! The page is driven by one document (`content/portfolio.json`) compiled
//! into the binary. These types are designed to be:
//!
//! - **Serializable** - JSON in, JSON out via serde
//! - **Clone-friendly** - components take owned copies
//! - **Default-able** - partial documents with `..Default::default()`

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// The built-in document.
pub const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// Gallery filter label that matches every project.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Titles cycled by the hero typewriter.
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0-100. Rendered as a bar width.
    pub level: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    /// Free-form, e.g. "2021 - Present".
    pub period: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// A problem found by [`PortfolioData::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentIssue {
    /// Dotted path to the offending value, e.g. `projects[2].title`.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl PortfolioData {
    /// Parse the compiled-in document.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CONTENT)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Gallery filter labels: [`ALL_CATEGORIES`] first, then each project
    /// category in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORIES.to_string()];
        for project in &self.projects {
            if !out.iter().any(|c| c == &project.category) {
                out.push(project.category.clone());
            }
        }
        out
    }

    /// Projects shown for a gallery filter; featured ones first, otherwise
    /// in document order.
    pub fn projects_in(&self, category: &str) -> Vec<&Project> {
        let mut out: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect();
        out.sort_by_key(|p| !p.featured);
        out
    }

    pub fn validate(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();
        let mut push = |path: String, message: &str| {
            issues.push(ContentIssue {
                path,
                message: message.to_string(),
            })
        };

        if self.profile.name.trim().is_empty() {
            push("profile.name".into(), "must not be empty");
        }
        if self.profile.email.trim().is_empty() {
            push("profile.email".into(), "must not be empty");
        }
        if self.profile.roles.iter().all(|r| r.trim().is_empty()) {
            push("profile.roles".into(), "needs at least one role for the hero");
        }

        for (i, category) in self.skills.iter().enumerate() {
            if category.title.trim().is_empty() {
                push(format!("skills[{i}].title"), "must not be empty");
            }
            for (j, skill) in category.skills.iter().enumerate() {
                if skill.level > 100 {
                    push(format!("skills[{i}].skills[{j}].level"), "must be between 0 and 100");
                }
            }
        }

        for (i, job) in self.experience.iter().enumerate() {
            if job.role.trim().is_empty() || job.company.trim().is_empty() {
                push(format!("experience[{i}]"), "role and company are required");
            }
        }

        for (i, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                push(format!("projects[{i}].title"), "must not be empty");
            } else if self.projects[..i].iter().any(|p| p.title == project.title) {
                push(format!("projects[{i}].title"), "duplicate project title");
            }
            if project.category.trim().is_empty() {
                push(format!("projects[{i}].category"), "must not be empty");
            } else if project.category == ALL_CATEGORIES {
                push(format!("projects[{i}].category"), "`All` is reserved for the gallery filter");
            }
        }

        for (i, entry) in self.education.iter().enumerate() {
            if entry.degree.trim().is_empty() || entry.institution.trim().is_empty() {
                push(format!("education[{i}]"), "degree and institution are required");
            }
        }

        issues
    }
}
