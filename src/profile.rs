//! Dossier profile data.
//!
//! The profile feeds both the dossier page and the console commands. A
//! built-in profile is used unless a TOML profile file is provided.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors raised while loading a profile file.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Identity block shown by `whoami` and the dossier header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub alias: String,
    pub specialization: String,
    pub status: String,
}

/// A skill with a proficiency percentage (0-100).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

/// A deployed project ("case file").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub stack: String,
}

/// One employment record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub stack: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A contact channel such as email or a profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub label: String,
    pub address: String,
}

/// Current availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub open_to: Vec<String>,
    pub location: String,
    pub notice: String,
}

/// Everything the dossier knows about its subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub source_url: String,
    pub response_time: String,
    pub identity: Identity,
    pub availability: Availability,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub channels: Vec<Channel>,
}

impl Profile {
    /// Load a profile from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the profile at `path` if it exists, otherwise the built-in one.
    pub fn load_or_default(path: &Path) -> Result<Self, ProfileError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
    fn default() -> Self {
        let skill = |name: &str, percent: u8| Skill {
            name: name.to_string(),
            percent,
        };
        let project = |title: &str, stack: &str| Project {
            title: title.to_string(),
            stack: stack.to_string(),
        };
        let channel = |label: &str, address: &str| Channel {
            label: label.to_string(),
            address: address.to_string(),
        };

        Self {
            identity: Identity {
                name: "BRUCE WAYNE".to_string(),
                alias: "Full Stack Engineer, Gotham City".to_string(),
                specialization: "Interactive UI + Scalable Systems".to_string(),
                status: "AVAILABLE FOR HIRE".to_string(),
            },
            email: "bruce@wayne-enterprises.example".to_string(),
            source_url: "github.com/batcomputer".to_string(),
            response_time: "< 24 hours".to_string(),
            skills: vec![
                skill("HTML5/CSS3", 92),
                skill("Python", 90),
                skill("JavaScript", 85),
                skill("React.js", 80),
                skill("Node.js", 80),
                skill("Django", 75),
                skill("MongoDB", 70),
                skill("Azure/GCP", 65),
                skill("Java / C", 60),
            ],
            projects: vec![
                project("Music Streaming App", "Node.js / MongoDB / Express"),
                project("EntityGraph AI", "Python / OpenAI / Graph"),
                project("Healthcare Web Platform", "Django / React / Azure"),
                project("Data Pipeline Automation", "Python / GCP / ML"),
                project("Bat-Computer Dossier", "Rust / ratatui / crossterm"),
                project("REST API Microservices", "Node.js / Express / REST"),
            ],
            experience: vec![Experience {
                company: "WAYNE ENTERPRISES".to_string(),
                role: "Full Stack Engineer".to_string(),
                duration: "July 2025 - Present (ACTIVE)".to_string(),
                stack: "React.js · Node.js · MongoDB · Django · Azure".to_string(),
                highlights: strings(&[
                    "Production healthcare web apps",
                    "Scalable REST APIs + cloud deployments",
                    "Automated data pipelines with Python",
                ]),
            }],
            channels: vec![
                channel("EMAIL", "bruce@wayne-enterprises.example"),
                channel("GITHUB", "github.com/batcomputer"),
                channel("LINKEDIN", "linkedin.com/in/batcomputer"),
                channel("LEETCODE", "leetcode.com/u/batcomputer"),
            ],
            availability: Availability {
                open_to: strings(&[
                    "Full-time roles",
                    "Freelance projects",
                    "Contract / consulting",
                ]),
                location: "Gotham City (Remote-friendly)".to_string(),
                notice: "Available immediately".to_string(),
            },
        }
    }
}
