//! # Folio content
//!
//! The static résumé data rendered by the terminal page: profile, experience,
//! skills, education, references, and contact channels. Everything here is
//! constant and read-only; renderers in `folio-tui` turn it into document rows
//! and never branch on anything except the optional fields documented on each
//! type.

pub mod anchors;
mod data;
mod model;

pub use data::{CONTACTS, CREDENTIALS, EDUCATION, EXPERIENCES, PROFILE, REFERENCES_NOTE, SKILL_CATEGORIES, portfolio};
pub use model::{Contact, Credential, Education, Experience, Icon, Portfolio, Profile, Project, SkillCategory, SocialLink};
