//! Anchor identifiers placed in the rendered document.
//!
//! The contact section carries two anchors: `contact` marks the section
//! itself and `about` marks its "About & Contact" header.

pub const ABOUT: &str = "about";
pub const EXPERIENCE: &str = "experience";
pub const SKILLS: &str = "skills";
pub const EDUCATION: &str = "education";
pub const REFERENCES: &str = "references";
pub const CONTACT: &str = "contact";

/// Every anchor the page renders, in document order.
pub const ALL: &[&str] = &[EXPERIENCE, SKILLS, EDUCATION, REFERENCES, CONTACT, ABOUT];
