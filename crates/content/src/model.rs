use folio_types::Link;
use serde::Serialize;

/// Glyphs used in place of icon fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Briefcase,
    Code,
    GraduationCap,
    Users,
    Mail,
    ExternalLink,
    GitHub,
    LinkedIn,
    HackerRank,
    Award,
    ChevronRight,
}

impl Icon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Briefcase => "▣",
            Icon::Code => "</>",
            Icon::GraduationCap => "◭",
            Icon::Users => "☷",
            Icon::Mail => "✉",
            Icon::ExternalLink => "↗",
            Icon::GitHub => "⌥",
            Icon::LinkedIn => "in",
            Icon::HackerRank => "H",
            Icon::Award => "★",
            Icon::ChevronRight => "›",
        }
    }
}

/// Hero block identity and primary call to action.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    /// Brand text shown at the left of the header.
    pub site: &'static str,
    pub email: &'static str,
    pub socials: &'static [SocialLink],
}

impl Profile {
    pub fn mail_link(&self) -> Link {
        Link::new(format!("mailto:{}", self.email))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Rendered only when present.
    pub achievements: Option<&'static [&'static str]>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

/// Long-running roles listed beneath the skill grid.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Credential {
    pub title: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Reference link, rendered only when present.
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub title: &'static str,
    pub courses: &'static [&'static str],
    pub project: Project,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

impl Contact {
    pub fn link(&self) -> Link {
        Link::new(self.href)
    }
}

/// The complete page content in one serializable bundle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub experiences: &'static [Experience],
    pub skill_categories: &'static [SkillCategory],
    pub credentials: &'static [Credential],
    pub education: &'static [Education],
    pub references_note: &'static str,
    pub contacts: &'static [Contact],
}
