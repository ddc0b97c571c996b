use std::fmt;

use serde::{Deserialize, Serialize};

// structs and types
//
// all of these are records rendered verbatim by the section views; nothing is
// computed from them beyond filtering, so they borrow 'static data rather than
// owning it

pub type ProjectId = u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
}

impl SkillCategory {
    // display order on the page
    pub fn all() -> [SkillCategory; 2] {
        [SkillCategory::Frontend, SkillCategory::Backend]
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend Development",
            SkillCategory::Backend => "Backend Development",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillCategory::Frontend => write!(f, "frontend"),
            SkillCategory::Backend => write!(f, "backend"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    // percentage, 0..=100
    pub level: u8,
    pub icon: &'static str,
    pub category: SkillCategory,
    pub color: &'static str,
    pub description: &'static str,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    // the width of the level bar, clamped so a typo in the content can't
    // overflow the track
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(Self::MAX_LEVEL))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    // section id without the leading #
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

// a labelled fact shown in the about section, e.g. "Location: ..."
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileFact {
    pub label: &'static str,
    pub value: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_labels() {
        let all = SkillCategory::all();
        assert_eq!(all[0], SkillCategory::Frontend);
        assert_eq!(all[1].label(), "Backend Development");
        assert_eq!(SkillCategory::Frontend.to_string(), "frontend");
    }

    #[test]
    fn test_bar_width_clamps() {
        let mut skill = Skill {
            name: "Rust",
            level: 87,
            icon: "/icons/rust.png",
            category: SkillCategory::Backend,
            color: "#DEA584",
            description: "",
        };
        assert_eq!(skill.bar_width(), "87%");

        skill.level = 140;
        assert_eq!(skill.bar_width(), "100%");
    }

    #[test]
    fn test_nav_href() {
        let item = NavItem {
            label: "Skills",
            anchor: "skills",
        };
        assert_eq!(item.href(), "#skills");
    }
}
