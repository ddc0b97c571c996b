// shared types for the portfolio site
//
// the webapp renders these, the common crate fills them in with the static
// content baked into the build, and the contact module carries the only
// piece of "network" behavior the site has (which is simulated)
pub mod contact;
pub mod content;
pub mod theme;

// every section of the page is addressed by an html id, and the navigation
// links scroll to these
pub const SECTION_HOME: &str = "home";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_EXPERIENCE: &str = "experience";
pub const SECTION_CONTACT: &str = "contact";

pub const SECTIONS: [&str; 6] = [
    SECTION_HOME,
    SECTION_ABOUT,
    SECTION_PROJECTS,
    SECTION_SKILLS,
    SECTION_EXPERIENCE,
    SECTION_CONTACT,
];
