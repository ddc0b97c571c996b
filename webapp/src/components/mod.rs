pub mod button;
pub mod icons;
pub mod navigation;
pub mod section_heading;
pub mod social_links;
pub mod theme_toggle;
