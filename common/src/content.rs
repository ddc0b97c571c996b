// static content
//
// everything the sections render lives here as constant tables.  there is no
// data layer behind the site; changing the portfolio means editing this file
// and rebuilding
use api::{
    SECTION_ABOUT, SECTION_CONTACT, SECTION_EXPERIENCE, SECTION_HOME, SECTION_PROJECTS,
    SECTION_SKILLS,
    content::{
        ContactDetail, ExperienceEntry, NavItem, ProfileFact, Project, Skill, SkillCategory,
        SocialLink,
    },
};

// images served alongside the wasm bundle
pub mod images {
    pub const HERO: &str = "/my-image.png";
    pub const ABOUT: &str = "/aboute-us-new.png";
    pub const RESUME: &str = "/Muhammad-Usman.pdf";

    pub const DEVONTIX_LOGO: &str = "/devontix-solution-logo.jpeg";
    pub const GENIUS_MIND_LOGO: &str = "/genius-mind-zone-logo.jpeg";
    pub const DEVSTRING_LOGO: &str = "/dev-string-logo.jpeg";

    pub const REACT: &str = "/icons/react.png";
    pub const NEXT: &str = "/icons/next.png";
    pub const TAILWIND: &str = "/icons/tailwind.png";
    pub const TYPESCRIPT: &str = "/icons/typescript.png";
    pub const JAVASCRIPT: &str = "/icons/javascript.png";
    pub const NODE: &str = "/icons/node.png";
    pub const EXPRESS: &str = "/icons/express3.png";
    pub const MONGODB: &str = "/icons/mongo.png";
    pub const FIREBASE: &str = "/icons/firebase.png";
    pub const REST_API: &str = "/icons/restapi.png";
}

// social icons come from simpleicons, tinted to the muted grey used elsewhere
pub const SOCIAL_ICON_CDN: &str = "https://cdn.simpleicons.org";
pub const SOCIAL_ICON_TINT: &str = "6b7280";

pub fn social_icon_url(name: &str) -> String {
    format!("{SOCIAL_ICON_CDN}/{name}/{SOCIAL_ICON_TINT}")
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", anchor: SECTION_HOME },
    NavItem { label: "About", anchor: SECTION_ABOUT },
    NavItem { label: "Projects", anchor: SECTION_PROJECTS },
    NavItem { label: "Skills", anchor: SECTION_SKILLS },
    NavItem { label: "Experience", anchor: SECTION_EXPERIENCE },
    NavItem { label: "Contact", anchor: SECTION_CONTACT },
];

// the footer carries a shorter list than the header
pub const QUICK_LINKS: &[NavItem] = &[
    NavItem { label: "Home", anchor: SECTION_HOME },
    NavItem { label: "About", anchor: SECTION_ABOUT },
    NavItem { label: "Projects", anchor: SECTION_PROJECTS },
    NavItem { label: "Skills", anchor: SECTION_SKILLS },
    NavItem { label: "Contact", anchor: SECTION_CONTACT },
];

pub const SOCIALS: &[SocialLink] = &[
    SocialLink { name: "github", url: "https://github.com/MuhammadUsmanRana" },
    SocialLink {
        name: "linkedin",
        url: "https://www.linkedin.com/in/muhammad-usman-280321268/",
    },
    SocialLink { name: "x", url: "https://x.com/Muhamma69588482" },
    SocialLink { name: "whatsapp", url: "https://wa.me/923212494291" },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "ranausman5939@gmail.com",
        href: Some("mailto:ranausman5939@gmail.com"),
    },
    ContactDetail {
        label: "Phone",
        value: "+92 (321) 2494291",
        href: Some("tel:+923212494291"),
    },
    ContactDetail {
        label: "Location",
        value: "Faisalabad, Pakistan",
        href: None,
    },
];

// strings cycled by the typewriter in the hero
pub const HERO_ROLES: &[&str] = &[
    "MERN Stack Developer",
    "Next.js Developer",
    "React.js Developer",
];

pub const HERO_GREETING: &str = "Hello, I'm Muhammad Usman";

pub const ABOUT_HEADLINE: &str = "MERN Stack & Next.js Developer";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hello! I'm Usman, a passionate MERN Stack and Next.js developer with over 2 years of \
     experience creating beautiful, functional websites and applications. I specialize in React, \
     TypeScript, and modern CSS frameworks like Tailwind CSS, Bootstrap, and Material UI. I also \
     have experience with Next.js, Node.js, Express, and MongoDB.",
    "My journey in web development began during college when I built my first e-commerce site. \
     Since then, I've worked with startups and established companies to deliver engaging digital \
     experiences that users love. I'm particularly passionate about accessibility and ensuring \
     websites work for everyone.",
];

pub const PROFILE_FACTS: &[ProfileFact] = &[
    ProfileFact { label: "Name", value: "Muhammad Usman" },
    ProfileFact { label: "Email", value: "ranausman5939@gmail.com" },
    ProfileFact { label: "Location", value: "Faisalabad, Pakistan" },
    ProfileFact { label: "Availability", value: "Freelance & Full-time" },
];

pub const FOOTER_BLURB: &str = "Building beautiful digital experiences with a focus on clean \
     design and intuitive user interfaces. Let's work together to bring your ideas to life.";

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "E-commerce Dashboard",
        description: "A modern dashboard for e-commerce stores with real-time analytics, \
                      inventory management, and order processing.",
        image: "https://images.pexels.com/photos/38519/macbook-laptop-ipad-apple-38519.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "TypeScript", "Tailwind"],
        live_url: "https://example.com/project1",
        github_url: "https://github.com/johndoe/project1",
        featured: true,
    },
    Project {
        id: 2,
        title: "Weather App",
        description: "A beautiful weather application with 7-day forecasts, location search, \
                      and customizable units of measurement.",
        image: "https://images.pexels.com/photos/1072848/pexels-photo-1072848.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "APIs", "CSS"],
        live_url: "https://example.com/project2",
        github_url: "https://github.com/johndoe/project2",
        featured: false,
    },
    Project {
        id: 3,
        title: "Task Management System",
        description: "A collaborative task management tool with real-time updates, task \
                      assignment, and progress tracking.",
        image: "https://images.pexels.com/photos/7376/startup-photos.jpg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Firebase", "Tailwind"],
        live_url: "https://example.com/project3",
        github_url: "https://github.com/johndoe/project3",
        featured: false,
    },
    Project {
        id: 4,
        title: "Fitness Tracker",
        description: "A comprehensive fitness tracking application with workout plans, progress \
                      visualization, and goal setting.",
        image: "https://images.pexels.com/photos/5077047/pexels-photo-5077047.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React Native", "TypeScript", "Charts"],
        live_url: "https://example.com/project4",
        github_url: "https://github.com/johndoe/project4",
        featured: false,
    },
    Project {
        id: 5,
        title: "Recipe Finder",
        description: "A recipe discovery app with search filters, nutrition information, and \
                      personalized recommendations.",
        image: "https://images.pexels.com/photos/4144923/pexels-photo-4144923.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "Redux", "API"],
        live_url: "https://example.com/project5",
        github_url: "https://github.com/johndoe/project5",
        featured: false,
    },
    Project {
        id: 6,
        title: "Virtual Classroom",
        description: "An interactive virtual classroom with video conferencing, whiteboard, and \
                      resource sharing capabilities.",
        image: "https://images.pexels.com/photos/8471799/pexels-photo-8471799.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
        tags: &["React", "WebRTC", "Firebase"],
        live_url: "https://example.com/project6",
        github_url: "https://github.com/johndoe/project6",
        featured: false,
    },
];

pub const SKILLS: &[Skill] = &[
    // frontend
    Skill {
        name: "React",
        level: 92,
        icon: images::REACT,
        category: SkillCategory::Frontend,
        color: "#61DAFB",
        description: "Building interactive user interfaces with React hooks and modern patterns",
    },
    Skill {
        name: "Next.js",
        level: 98,
        icon: images::NEXT,
        category: SkillCategory::Frontend,
        color: "#000000",
        description: "Full-stack React framework with SSR, SSG, and API routes",
    },
    Skill {
        name: "TypeScript",
        level: 85,
        icon: images::TYPESCRIPT,
        category: SkillCategory::Frontend,
        color: "#3178C6",
        description: "Type-safe JavaScript development with advanced features",
    },
    Skill {
        name: "Tailwind CSS",
        level: 90,
        icon: images::TAILWIND,
        category: SkillCategory::Frontend,
        color: "#06B6D4",
        description: "Utility-first CSS framework for rapid UI development",
    },
    Skill {
        name: "JavaScript",
        level: 92,
        icon: images::JAVASCRIPT,
        category: SkillCategory::Frontend,
        color: "#F7DF1E",
        description: "Modern JavaScript with ES6+ features and async programming",
    },
    // backend
    Skill {
        name: "Node.js",
        level: 85,
        icon: images::NODE,
        category: SkillCategory::Backend,
        color: "#339933",
        description: "Server-side JavaScript runtime with event-driven architecture",
    },
    Skill {
        name: "Express.js",
        level: 82,
        icon: images::EXPRESS,
        category: SkillCategory::Backend,
        color: "#000000",
        description: "Fast, unopinionated web framework for Node.js",
    },
    Skill {
        name: "MongoDB",
        level: 78,
        icon: images::MONGODB,
        category: SkillCategory::Backend,
        color: "#47A248",
        description: "NoSQL database with flexible document storage",
    },
    Skill {
        name: "Firebase",
        level: 80,
        icon: images::FIREBASE,
        category: SkillCategory::Backend,
        color: "#FFCA28",
        description: "Backend-as-a-Service with real-time database and authentication",
    },
    Skill {
        name: "REST APIs",
        level: 85,
        icon: images::REST_API,
        category: SkillCategory::Backend,
        color: "#FF6B6B",
        description: "Designing and implementing RESTful API endpoints",
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Devontix Solutions",
        role: "Mern Stack Developer",
        duration: "Oct 2024 - Present",
        location: "On Site",
        highlights: &[
            "Developed full-stack web applications using MongoDB, Express.js, React, and Node.js",
            "Implemented RESTful APIs and integrated them with frontend interfaces",
            "Collaborated with cross-functional teams to deliver high-quality software solutions",
            "Optimized application performance and improved user experience",
        ],
        technologies: &[
            "Next.js",
            "Node.js",
            "MongoDB",
            "Express.js",
            "TypeScript",
            "Tailwind CSS",
            "styled-components",
        ],
        logo: images::DEVONTIX_LOGO,
    },
    ExperienceEntry {
        company: "Genius Mind Zone",
        role: "Mern Stack Developer",
        duration: "Apr 2024 - Oct 2024",
        location: "On Site",
        highlights: &[
            "Built scalable backend services using Node.js and Express.js",
            "Designed and implemented database schemas using MongoDB",
            "Created responsive frontend components with React and modern CSS",
            "Participated in code reviews and maintained code quality standards",
        ],
        technologies: &["Next.js", "Node.js", "MongoDB", "Express.js", "JavaScript", "CSS3"],
        logo: images::GENIUS_MIND_LOGO,
    },
    ExperienceEntry {
        company: "DevString",
        role: "Frontend Developer",
        duration: "Mar 2023 - Feb 2024",
        location: "On Site",
        highlights: &[
            "Developed responsive web applications using React and TypeScript",
            "Implemented modern UI/UX designs with attention to accessibility",
            "Worked with REST APIs and state management solutions",
            "Contributed to team knowledge sharing and documentation",
        ],
        technologies: &["Next.js", "TypeScript", "JavaScript", "HTML5", "CSS3", "Git"],
        logo: images::DEVSTRING_LOGO,
    },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
        assert_eq!(PROJECTS.len(), 6);
    }

    #[test]
    fn test_one_featured_project() {
        let featured: Vec<_> = PROJECTS
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.title)
            .collect();
        assert_eq!(featured, vec!["E-commerce Dashboard"]);
    }

    #[test]
    fn test_skills_split_evenly() {
        assert_eq!(skills_in(SkillCategory::Frontend).count(), 5);
        assert_eq!(skills_in(SkillCategory::Backend).count(), 5);
        assert!(SKILLS.iter().all(|s| s.level <= Skill::MAX_LEVEL));
    }

    #[test]
    fn test_every_category_has_skills() {
        for category in SkillCategory::all() {
            assert!(skills_in(category).next().is_some(), "{category} is empty");
        }
    }

    #[test]
    fn test_nav_targets_are_sections() {
        for item in NAV_ITEMS.iter().chain(QUICK_LINKS) {
            assert!(api::SECTIONS.contains(&item.anchor), "{} has no section", item.label);
        }
        assert_eq!(NAV_ITEMS.len(), api::SECTIONS.len());
    }

    #[test]
    fn test_only_location_is_unlinked() {
        let unlinked: Vec<_> = CONTACT_DETAILS
            .iter()
            .filter(|d| d.href.is_none())
            .map(|d| d.label)
            .collect();
        assert_eq!(unlinked, vec!["Location"]);
    }

    #[test]
    fn test_social_icon_url() {
        assert_eq!(
            social_icon_url("github"),
            "https://cdn.simpleicons.org/github/6b7280"
        );
    }

    #[test]
    fn test_experience_entries_are_complete() {
        assert_eq!(EXPERIENCE.len(), 3);
        for entry in EXPERIENCE {
            assert!(!entry.highlights.is_empty());
            assert!(!entry.technologies.is_empty());
        }
    }
}
