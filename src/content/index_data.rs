use crate::domain::model::{ContactInfo, Hero, ProjectDetails, ProjectStatus};

pub const EMAIL: &str = "contact@xaaha.dev";
pub const GITHUB: &str = "https://github.com/xaaha/";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/pthapa1";

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: EMAIL,
    github: GITHUB,
    linkedin: LINKEDIN,
};

pub static HERO: Hero = Hero {
    title: "Pratik | Software Engineer",
    visible_title: "Turning Problems Into Pull Requests Since 2019",
    subtitle: "I build thoughtful software, fix bugs, and occasionally name things well",
    aside: "And I use Neovim, by the way.",
};

pub static PROJECT_INFO: [ProjectDetails; 5] = [
    ProjectDetails {
        title: "Hulak",
        description: "I wanted a fast, no-fuss API client I could run straight from the terminal. \
            So I built Hulak—a lightweight CLI tool written in Go that lets you define requests \
            in YAML and fire them off with zero bloat.",
        github_url: Some("https://github.com/xaaha/hulak"),
        web_url: None,
        tags: Some("Go CLI-APP Tooling"),
        status: Some(ProjectStatus::Active),
    },
    ProjectDetails {
        title: "This Website",
        description: "A personal corner of the internet to share what I’ve learned and what \
            I’m building. Powered by Astro for speed, styled for clarity, and always a work in \
            progress—just like me.",
        github_url: Some("https://github.com/xaaha/tldrnotes"),
        web_url: None,
        tags: Some("Astro TypeScript CSS JS"),
        status: Some(ProjectStatus::Active),
    },
    ProjectDetails {
        title: "Pratik Picture",
        description: "I wanted a simple, fast, and good-looking home for my photography. So I \
            made one. A custom static site built with just HTML, CSS, and JS. No frameworks, \
            just vibes.",
        github_url: None,
        web_url: Some("https://pratikpicture.com/"),
        tags: Some("HTML CSS JS Photography"),
        status: Some(ProjectStatus::Complete),
    },
    ProjectDetails {
        title: "Sheet Happens",
        description: "A tool for generating Amazon Ads bulk launch sheets for Sponsored \
            Products, built with TanStack Start and TypeScript.",
        github_url: None,
        web_url: Some("sh.xaaha.dev"),
        tags: Some("TypeScript TanStack Tailwind CSS"),
        status: Some(ProjectStatus::Active),
    },
    ProjectDetails {
        title: "Address API",
        description: "Graphql API, built for internationalization testing, this API returns \
            five complete, randomly selected valid addresses with phone numbers from over \
            20,000 real-world entries—filtered by country code.",
        github_url: None,
        web_url: Some("https://github.com/xaaha/address-api"),
        tags: Some("Go"),
        status: Some(ProjectStatus::Complete),
    },
];
