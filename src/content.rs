pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub portrait: &'static str,
    pub resume_path: &'static str,
    pub resume_download_name: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Rowan Ellis",
    tagline: "Crafting dependable digital experiences with modern web technology, \
              from interactive interfaces to the cloud infrastructure behind them.",
    email: "hello@rowanellis.dev",
    github: "https://github.com/rowan-ellis",
    linkedin: "https://www.linkedin.com/in/rowan-ellis",
    portrait: "/images/portrait.jpg",
    resume_path: "/resume.pdf",
    resume_download_name: "Rowan_Ellis_Resume.pdf",
};

pub static ROLES: [&str; 5] = [
    "Senior Full-Stack Engineer",
    "Interface Specialist",
    "API Craftsperson",
    "Cloud Architect",
    "Tech Lead",
];

pub static ABOUT_PARAGRAPHS: [&str; 4] = [
    "I build web products end to end: pixel-level interface work, the services \
     behind them, and the pipelines that ship both. For the last several years \
     that has meant leading small teams through ambiguous, high-stakes builds.",
    "I care about software that stays understandable as it grows. Most of my \
     favorite wins were deletions: collapsing three brittle services into one \
     boring, observable process.",
    "Before product work I spent two years in data engineering, which left me \
     with strong opinions about schemas and a reflex for measuring before \
     optimizing.",
    "Away from a keyboard I climb, keep a slowly expanding collection of film \
     cameras, and contribute to open-source tooling whenever a release window \
     allows.",
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static STATS: [Stat; 2] = [
    Stat {
        value: "8+",
        label: "Years experience",
    },
    Stat {
        value: "40+",
        label: "Projects shipped",
    },
];

pub static CORE_EXPERTISE: [&str; 6] = [
    "TypeScript",
    "Rust",
    "React",
    "PostgreSQL",
    "AWS",
    "GraphQL",
];

pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub level: u8,
}

pub struct SkillCategory {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        key: "frontend",
        label: "Frontend",
        icon: "🎨",
        skills: &[
            Skill {
                name: "React",
                icon: "⚛️",
                level: 95,
            },
            Skill {
                name: "TypeScript",
                icon: "🔷",
                level: 90,
            },
            Skill {
                name: "WebAssembly",
                icon: "🕸️",
                level: 80,
            },
            Skill {
                name: "CSS & Design Systems",
                icon: "💅",
                level: 85,
            },
        ],
    },
    SkillCategory {
        key: "backend",
        label: "Backend",
        icon: "⚙️",
        skills: &[
            Skill {
                name: "Rust",
                icon: "🦀",
                level: 85,
            },
            Skill {
                name: "Node.js",
                icon: "🟢",
                level: 90,
            },
            Skill {
                name: "GraphQL",
                icon: "◼️",
                level: 80,
            },
            Skill {
                name: "REST API Design",
                icon: "🔌",
                level: 90,
            },
        ],
    },
    SkillCategory {
        key: "database",
        label: "Database",
        icon: "🗄️",
        skills: &[
            Skill {
                name: "PostgreSQL",
                icon: "🐘",
                level: 90,
            },
            Skill {
                name: "Redis",
                icon: "⚡",
                level: 80,
            },
            Skill {
                name: "MongoDB",
                icon: "🍃",
                level: 70,
            },
        ],
    },
    SkillCategory {
        key: "devops",
        label: "DevOps",
        icon: "🚀",
        skills: &[
            Skill {
                name: "AWS",
                icon: "☁️",
                level: 85,
            },
            Skill {
                name: "Docker",
                icon: "🐳",
                level: 90,
            },
            Skill {
                name: "CI/CD",
                icon: "🔁",
                level: 85,
            },
            Skill {
                name: "Terraform",
                icon: "🏗️",
                level: 70,
            },
        ],
    },
];

#[derive(PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
    pub featured: bool,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Ledgerline",
        description: "Real-time expense analytics for small teams: streaming \
                      imports, anomaly flags, and a budgeting view accountants \
                      actually asked for.",
        image: "/images/projects/ledgerline.jpg",
        tech: &["React", "TypeScript", "PostgreSQL", "AWS"],
        live_url: "https://ledgerline.example.com",
        source_url: "https://github.com/rowan-ellis/ledgerline",
        featured: true,
    },
    Project {
        id: 2,
        title: "Relay Notes",
        description: "Local-first collaborative notes with CRDT sync and an \
                      offline queue that survives flaky conference wifi.",
        image: "/images/projects/relay-notes.jpg",
        tech: &["Rust", "WebAssembly", "IndexedDB"],
        live_url: "https://relaynotes.example.com",
        source_url: "https://github.com/rowan-ellis/relay-notes",
        featured: true,
    },
    Project {
        id: 3,
        title: "Freightview",
        description: "Logistics dashboard aggregating carrier telemetry into a \
                      single map with lane-level delay predictions.",
        image: "/images/projects/freightview.jpg",
        tech: &["React", "GraphQL", "Redis"],
        live_url: "https://freightview.example.com",
        source_url: "https://github.com/rowan-ellis/freightview",
        featured: false,
    },
    Project {
        id: 4,
        title: "Shutterlog",
        description: "A catalog for film photographers: roll tracking, \
                      development recipes, and EXIF-free metadata capture.",
        image: "/images/projects/shutterlog.jpg",
        tech: &["Node.js", "MongoDB", "S3"],
        live_url: "https://shutterlog.example.com",
        source_url: "https://github.com/rowan-ellis/shutterlog",
        featured: false,
    },
    Project {
        id: 5,
        title: "Gridline CI",
        description: "Opinionated CI templates and a dashboard that turns \
                      pipeline noise into a single red/green answer per release.",
        image: "/images/projects/gridline.jpg",
        tech: &["Rust", "Docker", "Terraform"],
        live_url: "https://gridline.example.com",
        source_url: "https://github.com/rowan-ellis/gridline-ci",
        featured: false,
    },
    Project {
        id: 6,
        title: "Aurora UI",
        description: "An accessible component library with motion primitives \
                      that respect reduced-motion preferences by default.",
        image: "/images/projects/aurora-ui.jpg",
        tech: &["TypeScript", "React", "CSS"],
        live_url: "https://aurora-ui.example.com",
        source_url: "https://github.com/rowan-ellis/aurora-ui",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<u32> = PROJECTS.iter().map(|project| project.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn featured_projects_are_a_nonempty_subset() {
        let featured = PROJECTS.iter().filter(|project| project.featured).count();
        assert!(featured > 0 && featured < PROJECTS.len());
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100);
            }
        }
    }

    #[test]
    fn category_keys_are_unique() {
        let keys: HashSet<&str> = SKILL_CATEGORIES.iter().map(|c| c.key).collect();
        assert_eq!(keys.len(), SKILL_CATEGORIES.len());
    }

    #[test]
    fn profile_links_and_copy_are_well_formed() {
        assert!(PROFILE.email.contains('@'));
        assert!(PROFILE.github.starts_with("https://"));
        assert!(PROFILE.linkedin.starts_with("https://"));
        assert!(PROFILE.resume_path.starts_with('/'));
        assert!(PROFILE.resume_download_name.ends_with(".pdf"));
        assert!(!PROFILE.name.is_empty() && !PROFILE.tagline.is_empty());
        assert!(PROFILE.portrait.starts_with('/'));

        assert!(ROLES.iter().all(|role| !role.is_empty()));
        assert!(ABOUT_PARAGRAPHS.iter().all(|paragraph| !paragraph.is_empty()));
        assert!(STATS.iter().all(|stat| !stat.value.is_empty() && !stat.label.is_empty()));
        assert!(CORE_EXPERTISE.iter().all(|skill| !skill.is_empty()));
    }
}
