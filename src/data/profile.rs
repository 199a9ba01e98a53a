use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
}

impl SocialIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialIcon::GitHub => "GH",
            SocialIcon::LinkedIn => "in",
            SocialIcon::Mail => "✉",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub resume_url: &'static str,
    pub email: &'static str,
    pub socials: &'static [Social],
}

#[derive(Debug, Serialize)]
pub struct SkillGroup {
    pub group: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub name: &'static str,
    pub desc: &'static str,
    pub tags: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

pub static PROFILE: Profile = Profile {
    name: "Omar El‑Masry",
    title: "Senior Software Engineer · Systems & ML",
    location: "Cairo, Egypt",
    bio: "Engineer building high‑performance systems (C++/Python), ML‑driven schedulers, and elegant developer tooling. I care about reliability, DX, and delightful UX.",
    resume_url: "#",
    email: "omar@example.com",
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/your-username",
            icon: SocialIcon::GitHub,
        },
        Social {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/your-handle/",
            icon: SocialIcon::LinkedIn,
        },
        Social {
            label: "Email",
            href: "mailto:omar@example.com",
            icon: SocialIcon::Mail,
        },
    ],
};

pub static ABOUT: &str = "I'm a systems‑minded engineer who loves transforming messy real‑world constraints into robust software. Recently I've been migrating large Tcl orchestration to modern C++ (smart pointers, thread pools), and building ML predictors to cut compute cost on large simulation grids. I enjoy writing clear docs, thoughtful APIs, and small quality‑of‑life tools for teammates.";

pub static HIGHLIGHTS: &[&str] = &[
    "Led rewrite of mission‑critical Run Manager to C++",
    "Designed ML pipeline (XGBoost) with MLflow and dashboards",
    "Built DX tools: log parsers, metrics exporters, perf tracers",
];

pub static SKILLS: &[SkillGroup] = &[
    SkillGroup {
        group: "Core",
        items: &["C++ (17/20)", "Python", "Tcl", "C#", "SQL", "Linux"],
    },
    SkillGroup {
        group: "Systems & Tools",
        items: &["Concurrency", "Profiling", "gdb/valgrind", "SGE / Slurm", "Docker"],
    },
    SkillGroup {
        group: "ML / Data",
        items: &["XGBoost", "LightGBM", "Pandas", "MLflow", "dbt", "PostgreSQL"],
    },
    SkillGroup {
        group: "Frontend",
        items: &["React", "TailwindCSS", "Vite", "shadcn/ui"],
    },
];

pub static PROJECTS: &[Project] = &[
    Project {
        name: "Schedule‑Predictor",
        desc: "ML pipeline predicting duration & memory of RTL simulations to optimize grid scheduling. Features advanced feature engineering, model tracking, and evaluation dashboards.",
        tags: &["Python", "XGBoost", "PostgreSQL", "MLflow"],
        links: &[
            ProjectLink {
                label: "Repo",
                href: "https://github.com/your-username/schedule-predictor",
            },
            ProjectLink {
                label: "Docs",
                href: "https://your-site.dev/schedule-predictor",
            },
        ],
    },
    Project {
        name: "VRUN (C++ Migration)",
        desc: "Modern C++ rewrite of a legacy Tcl run manager: dependency graph, smart‑pointer architecture, robust logging, and cross‑platform process orchestration.",
        tags: &["C++", "Tcl", "Systems", "Concurrency"],
        links: &[ProjectLink {
            label: "Repo",
            href: "https://github.com/your-username/vrun-cpp",
        }],
    },
    Project {
        name: "Hobby‑Centric Interiors",
        desc: "Design micro‑site showcasing moodboards and project case studies. Clean UI, accessible components, and CMS‑driven content.",
        tags: &["React", "Tailwind", "Content"],
        links: &[
            ProjectLink {
                label: "Live",
                href: "https://your-username.github.io/hobby-home",
            },
            ProjectLink {
                label: "Repo",
                href: "https://github.com/your-username/hobby-home",
            },
        ],
    },
];

pub static CONTACT_NOTE: &str =
    "Looking for collaborations, freelance systems work, or ML consulting. ";

/// In-page anchors shown in the header, in scroll order.
pub static NAV_ANCHORS: &[(&str, &str)] = &[
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_and_skill_keys_are_unique() {
        let names: HashSet<_> = PROJECTS.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), PROJECTS.len());

        let groups: HashSet<_> = SKILLS.iter().map(|s| s.group).collect();
        assert_eq!(groups.len(), SKILLS.len());
    }

    #[test]
    fn test_mail_social_points_at_profile_email() {
        let mail = PROFILE
            .socials
            .iter()
            .find(|s| s.icon == SocialIcon::Mail)
            .unwrap();
        assert_eq!(mail.href, format!("mailto:{}", PROFILE.email));
    }

    #[test]
    fn test_nav_anchors_are_fragments() {
        assert!(NAV_ANCHORS.iter().all(|(_, href)| href.starts_with('#')));
    }
}
