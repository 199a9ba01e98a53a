//! schema.org `Person` markup so search engines can read the profile.

use serde_json::{json, Value};

use crate::data::profile::{Profile, SkillGroup, SocialIcon, PROFILE, SKILLS};

pub fn person_json_ld() -> Value {
    person_from(&PROFILE, SKILLS)
}

fn person_from(profile: &Profile, skills: &[SkillGroup]) -> Value {
    let same_as: Vec<&str> = profile
        .socials
        .iter()
        .filter(|s| s.icon != SocialIcon::Mail)
        .map(|s| s.href)
        .collect();
    let knows_about: Vec<&str> = skills.iter().flat_map(|s| s.items.iter().copied()).collect();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": profile.name,
        "jobTitle": profile.title,
        "description": profile.bio,
        "email": format!("mailto:{}", profile.email),
        "address": {
            "@type": "PostalAddress",
            "addressLocality": profile.location,
        },
        "sameAs": same_as,
        "knowsAbout": knows_about,
    })
}
