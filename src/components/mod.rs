mod reveal;
mod section;
mod social;

pub use reveal::Reveal;
pub use section::{Section, Tag};
pub use social::SocialLinks;
