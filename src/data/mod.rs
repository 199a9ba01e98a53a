pub mod profile;
pub mod structured;

pub use profile::*;
pub use structured::person_json_ld;
