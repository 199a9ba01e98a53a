pub mod logging;
pub mod site;

pub use logging::init_logging;
pub use site::contact_email;
