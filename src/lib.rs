mod views;
mod components;
pub mod utils;
pub mod data;
mod routes;
pub mod configs;
pub mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ contact_email, init_logging };
pub use crate::error::ThemeError;
