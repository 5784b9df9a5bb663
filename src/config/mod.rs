//! Configuration module

mod site;

pub use site::SiteConfig;
pub use site::DEFAULT_COVER_IMAGE;
