pub mod resume;
pub mod template_config;
