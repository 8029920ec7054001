mod settings;

pub use settings::{Config, DEFAULT_QUESTIONS_SOURCE, EXAMPLE_CONFIG};
