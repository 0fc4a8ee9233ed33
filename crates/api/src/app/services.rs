//! Services behind the handlers.

/// Shared, immutable application services.
#[derive(Debug, Clone)]
pub struct AppServices {
    greeting: String,
}

impl AppServices {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn hello(&self) -> &str {
        &self.greeting
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new("Hello World!")
    }
}

pub fn build_services() -> AppServices {
    AppServices::default()
}
