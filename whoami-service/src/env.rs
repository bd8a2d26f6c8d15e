use std::collections::HashMap;

/// Ordinal of this copy among the scaled-out instances of the application.
pub const CF_INSTANCE_INDEX: &str = "CF_INSTANCE_INDEX";

/// JSON descriptor of the deployed application, supplied by the platform.
pub const VCAP_APPLICATION: &str = "VCAP_APPLICATION";

/// Source of process-wide metadata that is fixed for the lifetime of the process.
pub trait Environment: Send + Sync + 'static {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        // a non-unicode value is still "present"; parsing decides whether it is usable
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
