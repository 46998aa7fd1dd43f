pub const NAME: &str = "recitations";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REVISION: Option<&str> = option_env!("RECITATIONS_REVISION");

pub const BUILD_TIMESTAMP: Option<&str> = option_env!("BUILD_TIMESTAMP");

/// The `User-Agent` sent with outgoing requests, e.g. `recitations/1.0.0 (abc123)`.
pub fn user_agent() -> String {
    match REVISION {
        Some(revision) => format!("{}/{} ({})", NAME, VERSION, revision),
        None => format!("{}/{}", NAME, VERSION),
    }
}
