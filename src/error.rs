//! Error type shared by configuration and the platform bootstrap.

use thiserror::Error;

/// Errors that can stop the application from starting.
///
/// Everything after bootstrap (ticks, menu actions, notifications) is
/// infallible; these only surface from setup code.
#[derive(Debug, Error)]
pub enum TrailError {
    #[error("the application must be started on the main thread")]
    NotMainThread,

    #[error("Objective-C class `{0}` is not available")]
    MissingClass(String),

    #[error("could not declare Objective-C class `{0}`")]
    ClassRegistration(&'static str),

    #[error("the window server did not create the overlay panel")]
    PanelCreation,

    #[error("the system status bar did not return a status item")]
    StatusItem,

    #[error("could not create a run loop timer")]
    Timer,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cursor-trail only runs on macOS")]
    UnsupportedPlatform,
}

pub type Result<T> = std::result::Result<T, TrailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_class() {
        let err = TrailError::ClassRegistration("CursorTrailPanel");
        assert_eq!(
            err.to_string(),
            "could not declare Objective-C class `CursorTrailPanel`"
        );
    }

    #[test]
    fn invalid_config_carries_reason() {
        let err = TrailError::InvalidConfig("poll interval must be positive".into());
        assert!(err.to_string().ends_with("poll interval must be positive"));
    }
}
