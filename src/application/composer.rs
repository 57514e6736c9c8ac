//! Deployment message composition

use crate::domain::ports::RevisionSource;
use crate::domain::value_objects::{BuildEnvironment, BuildMetadata, DeployMessage};
use crate::error::HookResult;

/// Builds the deployment message from an environment snapshot and the
/// current source revision.
pub struct MessageComposer<S: RevisionSource> {
    env: BuildEnvironment,
    revisions: S,
}

impl<S: RevisionSource> MessageComposer<S> {
    pub fn new(env: BuildEnvironment, revisions: S) -> Self {
        Self { env, revisions }
    }

    /// Collect metadata. Fails only if the revision lookup fails.
    pub fn metadata(&self) -> HookResult<BuildMetadata> {
        let revision = self.revisions.current_revision()?;
        Ok(BuildMetadata::from_environment(&self.env, revision))
    }

    pub fn compose(&self) -> HookResult<DeployMessage> {
        self.compose_with_description(None)
    }

    pub fn compose_with_description(&self, description: Option<&str>) -> HookResult<DeployMessage> {
        let metadata = self.metadata()?;
        Ok(DeployMessage::compose(&metadata, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;

    struct FixedRevision(&'static str);

    impl RevisionSource for FixedRevision {
        fn current_revision(&self) -> HookResult<String> {
            Ok(self.0.to_string())
        }
    }

    struct NoRepository;

    impl RevisionSource for NoRepository {
        fn current_revision(&self) -> HookResult<String> {
            Err(HookError::RevisionUnavailable {
                reason: "not a git repository".to_string(),
            })
        }
    }

    fn composer(pairs: &[(&str, &str)]) -> MessageComposer<FixedRevision> {
        MessageComposer::new(
            BuildEnvironment::from_pairs(pairs.iter().copied()),
            FixedRevision("9b1d4e7"),
        )
    }

    #[test]
    fn test_only_user_set() {
        let message = composer(&[("BUILD_USER", "alice")]).compose().unwrap();
        assert_eq!(message.as_str(), "User: alice\nCommit: 9b1d4e7\n");
    }

    #[test]
    fn test_nothing_set_still_has_commit_line() {
        let message = composer(&[]).compose().unwrap();
        assert_eq!(message.as_str(), "Commit: 9b1d4e7\n");
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let message = composer(&[
            ("BUILD_USER", ""),
            ("BUILD_BRANCH", "main"),
            ("BUILD_ENVIRONMENT", ""),
            ("BUILD_EDITOR_VERSION", "6000.0.23f1"),
        ])
        .compose()
        .unwrap();
        assert_eq!(
            message.as_str(),
            "Branch: main\nCommit: 9b1d4e7\nUnity: 6000.0.23f1\n"
        );
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let message = composer(&[("HOME", "/root"), ("BUILD_NUMBER", "42")])
            .compose()
            .unwrap();
        assert_eq!(message.as_str(), "Commit: 9b1d4e7\n");
    }

    #[test]
    fn test_each_set_variable_yields_exactly_one_line() {
        let message = composer(&[
            ("BUILD_USER", "bob"),
            ("BUILD_BRANCH", "release/1.2"),
            ("BUILD_ENVIRONMENT", "production"),
            ("BUILD_EDITOR_VERSION", "2022.3.10f1"),
        ])
        .compose()
        .unwrap();
        for label in ["User: ", "Branch: ", "Commit: ", "Environment: ", "Unity: "] {
            let count = message.as_str().lines().filter(|l| l.starts_with(label)).count();
            assert_eq!(count, 1, "label {label:?} in {message}");
        }
    }

    #[test]
    fn test_revision_failure_propagates() {
        let composer = MessageComposer::new(
            BuildEnvironment::from_pairs([("BUILD_USER", "alice")]),
            NoRepository,
        );
        let err = composer.compose().unwrap_err();
        assert!(matches!(err, HookError::RevisionUnavailable { .. }));
    }
}
