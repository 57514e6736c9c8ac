//! Build metadata rendered into the deployment message

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Fixed metadata keys, declared in render order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKey {
    User,
    Branch,
    Revision,
    Environment,
    EditorVersion,
}

impl MetadataKey {
    /// Render order; downstream readers rely on it
    pub const ORDER: [MetadataKey; 5] = [
        MetadataKey::User,
        MetadataKey::Branch,
        MetadataKey::Revision,
        MetadataKey::Environment,
        MetadataKey::EditorVersion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MetadataKey::User => "User",
            MetadataKey::Branch => "Branch",
            MetadataKey::Revision => "Commit",
            MetadataKey::Environment => "Environment",
            MetadataKey::EditorVersion => "Unity",
        }
    }

    /// Environment variable backing this key; `None` for the revision,
    /// which comes from source control.
    pub fn env_var(&self) -> Option<&'static str> {
        match self {
            MetadataKey::User => Some("BUILD_USER"),
            MetadataKey::Branch => Some("BUILD_BRANCH"),
            MetadataKey::Revision => None,
            MetadataKey::Environment => Some("BUILD_ENVIRONMENT"),
            MetadataKey::EditorVersion => Some("BUILD_EDITOR_VERSION"),
        }
    }
}

/// Snapshot of the build-parameter environment variables.
///
/// Captured once per compose cycle so later changes to the process
/// environment cannot leak into a message half-way through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnvironment {
    vars: BTreeMap<String, String>,
}

impl BuildEnvironment {
    /// Read every build-parameter variable from the current process.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Read the build-parameter variables through `lookup`.
    ///
    /// Values that are not valid UTF-8 are kept, lossily converted.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let vars = MetadataKey::ORDER
            .iter()
            .filter_map(MetadataKey::env_var)
            .filter_map(|name| {
                lookup(name).map(|v| (name.to_string(), v.to_string_lossy().into_owned()))
            })
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Value of `name`, treating empty strings as absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Metadata values for one deploy, keyed by [`MetadataKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub user: Option<String>,
    pub branch: Option<String>,
    pub revision: String,
    pub environment: Option<String>,
    pub editor_version: Option<String>,
}

impl BuildMetadata {
    pub fn from_environment(env: &BuildEnvironment, revision: impl Into<String>) -> Self {
        let lookup = |key: MetadataKey| {
            key.env_var()
                .and_then(|name| env.get(name))
                .map(str::to_string)
        };
        Self {
            user: lookup(MetadataKey::User),
            branch: lookup(MetadataKey::Branch),
            revision: revision.into(),
            environment: lookup(MetadataKey::Environment),
            editor_version: lookup(MetadataKey::EditorVersion),
        }
    }

    pub fn value(&self, key: MetadataKey) -> Option<&str> {
        match key {
            MetadataKey::User => self.user.as_deref(),
            MetadataKey::Branch => self.branch.as_deref(),
            MetadataKey::Revision => Some(self.revision.as_str()),
            MetadataKey::Environment => self.environment.as_deref(),
            MetadataKey::EditorVersion => self.editor_version.as_deref(),
        }
    }

    /// Render `"<Label>: <value>\n"` per present key.
    ///
    /// The revision line is always emitted, even when the revision is empty.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for key in MetadataKey::ORDER {
            match (key, self.value(key)) {
                (MetadataKey::Revision, value) => {
                    out.push_str(&format!("{}: {}\n", key.label(), value.unwrap_or_default()));
                }
                (_, Some(value)) if !value.is_empty() => {
                    out.push_str(&format!("{}: {}\n", key.label(), value));
                }
                _ => {}
            }
        }
        out
    }
}

/// Annotation handed to the distribution tool
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployMessage(String);

impl DeployMessage {
    /// Metadata lines, then a blank line and the description if one is given.
    pub fn compose(metadata: &BuildMetadata, description: Option<&str>) -> Self {
        let mut text = metadata.render();
        if let Some(desc) = description.map(str::trim).filter(|d| !d.is_empty()) {
            text.push('\n');
            text.push_str(desc);
            text.push('\n');
        }
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeployMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_rendered_not_dropped() {
        use std::os::unix::ffi::OsStringExt;

        let env = BuildEnvironment::from_lookup(|name| match name {
            "BUILD_USER" => Some(OsString::from_vec(b"al\xffce".to_vec())),
            "BUILD_BRANCH" => Some(OsString::new()),
            _ => None,
        });

        assert_eq!(env.get("BUILD_USER"), Some("al\u{FFFD}ce"));
        assert_eq!(env.get("BUILD_BRANCH"), None);
        let metadata = BuildMetadata::from_environment(&env, "abc".to_string());
        assert_eq!(metadata.render(), "User: al\u{FFFD}ce\nCommit: abc\n");
    }

    #[test]
    fn test_labels_follow_render_order() {
        let labels: Vec<_> = MetadataKey::ORDER.iter().map(|k| k.label()).collect();
        assert_eq!(labels, ["User", "Branch", "Commit", "Environment", "Unity"]);
    }

    #[test]
    fn test_only_revision_has_no_env_var() {
        for key in MetadataKey::ORDER {
            assert_eq!(key.env_var().is_none(), key == MetadataKey::Revision);
        }
    }

    #[test]
    fn test_empty_environment_values_read_as_absent() {
        let env = BuildEnvironment::from_pairs([("BUILD_USER", ""), ("BUILD_BRANCH", "main")]);
        assert_eq!(env.get("BUILD_USER"), None);
        assert_eq!(env.get("BUILD_BRANCH"), Some("main"));
        assert_eq!(env.get("BUILD_ENVIRONMENT"), None);
    }

    #[test]
    fn test_render_keeps_revision_between_branch_and_environment() {
        let env = BuildEnvironment::from_pairs([
            ("BUILD_EDITOR_VERSION", "2022.3.10f1"),
            ("BUILD_ENVIRONMENT", "staging"),
            ("BUILD_BRANCH", "develop"),
            ("BUILD_USER", "alice"),
        ]);
        let metadata = BuildMetadata::from_environment(&env, "abc123");
        insta::assert_snapshot!(metadata.render(), @r"
        User: alice
        Branch: develop
        Commit: abc123
        Environment: staging
        Unity: 2022.3.10f1
        ");
    }

    #[test]
    fn test_render_emits_commit_line_even_when_empty() {
        let metadata = BuildMetadata::from_environment(&BuildEnvironment::default(), "");
        assert_eq!(metadata.render(), "Commit: \n");
    }

    #[test]
    fn test_description_is_appended_after_blank_line() {
        let env = BuildEnvironment::from_pairs([("BUILD_USER", "alice")]);
        let metadata = BuildMetadata::from_environment(&env, "abc123");
        let message = DeployMessage::compose(&metadata, Some("  nightly build  "));
        assert_eq!(
            message.as_str(),
            "User: alice\nCommit: abc123\n\nnightly build\n"
        );
    }

    #[test]
    fn test_blank_description_is_ignored() {
        let metadata = BuildMetadata::from_environment(&BuildEnvironment::default(), "abc");
        let message = DeployMessage::compose(&metadata, Some("   "));
        assert_eq!(message.as_str(), "Commit: abc\n");
    }
}
