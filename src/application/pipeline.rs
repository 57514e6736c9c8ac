//! Build-completion pipeline
//!
//! Post-process hooks run in ascending callback order once a build has
//! finished. `DeployPostprocess` is the hook that resolves the archive,
//! composes the message and hands both to the [`Deployer`].

use std::path::{Path, PathBuf};

use crate::domain::ports::{Host, ProcessRunner, RevisionSource};
use crate::domain::value_objects::{BuildTarget, DeployMessage};
use crate::error::HookResult;

use super::composer::MessageComposer;
use super::deployer::{DeployOutcome, Deployer};
use super::resolver::ArchiveResolver;

/// Callback order of the distribution hook; lower runs first
pub const DEPLOY_CALLBACK_ORDER: i32 = 200;

/// What a post-process hook did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostprocessReport {
    pub hook: String,
    pub archive: PathBuf,
    pub message: DeployMessage,
    pub outcome: DeployOutcome,
}

/// A hook invoked after a build completes
pub trait PostprocessHook {
    fn name(&self) -> &str;

    fn callback_order(&self) -> i32;

    fn on_postprocess_build(
        &self,
        target: BuildTarget,
        output_path: &Path,
    ) -> HookResult<PostprocessReport>;
}

/// Ordered set of post-process hooks
#[derive(Default)]
pub struct BuildPipeline<'a> {
    hooks: Vec<Box<dyn PostprocessHook + 'a>>,
}

impl<'a> BuildPipeline<'a> {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a hook. Hooks with equal order keep registration order.
    pub fn register(&mut self, hook: impl PostprocessHook + 'a) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self.hooks.sort_by_key(|h| h.callback_order());
        self
    }

    /// Run every hook in order, stopping at the first error.
    pub fn on_build_complete(
        &self,
        target: BuildTarget,
        output_path: &Path,
    ) -> HookResult<Vec<PostprocessReport>> {
        let mut reports = Vec::with_capacity(self.hooks.len());
        for hook in &self.hooks {
            tracing::debug!(hook = hook.name(), order = hook.callback_order(), "running post-process hook");
            reports.push(hook.on_postprocess_build(target, output_path)?);
        }
        Ok(reports)
    }
}

/// Resolve, compose, deploy
pub struct DeployPostprocess<S, R, H>
where
    S: RevisionSource,
    R: ProcessRunner,
    H: Host,
{
    resolver: ArchiveResolver,
    composer: MessageComposer<S>,
    deployer: Deployer<R, H>,
    description: Option<String>,
}

impl<S, R, H> DeployPostprocess<S, R, H>
where
    S: RevisionSource,
    R: ProcessRunner,
    H: Host,
{
    pub fn new(
        resolver: ArchiveResolver,
        composer: MessageComposer<S>,
        deployer: Deployer<R, H>,
    ) -> Self {
        Self {
            resolver,
            composer,
            deployer,
            description: None,
        }
    }

    /// Free text appended below the metadata lines
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

impl<S, R, H> PostprocessHook for DeployPostprocess<S, R, H>
where
    S: RevisionSource,
    R: ProcessRunner,
    H: Host,
{
    fn name(&self) -> &str {
        "deploy"
    }

    fn callback_order(&self) -> i32 {
        DEPLOY_CALLBACK_ORDER
    }

    fn on_postprocess_build(
        &self,
        target: BuildTarget,
        output_path: &Path,
    ) -> HookResult<PostprocessReport> {
        let archive = self.resolver.resolve(target, output_path)?;
        let message = self
            .composer
            .compose_with_description(self.description.as_deref())?;
        let outcome = self.deployer.deploy(&archive, Some(message.as_str()))?;

        Ok(PostprocessReport {
            hook: self.name().to_string(),
            archive,
            message,
            outcome,
        })
    }
}
