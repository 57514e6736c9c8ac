//! RevisionSource port - current source-control revision

use crate::error::HookResult;

pub trait RevisionSource {
    /// Identifier of the checked-out state of the working tree
    fn current_revision(&self) -> HookResult<String>;
}

impl<T: RevisionSource + ?Sized> RevisionSource for &T {
    fn current_revision(&self) -> HookResult<String> {
        (**self).current_revision()
    }
}
