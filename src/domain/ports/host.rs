//! Host port - the build tool's process-level primitives

/// What the hosting build pipeline exposes to the deployer
pub trait Host {
    /// True when no human is watching (CI / batch mode)
    fn is_unattended(&self) -> bool;

    /// Terminate the whole host process with `exit_code`.
    ///
    /// Real hosts never return; test hosts record the call and return.
    fn terminate(&self, exit_code: i32);
}

impl<T: Host + ?Sized> Host for &T {
    fn is_unattended(&self) -> bool {
        (**self).is_unattended()
    }

    fn terminate(&self, exit_code: i32) {
        (**self).terminate(exit_code)
    }
}
