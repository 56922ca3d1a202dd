/// Teardown guard around an [`InfoDisplay`] implementation.
use std::ops::{Deref, DerefMut};

use super::driver::InfoDisplay;

/// Owns the collaborator for one run and tears it down exactly once,
/// either through [`Session::close`] or when dropped.
pub struct Session<D: InfoDisplay> {
    driver: D,
    closed: bool,
}

impl<D: InfoDisplay> Session<D> {
    #[must_use]
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            closed: false,
        }
    }

    /// Tear the driver down now instead of at drop.
    pub fn close(mut self) {
        self.teardown_once();
    }

    fn teardown_once(&mut self) {
        if !self.closed {
            self.closed = true;
            tracing::debug!("tearing down driver");
            self.driver.teardown();
        }
    }
}

impl<D: InfoDisplay> Deref for Session<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.driver
    }
}

impl<D: InfoDisplay> DerefMut for Session<D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}

impl<D: InfoDisplay> Drop for Session<D> {
    fn drop(&mut self) {
        self.teardown_once();
    }
}
