//! Platform abstraction layer for reading the current time.
//!
//! Timers read the clock through this layer so that tests can replace the real
//! clock with a fake one whose readings are set explicitly.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
