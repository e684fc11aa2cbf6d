//! Switch between the real clock and the fake clock used in tests.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

#[derive(Debug, Clone)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }

    #[cfg(test)]
    pub(crate) fn fake(fake_platform: FakePlatform) -> Self {
        Self::Fake(fake_platform)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.now(),
            #[cfg(test)]
            Self::Fake(platform) => platform.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fake_facade_reads_fake_time() {
        let fake_platform = FakePlatform::starting_at(Duration::from_millis(300));
        let facade = PlatformFacade::fake(fake_platform.clone());

        assert_eq!(facade.now(), Duration::from_millis(300));

        fake_platform.advance(Duration::from_millis(100));
        assert_eq!(facade.now(), Duration::from_millis(400));
    }

    #[test]
    #[cfg(not(miri))] // Miri cannot talk to the real platform.
    fn real_facade_reads_after_epoch() {
        let facade = PlatformFacade::real();
        assert!(facade.now() > Duration::ZERO);
    }
}
