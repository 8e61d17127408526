use std::time::Instant;

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform, TimeSource, TimeSourceImpl};

#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(platform)
    }
}

impl Platform for PlatformFacade {
    type TimeSource = TimeSourceFacade;

    fn new_time_source(&self) -> TimeSourceFacade {
        match self {
            Self::Real(p) => TimeSourceFacade::Real(p.new_time_source()),
            #[cfg(test)]
            Self::Fake(p) => TimeSourceFacade::Fake(p.new_time_source()),
        }
    }
}

#[derive(Debug)]
pub(crate) enum TimeSourceFacade {
    Real(TimeSourceImpl),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl TimeSource for TimeSourceFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(ts) => ts.now(),
            #[cfg(test)]
            Self::Fake(ts) => ts.now(),
        }
    }
}
