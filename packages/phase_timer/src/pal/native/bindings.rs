use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;
use std::time::Instant;

use crate::pal::native::BuildTargetBindings;

/// Bindings for FFI calls into the operating system.
///
/// All PAL FFI calls must go through this trait, enabling them to be mocked.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait Bindings: Debug + Send + Sync + 'static {
    /// Current value of the monotonic tick counter.
    fn read_ticks(&self) -> u64;

    /// Tick rate of the counter. Constant for the lifetime of the process.
    fn ticks_per_second(&self) -> u64;

    // Rust has no clock abstraction of its own, so this is the mockable wrapper around `Instant`.
    fn now(&self) -> Instant;
}

/// Real bindings in production builds, mocked bindings in PAL unit tests.
#[derive(Clone, Debug)]
pub(crate) enum BindingsFacade {
    Real(BuildTargetBindings),

    #[cfg(test)]
    Mock(Arc<MockBindings>),
}

impl BindingsFacade {
    fn target(&self) -> &dyn Bindings {
        match self {
            Self::Real(bindings) => bindings,
            #[cfg(test)]
            Self::Mock(bindings) => bindings.as_ref(),
        }
    }
}

impl Bindings for BindingsFacade {
    fn read_ticks(&self) -> u64 {
        self.target().read_ticks()
    }

    fn ticks_per_second(&self) -> u64 {
        self.target().ticks_per_second()
    }

    fn now(&self) -> Instant {
        self.target().now()
    }
}

#[cfg(test)]
impl From<MockBindings> for BindingsFacade {
    fn from(bindings: MockBindings) -> Self {
        Self::Mock(Arc::new(bindings))
    }
}
