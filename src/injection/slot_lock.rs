#[cfg(feature = "std")]
use std::sync::OnceLock as OnceImpl;

#[cfg(not(feature = "std"))]
use spin::Once as OnceImpl;

/// A cell that can be written exactly once and read any number of times.
#[repr(transparent)]
pub(crate) struct SlotLock<T: 'static + Send + Sync>(OnceImpl<T>);

impl<T: 'static + Send + Sync> SlotLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(OnceImpl::new())
    }

    /// Stores `value` if the slot is empty, otherwise hands it back.
    #[inline]
    pub(crate) fn set(&self, value: T) -> Result<(), T> {
        #[cfg(feature = "std")]
        let result = self.0.set(value);

        #[cfg(not(feature = "std"))]
        let result = {
            let mut pending = Some(value);
            let _ = self.0.try_call_once(|| pending.take().ok_or(()));
            match pending {
                None => Ok(()),
                Some(value) => Err(value),
            }
        };

        result
    }

    #[inline]
    pub(crate) fn get(&self) -> Option<&T> {
        self.0.get()
    }
}
