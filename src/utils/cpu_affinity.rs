//! CPU pinning for stable timing.
//!
//! Linux pins through `sched_setaffinity` and restores the saved mask on
//! unpin. Other platforms have no usable affinity API here, so pinning is a
//! logged no-op and measurements simply run unpinned.

use tracing::debug;

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static SAVED_MASK: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: no preconditions; returns -1 on failure.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn pin(core_id: usize) -> bool {
        if core_id >= libc::CPU_SETSIZE as usize {
            return false;
        }

        // SAFETY: cpu_set_t is plain data; zeroed is a valid empty set and
        // the size passed matches the value handed to the kernel.
        unsafe {
            let mut saved: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut saved) != 0 {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            SAVED_MASK.with(|cell| *cell.borrow_mut() = Some(saved));
            true
        }
    }

    pub fn unpin() -> bool {
        SAVED_MASK.with(|cell| match cell.borrow_mut().take() {
            // SAFETY: `set` was filled by sched_getaffinity in `pin`.
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn pin(_core_id: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        true
    }
}

/// Pin the current thread to the core it is running on, falling back to
/// core 0 when the current core is unknown.
///
/// # Returns
/// The pinned core, or `None` if pinning is unsupported or failed.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    if platform::pin(core) {
        Some(core)
    } else {
        debug!(core, "CPU pinning unavailable, measuring unpinned");
        None
    }
}

/// Restore the affinity saved by the last successful pin.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    pub fn new() -> Self {
        Self {
            pinned_core: pin_to_current_core(),
        }
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        let pinned = guard.pinned_core;
        drop(guard);
        if pinned.is_some() {
            // the guard already restored the saved mask
            assert!(!unpin());
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_pin_rejects_core_outside_cpu_set() {
        assert!(!platform::pin(libc::CPU_SETSIZE as usize));
        assert!(!platform::pin(usize::MAX));
    }

    #[test]
    fn test_unpin_without_pin_is_harmless() {
        let _ = unpin();
        let guard = CpuPinGuard::new();
        drop(guard);
    }
}
