// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, RwLock, RwLockWriteGuard,
                atomic::{AtomicU64, Ordering}};

use super::{ColorWheelRaster, MAX_WHEEL_DIAMETER};

/// Holds the current [`ColorWheelRaster`] behind an [`Arc`], so it can be shared with a
/// render thread while the picker keeps using it for lookups.
///
/// A resize builds the new raster **outside** of the lock and then swaps the [`Arc`] in
/// one short write. Readers get either the old raster or the new one, never a partially
/// written buffer. Readers that still hold the old [`Arc`] keep it alive until they drop
/// it.
///
/// Every resize request takes a ticket before it starts building. A finished build is
/// only swapped in if no later request has been installed already, so when several
/// threads resize at once the most recent request wins.
#[derive(Debug)]
pub struct ColorWheelRasterCache {
    inner: RwLock<InstalledRaster>,
    next_request_id: AtomicU64,
}

#[derive(Debug)]
struct InstalledRaster {
    request_id: u64,
    raster: Arc<ColorWheelRaster>,
}

impl Default for ColorWheelRasterCache {
    fn default() -> Self { Self::new() }
}

impl ColorWheelRasterCache {
    /// Starts out with an empty raster (diameter `0`).
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(InstalledRaster {
                request_id: 0,
                raster: Arc::new(ColorWheelRaster::empty()),
            }),
            next_request_id: AtomicU64::new(1),
        }
    }

    /// Snapshot of the current raster.
    #[must_use]
    pub fn current(&self) -> Arc<ColorWheelRaster> {
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard.raster),
            Err(poisoned) => Arc::clone(&poisoned.into_inner().raster),
        }
    }

    /// Diameter of the current raster.
    #[must_use]
    pub fn diameter(&self) -> usize { self.current().diameter() }

    /// Make sure the cached raster has the given diameter (clamped to
    /// [`MAX_WHEEL_DIAMETER`]), rebuilding it if needed. Returns `true` if a new raster
    /// was swapped in.
    #[tracing::instrument(skip(self))]
    pub fn ensure_diameter(&self, diameter: usize) -> bool {
        let diameter = diameter.min(MAX_WHEEL_DIAMETER);
        let request_id = self.next_request_id.fetch_add(1, Ordering::SeqCst);

        if self.diameter() == diameter {
            // Still claim the slot, so an older in flight build can't replace it.
            let mut guard = self.write_guard();
            if guard.raster.diameter() == diameter {
                guard.request_id = guard.request_id.max(request_id);
                return false;
            }
        }

        let new_raster = Arc::new(ColorWheelRaster::build_at_full_value(diameter));
        let swapped = self.install(request_id, new_raster);

        tracing::debug!(
            message = "Finished color wheel raster request",
            diameter = diameter,
            swapped = swapped
        );
        swapped
    }

    /// Swap in `raster` unless a later request is already installed. Also skips the
    /// swap if the installed raster already has the same diameter.
    fn install(&self, request_id: u64, raster: Arc<ColorWheelRaster>) -> bool {
        let mut guard = self.write_guard();
        if guard.request_id > request_id {
            return false;
        }
        guard.request_id = request_id;
        if guard.raster.diameter() == raster.diameter() {
            return false;
        }
        guard.raster = raster;
        true
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, InstalledRaster> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
