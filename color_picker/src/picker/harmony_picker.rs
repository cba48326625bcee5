// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter},
          sync::Arc};

use smallvec::SmallVec;

use crate::{BoundsSize, ColorWheelRaster, ColorWheelRasterCache, CommonResult,
            HarmonyMode, HsvColor, OnColorChanged, PickerConfig, Point, PointerEvent,
            hsv::sizing::{MAX_HARMONY_COLORS, VecHarmonyColors},
            mapping::disc_area};

/// Indicator positions for one frame, in the wheel's pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPositions {
    /// The selected color.
    pub selected: Point,
    /// One per harmony color, in the same order as [`HarmonyColorPicker::harmony_colors`].
    pub harmonies: SmallVec<[Point; MAX_HARMONY_COLORS]>,
}

/// A color wheel (hue and saturation) with a separate brightness control, and a set of
/// harmony colors derived from the selection.
///
/// The wheel is a [`ColorWheelRaster`] built at full brightness and shared through a
/// [`ColorWheelRasterCache`]. Picking a color from the wheel keeps the current value, so
/// moving around the wheel never changes the brightness. Renderers darken the wheel by
/// multiply blending [`Self::brightness_overlay_color`] on top of it.
pub struct HarmonyColorPicker {
    color: HsvColor,
    harmony_mode: HarmonyMode,
    raster_cache: Arc<ColorWheelRasterCache>,
    is_dragging: bool,
    on_color_changed: OnColorChanged,
}

impl Debug for HarmonyColorPicker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HarmonyColorPicker")
            .field("color", &self.color)
            .field("harmony_mode", &self.harmony_mode)
            .field("diameter", &self.diameter())
            .field("is_dragging", &self.is_dragging)
            .finish_non_exhaustive()
    }
}

impl HarmonyColorPicker {
    /// The wheel is empty until the first call to [`Self::on_layout`].
    pub fn new(
        initial_color: HsvColor,
        harmony_mode: HarmonyMode,
        on_color_changed: impl FnMut(HsvColor) + Send + 'static,
    ) -> Self {
        Self {
            color: initial_color,
            harmony_mode,
            raster_cache: Arc::new(ColorWheelRasterCache::new()),
            is_dragging: false,
            on_color_changed: Box::new(on_color_changed),
        }
    }

    /// Builds the wheel right away if the config has a non zero `wheel_diameter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config's `initial_color` is not a valid hex color.
    pub fn try_from_config(
        config: &PickerConfig,
        on_color_changed: impl FnMut(HsvColor) + Send + 'static,
    ) -> CommonResult<Self> {
        let it = Self::new(
            config.initial_hsv_color()?,
            config.harmony_mode,
            on_color_changed,
        );
        if config.wheel_diameter > 0 {
            it.on_layout(config.wheel_diameter);
        }
        Ok(it)
    }

    #[must_use]
    pub fn color(&self) -> HsvColor { self.color }

    #[must_use]
    pub fn harmony_mode(&self) -> HarmonyMode { self.harmony_mode }

    pub fn set_harmony_mode(&mut self, harmony_mode: HarmonyMode) {
        self.harmony_mode = harmony_mode;
    }

    /// `true` between a [`PointerEvent::DragStart`] and the matching
    /// [`PointerEvent::DragEnd`]. Renderers use it to enlarge the selection indicator.
    #[must_use]
    pub fn is_dragging(&self) -> bool { self.is_dragging }

    #[must_use]
    pub fn diameter(&self) -> usize { self.raster_cache.diameter() }

    /// Snapshot of the wheel, to be drawn by the renderer.
    #[must_use]
    pub fn raster(&self) -> Arc<ColorWheelRaster> { self.raster_cache.current() }

    /// The cache itself, to share with a render thread.
    #[must_use]
    pub fn raster_cache(&self) -> Arc<ColorWheelRasterCache> {
        Arc::clone(&self.raster_cache)
    }

    /// Call when the wheel's square is (re)measured. Rebuilds the wheel only if the
    /// diameter changed. Returns `true` if it was rebuilt.
    pub fn on_layout(&self, diameter: usize) -> bool {
        self.raster_cache.ensure_diameter(diameter)
    }

    /// Pointer input on the wheel, in the wheel's pixel coordinates. The picked hue and
    /// saturation are exact for the pointer position, not rounded to the raster's pixels.
    ///
    /// Returns the new color if the event picked one. A position outside the wheel (or
    /// without a finite position) keeps the current color, and the callback is not
    /// invoked.
    pub fn handle_wheel_pointer(&mut self, event: PointerEvent) -> Option<HsvColor> {
        match event {
            PointerEvent::DragEnd => {
                self.is_dragging = false;
                return None;
            }
            PointerEvent::DragStart(_) => self.is_dragging = true,
            PointerEvent::Tap(_) | PointerEvent::DragMove(_) => {}
        }

        let position = event.valid_position()?;
        let raster = self.raster_cache.current();
        // The raster decides what is on the wheel, the disc mapping gives the exact color.
        raster.lookup(position)?;
        let bounds = BoundsSize::new_square(raster.diameter());
        let picked = disc_area::color_from_point(position, bounds, self.color.value())?;
        Some(self.update_color(picked))
    }

    /// Set by the brightness slider.
    pub fn on_brightness_changed(&mut self, value: f32) -> HsvColor {
        self.update_color(self.color.with_value(value))
    }

    /// Harmony colors of the current selection, for the current [`HarmonyMode`].
    #[must_use]
    pub fn harmony_colors(&self) -> VecHarmonyColors {
        self.color.harmony_colors(self.harmony_mode)
    }

    /// Where to draw the selection indicator and the harmony indicators.
    #[must_use]
    pub fn indicator_positions(&self) -> IndicatorPositions {
        let bounds = BoundsSize::new_square(self.diameter());
        IndicatorPositions {
            selected: disc_area::point_from_color(self.color, bounds),
            harmonies: self
                .harmony_colors()
                .into_iter()
                .map(|it| disc_area::point_from_color(it, bounds))
                .collect(),
        }
    }

    /// Gray at the current value, to multiply blend over the full brightness wheel.
    #[must_use]
    pub fn brightness_overlay_color(&self) -> HsvColor {
        self.color.with_hue(0.0).with_saturation(0.0)
    }

    fn update_color(&mut self, new_color: HsvColor) -> HsvColor {
        self.color = new_color;
        tracing::debug!(message = "HarmonyColorPicker color changed", color = %new_color);
        (self.on_color_changed)(new_color);
        new_color
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{assert_approx_eq, assert_eq2, assert_hue_approx_eq};

    fn picker_with_log(
        initial_color: HsvColor,
        mode: HarmonyMode,
    ) -> (HarmonyColorPicker, Arc<Mutex<Vec<HsvColor>>>) {
        let log = Arc::new(Mutex::new(vec![]));
        let log_clone = Arc::clone(&log);
        let picker = HarmonyColorPicker::new(initial_color, mode, move |it| {
            log_clone.lock().unwrap().push(it);
        });
        (picker, log)
    }

    #[test]
    fn test_on_layout_rebuilds_only_on_change() {
        let (picker, _) = picker_with_log(HsvColor::default(), HarmonyMode::Complementary);
        assert_eq2!(picker.diameter(), 0);
        assert!(picker.on_layout(100));
        let raster = picker.raster();
        assert!(!picker.on_layout(100));
        assert!(Arc::ptr_eq(&raster, &picker.raster()));
        assert!(picker.on_layout(50));
        assert_eq2!(picker.diameter(), 50);
    }

    #[test]
    fn test_pick_keeps_value() {
        let (mut picker, log) =
            picker_with_log(HsvColor::new_opaque(200.0, 0.1, 0.4), HarmonyMode::Triadic);
        picker.on_layout(100);

        let color = picker
            .handle_wheel_pointer(PointerEvent::Tap(Point::new(99.0, 50.0)))
            .unwrap();

        assert_hue_approx_eq!(color.hue(), 0.0, 1.0);
        assert_approx_eq!(color.saturation(), 0.98, 0.01);
        assert_approx_eq!(color.value(), 0.4);
        assert_eq2!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_pick_matches_disc_mapping_near_center() {
        let (mut picker, _) =
            picker_with_log(HsvColor::new_opaque(0.0, 0.0, 0.6), HarmonyMode::Triadic);
        picker.on_layout(400);
        let bounds = BoundsSize::new_square(400);

        for position in [
            Point::new(201.0, 203.0),
            Point::new(199.5, 202.25),
            Point::new(320.0, 90.0),
        ] {
            let picked = picker
                .handle_wheel_pointer(PointerEvent::Tap(position))
                .unwrap();
            let expected = disc_area::color_from_point(position, bounds, 0.6).unwrap();
            assert_eq2!(picked, expected);
            let selected = picker.indicator_positions().selected;
            assert_approx_eq!(selected.x, position.x, 0.01);
            assert_approx_eq!(selected.y, position.y, 0.01);
        }
    }

    #[test]
    fn test_outside_wheel_keeps_prior_color() {
        let initial = HsvColor::new_opaque(42.0, 0.5, 0.5);
        let (mut picker, log) = picker_with_log(initial, HarmonyMode::Triadic);
        picker.on_layout(100);

        assert_eq2!(
            picker.handle_wheel_pointer(PointerEvent::DragMove(Point::new(1.0, 1.0))),
            None
        );
        assert_eq2!(
            picker.handle_wheel_pointer(PointerEvent::Tap(Point::new(500.0, 50.0))),
            None
        );
        assert_eq2!(picker.color(), initial);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_empty_wheel_picks_nothing() {
        let (mut picker, _) = picker_with_log(HsvColor::default(), HarmonyMode::Triadic);
        assert_eq2!(
            picker.handle_wheel_pointer(PointerEvent::Tap(Point::new(0.0, 0.0))),
            None
        );
    }

    #[test]
    fn test_drag_tracking() {
        let (mut picker, _) = picker_with_log(HsvColor::default(), HarmonyMode::Analogous);
        picker.on_layout(64);
        assert!(!picker.is_dragging());

        // Starting a drag outside the wheel still counts as dragging.
        picker.handle_wheel_pointer(PointerEvent::DragStart(Point::new(0.0, 0.0)));
        assert!(picker.is_dragging());

        picker.handle_wheel_pointer(PointerEvent::DragMove(Point::new(32.0, 32.0)));
        assert!(picker.is_dragging());

        assert_eq2!(picker.handle_wheel_pointer(PointerEvent::DragEnd), None);
        assert!(!picker.is_dragging());
    }

    #[test]
    fn test_brightness_and_overlay() {
        let (mut picker, log) =
            picker_with_log(HsvColor::new_opaque(120.0, 1.0, 1.0), HarmonyMode::Complementary);

        let color = picker.on_brightness_changed(0.3);
        assert_eq2!(color.value(), 0.3);
        assert_eq2!(color.hue(), 120.0);
        assert_eq2!(log.lock().unwrap().clone(), vec![color]);

        let overlay = picker.brightness_overlay_color();
        assert_eq2!(
            (overlay.hue(), overlay.saturation(), overlay.value()),
            (0.0, 0.0, 0.3)
        );
    }

    #[test]
    fn test_harmony_colors_follow_mode() {
        let (mut picker, _) =
            picker_with_log(HsvColor::new_opaque(10.0, 1.0, 1.0), HarmonyMode::Tetradic);
        assert_eq2!(picker.harmony_colors().len(), 3);

        picker.set_harmony_mode(HarmonyMode::Complementary);
        let colors = picker.harmony_colors();
        assert_eq2!(colors.len(), 1);
        assert_eq2!(colors[0].hue(), 190.0);
    }

    #[test]
    fn test_indicator_positions() {
        let (picker, _) =
            picker_with_log(HsvColor::new_opaque(0.0, 1.0, 1.0), HarmonyMode::Complementary);
        picker.on_layout(100);

        let positions = picker.indicator_positions();
        assert_approx_eq!(positions.selected.x, 100.0);
        assert_approx_eq!(positions.selected.y, 50.0);
        assert_eq2!(positions.harmonies.len(), 1);
        assert_approx_eq!(positions.harmonies[0].x, 0.0);
        assert_approx_eq!(positions.harmonies[0].y, 50.0);
    }

    #[test]
    fn test_from_config_builds_wheel() {
        let config = PickerConfig {
            harmony_mode: HarmonyMode::SplitComplementary,
            wheel_diameter: 32,
            ..Default::default()
        };
        let picker = HarmonyColorPicker::try_from_config(&config, |_| {}).unwrap();
        assert_eq2!(picker.diameter(), 32);
        assert_eq2!(picker.harmony_mode(), HarmonyMode::SplitComplementary);
        assert_eq2!(picker.color(), HsvColor::default());
    }

    #[test]
    fn test_on_layout_with_huge_diameter_is_clamped() {
        let (picker, _) = picker_with_log(HsvColor::default(), HarmonyMode::Triadic);
        assert!(picker.on_layout(usize::MAX));
        assert_eq2!(picker.diameter(), crate::MAX_WHEEL_DIAMETER);
    }
}
