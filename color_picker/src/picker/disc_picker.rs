// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{BoundsSize, CommonResult, HsvColor, PickerConfig, Point, PointerEvent,
            mapping::{hue_ring, saturation_value_box}};

/// Invoked with the new color every time a picker accepts an update.
pub type OnColorChanged = Box<dyn FnMut(HsvColor) + Send>;

/// A hue ring with a square saturation / value area inside of it.
///
/// - Pointer events on the ring replace the hue only.
/// - Pointer events on the area replace saturation and value only.
/// - Alpha is left alone by both, it is set with [`Self::on_alpha_changed`].
///
/// Each accepted event updates the color and invokes `on_color_changed`. Events without a
/// finite position (including [`PointerEvent::DragEnd`]) are ignored.
pub struct DiscColorPicker {
    color: HsvColor,
    show_alpha_bar: bool,
    on_color_changed: OnColorChanged,
}

impl Debug for DiscColorPicker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscColorPicker")
            .field("color", &self.color)
            .field("show_alpha_bar", &self.show_alpha_bar)
            .finish_non_exhaustive()
    }
}

impl DiscColorPicker {
    pub fn new(
        initial_color: HsvColor,
        on_color_changed: impl FnMut(HsvColor) + Send + 'static,
    ) -> Self {
        Self {
            color: initial_color,
            show_alpha_bar: true,
            on_color_changed: Box::new(on_color_changed),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the config's `initial_color` is not a valid hex color.
    pub fn try_from_config(
        config: &PickerConfig,
        on_color_changed: impl FnMut(HsvColor) + Send + 'static,
    ) -> CommonResult<Self> {
        let mut it = Self::new(config.initial_hsv_color()?, on_color_changed);
        it.show_alpha_bar = config.show_alpha_bar;
        Ok(it)
    }

    #[must_use]
    pub fn color(&self) -> HsvColor { self.color }

    #[must_use]
    pub fn shows_alpha_bar(&self) -> bool { self.show_alpha_bar }

    /// Pointer input on the hue ring, in the ring's own pixel coordinates. Returns the new
    /// color if the event was accepted.
    pub fn handle_hue_ring_pointer(
        &mut self,
        event: PointerEvent,
        ring_bounds: BoundsSize,
    ) -> Option<HsvColor> {
        let position = event.valid_position()?;
        let hue = hue_ring::hue_from_point(position, ring_bounds);
        Some(self.update_color(self.color.with_hue(hue)))
    }

    /// Pointer input on the saturation / value area, in the area's own pixel coordinates.
    /// Returns the new color if the event was accepted.
    pub fn handle_saturation_value_pointer(
        &mut self,
        event: PointerEvent,
        area_bounds: BoundsSize,
    ) -> Option<HsvColor> {
        let position = event.valid_position()?;
        let (saturation, value) =
            saturation_value_box::saturation_value_from_point(position, area_bounds);
        Some(self.update_color(self.color.with_saturation_and_value(saturation, value)))
    }

    /// Set by an alpha bar, if the UI shows one.
    pub fn on_alpha_changed(&mut self, alpha: f32) -> HsvColor {
        self.update_color(self.color.with_alpha(alpha))
    }

    /// Where to draw the selection indicator on the hue ring.
    #[must_use]
    pub fn hue_indicator_position(&self, ring_bounds: BoundsSize) -> Point {
        hue_ring::point_from_hue(self.color.hue(), ring_bounds)
    }

    /// Where to draw the selection indicator on the saturation / value area.
    #[must_use]
    pub fn saturation_value_indicator_position(&self, area_bounds: BoundsSize) -> Point {
        saturation_value_box::point_from_saturation_value(
            self.color.saturation(),
            self.color.value(),
            area_bounds,
        )
    }

    fn update_color(&mut self, new_color: HsvColor) -> HsvColor {
        self.color = new_color;
        tracing::debug!(message = "DiscColorPicker color changed", color = %new_color);
        (self.on_color_changed)(new_color);
        new_color
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{assert_approx_eq, assert_eq2, assert_hue_approx_eq};

    const RING: BoundsSize = BoundsSize::new(200.0, 200.0);
    const AREA: BoundsSize = BoundsSize::new(100.0, 100.0);

    fn picker_with_log() -> (DiscColorPicker, Arc<Mutex<Vec<HsvColor>>>) {
        let log = Arc::new(Mutex::new(vec![]));
        let log_clone = Arc::clone(&log);
        let picker = DiscColorPicker::new(HsvColor::new(0.0, 0.5, 0.5, 0.75), move |it| {
            log_clone.lock().unwrap().push(it);
        });
        (picker, log)
    }

    #[test]
    fn test_ring_changes_hue_only() {
        let (mut picker, log) = picker_with_log();

        let color = picker
            .handle_hue_ring_pointer(PointerEvent::Tap(Point::new(100.0, 0.0)), RING)
            .unwrap();

        assert_hue_approx_eq!(color.hue(), 90.0);
        assert_eq2!((color.saturation(), color.value(), color.alpha()), (0.5, 0.5, 0.75));
        assert_eq2!(picker.color(), color);
        assert_eq2!(log.lock().unwrap().clone(), vec![color]);
    }

    #[test]
    fn test_area_changes_saturation_and_value_only() {
        let (mut picker, log) = picker_with_log();
        picker.handle_hue_ring_pointer(PointerEvent::Tap(Point::new(0.0, 100.0)), RING);

        let color = picker
            .handle_saturation_value_pointer(
                PointerEvent::DragMove(Point::new(25.0, 10.0)),
                AREA,
            )
            .unwrap();

        assert_hue_approx_eq!(color.hue(), 180.0);
        assert_approx_eq!(color.saturation(), 0.25);
        assert_approx_eq!(color.value(), 0.9);
        assert_eq2!(color.alpha(), 0.75);
        assert_eq2!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_and_drag_end_events_are_ignored() {
        let (mut picker, log) = picker_with_log();
        let before = picker.color();

        assert_eq2!(
            picker.handle_hue_ring_pointer(
                PointerEvent::DragMove(Point::new(f32::NAN, 1.0)),
                RING
            ),
            None
        );
        assert_eq2!(
            picker.handle_saturation_value_pointer(PointerEvent::DragEnd, AREA),
            None
        );

        assert_eq2!(picker.color(), before);
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_indicator_positions() {
        let (mut picker, _log) = picker_with_log();
        let pointer = Point::new(150.0, 20.0);
        picker.handle_hue_ring_pointer(PointerEvent::DragStart(pointer), RING);

        // Indicator sits on the ring, in the direction of the pointer.
        let indicator = picker.hue_indicator_position(RING);
        let offset = indicator - RING.center();
        let pointer_offset = pointer - RING.center();
        assert_approx_eq!(offset.magnitude(), RING.radius(), 0.01);
        let scale = RING.radius() / pointer_offset.magnitude();
        assert_approx_eq!(offset.x, pointer_offset.x * scale, 0.01);

        assert_eq2!(
            picker.saturation_value_indicator_position(AREA),
            Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn test_from_config_and_alpha() {
        let config = PickerConfig {
            initial_color: "#0000FF".to_string(),
            show_alpha_bar: false,
            ..Default::default()
        };
        let mut picker = DiscColorPicker::try_from_config(&config, |_| {}).unwrap();
        assert!(!picker.shows_alpha_bar());
        assert_approx_eq!(picker.color().hue(), 240.0);

        let color = picker.on_alpha_changed(0.25);
        assert_eq2!(color.alpha(), 0.25);
        assert_approx_eq!(color.hue(), 240.0);
    }

    #[test]
    fn test_from_config_with_bad_color() {
        let config = PickerConfig {
            initial_color: "#12".to_string(),
            ..Default::default()
        };
        assert!(DiscColorPicker::try_from_config(&config, |_| {}).is_err());
    }
}
