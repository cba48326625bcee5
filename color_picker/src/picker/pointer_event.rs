// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Point;

/// Pointer input reported by the UI layer, in the pixel coordinates of the component
/// that received it. Gesture recognition happens outside of this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Tap(Point),
    DragStart(Point),
    DragMove(Point),
    DragEnd,
}

impl PointerEvent {
    /// The position carried by the event, if any.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Tap(it) | PointerEvent::DragStart(it) | PointerEvent::DragMove(it) => {
                Some(*it)
            }
            PointerEvent::DragEnd => None,
        }
    }

    /// The position carried by the event, if it has one and both coordinates are finite.
    /// Events without a usable position must not change the color.
    #[must_use]
    pub fn valid_position(&self) -> Option<Point> {
        self.position().filter(Point::is_valid)
    }
}
