use serde::{Deserialize, Serialize};

use mindweave_core::geometry::{BBox, Point};

use crate::error::ViewportError;

/// Zoom limits, step factors, and the initial viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Factor applied by the zoom buttons.
    pub zoom_step: f64,
    /// Factor applied per wheel notch scrolling down.
    pub wheel_zoom_out: f64,
    /// Factor applied per wheel notch scrolling up.
    pub wheel_zoom_in: f64,
    pub initial_width: f64,
    pub initial_height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.3,
            max_zoom: 3.0,
            zoom_step: 1.2,
            wheel_zoom_out: 0.9,
            wheel_zoom_in: 1.1,
            initial_width: 800.0,
            initial_height: 500.0,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), ViewportError> {
        let positive = [
            ("minZoom", self.min_zoom),
            ("maxZoom", self.max_zoom),
            ("zoomStep", self.zoom_step),
            ("wheelZoomOut", self.wheel_zoom_out),
            ("wheelZoomIn", self.wheel_zoom_in),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewportError::InvalidConfig {
                    field,
                    value,
                    requirement: "positive",
                });
            }
        }
        let sizes = [
            ("initialWidth", self.initial_width),
            ("initialHeight", self.initial_height),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(ViewportError::InvalidConfig {
                    field,
                    value,
                    requirement: "non-negative",
                });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ViewportError::EmptyZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ViewportError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Interaction state of the mind-map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub zoom: f64,
    /// Offset in screen pixels.
    pub pan: Point,
    pub dragging: bool,
    /// Pointer position at drag start minus the pan at that moment.
    pub drag_anchor: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ORIGIN,
            dragging: false,
            drag_anchor: Point::ORIGIN,
        }
    }
}

/// Maps content space onto the screen.
///
/// Equivalent to `translate(origin) scale(scale) translate(-content_center)`:
/// the content center lands on the viewport center shifted by the pan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenTransform {
    /// Viewport center plus pan, in screen pixels.
    pub origin: Point,
    pub scale: f64,
    /// Center of the margin-padded content bounding box.
    pub content_center: Point,
}

impl ScreenTransform {
    pub fn content_to_screen(&self, p: &Point) -> Point {
        Point::new(
            self.origin.x + (p.x - self.content_center.x) * self.scale,
            self.origin.y + (p.y - self.content_center.y) * self.scale,
        )
    }

    pub fn screen_to_content(&self, p: &Point) -> Point {
        Point::new(
            (p.x - self.origin.x) / self.scale + self.content_center.x,
            (p.y - self.origin.y) / self.scale + self.content_center.y,
        )
    }

    /// SVG `transform` attribute for the content group.
    pub fn to_svg(&self) -> String {
        // `0.0 - x` so a zero center prints as 0, not -0.
        format!(
            "translate({},{}) scale({}) translate({},{})",
            self.origin.x,
            self.origin.y,
            self.scale,
            0.0 - self.content_center.x,
            0.0 - self.content_center.y
        )
    }
}

/// Owns the viewport state and applies pointer, wheel, and resize events to it.
///
/// Every transition is total: zoom requests outside the configured bounds are
/// clamped, drag moves outside a drag are ignored.
#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
    config: ViewportConfig,
    width: f64,
    height: f64,
}

impl ViewportController {
    pub fn new() -> Self {
        Self::with_config(ViewportConfig::default())
    }

    /// `config` must pass [`ViewportConfig::validate`]; a zero step or an
    /// empty zoom range makes zoom transitions meaningless.
    pub fn with_config(config: ViewportConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "invalid viewport config: {:?}",
            config.validate()
        );
        Self {
            state: ViewportState::default(),
            config,
            width: config.initial_width.max(0.0),
            height: config.initial_height.max(0.0),
        }
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    pub fn pan(&self) -> Point {
        self.state.pan
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Viewport box size in screen pixels.
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Zoom as a whole percentage for display.
    pub fn zoom_percent(&self) -> u32 {
        (self.state.zoom * 100.0).round() as u32
    }

    // ── Zoom ─────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.scale_zoom(self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.scale_zoom(1.0 / self.config.zoom_step);
    }

    /// Apply a wheel event. Positive `delta_y` (scrolling down) zooms out.
    ///
    /// Zoom stays anchored at the viewport center; the point under the
    /// pointer is not held fixed.
    pub fn wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.scale_zoom(self.config.wheel_zoom_out);
        } else if delta_y < 0.0 {
            self.scale_zoom(self.config.wheel_zoom_in);
        }
    }

    fn scale_zoom(&mut self, factor: f64) {
        let zoom = (self.state.zoom * factor)
            .max(self.config.min_zoom)
            .min(self.config.max_zoom);
        if zoom.is_finite() {
            self.state.zoom = zoom;
        }
        log::trace!("Zoom -> {}", self.state.zoom);
    }

    // ── Drag ─────────────────────────────────────────────────────────

    pub fn drag_start(&mut self, pointer_x: f64, pointer_y: f64) {
        self.state.drag_anchor = Point::new(pointer_x, pointer_y).minus(&self.state.pan);
        self.state.dragging = true;
        log::trace!("Drag start at ({}, {})", pointer_x, pointer_y);
    }

    pub fn drag_move(&mut self, pointer_x: f64, pointer_y: f64) {
        if !self.state.dragging {
            return;
        }
        self.state.pan = Point::new(pointer_x, pointer_y).minus(&self.state.drag_anchor);
    }

    pub fn drag_end(&mut self) {
        if self.state.dragging {
            log::trace!("Drag end, pan = ({}, {})", self.state.pan.x, self.state.pan.y);
        }
        self.state.dragging = false;
    }

    /// The pointer left the viewport; ends any drag in progress.
    pub fn pointer_leave(&mut self) {
        self.drag_end();
    }

    // ── View ─────────────────────────────────────────────────────────

    pub fn reset(&mut self) {
        self.state.zoom = 1.0;
        self.state.pan = Point::ORIGIN;
        log::trace!("Viewport reset");
    }

    /// Record a new viewport box size. Zoom and pan are unchanged.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Screen transform for content with the given (margin-padded) bounds.
    /// Empty content is centered on the content-space origin.
    pub fn transform(&self, content: Option<&BBox>) -> ScreenTransform {
        ScreenTransform {
            origin: Point::new(
                self.width / 2.0 + self.state.pan.x,
                self.height / 2.0 + self.state.pan.y,
            ),
            scale: self.state.zoom,
            content_center: content.map(BBox::center).unwrap_or(Point::ORIGIN),
        }
    }

    /// The part of content space currently inside the viewport box.
    pub fn visible_region(&self, content: Option<&BBox>) -> BBox {
        let transform = self.transform(content);
        BBox::new(
            transform.screen_to_content(&Point::ORIGIN),
            transform.screen_to_content(&Point::new(self.width, self.height)),
        )
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}
