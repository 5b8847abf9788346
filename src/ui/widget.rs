use crate::{
    core::{
        geo::{LatLng, PixelPos, Point},
        projection::Equirectangular,
        viewport::Viewport,
    },
    layers::{image::MapImage, marker::Marker},
    ui::controls::{ZoomAction, ZoomControls},
    Result,
};
use egui::{Align2, Color32, Event, FontId, Pos2, Rect, Response, Sense, TextureHandle, Ui, Vec2};

/// Scrollable, zoomable view of an equirectangular map image
///
/// The view is centered on its target the first time it is shown; after that
/// the user scrolls and drags freely, and the zoom controls keep whatever is
/// at the viewport center in place.
///
/// # Examples
///
/// ```rust,ignore
/// let image = MapImage::load("world.png")?;
/// let mut view = MapView::new(&cc.egui_ctx, &image, LatLng::new(10.7769, 106.7009), 2.0);
///
/// // every frame
/// ui.map_view(&mut view);
/// ```
pub struct MapView {
    id: egui::Id,
    texture: TextureHandle,
    projection: Equirectangular,
    viewport: Viewport,
    home: LatLng,
    home_scale: f64,
    markers: Vec<Marker>,
    pub show_markers: bool,
    pub controls: ZoomControls,
    /// Target to center on at the next frame; needs the viewport size
    pending_center: Option<LatLng>,
    /// Offset to push into the scroll area at the next frame
    pending_offset: Option<Point>,
    hovered: Option<LatLng>,
}

impl MapView {
    /// Uploads `image` as a texture and prepares a view centered on `target`
    /// at `scale` screen pixels per image pixel.
    ///
    /// `scale` is used as given, even outside the default zoom limits.
    pub fn new(ctx: &egui::Context, image: &MapImage, target: LatLng, scale: f64) -> Self {
        let texture = ctx.load_texture(
            "equimap_image",
            image.to_color_image(),
            egui::TextureOptions::LINEAR,
        );
        let viewport = Viewport::new(Point::default(), scale);

        Self {
            id: egui::Id::new("equimap_view"),
            texture,
            projection: image.projection(),
            home_scale: viewport.scale,
            viewport,
            home: target,
            markers: Vec::new(),
            show_markers: true,
            controls: ZoomControls::default(),
            pending_center: Some(target),
            pending_offset: None,
            hovered: None,
        }
    }

    /// Set a unique ID when several views share a `Ui`
    pub fn id(mut self, id: impl std::hash::Hash) -> Self {
        self.id = egui::Id::new(id);
        self
    }

    pub fn with_markers(mut self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.markers.extend(markers);
        self
    }

    /// Sets zoom limits; the current and startup zoom are clamped into them.
    /// Invalid limits are rejected and leave the view unchanged.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) -> Result<()> {
        self.viewport.set_zoom_limits(min_scale, max_scale)?;
        self.home_scale = self.home_scale.clamp(min_scale, max_scale);
        Ok(())
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Centers on `target` at the next frame, keeping the current zoom
    pub fn center_on(&mut self, target: LatLng) {
        self.pending_center = Some(target);
    }

    /// Back to the startup target and zoom
    pub fn reset(&mut self) {
        self.viewport.zoom_to(self.home_scale);
        self.center_on(self.home);
    }

    pub fn zoom_in(&mut self) {
        if self.viewport.zoom_in() {
            self.pending_offset = Some(self.viewport.offset);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.viewport.zoom_out() {
            self.pending_offset = Some(self.viewport.offset);
        }
    }

    /// Coordinate under the center of the viewport
    pub fn visible_center(&self) -> LatLng {
        self.projection.unproject(&self.viewport.visible_center())
    }

    /// Coordinate under the pointer during the last frame, if it was over
    /// the image
    pub fn hovered(&self) -> Option<LatLng> {
        self.hovered
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let available = ui.available_size();
        self.viewport
            .set_size(Point::new(available.x as f64, available.y as f64));
        let content = self.viewport.content_size(self.projection.size);

        if let Some(target) = self.pending_center.take() {
            log::debug!("centering view on ({target}) at {}x", self.viewport.scale);
            self.viewport.offset =
                self.projection
                    .center_offset_for(&target, self.viewport.scale, self.viewport.size);
            self.pending_offset = Some(self.viewport.offset);
        }

        let mut area = egui::ScrollArea::both()
            .id_source(self.id)
            .auto_shrink([false, false]);
        if let Some(offset) = self.pending_offset.take() {
            self.viewport.offset = offset;
            self.viewport.clamp_offset(content);
            area = area.scroll_offset(to_vec2(self.viewport.offset));
        }

        let output = area.show(ui, |ui| {
            let (rect, response) = ui.allocate_exact_size(to_vec2(content), Sense::hover());
            let painter = ui.painter_at(rect);
            painter.image(
                self.texture.id(),
                rect,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
            if self.show_markers {
                self.paint_markers(&painter, rect);
            }
            (rect, response)
        });

        let (content_rect, response) = output.inner;
        self.viewport.offset = Point::new(
            output.state.offset.x as f64,
            output.state.offset.y as f64,
        );

        let over_map = ui.rect_contains_pointer(output.inner_rect);
        self.hovered = if over_map {
            ui.input(|i| i.pointer.hover_pos())
                .and_then(|pos| self.screen_to_lat_lng(content_rect, pos))
        } else {
            None
        };

        let mut action = self
            .controls
            .show(ui, self.id.with("zoom_controls"), output.inner_rect);
        if action.is_none() && over_map && !ui.ctx().wants_keyboard_input() {
            action = ui.input(|i| {
                i.events.iter().find_map(|event| match event {
                    Event::Key {
                        key, pressed: true, ..
                    } => ZoomAction::for_key(*key),
                    _ => None,
                })
            });
        }

        if let Some(action) = action {
            log::debug!("zoom action {action:?}");
            match action {
                ZoomAction::In => self.zoom_in(),
                ZoomAction::Out => self.zoom_out(),
                ZoomAction::Reset => self.reset(),
            }
            ui.ctx().request_repaint();
        }

        response
    }

    fn paint_markers(&self, painter: &egui::Painter, rect: Rect) {
        let scale = self.viewport.scale as f32;
        let radius = (3.0 * scale).clamp(3.0, 8.0);

        for marker in &self.markers {
            let Some(pixel) = marker.pixel_on(self.projection.size) else {
                continue;
            };
            let [r, g, b, a] = marker.color;
            let center = rect.min
                + Vec2::new(pixel.x as f32 + 0.5, pixel.y as f32 + 0.5) * scale;

            painter.circle_filled(center, radius, Color32::from_rgba_unmultiplied(r, g, b, a));
            if let Some(label) = &marker.label {
                painter.text(
                    center + Vec2::new(radius + 3.0, 0.0),
                    Align2::LEFT_CENTER,
                    label,
                    FontId::proportional(13.0),
                    Color32::WHITE,
                );
            }
        }
    }

    /// Coordinate under screen position `pos`, or `None` off the image
    fn screen_to_lat_lng(&self, content_rect: Rect, pos: Pos2) -> Option<LatLng> {
        let local = pos - content_rect.min;
        let image_point = Point::new(local.x as f64, local.y as f64)
            .multiply(1.0 / self.viewport.scale);
        let pixel = PixelPos::new(image_point.x.floor() as i32, image_point.y.floor() as i32);
        if !self.projection.size.contains(pixel) {
            return None;
        }
        Some(self.projection.unproject(&image_point))
    }
}

fn to_vec2(point: Point) -> Vec2 {
    Vec2::new(point.x as f32, point.y as f32)
}

/// Extension trait for adding a [`MapView`] to a `Ui`
pub trait MapViewExt {
    fn map_view(&mut self, view: &mut MapView) -> Response;
}

impl MapViewExt for Ui {
    fn map_view(&mut self, view: &mut MapView) -> Response {
        view.show(self)
    }
}
