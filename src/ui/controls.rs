use egui::{Align2, FontId, Id, Key, Order, Pos2, Rect, Sense, Ui, Vec2};

/// Corner of the map view the controls are anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    /// Top-left corner of a `size` box placed in `container`
    pub fn anchor(&self, container: Rect, size: Vec2, margin: f32) -> Pos2 {
        match self {
            Position::TopLeft => container.min + Vec2::splat(margin),
            Position::TopRight => {
                Pos2::new(container.max.x - margin - size.x, container.min.y + margin)
            }
            Position::BottomLeft => {
                Pos2::new(container.min.x + margin, container.max.y - margin - size.y)
            }
            Position::BottomRight => container.max - Vec2::splat(margin) - size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    In,
    Out,
    /// Back to the startup target and zoom
    Reset,
}

impl ZoomAction {
    /// Keyboard shortcut: `+`/`=` zooms in, `-` zooms out, `0` resets
    pub fn for_key(key: Key) -> Option<Self> {
        match key {
            Key::Plus | Key::Equals => Some(ZoomAction::In),
            Key::Minus => Some(ZoomAction::Out),
            Key::Num0 => Some(ZoomAction::Reset),
            _ => None,
        }
    }
}

/// Column of zoom buttons drawn over the map
#[derive(Debug, Clone)]
pub struct ZoomControls {
    pub visible: bool,
    pub position: Position,
    pub button_size: f32,
    pub margin: f32,
    pub spacing: f32,
}

impl Default for ZoomControls {
    fn default() -> Self {
        Self {
            visible: true,
            position: Position::TopRight,
            button_size: 28.0,
            margin: 10.0,
            spacing: 4.0,
        }
    }
}

impl ZoomControls {
    const BUTTONS: [(ZoomAction, &'static str); 3] = [
        (ZoomAction::In, "+"),
        (ZoomAction::Out, "−"),
        (ZoomAction::Reset, "⟲"),
    ];

    /// Full extent of the button column
    pub fn size(&self) -> Vec2 {
        let count = Self::BUTTONS.len() as f32;
        Vec2::new(
            self.button_size,
            count * self.button_size + (count - 1.0) * self.spacing,
        )
    }

    /// Rect of each button inside `container`
    pub fn button_rects(&self, container: Rect) -> Vec<(ZoomAction, Rect)> {
        let origin = self.position.anchor(container, self.size(), self.margin);
        Self::BUTTONS
            .iter()
            .enumerate()
            .map(|(i, (action, _))| {
                let top = origin.y + i as f32 * (self.button_size + self.spacing);
                let rect = Rect::from_min_size(
                    Pos2::new(origin.x, top),
                    Vec2::splat(self.button_size),
                );
                (*action, rect)
            })
            .collect()
    }

    /// Draws the buttons over `container` and returns the one clicked, if any.
    ///
    /// The buttons live in their own foreground layer, above the map's
    /// scroll area.
    pub fn show(&self, ui: &Ui, id: Id, container: Rect) -> Option<ZoomAction> {
        if !self.visible {
            return None;
        }

        let origin = self.position.anchor(container, self.size(), self.margin);
        egui::Area::new(id)
            .fixed_pos(origin)
            .order(Order::Foreground)
            .show(ui.ctx(), |ui| self.buttons(ui, container))
            .inner
    }

    fn buttons(&self, ui: &mut Ui, container: Rect) -> Option<ZoomAction> {
        let mut clicked = None;
        let buttons = self.button_rects(container).into_iter().zip(Self::BUTTONS);
        for ((action, rect), (_, label)) in buttons {
            let response = ui.allocate_rect(rect, Sense::click());
            let visuals = ui.style().interact(&response);

            ui.painter().rect_filled(rect, visuals.rounding, visuals.bg_fill);
            ui.painter().rect_stroke(rect, visuals.rounding, visuals.bg_stroke);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(18.0),
                visuals.text_color(),
            );

            if response.clicked() {
                clicked = Some(action);
            }
        }

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_right_layout() {
        let controls = ZoomControls::default();
        let container = Rect::from_min_size(Pos2::ZERO, Vec2::new(1000.0, 800.0));
        let rects = controls.button_rects(container);

        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].0, ZoomAction::In);
        assert_eq!(rects[0].1.min, Pos2::new(1000.0 - 10.0 - 28.0, 10.0));
        assert_eq!(rects[1].1.min.y, 10.0 + 28.0 + 4.0);
        assert!(rects.iter().all(|(_, r)| container.contains_rect(*r)));
    }

    #[test]
    fn test_key_shortcuts() {
        assert_eq!(ZoomAction::for_key(Key::Plus), Some(ZoomAction::In));
        assert_eq!(ZoomAction::for_key(Key::Equals), Some(ZoomAction::In));
        assert_eq!(ZoomAction::for_key(Key::Minus), Some(ZoomAction::Out));
        assert_eq!(ZoomAction::for_key(Key::Num0), Some(ZoomAction::Reset));
        assert_eq!(ZoomAction::for_key(Key::A), None);
    }

    #[test]
    fn test_bottom_left_anchor() {
        let container = Rect::from_min_size(Pos2::new(5.0, 5.0), Vec2::new(200.0, 100.0));
        let anchor = Position::BottomLeft.anchor(container, Vec2::new(20.0, 30.0), 10.0);
        assert_eq!(anchor, Pos2::new(15.0, 65.0));
    }
}
