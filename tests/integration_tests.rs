#![cfg(feature = "egui")]

use equimap::{ui::MapView, LatLng, MapImage, Marker, Point};
use image::{Rgba, RgbaImage};

/// Integration tests driving the map view through headless egui frames
mod integration_tests {
    use super::*;
    use egui::{
        CentralPanel, Context, Event, Frame, Key, Modifiers, PointerButton, Pos2, RawInput, Rect,
        Vec2,
    };

    const SCREEN: Vec2 = Vec2::new(1000.0, 800.0);

    fn test_image(width: u32, height: u32) -> MapImage {
        MapImage::from_rgba(RgbaImage::from_pixel(width, height, Rgba([20, 60, 120, 255])))
            .unwrap()
    }

    fn raw_input() -> RawInput {
        RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, SCREEN)),
            ..Default::default()
        }
    }

    fn run_frame(ctx: &Context, view: &mut MapView) {
        run_frame_with(ctx, view, Vec::new());
    }

    fn run_frame_with(ctx: &Context, view: &mut MapView, events: Vec<Event>) {
        let input = RawInput {
            events,
            ..raw_input()
        };
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().frame(Frame::none()).show(ctx, |ui| {
                view.show(ui);
            });
        });
    }

    fn assert_close(actual: Point, expected: Point, tolerance: f64) {
        assert!(
            (actual.x - expected.x).abs() <= tolerance && (actual.y - expected.y).abs() <= tolerance,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_startup_centers_on_target() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        let target = LatLng::new(10.7769, 106.7009);
        let mut view = MapView::new(&ctx, &image, target, 2.0);

        run_frame(&ctx, &mut view);

        let viewport = view.viewport();
        let expected = image
            .projection()
            .center_offset_for(&target, viewport.scale, viewport.size);
        assert_close(viewport.offset, expected, 1.0);

        let center = view.visible_center();
        assert!((center.lat - target.lat).abs() < 0.5);
        assert!((center.lng - target.lng).abs() < 0.5);
    }

    #[test]
    fn test_centering_is_only_applied_once() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);

        run_frame(&ctx, &mut view);
        let first = view.viewport().offset;
        run_frame(&ctx, &mut view);
        run_frame(&ctx, &mut view);

        assert_close(view.viewport().offset, first, 1.0);
    }

    #[test]
    fn test_target_near_edge_is_clamped() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        // Top-left corner of the world: raw offset is negative on both axes
        let mut view = MapView::new(&ctx, &image, LatLng::new(90.0, -180.0), 2.0);

        run_frame(&ctx, &mut view);

        assert_close(view.viewport().offset, Point::new(0.0, 0.0), 0.5);
    }

    #[test]
    fn test_zoom_keeps_visible_center() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        let target = LatLng::new(-33.8688, 151.2093);
        let mut view = MapView::new(&ctx, &image, target, 2.0);

        run_frame(&ctx, &mut view);
        let before = view.visible_center();

        view.zoom_in();
        run_frame(&ctx, &mut view);

        assert!(view.viewport().scale > 2.0);
        let after = view.visible_center();
        assert!((after.lat - before.lat).abs() < 0.5);
        assert!((after.lng - before.lng).abs() < 0.5);
    }

    #[test]
    fn test_reset_returns_home() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        let target = LatLng::new(35.6762, 139.6503);
        let mut view = MapView::new(&ctx, &image, target, 2.0);

        run_frame(&ctx, &mut view);
        let home_offset = view.viewport().offset;

        view.zoom_out();
        view.center_on(LatLng::new(0.0, 0.0));
        run_frame(&ctx, &mut view);

        view.reset();
        run_frame(&ctx, &mut view);

        assert_eq!(view.viewport().scale, 2.0);
        assert_close(view.viewport().offset, home_offset, 1.0);
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn key_press(key: Key) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_zoom_limits_clamp_startup_scale() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 8.0);
        view.set_zoom_limits(0.5, 4.0).unwrap();

        assert_eq!(view.viewport().scale, 4.0);
    }

    #[test]
    fn test_startup_scale_above_default_limits() {
        let ctx = Context::default();
        let image = test_image(1440, 720);
        let target = LatLng::new(10.7769, 106.7009);
        let mut view = MapView::new(&ctx, &image, target, 20.0);
        view.set_zoom_limits(0.25, 32.0).unwrap();

        run_frame(&ctx, &mut view);

        let viewport = view.viewport();
        assert_eq!(viewport.scale, 20.0);
        let expected = image
            .projection()
            .center_offset_for(&target, 20.0, viewport.size);
        assert_close(viewport.offset, expected, 1.0);

        view.zoom_out();
        view.reset();
        run_frame(&ctx, &mut view);
        assert_eq!(view.viewport().scale, 20.0);
    }

    #[test]
    fn test_invalid_zoom_limits_are_rejected() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);

        assert!(view.set_zoom_limits(4.0, 0.5).is_err());
        assert!(view.set_zoom_limits(f64::NAN, 4.0).is_err());

        run_frame(&ctx, &mut view);
        assert_eq!(view.viewport().scale, 2.0);
        assert!(view.viewport().min_scale <= view.viewport().max_scale);
    }

    #[test]
    fn test_hover_reports_coordinate() {
        let ctx = Context::default();
        // 720x360 on screen at 2x: the whole image fits, so it sits at (0, 0)
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);

        run_frame(&ctx, &mut view);
        assert_eq!(view.hovered(), None);

        run_frame_with(&ctx, &mut view, vec![Event::PointerMoved(Pos2::new(200.0, 100.0))]);
        let hovered = view.hovered().unwrap();
        assert!((hovered.lat - 40.0).abs() < 1e-6, "{hovered}");
        assert!((hovered.lng + 80.0).abs() < 1e-6, "{hovered}");

        // Inside the view but past the image
        run_frame_with(&ctx, &mut view, vec![Event::PointerMoved(Pos2::new(800.0, 500.0))]);
        assert_eq!(view.hovered(), None);
    }

    #[test]
    fn test_zoom_button_click() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);

        // Default controls sit top-right: the "+" button spans 962..990 x 10..38
        let plus = Pos2::new(976.0, 24.0);
        run_frame(&ctx, &mut view);
        run_frame_with(&ctx, &mut view, vec![Event::PointerMoved(plus)]);
        run_frame_with(&ctx, &mut view, vec![pointer_button(plus, true)]);
        run_frame_with(&ctx, &mut view, vec![pointer_button(plus, false)]);

        assert_eq!(view.viewport().scale, 2.5);
    }

    #[test]
    fn test_zoom_keys() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);
        let over_map = Event::PointerMoved(Pos2::new(300.0, 200.0));

        run_frame(&ctx, &mut view);
        run_frame_with(&ctx, &mut view, vec![over_map.clone(), key_press(Key::Plus)]);
        assert_eq!(view.viewport().scale, 2.5);

        run_frame_with(&ctx, &mut view, vec![key_press(Key::Minus)]);
        run_frame_with(&ctx, &mut view, vec![key_press(Key::Minus)]);
        assert_eq!(view.viewport().scale, 1.6);

        run_frame_with(&ctx, &mut view, vec![key_press(Key::Num0)]);
        assert_eq!(view.viewport().scale, 2.0);
    }

    #[test]
    fn test_keys_ignored_when_pointer_is_away() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 2.0);

        run_frame(&ctx, &mut view);
        run_frame_with(&ctx, &mut view, vec![Event::PointerGone, key_press(Key::Plus)]);
        assert_eq!(view.viewport().scale, 2.0);
    }

    #[test]
    fn test_markers_are_kept() {
        let ctx = Context::default();
        let image = test_image(360, 180);
        let mut view = MapView::new(&ctx, &image, LatLng::new(0.0, 0.0), 1.0).with_markers([
            Marker::new(LatLng::new(41.9097306, 12.2558141)).with_label("Rome"),
            Marker::new(LatLng::new(37.7775, -122.416389)).with_label("San Francisco"),
        ]);

        run_frame(&ctx, &mut view);

        assert_eq!(view.markers().len(), 2);
        assert_eq!(view.markers()[0].label.as_deref(), Some("Rome"));
    }
}
