//! Conversion properties over synthetic displays. Nothing here touches a real screen.

use deskkit_display::{CoordinateSpace, Display, Error, Point, Rect, Size};
use proptest::prelude::*;

/// Scales seen in the wild; each divides the generated logical sizes evenly.
const SCALES: [f64; 6] = [1.0, 1.25, 1.5, 1.75, 2.0, 3.0];

fn origin() -> impl Strategy<Value = Point> {
    (-8000..8000i32, -8000..8000i32).prop_map(|(x, y)| Point::new(x, y))
}

/// Logical sizes that are multiples of four, so `logical * scale` is whole.
fn logical_size() -> impl Strategy<Value = Size> {
    (1..1200i32, 1..800i32).prop_map(|(w, h)| Size::new(w * 4, h * 4))
}

#[allow(clippy::cast_possible_truncation)]
fn physical_size(logical: Size, scale: f64) -> Size {
    Size::new(
        (f64::from(logical.width) * scale) as i32,
        (f64::from(logical.height) * scale) as i32,
    )
}

fn scaled_display() -> impl Strategy<Value = Display> {
    (origin(), logical_size(), prop::sample::select(SCALES.to_vec())).prop_map(
        |(origin, logical, scale)| {
            Display::new(1, origin, physical_size(logical, scale), scale, CoordinateSpace::Scaled)
        },
    )
}

fn physical_display() -> impl Strategy<Value = Display> {
    (origin(), logical_size()).prop_map(|(origin, size)| {
        Display::new(1, origin, size, 1.5, CoordinateSpace::Physical)
    })
}

/// A display together with a relative point on it.
fn with_point(display: impl Strategy<Value = Display>) -> impl Strategy<Value = (Display, Point)> {
    display.prop_flat_map(|d| {
        let size = d.size();
        (Just(d), 0..size.width, 0..size.height).prop_map(|(d, x, y)| (d, Point::new(x, y)))
    })
}

proptest! {
    #[test]
    fn physical_round_trip_is_exact((display, p) in with_point(physical_display())) {
        let abs = display.to_absolute(p);
        prop_assert!(display.contains(abs));
        prop_assert_eq!(display.to_relative(abs), Some(p));
    }

    #[test]
    fn scaled_round_trip_stays_close((display, p) in with_point(scaled_display())) {
        let abs = display.to_absolute(p);
        prop_assert!(display.contains(abs), "{:?} maps to {:?} outside the display", p, abs);

        let back = display.to_relative(abs).expect("contained point converts back");
        let tolerance = display.scale().ceil() as i32;
        prop_assert!(back.x <= p.x && p.x - back.x <= tolerance, "{:?} -> {:?}", p, back);
        prop_assert!(back.y <= p.y && p.y - back.y <= tolerance, "{:?} -> {:?}", p, back);
    }

    #[test]
    fn scaled_round_trip_is_exact_on_the_logical_grid(
        display in scaled_display(),
        lx in 0..1000i32,
        ly in 0..1000i32,
    ) {
        // Multiples of four points land on whole pixels for every scale in SCALES.
        let logical = display.origin_rect().size;
        let abs = display
            .origin()
            .offset((lx * 4) % logical.width, (ly * 4) % logical.height);
        let rel = display.to_relative(abs).expect("point is inside the logical bounds");
        prop_assert_eq!(display.to_absolute(rel), abs);
        prop_assert_eq!(display.to_relative(display.to_absolute(rel)), Some(rel));
    }

    #[test]
    fn nothing_outside_origin_rect_is_contained(
        display in prop_oneof![scaled_display(), physical_display()],
        dx in 0..5000i32,
        dy in -5000..5000i32,
    ) {
        let rect = display.origin_rect();
        let right = Point::new(rect.right() + dx, rect.origin.y + dy);
        let left = Point::new(rect.origin.x - 1 - dx, rect.origin.y + dy);
        let below = Point::new(rect.origin.x + dy, rect.bottom() + dx);
        let above = Point::new(rect.origin.x + dy, rect.origin.y - 1 - dx);
        for point in [right, left, below, above] {
            prop_assert!(!display.contains(point));
            prop_assert_eq!(display.to_relative(point), None);
        }
    }

    #[test]
    fn invalid_regions_never_capture(
        display in prop_oneof![scaled_display(), physical_display()],
        x in -100..100i32,
        y in -100..100i32,
        w in -50..=0i32,
        h in -50..50i32,
    ) {
        let result = display.capture_rect(Rect::new(x, y, w, h));
        prop_assert!(
            matches!(result, Err(Error::InvalidRegion { .. })),
            "{}x{} was not rejected: {:?}", w, h, result
        );
        let result = display.capture_rect(Rect::new(x, y, h.abs() + 1, w));
        prop_assert!(
            matches!(result, Err(Error::InvalidRegion { .. })),
            "{}x{} was not rejected: {:?}", h.abs() + 1, w, result
        );
    }
}

#[test]
fn info_serializes_for_diagnostics() {
    let display = Display::new(
        42,
        Point::new(-1920, 0),
        Size::new(3840, 2160),
        2.0,
        CoordinateSpace::Scaled,
    )
    .with_main(true);

    let json = serde_json::to_value(display.info()).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["is_main"], true);
    assert_eq!(json["origin"]["x"], -1920);
    assert_eq!(json["size"]["width"], 3840);
    assert_eq!(json["logical_size"]["width"], 1920);
    assert_eq!(json["space"], "scaled");
}

#[test]
fn pixel_color_rejects_points_off_the_display() {
    let display = Display::new(
        1,
        Point::new(0, 0),
        Size::new(2880, 1800),
        2.0,
        CoordinateSpace::Scaled,
    );
    // Relative coordinates are physical, so the logical width is not the bound.
    assert!(matches!(
        display.pixel_color(Point::new(2880, 10)),
        Err(Error::OutOfBounds { x: 2880, y: 10 })
    ));
    assert!(matches!(
        display.pixel_color(Point::new(-1, 0)),
        Err(Error::OutOfBounds { .. })
    ));
}
