use kurbo::{Point, Rect, Size, Vec2};

/// Maps item positions to canvas pixels and back.
///
/// `viewport` is the current pixel size of the canvas the items live in.
pub trait CoordinateSpace {
	fn to_screen(&self, pos: Point, viewport: Size) -> Point;
	fn from_screen(&self, screen: Point, viewport: Size) -> Point;
}

/// Positions are percentages of the viewport, so layout survives a resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Percent;

/// Positions are absolute pixels in a fixed-size canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pixels;

impl CoordinateSpace for Percent {
	fn to_screen(&self, pos: Point, viewport: Size) -> Point {
		Point::new(
			pos.x / 100.0 * viewport.width,
			pos.y / 100.0 * viewport.height,
		)
	}

	fn from_screen(&self, screen: Point, viewport: Size) -> Point {
		let axis = |v: f64, extent: f64| {
			if extent > 0.0 { v / extent * 100.0 } else { 0.0 }
		};
		Point::new(
			axis(screen.x, viewport.width),
			axis(screen.y, viewport.height),
		)
	}
}

impl CoordinateSpace for Pixels {
	fn to_screen(&self, pos: Point, _viewport: Size) -> Point {
		pos
	}

	fn from_screen(&self, screen: Point, _viewport: Size) -> Point {
		screen
	}
}

/// Shared geometry for a diagram: its coordinate space, the current canvas
/// size and the fixed pixel footprint every item occupies.
#[derive(Clone, Debug)]
pub struct Layout<S> {
	pub space: S,
	pub viewport: Size,
	pub footprint: Size,
}

impl<S: CoordinateSpace> Layout<S> {
	pub fn new(space: S, viewport: Size, footprint: Size) -> Self {
		Self {
			space,
			viewport,
			footprint,
		}
	}

	pub fn to_screen(&self, pos: Point) -> Point {
		self.space.to_screen(pos, self.viewport)
	}

	pub fn from_screen(&self, screen: Point) -> Point {
		self.space.from_screen(screen, self.viewport)
	}

	/// Screen-space box of an item anchored (top-left) at `pos`.
	pub fn bounds(&self, pos: Point) -> Rect {
		Rect::from_origin_size(self.to_screen(pos), self.footprint)
	}

	pub fn has_area(&self) -> bool {
		self.viewport.width > 0.0 && self.viewport.height > 0.0
	}

	/// Topmost item whose box contains `screen`. Items later in the
	/// iterator are drawn on top, so the last match wins.
	pub fn hit_test<'a, I>(&self, items: I, screen: Point) -> Option<&'a str>
	where
		I: IntoIterator<Item = (&'a str, Point)>,
	{
		items
			.into_iter()
			.filter(|&(_, pos)| contains(self.bounds(pos), screen))
			.last()
			.map(|(id, _)| id)
	}
}

/// Edge-inclusive containment; `Rect::contains` excludes the far edges.
fn contains(rect: Rect, p: Point) -> bool {
	p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}

/// Converts a pointer position measured against the element's displayed
/// (CSS) size into the canvas's native pixel space.
pub fn scale_to_native(pointer: Point, displayed: Size, native: Size) -> Point {
	let ratio = |n: f64, d: f64| if d > 0.0 { n / d } else { 1.0 };
	Point::new(
		pointer.x * ratio(native.width, displayed.width),
		pointer.y * ratio(native.height, displayed.height),
	)
}

/// An in-progress pointer drag of one diagram item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
	pub item: Option<String>,
	/// Pointer minus the item's screen position when the drag began.
	pub offset: Vec2,
}

impl DragState {
	pub fn begin(&mut self, item: &str, pointer: Point, item_screen: Point) {
		self.item = Some(item.to_string());
		self.offset = pointer - item_screen;
	}

	pub fn clear(&mut self) {
		self.item = None;
		self.offset = Vec2::ZERO;
	}

	pub fn is_active(&self) -> bool {
		self.item.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn test_percent_roundtrip() {
		let viewport = Size::new(1170.0, 654.0);
		let pos = Point::new(42.0, 15.0);
		let screen = Percent.to_screen(pos, viewport);
		assert!((screen.x - 491.4).abs() < EPS);
		let back = Percent.from_screen(screen, viewport);
		assert!((back.x - pos.x).abs() < EPS);
		assert!((back.y - pos.y).abs() < EPS);
	}

	#[test]
	fn test_percent_zero_viewport() {
		let back = Percent.from_screen(Point::new(10.0, 10.0), Size::ZERO);
		assert_eq!(back, Point::ZERO);
	}

	#[test]
	fn test_pixels_identity() {
		let p = Point::new(400.0, 200.0);
		assert_eq!(Pixels.to_screen(p, Size::new(800.0, 600.0)), p);
		assert_eq!(Pixels.from_screen(p, Size::ZERO), p);
	}

	#[test]
	fn test_hit_test_topmost_wins() {
		let layout = Layout::new(Pixels, Size::new(800.0, 600.0), Size::new(100.0, 50.0));
		let items = [("a", Point::new(0.0, 0.0)), ("b", Point::new(50.0, 0.0))];
		let hit = layout.hit_test(items.iter().map(|&(id, p)| (id, p)), Point::new(75.0, 10.0));
		assert_eq!(hit, Some("b"));
		let hit = layout.hit_test(items.iter().map(|&(id, p)| (id, p)), Point::new(10.0, 10.0));
		assert_eq!(hit, Some("a"));
		let miss = layout.hit_test(items.iter().map(|&(id, p)| (id, p)), Point::new(10.0, 90.0));
		assert_eq!(miss, None);
	}

	#[test]
	fn test_hit_test_includes_edges() {
		let layout = Layout::new(Pixels, Size::new(800.0, 600.0), Size::new(140.0, 60.0));
		let items = [("1", Point::new(400.0, 200.0))];
		assert_eq!(
			layout.hit_test(items.iter().copied(), Point::new(540.0, 260.0)),
			Some("1")
		);
	}

	#[test]
	fn test_scale_to_native_halved_display() {
		let native = Size::new(800.0, 600.0);
		let displayed = Size::new(400.0, 300.0);
		let p = scale_to_native(Point::new(235.0, 115.0), displayed, native);
		assert!((p.x - 470.0).abs() < EPS);
		assert!((p.y - 230.0).abs() < EPS);
	}

	#[test]
	fn test_scale_to_native_unmeasured() {
		let p = scale_to_native(Point::new(5.0, 6.0), Size::ZERO, Size::new(800.0, 600.0));
		assert_eq!(p, Point::new(5.0, 6.0));
	}

	#[test]
	fn test_drag_clear() {
		let mut drag = DragState::default();
		drag.begin("n", Point::new(10.0, 10.0), Point::new(4.0, 6.0));
		assert!(drag.is_active());
		assert_eq!(drag.offset, Vec2::new(6.0, 4.0));
		drag.clear();
		assert_eq!(drag, DragState::default());
	}
}
