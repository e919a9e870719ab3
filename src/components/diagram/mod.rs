//! Shared 2D diagram model: coordinate spaces, hit-testing, drag bookkeeping
//! and an engine-agnostic scene that renders either to a 2D canvas or SVG.

mod render;
mod scene;
mod space;
mod svg;

pub use render::render;
pub use scene::{DrawCommand, Scene, Stroke, TextAlign, arrowhead_30};
pub use space::{CoordinateSpace, DragState, Layout, Percent, Pixels, scale_to_native};
pub use svg::SvgScene;

use kurbo::Point;

/// A canvas of positioned items that can be hit-tested and redrawn.
pub trait Diagram {
	type Space: CoordinateSpace;

	fn layout(&self) -> &Layout<Self::Space>;

	/// Id of the topmost item under a screen-space point.
	fn hit_test(&self, screen: Point) -> Option<&str>;

	/// Full redraw description of the current state.
	fn scene(&self) -> Scene;

	fn to_screen(&self, pos: Point) -> Point {
		self.layout().to_screen(pos)
	}

	fn from_screen(&self, screen: Point) -> Point {
		self.layout().from_screen(screen)
	}
}
