use std::f64::consts::PI;

use kurbo::{Point, Rect, Size, Vec2};

/// Text anchor along the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
	Left,
	Center,
}

impl TextAlign {
	pub fn as_str(self) -> &'static str {
		match self {
			TextAlign::Left => "left",
			TextAlign::Center => "center",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
	pub color: &'static str,
	pub width: f64,
	pub dash: Option<(f64, f64)>,
}

impl Stroke {
	pub fn solid(color: &'static str, width: f64) -> Self {
		Self {
			color,
			width,
			dash: None,
		}
	}

	pub fn dashed(color: &'static str, width: f64, dash: f64, gap: f64) -> Self {
		Self {
			color,
			width,
			dash: Some((dash, gap)),
		}
	}
}

/// Engine-agnostic drawing primitive, in screen pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear(Size),
	Line {
		from: Point,
		to: Point,
		stroke: Stroke,
	},
	Polygon {
		points: Vec<Point>,
		fill: &'static str,
	},
	RoundRect {
		rect: Rect,
		radius: f64,
		fill: &'static str,
		outline: Option<Stroke>,
	},
	Circle {
		center: Point,
		radius: f64,
		fill: &'static str,
	},
	Text {
		at: Point,
		text: String,
		font: &'static str,
		color: &'static str,
		align: TextAlign,
	},
}

/// An ordered list of draw commands; later commands paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub commands: Vec<DrawCommand>,
}

impl Scene {
	pub fn push(&mut self, cmd: DrawCommand) {
		self.commands.push(cmd);
	}

	pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
		self.commands.iter()
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

/// Triangle with its tip at `tip`, pointing along `from -> tip`.
/// Wings are `size` long and spread `spread` radians either side.
pub fn arrowhead(from: Point, tip: Point, size: f64, spread: f64) -> Vec<Point> {
	let dir: Vec2 = tip - from;
	let angle = dir.atan2();
	let wing = |a: f64| tip - Vec2::new(size * a.cos(), size * a.sin());
	vec![tip, wing(angle - spread), wing(angle + spread)]
}

/// Standard 30° arrowhead.
pub fn arrowhead_30(from: Point, tip: Point, size: f64) -> Vec<Point> {
	arrowhead(from, tip, size, PI / 6.0)
}
