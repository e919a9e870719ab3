use kurbo::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
	Law,
	Regulation,
	Article,
	Section,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
	pub id: String,
	/// Display text; `\n` starts a new line.
	pub text: String,
	pub kind: EntityKind,
	/// Top-left corner in native canvas pixels.
	pub position: Point,
	pub connections: Vec<String>,
}

impl Entity {
	pub fn new(id: impl Into<String>, text: impl Into<String>, kind: EntityKind, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			text: text.into(),
			kind,
			position: Point::new(x, y),
			connections: Vec::new(),
		}
	}

	pub fn connected_to(mut self, target: impl Into<String>) -> Self {
		self.connections.push(target.into());
		self
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
	pub id: String,
	pub from: String,
	pub to: String,
	pub label: String,
}

impl Relationship {
	pub fn new(
		id: impl Into<String>,
		from: impl Into<String>,
		to: impl Into<String>,
		label: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			from: from.into(),
			to: to.into(),
			label: label.into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnnotationConfig {
	/// Backing-store size of the canvas element.
	pub native_size: Size,
	pub entity_size: Size,
	pub corner_radius: f64,
	pub arrow_size: f64,
	pub law_color: &'static str,
	pub neutral_color: &'static str,
	pub selection_color: &'static str,
	pub edge_color: &'static str,
	pub edge_label_color: &'static str,
}

impl Default for AnnotationConfig {
	fn default() -> Self {
		Self {
			native_size: Size::new(800.0, 600.0),
			entity_size: Size::new(140.0, 60.0),
			corner_radius: 8.0,
			arrow_size: 10.0,
			law_color: "#4ADE80",
			neutral_color: "#94A3B8",
			selection_color: "#3B82F6",
			edge_color: "#94A3B8",
			edge_label_color: "#64748B",
		}
	}
}

impl AnnotationConfig {
	pub fn fill_for(&self, kind: EntityKind) -> &'static str {
		match kind {
			EntityKind::Law => self.law_color,
			_ => self.neutral_color,
		}
	}
}
