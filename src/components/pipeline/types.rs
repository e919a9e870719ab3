use kurbo::{Point, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
	Connector,
	Collection,
}

impl NodeKind {
	pub const ALL: [NodeKind; 2] = [NodeKind::Connector, NodeKind::Collection];

	/// Stable name carried through drag-and-drop data transfers.
	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Connector => "s3-connector",
			NodeKind::Collection => "collection",
		}
	}

	pub fn parse(s: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|k| k.as_str() == s)
	}

	pub fn palette_label(self) -> &'static str {
		match self {
			NodeKind::Connector => "S3 Connector",
			NodeKind::Collection => "Collection",
		}
	}

	pub fn sublabel(self) -> &'static str {
		match self {
			NodeKind::Connector => "s3 connector",
			NodeKind::Collection => "collection",
		}
	}

	/// Label for the `n`th node on the canvas.
	pub fn default_label(self, n: usize) -> String {
		match self {
			NodeKind::Connector => format!("S3 Connector {}", n),
			NodeKind::Collection => format!("collection_{}", n),
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			NodeKind::Connector => "pipeline-node connector",
			NodeKind::Collection => "pipeline-node collection",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: String,
	pub kind: NodeKind,
	pub label: String,
	pub sublabel: String,
	/// Top-left corner, in percent of the canvas box.
	pub position: Point,
	pub outgoing: Vec<String>,
}

impl Node {
	pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>, x: f64, y: f64) -> Self {
		Self {
			id: id.into(),
			kind,
			label: label.into(),
			sublabel: kind.sublabel().to_string(),
			position: Point::new(x, y),
			outgoing: Vec::new(),
		}
	}

	pub fn with_outgoing(mut self, target: impl Into<String>) -> Self {
		self.outgoing.push(target.into());
		self
	}
}

/// Rendered edge between two live nodes, in canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub from: String,
	pub to: String,
	pub start: Point,
	pub end: Point,
	pub arrow: Vec<Point>,
}

/// Fields of the side panel bound to the selected node.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigForm {
	pub name: String,
	pub collection: String,
	pub instructions: String,
	pub edit_metadata: bool,
}

impl ConfigForm {
	pub fn for_label(label: &str) -> Self {
		Self {
			name: label.to_string(),
			collection: label.to_string(),
			instructions: String::new(),
			edit_metadata: true,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineConfig {
	/// Fixed pixel footprint of a rendered node.
	pub node_size: Size,
	/// Upper clamp for node positions, in percent. Keeps the whole footprint
	/// on a typically sized canvas.
	pub max_position: Point,
	/// Subtracted from the drop point so a new node lands centred on it.
	pub drop_offset: Vec2,
	pub arrow_size: f64,
}

impl Default for PipelineConfig {
	fn default() -> Self {
		Self {
			node_size: Size::new(140.0, 80.0),
			max_position: Point::new(92.0, 88.0),
			drop_offset: Vec2::new(70.0, 40.0),
			arrow_size: 8.0,
		}
	}
}

impl PipelineConfig {
	pub fn clamp(&self, p: Point) -> Point {
		Point::new(
			p.x.clamp(0.0, self.max_position.x),
			p.y.clamp(0.0, self.max_position.y),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_kind_parse() {
		for kind in NodeKind::ALL {
			assert_eq!(NodeKind::parse(kind.as_str()), Some(kind));
		}
		assert_eq!(NodeKind::parse("sink"), None);
	}

	#[test]
	fn test_default_labels() {
		assert_eq!(NodeKind::Connector.default_label(4), "S3 Connector 4");
		assert_eq!(NodeKind::Collection.default_label(4), "collection_4");
	}

	#[test]
	fn test_clamp() {
		let config = PipelineConfig::default();
		assert_eq!(config.clamp(Point::new(-5.0, 120.0)), Point::new(0.0, 88.0));
		assert_eq!(config.clamp(Point::new(95.0, 50.0)), Point::new(92.0, 50.0));
	}
}
