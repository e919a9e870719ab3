use kurbo::{Point, Size, Vec2};
use log::debug;
use uuid::Uuid;

use super::types::{ConfigForm, Connection, Node, NodeKind, PipelineConfig};
use crate::components::diagram::{
	Diagram, DragState, DrawCommand, Layout, Percent, Scene, Stroke, arrowhead_30,
};

const EDGE_COLOR: &str = "#CBD5E1";

/// Session state of the import pipeline builder.
#[derive(Clone, Debug)]
pub struct PipelineState {
	pub nodes: Vec<Node>,
	pub selected: Option<String>,
	pub form: ConfigForm,
	pub drag: DragState,
	/// Palette item currently being dragged towards the canvas.
	pub pending: Option<NodeKind>,
	config: PipelineConfig,
	layout: Layout<Percent>,
}

impl PipelineState {
	pub fn new(nodes: Vec<Node>, config: PipelineConfig) -> Self {
		let layout = Layout::new(Percent, Size::ZERO, config.node_size);
		Self {
			nodes,
			selected: None,
			form: ConfigForm::for_label(""),
			drag: DragState::default(),
			pending: None,
			config,
			layout,
		}
	}

	/// The demo pipeline: one S3 connector feeding two chained collections.
	pub fn seeded() -> Self {
		let nodes = vec![
			Node::new("node-1", NodeKind::Connector, "S3 Connector 1", 10.0, 45.0)
				.with_outgoing("node-2"),
			Node::new("node-2", NodeKind::Collection, "students", 42.0, 15.0)
				.with_outgoing("node-3"),
			Node::new("node-3", NodeKind::Collection, "student_hackathon", 72.0, 45.0),
		];
		let mut state = Self::new(nodes, PipelineConfig::default());
		state.selected = Some("node-3".to_string());
		state.form = ConfigForm::for_label("student_hackathon");
		state
	}

	pub fn config(&self) -> &PipelineConfig {
		&self.config
	}

	/// Records the canvas's current pixel size.
	pub fn resize(&mut self, viewport: Size) {
		self.layout.viewport = viewport;
	}

	/// Whether a fresh measurement differs from the recorded canvas size.
	pub fn needs_resize(&self, measured: Size) -> bool {
		self.layout.viewport != measured
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.as_deref() == Some(id)
	}

	pub fn begin_drag(&mut self, id: &str, pointer: Point) {
		let Some(node) = self.node(id) else {
			return;
		};
		let screen = self.to_screen(node.position);
		let form = ConfigForm::for_label(&node.label);
		self.drag.begin(id, pointer, screen);
		self.selected = Some(id.to_string());
		self.form = form;
		debug!("drag start {} offset {:?}", id, self.drag.offset);
	}

	pub fn update_drag(&mut self, pointer: Point) {
		let Some(id) = self.drag.item.as_deref() else {
			return;
		};
		if !self.layout.has_area() {
			return;
		}
		let pos = self
			.config
			.clamp(self.from_screen(pointer - self.drag.offset));
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
			node.position = pos;
		}
	}

	pub fn end_drag(&mut self) {
		if let Some(id) = self.drag.item.as_deref() {
			debug!("drag end {}", id);
		}
		self.drag.clear();
	}

	pub fn begin_palette_drag(&mut self, kind: NodeKind) {
		self.pending = Some(kind);
	}

	pub fn cancel_palette_drag(&mut self) {
		self.pending = None;
	}

	/// Creates a node of the pending palette kind centred on `pointer`.
	/// Returns the new id, or `None` when no palette drag was in progress.
	pub fn drop_new_node(&mut self, pointer: Point) -> Option<String> {
		let kind = self.pending.take()?;
		let pos = self
			.config
			.clamp(self.from_screen(pointer - self.config.drop_offset));
		let id = format!("node-{}", Uuid::new_v4());
		let label = kind.default_label(self.nodes.len() + 1);
		debug!("created {} '{}' at {:?}", id, label, pos);
		self.nodes
			.push(Node::new(id.clone(), kind, label, pos.x, pos.y));
		Some(id)
	}

	/// Edges between live nodes, from the source's right-edge midpoint to the
	/// target's left-edge midpoint. Unknown targets are skipped.
	pub fn render_connections(&self) -> Vec<Connection> {
		let size = self.config.node_size;
		let mid = Vec2::new(0.0, size.height / 2.0);
		self.nodes
			.iter()
			.flat_map(|src| {
				src.outgoing.iter().filter_map(move |target| {
					let tgt = self.node(target)?;
					let start = self.to_screen(src.position) + mid + Vec2::new(size.width, 0.0);
					let end = self.to_screen(tgt.position) + mid;
					Some(Connection {
						from: src.id.clone(),
						to: tgt.id.clone(),
						start,
						end,
						arrow: arrowhead_30(start, end, self.config.arrow_size),
					})
				})
			})
			.collect()
	}

	pub fn select(&mut self, id: Option<&str>) {
		self.selected = id.filter(|id| self.node(id).is_some()).map(str::to_string);
		let form = self
			.selected
			.as_deref()
			.and_then(|id| self.node(id))
			.map(|node| ConfigForm::for_label(&node.label));
		if let Some(form) = form {
			self.form = form;
		}
	}

	/// Renames the selected node along with the form field.
	pub fn set_form_name(&mut self, name: String) {
		if let Some(id) = self.selected.as_deref() {
			if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
				node.label = name.clone();
			}
		}
		self.form.name = name;
	}

	pub fn set_form_collection(&mut self, collection: String) {
		self.form.collection = collection;
	}

	pub fn set_form_instructions(&mut self, instructions: String) {
		self.form.instructions = instructions;
	}

	pub fn toggle_edit_metadata(&mut self) {
		self.form.edit_metadata = !self.form.edit_metadata;
	}

	/// Labels of collection nodes, offered as import targets.
	pub fn collection_options(&self) -> Vec<String> {
		self.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Collection)
			.map(|n| n.label.clone())
			.collect()
	}
}

impl Diagram for PipelineState {
	type Space = Percent;

	fn layout(&self) -> &Layout<Percent> {
		&self.layout
	}

	fn hit_test(&self, screen: Point) -> Option<&str> {
		self.layout.hit_test(
			self.nodes.iter().map(|n| (n.id.as_str(), n.position)),
			screen,
		)
	}

	/// Connection overlay only; nodes themselves are HTML elements.
	fn scene(&self) -> Scene {
		let mut scene = Scene::default();
		for conn in self.render_connections() {
			scene.push(DrawCommand::Line {
				from: conn.start,
				to: conn.end,
				stroke: Stroke::dashed(EDGE_COLOR, 2.0, 5.0, 5.0),
			});
			scene.push(DrawCommand::Polygon {
				points: conn.arrow,
				fill: EDGE_COLOR,
			});
		}
		scene
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	fn measured() -> PipelineState {
		let mut state = PipelineState::seeded();
		state.resize(Size::new(1000.0, 700.0));
		state
	}

	#[test]
	fn test_percent_screen_conversion() {
		let state = measured();
		let screen = state.to_screen(Point::new(10.0, 45.0));
		assert!((screen.x - 100.0).abs() < EPS);
		assert!((screen.y - 315.0).abs() < EPS);
		let back = state.from_screen(screen);
		assert!((back.x - 10.0).abs() < EPS);
		assert!((back.y - 45.0).abs() < EPS);
	}

	#[test]
	fn test_needs_resize_only_on_change() {
		let state = measured();
		assert!(!state.needs_resize(Size::new(1000.0, 700.0)));
		assert!(state.needs_resize(Size::new(1000.0, 640.0)));
		assert!(PipelineState::seeded().needs_resize(Size::new(1000.0, 700.0)));
	}

	#[test]
	fn test_seeded() {
		let state = PipelineState::seeded();
		assert_eq!(state.nodes.len(), 3);
		assert!(state.is_selected("node-3"));
		assert_eq!(state.form.name, "student_hackathon");
	}

	#[test]
	fn test_zero_offset_drag_keeps_position() {
		let mut state = measured();
		let before = state.node("node-2").map(|n| n.position);
		let p = Point::new(450.0, 130.0);
		state.begin_drag("node-2", p);
		state.update_drag(p);
		let after = state.node("node-2").map(|n| n.position);
		let (before, after) = (before.unwrap(), after.unwrap());
		assert!((before.x - after.x).abs() < EPS);
		assert!((before.y - after.y).abs() < EPS);
	}

	#[test]
	fn test_drag_moves_by_pointer_delta() {
		let mut state = measured();
		state.begin_drag("node-1", Point::new(120.0, 330.0));
		state.update_drag(Point::new(220.0, 400.0));
		let pos = state.node("node-1").unwrap().position;
		assert!((pos.x - 20.0).abs() < EPS);
		assert!((pos.y - 55.0).abs() < EPS);
	}

	#[test]
	fn test_begin_drag_selects_and_fills_form() {
		let mut state = measured();
		state.begin_drag("node-1", Point::new(100.0, 315.0));
		assert!(state.is_selected("node-1"));
		assert_eq!(state.form.name, "S3 Connector 1");
		assert_eq!(state.form.collection, "S3 Connector 1");
		assert!(state.form.edit_metadata);
	}

	#[test]
	fn test_begin_drag_unknown_node() {
		let mut state = measured();
		state.begin_drag("node-42", Point::new(1.0, 1.0));
		assert!(!state.drag.is_active());
		assert!(state.is_selected("node-3"));
	}

	#[test]
	fn test_update_drag_clamps() {
		let mut state = measured();
		let pointers = [
			Point::new(-5000.0, -5000.0),
			Point::new(5000.0, 5000.0),
			Point::new(999.0, 1.0),
			Point::new(3.0, 699.0),
		];
		for p in pointers {
			state.begin_drag("node-3", Point::new(720.0, 315.0));
			state.update_drag(p);
			let pos = state.node("node-3").unwrap().position;
			assert!((0.0..=92.0).contains(&pos.x), "x out of range: {}", pos.x);
			assert!((0.0..=88.0).contains(&pos.y), "y out of range: {}", pos.y);
			state.end_drag();
		}
	}

	#[test]
	fn test_update_drag_without_drag_is_noop() {
		let mut state = measured();
		let before = state.nodes.clone();
		state.update_drag(Point::new(10.0, 10.0));
		assert_eq!(state.nodes, before);
	}

	#[test]
	fn test_update_drag_unmeasured_canvas_is_noop() {
		let mut state = PipelineState::seeded();
		let before = state.nodes.clone();
		state.begin_drag("node-1", Point::new(5.0, 5.0));
		state.update_drag(Point::new(50.0, 50.0));
		assert_eq!(state.nodes, before);
	}

	#[test]
	fn test_end_drag_idempotent() {
		let mut state = measured();
		state.begin_drag("node-2", Point::new(430.0, 110.0));
		state.end_drag();
		let once = state.drag.clone();
		state.end_drag();
		assert_eq!(state.drag, once);
		assert!(!state.drag.is_active());
	}

	#[test]
	fn test_drop_new_node() {
		let mut state = measured();
		state.begin_palette_drag(NodeKind::Collection);
		let id = state.drop_new_node(Point::new(570.0, 390.0)).unwrap();
		assert_eq!(state.nodes.len(), 4);
		assert_eq!(state.nodes.iter().filter(|n| n.id == id).count(), 1);
		let node = state.node(&id).unwrap();
		assert_eq!(node.label, "collection_4");
		assert_eq!(node.sublabel, "collection");
		assert!(node.outgoing.is_empty());
		assert!((node.position.x - 50.0).abs() < EPS);
		assert!((node.position.y - 50.0).abs() < EPS);
		assert_eq!(state.pending, None);
	}

	#[test]
	fn test_drop_ids_unique() {
		let mut state = measured();
		for _ in 0..20 {
			state.begin_palette_drag(NodeKind::Connector);
			state.drop_new_node(Point::new(10.0, 10.0));
		}
		let mut ids: Vec<_> = state.nodes.iter().map(|n| n.id.clone()).collect();
		ids.sort();
		ids.dedup();
		assert_eq!(ids.len(), 23);
	}

	#[test]
	fn test_drop_without_palette_drag() {
		let mut state = measured();
		assert_eq!(state.drop_new_node(Point::new(10.0, 10.0)), None);
		assert_eq!(state.nodes.len(), 3);
	}

	#[test]
	fn test_drop_clamps_near_edge() {
		let mut state = measured();
		state.begin_palette_drag(NodeKind::Connector);
		let id = state.drop_new_node(Point::new(10.0, 690.0)).unwrap();
		let pos = state.node(&id).unwrap().position;
		assert_eq!(pos.x, 0.0);
		assert_eq!(pos.y, 88.0);
	}

	#[test]
	fn test_connections_follow_nodes() {
		let state = measured();
		let conns = state.render_connections();
		assert_eq!(conns.len(), 2);
		let first = &conns[0];
		assert_eq!((first.from.as_str(), first.to.as_str()), ("node-1", "node-2"));
		// node-1 at (10%, 45%) of 1000x700, footprint 140x80
		assert!((first.start.x - 240.0).abs() < EPS);
		assert!((first.start.y - 355.0).abs() < EPS);
		assert!((first.end.x - 420.0).abs() < EPS);
		assert!((first.end.y - 145.0).abs() < EPS);
		assert_eq!(first.arrow[0], first.end);
	}

	#[test]
	fn test_connections_skip_dangling() {
		let mut state = measured();
		state.nodes[2].outgoing.push("node-gone".to_string());
		state.nodes[0].outgoing.push("node-3".to_string());
		let conns = state.render_connections();
		assert_eq!(conns.len(), 3);
		assert!(conns.iter().all(|c| state.node(&c.to).is_some()));
	}

	#[test]
	fn test_scene_has_line_and_arrow_per_connection() {
		let state = measured();
		let scene = state.scene();
		assert_eq!(scene.len(), 4);
		assert!(matches!(scene.commands[0], DrawCommand::Line { .. }));
		assert!(matches!(scene.commands[1], DrawCommand::Polygon { .. }));
	}

	#[test]
	fn test_hit_test_nodes() {
		let state = measured();
		// node-2 occupies (420,105)-(560,185)
		assert_eq!(state.hit_test(Point::new(500.0, 150.0)), Some("node-2"));
		assert_eq!(state.hit_test(Point::new(5.0, 5.0)), None);
	}

	#[test]
	fn test_form_name_renames_selected() {
		let mut state = measured();
		state.set_form_name("alumni".to_string());
		assert_eq!(state.node("node-3").unwrap().label, "alumni");
		assert_eq!(state.collection_options(), vec!["students", "alumni"]);
	}

	#[test]
	fn test_select_unknown_clears() {
		let mut state = measured();
		state.select(Some("node-99"));
		assert_eq!(state.selected, None);
		state.select(Some("node-2"));
		assert_eq!(state.form.name, "students");
	}
}
