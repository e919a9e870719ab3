use kurbo::{Point, Rect, Size, Vec2};
use log::debug;

use super::types::{AnnotationConfig, Entity, EntityKind, Relationship};
use crate::components::diagram::{
	Diagram, DrawCommand, Layout, Pixels, Scene, Stroke, TextAlign, arrowhead_30, scale_to_native,
};

const TEXT_BASELINE: f64 = 25.0;
const LINE_HEIGHT: f64 = 18.0;
const LABEL_NUDGE: f64 = 10.0;
const DOT_OUTER: f64 = 6.0;
const DOT_INNER: f64 = 4.0;

/// Entity-relationship graph drawn over a document page.
#[derive(Clone, Debug)]
pub struct AnnotationState {
	pub entities: Vec<Entity>,
	pub relationships: Vec<Relationship>,
	pub selected: Option<String>,
	config: AnnotationConfig,
	layout: Layout<Pixels>,
}

impl AnnotationState {
	pub fn new(
		entities: Vec<Entity>,
		relationships: Vec<Relationship>,
		config: AnnotationConfig,
	) -> Self {
		let layout = Layout::new(Pixels, config.native_size, config.entity_size);
		Self {
			entities,
			relationships,
			selected: None,
			config,
			layout,
		}
	}

	pub fn seeded() -> Self {
		Self::new(
			vec![
				Entity::new("1", "Municipal\nLaw", EntityKind::Law, 400.0, 200.0).connected_to("2"),
				Entity::new("2", "Regulation", EntityKind::Regulation, 400.0, 320.0),
			],
			vec![Relationship::new("r1", "1", "2", "1-of")],
			AnnotationConfig::default(),
		)
	}

	pub fn config(&self) -> &AnnotationConfig {
		&self.config
	}

	pub fn entity(&self, id: &str) -> Option<&Entity> {
		self.entities.iter().find(|e| e.id == id)
	}

	pub fn select(&mut self, id: Option<&str>) {
		let next = id.filter(|id| self.entity(id).is_some()).map(str::to_string);
		if next != self.selected {
			debug!("selected entity {:?}", next);
		}
		self.selected = next;
	}

	/// Selects whatever lies under a pointer measured against the canvas's
	/// displayed size, clearing the selection on a miss.
	pub fn click(&mut self, pointer: Point, displayed: Size) -> Option<String> {
		let native = scale_to_native(pointer, displayed, self.config.native_size);
		let hit = self.hit_test(native).map(str::to_string);
		self.select(hit.as_deref());
		hit
	}

	pub fn summary(&self) -> String {
		let plural = |n: usize, one: &str, many: &str| {
			format!("{} {}", n, if n == 1 { one } else { many })
		};
		format!(
			"{} • {}",
			plural(self.entities.len(), "entity", "entities"),
			plural(self.relationships.len(), "relationship", "relationships")
		)
	}

	fn draw_relationship(&self, rel: &Relationship, scene: &mut Scene) {
		let (Some(from), Some(to)) = (self.entity(&rel.from), self.entity(&rel.to)) else {
			return;
		};
		let size = self.config.entity_size;
		let start = from.position + Vec2::new(size.width / 2.0, size.height / 2.0);
		let end = to.position + Vec2::new(size.width / 2.0, 0.0);
		scene.push(DrawCommand::Line {
			from: start,
			to: end,
			stroke: Stroke::solid(self.config.edge_color, 2.0),
		});
		scene.push(DrawCommand::Polygon {
			points: arrowhead_30(start, end, self.config.arrow_size),
			fill: self.config.edge_color,
		});
		scene.push(DrawCommand::Text {
			at: Point::new(start.x.midpoint(end.x) + LABEL_NUDGE, start.y.midpoint(to.position.y)),
			text: rel.label.clone(),
			font: "12px sans-serif",
			color: self.config.edge_label_color,
			align: TextAlign::Left,
		});
	}

	fn draw_entity(&self, entity: &Entity, scene: &mut Scene) {
		let size = self.config.entity_size;
		let selected = self.selected.as_deref() == Some(entity.id.as_str());
		let rect = Rect::from_origin_size(entity.position, size);
		scene.push(DrawCommand::RoundRect {
			rect,
			radius: self.config.corner_radius,
			fill: self.config.fill_for(entity.kind),
			outline: selected.then(|| Stroke::solid(self.config.selection_color, 3.0)),
		});

		let center_x = rect.x0 + size.width / 2.0;
		for (i, line) in entity.text.split('\n').enumerate() {
			scene.push(DrawCommand::Text {
				at: Point::new(center_x, rect.y0 + TEXT_BASELINE + i as f64 * LINE_HEIGHT),
				text: line.to_string(),
				font: "bold 14px sans-serif",
				color: "#FFFFFF",
				align: TextAlign::Center,
			});
		}

		if !entity.connections.is_empty() || selected {
			let center = Point::new(center_x, rect.y1);
			scene.push(DrawCommand::Circle {
				center,
				radius: DOT_OUTER,
				fill: "#1E293B",
			});
			scene.push(DrawCommand::Circle {
				center,
				radius: DOT_INNER,
				fill: "#FFFFFF",
			});
		}
	}
}

impl Diagram for AnnotationState {
	type Space = Pixels;

	fn layout(&self) -> &Layout<Pixels> {
		&self.layout
	}

	fn hit_test(&self, screen: Point) -> Option<&str> {
		self.layout.hit_test(
			self.entities.iter().map(|e| (e.id.as_str(), e.position)),
			screen,
		)
	}

	/// Relationships first so entity boxes paint over their lines.
	fn scene(&self) -> Scene {
		let mut scene = Scene::default();
		scene.push(DrawCommand::Clear(self.config.native_size));
		for rel in &self.relationships {
			self.draw_relationship(rel, &mut scene);
		}
		for entity in &self.entities {
			self.draw_entity(entity, &mut scene);
		}
		scene
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(scene: &Scene) -> Vec<&str> {
		scene
			.iter()
			.filter_map(|cmd| match cmd {
				DrawCommand::Text { text, .. } => Some(text.as_str()),
				_ => None,
			})
			.collect()
	}

	fn circles(scene: &Scene) -> usize {
		scene
			.iter()
			.filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
			.count()
	}

	#[test]
	fn test_click_selects_entity() {
		let mut state = AnnotationState::seeded();
		let native = Size::new(800.0, 600.0);
		assert_eq!(state.click(Point::new(470.0, 230.0), native).as_deref(), Some("1"));
		assert_eq!(state.selected.as_deref(), Some("1"));
		assert_eq!(state.click(Point::new(470.0, 600.0), native), None);
		assert_eq!(state.selected, None);
	}

	#[test]
	fn test_click_on_scaled_canvas() {
		let mut state = AnnotationState::seeded();
		// displayed at half the native size
		let displayed = Size::new(400.0, 300.0);
		assert_eq!(state.click(Point::new(235.0, 115.0), displayed).as_deref(), Some("1"));
		assert_eq!(state.click(Point::new(235.0, 175.0), displayed).as_deref(), Some("2"));
		assert_eq!(state.click(Point::new(235.0, 300.0), displayed), None);
	}

	#[test]
	fn test_hit_test_outside_every_box() {
		let state = AnnotationState::seeded();
		for p in [
			Point::new(0.0, 0.0),
			Point::new(399.0, 230.0),
			Point::new(541.0, 230.0),
			Point::new(470.0, 270.0),
		] {
			assert_eq!(state.hit_test(p), None, "unexpected hit at {:?}", p);
		}
	}

	#[test]
	fn test_pixel_space_is_identity() {
		let state = AnnotationState::seeded();
		let p = Point::new(470.0, 230.0);
		assert_eq!(state.to_screen(p), p);
		assert_eq!(state.from_screen(p), p);
	}

	#[test]
	fn test_select_unknown_clears() {
		let mut state = AnnotationState::seeded();
		state.select(Some("2"));
		state.select(Some("missing"));
		assert_eq!(state.selected, None);
	}

	#[test]
	fn test_scene_draws_relationships_first() {
		let state = AnnotationState::seeded();
		let scene = state.scene();
		assert!(matches!(scene.commands[0], DrawCommand::Clear(_)));
		let first_line = scene
			.iter()
			.position(|c| matches!(c, DrawCommand::Line { .. }))
			.unwrap();
		let first_box = scene
			.iter()
			.position(|c| matches!(c, DrawCommand::RoundRect { .. }))
			.unwrap();
		assert!(first_line < first_box);
		assert_eq!(texts(&scene), vec!["1-of", "Municipal", "Law", "Regulation"]);
	}

	#[test]
	fn test_relationship_geometry() {
		let state = AnnotationState::seeded();
		let scene = state.scene();
		let Some(DrawCommand::Line { from, to, .. }) =
			scene.iter().find(|c| matches!(c, DrawCommand::Line { .. }))
		else {
			panic!("no relationship line");
		};
		assert_eq!(*from, Point::new(470.0, 230.0));
		assert_eq!(*to, Point::new(470.0, 320.0));
	}

	#[test]
	fn test_connection_dot_only_when_connected_or_selected() {
		let mut state = AnnotationState::seeded();
		// entity 1 has an outgoing connection, entity 2 does not
		assert_eq!(circles(&state.scene()), 2);
		state.select(Some("2"));
		assert_eq!(circles(&state.scene()), 4);
	}

	#[test]
	fn test_selected_entity_outlined() {
		let mut state = AnnotationState::seeded();
		state.select(Some("1"));
		let outlined: Vec<_> = state
			.scene()
			.commands
			.into_iter()
			.filter_map(|c| match c {
				DrawCommand::RoundRect { outline, fill, .. } => Some((fill, outline.is_some())),
				_ => None,
			})
			.collect();
		assert_eq!(outlined, vec![("#4ADE80", true), ("#94A3B8", false)]);
	}

	#[test]
	fn test_dangling_relationship_skipped() {
		let mut state = AnnotationState::seeded();
		state
			.relationships
			.push(Relationship::new("r2", "2", "ghost", "part-of"));
		let scene = state.scene();
		let lines = scene
			.iter()
			.filter(|c| matches!(c, DrawCommand::Line { .. }))
			.count();
		assert_eq!(lines, 1);
		assert!(!texts(&scene).contains(&"part-of"));
	}

	#[test]
	fn test_summary() {
		assert_eq!(AnnotationState::seeded().summary(), "2 entities • 1 relationship");
	}
}
