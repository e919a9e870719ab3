use kurbo::{Point, Size};
use leptos::prelude::*;
use log::warn;
use web_sys::{DragEvent, MouseEvent};

use super::state::PipelineState;
use super::types::NodeKind;
use crate::components::diagram::{Diagram, SvgScene};

const MINIMAP_SCALE: f64 = 0.4;

/// Stores a fresh canvas measurement, notifying only when it changed.
fn sync_size(state: RwSignal<PipelineState>, measured: Size) {
	if state.with_untracked(|s| s.needs_resize(measured)) {
		state.update(|s| s.resize(measured));
	}
}

/// Node canvas of the import pipeline builder.
///
/// Nodes are absolutely positioned in percent of the canvas box; the
/// connection overlay is an SVG scene rebuilt from the same state.
#[component]
pub fn PipelineCanvas(state: RwSignal<PipelineState>) -> impl IntoView {
	let container = NodeRef::<leptos::html::Div>::new();

	// Re-measures the canvas and returns the pointer in canvas pixels.
	let local_point = move |client_x: i32, client_y: i32| -> Option<Point> {
		let Some(el) = container.get_untracked() else {
			warn!("pipeline canvas is not mounted");
			return None;
		};
		let rect = el.get_bounding_client_rect();
		sync_size(state, Size::new(rect.width(), rect.height()));
		Some(Point::new(
			client_x as f64 - rect.left(),
			client_y as f64 - rect.top(),
		))
	};

	let measure = move || {
		if let Some(el) = container.get_untracked() {
			let rect = el.get_bounding_client_rect();
			sync_size(state, Size::new(rect.width(), rect.height()));
		}
	};

	Effect::new(move |_| {
		if container.get().is_some() {
			measure();
		}
	});
	let resize_handle = window_event_listener(leptos::ev::resize, move |_| measure());
	on_cleanup(move || resize_handle.remove());

	let on_mousedown = move |ev: MouseEvent| {
		let Some(p) = local_point(ev.client_x(), ev.client_y()) else {
			return;
		};
		state.update(|s| {
			if let Some(id) = s.hit_test(p).map(str::to_string) {
				s.begin_drag(&id, p);
			}
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		if !state.with_untracked(|s| s.drag.is_active()) {
			return;
		}
		if let Some(p) = local_point(ev.client_x(), ev.client_y()) {
			state.update(|s| s.update_drag(p));
		}
	};

	let on_drop = move |ev: DragEvent| {
		ev.prevent_default();
		let Some(p) = local_point(ev.client_x(), ev.client_y()) else {
			return;
		};
		let transferred = ev
			.data_transfer()
			.and_then(|dt| dt.get_data("text/plain").ok())
			.and_then(|kind| NodeKind::parse(&kind));
		state.update(|s| {
			if s.pending.is_none() {
				if let Some(kind) = transferred {
					s.begin_palette_drag(kind);
				}
			}
			s.drop_new_node(p);
		});
	};

	let scene = Signal::derive(move || state.with(|s| s.scene()));

	let nodes = move || {
		state.with(|s| {
			let size = s.config().node_size;
			s.nodes
				.iter()
				.map(|node| {
					let class = if s.is_selected(&node.id) {
						format!("{} selected", node.kind.css_class())
					} else {
						node.kind.css_class().to_string()
					};
					let style = format!(
						"position: absolute; left: {}%; top: {}%; width: {}px; height: {}px;",
						node.position.x, node.position.y, size.width, size.height
					);
					view! {
						<div class=class style=style>
							<div class="node-icon" />
							<div class="node-labels">
								<h4>{node.label.clone()}</h4>
								<p>{node.sublabel.clone()}</p>
							</div>
						</div>
					}
				})
				.collect_view()
		})
	};

	let minimap = move || {
		state.with(|s| {
			s.nodes
				.iter()
				.map(|node| {
					let style = format!(
						"position: absolute; left: {}%; top: {}%;",
						node.position.x * MINIMAP_SCALE,
						node.position.y * MINIMAP_SCALE
					);
					view! { <div class=format!("minimap-node {}", node.kind.as_str()) style=style /> }
				})
				.collect_view()
		})
	};

	view! {
		<div class="pipeline-canvas-area">
			<div
				node_ref=container
				class="pipeline-canvas"
				style="position: relative; cursor: default;"
				on:mousedown=on_mousedown
				on:mousemove=on_mousemove
				on:mouseup=move |_: MouseEvent| state.update(|s| s.end_drag())
				on:mouseleave=move |_: MouseEvent| state.update(|s| s.end_drag())
				on:dragover=move |ev: DragEvent| ev.prevent_default()
				on:drop=on_drop
			>
				<SvgScene scene=scene />
				{nodes}
			</div>
			<div class="minimap">{minimap}</div>
		</div>
	}
}
