use kurbo::{Point, Size};
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::state::AnnotationState;
use crate::components::diagram::{Diagram, render};

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
}

/// Fixed-size entity graph canvas. The canvas keeps its native pixel size
/// while CSS stretches it over the document preview.
#[component]
pub fn AnnotationCanvas(state: RwSignal<AnnotationState>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let native = state.with_untracked(|s| s.config().native_size);

	// Redraws whenever entities, relationships or the selection change.
	Effect::new(move |_| {
		let scene = state.with(|s| s.scene());
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = context_2d(&canvas) else {
			warn!("2d context unavailable");
			return;
		};
		render(&scene, &ctx);
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let pointer = Point::new(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);
		let displayed = Size::new(rect.width(), rect.height());
		state.update(|s| {
			s.click(pointer, displayed);
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="annotation-canvas"
			width=native.width.to_string()
			height=native.height.to_string()
			on:click=on_click
			style="display: block; width: 100%; height: 100%; cursor: pointer;"
		/>
	}
}
