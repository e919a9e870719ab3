//! Component palette: draggable node kinds for the pipeline canvas.

use leptos::prelude::*;
use web_sys::DragEvent;

use super::state::PipelineState;
use super::types::NodeKind;

const INSTRUCTIONS: &[&str] = &[
	"Drag components onto canvas",
	"Click nodes to configure",
	"Drag from Object to connect",
	"Each node has 1 output",
];

#[component]
pub fn ComponentPalette(state: RwSignal<PipelineState>) -> impl IntoView {
	let items = NodeKind::ALL
		.into_iter()
		.map(|kind| {
			view! {
				<div
					class=format!("palette-item {}", kind.as_str())
					draggable="true"
					on:dragstart=move |ev: DragEvent| {
						if let Some(dt) = ev.data_transfer() {
							let _ = dt.set_data("text/plain", kind.as_str());
						}
						state.update(|s| s.begin_palette_drag(kind));
					}
					on:dragend=move |_: DragEvent| state.update(|s| s.cancel_palette_drag())
				>
					<span>{kind.palette_label()}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<aside class="palette">
			<h3>"Components"</h3>
			<div class="palette-items">{items}</div>
			<h4>"Instructions"</h4>
			<ul class="palette-instructions">
				{INSTRUCTIONS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
			</ul>
		</aside>
	}
}
