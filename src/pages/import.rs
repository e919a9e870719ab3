use leptos::prelude::*;

use crate::components::pipeline::{ComponentPalette, ConfigPanel, PipelineCanvas, PipelineState};

/// Bulk import pipeline builder. State lives for as long as the page is
/// mounted; "Run Pipeline" is decorative.
#[component]
pub fn Import() -> impl IntoView {
	let state = RwSignal::new(PipelineState::seeded());

	view! {
		<div class="import-page">
			<div class="top-bar">
				<h2>"Massive Upload"</h2>
				<span class="crumb">"university"</span>
				<span class="crumb">"Project - university"</span>
				<button class="primary">"Run Pipeline"</button>
			</div>
			<div class="import-grid">
				<ComponentPalette state=state />
				<PipelineCanvas state=state />
				<ConfigPanel state=state />
			</div>
		</div>
	}
}
