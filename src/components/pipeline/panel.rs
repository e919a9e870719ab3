use leptos::prelude::*;

use super::state::PipelineState;

/// Side panel editing the selected node's display fields.
#[component]
pub fn ConfigPanel(state: RwSignal<PipelineState>) -> impl IntoView {
	let options = move || {
		state.with(|s| {
			s.collection_options()
				.into_iter()
				.map(|label| {
					let selected = s.form.collection == label;
					view! {
						<option value=label.clone() selected=selected>
							{label.clone()}
						</option>
					}
				})
				.collect_view()
		})
	};

	let toggle_class = move || {
		if state.with(|s| s.form.edit_metadata) {
			"toggle on"
		} else {
			"toggle off"
		}
	};

	view! {
		<aside class="config-panel">
			<h3>"Configure Node"</h3>

			<label>"Name"</label>
			<input
				type="text"
				prop:value=move || state.with(|s| s.form.name.clone())
				on:input=move |ev| state.update(|s| s.set_form_name(event_target_value(&ev)))
			/>

			<label>"Collection (Catalog)"</label>
			<select on:change=move |ev| {
				state.update(|s| s.set_form_collection(event_target_value(&ev)))
			}>{options}</select>
			<p class="hint">"Select the target collection from your project"</p>

			<label>"Classification Instructions"</label>
			<textarea
				rows="4"
				placeholder="If required, give highest score to, we can proceed by hackathon..."
				prop:value=move || state.with(|s| s.form.instructions.clone())
				on:input=move |ev| {
					state.update(|s| s.set_form_instructions(event_target_value(&ev)))
				}
			/>
			<p class="hint">"Instructions for AI to classify documents belonging to this collection"</p>

			<label>"F-edit All Metadata"</label>
			<div class="toggle-row">
				<span>"Autopopulate metadata from all collections"</span>
				<button
					class=toggle_class
					on:click=move |_| state.update(|s| s.toggle_edit_metadata())
				/>
			</div>
		</aside>
	}
}
