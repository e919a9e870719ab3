use leptos::prelude::*;

use crate::components::annotation::{AnnotationCanvas, AnnotationState};

const TOTAL_TASKS: u32 = 1;
const TOTAL_PAGES: u32 = 10;

const ARTICLE_ITEMS: &[&str] = &[
	"Manage the municipality's revenues, funds, and expenditures; and monitor its accounts and protect its rights.",
	"Prepare a comprehensive bi-annual report on the municipality's activities, and submit it to the municipal council.",
	"Prepare the municipal draft budget and plans of projects to be implemented during the following fiscal year and submit the same to the municipal council.",
	"Implement the budget.",
	"Prepare the final accounts for the ending fiscal year and submit the same to the municipal council.",
	"Conclude contracts.",
	"Monitor projects implemented for the municipality and approve receipt thereof.",
];

/// Labeling studio: source text on the left, entity graph on the right.
#[component]
pub fn Studio() -> impl IntoView {
	let state = RwSignal::new(AnnotationState::seeded());
	let task = RwSignal::new(1u32);
	let page = 7u32;

	let items = ARTICLE_ITEMS
		.iter()
		.enumerate()
		.map(|(i, text)| view! { <li><span class="num">{i + 1}"."</span>{*text}</li> })
		.collect_view();

	view! {
		<div class="studio-page">
			<div class="top-bar">
				<button
					disabled=move || task.get() <= 1
					on:click=move |_| task.update(|t| *t = t.saturating_sub(1).max(1))
				>
					"‹"
				</button>
				<span>{move || format!("Task {} of {}", task.get(), TOTAL_TASKS)}</span>
				<button
					disabled=move || task.get() >= TOTAL_TASKS
					on:click=move |_| task.update(|t| *t = (*t + 1).min(TOTAL_TASKS))
				>
					"›"
				</button>
				<span class="task-id">"Task ID: d73946a5b"</span>
			</div>

			<div class="studio-grid">
				<section class="chunk">
					<h3>"Chunk"</h3>
					<span class="badge">"Article 28"</span>
					<p>
						"The head of the municipality shall, in his capacity as the chief executive officer, take all measures necessary to ensure that the municipality performs its duties in accordance with the Law and other laws, regulations, and decisions, particularly the following:"
					</p>
					<ol>{items}</ol>
					<button class="primary">"Highlight Entities"</button>
				</section>

				<section class="graph">
					<div class="graph-header">
						<h3>"Entity-Relationship Graph"</h3>
						<p>"Establish the ent-relationship tree for the laws."</p>
						<p class="summary">{move || state.with(|s| s.summary())}</p>
						<button>"Add Entity"</button>
					</div>
					<div class="graph-body">
						<AnnotationCanvas state=state />
						<div class="page-counter">{format!("Page {} / {}", page, TOTAL_PAGES)}</div>
					</div>
					<div class="action-bar">
						<button>"Instructions"</button>
						<button>"Skip"</button>
						<button class="primary">"Submit"</button>
					</div>
				</section>
			</div>
		</div>
	}
}
