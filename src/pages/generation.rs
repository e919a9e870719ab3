use std::time::Duration;

use leptos::prelude::*;
use log::{debug, info};

use crate::components::generation::{
	AUGMENTATIONS, DataType, GenerationConfig, GenerationStatus, Quality,
};

/// (file, resolution, variant)
const SAMPLES: &[(&str, &str, &str)] = &[
	("vehicle_001.jpg", "1920x1080", "Augmented"),
	("vehicle_002.jpg", "1920x1080", "Augmented"),
	("vehicle_003.jpg", "1920x1080", "Original"),
	("vehicle_004.jpg", "1920x1080", "Augmented"),
];

/// Applies one timer tick and returns the delay before the next one.
///
/// Returns `None` once the run is back on idle, or once the page has been
/// unmounted and its signal disposed.
fn tick(status: RwSignal<GenerationStatus>) -> Option<Duration> {
	if status.try_update(|s| *s = s.advance()).is_none() {
		debug!("generation page gone, dropping timer");
		return None;
	}
	status.try_get_untracked()?.duration()
}

/// Advances `status` on its fixed timer until it settles back on idle.
fn schedule(status: RwSignal<GenerationStatus>, after: Duration) {
	set_timeout(
		move || {
			if let Some(next) = tick(status) {
				schedule(status, next);
			}
		},
		after,
	);
}

#[component]
pub fn Generation() -> impl IntoView {
	let config = RwSignal::new(GenerationConfig::default());
	let status = RwSignal::new(GenerationStatus::default());

	let on_generate = move |_: leptos::ev::MouseEvent| {
		let Some(next) = status.get_untracked().start() else {
			return;
		};
		config.with_untracked(|c| {
			info!(
				"generating {} {} samples ({}, split {})",
				c.samples,
				c.data_type.name(),
				c.quality.as_str(),
				c.validation_percent()
			)
		});
		status.set(next);
		if let Some(after) = next.duration() {
			schedule(status, after);
		}
	};

	let data_types = DataType::ALL
		.into_iter()
		.map(|dt| {
			view! {
				<button
					class=move || {
						if config.with(|c| c.data_type == dt) { "data-type active" } else { "data-type" }
					}
					on:click=move |_| config.update(|c| c.data_type = dt)
				>
					{dt.name()}
				</button>
			}
		})
		.collect_view();

	let qualities = Quality::ALL
		.into_iter()
		.map(|q| {
			view! {
				<button
					class=move || if config.with(|c| c.quality == q) { "quality active" } else { "quality" }
					on:click=move |_| config.update(|c| c.quality = q)
				>
					{q.as_str()}
				</button>
			}
		})
		.collect_view();

	let augmentations = AUGMENTATIONS
		.iter()
		.map(|&(name, enabled)| {
			view! {
				<li class=move || {
					if enabled && config.with(|c| c.augmentation) { "aug on" } else { "aug off" }
				}>{name}</li>
			}
		})
		.collect_view();

	let samples = SAMPLES
		.iter()
		.map(|&(file, res, variant)| {
			view! { <div class="sample-card">{format!("{} • {} • {}", file, res, variant)}</div> }
		})
		.collect_view();

	view! {
		<div class="generation-page">
			<h1>"Dataset Generation"</h1>
			<p>"Generate synthetic datasets with advanced augmentation and quality validation"</p>

			<div class="data-types">{data_types}</div>

			<div class="generation-form">
				<label>
					"Number of Samples"
					<input
						type="range"
						min="100"
						max="10000"
						step="100"
						prop:value=move || config.with(|c| c.samples.to_string())
						on:input=move |ev| {
							if let Ok(n) = event_target_value(&ev).parse::<u32>() {
								config.update(|c| c.samples = n);
							}
						}
					/>
					<span>{move || config.with(|c| c.samples.to_string())}</span>
				</label>

				<div class="qualities">{qualities}</div>

				<label>
					{move || format!("Validation Split: {}", config.with(|c| c.validation_percent()))}
					<input
						type="range"
						min="0.1"
						max="0.5"
						step="0.05"
						prop:value=move || config.with(|c| c.validation_split.to_string())
						on:input=move |ev| {
							if let Ok(split) = event_target_value(&ev).parse::<f64>() {
								config.update(|c| c.set_validation_split(split));
							}
						}
					/>
				</label>

				<label>
					<input
						type="checkbox"
						prop:checked=move || config.with(|c| c.augmentation)
						on:change=move |ev| config.update(|c| c.augmentation = event_target_checked(&ev))
					/>
					"Enable Augmentation"
				</label>
				<ul class="augmentations">{augmentations}</ul>

				<button
					class="primary"
					disabled=move || status.get() != GenerationStatus::Idle
					on:click=on_generate
				>
					{move || status.get().button_label()}
				</button>
			</div>

			<div class="samples">{samples}</div>
		</div>
	}
}
