use leptos::prelude::*;
use leptos_router::components::A;

struct Stat {
	label: &'static str,
	value: &'static str,
	change: &'static str,
}

const STATS: &[Stat] = &[
	Stat { label: "Total Datasets", value: "2,847", change: "+12%" },
	Stat { label: "Labels Created", value: "1.2M", change: "+23%" },
	Stat { label: "Active Users", value: "156", change: "+8%" },
	Stat { label: "Completion Rate", value: "94.2%", change: "+5%" },
];

/// (action, name, time, status)
const ACTIVITY: &[(&str, &str, &str, &str)] = &[
	("Dataset imported", "vehicle_detection_v2.zip", "5 min ago", "completed"),
	("Labeling completed", "medical_images_batch_3", "12 min ago", "completed"),
	("Dataset generated", "text_classification_v4", "1 hour ago", "completed"),
	("Import in progress", "s3://ml-datasets/new_batch", "2 hours ago", "processing"),
];

/// (title, description, route)
const WORKFLOWS: &[(&str, &str, &str)] = &[
	(
		"Massive Import",
		"Import large datasets from S3, GCS, or local storage with parallel processing",
		"/import",
	),
	(
		"Dataset Generation",
		"Generate synthetic datasets at scale with advanced augmentation and validation",
		"/generation",
	),
	(
		"Labeling Studio",
		"Professional annotation tools for images, text, video, and audio with ML-assisted labeling",
		"/studio",
	),
];

/// Dashboard with illustrative, hard-coded figures.
#[component]
pub fn Home() -> impl IntoView {
	let stats = STATS
		.iter()
		.map(|stat| {
			view! {
				<div class="stat-card">
					<span class="stat-change">{stat.change}</span>
					<div class="stat-value">{stat.value}</div>
					<div class="stat-label">{stat.label}</div>
				</div>
			}
		})
		.collect_view();

	let activity = ACTIVITY
		.iter()
		.map(|&(action, name, time, status)| {
			view! {
				<li class=format!("activity {}", status)>
					<strong>{action}</strong>
					<span>{name}</span>
					<time>{time}</time>
				</li>
			}
		})
		.collect_view();

	let workflows = WORKFLOWS
		.iter()
		.map(|&(title, description, href)| {
			view! {
				<A href=href attr:class="workflow-card">
					<h3>{title}</h3>
					<p>{description}</p>
				</A>
			}
		})
		.collect_view();

	view! {
		<section class="hero">
			<h1>"Scale Your ML Operations "<span class="accent">"Without Limits"</span></h1>
			<p class="subtitle">
				"Enterprise data labeling platform designed for on-premise deployment. Process millions of data points with complete control, security, and scalability."
			</p>
		</section>
		<section class="stats">{stats}</section>
		<section class="workflows">{workflows}</section>
		<section class="recent-activity">
			<h2>"Recent Activity"</h2>
			<ul>{activity}</ul>
		</section>
	}
}
