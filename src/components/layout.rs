use leptos::prelude::*;
use leptos_router::components::A;

struct NavItem {
	label: &'static str,
	href: &'static str,
	external: bool,
}

const NAV_ITEMS: &[NavItem] = &[
	NavItem { label: "Dashboard", href: "/", external: false },
	NavItem { label: "Massive Import", href: "/import", external: false },
	NavItem { label: "Dataset Generation", href: "/generation", external: false },
	NavItem { label: "Labeling Studio", href: "/studio", external: false },
	NavItem { label: "Blog", href: "https://blog.igot.ai", external: true },
	NavItem { label: "Docs", href: "https://doc.igot.ai", external: true },
];

const RESOURCE_LINKS: &[(&str, &str)] = &[
	("Documentation", "https://doc.igot.ai"),
	("API Reference", "https://doc.igot.ai/api"),
	("Community", "https://community.igot.ai"),
];

/// Header navigation, page body and footer shared by every route.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
	let links = NAV_ITEMS
		.iter()
		.map(|item| {
			if item.external {
				view! {
					<a href=item.href target="_blank" rel="noopener noreferrer" class="nav-link external">
						{item.label}
					</a>
				}
				.into_any()
			} else {
				view! {
					<A href=item.href attr:class="nav-link">
						{item.label}
					</A>
				}
				.into_any()
			}
		})
		.collect_view();

	let resources = RESOURCE_LINKS
		.iter()
		.map(|&(label, href)| {
			view! {
				<li>
					<a href=href target="_blank" rel="noopener noreferrer">{label}</a>
				</li>
			}
		})
		.collect_view();
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<header class="app-header">
			<span class="brand">"iGOT.ai"</span>
			<nav>{links}</nav>
		</header>
		<main class="app-main">{children()}</main>
		<footer class="app-footer">
			<ul class="footer-resources">{resources}</ul>
			<p>"© "{year}" iGOT.ai. All rights reserved."</p>
		</footer>
	}
}
