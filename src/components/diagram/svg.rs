use leptos::prelude::*;

use super::scene::{DrawCommand, Scene, Stroke, TextAlign};

fn dasharray(stroke: &Stroke) -> Option<String> {
	stroke.dash.map(|(dash, gap)| format!("{},{}", dash, gap))
}

fn points_attr(points: &[kurbo::Point]) -> String {
	points
		.iter()
		.map(|p| format!("{},{}", p.x, p.y))
		.collect::<Vec<_>>()
		.join(" ")
}

fn command_view(cmd: DrawCommand) -> AnyView {
	match cmd {
		// An SVG overlay has nothing to clear; it is rebuilt from the scene.
		DrawCommand::Clear(_) => ().into_any(),
		DrawCommand::Line { from, to, stroke } => {
			let dash = dasharray(&stroke);
			view! {
				<line
					x1=from.x.to_string()
					y1=from.y.to_string()
					x2=to.x.to_string()
					y2=to.y.to_string()
					stroke=stroke.color
					stroke-width=stroke.width.to_string()
					stroke-dasharray=dash
				/>
			}
			.into_any()
		}
		DrawCommand::Polygon { points, fill } => {
			view! { <polygon points=points_attr(&points) fill=fill /> }.into_any()
		}
		DrawCommand::RoundRect {
			rect,
			radius,
			fill,
			outline,
		} => {
			let (stroke, width) = outline
				.map(|s| (Some(s.color), Some(s.width.to_string())))
				.unwrap_or((None, None));
			view! {
				<rect
					x=rect.x0.to_string()
					y=rect.y0.to_string()
					width=rect.width().to_string()
					height=rect.height().to_string()
					rx=radius.to_string()
					fill=fill
					stroke=stroke
					stroke-width=width
				/>
			}
			.into_any()
		}
		DrawCommand::Circle {
			center,
			radius,
			fill,
		} => view! { <circle cx=center.x.to_string() cy=center.y.to_string() r=radius.to_string() fill=fill /> }.into_any(),
		DrawCommand::Text {
			at,
			text,
			font,
			color,
			align,
		} => {
			let anchor = match align {
				TextAlign::Left => "start",
				TextAlign::Center => "middle",
			};
			view! {
				<text x=at.x.to_string() y=at.y.to_string() fill=color text-anchor=anchor style=format!("font: {}", font)>
					{text}
				</text>
			}
			.into_any()
		}
	}
}

/// Renders a scene as an SVG overlay stretched over its positioned parent.
/// The scene is re-read whenever the signal it depends on changes.
#[component]
pub fn SvgScene(#[prop(into)] scene: Signal<Scene>) -> impl IntoView {
	view! {
		<svg class="diagram-overlay" style="position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none;">
			{move || scene.get().commands.into_iter().map(command_view).collect_view()}
		</svg>
	}
}
