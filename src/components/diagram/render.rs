use std::f64::consts::PI;

use kurbo::Rect;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{DrawCommand, Scene, Stroke};

/// Replays a scene onto a 2D canvas context, clearing nothing implicitly.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	for cmd in scene.iter() {
		draw(cmd, ctx);
	}
	ctx.set_text_align("left");
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw(cmd: &DrawCommand, ctx: &CanvasRenderingContext2d) {
	match cmd {
		DrawCommand::Clear(size) => ctx.clear_rect(0.0, 0.0, size.width, size.height),
		DrawCommand::Line { from, to, stroke } => {
			apply_stroke(stroke, ctx);
			ctx.begin_path();
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
			ctx.stroke();
		}
		DrawCommand::Polygon { points, fill } => {
			let Some((first, rest)) = points.split_first() else {
				return;
			};
			ctx.set_fill_style_str(fill);
			ctx.begin_path();
			ctx.move_to(first.x, first.y);
			for p in rest {
				ctx.line_to(p.x, p.y);
			}
			ctx.close_path();
			ctx.fill();
		}
		DrawCommand::RoundRect {
			rect,
			radius,
			fill,
			outline,
		} => {
			round_rect_path(*rect, *radius, ctx);
			ctx.set_fill_style_str(fill);
			ctx.fill();
			if let Some(stroke) = outline {
				apply_stroke(stroke, ctx);
				ctx.stroke();
			}
		}
		DrawCommand::Circle {
			center,
			radius,
			fill,
		} => {
			ctx.set_fill_style_str(fill);
			ctx.begin_path();
			let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
			ctx.fill();
		}
		DrawCommand::Text {
			at,
			text,
			font,
			color,
			align,
		} => {
			ctx.set_fill_style_str(color);
			ctx.set_font(font);
			ctx.set_text_align(align.as_str());
			let _ = ctx.fill_text(text, at.x, at.y);
		}
	}
}

fn apply_stroke(stroke: &Stroke, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(stroke.color);
	ctx.set_line_width(stroke.width);
	let dash = match stroke.dash {
		Some((dash, gap)) => js_sys::Array::of2(&JsValue::from_f64(dash), &JsValue::from_f64(gap)),
		None => js_sys::Array::new(),
	};
	let _ = ctx.set_line_dash(&dash);
}

fn round_rect_path(rect: Rect, radius: f64, ctx: &CanvasRenderingContext2d) {
	let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
	ctx.begin_path();
	ctx.move_to(rect.x0 + r, rect.y0);
	let _ = ctx.arc_to(rect.x1, rect.y0, rect.x1, rect.y1, r);
	let _ = ctx.arc_to(rect.x1, rect.y1, rect.x0, rect.y1, r);
	let _ = ctx.arc_to(rect.x0, rect.y1, rect.x0, rect.y0, r);
	let _ = ctx.arc_to(rect.x0, rect.y0, rect.x1, rect.y0, r);
	ctx.close_path();
}
