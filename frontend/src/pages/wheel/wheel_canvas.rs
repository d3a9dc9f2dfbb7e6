use yew::prelude::*;
use web_sys::{HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::{JsCast, JsValue};
use std::f64::consts::PI;
use shared::swirl::{Swirl, SwirlStyle, TRAIL_FADE_ALPHA};

const INK: &str = "#201c1a";
const CREAM: &str = "#fff9e8";
const RIM: &str = "#f6d86b";
const CAP_TEXT: &str = "#EA4B62";

/// Everything the painter needs for one frame. Read-only view of engine state.
pub struct WheelFrame<'a> {
    pub angle: f64,
    pub velocity: f64,
    pub spinning: bool,
    pub colors: &'a [String],
    pub dpr: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Paints the swirl wheel rotated by `frame.angle`.
///
/// While spinning the previous frame is only faded, leaving motion trails;
/// at rest the canvas is fully cleared.
pub fn paint_wheel(canvas: &HtmlCanvasElement, frame: &WheelFrame) -> Result<(), JsValue> {
    let context = context_2d(canvas)?;
    let dpr = frame.dpr;

    // Work in CSS pixels
    context.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    let width = canvas.width() as f64 / dpr;
    let height = canvas.height() as f64 / dpr;
    let center_x = width / 2.0;
    let center_y = height / 2.0 + 20.0;
    let radius = width / 2.0 * 0.82;

    if frame.spinning {
        context.set_global_composite_operation("source-over")?;
        context.set_fill_style_str(&format!("rgba(255, 249, 232, {})", TRAIL_FADE_ALPHA));
        context.fill_rect(0.0, 0.0, width, height);
    } else {
        context.clear_rect(0.0, 0.0, width, height);
    }

    // Candy rim
    context.begin_path();
    context.arc(center_x, center_y, radius + 10.0, 0.0, 2.0 * PI)?;
    context.set_fill_style_str(RIM);
    context.fill();
    context.set_line_width(6.0);
    context.set_stroke_style_str(INK);
    context.stroke();

    context.save();
    context.translate(center_x, center_y)?;
    context.rotate(frame.angle)?;

    // Keep the stripes inside the disk
    context.begin_path();
    context.arc(0.0, 0.0, radius, 0.0, 2.0 * PI)?;
    context.clip();

    let style = SwirlStyle::for_velocity(frame.velocity);
    context.set_global_alpha(style.alpha);
    let swirl = Swirl::new(radius);
    for quad in swirl.quads(style, frame.colors.len()) {
        if let Some(color) = frame.colors.get(quad.color_index) {
            context.set_fill_style_str(color);
        }
        let [a, b, c, d] = quad.corners;
        context.begin_path();
        context.move_to(a.0, a.1);
        context.line_to(b.0, b.1);
        context.line_to(c.0, c.1);
        context.line_to(d.0, d.1);
        context.close_path();
        context.fill();
    }
    context.restore();

    context.save();
    context.translate(center_x, center_y)?;
    context.rotate(frame.angle)?;
    context.set_global_alpha(1.0);

    // Outline
    context.set_line_width(4.0);
    context.set_stroke_style_str(INK);
    context.begin_path();
    context.arc(0.0, 0.0, radius, 0.0, 2.0 * PI)?;
    context.stroke();

    // Center cap
    context.set_fill_style_str(CREAM);
    context.set_line_width(3.0);
    context.begin_path();
    context.arc(0.0, 0.0, radius * 0.18, 0.0, 2.0 * PI)?;
    context.fill();
    context.stroke();

    context.set_fill_style_str(CAP_TEXT);
    context.set_font(&format!("{}px system-ui, sans-serif", (radius * 0.12).round()));
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text("SPIN", 0.0, 0.0)?;
    context.restore();

    paint_pointer(&context, center_x, center_y - radius - 6.0);
    Ok(())
}

// Fixed at 12 o'clock, pointing down onto the rim
fn paint_pointer(context: &CanvasRenderingContext2d, tip_x: f64, tip_y: f64) {
    let half_width = 14.0;
    let height = 26.0;
    context.begin_path();
    context.move_to(tip_x, tip_y);
    context.line_to(tip_x - half_width, tip_y - height);
    context.line_to(tip_x + half_width, tip_y - height);
    context.close_path();
    context.set_fill_style_str(CAP_TEXT);
    context.fill();
    context.set_line_width(3.0);
    context.set_stroke_style_str(INK);
    context.stroke();
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub canvas_ref: NodeRef,
    pub size: u32,
    pub dpr: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    // Backing store in device pixels, layout size in CSS pixels
    let backing = (props.size as f64 * props.dpr).round() as u32;
    let style = format!(
        "width: {size}px; height: {size}px; max-width: 100%; {}",
        if props.is_spinning {
            "filter: drop-shadow(0px 5px 20px rgba(234, 75, 98, 0.35));"
        } else {
            "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
        },
        size = props.size,
    );

    html! {
        <div class="relative flex justify-center">
            <canvas
                ref={props.canvas_ref.clone()}
                width={backing.to_string()}
                height={backing.to_string()}
                class="h-auto transition-all duration-300"
                style={style}
            />
        </div>
    }
}
