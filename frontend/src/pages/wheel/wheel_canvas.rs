use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use shared::shared_wheel_game::segment_angle;
use shared::PrizeList;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

const SEGMENT_COLORS: [&str; 2] = ["#FFFFFF", "#FEE2E2"];
const LABEL_COLOR: &str = "#be123c";
const LABEL_FONT: &str = "bold 15px 'Segoe UI', Roboto, system-ui, sans-serif";

#[derive(Clone, Copy, PartialEq)]
enum ImageStatus {
    Loading,
    Ready,
    Failed,
}

struct CachedImage {
    element: HtmlImageElement,
    status: Rc<Cell<ImageStatus>>,
    _listeners: [EventListener; 2],
}

/// Segment images keyed by URL. Entries whose URL left the wheel are dropped
/// so revoked object URLs are not drawn.
#[derive(Default)]
struct ImageCache {
    images: HashMap<String, CachedImage>,
}

impl ImageCache {
    fn sync(&mut self, prizes: &PrizeList, on_settled: &Callback<()>) {
        let wanted: Vec<&str> = prizes
            .entries()
            .iter()
            .filter_map(|entry| entry.image.as_ref().map(|image| image.url()))
            .collect();
        self.images.retain(|url, _| wanted.contains(&url.as_str()));

        for url in wanted {
            if self.images.contains_key(url) {
                continue;
            }
            let element = match HtmlImageElement::new() {
                Ok(element) => element,
                Err(e) => {
                    warn!("Could not create image element: {:?}", e);
                    continue;
                }
            };
            let status = Rc::new(Cell::new(ImageStatus::Loading));
            let loaded = {
                let status = status.clone();
                let on_settled = on_settled.clone();
                EventListener::new(&element, "load", move |_| {
                    status.set(ImageStatus::Ready);
                    on_settled.emit(());
                })
            };
            let failed = {
                let status = status.clone();
                let on_settled = on_settled.clone();
                let url = url.to_string();
                EventListener::new(&element, "error", move |_| {
                    warn!("Image {} failed to decode, drawing text only", url);
                    status.set(ImageStatus::Failed);
                    on_settled.emit(());
                })
            };
            element.set_src(url);
            self.images.insert(
                url.to_string(),
                CachedImage {
                    element,
                    status,
                    _listeners: [loaded, failed],
                },
            );
        }
    }

    fn ready(&self, url: &str) -> Option<&HtmlImageElement> {
        self.images
            .get(url)
            .filter(|cached| cached.status.get() == ImageStatus::Ready)
            .map(|cached| &cached.element)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_label(context: &CanvasRenderingContext2d, name: &str, x: f64) {
    // Two-word names break onto two lines.
    let lines: Vec<&str> = match name.split_once(' ') {
        Some((first, rest)) => vec![first, rest],
        None => vec![name],
    };
    let line_height = 16.0;
    let top = -(lines.len() as f64 - 1.0) * line_height / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let _ = context.fill_text(line, x, top + i as f64 * line_height);
    }
}

fn draw_wheel(canvas: &HtmlCanvasElement, prizes: &PrizeList, rotation: f64, images: &ImageCache) {
    let Some(context) = context_2d(canvas) else {
        warn!("Canvas 2d context unavailable");
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 20.0;
    let segment = segment_angle(prizes.len()).to_radians();

    context.clear_rect(0.0, 0.0, width, height);
    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation.to_radians());

    for (i, entry) in prizes.entries().iter().enumerate() {
        // Segments run clockwise starting at the pointer (12 o'clock).
        let start = i as f64 * segment - PI / 2.0;
        context.begin_path();
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, start + segment);
        context.close_path();
        context.set_fill_style_str(SEGMENT_COLORS[i % SEGMENT_COLORS.len()]);
        context.fill();
        context.set_stroke_style_str("#d1d5db");
        context.set_line_width(1.5);
        context.stroke();

        context.save();
        let _ = context.rotate(start + segment / 2.0);
        context.set_fill_style_str(LABEL_COLOR);
        context.set_font(LABEL_FONT);
        context.set_text_align("center");
        context.set_text_baseline("middle");

        let image = entry.image.as_ref().and_then(|image| images.ready(image.url()));
        match image {
            Some(element) => {
                let size = radius * 0.3;
                let x = radius * 0.78 - size / 2.0;
                let drawn = context.draw_image_with_html_image_element_and_dw_and_dh(element, x, -size / 2.0, size, size);
                if let Err(e) = drawn {
                    warn!("Could not draw image for '{}': {:?}", entry.name, e);
                }
                draw_label(&context, &entry.name, radius * 0.42);
            }
            None => draw_label(&context, &entry.name, radius * 0.6),
        }
        context.restore();
    }
    context.restore();

    // Rim
    context.begin_path();
    context.set_stroke_style_str("#d1d5db");
    context.set_line_width(4.0);
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.stroke();

    // Fixed pointer at the top
    context.begin_path();
    context.move_to(center_x - 20.0, center_y - radius - 24.0);
    context.line_to(center_x + 20.0, center_y - radius - 24.0);
    context.line_to(center_x, center_y - radius + 10.0);
    context.close_path();
    context.set_fill_style_str("#dc2626");
    context.fill();
}

struct SpinAnimation {
    canvas: NodeRef,
    prizes: PrizeList,
    images: Rc<RefCell<ImageCache>>,
    angle: Rc<RefCell<f64>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    animating: Rc<RefCell<bool>>,
    from: f64,
    to: f64,
    duration_ms: f64,
}

fn animate(spin: Rc<SpinAnimation>, started_at: Option<f64>) {
    let next = spin.clone();
    let handle = request_animation_frame(move |now| {
        let started_at = started_at.unwrap_or(now);
        let progress = if next.duration_ms > 0.0 {
            ((now - started_at) / next.duration_ms).min(1.0)
        } else {
            1.0
        };
        let angle = next.from + (next.to - next.from) * ease_out_cubic(progress);
        *next.angle.borrow_mut() = angle;
        if let Some(canvas) = next.canvas.cast::<HtmlCanvasElement>() {
            draw_wheel(&canvas, &next.prizes, angle, &next.images.borrow());
        }
        if progress < 1.0 {
            animate(next, Some(started_at));
        } else {
            *next.animating.borrow_mut() = false;
        }
    });
    *spin.frame.borrow_mut() = Some(handle);
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: PrizeList,
    /// Cumulative rotation in degrees the wheel should come to rest at.
    pub rotation: f64,
    pub duration_ms: u32,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let angle = {
        let rest = props.rotation;
        use_mut_ref(move || rest)
    };
    let frame = use_mut_ref(|| None::<AnimationFrame>);
    let animating = use_mut_ref(|| false);
    let images = use_mut_ref(ImageCache::default);
    let redraw = use_force_update();

    {
        let on_settled = Callback::from(move |_| redraw.force_update());
        images.borrow_mut().sync(&props.prizes, &on_settled);
    }

    // Redraw at rest on every render (prize edits, image loads).
    {
        let canvas_ref = canvas_ref.clone();
        let prizes = props.prizes.clone();
        let images = images.clone();
        let angle = angle.clone();
        let animating = animating.clone();
        use_effect(move || {
            if !*animating.borrow() {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_wheel(&canvas, &prizes, *angle.borrow(), &images.borrow());
                }
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let prizes = props.prizes.clone();
        let images = images.clone();
        let angle = angle.clone();
        let frame = frame.clone();
        let duration_ms = props.duration_ms as f64;
        use_effect_with(props.rotation, move |target| {
            let from = *angle.borrow();
            if (*target - from).abs() > f64::EPSILON {
                *animating.borrow_mut() = true;
                let spin = Rc::new(SpinAnimation {
                    canvas: canvas_ref,
                    prizes,
                    images,
                    angle,
                    frame: frame.clone(),
                    animating: animating.clone(),
                    from,
                    to: *target,
                    duration_ms,
                });
                animate(spin, None);
            }
            move || {
                frame.borrow_mut().take();
                *animating.borrow_mut() = false;
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="450"
            height="450"
            class="w-full max-w-[450px] h-auto"
            style={if props.is_spinning {
                "filter: drop-shadow(0px 5px 20px rgba(220, 38, 38, 0.4));"
            } else {
                "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
            }}
        />
    }
}

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
