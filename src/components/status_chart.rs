//! Status Chart Component
//!
//! Pie chart of the four status buckets using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{bucket_counts, GlobalState, JobStatus};

/// Pie chart of job counts per status bucket
#[component]
pub fn StatusChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the snapshot changes
    let jobs = state.jobs;
    create_effect(move |_| {
        let counts = bucket_counts(&jobs.get());

        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &counts);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full h-64 md:h-72 rounded-lg"
            />

            <ChartLegend />
        </div>
    }
}

/// Legend showing every bucket with its count, zero or not
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let jobs = state.jobs;

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                bucket_counts(&jobs.get())
                    .into_iter()
                    .map(|(status, count)| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", status.color())
                                />
                                <span class="text-sm text-gray-300">
                                    {format!("{}: {}", status.label(), count)}
                                </span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Draw the pie chart on canvas
fn draw_pie(canvas: &HtmlCanvasElement, counts: &[(JobStatus, usize); 4]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let total: usize = counts.iter().map(|(_, n)| n).sum();

    if total == 0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No applications yet", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 24.0;
    let tau = std::f64::consts::PI * 2.0;

    // Slices start at twelve o'clock
    let mut start = -std::f64::consts::PI / 2.0;

    for (status, count) in counts {
        if *count == 0 {
            continue;
        }

        let end = start + (*count as f64 / total as f64) * tau;

        ctx.set_fill_style(&status.color().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Count label at the middle of the slice
        let mid = (start + end) / 2.0;
        let label_x = cx + mid.cos() * radius * 0.65;
        let label_y = cy + mid.sin() * radius * 0.65;

        ctx.set_fill_style(&"#ffffff".into());
        ctx.set_font("bold 14px sans-serif");
        let _ = ctx.fill_text(&count.to_string(), label_x - 4.0, label_y + 5.0);

        start = end;
    }
}
