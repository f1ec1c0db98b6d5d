use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::core::config::ChartConfig;
use crate::core::format;
use crate::core::inspect::InputEvent;
use crate::core::scene::{
    ChartScene, AXIS_LABEL_COLOR, GUIDE_COLOR, LINE_COLOR, MUTED_LINE_COLOR, MUTED_LINE_OPACITY,
};
use crate::core::series::{Period, SeriesStore};
use crate::core::{timing, ValueChart};

/// Width assumed until the surface has been measured (a typical phone).
const FALLBACK_WIDTH: f64 = 358.0;

type ChartState = Result<ValueChart, String>;

#[component]
pub fn ValueChartCard(values: Vec<f64>, config: ChartConfig) -> Element {
    let chart_height = config.height;
    let mut chart = use_signal(move || -> ChartState {
        SeriesStore::new(values, timing::today())
            .and_then(|store| ValueChart::new(store, config, FALLBACK_WIDTH, timing::now_ms()))
            .map_err(|err| err.to_string())
    });
    let clock = use_signal(timing::now_ms);
    let generation = use_signal(|| 0u64);
    let mut surface = use_signal(|| Option::<Rc<MountedData>>::None);

    use_effect(move || restart_frames(chart, clock, generation));

    // Re-read on each render so the scene follows the frame clock.
    let now = clock();
    let state = chart.read();
    let chart_ref = match &*state {
        Ok(chart_ref) => chart_ref,
        Err(err) => {
            return rsx! {
                section { class: "dashboard-card value-chart",
                    p { class: "dashboard-card__placeholder", "Portfolio history is unavailable: {err}" }
                }
            };
        }
    };

    let scene = chart_ref.scene(now);
    let selected = chart_ref.period();
    let summary = chart_ref.summary().ok();
    drop(state);

    rsx! {
        section { class: "dashboard-card value-chart",
            if let Some(summary) = summary {
                div { class: "value-chart__header",
                    p { class: "type-eyebrow", "Portfolio Value" }
                    div { class: "value-chart__headline",
                        span { class: "type-metric", "{format::format_number(summary.value)}" }
                        span { class: "type-unit", "EUR" }
                    }
                    div { class: "value-chart__delta-row",
                        span {
                            class: if summary.is_positive { "type-delta type-delta--up" } else { "type-delta type-delta--down" },
                            "{format::format_change(summary.change)} EUR ({format::format_percent(summary.change_percent)})"
                        }
                        span { class: "type-context", "last {summary.period.display_name()}" }
                    }
                }
            }

            div {
                class: "value-chart__surface",
                style: "height: {chart_height}px",
                onmounted: move |evt: MountedEvent| async move {
                    let mounted = evt.data();
                    surface.set(Some(mounted.clone()));
                    measure(mounted, chart).await;
                },
                {render_scene(&scene, chart, surface)}
                if let Some(tooltip) = scene.tooltip.as_ref() {
                    div {
                        class: "value-chart__tooltip",
                        style: "left: {tooltip.x}px; top: {tooltip.y}px",
                        "{tooltip.text}"
                    }
                }
            }

            div { class: "value-chart__periods",
                for period in Period::ALL {
                    button {
                        key: "{period.code()}",
                        r#type: "button",
                        class: if period == selected { "period-pill period-pill--active" } else { "period-pill" },
                        onclick: move |_| {
                            let now = timing::now_ms();
                            let result = chart.with_mut(|state| match state {
                                Ok(chart) => chart.select_period(period, now),
                                Err(_) => Ok(()),
                            });
                            if let Err(err) = result {
                                warn!("period switch failed: {err}");
                            }
                            restart_frames(chart, clock, generation);
                        },
                        "{period.code()}"
                    }
                }
            }
        }
    }
}

fn render_scene(
    scene: &ChartScene,
    mut chart: Signal<ChartState>,
    surface: Signal<Option<Rc<MountedData>>>,
) -> Element {
    let line = scene.line.to_string();
    let area = scene.area.to_string();
    let revealed = scene.revealed;
    let unrevealed = scene.unrevealed;
    let overlay = scene.overlay;

    let mut send = move |event: InputEvent| -> bool {
        let result = chart.with_mut(|state| match state {
            Ok(chart) => chart.handle_input(event).map(|outcome| outcome.prevent_default),
            Err(_) => Ok(false),
        });
        result.unwrap_or_else(|err| {
            warn!("ignoring chart input: {err}");
            false
        })
    };

    rsx! {
        svg {
            class: "value-chart__svg",
            width: "{scene.width}",
            height: "{scene.height}",

            svg {
                x: "{revealed.x}",
                width: "{revealed.width}",
                height: "{revealed.height}",
                view_box: "{revealed.x} 0 {revealed.width} {revealed.height}",
                path { d: "{area}", fill: LINE_COLOR, fill_opacity: "0.12" }
                path {
                    d: "{line}",
                    fill: "none",
                    stroke: LINE_COLOR,
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                }
            }
            svg {
                x: "{unrevealed.x}",
                width: "{unrevealed.width}",
                height: "{unrevealed.height}",
                view_box: "{unrevealed.x} 0 {unrevealed.width} {unrevealed.height}",
                path {
                    d: "{line}",
                    fill: "none",
                    stroke: MUTED_LINE_COLOR,
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    opacity: "{MUTED_LINE_OPACITY}",
                }
            }

            if let Some(guide) = scene.guide {
                line {
                    x1: "{guide.x1}",
                    y1: "{guide.y1}",
                    x2: "{guide.x2}",
                    y2: "{guide.y2}",
                    stroke: GUIDE_COLOR,
                    stroke_width: "1",
                    stroke_dasharray: "4 4",
                }
            }
            if let Some(dot) = scene.hover_dot {
                circle {
                    cx: "{dot.cx}",
                    cy: "{dot.cy}",
                    r: "{dot.r}",
                    fill: LINE_COLOR,
                    stroke: "#ffffff",
                    stroke_width: "2",
                }
            }

            for label in [&scene.max_label, &scene.min_label] {
                text {
                    x: "{label.x}",
                    y: "{label.y}",
                    fill: AXIS_LABEL_COLOR,
                    font_size: "10",
                    font_weight: "500",
                    text_anchor: "start",
                    "{label.text}"
                }
            }

            rect {
                x: "{overlay.x}",
                y: "{overlay.y}",
                width: "{overlay.width}",
                height: "{overlay.height}",
                fill: "transparent",
                pointer_events: "all",
                // The page may have scrolled since the last measurement.
                onmouseenter: move |_| async move {
                    let mounted = surface.peek().clone();
                    if let Some(mounted) = mounted {
                        measure(mounted, chart).await;
                    }
                },
                onmousemove: move |evt: MouseEvent| {
                    send(InputEvent::PointerMove { client_x: evt.client_coordinates().x });
                },
                onmouseleave: move |_| {
                    send(InputEvent::PointerLeave);
                },
                ontouchmove: move |evt: TouchEvent| {
                    if let Some(point) = evt.touches().first() {
                        let client_x = point.client_coordinates().x;
                        if send(InputEvent::TouchMove { client_x }) {
                            evt.prevent_default();
                        }
                    }
                },
                ontouchend: move |_| {
                    send(InputEvent::TouchEnd);
                },
            }
        }
    }
}

/// Pick up the surface's real width and page offset.
async fn measure(mounted: Rc<MountedData>, mut chart: Signal<ChartState>) {
    let rect = match mounted.get_client_rect().await {
        Ok(rect) => rect,
        Err(err) => {
            warn!("could not measure chart surface: {err:?}");
            return;
        }
    };
    let now = timing::now_ms();
    chart.with_mut(|state| {
        if let Ok(chart) = state {
            if let Err(err) = chart.set_origin(rect.origin.x) {
                warn!("ignoring chart origin: {err}");
            }
            if let Err(err) = chart.resize(rect.size.width, now) {
                warn!("ignoring chart resize: {err}");
            }
        }
    });
}

/// Tick the chart once per frame until its reveal sweep settles. A newer call
/// supersedes any loop already running.
fn restart_frames(mut chart: Signal<ChartState>, mut clock: Signal<f64>, mut generation: Signal<u64>) {
    let token = *generation.peek() + 1;
    generation.set(token);
    spawn(async move {
        loop {
            timing::sleep_ms(timing::FRAME_MS).await;
            if *generation.peek() != token {
                break;
            }
            let now = timing::now_ms();
            let more = chart.with_mut(|state| match state {
                Ok(chart) => chart.tick(now),
                Err(_) => false,
            });
            clock.set(now);
            if !more {
                break;
            }
        }
    });
}
