use dioxus::prelude::*;

use crate::core::config::GaugeConfig;
use crate::core::gauge::{GaugeAnimator, BRAND_CYAN};
use crate::core::scene::{gauge_scene, TRACK_COLOR};
use crate::core::timing;

#[component]
pub fn HealthScoreGauge(score: i32, config: GaugeConfig) -> Element {
    let mut gauge = use_signal(|| GaugeAnimator::new(config.geometry, config.duration_ms));
    let mut clock = use_signal(timing::now_ms);
    let mut generation = use_signal(|| 0u64);

    // Restart whenever the score prop changes; the animation continues from
    // wherever the previous one had got to.
    use_effect(use_reactive!(|(score,)| {
        gauge.with_mut(|g| g.animate_to(score, timing::now_ms()));

        let token = *generation.peek() + 1;
        generation.set(token);
        spawn(async move {
            loop {
                timing::sleep_ms(timing::FRAME_MS).await;
                if *generation.peek() != token {
                    break;
                }
                let now = timing::now_ms();
                let more = gauge.with_mut(|g| {
                    g.tick(now);
                    g.is_animating()
                });
                clock.set(now);
                if !more {
                    break;
                }
            }
        });
    }));

    let scene = gauge_scene(&gauge.read(), clock());
    let colors = scene.colors;

    rsx! {
        div { class: "health-gauge",
            div {
                class: "health-gauge__canvas",
                style: "width: {scene.width}px; height: {scene.height}px",
                svg {
                    width: "{scene.width}",
                    height: "{scene.height}",
                    view_box: "0 0 {scene.width} {scene.height}",
                    overflow: "visible",
                    path {
                        d: "{scene.track}",
                        fill: "none",
                        stroke: TRACK_COLOR,
                        stroke_width: "{scene.stroke_width}",
                        stroke_linecap: "round",
                    }
                    path {
                        d: "{scene.track}",
                        fill: "none",
                        stroke: BRAND_CYAN,
                        stroke_width: "{scene.stroke_width}",
                        stroke_linecap: "round",
                        stroke_dasharray: "{scene.arc_length}",
                        stroke_dashoffset: "{scene.dash_offset}",
                    }
                    circle {
                        class: "health-gauge__halo",
                        cx: "{scene.halo.cx}",
                        cy: "{scene.halo.cy}",
                        r: "{scene.halo.r}",
                        fill: "white",
                    }
                    circle {
                        cx: "{scene.dot.cx}",
                        cy: "{scene.dot.cy}",
                        r: "{scene.dot.r}",
                        fill: BRAND_CYAN,
                    }
                }
                div { class: "health-gauge__readout",
                    span { class: "type-score", "{scene.score_text}" }
                    span {
                        class: "health-gauge__label",
                        style: "background: {colors.background}; color: {colors.text}; border: 1px solid {colors.border}",
                        "{scene.label.text()}"
                    }
                }
            }
        }
    }
}
