use dioxus::prelude::*;

use crate::theme::{SKELETON_BASE, SKELETON_HIGHLIGHT};

/// One skeleton row: a pair of circular markers, a leading bar, and a
/// trailing bar anchored to the right edge.
#[derive(Clone, Copy)]
struct Row {
    cy: f64,
    bar_width: f64,
    trail_width: f64,
}

const ROWS: [Row; 3] = [
    Row { cy: 40.0, bar_width: 200.0, trail_width: 80.0 },
    Row { cy: 110.0, bar_width: 180.0, trail_width: 80.0 },
    Row { cy: 180.0, bar_width: 195.0, trail_width: 85.0 },
];

/// Decorative placeholder shown while a view-info list loads.
///
/// Pure function of `width`: three rows of grey circles and rounded bars,
/// with the trailing bar of each row anchored at `width - 100`. Widths under
/// roughly 300 make the trailing bars overlap the leading ones; callers own
/// the sizing, so nothing is clamped here.
#[component]
pub fn ViewInfoListSkeleton(width: f64) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        svg {
            class: "view-info-list-skeleton",
            style: "--skeleton-base: {SKELETON_BASE}; --skeleton-highlight: {SKELETON_HIGHLIGHT};",
            width: "{width}",
            height: "356",
            for row in ROWS {
                circle { cx: "30", cy: "{row.cy}", r: "16", fill: SKELETON_BASE }
                circle { cx: "70", cy: "{row.cy}", r: "16", fill: SKELETON_BASE }
                rect {
                    x: "105",
                    y: "{row.cy - 5.0}",
                    rx: "5",
                    ry: "5",
                    width: "{row.bar_width}",
                    height: "15",
                    fill: SKELETON_BASE,
                }
                rect {
                    x: "{width - 100.0}",
                    y: "{row.cy - 5.0}",
                    rx: "5",
                    ry: "5",
                    width: "{row.trail_width}",
                    height: "15",
                    fill: SKELETON_BASE,
                }
            }
        }
    }
}
