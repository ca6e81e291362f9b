//! Macro split chart rendering.
//!
//! Two renderers over the same three-series data: a text bar chart for
//! terminal output, and a standalone SVG bar chart that report requests
//! embed as a data URL (a CLI has no canvas to rasterize).

use crate::stream::event::MacroSplit;
use crate::utils::config::CHART_LABELS;
use base64::{engine::general_purpose, Engine};

const TEXT_BAR_WIDTH: usize = 40;

// SVG geometry
const SVG_WIDTH: usize = 480;
const SVG_HEIGHT: usize = 320;
const PLOT_HEIGHT: usize = 240;
const PLOT_TOP: usize = 40;
const BAR_WIDTH: usize = 100;
const BAR_GAP: usize = 40;
const LEFT_MARGIN: usize = 50;

// Same palette the web UI uses for the three series
const BAR_COLORS: [&str; 3] = ["#ff9999", "#66b2ff", "#ffcc99"];

fn series(macros: &MacroSplit) -> [(&'static str, f64); 3] {
    [
        (CHART_LABELS[0], macros.carbs),
        (CHART_LABELS[1], macros.proteins),
        (CHART_LABELS[2], macros.fats),
    ]
}

/// Render the split as labeled text bars, one row per macro
pub fn render_text_chart(macros: &MacroSplit) -> String {
    let mut out = String::new();

    for (label, value) in series(macros) {
        let clamped = value.clamp(0.0, 100.0);
        let filled = ((clamped / 100.0) * TEXT_BAR_WIDTH as f64).round() as usize;

        out.push_str(&format!(
            "{:<14} {:>5.1}% |{}{}|\n",
            label,
            value,
            "#".repeat(filled),
            " ".repeat(TEXT_BAR_WIDTH - filled)
        ));
    }

    out
}

/// Build a standalone SVG bar chart of the split.
///
/// The y axis is fixed at 0-100%, matching the percentage semantics of the
/// series rather than scaling to the data.
pub fn render_svg_chart(macros: &MacroSplit) -> String {
    let mut svg = String::new();

    // Header
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        SVG_WIDTH, SVG_HEIGHT, SVG_WIDTH, SVG_HEIGHT
    ));

    svg.push_str(r#"<style>.label { font: 13px sans-serif; } .value { font: 12px sans-serif; }</style>"#);

    // Title
    svg.push_str(&format!(
        r#"<text x="{}" y="24" font-size="16" text-anchor="middle" font-weight="bold">Macronutrient Breakdown</text>"#,
        SVG_WIDTH / 2
    ));

    // Baseline
    let baseline = PLOT_TOP + PLOT_HEIGHT;
    svg.push_str(&format!(
        r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#888" stroke-width="1"/>"##,
        LEFT_MARGIN,
        baseline,
        SVG_WIDTH - 10,
        baseline
    ));

    for (i, ((label, value), color)) in series(macros).iter().zip(BAR_COLORS).enumerate() {
        let clamped = value.clamp(0.0, 100.0);
        let bar_height = ((clamped / 100.0) * PLOT_HEIGHT as f64).round() as usize;
        let x = LEFT_MARGIN + i * (BAR_WIDTH + BAR_GAP);
        let y = baseline - bar_height;

        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="{}"/>"#,
            x, y, BAR_WIDTH, bar_height, color
        ));

        // Value above the bar, label below the baseline
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="value" text-anchor="middle">{:.1}%</text>"#,
            x + BAR_WIDTH / 2,
            y.saturating_sub(6),
            value
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            x + BAR_WIDTH / 2,
            baseline + 20,
            label
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Encode the SVG chart as a data URL for the report request
pub fn chart_data_url(macros: &MacroSplit) -> String {
    let svg = render_svg_chart(macros);
    format!(
        "data:image/svg+xml;base64,{}",
        general_purpose::STANDARD.encode(svg)
    )
}
