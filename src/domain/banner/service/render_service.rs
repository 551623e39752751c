//! SVG assembly: line plot, axis ticks, animated heart, BPM figure.

use anyhow::{anyhow, Result};

use crate::core::persistence::settings::banner_setting_entity::BannerSettingEntity;
use crate::domain::banner::service::ticks::generate_ticks;
use crate::domain::heartrate::model::Sample;

const PADDING_TOP_BOTTOM: u32 = 20;
const TITLE_SIZE: u32 = 12;
const PLOT_MARGIN_LEFT: f64 = 30.0;
const PLOT_MARGIN_BOTTOM: f64 = 18.0;
const PLOT_MARGIN_TOP: f64 = 6.0;

/// Render the full banner for a non-empty, gap-free series.
pub fn render_banner(samples: &[Sample], settings: &BannerSettingEntity) -> Result<String> {
    let last = samples.last().ok_or_else(|| anyhow!("data set empty"))?;
    let bpm = last.value;

    // Heart takes up 1/3rd, plot 2/3rds.
    let third_width = settings.banner_width / 3;
    let plot_width = third_width * 2;

    let plot = render_plot(samples, plot_width, settings);
    let heart = render_heart(bpm, third_width, &settings.theme.heart);
    let total_height = settings.banner_height + TITLE_SIZE + PADDING_TOP_BOTTOM;

    let watermark = if settings.display_watermark {
        format!(
            r##"<a href="https://github.com/f0nkey/fitbit-readme-stats"><text dominant-baseline="hanging" style="font: 600 8pt 'Arial', Sans-Serif; fill: {title};" x="5pt">View on GitHub</text></a>"##,
            title = settings.theme.title,
        )
    } else {
        String::new()
    };

    Ok(format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" id="banner" width="{width}pt" height="{total_height}pt">
<rect width="100%" height="100%" fill="{background}"/>
<style> .text {{font: 600 9px "Arial", Sans-Serif; fill: {text_ticks};}} </style>
<g id="padding" transform="translate(0 {half_pad})">
<text id="title" dominant-baseline="hanging" text-anchor="middle" style="font: 600 12pt 'Arial', Sans-Serif; fill: {title_color}" x="{half_width}pt">{title}</text>
{watermark}
<g id="main-content" transform="translate(0 {content_offset})">
<g id="plot" transform="translate({third_width},0)">{plot}</g>
<g id="heart">{heart}</g>
<g id="heart-text" transform="translate({heart_center} {heart_middle})">
<text id="current-bpm-text" class="text" text-anchor="middle" x="0" y="79" style="font-size: 19pt; fill: {current_bpm};">Current BPM</text>
<text id="bpm-number" class="text" dominant-baseline="middle" text-anchor="middle" x="0" y="0" style="font-size: 35px; fill: {heart_number};">{bpm}</text>
</g>
</g>
</g>
</svg>"##,
        width = settings.banner_width,
        background = settings.theme.background,
        text_ticks = settings.theme.text_ticks,
        half_pad = PADDING_TOP_BOTTOM / 2,
        title_color = settings.theme.title,
        half_width = settings.banner_width / 2,
        title = xml_escape(&settings.banner_title),
        content_offset = TITLE_SIZE + 6,
        heart_center = third_width / 2,
        heart_middle = settings.banner_height / 2,
        current_bpm = settings.theme.current_bpm,
        heart_number = settings.theme.heart_number,
    ))
}

/// Placeholder served before setup completes or when no data is in range.
pub fn placeholder_banner(settings: &BannerSettingEntity) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" id="banner" width="{width}pt" height="{height}pt"> <rect width="100%" height="100%" fill="{background}" /><text x="{cx}" y="{cy}" fill="{title}" style="font-family: sans-serif; font-weight:500;" dominant-baseline="hanging" text-anchor="middle">Banner not setup yet, or no data within range is available.</text> </svg>"##,
        width = settings.banner_width,
        height = settings.banner_height,
        background = settings.theme.background,
        cx = settings.banner_width / 2,
        cy = settings.banner_height / 2,
        title = settings.theme.title,
    )
}

/// The line plot with its axes and tick marks, sized to `width`.
fn render_plot(samples: &[Sample], width: u32, settings: &BannerSettingEntity) -> String {
    let height = settings.banner_height as f64;
    let width = width as f64;
    let plot_w = width - PLOT_MARGIN_LEFT;
    let plot_h = height - PLOT_MARGIN_BOTTOM - PLOT_MARGIN_TOP;

    let first_ts = samples[0].timestamp.timestamp();
    let last_ts = samples[samples.len() - 1].timestamp.timestamp();
    let span = (last_ts - first_ts).max(1) as f64;

    let min_v = samples.iter().map(|s| s.value).min().unwrap_or(0) as f64;
    let max_v = samples.iter().map(|s| s.value).max().unwrap_or(1) as f64;
    let value_span = (max_v - min_v).max(1.0);

    let x_of = |ts: i64| PLOT_MARGIN_LEFT + (ts - first_ts) as f64 / span * plot_w;
    let y_of = |v: i32| PLOT_MARGIN_TOP + (max_v - v as f64) / value_span * plot_h;

    let points: Vec<String> = samples
        .iter()
        .map(|s| format!("{:.1},{:.1}", x_of(s.timestamp.timestamp()), y_of(s.value)))
        .collect();

    let axis_y = height - PLOT_MARGIN_BOTTOM;
    let mut tick_marks = String::new();
    for tick in generate_ticks(
        &samples.iter().map(|s| s.timestamp.timestamp()).collect::<Vec<_>>(),
    ) {
        let x = x_of(tick.timestamp);
        let tick_len = if tick.label.is_some() { 5.0 } else { 3.0 };
        tick_marks.push_str(&format!(
            r#"<line x1="{x:.1}" y1="{axis_y:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="{axes}"/>"#,
            y2 = axis_y + tick_len,
            axes = settings.theme.axes,
        ));
        if let Some(label) = tick.label {
            tick_marks.push_str(&format!(
                r#"<text class="text" text-anchor="middle" x="{x:.1}" y="{ly:.1}" fill="{text}">{label}</text>"#,
                ly = axis_y + 14.0,
                text = settings.theme.text_ticks,
            ));
        }
    }

    // Y extremes labelled at the axis; everything between is implied.
    let value_labels = format!(
        r#"<text class="text" text-anchor="end" x="{lx:.1}" y="{top:.1}" fill="{text}">{max}</text><text class="text" text-anchor="end" x="{lx:.1}" y="{bottom:.1}" fill="{text}">{min}</text>"#,
        lx = PLOT_MARGIN_LEFT - 4.0,
        top = PLOT_MARGIN_TOP + 3.0,
        bottom = axis_y,
        text = settings.theme.text_ticks,
        max = max_v as i64,
        min = min_v as i64,
    );

    format!(
        r#"<g id="plot-area"><line x1="{left:.1}" y1="{axis_y:.1}" x2="{right:.1}" y2="{axis_y:.1}" stroke="{axes}"/><line x1="{left:.1}" y1="{top:.1}" x2="{left:.1}" y2="{axis_y:.1}" stroke="{axes}"/>{ticks}{value_labels}<polyline fill="none" stroke="{line}" stroke-width="1.5" points="{points}"/></g>"#,
        left = PLOT_MARGIN_LEFT,
        right = width,
        top = PLOT_MARGIN_TOP,
        axes = settings.theme.axes,
        ticks = tick_marks,
        line = settings.theme.plot_line,
        points = points.join(" "),
    )
}

/// The animated heart; one pulse per beat at the current BPM.
fn render_heart(bpm: i32, width: u32, heart_color: &str) -> String {
    let view_box = width + width / 3;
    let g_offset = view_box / 2;
    let pulse_ms = if bpm > 0 { 60_000 / bpm } else { 60_000 };

    format!(
        r#"<g transform="translate(0 -22)"><svg width="{width}" height="{width}" viewBox="0 0 {view_box} {view_box}">
<g transform="translate({g_offset} {g_offset})">
<path transform="translate(-50 -50)" fill="{heart_color}" d="M92.71,7.27L92.71,7.27c-9.71-9.69-25.46-9.69-35.18,0L50,14.79l-7.54-7.52C32.75-2.42,17-2.42,7.29,7.27v0 c-9.71,9.69-9.71,25.41,0,35.1L50,85l42.71-42.63C102.43,32.68,102.43,16.96,92.71,7.27z"></path>
<animateTransform attributeName="transform" type="scale" values="1; 1.5; 1.25; 1;" dur="{pulse_ms}ms" additive="sum" repeatCount="indefinite"></animateTransform>
</g>
</svg></g>"#
    )
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
