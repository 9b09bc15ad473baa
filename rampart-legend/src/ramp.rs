//! Scene marks for the continuous ramp rendering path.

use rampart_common::types::ColorOrGradient;
use rampart_common::value::ScalarOrArray;
use rampart_field::field::ScalarField;
use rampart_scenegraph::marks::line::SceneLineMark;
use rampart_scenegraph::marks::mark::SceneMark;
use rampart_scenegraph::marks::rect::SceneRectMark;
use rampart_scenegraph::marks::rule::SceneRuleMark;
use rampart_scenegraph::marks::text::SceneTextMark;
use rampart_text::types::{TextAlign, TextBaseline};

use crate::config::LegendConfig;
use crate::geometry::LegendGeometry;
use crate::labels::{format_value, PlacedLabel};

pub(crate) fn continuous_marks(
    field: &ScalarField,
    key_values: &[f32],
    placed: &[PlacedLabel],
    histogram_points: &[[f32; 2]],
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> Vec<SceneMark> {
    let mut marks: Vec<SceneMark> = Vec::new();

    if key_values.len() == 1 {
        marks.push(single_value_square(field, key_values[0], geometry, config));
    } else {
        marks.push(ramp_strip(field, key_values, geometry, config));
        if config.show_histogram && !histogram_points.is_empty() {
            marks.push(histogram_overlay(histogram_points, geometry, config));
        }
    }

    // border drawn after the strip so it is never occluded
    marks.push(border(geometry, config));

    if key_values.len() == 1 {
        // one centered tick and label on the square
        let row = geometry.ramp_height / 2.0;
        marks.push(ticks(&[row], geometry, config));
        marks.push(value_labels(
            &[(key_values[0], row, TextBaseline::Middle)],
            field.log_scale,
            geometry,
            config,
        ));
    } else {
        let rows: Vec<f32> = placed.iter().map(|label| label.row).collect();
        marks.push(ticks(&rows, geometry, config));
        let entries: Vec<(f32, f32, TextBaseline)> = placed
            .iter()
            .map(|label| {
                let baseline = if label.row <= 0.0 {
                    TextBaseline::Bottom
                } else if label.row >= geometry.ramp_height {
                    TextBaseline::Top
                } else {
                    TextBaseline::Middle
                };
                (label.value, label.row, baseline)
            })
            .collect();
        marks.push(value_labels(&entries, field.log_scale, geometry, config));
    }

    if !field.name.is_empty() {
        marks.push(title(&field.name, geometry, config));
    }

    marks
}

/// One rule per pixel row, colored by the value that row represents.
fn ramp_strip(
    field: &ScalarField,
    key_values: &[f32],
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> SceneMark {
    let first = key_values[0];
    let span = key_values[key_values.len() - 1] - first;
    let height = geometry.ramp_height as u32;

    let mut rows = Vec::with_capacity(height as usize);
    let mut colors = Vec::with_capacity(height as usize);
    for j in 0..height {
        let value = first + j as f32 * span / geometry.ramp_height;
        let color = field.color_at(value).unwrap_or(config.fallback_color);
        rows.push(geometry.ramp_bottom() - j as f32);
        colors.push(ColorOrGradient::Color(color));
    }

    SceneRuleMark {
        name: "ramp_strip".to_string(),
        len: height,
        x: geometry.ramp_left.into(),
        y: rows.clone().into(),
        x2: geometry.ramp_right().into(),
        y2: rows.into(),
        stroke: colors.into(),
        stroke_width: 1.0.into(),
        ..Default::default()
    }
    .into()
}

fn single_value_square(
    field: &ScalarField,
    value: f32,
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> SceneMark {
    let color = field.color_at(value).unwrap_or(config.fallback_color);
    SceneRectMark {
        name: "ramp_strip".to_string(),
        len: 1,
        x: geometry.ramp_left.into(),
        y: geometry.ramp_top.into(),
        width: Some(geometry.ramp_width.into()),
        height: Some(geometry.ramp_height.into()),
        fill: ScalarOrArray::new_scalar(ColorOrGradient::Color(color)),
        ..Default::default()
    }
    .into()
}

fn histogram_overlay(
    points: &[[f32; 2]],
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> SceneMark {
    SceneLineMark {
        name: "histogram".to_string(),
        len: points.len() as u32,
        x: points.iter().map(|p| p[0]).collect::<Vec<_>>().into(),
        y: points.iter().map(|p| p[1]).collect::<Vec<_>>().into(),
        stroke: ColorOrGradient::Color(config.text_color),
        stroke_width: 1.0 + geometry.ramp_width / 20.0,
        ..Default::default()
    }
    .into()
}

fn border(geometry: &LegendGeometry, config: &LegendConfig) -> SceneMark {
    SceneRectMark {
        name: "border".to_string(),
        len: 1,
        x: geometry.ramp_left.into(),
        y: geometry.ramp_top.into(),
        width: Some(geometry.ramp_width.into()),
        height: Some(geometry.ramp_height.into()),
        stroke: ScalarOrArray::new_scalar(ColorOrGradient::Color(config.text_color)),
        stroke_width: ScalarOrArray::new_scalar(2.0),
        ..Default::default()
    }
    .into()
}

fn ticks(rows: &[f32], geometry: &LegendGeometry, config: &LegendConfig) -> SceneMark {
    let ys: Vec<f32> = rows.iter().map(|row| geometry.ramp_bottom() - row).collect();
    SceneRuleMark {
        name: "ticks".to_string(),
        len: rows.len() as u32,
        x: geometry.tick_left(config).into(),
        y: ys.clone().into(),
        x2: geometry.tick_right().into(),
        y2: ys.into(),
        stroke: ScalarOrArray::new_scalar(ColorOrGradient::Color(config.text_color)),
        stroke_width: 1.0.into(),
        ..Default::default()
    }
    .into()
}

fn value_labels(
    entries: &[(f32, f32, TextBaseline)],
    log_scale: bool,
    geometry: &LegendGeometry,
    config: &LegendConfig,
) -> SceneMark {
    SceneTextMark {
        name: "labels".to_string(),
        len: entries.len() as u32,
        text: entries
            .iter()
            .map(|(value, _, _)| format_value(*value, log_scale, config.precision))
            .collect::<Vec<_>>()
            .into(),
        x: geometry.label_right(config).into(),
        y: entries
            .iter()
            .map(|(_, row, _)| geometry.ramp_bottom() - row)
            .collect::<Vec<_>>()
            .into(),
        align: ScalarOrArray::new_scalar(TextAlign::Right),
        baseline: entries
            .iter()
            .map(|(_, _, baseline)| *baseline)
            .collect::<Vec<_>>()
            .into(),
        color: ScalarOrArray::new_scalar(config.text_color),
        font: config.font.clone().into(),
        font_size: config.font_size.into(),
        ..Default::default()
    }
    .into()
}

/// Field name, one text height above the ramp so the topmost label keeps
/// its room.
fn title(name: &str, geometry: &LegendGeometry, config: &LegendConfig) -> SceneMark {
    SceneTextMark {
        name: "title".to_string(),
        len: 1,
        text: name.to_string().into(),
        x: geometry.ramp_right().into(),
        y: (geometry.ramp_top - geometry.text_height).into(),
        align: ScalarOrArray::new_scalar(TextAlign::Right),
        baseline: ScalarOrArray::new_scalar(TextBaseline::Bottom),
        color: ScalarOrArray::new_scalar(config.text_color),
        font: config.font.clone().into(),
        font_size: config.font_size.into(),
        ..Default::default()
    }
    .into()
}
