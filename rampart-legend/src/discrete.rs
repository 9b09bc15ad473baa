//! Legacy discrete rendering: one labeled cube per color step instead of a
//! per-pixel ramp. Out-of-saturation tails render as arrows and truncated
//! intervals as slashed boxes.

use rampart_common::types::ColorOrGradient;
use rampart_common::value::ScalarOrArray;
use rampart_field::field::ScalarField;
use rampart_field::ZERO_TOLERANCE;
use rampart_scenegraph::marks::mark::SceneMark;
use rampart_scenegraph::marks::polygon::ScenePolygonMark;
use rampart_scenegraph::marks::rect::SceneRectMark;
use rampart_scenegraph::marks::rule::SceneRuleMark;
use rampart_scenegraph::marks::text::SceneTextMark;
use rampart_text::types::{TextAlign, TextBaseline};

use crate::config::LegendConfig;
use crate::error::LegendError;
use crate::geometry::Viewport;
use crate::labels::format_value;

/// Vertical padding above and below each cube.
const CUBE_SPACING: f32 = 4.0;

/// One boundary of the discrete scale. Cubes are drawn between consecutive
/// elements; a condensed element marks the cube below it as a truncated
/// interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScaleElement {
    pub value: f32,
    pub label_shown: bool,
    pub condensed: bool,
}

impl ScaleElement {
    fn new(value: f32, label_shown: bool, condensed: bool) -> Self {
        Self {
            value,
            label_shown,
            condensed,
        }
    }
}

/// Boundary elements plus, for each of the `n - 1` cubes between them, the
/// representative value used to look up its color.
///
/// Only scales without negative values, or not meant to be symmetric around
/// zero, are supported; the dual-sign symmetric layout was never finished in
/// the legacy renderer and is rejected outright.
pub(crate) fn scale_elements(
    field: &ScalarField,
    steps: u32,
    max_cubes: i64,
) -> Result<(Vec<ScaleElement>, Vec<f32>), LegendError> {
    let min_val = field.display.min;
    let min_disp = field.display.start;
    let max_disp = field.display.stop;
    let max_val = field.display.max;
    let min_sat = field.saturation.start;
    let max_sat = field.saturation.stop;

    let strictly_positive = min_val >= 0.0;
    if !strictly_positive && field.symmetrical {
        return Err(LegendError::SymmetricScaleUnsupported);
    }

    let disp_zero = field.always_show_zero && min_disp > 0.0 && strictly_positive;
    let disp_min_disp_val = true;
    let disp_min_sat = min_sat > min_disp && min_sat < max_sat;
    let disp_max_sat = max_sat >= min_sat && max_sat < max_disp;
    let disp_max_disp_val = max_disp > min_disp && max_disp < max_val;
    let disp_max_val = true;

    let added_cubes = disp_zero as i64
        + disp_min_disp_val as i64
        + disp_min_sat as i64
        + disp_max_sat as i64
        + disp_max_disp_val as i64
        + disp_max_val as i64;

    // not enough room for display
    if max_cubes < added_cubes {
        return Ok((Vec::new(), Vec::new()));
    }

    let number_of_cubes = (max_cubes - added_cubes).min(steps as i64);

    let mut elements: Vec<ScaleElement> = Vec::new();
    let mut cube_values: Vec<f32> = Vec::new();

    // color of the leading cubes matches min_val even when the scale
    // starts at zero
    let mut start_value = min_val;
    if disp_zero {
        elements.push(ScaleElement::new(0.0, true, true));
    }

    if disp_min_disp_val {
        if !elements.is_empty() {
            cube_values.push(start_value);
        }
        elements.push(ScaleElement::new(min_disp, true, disp_min_sat));
        start_value = min_disp;
    }

    if disp_min_sat {
        if !elements.is_empty() {
            cube_values.push(start_value);
        }
        elements.push(ScaleElement::new(min_sat, true, false));
        start_value = min_sat;
    }

    // the actual color ramp
    if number_of_cubes > 0 && min_sat < max_sat && min_disp < max_disp {
        let end_value = if disp_max_sat { max_sat } else { max_disp };
        let mut interval = (end_value - start_value) / number_of_cubes as f32;
        let mut first_value = start_value;

        if field.log_scale {
            let end_log = end_value.abs().max(ZERO_TOLERANCE).log10();
            let start_log = start_value.abs().max(ZERO_TOLERANCE).log10();
            interval = (end_log - start_log) / number_of_cubes as f32;
            first_value = start_log;
        }

        if interval < ZERO_TOLERANCE {
            // interval too small to subdivide
            if let Some(last) = elements.last_mut() {
                last.condensed = true;
            }
        } else if field.log_scale {
            for i in 0..number_of_cubes {
                let val = first_value + interval * i as f32;
                let log_val = val + interval * 0.5;
                cube_values.push((log_val * std::f32::consts::LN_10).exp());
                elements.push(ScaleElement::new(
                    ((val + interval) * std::f32::consts::LN_10).exp(),
                    true,
                    false,
                ));
            }
        } else {
            for i in 0..number_of_cubes {
                let val = first_value + interval * i as f32;
                cube_values.push(val + interval * 0.5);
                elements.push(ScaleElement::new(val + interval, true, false));
            }
        }
    }

    if disp_max_sat && disp_max_disp_val {
        cube_values.push(max_sat);
        if let Some(last) = elements.last_mut() {
            last.condensed = true;
        }
        elements.push(ScaleElement::new(max_disp, true, true));
    }

    if (disp_max_sat || disp_max_disp_val) && disp_max_val {
        cube_values.push(max_val);
        if let Some(last) = elements.last_mut() {
            last.condensed = true;
        }
        elements.push(ScaleElement::new(max_val, true, false));
    }

    Ok((elements, cube_values))
}

pub(crate) fn discrete_marks(
    field: &ScalarField,
    steps: u32,
    viewport: &Viewport,
    config: &LegendConfig,
) -> Result<Vec<SceneMark>, LegendError> {
    let cube = config.ramp_width;
    let slot = cube + 2.0 * CUBE_SPACING;
    let max_cubes = ((viewport.height - config.height_margin) / slot).floor() as i64;

    let (elements, cube_values) = scale_elements(field, steps, max_cubes)?;
    if elements.is_empty() {
        log::debug!("discrete legend skipped: no room for the scale elements");
        return Ok(Vec::new());
    }
    let n = elements.len();

    let scale_height = slot * n as f32;
    let left = viewport.width - config.right_offset - cube;
    let top = ((viewport.height - scale_height) / 2.0).floor();
    let bottom = top + scale_height;
    let line = ColorOrGradient::Color(config.text_color);

    let mut marks: Vec<SceneMark> = Vec::new();
    let mut separator_ys = vec![bottom];
    let mut labels: Vec<(String, f32)> = Vec::new();
    if elements[0].label_shown {
        labels.push((
            format_value(elements[0].value, field.log_scale, config.precision),
            bottom,
        ));
    }

    // plain cubes batch into one rect mark, drawn behind the special shapes
    let mut box_tops: Vec<f32> = Vec::new();
    let mut box_fills: Vec<ColorOrGradient> = Vec::new();

    let mut y = bottom;
    for (i, window) in elements.windows(2).enumerate() {
        let cube_bottom = y - CUBE_SPACING;
        let cube_top = cube_bottom - cube;
        let color = field.color_at(cube_values[i]).unwrap_or(config.fallback_color);

        if i == 0 && window[0].condensed {
            marks.push(arrow(
                [left, cube_top],
                [left + cube, cube_top],
                [left + cube / 2.0, cube_bottom],
                color,
                line.clone(),
            ));
        } else if i + 2 == n && window[0].condensed {
            marks.push(arrow(
                [left, cube_bottom],
                [left + cube, cube_bottom],
                [left + cube / 2.0, cube_top],
                color,
                line.clone(),
            ));
        } else if window[0].condensed {
            marks.extend(slashed_box(left, cube_top, cube, color, line.clone()));
        } else {
            box_tops.push(cube_top);
            box_fills.push(ColorOrGradient::Color(color));
        }

        y = cube_top - CUBE_SPACING;
        separator_ys.push(y);
        if window[1].label_shown {
            labels.push((
                format_value(window[1].value, field.log_scale, config.precision),
                y,
            ));
        }
    }

    if !box_tops.is_empty() {
        marks.insert(
            0,
            SceneRectMark {
                name: "cubes".to_string(),
                len: box_tops.len() as u32,
                x: left.into(),
                y: box_tops.into(),
                width: Some(cube.into()),
                height: Some(cube.into()),
                fill: box_fills.into(),
                stroke: ScalarOrArray::new_scalar(line.clone()),
                stroke_width: ScalarOrArray::new_scalar(1.0),
                ..Default::default()
            }
            .into(),
        );
    }

    marks.push(
        SceneRuleMark {
            name: "separators".to_string(),
            len: separator_ys.len() as u32,
            x: left.into(),
            y: separator_ys.clone().into(),
            x2: (left + cube).into(),
            y2: separator_ys.into(),
            stroke: ScalarOrArray::new_scalar(line),
            stroke_width: 1.0.into(),
            ..Default::default()
        }
        .into(),
    );

    marks.push(
        SceneTextMark {
            name: "labels".to_string(),
            len: labels.len() as u32,
            text: labels
                .iter()
                .map(|(text, _)| text.clone())
                .collect::<Vec<_>>()
                .into(),
            x: (left - 5.0).into(),
            y: labels.iter().map(|(_, y)| *y).collect::<Vec<_>>().into(),
            align: ScalarOrArray::new_scalar(TextAlign::Right),
            baseline: ScalarOrArray::new_scalar(TextBaseline::Middle),
            color: ScalarOrArray::new_scalar(config.text_color),
            font: config.font.clone().into(),
            font_size: config.font_size.into(),
            ..Default::default()
        }
        .into(),
    );

    if !field.name.is_empty() {
        marks.push(
            SceneTextMark {
                name: "title".to_string(),
                len: 1,
                text: field.name.clone().into(),
                x: (left + cube).into(),
                y: (top - CUBE_SPACING).into(),
                align: ScalarOrArray::new_scalar(TextAlign::Right),
                baseline: ScalarOrArray::new_scalar(TextBaseline::Bottom),
                color: ScalarOrArray::new_scalar(config.text_color),
                font: config.font.clone().into(),
                font_size: config.font_size.into(),
                ..Default::default()
            }
            .into(),
        );
    }

    Ok(marks)
}

fn arrow(
    a: [f32; 2],
    b: [f32; 2],
    apex: [f32; 2],
    color: [f32; 4],
    line: ColorOrGradient,
) -> SceneMark {
    ScenePolygonMark {
        name: "cube_arrow".to_string(),
        points: vec![a, b, apex],
        fill: ColorOrGradient::Color(color),
        stroke: line,
        stroke_width: 1.0,
        ..Default::default()
    }
    .into()
}

/// A box with a diagonal band cut out, marking a truncated interval.
fn slashed_box(
    left: f32,
    top: f32,
    cube: f32,
    color: [f32; 4],
    line: ColorOrGradient,
) -> Vec<SceneMark> {
    let third = cube * 0.8 / 3.0;
    let right = left + cube;
    let bottom = top + cube;
    let lower = ScenePolygonMark {
        name: "cube_slashed".to_string(),
        points: vec![
            [left, bottom],
            [left, bottom - third],
            [right, bottom - 2.0 * third],
            [right, bottom],
        ],
        fill: ColorOrGradient::Color(color),
        stroke: line.clone(),
        stroke_width: 1.0,
        ..Default::default()
    };
    let upper = ScenePolygonMark {
        name: "cube_slashed".to_string(),
        points: vec![
            [left, top],
            [right, top],
            [right, top + third],
            [left, top + 2.0 * third],
        ],
        fill: ColorOrGradient::Color(color),
        stroke: line,
        stroke_width: 1.0,
        ..Default::default()
    };
    vec![lower.into(), upper.into()]
}
