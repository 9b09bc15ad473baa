use rampart_field::field::ScalarField;
use rampart_scenegraph::marks::group::SceneGroup;
use rampart_text::measurement::TextMeasurer;

use crate::config::{LegendConfig, LegendStyle};
use crate::discrete;
use crate::error::LegendError;
use crate::geometry::{LegendGeometry, Viewport};
use crate::histogram;
use crate::labels;
use crate::normalize;
use crate::ramp;

/// Builds the color scale legend for `field` as a scene group anchored to
/// the right edge of the viewport.
///
/// A field without a color scale, a degenerate viewport or an empty key
/// value set yields an empty group: nothing to display this frame. The only
/// error is a discrete-style request on a symmetric dual-sign scale.
pub fn make_legend_marks(
    field: &ScalarField,
    viewport: &Viewport,
    measurer: &impl TextMeasurer,
    config: &LegendConfig,
) -> Result<SceneGroup, LegendError> {
    let mut group = SceneGroup {
        name: "color_scale_legend".to_string(),
        ..Default::default()
    };

    if field.color_scale.is_none() {
        log::debug!("legend skipped: field {:?} has no color scale", field.name);
        return Ok(group);
    }
    if viewport.is_degenerate() {
        log::debug!("legend skipped: degenerate viewport");
        return Ok(group);
    }

    if let LegendStyle::DiscreteCubes { steps } = config.style {
        group.marks = discrete::discrete_marks(field, steps, viewport, config)?;
        return Ok(group);
    }

    let key_values = normalize::key_values(field);
    if key_values.is_empty() {
        log::debug!("legend skipped: no visible key values");
        return Ok(group);
    }

    let text_height = measurer.line_height(&config.font, config.font_size);
    let geometry = LegendGeometry::compute(viewport, config, text_height, key_values.len());
    let placed = labels::place(&key_values, geometry.ramp_height, text_height);
    let histogram_points = if config.show_histogram {
        histogram::project(&field.histogram, &field.display, &key_values, &geometry)
    } else {
        Vec::new()
    };

    group.marks = ramp::continuous_marks(
        field,
        &key_values,
        &placed,
        &histogram_points,
        &geometry,
        config,
    );
    Ok(group)
}
