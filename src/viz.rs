use crate::stats::NameStats;
use anyhow::{Result, anyhow};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;

/// Render the aggregated statistics as a dual-axis chart: mean age on the
/// left axis and sample count on the right axis, both against the names.
///
/// The backend is chosen by extension (`.svg` for SVG, anything else is
/// rendered as a bitmap). `source_name` only feeds the caption.
pub fn plot_stats<P: AsRef<Path>>(
    stats: &NameStats,
    source_name: &str,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    if stats.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let caption = format!("Results of the API with the file {}", source_name);

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, stats, &caption)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, stats, &caption)?;
    }

    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, stats: &NameStats, caption: &str) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let names: Vec<&str> = stats.age_by_name.keys().map(|s| s.as_str()).collect();
    let ages: Vec<f64> = stats.age_by_name.values().map(|a| *a as f64).collect();
    let counts: Vec<f64> = stats.count_by_name.values().map(|c| *c as f64).collect();

    // Pad degenerate ranges so the axes stay drawable.
    let range = |values: &[f64]| {
        let mut min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let mut max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        if (max - min).abs() < f64::EPSILON {
            min -= 1.0;
            max += 1.0;
        }
        min..max
    };

    // A single name still needs a non-empty x axis.
    let x_end = names.len().saturating_sub(1).max(1);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .right_y_label_area_size(70)
        .build_cartesian_2d(0..x_end, range(&ages))
        .map_err(|e| anyhow!("{:?}", e))?
        .set_secondary_coord(0..x_end, range(&counts));

    let x_label_fmt = |idx: &usize| names.get(*idx).map(|s| s.to_string()).unwrap_or_default();

    chart
        .configure_mesh()
        .x_desc("Names")
        .y_desc("Mean age")
        .x_labels(names.len().min(20))
        .x_label_formatter(&x_label_fmt)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    chart
        .configure_secondary_axes()
        .y_desc("Count")
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let age_color = BLUE.to_rgba();
    chart
        .draw_series(LineSeries::new(
            ages.iter().enumerate().map(|(i, a)| (i, *a)),
            ShapeStyle {
                color: age_color,
                filled: false,
                stroke_width: 2,
            },
        ))
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Mean age")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], age_color));

    let count_color = GREEN.to_rgba();
    chart
        .draw_secondary_series(LineSeries::new(
            counts.iter().enumerate().map(|(i, c)| (i, *c)),
            ShapeStyle {
                color: count_color,
                filled: false,
                stroke_width: 2,
            },
        ))
        .map_err(|e| anyhow!("{:?}", e))?
        .label("Name count")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], count_color));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
