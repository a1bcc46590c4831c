//! Policy-comparison charts over the parsed record set

use std::path::Path;

use plotters::prelude::*;

use crate::error::{VizError, VizResult};
use crate::record::{group_by_trace, policy_order, Record};

const FIGURE_SIZE: (u32, u32) = (1000, 500);

/// Render hit ratio (L1 and L2) against replacement policy, one pair of
/// series per trace.
pub fn render_hit_ratio_chart<P: AsRef<Path>>(
    records: &[Record],
    output_path: P,
) -> VizResult<()> {
    render_metric_chart(
        records,
        output_path.as_ref(),
        "Effect of Replacement Policy on Hit Ratios",
        "Hit ratio",
        |r| r.l1_hit_ratio,
        |r| r.l2_hit_ratio,
    )
}

/// Render average access time (L1 and L2) against replacement policy, one
/// pair of series per trace.
pub fn render_aat_chart<P: AsRef<Path>>(
    records: &[Record],
    output_path: P,
) -> VizResult<()> {
    render_metric_chart(
        records,
        output_path.as_ref(),
        "Effect of Replacement Policy on AAT",
        "Average access time (AAT)",
        |r| r.l1_aat,
        |r| r.l2_aat,
    )
}

fn render_metric_chart(
    records: &[Record],
    output_path: &Path,
    title: &str,
    y_desc: &str,
    l1_metric: impl Fn(&Record) -> f64,
    l2_metric: impl Fn(&Record) -> f64,
) -> VizResult<()> {
    let chart_error = |message: String| VizError::ChartError {
        path: output_path.display().to_string(),
        message,
    };

    // The x axis is categorical: policies at integer positions, in
    // first-seen file order.
    let policies = policy_order(records);
    let groups = group_by_trace(records);

    let mut y_max: f64 = 0.;
    for record in records {
        y_max = y_max.max(l1_metric(record)).max(l2_metric(record));
    }
    if y_max <= 0. {
        // Keeps the y range valid for an empty or all-zero record set
        y_max = 1.;
    }

    let root = SVGBackend::new(output_path, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| chart_error(e.to_string()))?;

    let x_max = policies.len().max(1) as i32;
    let mut ctx = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40).into_font())
        .margin(5)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-1..x_max, 0.0..y_max * 1.1)
        .map_err(|e| chart_error(e.to_string()))?;

    ctx.configure_mesh()
        .x_labels(policies.len() + 2)
        .x_label_formatter(&|x| {
            usize::try_from(*x)
                .ok()
                .and_then(|i| policies.get(i))
                .map(|p| p.to_string())
                .unwrap_or_default()
        })
        .x_desc("Replacement policy")
        .y_desc(y_desc)
        .draw()
        .map_err(|e| chart_error(e.to_string()))?;

    for (i, (trace, subset)) in groups.iter().enumerate() {
        // Point order follows this trace's own subset order, so a policy
        // only tested for some traces never distorts the others.
        let l1_points: Vec<(i32, f64)> = subset
            .iter()
            .filter_map(|r| {
                policies
                    .iter()
                    .position(|p| *p == r.policy)
                    .map(|x| (x as i32, l1_metric(r)))
            })
            .collect();
        let l2_points: Vec<(i32, f64)> = subset
            .iter()
            .filter_map(|r| {
                policies
                    .iter()
                    .position(|p| *p == r.policy)
                    .map(|x| (x as i32, l2_metric(r)))
            })
            .collect();

        let l1_color = Palette99::pick(2 * i).to_rgba();
        let l2_color = Palette99::pick(2 * i + 1).to_rgba();

        ctx.draw_series(LineSeries::new(l1_points, l1_color))
            .map_err(|e| chart_error(e.to_string()))?
            .label(format!("{} - L1", trace))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], l1_color)
            });
        ctx.draw_series(LineSeries::new(l2_points, l2_color))
            .map_err(|e| chart_error(e.to_string()))?
            .label(format!("{} - L2", trace))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], l2_color)
            });
    }

    if !groups.is_empty() {
        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(|e| chart_error(e.to_string()))?;
    }

    root.present().map_err(|e| chart_error(e.to_string()))?;

    Ok(())
}
