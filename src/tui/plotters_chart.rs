//! Plotters-powered bar chart widget for Ratatui.
//!
//! Plotters output is drawn into the Ratatui buffer via `plotters-ratatui-backend`.
//! Categories sit at integer positions `0..n`; tick labels map back to names.

use plotters::prelude::*;
// `ratatui::style::Color` below shadows the plotters trait that provides `filled()`.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::analysis::Chart;

/// Render-only description of a category bar chart.
pub struct BarPlottersChart<'a> {
    pub chart: &'a Chart,
    /// Bars grow to the right with categories on the y axis.
    pub horizontal: bool,
    pub bar_color: RGBColor,
}

impl<'a> Widget for BarPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Área del gráfico muy pequeña (agrande la terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let n = self.chart.points.len();
        if n == 0 {
            buf.set_string(area.x, area.y, "Sin datos para los filtros actuales.", Style::default().fg(Color::Yellow));
            return;
        }

        let labels: Vec<String> = self.chart.points.iter().map(|p| short_label(&p.label)).collect();
        let counts: Vec<f64> = self.chart.points.iter().map(|p| p.count as f64).collect();
        let value_max = (self.chart.max_count() as f64 * 1.1).max(1.0);
        let cat_range = -0.5..(n as f64 - 0.5);
        let horizontal = self.horizontal;
        let bar_color = self.bar_color;

        let widget = widget_fn(move |root| {
            let category_label = |v: &f64| category_at(&labels, *v);
            let value_label = |v: &f64| format!("{v:.0}");

            if horizontal {
                let mut chart = ChartBuilder::on(&root)
                    .margin(1)
                    .set_label_area_size(LabelAreaPosition::Left, 12)
                    .set_label_area_size(LabelAreaPosition::Bottom, 2)
                    .build_cartesian_2d(0.0..value_max, cat_range.clone())?;

                chart
                    .configure_mesh()
                    .disable_x_mesh()
                    .disable_y_mesh()
                    .x_labels(5)
                    .y_labels(n)
                    .x_label_formatter(&value_label)
                    .y_label_formatter(&category_label)
                    .label_style(("sans-serif", 10).into_font().color(&WHITE))
                    .axis_style(&WHITE)
                    .draw()?;

                chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
                    let y = i as f64;
                    Rectangle::new([(0.0, y - 0.35), (c, y + 0.35)], bar_color.filled())
                }))?;
            } else {
                let mut chart = ChartBuilder::on(&root)
                    .margin(1)
                    .set_label_area_size(LabelAreaPosition::Left, 5)
                    .set_label_area_size(LabelAreaPosition::Bottom, 2)
                    .build_cartesian_2d(cat_range.clone(), 0.0..value_max)?;

                chart
                    .configure_mesh()
                    .disable_x_mesh()
                    .disable_y_mesh()
                    .x_labels(n)
                    .y_labels(5)
                    .x_label_formatter(&category_label)
                    .y_label_formatter(&value_label)
                    .label_style(("sans-serif", 10).into_font().color(&WHITE))
                    .axis_style(&WHITE)
                    .draw()?;

                chart.draw_series(counts.iter().enumerate().map(|(i, &c)| {
                    let x = i as f64;
                    Rectangle::new([(x - 0.35, 0.0), (x + 0.35, c)], bar_color.filled())
                }))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Name of the category at axis position `v`, or blank between categories.
fn category_at(labels: &[String], v: f64) -> String {
    let idx = v.round();
    if (v - idx).abs() > 0.01 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn short_label(label: &str) -> String {
    if label.chars().count() <= 10 {
        return label.to_string();
    }
    let mut out: String = label.chars().take(9).collect();
    out.push('.');
    out
}
