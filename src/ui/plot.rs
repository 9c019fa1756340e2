use std::f32::consts::TAU;

use eframe::egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::aggregate::PieChart;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Start/end angle (radians, clockwise from 12 o'clock) for each slice.
pub fn wedge_angles(pie: &PieChart) -> Vec<(f32, f32)> {
    let total = pie.total();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0_f32;
    pie.slices
        .iter()
        .map(|s| {
            let sweep = (s.value / total) as f32 * TAU;
            let wedge = (start, start + sweep);
            start += sweep;
            wedge
        })
        .collect()
}

fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    center + Vec2::new(angle.sin(), -angle.cos()) * radius
}

/// Render the success pie with a legend of label / share.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let pie = &state.pie;
    ui.vertical_centered(|ui: &mut Ui| ui.strong(&pie.title));

    if pie.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches to show");
        });
        return;
    }

    let colors = generate_palette(pie.slices.len());
    let legend_height = 20.0 * pie.slices.len() as f32;
    let side = ui
        .available_width()
        .min(ui.available_height() - legend_height)
        .max(80.0);
    let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
    let center = response.rect.center();
    let radius = side * 0.45;
    let total = pie.total();

    for ((start, end), color) in wedge_angles(pie).into_iter().zip(&colors) {
        let steps = (((end - start) / (TAU / 64.0)).ceil() as usize).max(1);
        let arc: Vec<Pos2> = (0..=steps)
            .map(|i| point_on_circle(center, radius, start + (end - start) * i as f32 / steps as f32))
            .collect();
        for pair in arc.windows(2) {
            painter.add(Shape::convex_polygon(
                vec![center, pair[0], pair[1]],
                *color,
                Stroke::NONE,
            ));
        }
    }

    for ((start, end), slice) in wedge_angles(pie).into_iter().zip(&pie.slices) {
        let pos = point_on_circle(center, radius * 0.65, (start + end) / 2.0);
        let share = slice.value / total * 100.0;
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            format!("{share:.1}%"),
            FontId::proportional(13.0),
            Color32::WHITE,
        );
    }

    for (slice, color) in pie.slices.iter().zip(&colors) {
        ui.horizontal(|ui: &mut Ui| {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            ui.label(format!("{}  ({:.1}%)", slice.label, slice.value / total * 100.0));
        });
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Payload mass against outcome, one series per booster category.
pub fn scatter_chart(ui: &mut Ui, state: &AppState) {
    let chart = &state.scatter;
    ui.vertical_centered(|ui: &mut Ui| ui.strong(&chart.title));

    Plot::new("success_payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_x(state.slider.min)
        .include_x(state.slider.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (category, points) in chart.series_by_category() {
                let coords: PlotPoints = points
                    .iter()
                    .map(|p| [p.payload_mass, f64::from(p.outcome.as_class())])
                    .collect();

                plot_ui.points(
                    Points::new(coords)
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .radius(4.0)
                        .filled(true)
                        .shape(egui_plot::MarkerShape::Circle),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::PieSlice;

    fn pie(values: &[f64]) -> PieChart {
        PieChart {
            title: String::new(),
            slices: values
                .iter()
                .map(|&value| PieSlice {
                    label: value.to_string(),
                    value,
                })
                .collect(),
        }
    }

    #[test]
    fn wedges_cover_the_full_turn() {
        let wedges = wedge_angles(&pie(&[50.0, 25.0, 25.0]));
        assert_eq!(wedges.len(), 3);
        assert_eq!(wedges[0].0, 0.0);
        assert!((wedges[0].1 - TAU / 2.0).abs() < 1e-5);
        assert!((wedges[2].1 - TAU).abs() < 1e-5);
    }

    #[test]
    fn empty_pie_has_no_wedges() {
        assert!(wedge_angles(&pie(&[])).is_empty());
        assert!(wedge_angles(&pie(&[0.0])).is_empty());
    }
}
