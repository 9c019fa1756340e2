use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Table of the launches currently in the scatter chart.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let records = &state.dataset.records;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(40.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in [
                "Flight",
                "Launch Site",
                "Payload Mass (kg)",
                "class",
                "Booster Version",
                "Booster Category",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.site);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", rec.payload_mass));
                });
                row.col(|ui| {
                    ui.label(rec.outcome.to_string());
                });
                row.col(|ui| {
                    ui.label(rec.booster_version.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(&rec.booster_category)
                            .color(state.booster_colors.color_for(&rec.booster_category)),
                    );
                });
            });
        });
}
