use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::model::{PayloadRange, SiteSelection};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the site selector and the payload range control.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    let current = state.selection.site.clone();
    let mut chosen = None;
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(current.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == SiteSelection::All, "All Sites")
                .clicked()
            {
                chosen = Some(SiteSelection::All);
            }
            for site in &state.dataset.sites {
                let is_current = matches!(&current, SiteSelection::Site(s) if s == site);
                if ui.selectable_label(is_current, site).clicked() {
                    chosen = Some(SiteSelection::Site(site.clone()));
                }
            }
        });
    if let Some(site) = chosen {
        state.set_site(site);
    }

    ui.add_space(8.0);
    ui.separator();

    // ---- Payload range ----
    ui.strong("Payload range (Kg):");
    let bounds = state.slider;
    let PayloadRange { mut lo, mut hi } = state.selection.range;

    let lo_changed = ui
        .add(
            egui::Slider::new(&mut lo, bounds.min..=bounds.max)
                .step_by(bounds.step)
                .text("min"),
        )
        .changed();
    let hi_changed = ui
        .add(
            egui::Slider::new(&mut hi, bounds.min..=bounds.max)
                .step_by(bounds.step)
                .text("max"),
        )
        .changed();

    // Dragging one handle past the other pushes it along.
    if lo_changed && lo > hi {
        hi = lo;
    } else if hi_changed && hi < lo {
        lo = hi;
    }
    if lo_changed || hi_changed {
        state.set_range(PayloadRange::new(lo, hi));
    }

    if ui.small_button("Reset range").clicked() {
        state.set_range(state.dataset.full_range());
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with record counts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(28.0)
                .color(Color32::from_rgb(0x50, 0x3D, 0x36))
                .strong(),
        );
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches loaded, {} in payload chart",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        if state.pie.is_empty() {
            ui.separator();
            ui.label(RichText::new("No launches to chart for this site").color(Color32::RED));
        }
    });
}
