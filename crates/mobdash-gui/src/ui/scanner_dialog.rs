//! Scanner-selection dialog. One checkbox per catalog entry; the required
//! scanner is rendered checked and disabled.

use eframe::egui;

use mobdash_core::catalog::SCANNERS;

use crate::app::DashboardApp;

pub fn draw_scanner_dialog(ctx: &egui::Context, app: &mut DashboardApp) {
    if !app.controller.dialog_open {
        return;
    }

    let mut open = true;
    egui::Window::new("Select Scanners")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            for scanner in SCANNERS {
                ui.horizontal(|ui| {
                    if scanner.required {
                        let mut always_on = true;
                        ui.add_enabled(false, egui::Checkbox::new(&mut always_on, scanner.name));
                        ui.weak("(required)");
                    } else {
                        let mut checked = app.controller.selected_scanners().contains(scanner.id);
                        if ui.checkbox(&mut checked, scanner.name).changed() {
                            app.controller.toggle_scanner(scanner.id);
                        }
                    }
                });
                ui.small(scanner.description);
                ui.add_space(4.0);
            }

            ui.separator();
            ui.horizontal(|ui| {
                let ready = app.controller.analysis_ready();
                if ui
                    .add_enabled(ready, egui::Button::new("Start Analysis"))
                    .clicked()
                {
                    // try_start closes the dialog itself.
                    app.start_analysis();
                }
                if !ready {
                    ui.weak("select a package first");
                }
                if ui.button("Done").clicked() {
                    app.controller.dialog_open = false;
                }
            });
        });

    // Window's own close button.
    if !open {
        app.controller.dialog_open = false;
    }

    // Keyboard escape mirrors the close button.
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.controller.dialog_open = false;
    }
}
