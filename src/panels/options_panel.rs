use crate::PaintApp;
use crate::color;
use crate::options::CanvasOptions;

/// Side panel with brush and canvas settings and the cursor readout
pub fn options_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("options_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Brush");
            brush_options(app, ui);

            ui.separator();
            ui.heading("Cursor");
            let position = app.controller().cursor_position();
            ui.label(format!("X: {}", position.map(|p| p.x.to_string()).unwrap_or_default()));
            ui.label(format!("Y: {}", position.map(|p| p.y.to_string()).unwrap_or_default()));

            ui.separator();
            ui.heading("Canvas");
            canvas_options(app, ui);
        });
}

fn brush_options(app: &mut PaintApp, ui: &mut egui::Ui) {
    let brush = *app.controller().brush_options();

    let mut size = brush.size;
    if ui
        .add(egui::Slider::new(&mut size, 1..=100).text("Size"))
        .changed()
    {
        if let Err(err) = app.controller_mut().set_brush_size(size) {
            app.report(err);
        }
    }

    ui.horizontal(|ui| {
        ui.label("Color");

        let mut picked = color::to_color32(brush.color);
        if ui.color_edit_button_srgba(&mut picked).changed() {
            let picked = color::from_color32(picked);
            match app.controller_mut().set_brush_color(picked) {
                Ok(()) => app.color_text = color::to_hex(picked),
                Err(err) => app.report(err),
            }
        }

        let response = ui.add(egui::TextEdit::singleline(&mut app.color_text).desired_width(80.0));
        if response.lost_focus() {
            let text = app.color_text.clone();
            if let Err(err) = app.controller_mut().set_brush_color_hex(&text) {
                app.color_text = color::to_hex(app.controller().brush_options().color);
                app.report(err);
            }
        }
    });
}

fn canvas_options(app: &mut PaintApp, ui: &mut egui::Ui) {
    let current = *app.controller().canvas_options();
    let mut next = current;

    egui::Grid::new("canvas_options_grid")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label("Width");
            ui.add(egui::DragValue::new(&mut next.width).range(1..=8192));
            ui.end_row();

            ui.label("Height");
            ui.add(egui::DragValue::new(&mut next.height).range(1..=8192));
            ui.end_row();
        });

    if next != current {
        apply_canvas(app, next);
    }
}

fn apply_canvas(app: &mut PaintApp, canvas: CanvasOptions) {
    if let Err(err) = app.controller_mut().set_canvas_options(canvas) {
        app.report(err);
    }
}
