use crate::PaintApp;
use crate::components::ToolButton;
use crate::renderer::Tool;

/// Toolbar: tool selection plus the reset and save actions
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = app.controller().tool();
            if ToolButton::for_tool(Tool::Brush, active)
                .show(ui)
                .on_hover_text("Brush")
                .clicked()
            {
                app.controller_mut().select_tool(Tool::Brush);
            }

            ui.separator();

            if ToolButton::new("🗑", false)
                .show(ui)
                .on_hover_text("Clear canvas")
                .clicked()
            {
                app.controller_mut().reset();
            }
            if ToolButton::new("💾", false)
                .show(ui)
                .on_hover_text("Save (Ctrl+S)")
                .clicked()
            {
                app.save();
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}
