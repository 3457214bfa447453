use log::{info, warn};

use crate::color::{self, Color};
use crate::error::CanvasResult;
use crate::geometry::Position;
use crate::input::{InputEvent, InputState, InputStateMachine, Reaction};
use crate::options::{BrushOptions, CanvasOptions};
use crate::renderer::{ExportStream, RenderPipeline, Tool};

/// Owns the configuration, the input state machine and the render pipeline,
/// and wires them together.
///
/// Configuration is only changed through the setters here, which push the
/// change to the pipeline before returning.
#[derive(Debug)]
pub struct DrawingController {
    brush: BrushOptions,
    canvas: CanvasOptions,
    tool: Tool,
    input: InputStateMachine,
    renderer: RenderPipeline,
}

impl Default for DrawingController {
    fn default() -> Self {
        let brush = BrushOptions::default();
        let canvas = CanvasOptions::default();
        let mut renderer = RenderPipeline::new(canvas.width, canvas.height);
        renderer.set_color(brush.color);
        Self {
            brush,
            canvas,
            tool: Tool::default(),
            input: InputStateMachine::new(),
            renderer,
        }
    }
}

impl DrawingController {
    pub fn new(brush: BrushOptions, canvas: CanvasOptions) -> CanvasResult<Self> {
        brush.validate()?;
        canvas.validate()?;

        let mut renderer = RenderPipeline::new(canvas.width, canvas.height);
        renderer.set_color(brush.color);

        Ok(Self {
            brush,
            canvas,
            tool: Tool::default(),
            input: InputStateMachine::new(),
            renderer,
        })
    }

    pub fn renderer(&self) -> &RenderPipeline {
        &self.renderer
    }

    pub fn input_state(&self) -> &InputState {
        self.input.state()
    }

    /// Raw pointer position, for the cursor readout
    pub fn cursor_position(&self) -> Option<Position> {
        self.input.state().pointer_position
    }

    /// Feeds one device event through the state machine.
    ///
    /// Returns the exported canvas when the event was the save shortcut.
    pub fn handle_event(&mut self, event: &InputEvent) -> CanvasResult<Option<ExportStream>> {
        match self.input.handle(event) {
            Reaction::None => Ok(None),
            Reaction::Redraw => {
                self.on_input_changed();
                Ok(None)
            }
            Reaction::Save => self.save().map(Some),
        }
    }

    fn on_input_changed(&mut self) {
        self.input
            .on_input_changed(&mut self.renderer, &self.brush, self.tool);
    }

    fn refresh_preview(&mut self) {
        self.renderer
            .preview_at(self.input.resolved_position(), &self.brush);
    }

    pub fn brush_options(&self) -> &BrushOptions {
        &self.brush
    }

    /// Stores new brush settings; they apply from the next preview or commit.
    pub fn set_brush_options(&mut self, brush: BrushOptions) -> CanvasResult<()> {
        if let Err(err) = brush.validate() {
            warn!("Rejected brush options {brush:?}: {err}");
            return Err(err);
        }
        if brush == self.brush {
            return Ok(());
        }

        if brush.color != self.brush.color {
            self.renderer.set_color(brush.color);
        }
        self.brush = brush;
        self.refresh_preview();
        Ok(())
    }

    pub fn set_brush_size(&mut self, size: u32) -> CanvasResult<()> {
        self.set_brush_options(BrushOptions { size, ..self.brush })
    }

    pub fn set_brush_color(&mut self, color: Color) -> CanvasResult<()> {
        self.set_brush_options(BrushOptions { color, ..self.brush })
    }

    /// Parses a color string such as `#ff8800`; the old color stays on error.
    pub fn set_brush_color_hex(&mut self, text: &str) -> CanvasResult<()> {
        let color = color::parse_hex(text)?;
        self.set_brush_color(color)
    }

    pub fn canvas_options(&self) -> &CanvasOptions {
        &self.canvas
    }

    /// Resizes both surfaces, preserving committed content.
    pub fn set_canvas_options(&mut self, canvas: CanvasOptions) -> CanvasResult<()> {
        if let Err(err) = canvas.validate() {
            warn!("Rejected canvas options {canvas:?}: {err}");
            return Err(err);
        }
        if canvas == self.canvas {
            return Ok(());
        }

        info!("Resizing canvas to {}x{}", canvas.width, canvas.height);
        self.renderer.resize_persistent(canvas.width, canvas.height)?;
        self.renderer.resize_preview(canvas.width, canvas.height)?;
        self.canvas = canvas;
        self.refresh_preview();
        Ok(())
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn select_tool(&mut self, tool: Tool) {
        info!("Selected tool: {}", tool.name());
        self.tool = tool;
    }

    /// Erases all committed content
    pub fn reset(&mut self) {
        self.renderer.clear_persistent();
    }

    pub fn save(&self) -> CanvasResult<ExportStream> {
        self.renderer.export_persistent()
    }
}
