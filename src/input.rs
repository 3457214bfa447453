use egui::{Key, Modifiers, Pos2};
use log::{debug, warn};

use crate::geometry::{self, Position};
use crate::options::BrushOptions;
use crate::renderer::{RenderPipeline, Tool};

/// Device events as seen by the drawing surface.
///
/// Pointer positions are relative to the surface origin.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the surface
    PointerDown {
        position: Pos2,
        /// Whether the primary button is the one held
        primary: bool,
    },
    /// Pointer moved over the surface
    PointerMove { position: Pos2 },
    /// Mouse button was released
    PointerUp,
    /// Pointer left the surface
    PointerLeave,
    /// Key was pressed
    KeyDown { key: Key, modifiers: Modifiers },
    /// Key was released
    KeyUp { key: Key, modifiers: Modifiers },
    /// Modifier state changed without any other key
    ModifiersChanged(Modifiers),
}

/// What the owner should do after an event has been applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Nothing visible changed
    None,
    /// Position or drawing state changed; run [`InputStateMachine::on_input_changed`]
    Redraw,
    /// The save shortcut was pressed
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
}

/// Transient input bookkeeping, rebuilt from events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub drawing: bool,
    pub pointer_position: Option<Position>,
    /// Where the current gesture started; pivot for the axis lock
    pub anchor_position: Option<Position>,
    /// Shift is held
    pub axis_locked: bool,
}

/// Turns device events into drawing state and drives the render pipeline.
#[derive(Debug, Default)]
pub struct InputStateMachine {
    state: InputState,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.state.drawing {
            Phase::Drawing
        } else {
            Phase::Idle
        }
    }

    /// The pointer position after the axis lock has been applied
    pub fn resolved_position(&self) -> Option<Position> {
        geometry::resolve(
            self.state.pointer_position,
            self.state.anchor_position,
            self.state.axis_locked,
        )
    }

    /// Applies one event to the state
    pub fn handle(&mut self, event: &InputEvent) -> Reaction {
        let reaction = match event {
            InputEvent::PointerDown { position, primary } => {
                let Some(position) = Position::from_pos2(*position) else {
                    warn!("Ignoring pointer down without usable coordinates");
                    return Reaction::None;
                };
                self.state.drawing = *primary;
                self.state.anchor_position = Some(position);
                Reaction::Redraw
            }
            InputEvent::PointerMove { position } => {
                let Some(position) = Position::from_pos2(*position) else {
                    warn!("Ignoring pointer move without usable coordinates");
                    return Reaction::None;
                };
                self.state.pointer_position = Some(position);
                Reaction::Redraw
            }
            InputEvent::PointerUp => {
                self.state.drawing = false;
                self.state.anchor_position = None;
                Reaction::Redraw
            }
            InputEvent::PointerLeave => {
                self.state.pointer_position = None;
                self.state.anchor_position = None;
                Reaction::Redraw
            }
            InputEvent::KeyDown { key, modifiers } => {
                self.state.axis_locked = modifiers.shift;
                self.key_down(*key, modifiers)
            }
            InputEvent::ModifiersChanged(modifiers) => {
                self.state.axis_locked = modifiers.shift;
                Reaction::None
            }
            InputEvent::KeyUp { key, modifiers } => {
                self.state.axis_locked = modifiers.shift;
                if *key == Key::Space {
                    self.state.drawing = false;
                    Reaction::Redraw
                } else {
                    Reaction::None
                }
            }
        };

        debug!("{event:?} -> {:?} {:?}", self.phase(), self.state);
        reaction
    }

    fn key_down(&mut self, key: Key, modifiers: &Modifiers) -> Reaction {
        let command = modifiers.command || modifiers.ctrl || modifiers.mac_cmd;

        let delta = match key {
            Key::Space => {
                self.state.drawing = true;
                return Reaction::Redraw;
            }
            Key::S if command => return Reaction::Save,
            _ if command => return Reaction::None,
            Key::ArrowLeft => (-1, 0),
            Key::ArrowUp => (0, -1),
            Key::ArrowRight => (1, 0),
            Key::ArrowDown => (0, 1),
            _ => return Reaction::None,
        };

        match self.state.pointer_position.as_mut() {
            Some(position) => {
                *position = position.offset(delta.0, delta.1);
                Reaction::Redraw
            }
            None => Reaction::None,
        }
    }

    /// Resolves the position, redraws the preview and, while drawing,
    /// commits at the resolved position. Always in that order.
    pub fn on_input_changed(
        &self,
        renderer: &mut RenderPipeline,
        brush: &BrushOptions,
        tool: Tool,
    ) {
        let resolved = self.resolved_position();
        renderer.preview_at(resolved, brush);

        if self.state.drawing {
            if let Some(position) = resolved {
                renderer.commit(position, brush, tool);
            }
        }
    }
}
