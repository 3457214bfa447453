use egui::{Event, Modifiers, PointerButton, Rect};

use crate::PaintApp;
use crate::input::InputEvent;
use crate::renderer::SurfaceKind;

/// Shows both surfaces and feeds device input to the controller
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let canvas = *app.controller().canvas_options();
            let size = egui::vec2(canvas.width as f32, canvas.height as f32);
            let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

            let keyboard = !ctx.wants_keyboard_input();
            let mut tracker = app.tracker;
            let events = ctx.input(|i| translate_events(&i.events, i.modifiers, rect, &mut tracker, keyboard));
            app.tracker = tracker;

            for event in &events {
                match app.controller_mut().handle_event(event) {
                    Ok(Some(stream)) => app.write_export(&stream),
                    Ok(None) => {}
                    Err(err) => app.report(err),
                }
            }

            let (controller, textures) = app.textures_mut();
            let renderer = controller.renderer();

            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
            for kind in [SurfaceKind::Persistent, SurfaceKind::Preview] {
                let texture = textures.texture_for(ctx, kind, renderer.surface(kind));
                painter.image(texture, rect, uv, egui::Color32::WHITE);
            }
        });
    });
}

/// Input facts carried between frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputTracker {
    /// Whether the last pointer position was over the canvas
    pub pointer_inside: bool,
    /// Shift state as of the last frame
    pub shift_held: bool,
}

/// Converts raw egui events into surface-local drawing events.
///
/// egui reports no key events for modifiers alone, so a change in the
/// frame's shift state is emitted as `ModifiersChanged` ahead of the
/// frame's other events. Pointer moves are only reported over `canvas`;
/// leaving it yields a single `PointerLeave`. Key events are dropped unless
/// `keyboard` is set.
pub fn translate_events(
    raw: &[Event],
    modifiers: Modifiers,
    canvas: Rect,
    tracker: &mut InputTracker,
    keyboard: bool,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if modifiers.shift != tracker.shift_held {
        tracker.shift_held = modifiers.shift;
        events.push(InputEvent::ModifiersChanged(modifiers));
    }

    let pointer_inside = &mut tracker.pointer_inside;
    let local = |pos: egui::Pos2| (pos - canvas.min).to_pos2();

    for event in raw {
        match event {
            Event::PointerMoved(pos) => {
                if canvas.contains(*pos) {
                    *pointer_inside = true;
                    events.push(InputEvent::PointerMove {
                        position: local(*pos),
                    });
                } else if *pointer_inside {
                    *pointer_inside = false;
                    events.push(InputEvent::PointerLeave);
                }
            }
            Event::PointerGone => {
                if *pointer_inside {
                    *pointer_inside = false;
                    events.push(InputEvent::PointerLeave);
                }
            }
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                if !*pressed {
                    events.push(InputEvent::PointerUp);
                } else if canvas.contains(*pos) {
                    events.push(InputEvent::PointerDown {
                        position: local(*pos),
                        primary: *button == PointerButton::Primary,
                    });
                }
            }
            Event::Key {
                key,
                pressed,
                modifiers,
                ..
            } if keyboard => {
                events.push(if *pressed {
                    InputEvent::KeyDown {
                        key: *key,
                        modifiers: *modifiers,
                    }
                } else {
                    InputEvent::KeyUp {
                        key: *key,
                        modifiers: *modifiers,
                    }
                });
            }
            _ => {}
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Key, pos2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(20.0, 20.0))
    }

    #[test]
    fn test_moves_are_surface_local() {
        let mut tracker = InputTracker::default();
        let raw = [Event::PointerMoved(pos2(105.5, 60.0))];
        let events = translate_events(&raw, Modifiers::NONE, canvas(), &mut tracker, true);
        assert_eq!(events, vec![InputEvent::PointerMove { position: pos2(5.5, 10.0) }]);
        assert!(tracker.pointer_inside);
    }

    #[test]
    fn test_leaving_canvas_emits_single_leave() {
        let mut tracker = InputTracker { pointer_inside: true, ..Default::default() };
        let raw = [
            Event::PointerMoved(pos2(10.0, 10.0)),
            Event::PointerMoved(pos2(11.0, 10.0)),
            Event::PointerGone,
        ];
        let events = translate_events(&raw, Modifiers::NONE, canvas(), &mut tracker, true);
        assert_eq!(events, vec![InputEvent::PointerLeave]);
        assert!(!tracker.pointer_inside);
    }

    #[test]
    fn test_buttons() {
        let mut tracker = InputTracker { pointer_inside: true, ..Default::default() };
        let raw = [
            Event::PointerButton {
                pos: pos2(101.0, 51.0),
                button: PointerButton::Primary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
            Event::PointerButton {
                pos: pos2(0.0, 0.0),
                button: PointerButton::Secondary,
                pressed: true,
                modifiers: Modifiers::NONE,
            },
            Event::PointerButton {
                pos: pos2(0.0, 0.0),
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            },
        ];
        let events = translate_events(&raw, Modifiers::NONE, canvas(), &mut tracker, true);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerDown {
                    position: pos2(1.0, 1.0),
                    primary: true,
                },
                InputEvent::PointerUp,
            ]
        );
    }

    #[test]
    fn test_keys_respect_focus() {
        let raw = [Event::Key {
            key: Key::Space,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::SHIFT,
        }];
        let mut tracker = InputTracker::default();
        assert!(translate_events(&raw, Modifiers::NONE, canvas(), &mut tracker, false).is_empty());
        assert_eq!(
            translate_events(&raw, Modifiers::NONE, canvas(), &mut tracker, true),
            vec![InputEvent::KeyDown {
                key: Key::Space,
                modifiers: Modifiers::SHIFT,
            }]
        );
    }

    #[test]
    fn test_shift_alone_is_reported_once_per_change() {
        let mut tracker = InputTracker::default();
        let raw = [Event::PointerMoved(pos2(105.0, 55.0))];

        let events = translate_events(&raw, Modifiers::SHIFT, canvas(), &mut tracker, true);
        assert_eq!(
            events,
            vec![
                InputEvent::ModifiersChanged(Modifiers::SHIFT),
                InputEvent::PointerMove { position: pos2(5.0, 5.0) },
            ]
        );
        assert!(tracker.shift_held);

        let events = translate_events(&raw, Modifiers::SHIFT, canvas(), &mut tracker, true);
        assert_eq!(events, vec![InputEvent::PointerMove { position: pos2(5.0, 5.0) }]);

        let events = translate_events(&[], Modifiers::NONE, canvas(), &mut tracker, false);
        assert_eq!(events, vec![InputEvent::ModifiersChanged(Modifiers::NONE)]);
        assert!(!tracker.shift_held);
    }

    #[test]
    fn test_shift_alone_engages_axis_lock() {
        let mut machine = crate::input::InputStateMachine::new();
        let mut tracker = InputTracker::default();
        let frames = [
            (Modifiers::NONE, Event::PointerMoved(pos2(110.0, 60.0))),
            (
                Modifiers::NONE,
                Event::PointerButton {
                    pos: pos2(110.0, 60.0),
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ),
            (Modifiers::SHIFT, Event::PointerMoved(pos2(112.0, 68.0))),
        ];

        for (modifiers, event) in frames {
            for translated in translate_events(&[event], modifiers, canvas(), &mut tracker, true) {
                machine.handle(&translated);
            }
        }

        assert!(machine.state().axis_locked);
        assert_eq!(
            machine.resolved_position(),
            Some(crate::geometry::Position::new(10, 18))
        );
    }
}
