// Lets a mouse stand in for a finger: the left button is the contact, motion only
// counts while it is held.
use log::debug;
use smithay_client_toolkit::seat::pointer::{
    BTN_LEFT, PointerEvent, PointerEventKind, PointerHandler,
};
use wayland_client::{Connection, QueueHandle, protocol::wl_pointer};

use crate::input::InputEvent;

use super::super::state::WaylandState;

impl PointerHandler for WaylandState {
    fn pointer_frame(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _pointer: &wl_pointer::WlPointer,
        events: &[PointerEvent],
    ) {
        for event in events {
            let (x, y) = self.normalize(event.position);
            match event.kind {
                PointerEventKind::Enter { .. } => {
                    debug!(
                        "Pointer entered at ({}, {})",
                        event.position.0, event.position.1
                    );
                }
                PointerEventKind::Leave { .. } => {
                    debug!("Pointer left surface");
                }
                PointerEventKind::Motion { .. } => {
                    if self.pointer_held {
                        self.push_event(InputEvent::PointerMove { x, y });
                    }
                }
                PointerEventKind::Press { button, .. } => {
                    if button != BTN_LEFT {
                        continue;
                    }
                    if self.active_contact.is_some() {
                        debug!("Ignoring mouse press during touch gesture");
                        continue;
                    }
                    debug!(
                        "Button {} pressed at ({}, {})",
                        button, event.position.0, event.position.1
                    );
                    self.pointer_held = true;
                    self.push_event(InputEvent::PointerDown { x, y });
                }
                PointerEventKind::Release { button, .. } => {
                    if button != BTN_LEFT || !self.pointer_held {
                        continue;
                    }
                    debug!("Button {} released", button);
                    self.pointer_held = false;
                    self.push_event(InputEvent::PointerUp { x, y });
                }
                PointerEventKind::Axis { .. } => {}
            }
        }
    }
}
