// Feeds the primary touch contact into the canvas; additional fingers are ignored
// until the first one lifts.
use log::debug;
use smithay_client_toolkit::seat::touch::TouchHandler;
use wayland_client::{
    Connection, QueueHandle,
    protocol::{wl_surface::WlSurface, wl_touch::WlTouch},
};

use crate::input::InputEvent;

use super::super::state::{ActiveContact, WaylandState};

impl TouchHandler for WaylandState {
    fn down(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &WlTouch,
        _serial: u32,
        _time: u32,
        _surface: WlSurface,
        id: i32,
        position: (f64, f64),
    ) {
        if let Some(active) = self.active_contact {
            debug!("Ignoring touch {} while contact {} is active", id, active.id);
            return;
        }
        if self.pointer_held {
            debug!("Ignoring touch {} during mouse gesture", id);
            return;
        }

        debug!("Touch {} down at ({}, {})", id, position.0, position.1);
        self.active_contact = Some(ActiveContact { id, position });
        let (x, y) = self.normalize(position);
        self.push_event(InputEvent::PointerDown { x, y });
    }

    fn up(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &WlTouch,
        _serial: u32,
        _time: u32,
        id: i32,
    ) {
        let Some(active) = self.active_contact.filter(|contact| contact.id == id) else {
            return;
        };

        debug!("Touch {} up", id);
        self.active_contact = None;
        let (x, y) = self.normalize(active.position);
        self.push_event(InputEvent::PointerUp { x, y });
    }

    fn motion(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &WlTouch,
        _time: u32,
        id: i32,
        position: (f64, f64),
    ) {
        let Some(active) = self.active_contact.as_mut().filter(|contact| contact.id == id) else {
            return;
        };

        active.position = position;
        let (x, y) = self.normalize(position);
        self.push_event(InputEvent::PointerMove { x, y });
    }

    fn shape(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &WlTouch,
        _id: i32,
        _major: f64,
        _minor: f64,
    ) {
    }

    fn orientation(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _touch: &WlTouch,
        _id: i32,
        _orientation: f64,
    ) {
    }

    fn cancel(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _touch: &WlTouch) {
        if let Some(active) = self.active_contact.take() {
            debug!("Touch {} cancelled by compositor", active.id);
            self.push_event(InputEvent::PointerCancel);
        }
    }
}
