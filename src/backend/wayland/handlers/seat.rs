// Manages seat capabilities and requests touch, pointer and keyboard devices as
// they appear.
use log::{debug, info, warn};
use smithay_client_toolkit::seat::{Capability, SeatHandler, SeatState};
use wayland_client::{Connection, QueueHandle, protocol::wl_seat};

use crate::input::InputEvent;

use super::super::state::WaylandState;

impl SeatHandler for WaylandState {
    fn seat_state(&mut self) -> &mut SeatState {
        &mut self.seat_state
    }

    fn new_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("New seat available");
    }

    fn new_capability(
        &mut self,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
        seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        match capability {
            Capability::Touch => {
                info!("Touch capability available");
                match self.seat_state.get_touch(qh, &seat) {
                    Ok(_) => debug!("Touch initialized"),
                    Err(err) => warn!("Failed to bind touch device: {}", err),
                }
            }
            Capability::Pointer => {
                info!("Pointer capability available");
                match self.seat_state.get_pointer(qh, &seat) {
                    Ok(_) => debug!("Pointer initialized"),
                    Err(err) => warn!("Failed to bind pointer: {}", err),
                }
            }
            Capability::Keyboard => {
                info!("Keyboard capability available");
                match self.seat_state.get_keyboard(qh, &seat, None) {
                    Ok(_) => debug!("Keyboard initialized"),
                    Err(err) => warn!("Failed to bind keyboard: {}", err),
                }
            }
            _ => {}
        }
    }

    fn remove_capability(
        &mut self,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
        _seat: wl_seat::WlSeat,
        capability: Capability,
    ) {
        match capability {
            Capability::Touch => {
                info!("Touch capability removed");
                if self.active_contact.take().is_some() {
                    self.push_event(InputEvent::PointerCancel);
                }
            }
            Capability::Pointer => {
                info!("Pointer capability removed");
                if std::mem::take(&mut self.pointer_held) {
                    self.push_event(InputEvent::PointerCancel);
                }
            }
            Capability::Keyboard => info!("Keyboard capability removed"),
            _ => {}
        }
    }

    fn remove_seat(&mut self, _conn: &Connection, _qh: &QueueHandle<Self>, _seat: wl_seat::WlSeat) {
        debug!("Seat removed");
    }
}
