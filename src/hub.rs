use crate::domain::{Device, DeviceId, Observer, ObserverError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Registry of devices keyed by id, plus the observers that hear about every change.
///
/// Commands for an unknown id are silently ignored: nothing is mutated and no observer is
/// notified.
#[derive(Debug, Default)]
pub struct SmartHomeHub {
    devices: HashMap<DeviceId, Device>,
    observers: Vec<Arc<dyn Observer>>,
}

impl SmartHomeHub {
    pub fn new() -> Self {
        SmartHomeHub::default()
    }

    /// Registers a device at its own id. A device already registered at that id is replaced.
    pub fn add_device(&mut self, device: Device) {
        let device_id = device.id();
        if let Some(previous) = self.devices.insert(device_id, device) {
            warn!(device_id, "⚠️ Replaced {} {} in the hub", previous.device_type(), device_id);
        } else {
            debug!(device_id, "🔵 Registered device {}", device_id);
        }
    }

    pub fn device(&self, id: DeviceId) -> Option<&Device> {
        self.devices.get(&id)
    }

    pub fn device_mut(&mut self, id: DeviceId) -> Option<&mut Device> {
        self.devices.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn Observer>) {
        debug!("👀 Added observer {:?}", observer);
        self.observers.push(observer);
    }

    /// Removes the observer by identity. Unknown observers are ignored.
    pub fn remove_observer(&mut self, observer: &Arc<dyn Observer>) {
        let before = self.observers.len();
        self.observers.retain(|registered| !Arc::ptr_eq(registered, observer));

        if self.observers.len() < before {
            debug!("👀 Removed observer {:?}", observer);
        }
    }

    /// Delivers the message to every observer in registration order and stops at the first failure.
    pub fn notify_observers(&self, message: &str) -> Result<(), ObserverError> {
        for observer in &self.observers {
            observer.update(message)?;
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn turn_on(&mut self, id: DeviceId) -> Result<(), ObserverError> {
        self.control(id, Device::turn_on)
    }

    #[instrument(skip(self))]
    pub fn turn_off(&mut self, id: DeviceId) -> Result<(), ObserverError> {
        self.control(id, Device::turn_off)
    }

    fn control(&mut self, id: DeviceId, command: fn(&mut Device)) -> Result<(), ObserverError> {
        let Some(device) = self.devices.get_mut(&id) else {
            debug!(device_id = id, "Ignoring command for unknown device {}", id);
            return Ok(());
        };

        let previous_status = device.status();
        command(device);
        info!(device_id = id, "🟢 Set {} {} to '{}', was '{}'", device.device_type(), id, device.status(), previous_status);

        let message = device.status_string();
        self.notify_observers(&message)
    }

    /// Status strings of all devices. The order is unspecified.
    pub fn show_status(&self) -> Vec<String> {
        self.devices.values().map(Device::status_string).collect()
    }

    /// Accepted for compatibility, scheduling is not supported.
    pub fn set_schedule(&mut self, id: DeviceId, time: &str, command: &str) {
        debug!(device_id = id, "🕗 Ignoring schedule '{}' at '{}'", command, time);
    }

    /// Accepted for compatibility, triggers are not supported.
    pub fn add_trigger(&mut self, condition: &str, action: &str) {
        debug!("Ignoring trigger '{}' -> '{}'", condition, action);
    }
}
