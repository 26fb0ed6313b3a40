use crate::domain::device_factory::DeviceFactoryError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::warn;

pub type DeviceId = i32;

pub const DEFAULT_THERMOSTAT_TEMPERATURE: i32 = 70;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DeviceType {
    Light,
    Thermostat,
    DoorLock,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Light => "light",
            DeviceType::Thermostat => "thermostat",
            DeviceType::DoorLock => "door lock",
        }
    }

    pub fn all() -> [DeviceType; 3] {
        [DeviceType::Light, DeviceType::Thermostat, DeviceType::DoorLock]
    }

    fn display_name(&self) -> String {
        let tag = self.as_str();
        let mut chars = tag.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl FromStr for DeviceType {
    type Err = DeviceFactoryError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        DeviceType::all()
            .into_iter()
            .find(|device_type| device_type.as_str() == tag)
            .ok_or_else(|| DeviceFactoryError::UnrecognizedDeviceType(tag.to_string()))
    }
}

impl Display for DeviceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Every device starts out `Off`, door locks included.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DeviceStatus {
    Off,
    On,
    Locked,
    Unlocked,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceStatus::Off => "off",
            DeviceStatus::On => "on",
            DeviceStatus::Locked => "locked",
            DeviceStatus::Unlocked => "unlocked",
        }
    }
}

impl Display for DeviceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum DeviceKind {
    Light,
    Thermostat { temperature: i32 },
    DoorLock,
}

impl DeviceKind {
    fn device_type(&self) -> DeviceType {
        match self {
            DeviceKind::Light => DeviceType::Light,
            DeviceKind::Thermostat { .. } => DeviceType::Thermostat,
            DeviceKind::DoorLock => DeviceType::DoorLock,
        }
    }

    fn active_status(&self) -> DeviceStatus {
        match self {
            DeviceKind::Light | DeviceKind::Thermostat { .. } => DeviceStatus::On,
            DeviceKind::DoorLock => DeviceStatus::Locked,
        }
    }

    fn inactive_status(&self) -> DeviceStatus {
        match self {
            DeviceKind::Light | DeviceKind::Thermostat { .. } => DeviceStatus::Off,
            DeviceKind::DoorLock => DeviceStatus::Unlocked,
        }
    }
}

/// A controllable household device. Only the factory creates these.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Device {
    id: DeviceId,
    kind: DeviceKind,
    status: DeviceStatus,
}

impl Device {
    pub(in crate::domain) fn new(id: DeviceId, kind: DeviceKind) -> Self {
        Device {
            id,
            kind,
            status: DeviceStatus::Off,
        }
    }

    pub fn id(&self) -> DeviceId {
        self.id
    }

    pub fn device_type(&self) -> DeviceType {
        self.kind.device_type()
    }

    pub fn status(&self) -> DeviceStatus {
        self.status
    }

    /// Turns a light or thermostat on and locks a door lock.
    pub fn turn_on(&mut self) {
        self.status = self.kind.active_status();
    }

    /// Turns a light or thermostat off and unlocks a door lock.
    pub fn turn_off(&mut self) {
        self.status = self.kind.inactive_status();
    }

    /// Renders the device as e.g. `Door lock 3 is locked.`
    pub fn status_string(&self) -> String {
        format!("{} {} is {}.", self.device_type().display_name(), self.id, self.status)
    }

    pub fn temperature(&self) -> Option<i32> {
        match self.kind {
            DeviceKind::Thermostat { temperature } => Some(temperature),
            DeviceKind::Light | DeviceKind::DoorLock => None,
        }
    }

    /// Stores the target temperature of a thermostat. This also switches it on.
    pub fn set_temperature(&mut self, value: i32) {
        if let DeviceKind::Thermostat { temperature } = &mut self.kind {
            *temperature = value;
            self.status = DeviceStatus::On;
            return;
        }

        warn!(device_id = self.id, "⚠️ Ignoring temperature {} for {} {}, not a thermostat", value, self.device_type(), self.id);
    }
}
