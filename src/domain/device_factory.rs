use crate::domain::device::{DEFAULT_THERMOSTAT_TEMPERATURE, Device, DeviceId, DeviceKind, DeviceType};
use thiserror::Error;
use tracing::{debug, instrument};

pub struct DeviceFactory;

impl DeviceFactory {
    /// Builds a device for one of the tags `light`, `thermostat` or `door lock`.
    ///
    /// The id is not checked for uniqueness, that only matters once the device is added to a hub.
    #[instrument]
    pub fn create_device(id: DeviceId, tag: &str) -> Result<Device, DeviceFactoryError> {
        let device_type = tag.parse::<DeviceType>()?;
        Ok(Self::create(id, device_type))
    }

    pub fn create(id: DeviceId, device_type: DeviceType) -> Device {
        let kind = match device_type {
            DeviceType::Light => DeviceKind::Light,
            DeviceType::Thermostat => DeviceKind::Thermostat {
                temperature: DEFAULT_THERMOSTAT_TEMPERATURE,
            },
            DeviceType::DoorLock => DeviceKind::DoorLock,
        };

        debug!(device_id = id, "🏭 Created {} {}", device_type, id);
        Device::new(id, kind)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeviceFactoryError {
    #[error("unrecognized device type '{0}'")]
    UnrecognizedDeviceType(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::DeviceStatus;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, "light", DeviceType::Light)]
    #[case(2, "thermostat", DeviceType::Thermostat)]
    #[case(3, "door lock", DeviceType::DoorLock)]
    fn create_device_returns_a_device_of_the_requested_type(#[case] id: DeviceId, #[case] tag: &str, #[case] expected: DeviceType) {
        let device = DeviceFactory::create_device(id, tag).unwrap();

        assert_eq!(device.id(), id);
        assert_eq!(device.device_type(), expected);
        assert_eq!(device.device_type().as_str(), tag);
        assert_eq!(device.status(), DeviceStatus::Off);
    }

    #[test]
    fn create_device_gives_a_thermostat_the_default_temperature() {
        let device = DeviceFactory::create_device(2, "thermostat").unwrap();

        assert_eq!(device.temperature(), Some(70));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(42)]
    fn create_device_fails_for_an_unknown_type_regardless_of_id(#[case] id: DeviceId) {
        let result = DeviceFactory::create_device(id, "toaster");

        assert_eq!(result, Err(DeviceFactoryError::UnrecognizedDeviceType("toaster".to_string())));
    }

    #[test]
    fn unrecognized_device_type_error_names_the_tag() {
        let error = DeviceFactory::create_device(1, "fan").unwrap_err();

        assert_eq!(error.to_string(), "unrecognized device type 'fan'");
    }

    #[test]
    fn create_does_not_enforce_unique_ids() {
        let first = DeviceFactory::create(5, DeviceType::Light);
        let second = DeviceFactory::create(5, DeviceType::DoorLock);

        assert_eq!(first.id(), second.id());
        assert_ne!(first, second);
    }
}
