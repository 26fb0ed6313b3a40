pub mod device;
pub mod device_factory;
pub mod observer;

pub use device::{Device, DeviceId};
pub use device_factory::{DeviceFactory, DeviceFactoryError};
pub use observer::{HistoryObserver, LoggingObserver, Observer, ObserverError};
