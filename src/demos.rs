use crate::app_config::Demo;
use crate::domain::{Device, DeviceFactory, DeviceFactoryError, HistoryObserver, LoggingObserver, Observer, ObserverError};
use crate::hub::SmartHomeHub;
use crate::patterns::adapter::{NewPaymentApi, OldPaymentSystem, PaymentAdapter, PaymentProcessor};
use crate::patterns::decorator::{BasicNotification, EmailDecorator, Notification, SmsDecorator};
use crate::patterns::logger::Logger;
use crate::patterns::weather::{HumidityDisplay, TemperatureDisplay, WeatherObserver, WeatherStation};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[instrument]
pub fn run(demo: Demo) -> Result<(), DemoError> {
    info!("▶️ Running demo...");
    let lines = match demo {
        Demo::SmartHome => smart_home()?,
        Demo::Adapter => adapter(),
        Demo::Decorator => decorator(),
        Demo::Weather => {
            weather();
            Vec::new()
        }
        Demo::Singleton => singleton(),
    };

    for line in lines {
        println!("{}", line);
    }
    info!("▶️ Running demo... OK");
    Ok(())
}

fn smart_home() -> Result<Vec<String>, DemoError> {
    let mut hub = SmartHomeHub::new();
    let history = Arc::new(HistoryObserver::default());
    let history_handle: Arc<dyn Observer> = history.clone();
    hub.add_observer(Arc::new(LoggingObserver));
    hub.add_observer(history_handle.clone());

    hub.add_device(DeviceFactory::create_device(1, "light")?);
    hub.add_device(DeviceFactory::create_device(2, "thermostat")?);
    hub.add_device(DeviceFactory::create_device(3, "door lock")?);

    hub.turn_on(1)?;
    hub.turn_on(2)?;
    hub.turn_off(3)?;

    hub.remove_observer(&history_handle);
    debug!(notifications = history.messages().len(), "📣 Detached notification history");

    if let Some(thermostat) = hub.device_mut(2) {
        thermostat.set_temperature(72);
    }
    if let Some(temperature) = hub.device(2).and_then(Device::temperature) {
        debug!(device_id = 2, temperature, "🌡️ Thermostat target set");
    }
    hub.set_schedule(1, "22:00", "off");
    hub.add_trigger("door unlocked", "turn on light");

    debug!(devices = hub.len(), "🏠 Hub ready");
    Ok(hub.show_status())
}

fn adapter() -> Vec<String> {
    let old_system = OldPaymentSystem;
    let adapter = PaymentAdapter::new(NewPaymentApi);

    vec![old_system.process_payment(100.0), adapter.process_payment(100.0)]
}

fn decorator() -> Vec<String> {
    let notification = SmsDecorator::new(EmailDecorator::new(BasicNotification));

    vec![notification.send("Hello World")]
}

fn weather() {
    let mut station = WeatherStation::new();
    let temperature = Arc::new(TemperatureDisplay::default());
    let humidity = Arc::new(HumidityDisplay::default());
    let humidity_handle: Arc<dyn WeatherObserver> = humidity.clone();
    station.add_observer(temperature.clone());
    station.add_observer(humidity_handle.clone());

    station.set_weather(25.0, 60.0);

    station.remove_observer(&humidity_handle);
    debug!(temperature = ?temperature.last(), humidity = ?humidity.last(), "🌦️ Detached humidity display");
}

fn singleton() -> Vec<String> {
    let logger1 = Logger::shared();
    let logger2 = logger1.clone();

    logger1.log("Singleton pattern applied");
    debug!(logged = logger2.logged(), "📝 Shared logger used");

    vec![Arc::ptr_eq(&logger1, &logger2).to_string()]
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    DeviceFactory(#[from] DeviceFactoryError),
    #[error(transparent)]
    Observer(#[from] ObserverError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn smart_home_reports_every_device_after_the_commands() {
        let mut lines = smart_home().unwrap();
        lines.sort();

        assert_eq!(lines, vec!["Door lock 3 is unlocked.", "Light 1 is on.", "Thermostat 2 is on."]);
    }

    #[test]
    fn adapter_prints_both_payment_systems() {
        assert_eq!(adapter(), vec!["Processed 100.0 via old system", "Payment of 100.0 made using new API"]);
    }

    #[test]
    fn decorator_prints_the_decorated_notification() {
        assert_eq!(decorator(), vec!["Sending notification: Hello World via Email via SMS"]);
    }

    #[test]
    fn singleton_reports_a_single_instance() {
        assert_eq!(singleton(), vec!["true"]);
    }

    #[test]
    fn every_demo_runs() {
        for demo in Demo::all() {
            assert!(run(demo).is_ok(), "demo {:?} failed", demo);
        }
    }
}
