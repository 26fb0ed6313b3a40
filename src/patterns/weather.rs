use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::debug;

pub trait WeatherObserver: Debug {
    fn update(&self, temperature: f32, humidity: f32);
}

#[derive(Debug, Default)]
pub struct WeatherStation {
    observers: Vec<Arc<dyn WeatherObserver>>,
    temperature: f32,
    humidity: f32,
}

impl WeatherStation {
    pub fn new() -> Self {
        WeatherStation::default()
    }

    pub fn add_observer(&mut self, observer: Arc<dyn WeatherObserver>) {
        self.observers.push(observer);
    }

    pub fn remove_observer(&mut self, observer: &Arc<dyn WeatherObserver>) {
        self.observers.retain(|registered| !Arc::ptr_eq(registered, observer));
    }

    pub fn set_weather(&mut self, temperature: f32, humidity: f32) {
        self.temperature = temperature;
        self.humidity = humidity;
        debug!(temperature, humidity, "🌦️ Weather changed");
        self.notify_observers();
    }

    fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(self.temperature, self.humidity);
        }
    }
}

/// Prints the temperature part of every reading.
#[derive(Debug, Default)]
pub struct TemperatureDisplay {
    last: Mutex<Option<String>>,
}

impl TemperatureDisplay {
    pub fn last(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl WeatherObserver for TemperatureDisplay {
    fn update(&self, temperature: f32, _humidity: f32) {
        render(&self.last, format!("Temperature Display: {:?}°C", temperature));
    }
}

/// Prints the humidity part of every reading.
#[derive(Debug, Default)]
pub struct HumidityDisplay {
    last: Mutex<Option<String>>,
}

impl HumidityDisplay {
    pub fn last(&self) -> Option<String> {
        self.last.lock().ok().and_then(|last| last.clone())
    }
}

impl WeatherObserver for HumidityDisplay {
    fn update(&self, _temperature: f32, humidity: f32) {
        render(&self.last, format!("Humidity Display: {:?}%", humidity));
    }
}

fn render(last: &Mutex<Option<String>>, line: String) {
    println!("{}", line);
    if let Ok(mut last) = last.lock() {
        *last = Some(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_weather_updates_every_display() {
        let mut station = WeatherStation::new();
        let temperature = Arc::new(TemperatureDisplay::default());
        let humidity = Arc::new(HumidityDisplay::default());
        station.add_observer(temperature.clone());
        station.add_observer(humidity.clone());

        station.set_weather(25.0, 60.0);

        assert_eq!(temperature.last(), Some("Temperature Display: 25.0°C".to_string()));
        assert_eq!(humidity.last(), Some("Humidity Display: 60.0%".to_string()));
    }

    #[test]
    fn displays_show_nothing_before_the_first_reading() {
        let display = TemperatureDisplay::default();

        assert_eq!(display.last(), None);
    }

    #[test]
    fn removed_displays_keep_their_last_reading() {
        let mut station = WeatherStation::new();
        let display = Arc::new(HumidityDisplay::default());
        let handle: Arc<dyn WeatherObserver> = display.clone();
        station.add_observer(handle.clone());

        station.set_weather(20.0, 40.5);
        station.remove_observer(&handle);
        station.set_weather(21.0, 80.0);

        assert_eq!(display.last(), Some("Humidity Display: 40.5%".to_string()));
    }
}
