pub trait Notification {
    fn send(&self, message: &str) -> String;
}

#[derive(Debug, Default)]
pub struct BasicNotification;

impl Notification for BasicNotification {
    fn send(&self, message: &str) -> String {
        format!("Sending notification: {}", message)
    }
}

#[derive(Debug)]
pub struct EmailDecorator<N: Notification> {
    inner: N,
}

impl<N: Notification> EmailDecorator<N> {
    pub fn new(inner: N) -> Self {
        EmailDecorator { inner }
    }
}

impl<N: Notification> Notification for EmailDecorator<N> {
    fn send(&self, message: &str) -> String {
        format!("{} via Email", self.inner.send(message))
    }
}

#[derive(Debug)]
pub struct SmsDecorator<N: Notification> {
    inner: N,
}

impl<N: Notification> SmsDecorator<N> {
    pub fn new(inner: N) -> Self {
        SmsDecorator { inner }
    }
}

impl<N: Notification> Notification for SmsDecorator<N> {
    fn send(&self, message: &str) -> String {
        format!("{} via SMS", self.inner.send(message))
    }
}
