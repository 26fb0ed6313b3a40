/// Anything the checkout can hand a payment to.
pub trait PaymentProcessor {
    fn process_payment(&self, amount: f32) -> String;
}

#[derive(Debug, Default)]
pub struct OldPaymentSystem;

impl PaymentProcessor for OldPaymentSystem {
    fn process_payment(&self, amount: f32) -> String {
        format!("Processed {:?} via old system", amount)
    }
}

#[derive(Debug, Default)]
pub struct NewPaymentApi;

impl NewPaymentApi {
    pub fn make_payment(&self, amount: f32) -> String {
        format!("Payment of {:?} made using new API", amount)
    }
}

/// Exposes a [`NewPaymentApi`] through the [`PaymentProcessor`] interface.
#[derive(Debug)]
pub struct PaymentAdapter {
    api: NewPaymentApi,
}

impl PaymentAdapter {
    pub fn new(api: NewPaymentApi) -> Self {
        PaymentAdapter { api }
    }
}

impl PaymentProcessor for PaymentAdapter {
    fn process_payment(&self, amount: f32) -> String {
        self.api.make_payment(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn old_system_processes_payments() {
        assert_eq!(OldPaymentSystem.process_payment(100.0), "Processed 100.0 via old system");
    }

    #[rstest]
    #[case(100.0, "Payment of 100.0 made using new API")]
    #[case(12.5, "Payment of 12.5 made using new API")]
    fn adapter_delegates_to_the_new_api(#[case] amount: f32, #[case] expected: &str) {
        let adapter = PaymentAdapter::new(NewPaymentApi);

        assert_eq!(adapter.process_payment(amount), expected);
    }

    #[test]
    fn both_systems_are_usable_as_a_payment_processor() {
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![Box::new(OldPaymentSystem), Box::new(PaymentAdapter::new(NewPaymentApi))];

        let results = processors.iter().map(|p| p.process_payment(1.0)).collect::<Vec<_>>();

        assert_eq!(results, vec!["Processed 1.0 via old system", "Payment of 1.0 made using new API"]);
    }
}
