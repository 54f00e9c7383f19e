pub mod request;

pub use request::{AllocationDraft, CustomerPaymentDraft, CustomerPaymentRequest};

use crate::usecases::common::UseCaseMetadata;

pub struct ReceiveCustomerPayment;

impl UseCaseMetadata for ReceiveCustomerPayment {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "customer_payment"
    }

    fn display_name() -> &'static str {
        "Encaissement client"
    }

    fn steps() -> &'static [&'static str] {
        &["Client", "Imputation des factures", "Confirmation"]
    }

    fn description() -> &'static str {
        "Réception d'un règlement client et imputation sur ses factures"
    }
}
