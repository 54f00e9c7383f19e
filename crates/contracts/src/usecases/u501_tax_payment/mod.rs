pub mod request;

pub use request::{TaxPaymentDraft, TaxPaymentRequest};

use crate::usecases::common::UseCaseMetadata;

pub struct CreateTaxPayment;

impl UseCaseMetadata for CreateTaxPayment {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "tax_payment"
    }

    fn display_name() -> &'static str {
        "Nouveau paiement d'impôt"
    }

    fn steps() -> &'static [&'static str] {
        &["Impôt et période", "Montant et compte", "Confirmation"]
    }

    fn description() -> &'static str {
        "Enregistrement d'un versement à l'administration fiscale"
    }
}
