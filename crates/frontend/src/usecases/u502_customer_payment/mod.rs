pub mod view;

pub use view::CustomerPaymentWizard;
