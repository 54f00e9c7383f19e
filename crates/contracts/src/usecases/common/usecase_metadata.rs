/// Identification of a multi-step use case.
pub trait UseCaseMetadata {
    /// Index such as "u501".
    fn usecase_index() -> &'static str;

    /// Technical name such as "tax_payment".
    fn usecase_name() -> &'static str;

    /// Title shown above the wizard.
    fn display_name() -> &'static str;

    /// Step titles, in order. Their count is the wizard length.
    fn steps() -> &'static [&'static str];

    fn description() -> &'static str {
        ""
    }

    /// "u501_tax_payment"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
