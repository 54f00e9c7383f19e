use crate::shared::icons::icon;
use contracts::shared::format::{format_amount, format_number_int};
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// FCFA amount.
    Amount,
    /// Plain count.
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Neutral,
    Good,
    Warning,
    Bad,
}

fn format_value(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Amount => format_amount(value),
        StatFormat::Count => format_number_int(value),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or after an error
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
    #[prop(into)]
    tone: Signal<StatTone>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let tone_class = move || match tone.get() {
        StatTone::Good => "stat-card stat-card--success",
        StatTone::Bad => "stat-card stat-card--error",
        StatTone::Warning => "stat-card stat-card--warning",
        StatTone::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    view! {
        <div class=tone_class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(2_500_000.0, StatFormat::Amount), "2 500 000 FCFA");
        assert_eq!(format_value(12.0, StatFormat::Count), "12");
    }
}
