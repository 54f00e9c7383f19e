use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::{StatCard, StatFormat, StatTone};
use crate::shared::data_context::use_data;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{load_overview, OverviewSummary};
use contracts::system::auth::Navigator;
use contracts::system::paths;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Any count above zero is a problem to look at.
fn alert_tone(count: usize, tone: StatTone) -> StatTone {
    if count > 0 {
        tone
    } else {
        StatTone::Good
    }
}

/// Overview of the figures that need attention today.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let data = use_data();

    let (summary, set_summary) = signal(None::<OverviewSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let fetch = move || {
        let source = data.source();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match load_overview(source.as_ref()).await {
                Ok(s) => set_summary.set(Some(s)),
                Err(e) => {
                    log::error!("Failed to load overview: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };
    fetch();

    let figure = move |f: fn(&OverviewSummary) -> f64| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(f)))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("dashboard")}
                    <h1 class="page__title">"Tableau de bord"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Chargement..." } else { " Actualiser" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Créances clients"
                        icon_name="invoices"
                        value=figure(|s| s.receivables_outstanding)
                        format=StatFormat::Amount
                        tone=StatTone::Neutral
                        subtitle=Signal::derive(move || Some("Factures en attente et en retard".to_string()))
                    />
                    <StatCard
                        label="Factures en retard"
                        icon_name="alert"
                        value=figure(|s| s.overdue_invoices as f64)
                        format=StatFormat::Count
                        tone=Signal::derive(move || {
                            alert_tone(summary.with(|s| s.as_ref().map_or(0, |s| s.overdue_invoices)), StatTone::Bad)
                        })
                    />
                    <StatCard
                        label="Effectif actif"
                        icon_name="users"
                        value=figure(|s| s.active_employees as f64)
                        format=StatFormat::Count
                        tone=StatTone::Neutral
                    />
                    <StatCard
                        label="Articles à réapprovisionner"
                        icon_name="inventory"
                        value=figure(|s| s.low_stock_items as f64)
                        format=StatFormat::Count
                        tone=Signal::derive(move || {
                            alert_tone(summary.with(|s| s.as_ref().map_or(0, |s| s.low_stock_items)), StatTone::Warning)
                        })
                    />
                    <StatCard
                        label="Abonnements actifs"
                        icon_name="billing"
                        value=figure(|s| s.active_subscriptions as f64)
                        format=StatFormat::Count
                        tone=StatTone::Neutral
                    />
                    <StatCard
                        label="Revenu récurrent"
                        icon_name="payments"
                        value=figure(|s| s.recurring_revenue)
                        format=StatFormat::Amount
                        tone=StatTone::Good
                        subtitle=Signal::derive(move || Some("Abonnements actifs, par échéance".to_string()))
                    />
                </div>

                <h3 class="section-title">"Actions rapides"</h3>
                <Flex gap=FlexGap::Small>
                    <Button on_click=move |_| ctx.navigate(paths::PAYMENT_NEW)>
                        {icon("plus")}
                        " Encaissement client"
                    </Button>
                    <Button on_click=move |_| ctx.navigate(paths::TAX_PAYMENT_NEW)>
                        {icon("plus")}
                        " Paiement d'impôt"
                    </Button>
                    <Button on_click=move |_| ctx.navigate(paths::DISCIPLINARY_NEW)>
                        {icon("plus")}
                        " Dossier disciplinaire"
                    </Button>
                </Flex>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_tone() {
        assert_eq!(alert_tone(0, StatTone::Bad), StatTone::Good);
        assert_eq!(alert_tone(2, StatTone::Bad), StatTone::Bad);
        assert_eq!(alert_tone(1, StatTone::Warning), StatTone::Warning);
    }
}
