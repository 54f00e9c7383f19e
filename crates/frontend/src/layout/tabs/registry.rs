//! Tab content registry: the only place mapping a tab key (a screen path)
//! to its view.

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_account::ui::list::AccountList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_invoice::ui::list::InvoiceList;
use crate::domain::a005_payment::ui::list::PaymentList;
use crate::domain::a006_journal_entry::ui::list::JournalEntryList;
use crate::domain::a007_budget::ui::list::BudgetList;
use crate::domain::a008_tax_payment::ui::list::TaxPaymentList;
use crate::domain::a009_employee::ui::details::EmployeeDetails;
use crate::domain::a009_employee::ui::list::EmployeeList;
use crate::domain::a010_disciplinary_case::ui::details::NewDisciplinaryCase;
use crate::domain::a010_disciplinary_case::ui::list::DisciplinaryCaseList;
use crate::domain::a011_compliance_item::ui::list::ComplianceItemList;
use crate::domain::a012_training::ui::list::TrainingList;
use crate::domain::a013_purchase_order::ui::list::PurchaseOrderList;
use crate::domain::a014_sales_order::ui::list::SalesOrderList;
use crate::domain::a015_stock_item::ui::list::StockItemList;
use crate::domain::a016_subscription::ui::list::SubscriptionList;
use crate::domain::a017_workflow_template::ui::list::WorkflowTemplateList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_tax_payment::view::TaxPaymentWizard;
use crate::usecases::u502_customer_payment::view::CustomerPaymentWizard;
use contracts::system::paths;
use leptos::logging::log;
use leptos::prelude::*;

/// View of the tab `key`.
///
/// `tabs_store` lets forms close their own tab once done.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_close = key.to_string();

    if let Some(id) = paths::employee_id_from_path(key) {
        let id = id.to_string();
        return view! {
            <EmployeeDetails
                id=id
                on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
            />
        }
        .into_any();
    }

    match key {
        paths::DASHBOARD => view! { <OverviewDashboard /> }.into_any(),

        // Accounting
        paths::ACCOUNTS => view! { <AccountList /> }.into_any(),
        paths::INVOICES => view! { <InvoiceList /> }.into_any(),
        paths::PAYMENTS => view! { <PaymentList /> }.into_any(),
        paths::PAYMENT_NEW => view! { <CustomerPaymentWizard /> }.into_any(),
        paths::JOURNAL => view! { <JournalEntryList /> }.into_any(),
        paths::BUDGETS => view! { <BudgetList /> }.into_any(),
        paths::TAX_PAYMENTS => view! { <TaxPaymentList /> }.into_any(),
        paths::TAX_PAYMENT_NEW => view! { <TaxPaymentWizard /> }.into_any(),

        // HR
        paths::EMPLOYEES => view! { <EmployeeList /> }.into_any(),
        paths::DISCIPLINARY => view! { <DisciplinaryCaseList /> }.into_any(),
        paths::DISCIPLINARY_NEW => view! {
            <NewDisciplinaryCase
                on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
            />
        }
        .into_any(),
        paths::COMPLIANCE => view! { <ComplianceItemList /> }.into_any(),
        paths::TRAININGS => view! { <TrainingList /> }.into_any(),

        // Purchasing, sales, inventory, billing
        paths::SUPPLIERS => view! { <SupplierList /> }.into_any(),
        paths::PURCHASE_ORDERS => view! { <PurchaseOrderList /> }.into_any(),
        paths::CUSTOMERS => view! { <CustomerList /> }.into_any(),
        paths::SALES_ORDERS => view! { <SalesOrderList /> }.into_any(),
        paths::STOCK => view! { <StockItemList /> }.into_any(),
        paths::SUBSCRIPTIONS => view! { <SubscriptionList /> }.into_any(),

        paths::WORKFLOWS => view! { <WorkflowTemplateList /> }.into_any(),

        _ => {
            log!("unknown tab key: {}", key);
            view! { <div class="placeholder">{format!("Page introuvable : {}", key)}</div> }
                .into_any()
        }
    }
}
