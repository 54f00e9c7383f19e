use crate::shared::components::ui::StatusBadge;
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_supplier::Supplier;
use contracts::shared::format::{format_amount, format_date};
use contracts::shared::StatusDisplay;
use leptos::prelude::*;
use thaw::*;

fn supplier_detail(supplier: &Supplier) -> impl IntoView {
    view! {
        <DetailGrid items=vec![
            ("Code", supplier.code.clone()),
            ("Raison sociale", supplier.name.clone()),
            ("NIU", supplier.tax_id.clone()),
            ("Adresse", format!("{}, {}", supplier.city, supplier.country)),
            ("E-mail", supplier.contact_email.clone()),
            ("Téléphone", supplier.phone.clone()),
            ("Solde dû", format_amount(supplier.balance_due)),
            ("Créé le", format_date(supplier.created_on)),
            ("Statut", supplier.status.label().to_string()),
        ] />
    }
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<Supplier>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_suppliers().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a002_supplier--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Fournisseurs"
                list=list
                export_filename="fournisseurs.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Code, nom, NIU, ville..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a002-supplier-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Code"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Raison sociale"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"NIU"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Ville"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Solde dû"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|supplier| {
                                let id = supplier.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(supplier.clone());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(supplier.code.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(supplier.name.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(supplier.tax_id.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(supplier.city.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{format_amount(supplier.balance_due)}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=supplier.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="7">
                                                {detail.with_value(|detail| supplier_detail(detail))}
                                            </TableCell>
                                        </TableRow>
                                    </Show>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
