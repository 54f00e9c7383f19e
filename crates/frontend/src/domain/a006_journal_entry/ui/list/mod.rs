use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::components::{DetailGrid, FilterPanel, ListHeader, RowToggle};
use crate::shared::data_context::use_data;
use crate::shared::list_state::MasterList;
use crate::shared::list_utils::highlighted;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a006_journal_entry::JournalEntry;
use contracts::shared::format::{format_amount, format_date};
use leptos::prelude::*;
use thaw::*;

/// Debit and credit totals agree to the franc.
fn is_balanced(entry: &JournalEntry) -> bool {
    (entry.total_debit() - entry.total_credit()).abs() < 0.5
}

fn amount_or_blank(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format_amount(value)
    }
}

fn entry_detail(entry: &JournalEntry) -> impl IntoView {
    let lines = entry
        .lines
        .iter()
        .map(|line| {
            view! {
                <tr>
                    <td>{line.account_number.clone()}</td>
                    <td>{line.label.clone()}</td>
                    <td class="amount">{amount_or_blank(line.debit)}</td>
                    <td class="amount">{amount_or_blank(line.credit)}</td>
                </tr>
            }
        })
        .collect_view();
    let balanced = is_balanced(entry);
    let total_debit = format_amount(entry.total_debit());
    let total_credit = format_amount(entry.total_credit());

    view! {
        <DetailGrid items=vec![
            ("Journal", entry.journal.label().to_string()),
            ("Date", format_date(entry.date)),
            ("Libellé", entry.description.clone()),
        ]>
            <table class="row-detail__lines">
                <thead>
                    <tr>
                        <th>"Compte"</th>
                        <th>"Libellé"</th>
                        <th>"Débit"</th>
                        <th>"Crédit"</th>
                    </tr>
                </thead>
                <tbody>{lines}</tbody>
                <tfoot>
                    <tr>
                        <td colspan="2">"Totaux"</td>
                        <td class="amount">{total_debit}</td>
                        <td class="amount">{total_credit}</td>
                    </tr>
                </tfoot>
            </table>
            {(!balanced).then(|| view! {
                <Badge variant="error".to_string()>"Écriture déséquilibrée"</Badge>
            })}
        </DetailGrid>
    }
}

#[component]
pub fn JournalEntryList() -> impl IntoView {
    let data = use_data();
    let list = MasterList::<JournalEntry>::new();
    let query = list.query();

    let fetch = move || {
        let source = data.source();
        list.load(move || async move { source.list_journal_entries().await });
    };

    fetch();

    view! {
        <PageFrame page_id="a006_journal_entry--list" category=PAGE_CAT_LIST>
            <ListHeader
                title="Écritures comptables"
                list=list
                export_filename="ecritures.csv"
                on_reload=fetch
            />

            <div class="page__content">
                <FilterPanel list=list placeholder="Numéro, libellé, compte..." with_dates=true />

                {move || list.error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:id="a006-journal-entry-table">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=40.0>""</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Numéro"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Journal"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=240.0>"Libellé"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Débit"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"Crédit"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Statut"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || list.filtered().into_iter().map(|entry| {
                                let id = entry.id.clone();
                                let toggle_id = id.clone();
                                let detail = StoredValue::new(entry.clone());
                                let total_debit = format_amount(entry.total_debit());
                                let total_credit = format_amount(entry.total_credit());
                                view! {
                                    <TableRow>
                                        <RowToggle list=list id=toggle_id />
                                        <TableCell>
                                            <TableCellLayout>
                                                {highlighted(entry.number.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(entry.date)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{entry.journal.label()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {highlighted(entry.description.clone(), query)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{total_debit}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="amount">{total_credit}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <StatusBadge status=entry.status />
                                        </TableCell>
                                    </TableRow>
                                    <Show when=move || list.is_expanded(&id)>
                                        <TableRow>
                                            <TableCell attr:colspan="8">
                                                {detail.with_value(|detail| entry_detail(detail))}
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a006_journal_entry::{EntryStatus, JournalCode, JournalLine};

    fn line(account: &str, debit: f64, credit: f64) -> JournalLine {
        JournalLine {
            account_number: account.to_string(),
            label: "Vente".to_string(),
            debit,
            credit,
        }
    }

    fn entry(lines: Vec<JournalLine>) -> JournalEntry {
        JournalEntry {
            id: "je-t".to_string(),
            number: "VE-0001".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            journal: JournalCode::Sales,
            description: "Vente".to_string(),
            lines,
            status: EntryStatus::Draft,
        }
    }

    #[test]
    fn test_is_balanced() {
        let ok = entry(vec![line("411100", 1180.0, 0.0), line("701000", 0.0, 1000.0), line("443100", 0.0, 180.0)]);
        assert!(is_balanced(&ok));

        let off = entry(vec![line("411100", 1000.0, 0.0), line("701000", 0.0, 900.0)]);
        assert!(!is_balanced(&off));
    }

    #[test]
    fn test_amount_or_blank() {
        assert_eq!(amount_or_blank(0.0), "");
        assert!(amount_or_blank(1500.0).ends_with("FCFA"));
    }
}
