use super::date;
use crate::domain::a001_account::{Account, AccountClass, AccountStatus};
use crate::domain::a004_invoice::{Invoice, InvoiceLine, InvoiceStatus};
use crate::domain::a005_payment::{Payment, PaymentAllocation, PaymentMethod, PaymentStatus};
use crate::domain::a006_journal_entry::{EntryStatus, JournalCode, JournalEntry, JournalLine};
use crate::domain::a007_budget::{Budget, BudgetStatus, BudgetVersion};
use crate::domain::a008_tax_payment::{TaxPayment, TaxPaymentStatus, TaxType};

fn account(id: &str, number: &str, label: &str, balance: f64, status: AccountStatus) -> Account {
    Account {
        id: id.to_string(),
        number: number.to_string(),
        label: label.to_string(),
        class: AccountClass::of_number(number).unwrap_or(AccountClass::OtherItems),
        balance,
        status,
    }
}

pub fn accounts() -> Vec<Account> {
    use AccountStatus::*;
    vec![
        account("acc-001", "101000", "Capital social", -50_000_000.0, Active),
        account("acc-002", "121000", "Report à nouveau créditeur", -8_450_000.0, Active),
        account("acc-003", "162000", "Emprunts auprès des établissements de crédit", -25_000_000.0, Active),
        account("acc-004", "213000", "Logiciels", 4_800_000.0, Active),
        account("acc-005", "244100", "Matériel de bureau", 6_250_000.0, Active),
        account("acc-006", "245100", "Matériel de transport", 18_900_000.0, Active),
        account("acc-007", "311000", "Marchandises", 12_340_000.0, Active),
        account("acc-008", "401100", "Fournisseurs", -9_875_000.0, Active),
        account("acc-009", "411100", "Clients", 21_430_000.0, Active),
        account("acc-010", "421000", "Personnel, rémunérations dues", -3_150_000.0, Active),
        account("acc-011", "431000", "Sécurité sociale (CNPS)", -1_240_000.0, Active),
        account("acc-012", "443100", "TVA facturée sur ventes", -4_120_000.0, Active),
        account("acc-013", "445200", "TVA récupérable sur achats", 2_310_000.0, Active),
        account("acc-014", "521100", "Banque SGBC - compte courant", 31_780_000.0, Active),
        account("acc-015", "521200", "Banque Ecobank - compte courant", 0.0, Inactive),
        account("acc-016", "571000", "Caisse siège", 685_000.0, Active),
        account("acc-017", "601100", "Achats de marchandises", 48_900_000.0, Active),
        account("acc-018", "622200", "Locations de bâtiments", 7_200_000.0, Active),
        account("acc-019", "661100", "Appointements et salaires", 37_800_000.0, Active),
        account("acc-020", "701100", "Ventes de marchandises", -96_500_000.0, Active),
        account("acc-021", "706000", "Services vendus", -14_750_000.0, Active),
        account("acc-022", "891000", "Impôts sur le résultat", 0.0, Inactive),
    ]
}

fn line(description: &str, quantity: f64, unit_price: f64) -> InvoiceLine {
    InvoiceLine {
        description: description.to_string(),
        quantity,
        unit_price,
        amount: quantity * unit_price,
    }
}

#[allow(clippy::too_many_arguments)]
fn invoice(
    id: &str,
    number: &str,
    customer: (&str, &str),
    issue_date: chrono::NaiveDate,
    due_date: chrono::NaiveDate,
    lines: Vec<InvoiceLine>,
    totals: (f64, f64, f64),
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        number: number.to_string(),
        customer_id: customer.0.to_string(),
        customer_name: customer.1.to_string(),
        issue_date,
        due_date,
        lines,
        total_excl_tax: totals.0,
        vat: totals.1,
        total_incl_tax: totals.2,
        status,
    }
}

pub fn invoices() -> Vec<Invoice> {
    vec![
        invoice(
            "inv-001",
            "FA-2024-0001",
            ("cus-001", "Brasseries du Littoral SA"),
            date(2024, 1, 15),
            date(2024, 2, 14),
            vec![
                line("Caisses de bouteilles 65 cl", 400.0, 6_500.0),
                line("Transport Douala - Yaoundé", 2.0, 150_000.0),
            ],
            (2_900_000.0, 558_250.0, 3_458_250.0),
            InvoiceStatus::Paid,
        ),
        invoice(
            "inv-002",
            "FA-2024-0002",
            ("cus-002", "Société Ivoirienne de Distribution"),
            date(2024, 2, 3),
            date(2024, 3, 4),
            vec![line("Licence logiciel de gestion (12 mois)", 5.0, 420_000.0)],
            (2_100_000.0, 404_250.0, 2_504_250.0),
            InvoiceStatus::Pending,
        ),
        invoice(
            "inv-003",
            "FA-2024-0003",
            ("cus-003", "Hôtel Teranga Dakar"),
            date(2024, 2, 12),
            date(2024, 3, 13),
            vec![
                line("Linge de lit (lot de 50)", 6.0, 185_000.0),
                line("Serviettes éponge (lot de 100)", 4.0, 95_000.0),
            ],
            (1_490_000.0, 268_200.0, 1_758_200.0),
            InvoiceStatus::Overdue,
        ),
        invoice(
            "inv-004",
            "FA-2024-0004",
            ("cus-001", "Brasseries du Littoral SA"),
            date(2024, 3, 1),
            date(2024, 3, 31),
            vec![line("Maintenance chaîne d'embouteillage", 1.0, 3_750_000.0)],
            (3_750_000.0, 721_875.0, 4_471_875.0),
            InvoiceStatus::Overdue,
        ),
        invoice(
            "inv-005",
            "FA-2024-0005",
            ("cus-004", "Cimenterie du Sahel"),
            date(2024, 3, 18),
            date(2024, 4, 17),
            vec![
                line("Sacs de ciment 50 kg - emballage", 10_000.0, 210.0),
                line("Palettes bois", 120.0, 8_500.0),
            ],
            (3_120_000.0, 600_600.0, 3_720_600.0),
            InvoiceStatus::Pending,
        ),
        invoice(
            "inv-006",
            "FA-2024-0006",
            ("cus-005", "Pharmacie Centrale de Lomé"),
            date(2024, 4, 2),
            date(2024, 5, 2),
            vec![line("Réfrigérateur médical 300 L", 2.0, 1_450_000.0)],
            (2_900_000.0, 0.0, 2_900_000.0),
            InvoiceStatus::Draft,
        ),
        invoice(
            "inv-007",
            "FA-2024-0007",
            ("cus-002", "Société Ivoirienne de Distribution"),
            date(2024, 4, 10),
            date(2024, 5, 10),
            vec![line("Formation utilisateurs (jour)", 3.0, 350_000.0)],
            (1_050_000.0, 202_125.0, 1_252_125.0),
            InvoiceStatus::Cancelled,
        ),
        invoice(
            "inv-008",
            "FA-2024-0008",
            ("cus-006", "Transports Bamako Express"),
            date(2024, 4, 22),
            date(2024, 5, 22),
            vec![
                line("Pneus poids lourd 315/80", 12.0, 245_000.0),
                line("Montage et équilibrage", 12.0, 15_000.0),
            ],
            (3_120_000.0, 561_600.0, 3_681_600.0),
            InvoiceStatus::Pending,
        ),
    ]
}

fn allocation(invoice_number: &str, amount: f64) -> PaymentAllocation {
    PaymentAllocation {
        invoice_number: invoice_number.to_string(),
        amount,
    }
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "pay-001".to_string(),
            reference: "ENC-2024-0001".to_string(),
            date: date(2024, 2, 10),
            customer_id: "cus-001".to_string(),
            customer_name: "Brasseries du Littoral SA".to_string(),
            account_number: "521100".to_string(),
            method: PaymentMethod::BankTransfer,
            amount: 3_458_250.0,
            allocations: vec![allocation("FA-2024-0001", 3_458_250.0)],
            status: PaymentStatus::Posted,
        },
        Payment {
            id: "pay-002".to_string(),
            reference: "ENC-2024-0002".to_string(),
            date: date(2024, 3, 5),
            customer_id: "cus-003".to_string(),
            customer_name: "Hôtel Teranga Dakar".to_string(),
            account_number: "571000".to_string(),
            method: PaymentMethod::Cash,
            amount: 500_000.0,
            allocations: vec![allocation("FA-2024-0003", 500_000.0)],
            status: PaymentStatus::Posted,
        },
        Payment {
            id: "pay-003".to_string(),
            reference: "ENC-2024-0003".to_string(),
            date: date(2024, 3, 28),
            customer_id: "cus-002".to_string(),
            customer_name: "Société Ivoirienne de Distribution".to_string(),
            account_number: "521100".to_string(),
            method: PaymentMethod::Cheque,
            amount: 1_500_000.0,
            allocations: vec![allocation("FA-2024-0002", 1_200_000.0)],
            status: PaymentStatus::Pending,
        },
        Payment {
            id: "pay-004".to_string(),
            reference: "ENC-2024-0004".to_string(),
            date: date(2024, 4, 15),
            customer_id: "cus-006".to_string(),
            customer_name: "Transports Bamako Express".to_string(),
            account_number: "521100".to_string(),
            method: PaymentMethod::MobileMoney,
            amount: 750_000.0,
            allocations: vec![],
            status: PaymentStatus::Pending,
        },
        Payment {
            id: "pay-005".to_string(),
            reference: "ENC-2024-0005".to_string(),
            date: date(2024, 4, 20),
            customer_id: "cus-004".to_string(),
            customer_name: "Cimenterie du Sahel".to_string(),
            account_number: "521100".to_string(),
            method: PaymentMethod::BankTransfer,
            amount: 2_000_000.0,
            allocations: vec![
                allocation("FA-2024-0005", 1_500_000.0),
                allocation("FA-2024-0004", 500_000.0),
            ],
            status: PaymentStatus::Cancelled,
        },
    ]
}

fn entry_line(account_number: &str, label: &str, debit: f64, credit: f64) -> JournalLine {
    JournalLine {
        account_number: account_number.to_string(),
        label: label.to_string(),
        debit,
        credit,
    }
}

pub fn journal_entries() -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: "je-001".to_string(),
            number: "VE-2024-0001".to_string(),
            date: date(2024, 1, 15),
            journal: JournalCode::Sales,
            description: "Facture FA-2024-0001 Brasseries du Littoral".to_string(),
            lines: vec![
                entry_line("411100", "Clients", 3_458_250.0, 0.0),
                entry_line("701100", "Ventes de marchandises", 0.0, 2_900_000.0),
                entry_line("443100", "TVA facturée", 0.0, 558_250.0),
            ],
            status: EntryStatus::Posted,
        },
        JournalEntry {
            id: "je-002".to_string(),
            number: "BQ-2024-0001".to_string(),
            date: date(2024, 2, 10),
            journal: JournalCode::Bank,
            description: "Règlement client ENC-2024-0001".to_string(),
            lines: vec![
                entry_line("521100", "Banque SGBC", 3_458_250.0, 0.0),
                entry_line("411100", "Clients", 0.0, 3_458_250.0),
            ],
            status: EntryStatus::Posted,
        },
        JournalEntry {
            id: "je-003".to_string(),
            number: "AC-2024-0001".to_string(),
            date: date(2024, 2, 20),
            journal: JournalCode::Purchases,
            description: "Facture fournisseur Sahel Emballages".to_string(),
            lines: vec![
                entry_line("601100", "Achats de marchandises", 1_800_000.0, 0.0),
                entry_line("445200", "TVA récupérable", 346_500.0, 0.0),
                entry_line("401100", "Fournisseurs", 0.0, 2_146_500.0),
            ],
            status: EntryStatus::Posted,
        },
        JournalEntry {
            id: "je-004".to_string(),
            number: "OD-2024-0001".to_string(),
            date: date(2024, 3, 31),
            journal: JournalCode::Miscellaneous,
            description: "Salaires mars 2024".to_string(),
            lines: vec![
                entry_line("661100", "Appointements et salaires", 3_150_000.0, 0.0),
                entry_line("421000", "Personnel, rémunérations dues", 0.0, 2_780_000.0),
                entry_line("431000", "CNPS", 0.0, 370_000.0),
            ],
            status: EntryStatus::Draft,
        },
        JournalEntry {
            id: "je-005".to_string(),
            number: "CA-2024-0001".to_string(),
            date: date(2024, 4, 5),
            journal: JournalCode::Cash,
            description: "Achat fournitures de bureau".to_string(),
            lines: vec![
                entry_line("604700", "Fournitures de bureau", 85_000.0, 0.0),
                entry_line("571000", "Caisse siège", 0.0, 85_000.0),
            ],
            status: EntryStatus::Cancelled,
        },
    ]
}

fn version(version: u32, on: chrono::NaiveDate, total: f64, author: &str, note: &str) -> BudgetVersion {
    BudgetVersion {
        version,
        date: on,
        total,
        author: author.to_string(),
        note: note.to_string(),
    }
}

pub fn budgets() -> Vec<Budget> {
    vec![
        Budget {
            id: "bud-001".to_string(),
            code: "BUD-2024-COM".to_string(),
            name: "Budget commercial 2024".to_string(),
            department: "Commercial".to_string(),
            fiscal_year: 2024,
            start_date: date(2024, 1, 1),
            total: 45_000_000.0,
            spent: 12_600_000.0,
            remaining: 32_400_000.0,
            versions: vec![
                version(1, date(2023, 11, 20), 40_000_000.0, "A. Kouassi", "Proposition initiale"),
                version(2, date(2023, 12, 15), 45_000_000.0, "M. Diallo", "Ajout campagne Sahel"),
            ],
            status: BudgetStatus::Approved,
        },
        Budget {
            id: "bud-002".to_string(),
            code: "BUD-2024-RH".to_string(),
            name: "Masse salariale 2024".to_string(),
            department: "Ressources humaines".to_string(),
            fiscal_year: 2024,
            start_date: date(2024, 1, 1),
            total: 152_000_000.0,
            spent: 37_800_000.0,
            remaining: 114_200_000.0,
            versions: vec![version(1, date(2023, 12, 1), 152_000_000.0, "F. Ndiaye", "Validé en comité")],
            status: BudgetStatus::Approved,
        },
        Budget {
            id: "bud-003".to_string(),
            code: "BUD-2024-IT".to_string(),
            name: "Investissements informatiques".to_string(),
            department: "Systèmes d'information".to_string(),
            fiscal_year: 2024,
            start_date: date(2024, 3, 1),
            total: 18_500_000.0,
            spent: 0.0,
            remaining: 18_500_000.0,
            versions: vec![
                version(1, date(2024, 2, 10), 22_000_000.0, "J. Mbarga", "Première estimation"),
                version(2, date(2024, 2, 25), 19_000_000.0, "J. Mbarga", "Report des serveurs"),
                version(3, date(2024, 3, 4), 18_500_000.0, "M. Diallo", "Arbitrage direction"),
            ],
            status: BudgetStatus::Draft,
        },
        Budget {
            id: "bud-004".to_string(),
            code: "BUD-2023-LOG".to_string(),
            name: "Logistique 2023".to_string(),
            department: "Logistique".to_string(),
            fiscal_year: 2023,
            start_date: date(2023, 1, 1),
            total: 27_000_000.0,
            spent: 28_350_000.0,
            remaining: -1_350_000.0,
            versions: vec![version(1, date(2022, 12, 5), 27_000_000.0, "S. Traoré", "Budget annuel")],
            status: BudgetStatus::Closed,
        },
    ]
}

pub fn tax_payments() -> Vec<TaxPayment> {
    vec![
        TaxPayment {
            id: "tax-001".to_string(),
            reference: "IMP-2024-0001".to_string(),
            tax_type: TaxType::Vat,
            period: "2024-01".to_string(),
            amount: 1_810_000.0,
            due_date: date(2024, 2, 15),
            paid_on: Some(date(2024, 2, 14)),
            bank_account: "521100".to_string(),
            status: TaxPaymentStatus::Paid,
        },
        TaxPayment {
            id: "tax-002".to_string(),
            reference: "IMP-2024-0002".to_string(),
            tax_type: TaxType::PayrollTax,
            period: "2024-01".to_string(),
            amount: 642_000.0,
            due_date: date(2024, 2, 15),
            paid_on: Some(date(2024, 2, 15)),
            bank_account: "521100".to_string(),
            status: TaxPaymentStatus::Paid,
        },
        TaxPayment {
            id: "tax-003".to_string(),
            reference: "IMP-2024-0003".to_string(),
            tax_type: TaxType::Vat,
            period: "2024-02".to_string(),
            amount: 2_045_000.0,
            due_date: date(2024, 3, 15),
            paid_on: None,
            bank_account: "521100".to_string(),
            status: TaxPaymentStatus::Overdue,
        },
        TaxPayment {
            id: "tax-004".to_string(),
            reference: "IMP-2024-0004".to_string(),
            tax_type: TaxType::CorporateIncomeTax,
            period: "2023".to_string(),
            amount: 6_980_000.0,
            due_date: date(2024, 4, 15),
            paid_on: None,
            bank_account: "521100".to_string(),
            status: TaxPaymentStatus::Submitted,
        },
        TaxPayment {
            id: "tax-005".to_string(),
            reference: "IMP-2024-0005".to_string(),
            tax_type: TaxType::WithholdingTax,
            period: "2024-03".to_string(),
            amount: 215_000.0,
            due_date: date(2024, 4, 15),
            paid_on: None,
            bank_account: "521100".to_string(),
            status: TaxPaymentStatus::Draft,
        },
        TaxPayment {
            id: "tax-006".to_string(),
            reference: "IMP-2024-0006".to_string(),
            tax_type: TaxType::BusinessLicense,
            period: "2024".to_string(),
            amount: 480_000.0,
            due_date: date(2024, 2, 28),
            paid_on: Some(date(2024, 2, 20)),
            bank_account: "571000".to_string(),
            status: TaxPaymentStatus::Paid,
        },
    ]
}
