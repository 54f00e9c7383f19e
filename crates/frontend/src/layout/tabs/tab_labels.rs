//! Tab titles, keyed by screen path.

use contracts::system::paths;

/// Readable title of the tab showing `key`. Unknown paths get a generic
/// title.
pub fn tab_label_for_key(key: &str) -> &'static str {
    if paths::employee_id_from_path(key).is_some() {
        return "Fiche employé";
    }
    match key {
        paths::DASHBOARD => "Tableau de bord",

        paths::ACCOUNTS => "Plan comptable",
        paths::INVOICES => "Factures",
        paths::PAYMENTS => "Encaissements",
        paths::PAYMENT_NEW => "Nouvel encaissement",
        paths::JOURNAL => "Écritures comptables",
        paths::BUDGETS => "Budgets",
        paths::TAX_PAYMENTS => "Impôts et taxes",
        paths::TAX_PAYMENT_NEW => "Nouveau paiement d'impôt",

        paths::EMPLOYEES => "Employés",
        paths::DISCIPLINARY => "Dossiers disciplinaires",
        paths::DISCIPLINARY_NEW => "Nouveau dossier disciplinaire",
        paths::COMPLIANCE => "Conformité sociale",
        paths::TRAININGS => "Formations",

        paths::SUPPLIERS => "Fournisseurs",
        paths::PURCHASE_ORDERS => "Bons de commande",
        paths::CUSTOMERS => "Clients",
        paths::SALES_ORDERS => "Commandes clients",
        paths::STOCK => "Stocks",
        paths::SUBSCRIPTIONS => "Abonnements",

        paths::WORKFLOWS => "Modèles de workflow",

        _ => "Page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_have_titles() {
        let all = [
            paths::DASHBOARD,
            paths::ACCOUNTS,
            paths::INVOICES,
            paths::PAYMENTS,
            paths::PAYMENT_NEW,
            paths::JOURNAL,
            paths::BUDGETS,
            paths::TAX_PAYMENTS,
            paths::TAX_PAYMENT_NEW,
            paths::EMPLOYEES,
            paths::DISCIPLINARY,
            paths::DISCIPLINARY_NEW,
            paths::COMPLIANCE,
            paths::TRAININGS,
            paths::SUPPLIERS,
            paths::PURCHASE_ORDERS,
            paths::CUSTOMERS,
            paths::SALES_ORDERS,
            paths::STOCK,
            paths::SUBSCRIPTIONS,
            paths::WORKFLOWS,
        ];
        for path in all {
            assert_ne!(tab_label_for_key(path), "Page", "{}", path);
        }
    }

    #[test]
    fn test_employee_detail_title() {
        assert_eq!(tab_label_for_key(&paths::employee_detail("emp-001")), "Fiche employé");
        assert_eq!(tab_label_for_key("/nowhere"), "Page");
    }
}
