//! Screen paths handed to the navigator. They are plain strings: nothing
//! here parses or validates them.

pub const LOGIN: &str = "/login";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const DASHBOARD: &str = "/dashboard";

pub const ACCOUNTS: &str = "/accounting/accounts";
pub const INVOICES: &str = "/accounting/invoices";
pub const PAYMENTS: &str = "/accounting/payments";
pub const PAYMENT_NEW: &str = "/accounting/payments/new";
pub const JOURNAL: &str = "/accounting/journal";
pub const BUDGETS: &str = "/accounting/budgets";
pub const TAX_PAYMENTS: &str = "/accounting/tax-payments";
pub const TAX_PAYMENT_NEW: &str = "/accounting/tax-payments/new";

pub const SUPPLIERS: &str = "/purchasing/suppliers";
pub const PURCHASE_ORDERS: &str = "/purchasing/orders";
pub const CUSTOMERS: &str = "/sales/customers";
pub const SALES_ORDERS: &str = "/sales/orders";
pub const STOCK: &str = "/inventory/stock";
pub const SUBSCRIPTIONS: &str = "/billing/subscriptions";

pub const EMPLOYEES: &str = "/hr/employees";
pub const DISCIPLINARY: &str = "/hr/disciplinary";
pub const DISCIPLINARY_NEW: &str = "/hr/disciplinary/new";
pub const COMPLIANCE: &str = "/hr/compliance";
pub const TRAININGS: &str = "/hr/trainings";

pub const WORKFLOWS: &str = "/workflows";

/// `/hr/employees/:id`
pub fn employee_detail(id: &str) -> String {
    format!("{}/{}", EMPLOYEES, id)
}

/// Id part of an `/hr/employees/:id` path, if `path` is one.
pub fn employee_id_from_path(path: &str) -> Option<&str> {
    path.strip_prefix(EMPLOYEES)?
        .strip_prefix('/')
        .filter(|id| !id.is_empty() && !id.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_detail_path() {
        let path = employee_detail("emp-007");
        assert_eq!(path, "/hr/employees/emp-007");
        assert_eq!(employee_id_from_path(&path), Some("emp-007"));
        assert_eq!(employee_id_from_path(EMPLOYEES), None);
        assert_eq!(employee_id_from_path("/hr/employees/"), None);
        assert_eq!(employee_id_from_path(INVOICES), None);
    }
}
