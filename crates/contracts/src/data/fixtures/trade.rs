use super::date;
use crate::domain::a002_supplier::{Supplier, SupplierStatus};
use crate::domain::a003_customer::{Customer, CustomerStatus};
use crate::domain::a013_purchase_order::{PurchaseOrder, PurchaseOrderLine, PurchaseStatus};
use crate::domain::a014_sales_order::{SalesOrder, SalesStatus};
use crate::domain::a015_stock_item::{StockItem, StockStatus};
use crate::domain::a016_subscription::{BillingCycle, Subscription, SubscriptionStatus};
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn supplier(
    n: u32,
    name: &str,
    tax_id: &str,
    (city, country): (&str, &str),
    contact_email: &str,
    phone: &str,
    balance_due: f64,
    created_on: NaiveDate,
    status: SupplierStatus,
) -> Supplier {
    Supplier {
        id: format!("sup-{:03}", n),
        code: format!("FRN-{:03}", n),
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        contact_email: contact_email.to_string(),
        phone: phone.to_string(),
        balance_due,
        created_on,
        status,
    }
}

pub fn suppliers() -> Vec<Supplier> {
    use SupplierStatus::*;
    vec![
        supplier(1, "Sahel Emballages SARL", "M051812345678A", ("Ouagadougou", "Burkina Faso"), "contact@sahel-emballages.bf", "+226 25 30 12 45", 2_146_500.0, date(2019, 5, 6), Active),
        supplier(2, "Camtel Business", "M039800011122K", ("Yaoundé", "Cameroun"), "entreprises@camtel.cm", "+237 2 22 23 40 00", 185_000.0, date(2017, 2, 1), Active),
        supplier(3, "Ivoire Informatique", "CI-1998-B-4521", ("Abidjan", "Côte d'Ivoire"), "ventes@ivoire-info.ci", "+225 27 20 31 45 00", 4_350_000.0, date(2021, 9, 13), Suspended),
        supplier(4, "Transit Dakar Port", "SN-DKR-2015-B-889", ("Dakar", "Sénégal"), "operations@transit-dakar.sn", "+221 33 849 12 00", 0.0, date(2015, 11, 30), Blocked),
        supplier(5, "Papeterie du Wouri", "M061400098765Z", ("Douala", "Cameroun"), "commandes@papeterie-wouri.cm", "+237 2 33 42 15 60", 96_000.0, date(2022, 1, 17), Active),
    ]
}

#[allow(clippy::too_many_arguments)]
fn customer(
    n: u32,
    name: &str,
    tax_id: &str,
    city: &str,
    email: &str,
    credit_limit: f64,
    outstanding: f64,
    status: CustomerStatus,
) -> Customer {
    Customer {
        id: format!("cus-{:03}", n),
        code: format!("CLI-{:03}", n),
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        city: city.to_string(),
        email: email.to_string(),
        credit_limit,
        outstanding,
        status,
    }
}

pub fn customers() -> Vec<Customer> {
    use CustomerStatus::*;
    vec![
        customer(1, "Brasseries du Littoral SA", "M010200034567B", "Douala", "achats@brasseries-littoral.cm", 15_000_000.0, 4_471_875.0, Active),
        customer(2, "Société Ivoirienne de Distribution", "CI-2005-A-1187", "Abidjan", "compta@sid.ci", 8_000_000.0, 2_504_250.0, Active),
        customer(3, "Hôtel Teranga Dakar", "SN-DKR-2010-A-302", "Dakar", "economat@teranga-hotel.sn", 3_000_000.0, 1_258_200.0, Active),
        customer(4, "Cimenterie du Sahel", "NE-NIA-2012-B-77", "Niamey", "finance@cimsahel.ne", 10_000_000.0, 3_720_600.0, Active),
        customer(5, "Pharmacie Centrale de Lomé", "TG-LOM-2008-B-415", "Lomé", "direction@pcl.tg", 5_000_000.0, 0.0, Active),
        customer(6, "Transports Bamako Express", "ML-BKO-2016-B-1290", "Bamako", "gestion@tbe.ml", 4_000_000.0, 3_681_600.0, Active),
        customer(7, "Librairie des Savanes", "M089900012345C", "Garoua", "librairie.savanes@gmail.com", 1_000_000.0, 0.0, Inactive),
    ]
}

fn po_line(item: &str, quantity: f64, unit_price: f64) -> PurchaseOrderLine {
    PurchaseOrderLine {
        item: item.to_string(),
        quantity,
        unit_price,
    }
}

pub fn purchase_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            id: "po-001".to_string(),
            number: "BC-2024-0001".to_string(),
            supplier_id: "sup-001".to_string(),
            supplier_name: "Sahel Emballages SARL".to_string(),
            order_date: date(2024, 1, 22),
            expected_date: date(2024, 2, 15),
            lines: vec![
                po_line("Cartons double cannelure", 5_000.0, 280.0),
                po_line("Film étirable 500 mm", 60.0, 7_500.0),
            ],
            total: 1_850_000.0,
            status: PurchaseStatus::Received,
        },
        PurchaseOrder {
            id: "po-002".to_string(),
            number: "BC-2024-0002".to_string(),
            supplier_id: "sup-003".to_string(),
            supplier_name: "Ivoire Informatique".to_string(),
            order_date: date(2024, 3, 6),
            expected_date: date(2024, 4, 5),
            lines: vec![
                po_line("Ordinateur portable 14\"", 6.0, 565_000.0),
                po_line("Onduleur 1500 VA", 6.0, 120_000.0),
            ],
            total: 4_110_000.0,
            status: PurchaseStatus::Sent,
        },
        PurchaseOrder {
            id: "po-003".to_string(),
            number: "BC-2024-0003".to_string(),
            supplier_id: "sup-005".to_string(),
            supplier_name: "Papeterie du Wouri".to_string(),
            order_date: date(2024, 4, 2),
            expected_date: date(2024, 4, 9),
            lines: vec![po_line("Ramettes A4 80 g", 100.0, 3_200.0)],
            total: 320_000.0,
            status: PurchaseStatus::Draft,
        },
        PurchaseOrder {
            id: "po-004".to_string(),
            number: "BC-2023-0041".to_string(),
            supplier_id: "sup-004".to_string(),
            supplier_name: "Transit Dakar Port".to_string(),
            order_date: date(2023, 11, 20),
            expected_date: date(2023, 12, 10),
            lines: vec![po_line("Dédouanement conteneur 40'", 1.0, 1_250_000.0)],
            total: 1_250_000.0,
            status: PurchaseStatus::Cancelled,
        },
    ]
}

pub fn sales_orders() -> Vec<SalesOrder> {
    let order = |n: u32, customer: (u32, &str), on: NaiveDate, salesperson: &str, item_count: u32, total: f64, status| {
        SalesOrder {
            id: format!("so-{:03}", n),
            number: format!("CV-2024-{:04}", n),
            customer_id: format!("cus-{:03}", customer.0),
            customer_name: customer.1.to_string(),
            order_date: on,
            salesperson: salesperson.to_string(),
            item_count,
            total,
            status,
        }
    };
    vec![
        order(1, (1, "Brasseries du Littoral SA"), date(2024, 1, 8), "Mariam Ouédraogo", 2, 3_458_250.0, SalesStatus::Invoiced),
        order(2, (4, "Cimenterie du Sahel"), date(2024, 3, 11), "Grace Nkoulou", 2, 3_720_600.0, SalesStatus::Delivered),
        order(3, (6, "Transports Bamako Express"), date(2024, 4, 15), "Mariam Ouédraogo", 2, 3_681_600.0, SalesStatus::Confirmed),
        order(4, (5, "Pharmacie Centrale de Lomé"), date(2024, 4, 25), "Grace Nkoulou", 1, 2_900_000.0, SalesStatus::Quote),
        order(5, (7, "Librairie des Savanes"), date(2024, 2, 2), "Mariam Ouédraogo", 4, 640_000.0, SalesStatus::Cancelled),
    ]
}

#[allow(clippy::too_many_arguments)]
fn stock(
    n: u32,
    sku: &str,
    name: &str,
    category: &str,
    warehouse: &str,
    (quantity, unit): (f64, &str),
    reorder_level: f64,
    unit_cost: f64,
    status: StockStatus,
) -> StockItem {
    StockItem {
        id: format!("stk-{:03}", n),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        warehouse: warehouse.to_string(),
        quantity,
        unit: unit.to_string(),
        reorder_level,
        unit_cost,
        status,
    }
}

pub fn stock_items() -> Vec<StockItem> {
    use StockStatus::*;
    vec![
        stock(1, "EMB-CART-01", "Carton double cannelure", "Emballage", "Douala - Bassa", (3_200.0, "pièce"), 1_000.0, 280.0, InStock),
        stock(2, "EMB-FILM-500", "Film étirable 500 mm", "Emballage", "Douala - Bassa", (8.0, "rouleau"), 20.0, 7_500.0, Low),
        stock(3, "INF-PC-14", "Ordinateur portable 14\"", "Informatique", "Yaoundé - Siège", (0.0, "pièce"), 2.0, 565_000.0, OutOfStock),
        stock(4, "PAP-A4-80", "Ramette A4 80 g", "Fournitures", "Yaoundé - Siège", (140.0, "ramette"), 50.0, 3_200.0, InStock),
        stock(5, "PNE-315-80", "Pneu poids lourd 315/80", "Pièces détachées", "Douala - Bassa", (4.0, "pièce"), 8.0, 210_000.0, Low),
        stock(6, "LIN-DRAP-2P", "Drap deux places", "Linge hôtelier", "Dakar - Plateforme", (460.0, "pièce"), 100.0, 3_700.0, InStock),
    ]
}

pub fn subscriptions() -> Vec<Subscription> {
    vec![
        Subscription {
            id: "sub-001".to_string(),
            reference: "ABO-0001".to_string(),
            customer_name: "Société Ivoirienne de Distribution".to_string(),
            plan: "Suite complète - 25 utilisateurs".to_string(),
            cycle: BillingCycle::Yearly,
            started_on: date(2023, 2, 1),
            next_billing: date(2025, 2, 1),
            amount: 4_200_000.0,
            status: SubscriptionStatus::Active,
        },
        Subscription {
            id: "sub-002".to_string(),
            reference: "ABO-0002".to_string(),
            customer_name: "Hôtel Teranga Dakar".to_string(),
            plan: "Comptabilité + Paie".to_string(),
            cycle: BillingCycle::Monthly,
            started_on: date(2023, 9, 1),
            next_billing: date(2024, 5, 1),
            amount: 95_000.0,
            status: SubscriptionStatus::PastDue,
        },
        Subscription {
            id: "sub-003".to_string(),
            reference: "ABO-0003".to_string(),
            customer_name: "Pharmacie Centrale de Lomé".to_string(),
            plan: "Gestion commerciale".to_string(),
            cycle: BillingCycle::Quarterly,
            started_on: date(2024, 4, 1),
            next_billing: date(2024, 5, 1),
            amount: 0.0,
            status: SubscriptionStatus::Trial,
        },
        Subscription {
            id: "sub-004".to_string(),
            reference: "ABO-0004".to_string(),
            customer_name: "Brasseries du Littoral SA".to_string(),
            plan: "Suite complète - 60 utilisateurs".to_string(),
            cycle: BillingCycle::Yearly,
            started_on: date(2022, 7, 1),
            next_billing: date(2024, 7, 1),
            amount: 9_600_000.0,
            status: SubscriptionStatus::Active,
        },
        Subscription {
            id: "sub-005".to_string(),
            reference: "ABO-0005".to_string(),
            customer_name: "Librairie des Savanes".to_string(),
            plan: "Facturation".to_string(),
            cycle: BillingCycle::Monthly,
            started_on: date(2023, 1, 1),
            next_billing: date(2024, 2, 1),
            amount: 25_000.0,
            status: SubscriptionStatus::Cancelled,
        },
    ]
}
