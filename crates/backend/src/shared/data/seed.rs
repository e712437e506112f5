//! Built-in demo dataset: a small coconut-products store.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_sale::{Sale, SaleId, SaleLine};
use contracts::domain::a003_finance_entry::{FinanceEntry, FinanceEntryId, FinanceKind};
use contracts::enums::PaymentMethod;

use super::Dataset;

fn days_ago(today: NaiveDate, days: i64) -> chrono::DateTime<Utc> {
    let date = today - Duration::days(days);
    Utc.from_utc_datetime(&date.and_time(chrono::NaiveTime::MIN))
}

fn line(id: &str, product_id: &str, name: &str, quantity: u32, unit_price: f64, total: f64) -> SaleLine {
    SaleLine {
        id: id.to_string(),
        product_id: ProductId::new(product_id),
        product_name: name.to_string(),
        quantity,
        unit_price,
        total,
    }
}

fn sale(
    id: &str,
    date: chrono::DateTime<Utc>,
    amount: f64,
    lines: Vec<SaleLine>,
    customer: Option<&str>,
    payment_method: PaymentMethod,
) -> Sale {
    Sale {
        id: SaleId::new(id),
        date,
        amount,
        lines,
        customer: customer.map(str::to_string),
        payment_method,
    }
}

fn entry(
    id: &str,
    date: chrono::DateTime<Utc>,
    amount: f64,
    category: &str,
    description: &str,
    kind: FinanceKind,
) -> FinanceEntry {
    FinanceEntry {
        id: FinanceEntryId::new(id),
        date,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        kind,
    }
}

pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("p1", "Coco Shampoo", "Personal Care", 12.99, 45)
            .with_description("Natural coconut shampoo")
            .with_cost_price(5.50),
        Product::new("p2", "Coconut Oil", "Foods", 8.99, 78)
            .with_description("Organic virgin coconut oil")
            .with_cost_price(3.75),
        Product::new("p3", "Coco Body Lotion", "Personal Care", 14.50, 32)
            .with_description("Moisturizing coconut body lotion")
            .with_cost_price(6.20),
        Product::new("p4", "Coconut Water", "Drinks", 3.49, 120)
            .with_description("Pure coconut water")
            .with_cost_price(1.25),
        Product::new("p5", "Coconut Lip Balm", "Personal Care", 4.99, 65)
            .with_description("Hydrating coconut lip balm")
            .with_cost_price(1.80),
    ]
}

pub fn seed_sales(today: NaiveDate) -> Vec<Sale> {
    use PaymentMethod::*;

    vec![
        sale(
            "s1",
            days_ago(today, 0),
            26.98,
            vec![
                line("si1", "p1", "Coco Shampoo", 1, 12.99, 12.99),
                line("si2", "p2", "Coconut Oil", 1, 8.99, 8.99),
                line("si3", "p5", "Coconut Lip Balm", 1, 4.99, 4.99),
            ],
            Some("Maria Rodriguez"),
            Cash,
        ),
        sale(
            "s2",
            days_ago(today, 1),
            18.98,
            vec![
                line("si4", "p3", "Coco Body Lotion", 1, 14.50, 14.50),
                line("si5", "p4", "Coconut Water", 1, 3.49, 3.49),
            ],
            Some("John Smith"),
            Credit,
        ),
        sale(
            "s3",
            days_ago(today, 1),
            27.98,
            vec![
                line("si6", "p1", "Coco Shampoo", 1, 12.99, 12.99),
                line("si7", "p3", "Coco Body Lotion", 1, 14.50, 14.50),
            ],
            Some("Ana Lopez"),
            Debit,
        ),
        sale(
            "s4",
            days_ago(today, 2),
            12.99,
            vec![line("si8", "p1", "Coco Shampoo", 1, 12.99, 12.99)],
            None,
            Cash,
        ),
        sale(
            "s5",
            days_ago(today, 3),
            13.98,
            vec![line("si9", "p4", "Coconut Water", 4, 3.49, 13.96)],
            Some("Carlos Mendez"),
            Cash,
        ),
        sale(
            "s6",
            days_ago(today, 3),
            31.47,
            vec![
                line("si10", "p2", "Coconut Oil", 2, 8.99, 17.98),
                line("si11", "p5", "Coconut Lip Balm", 3, 4.49, 13.47),
            ],
            Some("Elena Torres"),
            Credit,
        ),
    ]
}

pub fn seed_finance_entries(today: NaiveDate) -> Vec<FinanceEntry> {
    use FinanceKind::*;

    vec![
        entry("f1", days_ago(today, 0), 500.0, "Salary", "Withdrew for employee salary", Expense),
        entry("f2", days_ago(today, 7), 300.0, "Rent", "Store rent payment", Expense),
        entry("f3", days_ago(today, 10), 2500.0, "Investment", "Personal investment into business", Income),
        entry("f4", days_ago(today, 14), 150.0, "Utilities", "Electricity bill", Expense),
        entry("f5", days_ago(today, 21), 800.0, "Supplies", "New product inventory", Expense),
    ]
}

pub fn seed_dataset(today: NaiveDate) -> Dataset {
    Dataset {
        products: seed_products(),
        sales: seed_sales(today),
        finance_entries: seed_finance_entries(today),
    }
}
