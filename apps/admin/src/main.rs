//! # Bolt Admin Entry Point
//!
//! Headless back-office console for the shop API.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Bolt Admin                                     │
//! │                                                                         │
//! │  main.rs ────► Sets up logging, config, session; dispatches a command  │
//! │                                                                         │
//! │  actions/ ───► async thunks: fetch, validate, submit                   │
//! │                                                                         │
//! │  state/ ─────► Store with one slice per domain                         │
//! │                                                                         │
//! │  session.rs ─► token + user persisted between runs                     │
//! │                          │                                              │
//! │                          ▼                                              │
//! │               bolt-client ──► shop API (HTTP/JSON)                     │
//! │                          │                                              │
//! │               bolt-core ───► ledger math, validation                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG, default info)
//! 2. Build client config from BOLT_API_* environment variables
//! 3. Restore the saved session, if any
//! 4. Dispatch the command line to an action
//! 5. Render the resulting slice to stdout

mod actions;
mod error;
mod session;
mod state;

use bolt_client::api::customers::{CustomerInput, CustomerListQuery};
use bolt_client::api::payments::PaymentListQuery;
use bolt_client::api::products::{ProductInput, ProductListQuery, StockAdjustment};
use bolt_client::api::sales::SaleListQuery;
use bolt_client::ClientConfig;
use bolt_core::totals::SaleLine;
use bolt_core::types::{PaymentMethod, ProductPrice, ProductStock};
use bolt_core::{CreditStanding, Money};
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};
use crate::state::Store;

const USAGE: &str = "\
bolt-admin - back-office console for the shop API

USAGE:
    bolt-admin <command> [args]

COMMANDS:
    login <email> <password>   Log in and save the session
    logout                     Log out and clear the saved session
    whoami                     Verify the saved session against the server
    dashboard                  Shop-wide figures and recent activity

    customers [search]         List customers
    customer <id>              One customer with ledger and standing
    customer add <name> <phone> [credit-limit]
    customer edit <id> <name> <phone> [credit-limit]
    customer delete <id>

    sales [search]             List sales
    sale <id>                  One sale with its line items
    sale new <customer> <product:qty:price[:discount]>...
                               Extra args: discount=N tax=N paid=N
    sale delete <id>

    payments [search]          List payments
    payment <id>               One payment with its allocations
    payment record <customer> <amount> <method> [sale=amount]...
    payment delete <id>

    products [search]          List products
    product <id>               One product
    product add <name> <purchase> <selling> [category]
    product delete <id>
    categories                 List the distinct product categories
    stock <id> <add|subtract|set> <qty>
    low-stock                  Products at or below minimum stock

ENVIRONMENT:
    BOLT_API_URL       API base URL (default http://localhost:5000/api)
    BOLT_API_TIMEOUT   Request timeout in seconds (default 30)
    RUST_LOG           Log filter (default info)";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("error ({:?}): {}", err.code, err.message);
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = Store::new();
    let client = ClientConfig::from_env().build_client();

    // Every command except login itself wants the saved token.
    let client = match actions::auth::restore(&store, &client)? {
        Some(authorized) => authorized,
        None => client,
    };

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["login", email, password] => {
            actions::auth::login(&store, &client, email, password).await?;
            let name = store.with(|s| s.auth.user.as_ref().map(|u| u.name.clone()));
            println!("Logged in as {}", name.unwrap_or_default());
        }
        ["logout"] => {
            actions::auth::logout(&store, &client).await?;
            println!("Logged out");
        }
        ["whoami"] => {
            if !store.with(|s| s.auth.is_authenticated()) {
                println!("Not logged in");
                return Ok(());
            }
            actions::auth::verify(&store, &client).await?;
            store.with(|s| {
                if let Some(user) = &s.auth.user {
                    println!("{} <{}>", user.name, user.email);
                }
            });
        }
        ["dashboard"] => {
            actions::dashboard::refresh(&store, &client, 6).await?;
            render_dashboard(&store);
        }
        ["customers", rest @ ..] => {
            let query = CustomerListQuery {
                search: rest.first().map(|s| s.to_string()),
                ..Default::default()
            };
            let result = actions::customers::fetch_all(&store, &client, query).await;
            render_customers(&store);
            result?;
        }
        ["customer", "add", name, phone, rest @ ..] => {
            let input = customer_input(name, phone, rest.first().copied())?;
            actions::customers::save(&store, &client, None, input).await?;
            println!("Customer saved");
        }
        ["customer", "edit", id, name, phone, rest @ ..] => {
            let input = customer_input(name, phone, rest.first().copied())?;
            actions::customers::save(&store, &client, Some(id), input).await?;
            store.with(|s| {
                if let Some(customer) = s.customers.find(id) {
                    println!("Customer {} updated", customer.name);
                }
            });
        }
        ["customer", "delete", id] => {
            actions::customers::remove(&store, &client, id).await?;
            println!("Customer {id} deleted");
        }
        ["customer", id] => {
            actions::customers::fetch_detail(&store, &client, id).await?;
            render_customer_detail(&store);
        }
        ["sales", rest @ ..] => {
            let query = SaleListQuery {
                search: rest.first().map(|s| s.to_string()),
                ..Default::default()
            };
            let result = actions::sales::fetch_all(&store, &client, query).await;
            render_sales(&store);
            result?;
        }
        ["sale", "new", customer, rest @ ..] => {
            let mut product_ids = Vec::new();
            let mut lines = Vec::new();
            let mut discount = Money::zero();
            let mut tax = Money::zero();
            let mut paid = Money::zero();
            for spec in rest {
                if let Some(value) = spec.strip_prefix("discount=") {
                    discount = parse_money(value)?;
                } else if let Some(value) = spec.strip_prefix("tax=") {
                    tax = parse_money(value)?;
                } else if let Some(value) = spec.strip_prefix("paid=") {
                    paid = parse_money(value)?;
                } else {
                    let (product, line) = parse_item(spec)?;
                    product_ids.push(product);
                    lines.push(line);
                }
            }
            store.with_mut(|s| {
                let draft = s.sales.begin_draft(customer);
                draft.lines = lines;
                draft.discount = discount;
                draft.tax = tax;
                draft.paid = paid;
            });
            actions::sales::submit_draft(&store, &client, &product_ids, None).await?;
            store.with(|s| {
                if let Some(sale) = s.sales.sales.last() {
                    println!(
                        "Sale {} saved: total {}, balance {} [{}]",
                        sale.invoice_number.as_deref().unwrap_or(&sale.id),
                        sale.total.format_inr(),
                        sale.balance.format_inr(),
                        sale.payment_status.label()
                    );
                }
            });
        }
        ["sale", "delete", id] => {
            actions::sales::remove(&store, &client, id).await?;
            println!("Sale {id} deleted");
        }
        ["sale", id] => {
            actions::sales::fetch_one(&store, &client, id).await?;
            render_sale_detail(&store);
        }
        ["payments", rest @ ..] => {
            let query = PaymentListQuery {
                search: rest.first().map(|s| s.to_string()),
                ..Default::default()
            };
            let result = actions::payments::fetch_all(&store, &client, query).await;
            render_payments(&store);
            result?;
        }
        ["payment", "record", customer, amount, method, rest @ ..] => {
            let amount = parse_money(amount)?;
            let method = parse_method(method)?;
            let allocations = rest
                .iter()
                .map(|spec| parse_allocation(spec))
                .collect::<AppResult<Vec<_>>>()?;
            store.with_mut(|s| {
                let draft = s.payments.begin_draft(customer, amount);
                draft.method = method;
                for (sale, amount) in &allocations {
                    draft.plan.set(sale, *amount);
                }
            });
            actions::payments::submit_draft(&store, &client).await?;
            store.with(|s| {
                if let Some(payment) = s.payments.payments.last() {
                    println!(
                        "Payment {} recorded: {}, unallocated {}",
                        payment.receipt_number.as_deref().unwrap_or(&payment.id),
                        payment.amount.format_inr(),
                        payment.remaining_amount.format_inr()
                    );
                }
            });
        }
        ["payment", "delete", id] => {
            actions::payments::remove(&store, &client, id).await?;
            println!("Payment {id} deleted");
        }
        ["payment", id] => {
            actions::payments::fetch_one(&store, &client, id).await?;
            render_payment_detail(&store);
        }
        ["product", "add", name, purchase, selling, rest @ ..] => {
            let input = ProductInput {
                name: name.to_string(),
                category: rest.first().map(|s| s.to_string()),
                price: ProductPrice {
                    purchase: parse_money(purchase)?,
                    selling: parse_money(selling)?,
                    mrp: None,
                },
                stock: ProductStock::default(),
                is_active: true,
                ..Default::default()
            };
            actions::products::save(&store, &client, None, input).await?;
            println!("Product saved");
        }
        ["product", "delete", id] => {
            actions::products::remove(&store, &client, id).await?;
            println!("Product {id} deleted");
        }
        ["product", id] => {
            actions::products::fetch_one(&store, &client, id).await?;
            render_product_detail(&store);
        }
        ["categories"] => {
            actions::products::fetch_categories(&store, &client).await?;
            store.with(|s| {
                for category in &s.products.categories {
                    println!("{category}");
                }
            });
        }
        ["stock", id, operation, quantity] => {
            let quantity: i64 = quantity
                .parse()
                .map_err(|_| AppError::validation(format!("Not a quantity: {quantity}")))?;
            if !matches!(*operation, "add" | "subtract" | "set") {
                return Err(AppError::validation(format!(
                    "Unknown stock operation: {operation}"
                )));
            }
            let adjustment = StockAdjustment {
                quantity,
                operation: operation.to_string(),
            };
            actions::products::adjust_stock(&store, &client, id, adjustment).await?;
            store.with(|s| {
                if let Some(product) = s.products.products.iter().find(|p| p.id == *id) {
                    println!("{}: stock now {}", product.name, product.stock.current);
                }
            });
        }
        ["products", rest @ ..] => {
            let query = ProductListQuery {
                search: rest.first().map(|s| s.to_string()),
                ..Default::default()
            };
            let result = actions::products::fetch_all(&store, &client, query).await;
            render_products(&store, false);
            result?;
        }
        ["low-stock"] => {
            actions::products::fetch_low_stock(&store, &client).await?;
            render_products(&store, true);
        }
        _ => {
            println!("{USAGE}");
        }
    }

    Ok(())
}

fn render_dashboard(store: &Store) {
    store.with(|s| {
        let Some(stats) = &s.dashboard.stats else { return };
        println!("Today:    {} sales, {}", stats.today_sales, stats.today_revenue.format_inr());
        println!(
            "Overall:  {} sales, {} revenue",
            stats.total_sales,
            stats.total_revenue.format_inr()
        );
        println!(
            "Shop:     {} products ({} low on stock), {} customers",
            stats.total_products, stats.low_stock_products, stats.total_customers
        );
        println!("Pending:  {}", stats.pending_payments.format_inr());

        if !s.dashboard.activities.is_empty() {
            println!("\nRecent activity:");
            for activity in &s.dashboard.activities {
                let reference = activity
                    .invoice_number
                    .as_deref()
                    .or(activity.receipt_number.as_deref())
                    .unwrap_or("-");
                println!(
                    "  {:10}  {:12}  {}  {}",
                    reference,
                    activity.amount.format_inr(),
                    activity.customer.as_deref().unwrap_or("-"),
                    activity
                        .date
                        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default()
                );
            }
        }
    });
}

fn render_customers(store: &Store) {
    store.with(|s| {
        if let Some(message) = s.customers.load.error() {
            println!("customers unavailable: {message}");
            return;
        }
        for customer in &s.customers.customers {
            let standing = CreditStanding::for_customer(customer, None);
            println!(
                "{}  {:30}  {:12}  {:14}  {}",
                customer.id,
                customer.name,
                customer.phone,
                customer.outstanding_amount.format_inr(),
                standing.standing.label()
            );
        }
        println!("{} customers", s.customers.customers.len());
    });
}

fn render_customer_detail(store: &Store) {
    store.with(|s| {
        let Some(detail) = &s.customers.detail else { return };
        let customer = &detail.customer;
        let standing = CreditStanding::for_customer(customer, detail.sales_stats.as_ref());

        println!("{}  ({})", customer.name, customer.phone);
        if let Some(email) = &customer.email {
            println!("Email:        {email}");
        }
        println!(
            "Outstanding:  {}  [{}]",
            standing.outstanding.format_inr(),
            standing.standing.label()
        );
        if customer.credit_limit.is_positive() {
            println!(
                "Credit limit: {}  ({:.0}% used)",
                customer.credit_limit.format_inr(),
                standing.utilization_clamped()
            );
            if standing.over_by.is_positive() {
                println!("Over limit:   {}", standing.over_by.format_inr());
            }
        } else {
            println!("Credit limit: unlimited");
        }
        if let Some(stats) = &detail.sales_stats {
            println!(
                "Sales:        {} total, {} paid, {} pending, {} volume",
                stats.total_sales,
                stats.paid_sales,
                stats.pending_sales,
                stats.total_amount.format_inr()
            );
        }
        if let Some(adjusted) = detail.adjusted_outstanding {
            if adjusted != customer.outstanding_amount {
                println!("Net of credit: {}", adjusted.format_inr());
            }
        }

        if !detail.sales.is_empty() {
            println!("\nSales:");
            for sale in &detail.sales {
                println!(
                    "  {:14}  {:12}  paid {:12}  balance {:12}  {}",
                    sale.invoice_number.as_deref().unwrap_or("-"),
                    sale.total.format_inr(),
                    sale.paid.format_inr(),
                    sale.balance.format_inr(),
                    sale.payment_status.label()
                );
            }
        }
        if !detail.payments.is_empty() {
            println!("\nPayments:");
            for payment in &detail.payments {
                println!(
                    "  {:14}  {:12}  {}  unallocated {}",
                    payment.receipt_number.as_deref().unwrap_or("-"),
                    payment.amount.format_inr(),
                    payment.payment_method.label(),
                    payment.remaining_amount.format_inr()
                );
            }
        }
    });
}

fn render_sales(store: &Store) {
    store.with(|s| {
        if let Some(message) = s.sales.load.error() {
            println!("sales unavailable: {message}");
            return;
        }
        for sale in &s.sales.sales {
            println!(
                "{}  {:14}  {:12}  balance {:12}  {}",
                sale.id,
                sale.invoice_number.as_deref().unwrap_or("-"),
                sale.total.format_inr(),
                sale.balance.format_inr(),
                sale.payment_status.label()
            );
        }
        println!("{} sales", s.sales.sales.len());
    });
}

fn render_payments(store: &Store) {
    store.with(|s| {
        if let Some(message) = s.payments.load.error() {
            println!("payments unavailable: {message}");
            return;
        }
        for payment in &s.payments.payments {
            let customer = payment
                .customer
                .as_ref()
                .and_then(|c| c.name())
                .unwrap_or("-");
            println!(
                "{}  {:14}  {:12}  {:14}  {}",
                payment.id,
                payment.receipt_number.as_deref().unwrap_or("-"),
                payment.amount.format_inr(),
                payment.payment_method.label(),
                customer
            );
        }
        println!("{} payments", s.payments.payments.len());
    });
}

fn render_sale_detail(store: &Store) {
    store.with(|s| {
        let Some(sale) = &s.sales.current else { return };
        println!(
            "{}  {}  [{}]",
            sale.invoice_number.as_deref().unwrap_or(&sale.id),
            sale.customer.name().unwrap_or(sale.customer.id()),
            sale.payment_status.label()
        );
        for item in &sale.items {
            println!(
                "  {:30}  {:6} x {:10}  -{:8}  = {}",
                item.product.name().unwrap_or(item.product.id()),
                item.quantity,
                item.price.format_inr(),
                item.discount.format_inr(),
                item.total.format_inr()
            );
        }
        println!("Subtotal: {}", sale.subtotal.format_inr());
        println!("Discount: {}", sale.discount.format_inr());
        println!("Tax:      {}", sale.tax.format_inr());
        println!("Total:    {}", sale.total.format_inr());
        println!("Paid:     {}", sale.paid.format_inr());
        println!("Balance:  {}", sale.balance.format_inr());
    });
}

fn render_payment_detail(store: &Store) {
    store.with(|s| {
        let Some(payment) = &s.payments.current else { return };
        println!(
            "{}  {}  {}",
            payment.receipt_number.as_deref().unwrap_or(&payment.id),
            payment.amount.format_inr(),
            payment.payment_method.label()
        );
        for allocation in &payment.sales {
            println!(
                "  -> sale {}  {}",
                allocation.sale.id(),
                allocation.amount.format_inr()
            );
        }
        println!("Allocated:   {}", payment.total_allocated.format_inr());
        println!("Unallocated: {}", payment.remaining_amount.format_inr());
    });
}

fn render_product_detail(store: &Store) {
    store.with(|s| {
        let Some(product) = &s.products.current else { return };
        println!("{}  ({})", product.name, product.id);
        if let Some(category) = &product.category {
            println!("Category: {category}");
        }
        println!("Purchase: {}", product.price.purchase.format_inr());
        println!("Selling:  {}", product.price.selling.format_inr());
        if let Some(mrp) = product.price.mrp {
            println!("MRP:      {}", mrp.format_inr());
        }
        println!(
            "Stock:    {} (min {}){}",
            product.stock.current,
            product.stock.minimum,
            if product.is_low_stock() { "  LOW" } else { "" }
        );
    });
}

fn render_products(store: &Store, low_stock: bool) {
    store.with(|s| {
        if let Some(message) = s.products.load.error() {
            println!("products unavailable: {message}");
            return;
        }
        let products = if low_stock {
            &s.products.low_stock
        } else {
            &s.products.products
        };
        for product in products {
            let flag = if product.is_low_stock() { "LOW" } else { "" };
            println!(
                "{}  {:30}  {:12}  stock {:4} (min {:3})  {}",
                product.id,
                product.name,
                product.price.selling.format_inr(),
                product.stock.current,
                product.stock.minimum,
                flag
            );
        }
        println!("{} products", products.len());
    });
}

// =============================================================================
// Argument Parsing
// =============================================================================

fn customer_input(name: &str, phone: &str, credit_limit: Option<&str>) -> AppResult<CustomerInput> {
    Ok(CustomerInput {
        name: name.to_string(),
        phone: phone.to_string(),
        credit_limit: credit_limit.map(parse_money).transpose()?.unwrap_or_default(),
        is_active: true,
        ..Default::default()
    })
}

fn parse_money(value: &str) -> AppResult<Money> {
    let rupees: f64 = value
        .parse()
        .map_err(|_| AppError::validation(format!("Not an amount: {value}")))?;
    Ok(Money::from_rupees(rupees))
}

/// Parses one sale line: `product:qty:price` with an optional `:discount`.
fn parse_item(spec: &str) -> AppResult<(String, SaleLine)> {
    let parts: Vec<&str> = spec.split(':').collect();
    let (product, qty, price, discount) = match parts.as_slice() {
        [product, qty, price] => (product, qty, price, "0"),
        [product, qty, price, discount] => (product, qty, price, *discount),
        _ => {
            return Err(AppError::validation(format!(
                "Expected product:qty:price[:discount], got {spec}"
            )))
        }
    };
    let qty: f64 = qty
        .parse()
        .map_err(|_| AppError::validation(format!("Not a quantity: {qty}")))?;
    let price = parse_money(price)?;
    let discount = parse_money(discount)?;
    Ok((
        product.to_string(),
        SaleLine::from_raw(qty, price.rupees(), discount.rupees()),
    ))
}

/// Parses one allocation: `saleId=amount`.
fn parse_allocation(spec: &str) -> AppResult<(String, Money)> {
    let (sale, amount) = spec
        .split_once('=')
        .ok_or_else(|| AppError::validation(format!("Expected sale=amount, got {spec}")))?;
    Ok((sale.to_string(), parse_money(amount)?))
}

fn parse_method(value: &str) -> AppResult<PaymentMethod> {
    match value {
        "cash" => Ok(PaymentMethod::Cash),
        "card" => Ok(PaymentMethod::Card),
        "upi" => Ok(PaymentMethod::Upi),
        "bank_transfer" => Ok(PaymentMethod::BankTransfer),
        "credit" => Ok(PaymentMethod::Credit),
        "cheque" => Ok(PaymentMethod::Cheque),
        other => Err(AppError::validation(format!(
            "Unknown payment method: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_with_and_without_discount() {
        let (product, line) = parse_item("prod-1:2:100").unwrap();
        assert_eq!(product, "prod-1");
        assert_eq!(line.total(), Money::from_rupees(200.0));

        let (_, line) = parse_item("prod-1:2:100:15").unwrap();
        assert_eq!(line.total(), Money::from_rupees(185.0));

        assert!(parse_item("prod-1:2").is_err());
        assert!(parse_item("prod-1:two:100").is_err());
    }

    #[test]
    fn test_parse_allocation() {
        let (sale, amount) = parse_allocation("sale-1=300.50").unwrap();
        assert_eq!(sale, "sale-1");
        assert_eq!(amount, Money::from_paise(30050));

        assert!(parse_allocation("sale-1").is_err());
        assert!(parse_allocation("sale-1=lots").is_err());
    }

    #[test]
    fn test_parse_method_wire_names() {
        assert_eq!(parse_method("upi").unwrap(), PaymentMethod::Upi);
        assert_eq!(
            parse_method("bank_transfer").unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!(parse_method("barter").is_err());
    }

    #[test]
    fn test_customer_input_defaults() {
        let input = customer_input("Sharma Traders", "9876543210", None).unwrap();
        assert_eq!(input.credit_limit, Money::zero());
        assert!(input.is_active);

        let input = customer_input("Sharma Traders", "9876543210", Some("50000")).unwrap();
        assert_eq!(input.credit_limit, Money::from_rupees(50000.0));

        assert!(customer_input("X", "123", Some("plenty")).is_err());
    }
}
