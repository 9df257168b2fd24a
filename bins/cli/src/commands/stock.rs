//! Stock management session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{StockInput, StockRecord, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive stock management session on stdio.
pub fn run_stock(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "stock", "session started");
    console.banner("=== Stock Management System ===")?;

    let input = StockInput {
        id: console.read_i32("Enter ID: ", "id")?,
        warehouse_name: console.read_line("Enter warehouse name: ", "warehouseName")?,
        location: console.read_line("Enter location: ", "location")?,
        contact_number: console.read_line("Enter contact number (10 digits): ", "contactNumber")?,
        category_name: console.read_line("Enter category name: ", "categoryName")?,
        category_code: console.read_line("Enter category code: ", "categoryCode")?,
        supplier_name: console.read_line("Enter supplier name: ", "supplierName")?,
        supplier_email: console.read_line("Enter supplier email: ", "supplierEmail")?,
        supplier_phone: console.read_line("Enter supplier phone: ", "supplierPhone")?,
        product_name: console.read_line("Enter product name: ", "productName")?,
        unit_price: console.read_f64("Enter unit price: ", "unitPrice")?,
        stock_limit: console.read_i32("Enter stock limit: ", "stockLimit")?,
        quantity_available: console.read_i32("Enter quantity available: ", "quantityAvailable")?,
        reorder_level: console.read_i32("Enter reorder level: ", "reorderLevel")?,
        purchased_quantity: console.read_i32("Enter purchased quantity: ", "purchasedQuantity")?,
        sold_quantity: console.read_i32("Enter sold quantity: ", "soldQuantity")?,
        customer_name: console.read_line("Enter customer name: ", "customerName")?,
        total_items: console.read_i32("Enter total items: ", "totalItems")?,
        stock_value: console.read_f64("Enter stock value: ", "stockValue")?,
        remarks: console.read_line("Enter remarks: ", "remarks")?,
    };

    let record = StockRecord::try_from(input)?;
    info!(program = "stock", id = record.core.id, "record accepted");

    let stdout = if mode.is_json() {
        render_json(&record)?
    } else {
        render_text(&record)
    };

    Ok(CliOutput {
        stdout,
        exit_code: ExitCode::Ok,
    })
}

fn render_text(record: &StockRecord) -> String {
    format!(
        "\n=== STOCK MANAGEMENT DATA ===\n\
         ID: {}\n\
         Warehouse: {}\n\
         Location: {}\n\
         Contact: {}\n\
         Category: {}\n\
         Category Code: {}\n\
         Supplier: {}\n\
         Supplier Email: {}\n\
         Supplier Phone: {}\n\
         Product: {}\n\
         Unit Price: ${}\n\
         Stock Limit: {}\n\
         Quantity Available: {}\n\
         Reorder Level: {}\n\
         Purchased Quantity: {}\n\
         Sold Quantity: {}\n\
         Customer: {}\n\
         Total Items: {}\n\
         Stock Value: ${}\n\
         Remarks: {}\n\
         \n\
         {}\n",
        record.core.id,
        record.warehouse.warehouse_name,
        record.warehouse.location,
        record.warehouse.contact_number,
        record.category.category_name,
        record.category.category_code,
        record.supplier.supplier_name,
        record.supplier.supplier_email,
        record.supplier.supplier_phone,
        record.product.product_name,
        amount::render(record.product.unit_price),
        record.product.stock_limit,
        record.stock_item.quantity_available,
        record.stock_item.reorder_level,
        record.purchase.purchased_quantity,
        record.sale.sold_quantity,
        record.sale.customer_name,
        record.inventory.total_items,
        amount::render(record.inventory.stock_value),
        record.report.remarks,
        record.generate_report(),
    )
}

fn render_json(record: &StockRecord) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "stockReport": record.generate_report(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
