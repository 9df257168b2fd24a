//! Procurement session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{ProcurementInput, ProcurementRecord, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive procurement session on stdio.
pub fn run_procurement(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "procurement", "session started");
    console.banner("=== Procurement Management System ===")?;

    let input = ProcurementInput {
        id: console.read_i32("Enter ID: ", "id")?,
        org_name: console.read_line("Enter organization name: ", "orgName")?,
        address: console.read_line("Enter address: ", "address")?,
        contact_email: console.read_line("Enter contact email: ", "contactEmail")?,
        dept_name: console.read_line("Enter department name: ", "deptName")?,
        dept_code: console.read_line("Enter department code: ", "deptCode")?,
        supplier_name: console.read_line("Enter supplier name: ", "supplierName")?,
        supplier_tin: console.read_line("Enter supplier TIN (9 digits): ", "supplierTIN")?,
        contact: console.read_line("Enter contact (10 digits): ", "contact")?,
        product_name: console.read_line("Enter product name: ", "productName")?,
        unit_price: console.read_f64("Enter unit price: ", "unitPrice")?,
        quantity: console.read_i32("Enter quantity: ", "quantity")?,
        po_number: console.read_line("Enter PO number: ", "poNumber")?,
        total_amount: console.read_f64("Enter total amount: ", "totalAmount")?,
        delivered_by: console.read_line("Enter delivered by: ", "deliveredBy")?,
        inspector_name: console.read_line("Enter inspector name: ", "inspectorName")?,
        status: console.read_line("Enter status (Passed/Failed): ", "status")?,
        remarks: console.read_line("Enter remarks: ", "remarks")?,
        invoice_no: console.read_line("Enter invoice number: ", "invoiceNo")?,
        invoice_amount: console.read_f64("Enter invoice amount: ", "invoiceAmount")?,
        summary: console.read_line("Enter summary: ", "summary")?,
    };

    let record = ProcurementRecord::try_from(input)?;
    info!(program = "procurement", id = record.core.id, "record accepted");

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

fn render_text(record: &ProcurementRecord) -> String {
    format!(
        "\n=== PROCUREMENT MANAGEMENT DATA ===\n\
         ID: {}\n\
         Organization: {}\n\
         Address: {}\n\
         Contact Email: {}\n\
         Department: {}\n\
         Department Code: {}\n\
         Supplier: {}\n\
         Supplier TIN: {}\n\
         Contact: {}\n\
         Product: {}\n\
         Unit Price: ${}\n\
         Quantity: {}\n\
         PO Number: {}\n\
         Total Amount: ${}\n\
         Delivered By: {}\n\
         Inspector: {}\n\
         Status: {}\n\
         Remarks: {}\n\
         Invoice No: {}\n\
         Invoice Amount: ${}\n\
         Summary: {}\n\
         Total Purchase: ${}\n",
        record.core.id,
        record.organization.org_name,
        record.organization.address,
        record.organization.contact_email,
        record.department.dept_name,
        record.department.dept_code,
        record.supplier.supplier_name,
        record.supplier.supplier_tin,
        record.supplier.contact,
        record.product.product_name,
        amount::render(record.product.unit_price),
        record.product.quantity,
        record.purchase_order.po_number,
        amount::render(record.purchase_order.total_amount),
        record.delivery.delivered_by,
        record.inspection.inspector_name,
        record.inspection.status,
        record.inspection.remarks,
        record.invoice.invoice_no,
        amount::render(record.invoice.invoice_amount),
        record.report.summary,
        amount::render(record.calculate_total()),
    )
}

fn render_json(record: &ProcurementRecord) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "totalPurchase": record.calculate_total(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
