//! Tax administration session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{TaxInput, TaxRecord, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive tax administration session on stdio.
pub fn run_tax(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "tax", "session started");
    console.banner("=== Tax Administration System ===")?;

    let input = TaxInput {
        id: console.read_i32("Enter ID: ", "id")?,
        authority_name: console.read_line("Enter authority name: ", "authorityName")?,
        region: console.read_line("Enter region: ", "region")?,
        email: console.read_line("Enter email: ", "email")?,
        category_name: console.read_line("Enter category name: ", "categoryName")?,
        rate: console.read_f64("Enter tax rate: ", "rate")?,
        code: console.read_line("Enter category code: ", "code")?,
        tin: console.read_line("Enter taxpayer TIN (9 digits): ", "tin")?,
        taxpayer_name: console.read_line("Enter taxpayer name: ", "taxpayerName")?,
        address: console.read_line("Enter address: ", "address")?,
        employer_name: console.read_line("Enter employer name: ", "employerName")?,
        employer_tin: console.read_line("Enter employer TIN (9 digits): ", "employerTIN")?,
        contact: console.read_line("Enter contact (10 digits): ", "contact")?,
        employee_name: console.read_line("Enter employee name: ", "employeeName")?,
        salary: console.read_f64("Enter salary: ", "salary")?,
        employee_tin: console.read_line("Enter employee TIN (9 digits): ", "employeeTIN")?,
        declaration_month: console.read_line("Enter declaration month: ", "declarationMonth")?,
        total_income: console.read_f64("Enter total income: ", "totalIncome")?,
        assessed_tax: console.read_f64("Enter assessed tax: ", "assessedTax")?,
        payment_amount: console.read_f64("Enter payment amount: ", "paymentAmount")?,
        receipt_no: console.read_line("Enter receipt number: ", "receiptNo")?,
        total_tax: console.read_f64("Enter total tax: ", "totalTax")?,
    };

    let record = TaxRecord::try_from(input)?;
    info!(program = "tax", id = record.core.id, "record accepted");

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

fn render_text(record: &TaxRecord) -> String {
    format!(
        "\n=== TAX ADMINISTRATION DATA ===\n\
         ID: {}\n\
         Authority: {}\n\
         Region: {}\n\
         Email: {}\n\
         Category: {}\n\
         Rate: {}\n\
         Code: {}\n\
         Taxpayer TIN: {}\n\
         Taxpayer Name: {}\n\
         Address: {}\n\
         Employer: {}\n\
         Employer TIN: {}\n\
         Contact: {}\n\
         Employee: {}\n\
         Salary: ${}\n\
         Employee TIN: {}\n\
         Declaration Month: {}\n\
         Total Income: ${}\n\
         Assessed Tax: ${}\n\
         Payment Amount: ${}\n\
         Receipt No: {}\n\
         Total Tax: ${}\n\
         Computed Tax: ${}\n",
        record.core.id,
        record.authority.authority_name,
        record.authority.region,
        record.authority.email,
        record.category.category_name,
        amount::render(record.category.rate),
        record.category.code,
        record.taxpayer.tin,
        record.taxpayer.taxpayer_name,
        record.taxpayer.address,
        record.employer.employer_name,
        record.employer.employer_tin,
        record.employer.contact,
        record.employee.employee_name,
        amount::render(record.employee.salary),
        record.employee.employee_tin,
        record.declaration.declaration_month,
        amount::render(record.declaration.total_income),
        amount::render(record.assessment.assessed_tax),
        amount::render(record.payment.payment_amount),
        record.receipt.receipt_no,
        amount::render(record.receipt.total_tax),
        amount::render(record.compute_tax()),
    )
}

fn render_json(record: &TaxRecord) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "computedTax": record.compute_tax(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
