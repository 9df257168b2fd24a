//! Payroll session.

use crate::CliOutput;
use crate::console::Console;
use crate::error::{CliError, ExitCode};
use crate::format::OutputMode;
use regdesk_domain::{PayrollInput, PayrollRecord, amount};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Run the interactive payroll session on stdio.
pub fn run_payroll(mode: OutputMode) -> Result<CliOutput, CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), mode.no_progress);
    session(&mut console, mode)
}

fn session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: OutputMode,
) -> Result<CliOutput, CliError> {
    info!(program = "payroll", "session started");
    console.banner("=== Payroll Management System (RSSB) ===")?;

    let input = PayrollInput {
        id: console.read_i32("Enter ID: ", "id")?,
        org_name: console.read_line("Enter organization name: ", "orgName")?,
        org_code: console.read_line("Enter org code: ", "orgCode")?,
        rssb_number: console.read_line("Enter RSSB number (8 digits): ", "rssbNumber")?,
        contact_email: console.read_line("Enter contact email: ", "contactEmail")?,
        dept_name: console.read_line("Enter department name: ", "deptName")?,
        dept_code: console.read_line("Enter department code: ", "deptCode")?,
        manager_name: console.read_line("Enter manager name: ", "managerName")?,
        employee_id: console.read_i32("Enter employee ID (>=1000): ", "employeeID")?,
        full_name: console.read_line("Enter full name: ", "fullName")?,
        position: console.read_line("Enter position: ", "position")?,
        base_salary: console.read_f64("Enter base salary: ", "baseSalary")?,
        rssb_registered: console.read_bool("Is RSSB registered (true/false): ", "rssbRegistered")?,
        month: console.read_i32("Enter month (1-12): ", "month")?,
        year: console.read_i32("Enter year: ", "year")?,
        basic_pay: console.read_f64("Enter basic pay: ", "basicPay")?,
        transport_allowance: console.read_f64("Enter transport allowance: ", "transportAllowance")?,
        housing_allowance: console.read_f64("Enter housing allowance: ", "housingAllowance")?,
        rssb_contribution: console.read_f64("Enter RSSB contribution: ", "rssbContribution")?,
        paye_tax: console.read_f64("Enter PAYE tax: ", "payeTax")?,
        loan_deduction: console.read_f64("Enter loan deduction: ", "loanDeduction")?,
        overtime_hours: console.read_f64("Enter overtime hours: ", "overtimeHours")?,
        overtime_rate: console.read_f64("Enter overtime rate: ", "overtimeRate")?,
        bonus: console.read_f64("Enter bonus: ", "bonus")?,
        gross_salary: console.read_f64("Enter gross salary: ", "grossSalary")?,
        total_deductions: console.read_f64("Enter total deductions: ", "totalDeductions")?,
        net_salary: console.read_f64("Enter net salary: ", "netSalary")?,
        payslip_number: console.read_line("Enter payslip number: ", "payslipNumber")?,
    };

    let record = PayrollRecord::try_from(input)?;
    info!(program = "payroll", id = record.core.id, "record accepted");

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

fn render_text(record: &PayrollRecord) -> String {
    format!(
        "\n=== PAYROLL MANAGEMENT DATA ===\n\
         ID: {}\n\
         Organization: {}\n\
         Org Code: {}\n\
         RSSB Number: {}\n\
         Contact Email: {}\n\
         Department: {}\n\
         Dept Code: {}\n\
         Manager: {}\n\
         Employee ID: {}\n\
         Full Name: {}\n\
         Position: {}\n\
         Base Salary: ${}\n\
         RSSB Registered: {}\n\
         Month: {}\n\
         Year: {}\n\
         Basic Pay: ${}\n\
         Transport Allowance: ${}\n\
         Housing Allowance: ${}\n\
         RSSB Contribution: ${}\n\
         PAYE Tax: ${}\n\
         Loan Deduction: ${}\n\
         Overtime Hours: {}\n\
         Overtime Rate: ${}\n\
         Bonus: ${}\n\
         Gross Salary: ${}\n\
         Total Deductions: ${}\n\
         Net Salary: ${}\n\
         Payslip Number: {}\n\
         \n\
         {}\n",
        record.core.id,
        record.organization.org_name,
        record.organization.org_code,
        record.organization.rssb_number,
        record.organization.contact_email,
        record.department.dept_name,
        record.department.dept_code,
        record.department.manager_name,
        record.employee.employee_id,
        record.employee.full_name,
        record.employee.position,
        amount::render(record.employee.base_salary),
        record.employee.rssb_registered,
        record.period.month,
        record.period.year,
        amount::render(record.salary.basic_pay),
        amount::render(record.salary.transport_allowance),
        amount::render(record.salary.housing_allowance),
        amount::render(record.deduction.rssb_contribution),
        amount::render(record.deduction.paye_tax),
        amount::render(record.deduction.loan_deduction),
        amount::render(record.allowance.overtime_hours),
        amount::render(record.allowance.overtime_rate),
        amount::render(record.allowance.bonus),
        amount::render(record.totals.gross_salary),
        amount::render(record.totals.total_deductions),
        amount::render(record.totals.net_salary),
        record.payslip.payslip_number,
        record.generate_payslip(),
    )
}

fn render_json(record: &PayrollRecord) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "record": serde_json::to_value(record)?,
        "payslip": record.generate_payslip(),
    });
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
