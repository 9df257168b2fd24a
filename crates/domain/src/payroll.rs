//! Payroll records.
//!
//! Organization, department, and employee details lead into the pay period,
//! the salary structure, deductions, allowances, and the entered totals.
//! The terminal [`PayrollRecord`] renders the payslip line with the
//! computed RSSB, PAYE, and net amounts.

use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Employing organization. The RSSB number is checked before the email and
/// the code.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Organization {
    /// Organization display name.
    pub org_name: String,
    /// Eight-digit RSSB registration number.
    #[validate(field = "rssbNumber", custom = "crate::rules::eight_digits")]
    pub rssb_number: String,
    /// Organization contact email.
    #[validate(field = "contactEmail", custom = "crate::rules::email")]
    pub contact_email: String,
    /// Organization code of at least three characters.
    #[validate(field = "orgCode", custom = "crate::rules::min_length_3")]
    pub org_code: String,
}

impl Organization {
    /// Validate and build the organization group.
    pub fn new(
        org_name: String,
        org_code: String,
        rssb_number: String,
        contact_email: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            org_name,
            rssb_number,
            contact_email,
            org_code,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Paying department. The code length is checked before the names.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Department {
    /// Department code of at least three characters.
    #[validate(field = "deptCode", custom = "crate::rules::min_length_3")]
    pub dept_code: String,
    /// Department display name.
    #[validate(field = "deptName", non_empty)]
    pub dept_name: String,
    /// Department manager.
    #[validate(field = "managerName", non_empty)]
    pub manager_name: String,
}

impl Department {
    /// Validate and build the department group.
    pub fn new(
        dept_name: String,
        dept_code: String,
        manager_name: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            dept_code,
            dept_name,
            manager_name,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Paid employee.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Employee {
    /// Employee number, at least 1000.
    #[serde(rename = "employeeID")]
    #[validate(field = "employeeID", range(min = 1000))]
    pub employee_id: i32,
    /// Employee full name.
    pub full_name: String,
    /// Employee position.
    pub position: String,
    /// Contracted base salary, strictly positive.
    #[validate(field = "baseSalary", custom = "crate::rules::positive_amount")]
    pub base_salary: f64,
    /// Whether the employee is RSSB registered.
    pub rssb_registered: bool,
}

impl Employee {
    /// Validate and build the employee group.
    pub fn new(
        employee_id: i32,
        full_name: String,
        position: String,
        base_salary: f64,
        rssb_registered: bool,
    ) -> Result<Self, FieldError> {
        let group = Self {
            employee_id,
            full_name,
            position,
            base_salary,
            rssb_registered,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Pay period being processed.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Period {
    /// Calendar month, 1 through 12.
    #[validate(range(min = 1, max = 12))]
    pub month: i32,
    /// Calendar year, 2000 or later.
    #[validate(range(min = 2000))]
    pub year: i32,
    /// Period start.
    pub start_date: NaiveDate,
    /// Period end.
    pub end_date: NaiveDate,
}

impl Period {
    /// Validate and build the period group, stamping both period dates.
    pub fn new(month: i32, year: i32) -> Result<Self, FieldError> {
        let today = Local::now().date_naive();
        let group = Self {
            month,
            year,
            start_date: today,
            end_date: today,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Contracted salary components, each never negative.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct SalaryStructure {
    /// Basic pay.
    #[validate(field = "basicPay", custom = "crate::rules::non_negative_amount")]
    pub basic_pay: f64,
    /// Transport allowance.
    #[validate(field = "transportAllowance", custom = "crate::rules::non_negative_amount")]
    pub transport_allowance: f64,
    /// Housing allowance.
    #[validate(field = "housingAllowance", custom = "crate::rules::non_negative_amount")]
    pub housing_allowance: f64,
}

impl SalaryStructure {
    /// Validate and build the salary structure group.
    pub fn new(
        basic_pay: f64,
        transport_allowance: f64,
        housing_allowance: f64,
    ) -> Result<Self, FieldError> {
        let group = Self {
            basic_pay,
            transport_allowance,
            housing_allowance,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Withheld deductions, each never negative.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Deduction {
    /// RSSB contribution.
    #[validate(field = "rssbContribution", custom = "crate::rules::non_negative_amount")]
    pub rssb_contribution: f64,
    /// PAYE tax.
    #[validate(field = "payeTax", custom = "crate::rules::non_negative_amount")]
    pub paye_tax: f64,
    /// Loan repayment.
    #[validate(field = "loanDeduction", custom = "crate::rules::non_negative_amount")]
    pub loan_deduction: f64,
}

impl Deduction {
    /// Validate and build the deduction group.
    pub fn new(
        rssb_contribution: f64,
        paye_tax: f64,
        loan_deduction: f64,
    ) -> Result<Self, FieldError> {
        let group = Self {
            rssb_contribution,
            paye_tax,
            loan_deduction,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Extra pay components, each never negative.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Allowance {
    /// Overtime hours worked.
    #[validate(field = "overtimeHours", custom = "crate::rules::non_negative_amount")]
    pub overtime_hours: f64,
    /// Overtime hourly rate.
    #[validate(field = "overtimeRate", custom = "crate::rules::non_negative_amount")]
    pub overtime_rate: f64,
    /// One-off bonus.
    #[validate(custom = "crate::rules::non_negative_amount")]
    pub bonus: f64,
}

impl Allowance {
    /// Validate and build the allowance group.
    pub fn new(overtime_hours: f64, overtime_rate: f64, bonus: f64) -> Result<Self, FieldError> {
        let group = Self {
            overtime_hours,
            overtime_rate,
            bonus,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Entered payroll totals. All three pass through unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Entered gross salary.
    pub gross_salary: f64,
    /// Entered total deductions.
    pub total_deductions: f64,
    /// Entered net salary.
    pub net_salary: f64,
}

impl PayrollTotals {
    /// Build the totals group.
    #[must_use]
    pub fn new(gross_salary: f64, total_deductions: f64, net_salary: f64) -> Self {
        Self {
            gross_salary,
            total_deductions,
            net_salary,
        }
    }
}

/// Issued payslip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Payslip identifier.
    pub payslip_number: String,
    /// Date the payslip was issued.
    pub issue_date: NaiveDate,
}

impl Payslip {
    /// Build the payslip group, stamping the issue date.
    #[must_use]
    pub fn new(payslip_number: String) -> Self {
        Self {
            payslip_number,
            issue_date: Local::now().date_naive(),
        }
    }
}

/// Raw console field set for one payroll record, in read order.
#[derive(Debug, Clone)]
pub struct PayrollInput {
    /// Record identifier.
    pub id: i32,
    /// Organization display name.
    pub org_name: String,
    /// Organization code.
    pub org_code: String,
    /// RSSB registration number.
    pub rssb_number: String,
    /// Organization contact email.
    pub contact_email: String,
    /// Department display name.
    pub dept_name: String,
    /// Department code.
    pub dept_code: String,
    /// Department manager.
    pub manager_name: String,
    /// Employee number.
    pub employee_id: i32,
    /// Employee full name.
    pub full_name: String,
    /// Employee position.
    pub position: String,
    /// Contracted base salary.
    pub base_salary: f64,
    /// Whether the employee is RSSB registered.
    pub rssb_registered: bool,
    /// Calendar month.
    pub month: i32,
    /// Calendar year.
    pub year: i32,
    /// Basic pay.
    pub basic_pay: f64,
    /// Transport allowance.
    pub transport_allowance: f64,
    /// Housing allowance.
    pub housing_allowance: f64,
    /// RSSB contribution.
    pub rssb_contribution: f64,
    /// PAYE tax.
    pub paye_tax: f64,
    /// Loan repayment.
    pub loan_deduction: f64,
    /// Overtime hours worked.
    pub overtime_hours: f64,
    /// Overtime hourly rate.
    pub overtime_rate: f64,
    /// One-off bonus.
    pub bonus: f64,
    /// Entered gross salary.
    pub gross_salary: f64,
    /// Entered total deductions.
    pub total_deductions: f64,
    /// Entered net salary.
    pub net_salary: f64,
    /// Payslip identifier.
    pub payslip_number: String,
}

/// Fully validated payroll record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Employing organization.
    pub organization: Organization,
    /// Paying department.
    pub department: Department,
    /// Paid employee.
    pub employee: Employee,
    /// Pay period.
    pub period: Period,
    /// Contracted salary components.
    pub salary: SalaryStructure,
    /// Withheld deductions.
    pub deduction: Deduction,
    /// Extra pay components.
    pub allowance: Allowance,
    /// Entered totals.
    pub totals: PayrollTotals,
    /// Issued payslip.
    pub payslip: Payslip,
}

impl PayrollRecord {
    /// RSSB contribution factor applied to basic pay.
    const RSSB_RATE: f64 = 0.05;
    /// PAYE factor applied to gross salary.
    const PAYE_RATE: f64 = 0.15;

    /// Payslip line with the computed RSSB, PAYE, and net amounts.
    #[must_use]
    pub fn generate_payslip(&self) -> String {
        let employee = &self.employee.full_name;
        let rssb = self.salary.basic_pay * Self::RSSB_RATE;
        let paye = self.totals.gross_salary * Self::PAYE_RATE;
        let net = self.totals.gross_salary - self.totals.total_deductions;
        format!("PAYSLIP - Employee: {employee}, RSSB: ${rssb:.2}, PAYE: ${paye:.2}, Net: ${net:.2}")
    }
}

impl TryFrom<PayrollInput> for PayrollRecord {
    type Error = FieldError;

    /// Build every layer group in order; the first invalid field aborts the
    /// whole record.
    fn try_from(input: PayrollInput) -> Result<Self, Self::Error> {
        let core = RecordCore::new(input.id)?;
        let organization = Organization::new(
            input.org_name,
            input.org_code,
            input.rssb_number,
            input.contact_email,
        )?;
        let department = Department::new(input.dept_name, input.dept_code, input.manager_name)?;
        let employee = Employee::new(
            input.employee_id,
            input.full_name,
            input.position,
            input.base_salary,
            input.rssb_registered,
        )?;
        let period = Period::new(input.month, input.year)?;
        let salary = SalaryStructure::new(
            input.basic_pay,
            input.transport_allowance,
            input.housing_allowance,
        )?;
        let deduction = Deduction::new(
            input.rssb_contribution,
            input.paye_tax,
            input.loan_deduction,
        )?;
        let allowance = Allowance::new(input.overtime_hours, input.overtime_rate, input.bonus)?;
        let totals = PayrollTotals::new(
            input.gross_salary,
            input.total_deductions,
            input.net_salary,
        );
        let payslip = Payslip::new(input.payslip_number);

        Ok(Self {
            core,
            organization,
            department,
            employee,
            period,
            salary,
            deduction,
            allowance,
            totals,
            payslip,
        })
    }
}
