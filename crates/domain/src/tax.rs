//! Tax administration records.
//!
//! Authority, category, taxpayer, employer, and employee details lead into
//! the declaration, assessment, and payment groups. The terminal
//! [`TaxRecord`] computes the liability from the salary, the category rate,
//! and the standard credit.

use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Collecting tax authority.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Authority {
    /// Authority display name.
    pub authority_name: String,
    /// Region the authority covers.
    pub region: String,
    /// Authority contact email.
    #[validate(custom = "crate::rules::email")]
    pub email: String,
}

impl Authority {
    /// Validate and build the authority group.
    pub fn new(authority_name: String, region: String, email: String) -> Result<Self, FieldError> {
        let group = Self {
            authority_name,
            region,
            email,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Tax category. The rate bound is checked before the code length.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Category {
    /// Category display name.
    pub category_name: String,
    /// Tax rate, strictly positive.
    #[validate(custom = "crate::rules::positive_amount")]
    pub rate: f64,
    /// Category code of at least three characters.
    #[validate(custom = "crate::rules::min_length_3")]
    pub code: String,
}

impl Category {
    /// Validate and build the category group.
    pub fn new(category_name: String, rate: f64, code: String) -> Result<Self, FieldError> {
        let group = Self {
            category_name,
            rate,
            code,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Registered taxpayer.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Taxpayer {
    /// Nine-digit taxpayer identification number.
    #[validate(custom = "crate::rules::nine_digits")]
    pub tin: String,
    /// Taxpayer display name.
    #[validate(field = "taxpayerName", non_empty)]
    pub taxpayer_name: String,
    /// Taxpayer address.
    pub address: String,
}

impl Taxpayer {
    /// Validate and build the taxpayer group.
    pub fn new(tin: String, taxpayer_name: String, address: String) -> Result<Self, FieldError> {
        let group = Self {
            tin,
            taxpayer_name,
            address,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Withholding employer.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Employer {
    /// Employer display name.
    pub employer_name: String,
    /// Nine-digit employer identification number.
    #[serde(rename = "employerTIN")]
    #[validate(field = "employerTIN", custom = "crate::rules::nine_digits")]
    pub employer_tin: String,
    /// Ten-digit employer contact number.
    #[validate(custom = "crate::rules::ten_digits")]
    pub contact: String,
}

impl Employer {
    /// Validate and build the employer group.
    pub fn new(
        employer_name: String,
        employer_tin: String,
        contact: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            employer_name,
            employer_tin,
            contact,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Taxed employee. The salary bound is checked before the TIN shape.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Employee {
    /// Employee display name.
    pub employee_name: String,
    /// Gross salary, strictly positive.
    #[validate(custom = "crate::rules::positive_amount")]
    pub salary: f64,
    /// Nine-digit employee identification number.
    #[serde(rename = "employeeTIN")]
    #[validate(field = "employeeTIN", custom = "crate::rules::nine_digits")]
    pub employee_tin: String,
}

impl Employee {
    /// Validate and build the employee group.
    pub fn new(
        employee_name: String,
        salary: f64,
        employee_tin: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            employee_name,
            salary,
            employee_tin,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Monthly income declaration.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Declaration {
    /// Declared month.
    pub declaration_month: String,
    /// Declared income, never negative.
    #[validate(field = "totalIncome", custom = "crate::rules::non_negative_amount")]
    pub total_income: f64,
}

impl Declaration {
    /// Validate and build the declaration group.
    pub fn new(declaration_month: String, total_income: f64) -> Result<Self, FieldError> {
        let group = Self {
            declaration_month,
            total_income,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Assessment raised on the declaration.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Assessment {
    /// Date the assessment was raised.
    pub assessment_date: NaiveDate,
    /// Assessed tax, never negative.
    #[validate(field = "assessedTax", custom = "crate::rules::non_negative_amount")]
    pub assessed_tax: f64,
}

impl Assessment {
    /// Validate and build the assessment group, stamping the date.
    pub fn new(assessed_tax: f64) -> Result<Self, FieldError> {
        let group = Self {
            assessment_date: Local::now().date_naive(),
            assessed_tax,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Payment against the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Payment {
    /// Date the payment was taken.
    pub payment_date: NaiveDate,
    /// Amount paid, strictly positive.
    #[validate(field = "paymentAmount", custom = "crate::rules::positive_amount")]
    pub payment_amount: f64,
}

impl Payment {
    /// Validate and build the payment group, stamping the date.
    pub fn new(payment_amount: f64) -> Result<Self, FieldError> {
        let group = Self {
            payment_date: Local::now().date_naive(),
            payment_amount,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Issued receipt with the declared total.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt identifier.
    pub receipt_no: String,
    /// Declared total tax, pass-through.
    pub total_tax: f64,
}

impl Receipt {
    /// Build the receipt group.
    #[must_use]
    pub fn new(receipt_no: String, total_tax: f64) -> Self {
        Self {
            receipt_no,
            total_tax,
        }
    }
}

/// Raw console field set for one tax record, in read order.
#[derive(Debug, Clone)]
pub struct TaxInput {
    /// Record identifier.
    pub id: i32,
    /// Authority display name.
    pub authority_name: String,
    /// Authority region.
    pub region: String,
    /// Authority contact email.
    pub email: String,
    /// Category display name.
    pub category_name: String,
    /// Tax rate.
    pub rate: f64,
    /// Category code.
    pub code: String,
    /// Taxpayer identification number.
    pub tin: String,
    /// Taxpayer display name.
    pub taxpayer_name: String,
    /// Taxpayer address.
    pub address: String,
    /// Employer display name.
    pub employer_name: String,
    /// Employer identification number.
    pub employer_tin: String,
    /// Employer contact number.
    pub contact: String,
    /// Employee display name.
    pub employee_name: String,
    /// Gross salary.
    pub salary: f64,
    /// Employee identification number.
    pub employee_tin: String,
    /// Declared month.
    pub declaration_month: String,
    /// Declared income.
    pub total_income: f64,
    /// Assessed tax.
    pub assessed_tax: f64,
    /// Amount paid.
    pub payment_amount: f64,
    /// Receipt identifier.
    pub receipt_no: String,
    /// Declared total tax.
    pub total_tax: f64,
}

/// Fully validated tax record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRecord {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Collecting authority.
    pub authority: Authority,
    /// Tax category.
    pub category: Category,
    /// Registered taxpayer.
    pub taxpayer: Taxpayer,
    /// Withholding employer.
    pub employer: Employer,
    /// Taxed employee.
    pub employee: Employee,
    /// Income declaration.
    pub declaration: Declaration,
    /// Raised assessment.
    pub assessment: Assessment,
    /// Payment taken.
    pub payment: Payment,
    /// Issued receipt.
    pub receipt: Receipt,
}

impl TaxRecord {
    /// Standard credit subtracted from every computed liability.
    const STANDARD_CREDIT: f64 = 50000.0;

    /// Salary times the category rate, less the standard credit. Goes
    /// negative when the credit exceeds the gross liability.
    #[must_use]
    pub fn compute_tax(&self) -> f64 {
        self.employee.salary * self.category.rate - Self::STANDARD_CREDIT
    }
}

impl TryFrom<TaxInput> for TaxRecord {
    type Error = FieldError;

    /// Build every layer group in order; the first invalid field aborts the
    /// whole record.
    fn try_from(input: TaxInput) -> Result<Self, Self::Error> {
        let core = RecordCore::new(input.id)?;
        let authority = Authority::new(input.authority_name, input.region, input.email)?;
        let category = Category::new(input.category_name, input.rate, input.code)?;
        let taxpayer = Taxpayer::new(input.tin, input.taxpayer_name, input.address)?;
        let employer = Employer::new(input.employer_name, input.employer_tin, input.contact)?;
        let employee = Employee::new(input.employee_name, input.salary, input.employee_tin)?;
        let declaration = Declaration::new(input.declaration_month, input.total_income)?;
        let assessment = Assessment::new(input.assessed_tax)?;
        let payment = Payment::new(input.payment_amount)?;
        let receipt = Receipt::new(input.receipt_no, input.total_tax);

        Ok(Self {
            core,
            authority,
            category,
            taxpayer,
            employer,
            employee,
            declaration,
            assessment,
            payment,
            receipt,
        })
    }
}
