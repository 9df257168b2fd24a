//! Procurement records.
//!
//! Organization, department, and supplier details lead into the product,
//! purchase order, delivery, inspection, and invoice groups. The terminal
//! [`ProcurementRecord`] reports the invoiced purchase total.

use crate::fields::InspectionStatus;
use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Purchasing organization.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Organization {
    /// Organization display name.
    pub org_name: String,
    /// Organization address.
    pub address: String,
    /// Organization contact email.
    #[validate(field = "contactEmail", custom = "crate::rules::email")]
    pub contact_email: String,
}

impl Organization {
    /// Validate and build the organization group.
    pub fn new(org_name: String, address: String, contact_email: String) -> Result<Self, FieldError> {
        let group = Self {
            org_name,
            address,
            contact_email,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Requesting department.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Department {
    /// Department display name.
    pub dept_name: String,
    /// Alphanumeric department code of at least three characters.
    #[validate(field = "deptCode", custom = "crate::rules::alphanumeric_code")]
    pub dept_code: String,
}

impl Department {
    /// Validate and build the department group.
    pub fn new(dept_name: String, dept_code: String) -> Result<Self, FieldError> {
        let group = Self {
            dept_name,
            dept_code,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Awarded supplier.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Supplier {
    /// Supplier display name.
    pub supplier_name: String,
    /// Nine-digit supplier identification number.
    #[serde(rename = "supplierTIN")]
    #[validate(field = "supplierTIN", custom = "crate::rules::nine_digits")]
    pub supplier_tin: String,
    /// Ten-digit supplier contact number.
    #[validate(custom = "crate::rules::ten_digits")]
    pub contact: String,
}

impl Supplier {
    /// Validate and build the supplier group.
    pub fn new(
        supplier_name: String,
        supplier_tin: String,
        contact: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            supplier_name,
            supplier_tin,
            contact,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Procured product.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Product {
    /// Product display name.
    pub product_name: String,
    /// Unit price, strictly positive.
    #[validate(field = "unitPrice", custom = "crate::rules::positive_amount")]
    pub unit_price: f64,
    /// Ordered quantity, never negative.
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl Product {
    /// Validate and build the product group.
    pub fn new(product_name: String, unit_price: f64, quantity: i32) -> Result<Self, FieldError> {
        let group = Self {
            product_name,
            unit_price,
            quantity,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Issued purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct PurchaseOrder {
    /// Purchase order identifier.
    pub po_number: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Order total, strictly positive.
    #[validate(field = "totalAmount", custom = "crate::rules::positive_amount")]
    pub total_amount: f64,
}

impl PurchaseOrder {
    /// Validate and build the order group, stamping the order date.
    pub fn new(po_number: String, total_amount: f64) -> Result<Self, FieldError> {
        let group = Self {
            po_number,
            order_date: Local::now().date_naive(),
            total_amount,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Recorded delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Date the goods arrived.
    pub delivery_date: NaiveDate,
    /// Person or carrier that delivered.
    pub delivered_by: String,
}

impl Delivery {
    /// Build the delivery group, stamping the delivery date.
    #[must_use]
    pub fn new(delivered_by: String) -> Self {
        Self {
            delivery_date: Local::now().date_naive(),
            delivered_by,
        }
    }
}

/// Goods inspection outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    /// Inspecting officer.
    pub inspector_name: String,
    /// Passed or failed.
    pub status: InspectionStatus,
    /// Inspection remarks.
    pub remarks: String,
}

impl Inspection {
    /// Convert the status and build the inspection group.
    pub fn new(inspector_name: String, status: &str, remarks: String) -> Result<Self, FieldError> {
        let status = InspectionStatus::parse("status", status)?;
        Ok(Self {
            inspector_name,
            status,
            remarks,
        })
    }
}

/// Supplier invoice.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Invoice {
    /// Invoice identifier.
    pub invoice_no: String,
    /// Invoiced amount, strictly positive.
    #[validate(field = "invoiceAmount", custom = "crate::rules::positive_amount")]
    pub invoice_amount: f64,
}

impl Invoice {
    /// Validate and build the invoice group.
    pub fn new(invoice_no: String, invoice_amount: f64) -> Result<Self, FieldError> {
        let group = Self {
            invoice_no,
            invoice_amount,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Closing report fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementReport {
    /// Date the report was produced.
    pub report_date: NaiveDate,
    /// Free-text summary.
    pub summary: String,
}

impl ProcurementReport {
    /// Build the report group, stamping the report date.
    #[must_use]
    pub fn new(summary: String) -> Self {
        Self {
            report_date: Local::now().date_naive(),
            summary,
        }
    }
}

/// Raw console field set for one procurement record, in read order.
#[derive(Debug, Clone)]
pub struct ProcurementInput {
    /// Record identifier.
    pub id: i32,
    /// Organization display name.
    pub org_name: String,
    /// Organization address.
    pub address: String,
    /// Organization contact email.
    pub contact_email: String,
    /// Department display name.
    pub dept_name: String,
    /// Department code.
    pub dept_code: String,
    /// Supplier display name.
    pub supplier_name: String,
    /// Supplier identification number.
    pub supplier_tin: String,
    /// Supplier contact number.
    pub contact: String,
    /// Product display name.
    pub product_name: String,
    /// Unit price.
    pub unit_price: f64,
    /// Ordered quantity.
    pub quantity: i32,
    /// Purchase order identifier.
    pub po_number: String,
    /// Order total.
    pub total_amount: f64,
    /// Person or carrier that delivered.
    pub delivered_by: String,
    /// Inspecting officer.
    pub inspector_name: String,
    /// Inspection status spelling.
    pub status: String,
    /// Inspection remarks.
    pub remarks: String,
    /// Invoice identifier.
    pub invoice_no: String,
    /// Invoiced amount.
    pub invoice_amount: f64,
    /// Free-text summary.
    pub summary: String,
}

/// Fully validated procurement record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRecord {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Purchasing organization.
    pub organization: Organization,
    /// Requesting department.
    pub department: Department,
    /// Awarded supplier.
    pub supplier: Supplier,
    /// Procured product.
    pub product: Product,
    /// Issued purchase order.
    pub purchase_order: PurchaseOrder,
    /// Recorded delivery.
    pub delivery: Delivery,
    /// Inspection outcome.
    pub inspection: Inspection,
    /// Supplier invoice.
    pub invoice: Invoice,
    /// Closing report fields.
    pub report: ProcurementReport,
}

impl ProcurementRecord {
    /// Total purchase value. With a single invoice per record this is the
    /// invoiced amount.
    #[must_use]
    pub fn calculate_total(&self) -> f64 {
        self.invoice.invoice_amount
    }
}

impl TryFrom<ProcurementInput> for ProcurementRecord {
    type Error = FieldError;

    /// Build every layer group in order; the first invalid field aborts the
    /// whole record.
    fn try_from(input: ProcurementInput) -> Result<Self, Self::Error> {
        let core = RecordCore::new(input.id)?;
        let organization = Organization::new(input.org_name, input.address, input.contact_email)?;
        let department = Department::new(input.dept_name, input.dept_code)?;
        let supplier = Supplier::new(input.supplier_name, input.supplier_tin, input.contact)?;
        let product = Product::new(input.product_name, input.unit_price, input.quantity)?;
        let purchase_order = PurchaseOrder::new(input.po_number, input.total_amount)?;
        let delivery = Delivery::new(input.delivered_by);
        let inspection = Inspection::new(input.inspector_name, &input.status, input.remarks)?;
        let invoice = Invoice::new(input.invoice_no, input.invoice_amount)?;
        let report = ProcurementReport::new(input.summary);

        Ok(Self {
            core,
            organization,
            department,
            supplier,
            product,
            purchase_order,
            delivery,
            inspection,
            invoice,
            report,
        })
    }
}
