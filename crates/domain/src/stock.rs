//! Stock records.
//!
//! Warehouse, category, supplier, and product details feed into stock
//! levels, purchase and sale movements, and an inventory summary. The
//! terminal [`StockRecord`] renders a one-line stock report.

use crate::amount;
use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Holding warehouse.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Warehouse {
    /// Warehouse display name.
    pub warehouse_name: String,
    /// Warehouse location.
    pub location: String,
    /// Ten-digit contact number.
    #[validate(field = "contactNumber", custom = "crate::rules::ten_digits")]
    pub contact_number: String,
}

impl Warehouse {
    /// Validate and build the warehouse group.
    pub fn new(
        warehouse_name: String,
        location: String,
        contact_number: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            warehouse_name,
            location,
            contact_number,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Product category.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Category {
    /// Category display name.
    pub category_name: String,
    /// Alphanumeric category code of at least three characters.
    #[validate(field = "categoryCode", custom = "crate::rules::alphanumeric_code")]
    pub category_code: String,
}

impl Category {
    /// Validate and build the category group.
    pub fn new(category_name: String, category_code: String) -> Result<Self, FieldError> {
        let group = Self {
            category_name,
            category_code,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Stocking supplier.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Supplier {
    /// Supplier display name.
    pub supplier_name: String,
    /// Supplier contact email.
    #[validate(field = "supplierEmail", custom = "crate::rules::email")]
    pub supplier_email: String,
    /// Ten-digit supplier phone.
    #[validate(field = "supplierPhone", custom = "crate::rules::ten_digits")]
    pub supplier_phone: String,
}

impl Supplier {
    /// Validate and build the supplier group.
    pub fn new(
        supplier_name: String,
        supplier_email: String,
        supplier_phone: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            supplier_name,
            supplier_email,
            supplier_phone,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Product {
    /// Product display name.
    pub product_name: String,
    /// Unit price, strictly positive.
    #[validate(field = "unitPrice", custom = "crate::rules::positive_amount")]
    pub unit_price: f64,
    /// Maximum stock level, never negative.
    #[validate(field = "stockLimit", range(min = 0))]
    pub stock_limit: i32,
}

impl Product {
    /// Validate and build the product group.
    pub fn new(product_name: String, unit_price: f64, stock_limit: i32) -> Result<Self, FieldError> {
        let group = Self {
            product_name,
            unit_price,
            stock_limit,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Current stock position.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct StockItem {
    /// Units on hand.
    #[validate(field = "quantityAvailable", range(min = 0))]
    pub quantity_available: i32,
    /// Level that triggers a reorder.
    #[validate(field = "reorderLevel", range(min = 0))]
    pub reorder_level: i32,
}

impl StockItem {
    /// Validate and build the stock position group.
    pub fn new(quantity_available: i32, reorder_level: i32) -> Result<Self, FieldError> {
        let group = Self {
            quantity_available,
            reorder_level,
        };
        group.validate()?;
        Ok(group)
    }
}

/// One purchase movement. Carries the supplier name a second time, copied
/// from the supplier group.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Purchase {
    /// Units purchased, strictly positive.
    #[validate(field = "purchasedQuantity", range(min = 1))]
    pub purchased_quantity: i32,
    /// Date of the purchase.
    pub purchase_date: NaiveDate,
    /// Supplier named on the purchase.
    pub purchase_supplier_name: String,
}

impl Purchase {
    /// Validate and build the purchase group, stamping the purchase date.
    pub fn new(purchased_quantity: i32, purchase_supplier_name: String) -> Result<Self, FieldError> {
        let group = Self {
            purchased_quantity,
            purchase_date: Local::now().date_naive(),
            purchase_supplier_name,
        };
        group.validate()?;
        Ok(group)
    }
}

/// One sale movement.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Sale {
    /// Date of the sale.
    pub sale_date: NaiveDate,
    /// Units sold, strictly positive.
    #[validate(field = "soldQuantity", range(min = 1))]
    pub sold_quantity: i32,
    /// Buying customer.
    pub customer_name: String,
}

impl Sale {
    /// Validate and build the sale group, stamping the sale date.
    pub fn new(sold_quantity: i32, customer_name: String) -> Result<Self, FieldError> {
        let group = Self {
            sale_date: Local::now().date_naive(),
            sold_quantity,
            customer_name,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Inventory totals.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Inventory {
    /// Distinct items counted, never negative.
    #[validate(field = "totalItems", range(min = 0))]
    pub total_items: i32,
    /// Monetary value of the stock, never negative.
    #[validate(field = "stockValue", custom = "crate::rules::non_negative_amount")]
    pub stock_value: f64,
}

impl Inventory {
    /// Validate and build the inventory group.
    pub fn new(total_items: i32, stock_value: f64) -> Result<Self, FieldError> {
        let group = Self {
            total_items,
            stock_value,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Closing report fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockReport {
    /// Date the report was produced.
    pub report_date: NaiveDate,
    /// Free-text remarks.
    pub remarks: String,
}

impl StockReport {
    /// Build the report group, stamping the report date.
    #[must_use]
    pub fn new(remarks: String) -> Self {
        Self {
            report_date: Local::now().date_naive(),
            remarks,
        }
    }
}

/// Raw console field set for one stock record, in read order.
#[derive(Debug, Clone)]
pub struct StockInput {
    /// Record identifier.
    pub id: i32,
    /// Warehouse display name.
    pub warehouse_name: String,
    /// Warehouse location.
    pub location: String,
    /// Warehouse contact number.
    pub contact_number: String,
    /// Category display name.
    pub category_name: String,
    /// Category code.
    pub category_code: String,
    /// Supplier display name.
    pub supplier_name: String,
    /// Supplier contact email.
    pub supplier_email: String,
    /// Supplier phone.
    pub supplier_phone: String,
    /// Product display name.
    pub product_name: String,
    /// Unit price.
    pub unit_price: f64,
    /// Maximum stock level.
    pub stock_limit: i32,
    /// Units on hand.
    pub quantity_available: i32,
    /// Reorder trigger level.
    pub reorder_level: i32,
    /// Units purchased.
    pub purchased_quantity: i32,
    /// Units sold.
    pub sold_quantity: i32,
    /// Buying customer.
    pub customer_name: String,
    /// Distinct items counted.
    pub total_items: i32,
    /// Monetary stock value.
    pub stock_value: f64,
    /// Free-text remarks.
    pub remarks: String,
}

/// Fully validated stock record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Holding warehouse.
    pub warehouse: Warehouse,
    /// Product category.
    pub category: Category,
    /// Stocking supplier.
    pub supplier: Supplier,
    /// Stocked product.
    pub product: Product,
    /// Current stock position.
    pub stock_item: StockItem,
    /// Purchase movement.
    pub purchase: Purchase,
    /// Sale movement.
    pub sale: Sale,
    /// Inventory totals.
    pub inventory: Inventory,
    /// Closing report fields.
    pub report: StockReport,
}

impl StockRecord {
    /// One-line summary of the inventory totals and sales.
    #[must_use]
    pub fn generate_report(&self) -> String {
        format!(
            "Stock Report - Total Items: {}, Stock Value: ${}, Sales: {}",
            self.inventory.total_items,
            amount::render(self.inventory.stock_value),
            self.sale.sold_quantity
        )
    }
}

impl TryFrom<StockInput> for StockRecord {
    type Error = FieldError;

    /// Build every layer group in order. The purchase group receives a copy
    /// of the supplier name.
    fn try_from(input: StockInput) -> Result<Self, Self::Error> {
        let purchase_supplier_name = input.supplier_name.clone();

        let core = RecordCore::new(input.id)?;
        let warehouse = Warehouse::new(input.warehouse_name, input.location, input.contact_number)?;
        let category = Category::new(input.category_name, input.category_code)?;
        let supplier = Supplier::new(
            input.supplier_name,
            input.supplier_email,
            input.supplier_phone,
        )?;
        let product = Product::new(input.product_name, input.unit_price, input.stock_limit)?;
        let stock_item = StockItem::new(input.quantity_available, input.reorder_level)?;
        let purchase = Purchase::new(input.purchased_quantity, purchase_supplier_name)?;
        let sale = Sale::new(input.sold_quantity, input.customer_name)?;
        let inventory = Inventory::new(input.total_items, input.stock_value)?;
        let report = StockReport::new(input.remarks);

        Ok(Self {
            core,
            warehouse,
            category,
            supplier,
            product,
            stock_item,
            purchase,
            sale,
            inventory,
            report,
        })
    }
}
