//! Multi-step purchases, receipt validation, coupons and containers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{ItemInstance, TransactionStatus};
use crate::models::Timestamp;

// ---------------------------------------------------------------------------
// Purchase flow
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CartItem {
    pub description: Option<String>,
    pub display_name: Option<String>,
    pub item_class: Option<String>,
    pub item_id: Option<String>,
    pub item_instance_id: Option<String>,
    pub real_currency_prices: Option<BTreeMap<String, i64>>,
    #[serde(rename = "VCAmount")]
    pub vc_amount: Option<BTreeMap<String, i64>>,
    pub virtual_currency_prices: Option<BTreeMap<String, i64>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmPurchaseRequest {
    pub order_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmPurchaseResult {
    pub items: Option<Vec<ItemInstance>>,
    pub order_id: Option<String>,
    pub purchase_date: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPaymentTokenRequest {
    pub token_provider: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPaymentTokenResult {
    pub order_id: Option<String>,
    pub provider_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPurchaseRequest {
    pub order_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPurchaseResult {
    pub order_id: Option<String>,
    pub payment_provider: Option<String>,
    pub purchase_date: Option<Timestamp>,
    pub transaction_id: Option<String>,
    pub transaction_status: Option<String>,
}

/// One line of a `StartPurchaseRequest`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPurchaseRequest {
    pub annotation: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<i64>,
    pub upgrade_from_items: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayForPurchaseRequest {
    pub currency: Option<String>,
    pub order_id: Option<String>,
    pub provider_name: Option<String>,
    pub provider_transaction_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayForPurchaseResult {
    pub credit_applied: Option<i64>,
    pub order_id: Option<String>,
    pub provider_data: Option<String>,
    pub provider_token: Option<String>,
    #[serde(rename = "PurchaseConfirmationPageURL")]
    pub purchase_confirmation_page_url: Option<String>,
    pub purchase_currency: Option<String>,
    pub purchase_price: Option<i64>,
    pub status: Option<TransactionStatus>,
    #[serde(rename = "VCAmount")]
    pub vc_amount: Option<BTreeMap<String, i32>>,
    pub virtual_currency: Option<BTreeMap<String, i32>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentOption {
    pub currency: Option<String>,
    pub price: Option<i64>,
    pub provider_name: Option<String>,
    pub store_credit: Option<i64>,
}

/// Opens an order. Follow with `PayForPurchase` and then `ConfirmPurchase`
/// using the returned `OrderId`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartPurchaseRequest {
    pub catalog_version: Option<String>,
    pub items: Option<Vec<ItemPurchaseRequest>>,
    pub store_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartPurchaseResult {
    pub contents: Option<Vec<CartItem>>,
    pub order_id: Option<String>,
    pub payment_options: Option<Vec<PaymentOption>>,
    pub virtual_currency_balances: Option<BTreeMap<String, i32>>,
}

// ---------------------------------------------------------------------------
// Receipts and entitlements
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumeXboxEntitlementsRequest {
    pub catalog_version: Option<String>,
    pub xbox_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumeXboxEntitlementsResult {
    pub items: Option<Vec<ItemInstance>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreIosPurchasesRequest {
    pub receipt_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreIosPurchasesResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateAmazonReceiptRequest {
    pub catalog_version: Option<String>,
    pub currency_code: Option<String>,
    pub purchase_price: Option<i32>,
    pub receipt_id: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateAmazonReceiptResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateGooglePlayPurchaseRequest {
    pub currency_code: Option<String>,
    pub purchase_price: Option<i64>,
    pub receipt_json: Option<String>,
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateGooglePlayPurchaseResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateIosReceiptRequest {
    pub currency_code: Option<String>,
    pub purchase_price: Option<i32>,
    pub receipt_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateIosReceiptResult {}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateWindowsReceiptRequest {
    pub catalog_version: Option<String>,
    pub currency_code: Option<String>,
    pub purchase_price: Option<i64>,
    pub receipt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateWindowsReceiptResult {}

// ---------------------------------------------------------------------------
// Coupons and containers
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedeemCouponRequest {
    pub catalog_version: Option<String>,
    pub character_id: Option<String>,
    pub coupon_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedeemCouponResult {
    pub granted_items: Option<Vec<ItemInstance>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlockContainerInstanceRequest {
    pub catalog_version: Option<String>,
    pub character_id: Option<String>,
    pub container_item_instance_id: Option<String>,
    pub key_item_instance_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlockContainerItemRequest {
    pub catalog_version: Option<String>,
    pub character_id: Option<String>,
    pub container_item_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnlockContainerItemResult {
    pub granted_items: Option<Vec<ItemInstance>>,
    pub unlocked_item_instance_id: Option<String>,
    pub unlocked_with_item_instance_id: Option<String>,
    pub virtual_currency: Option<BTreeMap<String, i64>>,
}
