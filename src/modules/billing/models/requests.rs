use serde::{Deserialize, Serialize};

use super::{Adjustment, RawLineItem, TotalsOverrides};

/// Request to price a bill
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeBillRequest {
    /// Pin the bill to a specific config version
    #[serde(default)]
    pub config_version: Option<i64>,

    #[serde(default)]
    pub items: Vec<RawLineItem>,

    #[serde(default, alias = "extras")]
    pub adjustments: Vec<Adjustment>,

    #[serde(default)]
    pub overrides: TotalsOverrides,
}

/// Request to preview an order's total at placement time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreBillRequest {
    #[serde(default)]
    pub items: Vec<RawLineItem>,
}
