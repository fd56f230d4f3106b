mod adjustment;
mod line_item;
mod requests;
mod totals;

pub use adjustment::{Adjustment, AdjustmentSplit};
pub use line_item::{LineItem, NormalizedItems, RawLineItem};
pub use requests::{ComputeBillRequest, PreBillRequest};
pub use totals::{PreBill, TaxLine, TotalsBreakdown, TotalsOverrides};
