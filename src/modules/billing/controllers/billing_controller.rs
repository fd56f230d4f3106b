//! Billing controller for HTTP endpoints
//!
//! Thin wrappers used by the staff dashboard and the customer app to preview bills and
//! order totals. Nothing is persisted here.

use actix_web::{web, HttpResponse};

use crate::core::AppError;
use crate::modules::billing::models::{ComputeBillRequest, PreBillRequest};
use crate::modules::billing::services::BillingService;

/// Compute an itemized bill
///
/// POST /restaurants/{restaurant_id}/bills/preview
pub async fn preview_bill(
    service: web::Data<BillingService>,
    restaurant_id: web::Path<String>,
    request: web::Json<ComputeBillRequest>,
) -> Result<HttpResponse, AppError> {
    let totals = service
        .compute_bill(&restaurant_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(totals))
}

/// Project the pre-bill of an order being placed
///
/// POST /restaurants/{restaurant_id}/orders/pre-bill
pub async fn pre_bill(
    service: web::Data<BillingService>,
    restaurant_id: web::Path<String>,
    request: web::Json<PreBillRequest>,
) -> Result<HttpResponse, AppError> {
    let pre_bill = service
        .project_pre_bill(&restaurant_id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(pre_bill))
}

/// Configure billing routes
pub fn configure_billing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/restaurants/{restaurant_id}")
            .route("/bills/preview", web::post().to(preview_bill))
            .route("/orders/pre-bill", web::post().to(pre_bill)),
    );
}
