// HTTP tests for the billing endpoints using actix-web's in-process test service

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, web, App};
use helpers::*;
use orderdesk::middleware::{ErrorHandler, RequestId};
use orderdesk::modules::billing::controllers::configure_billing_routes;
use orderdesk::modules::billing::models::{PreBill, TotalsBreakdown};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

macro_rules! billing_app {
    () => {{
        let (service, _bus) = billing_service().await;
        test::init_service(
            App::new()
                .wrap(ErrorHandler)
                .wrap(RequestId)
                .app_data(web::Data::new(service))
                .configure(configure_billing_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_preview_bill_endpoint() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!("/restaurants/{}/bills/preview", RESTAURANT_ID))
        .set_json(json!({
            "items": [
                {"quantity": 2, "unitPrice": 400},
                {"qty": "4", "price": "50"}
            ],
            "adjustments": [
                {"label": "Packaging", "amount": 50},
                {"label": "Loyalty", "amount": "-20"}
            ]
        }))
        .to_request();

    let totals: TotalsBreakdown = test::call_and_read_body_json(&app, req).await;

    assert_eq!(totals.subtotal, dec!(1000));
    assert_eq!(totals.extras_total, dec!(50));
    assert_eq!(totals.more_discounts_total, dec!(20));
    assert_eq!(totals.total, dec!(1145.10));
}

#[actix_web::test]
async fn test_preview_bill_uses_camel_case_fields() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!("/restaurants/{}/bills/preview", RESTAURANT_ID))
        .set_json(json!({"items": [{"quantity": 1, "unitPrice": 100}]}))
        .to_request();

    let body: Value = test::call_and_read_body_json(&app, req).await;

    for field in [
        "subtotal",
        "discountAmount",
        "afterDiscount",
        "serviceChargeAmount",
        "taxableValue",
        "taxBreakdown",
        "taxAmount",
        "extrasTotal",
        "moreDiscountsTotal",
        "total",
        "configVersion",
    ] {
        assert!(body.get(field).is_some(), "missing field {}", field);
    }
}

#[actix_web::test]
async fn test_pre_bill_endpoint() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!("/restaurants/{}/orders/pre-bill", RESTAURANT_ID))
        .set_json(json!({"items": [{"menuItemId": "garlic-naan", "qty": 2}]}))
        .to_request();

    let pre_bill: PreBill = test::call_and_read_body_json(&app, req).await;

    // 2 × 50 from the menu; 10% off; 18% GST and 5% service on 90
    assert_eq!(pre_bill.subtotal, dec!(100));
    assert_eq!(pre_bill.discount, dec!(10.00));
    assert_eq!(pre_bill.tax_total, dec!(16.20));
    assert_eq!(pre_bill.service_charge, dec!(4.50));
    assert_eq!(pre_bill.total, dec!(110.70));
}

#[actix_web::test]
async fn test_out_of_range_numbers_degrade_instead_of_failing() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!("/restaurants/{}/bills/preview", RESTAURANT_ID))
        .set_json(json!({
            "items": [
                {"quantity": 2, "unitPrice": "79228162514264337593543950335"},
                {"quantity": 1, "unitPrice": 100}
            ],
            "overrides": {"discountPercent": "1e27"}
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    // The oversized price counts as zero and the config's 10% discount applies
    let totals: TotalsBreakdown = test::read_body_json(resp).await;
    assert_eq!(totals.subtotal, dec!(100));
    assert_eq!(totals.discount_percent, dec!(10));
    assert_eq!(totals.taxable_value, dec!(94.50));
    assert_eq!(totals.total, dec!(111.51));
}

#[actix_web::test]
async fn test_unconfigured_restaurant_returns_server_error() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!(
            "/restaurants/{}/bills/preview",
            UNCONFIGURED_RESTAURANT_ID
        ))
        .set_json(json!({"items": []}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 500);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains(UNCONFIGURED_RESTAURANT_ID));
}

#[actix_web::test]
async fn test_blank_restaurant_id_is_client_error() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri("/restaurants/%20/bills/preview")
        .set_json(json!({"items": []}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_response_carries_request_id() {
    let app = billing_app!();

    let req = test::TestRequest::post()
        .uri(&format!("/restaurants/{}/orders/pre-bill", RESTAURANT_ID))
        .insert_header(("X-Request-ID", "req-42"))
        .set_json(json!({"items": []}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "req-42");
}
