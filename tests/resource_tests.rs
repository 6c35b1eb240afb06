//! Integration tests for the resource clients.
//!
//! Each test mounts the endpoint a resource client is expected to call and
//! checks the decoded records and response metadata.

use serde::Deserialize;
use serde_json::json;
use woocommerce_api::clients::HttpError;
use woocommerce_api::parameters::{PageParams, Parameters};
use woocommerce_api::resources::{
    CartItemAdd, CartSession, OrderCreate, OrderCreateItem, OrderStatus, OrderUpdate, Product,
    ProductVariation, WooCommerce,
};
use woocommerce_api::scalars::Float;
use woocommerce_api::{BaseUrl, ConsumerKey, ConsumerSecret, WooCommerceConfig};
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(server: &MockServer) -> WooCommerceConfig {
    WooCommerceConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .consumer_key(ConsumerKey::new("ck_test").unwrap())
        .consumer_secret(ConsumerSecret::new("cs_test").unwrap())
        .build()
        .unwrap()
}

fn create_api(server: &MockServer) -> WooCommerce {
    WooCommerce::new(&create_config(server)).unwrap()
}

fn order_json(id: u64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "status": status,
        "currency": "EUR",
        "date_created": "2024-03-01T10:15:00",
        "date_modified": "2024-03-01T10:20:00",
        "total": "29.35",
        "date_paid": "2024-03-01T10:16:00",
        "date_completed": null
    })
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
async fn test_order_list_returns_total_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/orders"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2"))
        .and(query_param("status", "processing"))
        .and(header_exists("authorization"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-Total", "42")
                .set_body_json(json!([
                    order_json(1, "processing"),
                    order_json(2, "processing")
                ])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let params = PageParams {
        page: 1,
        per_page: 2,
    }
    .with_value("status", "processing");

    let (orders, total) = api.orders.list(&params).await.unwrap();

    assert_eq!(total, 42);
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].status, OrderStatus::Processing);
    assert_eq!(orders[1].total, Float(29.35));
    assert!(orders[0].date_paid.is_valid());
    assert!(!orders[0].date_completed.is_valid());
}

#[tokio::test]
async fn test_order_list_without_total_header_reports_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let (orders, total) = api.orders.list(&PageParams::default()).await.unwrap();

    assert!(orders.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn test_order_list_with_garbage_total_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-WP-Total", "lots")
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let api = create_api(&server);
    let result = api.orders.list(&PageParams::default()).await;

    assert!(matches!(result, Err(HttpError::Format(_))));
}

#[tokio::test]
async fn test_order_create_posts_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/v3/orders"))
        .and(body_json(json!({
            "payment_method": "bacs",
            "payment_method_title": "Bank transfer",
            "currency": "EUR",
            "set_paid": false,
            "billing": {
                "first_name": "", "last_name": "", "company": "", "address_1": "",
                "address_2": "", "city": "", "state": "", "postcode": "", "country": ""
            },
            "shipping": {
                "first_name": "", "last_name": "", "company": "", "address_1": "",
                "address_2": "", "city": "", "state": "", "postcode": "", "country": ""
            },
            "line_items": [{"product_id": 93, "quantity": 2}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(order_json(727, "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let create = OrderCreate {
        payment_method: "bacs".into(),
        payment_method_title: "Bank transfer".into(),
        currency: "EUR".into(),
        line_items: vec![OrderCreateItem {
            product_id: 93,
            variation_id: None,
            quantity: 2,
        }],
        ..Default::default()
    };

    let order = api.orders.create(&create).await.unwrap();
    assert_eq!(order.id, 727);
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_order_update_puts_to_order_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/wp-json/wc/v3/orders/727"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_json(727, "completed")))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let update = OrderUpdate {
        status: Some(OrderStatus::Completed),
        ..Default::default()
    };

    let order = api.orders.update(727, &update).await.unwrap();
    assert_eq!(order.status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_order_update_of_unknown_order_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "woocommerce_rest_shop_order_invalid_id",
            "message": "Invalid ID.",
            "data": {"status": 404}
        })))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let result = api.orders.update(1, &OrderUpdate::default()).await;

    assert!(matches!(result, Err(HttpError::Api(e)) if e.status_code == 404));
}

// ============================================================================
// Products, Customers, Taxes
// ============================================================================

#[tokio::test]
async fn test_product_retrieve_into_extension_type() {
    #[derive(Debug, Deserialize)]
    struct BrandedProduct {
        #[serde(flatten)]
        product: Product,
        brand: Option<String>,
    }

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/93"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 93,
            "name": "Mug",
            "price": "10.00",
            "sale_price": "",
            "brand": "Acme"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api: WooCommerce<woocommerce_api::resources::Customer, BrandedProduct> =
        WooCommerce::new(&create_config(&server)).unwrap();

    let product = api.products.retrieve(93).await.unwrap();
    assert_eq!(product.product.name, "Mug");
    assert_eq!(product.product.common.price.get(), Some(10.0));
    assert!(!product.product.common.sale_price.is_valid());
    assert_eq!(product.brand.as_deref(), Some("Acme"));
}

#[tokio::test]
async fn test_product_list_variations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/products/93/variations"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 94, "sku": "MUG-RED", "price": "10"},
            {"id": 95, "sku": "MUG-BLUE", "price": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let variations: Vec<ProductVariation> = api
        .products
        .list_variations(93, &PageParams::default())
        .await
        .unwrap();

    assert_eq!(variations.len(), 2);
    assert_eq!(variations[0].common.sku, "MUG-RED");
    assert!(!variations[1].common.price.is_valid());
}

#[tokio::test]
async fn test_customer_list_and_retrieve() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 12, "email": "ana@example.com"}])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/customers/12"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 12, "username": "ana"})),
        )
        .mount(&server)
        .await;

    let api = create_api(&server);
    let customers = api.customers.list(&PageParams::default()).await.unwrap();
    let customer = api.customers.retrieve(12).await.unwrap();

    assert_eq!(customers[0].email, "ana@example.com");
    assert_eq!(customer.username, "ana");
}

#[tokio::test]
async fn test_tax_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/v3/taxes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "country": "SI", "rate": "22.0000"},
            {"id": 2, "country": "SI", "rate": "9.5000"}
        ])))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let taxes = api.taxes.list(&PageParams::default()).await.unwrap();

    assert_eq!(taxes.len(), 2);
    assert_eq!(taxes[1].rate, Float(9.5));
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
async fn test_cart_get_returns_session_headers() {
    let server = MockServer::start().await;
    Mock::given(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/store/v1/cart"))
        .and(header("cart-token", "token-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Nonce", "nonce-1")
                .set_body_json(json!({
                    "items": [],
                    "items_count": 0,
                    "totals": {"currency_code": "EUR", "total_price": "0"}
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let response = api.cart.get(Some("token-1")).await.unwrap();

    assert!(response.cart.items.is_empty());
    assert_eq!(response.session.cart_token.as_deref(), Some("token-1"));
    assert_eq!(response.session.nonce.as_deref(), Some("nonce-1"));
}

#[tokio::test]
async fn test_cart_get_without_token_adopts_issued_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wp-json/wc/store/v1/cart"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Cart-Token", "issued-token")
                .insert_header("Nonce", "nonce-1")
                .set_body_json(json!({"items": []})),
        )
        .mount(&server)
        .await;

    let api = create_api(&server);
    let response = api.cart.get(None).await.unwrap();

    assert_eq!(response.session.cart_token.as_deref(), Some("issued-token"));
}

#[tokio::test]
async fn test_cart_add_item_sends_session_and_refreshes_nonce() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/store/v1/cart/add-item"))
        .and(header("cart-token", "token-1"))
        .and(header("nonce", "nonce-1"))
        .and(body_json(json!({"id": 93, "quantity": 2})))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("Nonce", "nonce-2")
                .set_body_json(json!({
                    "items": [{"key": "abc", "id": 93, "quantity": 2}],
                    "items_count": 2
                })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let session = CartSession {
        cart_token: Some("token-1".into()),
        nonce: Some("nonce-1".into()),
    };

    let response = api
        .cart
        .add_item(&session, &CartItemAdd::new(93, 2))
        .await
        .unwrap();

    assert_eq!(response.cart.items_count, 2);
    assert_eq!(response.cart.items[0].key, "abc");
    assert_eq!(response.session.cart_token.as_deref(), Some("token-1"));
    assert_eq!(response.session.nonce.as_deref(), Some("nonce-2"));
}

#[tokio::test]
async fn test_cart_remove_item_posts_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wp-json/wc/store/v1/cart/remove-item"))
        .and(body_json(json!({"key": "abc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let session = CartSession {
        cart_token: Some("token-1".into()),
        nonce: Some("nonce-1".into()),
    };

    let response = api.cart.remove_item(&session, "abc").await.unwrap();

    assert!(response.cart.items.is_empty());
    assert_eq!(response.session, session);
}

#[tokio::test]
async fn test_cart_mutation_without_nonce_surfaces_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "woocommerce_rest_missing_nonce",
            "message": "Missing the Nonce header. This endpoint requires a valid nonce.",
            "data": {"status": 401}
        })))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let result = api
        .cart
        .add_item(&CartSession::new("token-1"), &CartItemAdd::new(93, 1))
        .await;

    match result {
        Err(HttpError::Api(error)) => assert_eq!(error.code, "woocommerce_rest_missing_nonce"),
        other => panic!("Expected Api error, got: {other:?}"),
    }
}
