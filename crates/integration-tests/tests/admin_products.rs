//! Integration tests for product listing, update, and delete.
//!
//! These tests require:
//! - The admin BFF running (cargo run -p merchdesk-admin)
//! - Valid Shopify credentials in environment
//! - A store with at least six products
//!
//! Run with: cargo test -p merchdesk-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use uuid::Uuid;

use merchdesk_integration_tests::admin_base_url;

async fn get_json(client: &Client, url: &str) -> Value {
    let resp = client.get(url).send().await.expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("invalid JSON body")
}

fn page_ids(page: &Value) -> HashSet<String> {
    page["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["id"].as_str().expect("product id").to_string())
        .collect()
}

// ============================================================================
// Listing & Pagination
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_list_first_page() {
    let client = Client::new();
    let base_url = admin_base_url();

    let page = get_json(&client, &format!("{base_url}/api/products")).await;

    // Never more than the requested page size
    assert!(page["products"].as_array().unwrap().len() <= 5);
    assert!(page.get("error").is_none());

    if page["pageInfo"]["hasNextPage"] == true {
        assert!(page["pageInfo"]["endCursor"].is_string());
    }
}

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_list_pages_do_not_overlap() {
    let client = Client::new();
    let base_url = admin_base_url();

    let first = get_json(&client, &format!("{base_url}/api/products")).await;
    assert_eq!(
        first["pageInfo"]["hasNextPage"], true,
        "store needs more than five products for this test"
    );

    let cursor = first["pageInfo"]["endCursor"].as_str().unwrap();
    let second = get_json(
        &client,
        &format!("{base_url}/api/products?after={cursor}"),
    )
    .await;

    let first_ids = page_ids(&first);
    let second_ids = page_ids(&second);
    assert!(!second_ids.is_empty());
    assert!(first_ids.is_disjoint(&second_ids));
}

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_list_same_cursor_is_stable() {
    let client = Client::new();
    let base_url = admin_base_url();

    let first = get_json(&client, &format!("{base_url}/api/products")).await;
    let cursor = first["pageInfo"]["endCursor"].as_str().unwrap();

    let once = get_json(&client, &format!("{base_url}/api/products?after={cursor}")).await;
    let again = get_json(&client, &format!("{base_url}/api/products?after={cursor}")).await;

    // Stable assuming nobody mutates the store between the two requests
    assert_eq!(page_ids(&once), page_ids(&again));
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_update_echoes_fields() {
    let client = Client::new();
    let base_url = admin_base_url();

    let page = get_json(&client, &format!("{base_url}/api/products")).await;
    let product = &page["products"][0];
    let id = product["id"].as_str().unwrap();
    let original_title = product["title"].as_str().unwrap().to_string();

    let new_title = format!("Integration test {}", Uuid::new_v4());
    let resp = client
        .post(format!("{base_url}/api/products/update"))
        .json(&json!({
            "id": id,
            "title": new_title,
            "status": "ACTIVE",
            "tags": ["integration-test"]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["updatedProduct"]["title"], new_title.as_str());
    assert_eq!(body["updatedProduct"]["status"], "ACTIVE");

    // Restore the original title
    let resp = client
        .post(format!("{base_url}/api/products/update"))
        .json(&json!({
            "id": id,
            "title": original_title,
            "status": "ACTIVE",
            "tags": []
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_update_blank_title_surfaces_user_errors() {
    let client = Client::new();
    let base_url = admin_base_url();

    let page = get_json(&client, &format!("{base_url}/api/products")).await;
    let id = page["products"][0]["id"].as_str().unwrap();

    let resp = client
        .post(format!("{base_url}/api/products/update"))
        .json(&json!({ "id": id, "title": "", "status": "ACTIVE", "tags": [] }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server, Shopify credentials, and DELETES a product"]
async fn test_product_delete_round_trip() {
    let client = Client::new();
    let base_url = admin_base_url();

    // Deletes the first listed product - only run against a throwaway store
    let page = get_json(&client, &format!("{base_url}/api/products")).await;
    let id = page["products"][0]["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{base_url}/api/products/delete"))
        .json(&json!({ "id": id }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["deletedId"], id.as_str());

    // A subsequent list never includes the deleted id
    let page = get_json(&client, &format!("{base_url}/api/products")).await;
    assert!(!page_ids(&page).contains(&id));
}

#[tokio::test]
#[ignore = "Requires running admin server and Shopify credentials"]
async fn test_product_delete_unknown_id_is_rejected() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/api/products/delete"))
        .json(&json!({ "id": "gid://shopify/Product/0" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}
