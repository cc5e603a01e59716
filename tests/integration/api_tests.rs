//! API integration tests
//!
//! Run against a live server with a fresh database:
//! cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api";

/// Helper to create an author and return its id
async fn create_author(client: &Client, first_name: &str, last_name: &str) -> i64 {
    let response = client
        .post(format!("{}/author", BASE_URL))
        .json(&json!({
            "firstName": first_name,
            "lastName": last_name
        }))
        .send()
        .await
        .expect("Failed to send create author request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("No author id in response")
}

/// Helper to create a genre and return its id
async fn create_genre(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/genre", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send create genre request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"].as_i64().expect("No genre id in response")
}

/// Helper to create a book linked to the given author/genre ids
async fn create_book(client: &Client, title: &str, author_ids: &[i64], genre_ids: &[i64]) -> Value {
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": title,
            "pageCount": 412,
            "publicationDate": "1965-08-01",
            "authorIds": author_ids,
            "genreIds": genre_ids
        }))
        .send()
        .await
        .expect("Failed to send create book request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_associations() {
    let client = Client::new();
    let author_id = create_author(&client, "Frank", "Herbert").await;
    let genre_a = create_genre(&client, "Science Fiction").await;
    let genre_b = create_genre(&client, "Adventure").await;

    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": "Dune",
            "pageCount": 412,
            "publicationDate": "1965-08-01",
            "authorIds": [author_id],
            "genreIds": [genre_a, genre_b]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let location = response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .unwrap()
        .to_string();

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["succeeded"], json!(true));
    assert_eq!(body["statusCode"], json!(201));
    assert_eq!(body["data"]["title"], "Dune");

    let authors = body["data"]["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["id"].as_i64().unwrap(), author_id);
    assert_eq!(authors[0]["firstName"], "Frank");

    let genres = body["data"]["genres"].as_array().unwrap();
    let genre_ids: Vec<i64> = genres.iter().map(|g| g["id"].as_i64().unwrap()).collect();
    assert_eq!(genre_ids.len(), 2);
    assert!(genre_ids.contains(&genre_a));
    assert!(genre_ids.contains(&genre_b));

    assert_eq!(location, format!("/api/book/{}", body["data"]["id"]));
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_missing_author_fails() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": "Ghost Book",
            "pageCount": 100,
            "publicationDate": "2000-01-01",
            "authorIds": [99_999_999],
            "genreIds": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["succeeded"], json!(false));
    assert!(body["message"].as_str().unwrap().contains("99999999"));

    // Nothing persisted: the book must not be listed
    let list: Value = client
        .get(format!("{}/book", BASE_URL))
        .send()
        .await
        .expect("Failed to list books")
        .json()
        .await
        .expect("Failed to parse list");
    let titles: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert!(!titles.contains(&"Ghost Book"));
}

#[tokio::test]
#[ignore]
async fn test_update_replaces_association_set() {
    let client = Client::new();
    let author_id = create_author(&client, "Ursula", "Le Guin").await;
    let genre_a = create_genre(&client, "Fantasy").await;
    let genre_b = create_genre(&client, "Classic").await;
    let genre_c = create_genre(&client, "Space Opera").await;

    let created = create_book(&client, "The Dispossessed", &[author_id], &[genre_a, genre_b]).await;
    let book_id = created["data"]["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/book/{}", BASE_URL, book_id))
        .json(&json!({
            "title": "The Dispossessed",
            "pageCount": 412,
            "publicationDate": "1965-08-01",
            "authorIds": [author_id],
            "genreIds": [genre_c]
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert_eq!(response.status(), 200);

    // None of the prior genre links survive, only the newly requested one
    let body: Value = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch book")
        .json()
        .await
        .expect("Failed to parse book");
    let genre_ids: Vec<i64> = body["data"]["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(genre_ids, vec![genre_c]);
}

#[tokio::test]
#[ignore]
async fn test_update_with_same_ids_is_idempotent() {
    let client = Client::new();
    let author_id = create_author(&client, "Isaac", "Asimov").await;
    let genre_id = create_genre(&client, "Robots").await;

    let created = create_book(&client, "I, Robot", &[author_id], &[genre_id]).await;
    let book_id = created["data"]["id"].as_i64().unwrap();

    let response = client
        .put(format!("{}/book/{}", BASE_URL, book_id))
        .json(&json!({
            "title": "I, Robot",
            "pageCount": 412,
            "publicationDate": "1965-08-01",
            "authorIds": [author_id],
            "genreIds": [genre_id]
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch book")
        .json()
        .await
        .expect("Failed to parse book");
    assert_eq!(body["data"]["authors"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["genres"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_update_missing_book_returns_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/book/99999999", BASE_URL))
        .json(&json!({
            "title": "Nothing",
            "pageCount": 1,
            "publicationDate": "2000-01-01",
            "authorIds": [],
            "genreIds": []
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_book_keeps_authors_and_genres() {
    let client = Client::new();
    let author_id = create_author(&client, "Mary", "Shelley").await;
    let genre_id = create_genre(&client, "Gothic").await;

    let created = create_book(&client, "Frankenstein", &[author_id], &[genre_id]).await;
    let book_id = created["data"]["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 200);

    let get_book = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch deleted book");
    assert_eq!(get_book.status(), 404);

    // The referenced author and genre rows remain untouched
    let author: Value = client
        .get(format!("{}/author/{}", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to fetch author")
        .json()
        .await
        .expect("Failed to parse author");
    assert_eq!(author["data"]["firstName"], "Mary");
    assert!(author["data"]["books"].as_array().unwrap().is_empty());

    let genre = client
        .get(format!("{}/genre/{}", BASE_URL, genre_id))
        .send()
        .await
        .expect("Failed to fetch genre");
    assert_eq!(genre.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_delete_author_removes_only_its_links() {
    let client = Client::new();
    let author_a = create_author(&client, "Terry", "Pratchett").await;
    let author_b = create_author(&client, "Neil", "Gaiman").await;
    let genre_id = create_genre(&client, "Comic Fantasy").await;

    let created = create_book(&client, "Good Omens", &[author_a, author_b], &[genre_id]).await;
    let book_id = created["data"]["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/author/{}", BASE_URL, author_a))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 200);

    // The book survives, losing only the deleted link
    let body: Value = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch book")
        .json()
        .await
        .expect("Failed to parse book");
    let author_ids: Vec<i64> = body["data"]["authors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    assert_eq!(author_ids, vec![author_b]);
    assert_eq!(body["data"]["genres"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_delete_genre_removes_only_its_links() {
    let client = Client::new();
    let author_id = create_author(&client, "Frank", "Herbert").await;
    let genre_a = create_genre(&client, "Ecology").await;
    let genre_b = create_genre(&client, "Politics").await;

    let created = create_book(&client, "Dune Messiah", &[author_id], &[genre_a, genre_b]).await;
    let book_id = created["data"]["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/genre/{}", BASE_URL, genre_a))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), 200);

    // The book survives, losing only the deleted genre link
    let body: Value = client
        .get(format!("{}/book/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to fetch book")
        .json()
        .await
        .expect("Failed to parse book");
    let genre_ids: Vec<i64> = body["data"]["genres"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["id"].as_i64().unwrap())
        .collect();
    assert_eq!(genre_ids, vec![genre_b]);
    assert_eq!(body["data"]["authors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_missing_author_reported_before_missing_genre() {
    let client = Client::new();

    // Both referenced ids are missing; only the author failure surfaces
    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": "Phantom Book",
            "pageCount": 100,
            "publicationDate": "2000-01-01",
            "authorIds": [88_888_888],
            "genreIds": [77_777_777]
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("author IDs"));
    assert!(message.contains("88888888"));
    assert!(!message.contains("77777777"));
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_duplicate_ids_links_once() {
    let client = Client::new();
    let author_id = create_author(&client, "Philip", "Dick").await;
    let genre_id = create_genre(&client, "Dystopia").await;

    let created = create_book(
        &client,
        "Ubik",
        &[author_id, author_id],
        &[genre_id, genre_id],
    )
    .await;

    assert_eq!(created["data"]["authors"].as_array().unwrap().len(), 1);
    assert_eq!(created["data"]["genres"].as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn test_create_book_without_title_fails() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book", BASE_URL))
        .json(&json!({
            "title": "",
            "pageCount": 10,
            "publicationDate": "2000-01-01"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["succeeded"], json!(false));
}
