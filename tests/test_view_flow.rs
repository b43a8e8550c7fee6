use mockito::Matcher;
use recipe_finder::{RecipeFinder, SearchMode, ViewState};

const DETAIL_BODY: &str = r#"{
    "id": 2,
    "title": "Penne Arrabbiata",
    "image": "https://img.example.com/2.jpg",
    "readyInMinutes": 25,
    "servings": 4,
    "extendedIngredients": [
        {"id": 20420, "original": "400 g penne"},
        {"id": 11529, "original": "1 can crushed tomatoes"}
    ],
    "analyzedInstructions": [
        {"name": "", "steps": [
            {"number": 1, "step": "Boil the penne."},
            {"number": 2, "step": "Simmer the sauce with chilli."}
        ]}
    ]
}"#;

#[tokio::test]
async fn test_select_then_back_restores_results_without_refetch() {
    let mut server = mockito::Server::new_async().await;
    let search = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"results": [
                {"id": 1, "title": "Spaghetti Carbonara"},
                {"id": 2, "title": "Penne Arrabbiata"}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let details = server
        .mock("GET", "/recipes/2/information")
        .match_query(Matcher::UrlEncoded("apiKey".into(), "test_key".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAIL_BODY)
        .expect(1)
        .create_async()
        .await;

    let mut finder = RecipeFinder::builder()
        .without_config()
        .base_url(server.url())
        .api_key("test_key")
        .build()
        .unwrap();

    let results = finder.search(SearchMode::Name, "pasta").await.clone();

    match finder.open(2).await {
        ViewState::Detail(detail) => {
            assert_eq!(detail.title, "Penne Arrabbiata");
            assert_eq!(detail.ready_in_minutes, Some(25));
            assert_eq!(detail.servings, Some(4));
            assert_eq!(detail.ingredients[0], "400 g penne");
            assert_eq!(detail.instruction_steps.len(), 2);
        }
        other => panic!("Expected detail, got {:?}", other),
    }

    assert!(finder.back());
    assert_eq!(finder.state(), &results);

    search.assert_async().await;
    details.assert_async().await;
}

#[tokio::test]
async fn test_server_error_becomes_error_state() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let mut finder = RecipeFinder::builder()
        .without_config()
        .base_url(server.url())
        .api_key("test_key")
        .build()
        .unwrap();

    let state = finder.search(SearchMode::Name, "pasta").await;
    assert_eq!(
        state,
        &ViewState::Error("Failed to fetch recipes. Please try again.".to_string())
    );
}

#[tokio::test]
async fn test_malformed_json_becomes_error_state() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes/findByIngredients")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": "not-a-number""#)
        .create_async()
        .await;

    let mut finder = RecipeFinder::builder()
        .without_config()
        .base_url(server.url())
        .api_key("test_key")
        .build()
        .unwrap();

    let state = finder.search(SearchMode::Ingredients, "egg").await;
    assert!(matches!(state, ViewState::Error(msg) if !msg.is_empty()));
}

#[tokio::test]
async fn test_unreachable_host_becomes_error_state() {
    // Nothing listens on port 9 of the loopback interface
    let mut finder = RecipeFinder::builder()
        .without_config()
        .base_url("http://127.0.0.1:9")
        .api_key("test_key")
        .build()
        .unwrap();

    let state = finder.open(716429).await;
    assert_eq!(
        state,
        &ViewState::Error("Failed to fetch recipe details.".to_string())
    );
}

#[tokio::test]
async fn test_error_does_not_block_next_search() {
    let mut server = mockito::Server::new_async().await;
    let _fail = server
        .mock("GET", "/recipes/42/information")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let _ok = server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 7, "title": "Tomato Soup"}]}"#)
        .create_async()
        .await;

    let mut finder = RecipeFinder::builder()
        .without_config()
        .base_url(server.url())
        .api_key("test_key")
        .build()
        .unwrap();

    assert!(matches!(finder.open(42).await, ViewState::Error(_)));
    assert!(!finder.back());

    let state = finder.search(SearchMode::Name, "soup").await;
    assert!(matches!(state, ViewState::ListResults(items) if items[0].id == 7));
}
