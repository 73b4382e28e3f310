use std::time::Duration;

use mockito::{Matcher, Server};

use recipe_relay::providers::{SpoonacularClient, VideoProvider, YouTubeClient};
use recipe_relay::{Error, RecipeService};

const DETAIL_BODY: &str = r#"{
    "id": 42,
    "title": "Spicy Chicken Curry",
    "image": "https://img/42.jpg",
    "servings": 4,
    "readyInMinutes": 45,
    "cuisines": ["Indian"],
    "extendedIngredients": [
        {"original": "2 chicken breasts"},
        {"original": "1 tbsp curry powder"}
    ],
    "analyzedInstructions": [
        {"steps": [{"step": "Brown the chicken."}, {"step": "Simmer in sauce."}]},
        {"steps": [{"step": "From a second group, must be ignored."}]}
    ],
    "nutrition": {"nutrients": [
        {"name": "Calories", "amount": 420.0},
        {"name": "Protein", "amount": 31.0}
    ]}
}"#;

const VIDEO_BODY: &str = r#"{
    "items": [
        {"id": {"videoId": "v1"}, "snippet": {"title": "Best Curry Ever"}},
        {"id": {"videoId": "v2"}, "snippet": {"title": "Spicy Chicken Curry Recipe"}}
    ]
}"#;

fn service_against(
    recipe_server: &Server,
    video_server: Option<&Server>,
) -> RecipeService {
    let recipes =
        SpoonacularClient::with_base_url("fake_api_key".to_string(), recipe_server.url());
    let videos = video_server.map(|s| {
        Box::new(YouTubeClient::with_base_url(
            "fake_api_key".to_string(),
            s.url(),
        )) as Box<dyn VideoProvider>
    });
    RecipeService::new(Box::new(recipes), videos, Duration::from_secs(5))
}

#[tokio::test]
async fn test_recipe_detail_assembles_with_matched_video() {
    let mut recipe_server = Server::new_async().await;
    let recipe_mock = recipe_server
        .mock("GET", "/recipes/42/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAIL_BODY)
        .create();

    let mut video_server = Server::new_async().await;
    let video_mock = video_server
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::Regex(
            "q=how\\+to\\+make\\+Spicy\\+Chicken\\+Curry\\+recipe\\+step\\+by\\+step".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(VIDEO_BODY)
        .create();

    let service = service_against(&recipe_server, Some(&video_server));
    let recipe = service.recipe(42).await.unwrap();

    assert_eq!(recipe.title, "Spicy Chicken Curry");
    assert_eq!(recipe.servings, Some(4));
    assert_eq!(recipe.cuisines, vec!["Indian"]);
    assert_eq!(recipe.ingredients.len(), 2);
    // Only the first instruction group contributes steps
    assert_eq!(
        recipe.instructions,
        vec!["Brown the chicken.", "Simmer in sauce."]
    );
    let nutrition = recipe.nutrition.unwrap();
    assert_eq!(nutrition.calories, 420.0);
    assert_eq!(nutrition.protein, 31.0);
    assert_eq!(nutrition.fat, 0.0);
    // v1 is ranked first but fails the match gate; v2 qualifies
    assert_eq!(recipe.video_id.as_deref(), Some("v2"));

    recipe_mock.assert();
    video_mock.assert();
}

#[tokio::test]
async fn test_quota_exceeded_aborts_assembly() {
    let mut recipe_server = Server::new_async().await;
    let recipe_mock = recipe_server
        .mock("GET", "/recipes/42/information")
        .match_query(Matcher::Any)
        .with_status(402)
        .with_body(r#"{"code": 402, "message": "quota exceeded"}"#)
        .create();

    let service = service_against(&recipe_server, None);
    let result = service.recipe(42).await;

    assert!(matches!(result, Err(Error::QuotaExceeded)));
    assert!(service.favorites().list().is_empty());
    recipe_mock.assert();
}

#[tokio::test]
async fn test_video_provider_failure_yields_recipe_without_video() {
    let mut recipe_server = Server::new_async().await;
    let recipe_mock = recipe_server
        .mock("GET", "/recipes/42/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAIL_BODY)
        .create();

    let mut video_server = Server::new_async().await;
    let video_mock = video_server
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    let service = service_against(&recipe_server, Some(&video_server));
    let recipe = service.recipe(42).await.unwrap();

    assert_eq!(recipe.title, "Spicy Chicken Curry");
    assert!(recipe.video_id.is_none());
    recipe_mock.assert();
    video_mock.assert();
}

#[tokio::test]
async fn test_popular_and_search_pass_through_summaries() {
    let mut recipe_server = Server::new_async().await;
    let popular_mock = recipe_server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Regex("number=12".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"id": 1, "title": "Pasta"}]}"#)
        .create();
    let search_mock = recipe_server
        .mock("GET", "/recipes/complexSearch")
        .match_query(Matcher::Regex("number=20&.*query=curry".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create();

    let service = service_against(&recipe_server, None);

    let popular = service.popular().await.unwrap();
    assert_eq!(popular.len(), 1);
    assert_eq!(popular[0].title, "Pasta");

    // Zero hits is an empty list, not an error
    let searched = service.search("curry").await.unwrap();
    assert!(searched.is_empty());

    popular_mock.assert();
    search_mock.assert();
}

#[tokio::test]
async fn test_favorites_flow_through_service() {
    let mut recipe_server = Server::new_async().await;
    let recipe_mock = recipe_server
        .mock("GET", "/recipes/42/information")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(DETAIL_BODY)
        .create();

    let service = service_against(&recipe_server, None);
    let recipe = service.recipe(42).await.unwrap();

    service.favorites().put("42", recipe);
    assert_eq!(service.favorites().list().len(), 1);

    service.favorites().remove("42");
    assert!(service.favorites().list().is_empty());

    // Removing again is a quiet no-op
    service.favorites().remove("42");

    recipe_mock.assert();
}
