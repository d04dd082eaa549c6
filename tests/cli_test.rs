//! CLI Command Tests
//!
//! Drives the `list` and `show` handlers against a mocked recipes endpoint
//! and checks their exit codes and JSON output shape.

use mockito::{Mock, Server, ServerGuard};
use recipetui::api::RecipeClient;
use recipetui::cli::{ExitCode, JsonOutput, ListCmd, Output, ShowCmd};
use recipetui::commands::{self, list_cmd, show_cmd};
use recipetui::Recipe;

const RECIPES_JSON: &str = r#"[
    {"Name": "Beef Chili", "Time": "2 hours", "Ingredients": ["beef", "beans"], "Steps": ["Brown", "Simmer"]},
    {"Name": "Banana Bread", "Time": "1 hour", "Ingredients": ["bananas"], "Steps": ["Mash", "Bake"]},
    {"Name": "Greek Salad", "Time": "15 min", "Ingredients": ["feta"], "Steps": ["Toss"]}
]"#;

fn output() -> Output {
    Output {
        json: false,
        quiet: true,
        color: false,
    }
}

fn json_output() -> Output {
    Output {
        json: true,
        quiet: true,
        color: false,
    }
}

/// Endpoint answering every GET with `status` and `body`
async fn serve(status: usize, body: &str) -> (ServerGuard, Mock, RecipeClient) {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/recipes/all")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let client = RecipeClient::new(format!("{}/recipes/all", server.url()));
    (server, mock, client)
}

// =============================================================================
// List Command
// =============================================================================

mod list {
    use super::*;

    #[tokio::test]
    async fn test_list_all() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let code = list_cmd(ListCmd { query: None }, &client, &output()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_list_json_with_query() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let cmd = ListCmd {
            query: Some("salad".into()),
        };
        assert_eq!(list_cmd(cmd, &client, &json_output()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_list_query_without_matches_still_succeeds() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let cmd = ListCmd {
            query: Some("sushi".into()),
        };
        assert_eq!(list_cmd(cmd, &client, &output()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_list_server_error() {
        let (_server, _mock, client) = serve(500, "oops").await;
        let code = list_cmd(ListCmd { query: None }, &client, &json_output()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_list_unreachable() {
        let client = RecipeClient::new("http://127.0.0.1:9/recipes/all");
        let code = list_cmd(ListCmd { query: None }, &client, &output()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_list_malformed_body() {
        let (_server, _mock, client) = serve(200, r#"{"not": "a list"}"#).await;
        let code = list_cmd(ListCmd { query: None }, &client, &output()).await;
        assert_eq!(code, ExitCode::InvalidResponse);
    }
}

// =============================================================================
// Show Command
// =============================================================================

mod show {
    use super::*;

    #[tokio::test]
    async fn test_show_matches() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let cmd = ShowCmd {
            queries: vec!["chili".into(), "banana".into()],
        };
        assert_eq!(show_cmd(cmd, &client, &output()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_show_json() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let cmd = ShowCmd {
            queries: vec!["greek".into()],
        };
        assert_eq!(show_cmd(cmd, &client, &json_output()).await, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_show_unmatched_query() {
        let (_server, _mock, client) = serve(200, RECIPES_JSON).await;
        let cmd = ShowCmd {
            queries: vec!["chili".into(), "sushi".into()],
        };
        assert_eq!(show_cmd(cmd, &client, &output()).await, ExitCode::NoMatch);
    }

    #[tokio::test]
    async fn test_show_server_error() {
        let (_server, _mock, client) = serve(503, "").await;
        let cmd = ShowCmd {
            queries: vec!["chili".into()],
        };
        assert_eq!(show_cmd(cmd, &client, &output()).await, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_show_malformed_body() {
        let (_server, _mock, client) = serve(200, "[{\"Name\": ").await;
        let cmd = ShowCmd {
            queries: vec!["chili".into()],
        };
        assert_eq!(show_cmd(cmd, &client, &json_output()).await, ExitCode::InvalidResponse);
    }
}

// =============================================================================
// Matching and JSON Shape
// =============================================================================

mod shape {
    use super::*;

    fn recipes() -> Vec<Recipe> {
        serde_json::from_str(RECIPES_JSON).unwrap()
    }

    #[test]
    fn test_filter_and_resolve_use_labels() {
        let recipes = recipes();
        assert_eq!(commands::filter(&recipes, "15 min"), vec![2]);

        let queries = vec!["bread".to_string(), "chili".to_string()];
        assert_eq!(commands::resolve(&recipes, &queries), Ok(vec![1, 0]));
    }

    #[test]
    fn test_list_json_wraps_recipes_in_data() {
        let recipes = recipes();
        let selected: Vec<&Recipe> = commands::filter(&recipes, "salad")
            .into_iter()
            .map(|i| &recipes[i])
            .collect();

        let json = serde_json::to_value(JsonOutput::success(&selected)).unwrap();

        let data = json["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["Name"], "Greek Salad");
        assert_eq!(data[0]["Time"], "15 min");
        assert_eq!(data[0]["Ingredients"][0], "feta");
        assert!(json.get("error").is_none());
        assert!(json.get("exit_code").is_none());
    }

    #[test]
    fn test_error_json_shape() {
        let json = serde_json::to_value(JsonOutput::error_msg(
            "No recipe matches \"sushi\"",
            ExitCode::NoMatch,
        ))
        .unwrap();

        assert_eq!(json["error"], "No recipe matches \"sushi\"");
        assert_eq!(json["exit_code"], 4);
        assert!(json.get("data").is_none());
    }
}
