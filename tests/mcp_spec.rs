//! MCP server integration tests.
//!
//! These exercise the tool logic through the server's test helpers; the
//! protocol-level flow is covered by `mcp_protocol_spec.rs`.

use san_scaffold::mcp::{GenerateComponentRequest, McpServer};
use san_scaffold::scaffold::{catalog, GenerateRequest, LIST_MESSAGE};

fn setup() -> McpServer {
    McpServer::new()
}

fn generate_request(component_name: &str, features: &str) -> GenerateRequest {
    GenerateRequest {
        component_name: component_name.to_string(),
        features: features.to_string(),
        ..Default::default()
    }
}

mod san_tool {
    use super::*;

    #[test]
    fn empty_component_name_returns_the_catalog() {
        let server = setup();

        let result = server
            .test_generate(GenerateRequest::default())
            .expect("Tool failed");

        assert_eq!(result.message, LIST_MESSAGE);
        assert_eq!(result.components, catalog::list());
        assert!(result.files.is_none());
    }

    #[test]
    fn generates_code_and_style_files() {
        let server = setup();

        let result = server
            .test_generate(generate_request("UserCard", "template,lifecycle"))
            .expect("Tool failed");

        assert_eq!(result.message, "成功生成 UserCard 组件代码");
        let files = result.files.expect("Expected files");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].filename, "UserCard/index.ts");
        assert_eq!(files[1].filename, "UserCard/index.less");
    }

    #[test]
    fn catalog_snapshot_is_included_in_every_response() {
        let server = setup();

        let listing = server
            .test_generate(GenerateRequest::default())
            .expect("Tool failed");
        let generated = server
            .test_generate(generate_request("UserCard", ""))
            .expect("Tool failed");

        assert_eq!(listing.components, generated.components);
        assert_eq!(generated.components.len(), catalog::COSMIC_COMPONENTS.len());
    }

    #[test]
    fn unknown_features_do_not_fail_the_call() {
        let server = setup();

        let result = server
            .test_generate(generate_request("UserCard", "foo,bar"))
            .expect("Tool failed");

        assert!(result.files.is_some());
    }

    #[test]
    fn selected_components_switch_to_the_class_template() {
        let server = setup();

        let request = GenerateRequest {
            component_name: "UserCard".to_string(),
            selected_components: vec!["Dialog".to_string(), "Toast".to_string()],
            ..Default::default()
        };
        let result = server.test_generate(request).expect("Tool failed");
        let files = result.files.expect("Expected files");

        assert!(files[0].code.contains("extends Component<"));
        assert!(files[0].code.contains("'cos-dialog': Dialog"));
        assert!(files[0].code.contains("'cos-toast': Toast"));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let server = setup();

        let first = server
            .test_generate(generate_request("UserCard", "template,store"))
            .expect("Tool failed");
        let second = server
            .test_generate(generate_request("UserCard", "template,store"))
            .expect("Tool failed");

        assert_eq!(first.files, second.files);
    }
}

mod san_tool_payload {
    use super::*;
    use serde_json::Value;

    /// Extract the JSON payload from a tool call result's text content.
    fn payload_of(result: &rmcp::model::CallToolResult) -> Value {
        let value = serde_json::to_value(result).expect("Result should serialize");
        let text = value["content"][0]["text"]
            .as_str()
            .expect("Expected text content");
        serde_json::from_str(text).expect("Expected JSON in text")
    }

    #[tokio::test]
    async fn listing_payload_is_json_text_without_files() {
        let server = setup();

        let result = server
            .test_call_san(GenerateComponentRequest::default())
            .await
            .expect("Tool failed");

        let payload = payload_of(&result);
        assert_eq!(payload["message"].as_str(), Some(LIST_MESSAGE));
        assert_eq!(
            payload["components"].as_array().map(Vec::len),
            Some(catalog::COSMIC_COMPONENTS.len())
        );
        assert!(payload.get("files").is_none());
    }

    #[tokio::test]
    async fn generation_payload_carries_both_files() {
        let server = setup();

        let request = GenerateComponentRequest {
            component_name: "UserCard".to_string(),
            features: "template,lifecycle".to_string(),
            description: "shows a user".to_string(),
            ..Default::default()
        };
        let result = server.test_call_san(request).await.expect("Tool failed");

        let payload = payload_of(&result);
        assert_eq!(
            payload["message"].as_str(),
            Some("成功生成 UserCard 组件代码")
        );
        let files = payload["files"].as_array().expect("Expected files array");
        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["filename"].as_str(), Some("UserCard/index.ts"));
        assert_eq!(files[1]["filename"].as_str(), Some("UserCard/index.less"));

        let code = files[0]["code"].as_str().expect("Expected code");
        assert!(code.contains("UserCard 组件"));
        assert!(code.contains("shows a user"));
    }
}
