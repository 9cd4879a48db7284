//! Request types for MCP tools.

use rmcp::schemars::JsonSchema;
use serde::Deserialize;

use crate::scaffold::GenerateRequest;

/// Input for the `san` tool. Field names are camelCase on the wire,
/// matching the published tool schema.
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateComponentRequest {
    #[schemars(
        description = "组件名称（使用PascalCase命名规范）。不传则返回可用组件列表。"
    )]
    #[serde(default)]
    pub component_name: String,
    #[schemars(
        description = "需要包含的特性，使用逗号分隔：template-模板, style-样式, computed-计算属性, lifecycle-生命周期, store-状态管理, typescript-TypeScript支持。默认包含 typescript 和 style，无法识别的特性会被忽略。"
    )]
    #[serde(default)]
    pub features: String,
    #[schemars(description = "组件的功能描述（可选）")]
    #[serde(default)]
    pub description: String,
    #[schemars(
        description = "选择使用的组件列表。传入时使用完整类模板生成，Button 组件总是被包含。"
    )]
    #[serde(default)]
    pub selected_components: Vec<String>,
}

impl From<GenerateComponentRequest> for GenerateRequest {
    fn from(req: GenerateComponentRequest) -> Self {
        GenerateRequest {
            component_name: req.component_name,
            features: req.features,
            description: req.description,
            selected_components: req.selected_components,
        }
    }
}
