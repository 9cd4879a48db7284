//! Deterministic scaffold generation core.
//!
//! Pure and stateless: every request is a function of its inputs plus the
//! fixed template set. Nothing here touches the
//! filesystem or network - generated file contents are returned to the
//! caller, who persists them.
//!
//! # Core Concepts
//!
//! - [`GenerateRequest`]: one generation request, owned by [`handle`] for
//!   the call's duration.
//! - [`FeatureSet`]: canonical feature flags resolved from a raw
//!   comma-separated string, always containing the mandatory defaults.
//! - [`GenerationResult`]: the response payload - a message, the full
//!   catalog snapshot, and (in generation mode) the generated files.

pub mod catalog;

mod assemble;
mod error;
mod features;
mod naming;
mod templates;

pub use assemble::{assemble_classic, assemble_declarative, normalize_selection};
pub use error::ScaffoldError;
pub use features::{Feature, FeatureSet};
pub use naming::to_kebab_case;
pub use templates::{CLASS_TEMPLATE, STYLE_TEMPLATE};

use serde::Serialize;

/// Fixed message returned by list mode.
pub const LIST_MESSAGE: &str = "获取Cosmic组件列表成功";

/// One generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Component name, PascalCase by convention (not validated). Empty
    /// selects list mode: the catalog is returned and no files are built.
    pub component_name: String,
    /// Raw comma-separated feature string.
    pub features: String,
    /// Free-text description for the generated doc comment.
    pub description: String,
    /// Cosmic components to import and register. A non-empty selection
    /// drives the full-class template strategy.
    pub selected_components: Vec<String>,
}

/// A generated file, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative path, `<ComponentName>/<basename>`.
    pub filename: String,
    /// Full file content.
    pub code: String,
}

/// Response payload for both list mode and generation mode.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub message: String,
    /// Full catalog snapshot, included in every response.
    pub components: Vec<String>,
    /// Generated files; absent in list mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<GeneratedFile>>,
}

/// Handle one generation request.
///
/// Empty `component_name` short-circuits to list mode. Otherwise the
/// assembly strategy follows the request shape: an explicit component
/// selection drives the full-class template, a feature string drives the
/// feature-conditional declarative template.
pub fn handle(request: &GenerateRequest) -> Result<GenerationResult, ScaffoldError> {
    if request.component_name.is_empty() {
        return Ok(GenerationResult {
            message: LIST_MESSAGE.to_string(),
            components: catalog::list(),
            files: None,
        });
    }

    let files = if !request.selected_components.is_empty() {
        assemble_classic(
            &request.component_name,
            &request.description,
            &request.selected_components,
        )
    } else {
        let features = FeatureSet::resolve(&request.features);
        assemble_declarative(&request.component_name, &features, &request.description)
    };

    Ok(GenerationResult {
        message: format!("成功生成 {} 组件代码", request.component_name),
        components: catalog::list(),
        files: Some(files),
    })
}
