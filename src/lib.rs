//! san-scaffold: deterministic SanJS component scaffold generation,
//! exposed as an MCP tool.
//!
//! The [`scaffold`] module is the pure core: templates, feature flags,
//! naming conversion, and request handling. The [`mcp`] module wires the
//! core to an MCP stdio server.

pub mod mcp;
pub mod scaffold;
