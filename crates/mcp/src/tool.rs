pub(crate) mod claude;

use std::borrow::Cow;

use futures_util::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, JsonObject, ToolAnnotations};
use schemars::{JsonSchema, schema_for};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A tool with typed parameters.
pub(crate) trait Tool: Send + Sync + 'static {
    type Parameters: DeserializeOwned + JsonSchema;

    fn name() -> &'static str;
    fn description(&self) -> Cow<'_, str>;
    fn annotations(&self) -> ToolAnnotations;

    fn call(&self, parameters: Self::Parameters) -> impl Future<Output = anyhow::Result<CallToolResult>> + Send;
}

/// Object-safe view of a [`Tool`] for the dispatcher.
pub(crate) trait RmcpTool: Send + Sync + 'static {
    fn name(&self) -> &str;
    fn to_tool(&self) -> rmcp::model::Tool;

    fn call(&self, parameters: Option<JsonObject>) -> BoxFuture<'_, CallToolResult>;
}

impl<T: Tool> RmcpTool for T {
    fn name(&self) -> &str {
        T::name()
    }

    fn to_tool(&self) -> rmcp::model::Tool {
        let Value::Object(schema) = serde_json::to_value(schema_for!(<T as Tool>::Parameters)).unwrap() else {
            unreachable!()
        };

        rmcp::model::Tool::new(self.name().to_string(), self.description().into_owned(), schema)
            .annotate(self.annotations())
    }

    fn call(&self, parameters: Option<JsonObject>) -> BoxFuture<'_, CallToolResult> {
        Box::pin(async move {
            // Bad arguments are an execution fault for this request, not a
            // protocol error. They come back inside the result envelope,
            // without touching the upstream.
            let parameters: T::Parameters = match serde_json::from_value(Value::Object(parameters.unwrap_or_default()))
            {
                Ok(parameters) => parameters,
                Err(err) => return error_result(&err.to_string()),
            };

            match Tool::call(self, parameters).await {
                Ok(result) => result,
                Err(err) => error_result(&err.to_string()),
            }
        })
    }
}

/// The error variant of the result envelope. Nothing from tool execution
/// escapes as a protocol-level fault.
fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {message}"))])
}
