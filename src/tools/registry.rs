use std::collections::BTreeMap;
use std::sync::Arc;

use crate::clients::PresentationSource;
use crate::core::tool::Tool;
use crate::tools::slides::specs::slides_tools;

#[derive(Clone)]
pub struct ToolRegistry {
    by_name: Arc<BTreeMap<&'static str, Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn with_tools<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = Arc<T>>,
        T: Tool + 'static,
    {
        let mut map: BTreeMap<&'static str, Arc<dyn Tool>> = BTreeMap::new();
        for t in iter.into_iter() {
            map.insert(t.name(), t);
        }
        Self { by_name: Arc::new(map) }
    }

    /// Sorted by name.
    pub fn list(&self) -> Vec<ToolMeta> {
        self.by_name
            .values()
            .map(|t| ToolMeta {
                name: t.name(),
                description: t.description(),
                input_schema: t.input_schema(),
                output_schema: t.output_schema(),
            })
            .collect()
    }

    pub async fn call(&self, name: &str, args: &serde_json::Value) -> Result<serde_json::Value, String> {
        let t = self
            .by_name
            .get(name)
            .ok_or_else(|| format!("unknown tool: {name}"))?;
        t.call(args).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
    pub output_schema: serde_json::Value,
}

pub fn build_registry(source: Arc<dyn PresentationSource>) -> ToolRegistry {
    ToolRegistry::with_tools(slides_tools(source))
}

/// Registry over the configured Slides upstream (or the not-configured fallback).
pub fn build_registry_from_env() -> ToolRegistry {
    let cfg = crate::infra::config::AppConfig::from_env_and_toml();
    build_registry(crate::clients::source_from_config(&cfg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::FnSource;
    use crate::core::tool::ToolSpec;
    use crate::domain::testkit::*;
    use async_trait::async_trait;
    use serial_test::serial;

    struct Echo;

    impl ToolSpec for Echo {
        fn name(&self) -> &'static str { "test.echo" }
        fn description(&self) -> &'static str { "echo tool" }
        fn input_schema(&self) -> serde_json::Value { serde_json::json!({"type":"object"}) }
    }

    #[async_trait]
    impl Tool for Echo {
        async fn call(&self, args: &serde_json::Value) -> Result<serde_json::Value, String> {
            Ok(args.clone())
        }
    }

    #[tokio::test]
    async fn registry_registers_lists_and_calls() {
        let reg = ToolRegistry::with_tools([Arc::new(Echo)]);
        let metas = reg.list();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0].name, "test.echo");
        assert_eq!(metas[0].output_schema["type"], "object");
        let out = reg.call("test.echo", &serde_json::json!({"x": 2})).await.unwrap();
        assert_eq!(out["x"], 2);
    }

    #[tokio::test]
    async fn unknown_tool_is_an_error() {
        let reg = ToolRegistry::with_tools([Arc::new(Echo)]);
        let err = reg.call("nope", &serde_json::Value::Null).await.unwrap_err();
        assert_eq!(err, "unknown tool: nope");
    }

    #[tokio::test]
    async fn slides_registry_lists_operations_in_name_order() {
        let reg = build_registry(Arc::new(FnSource::fixed(deck(vec![slide("g1", vec![])]))));
        let names: Vec<_> = reg.list().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            ["get_presentation", "get_presentation_content", "get_slide", "get_slide_notes", "list_slides"]
        );
        let out = reg.call("get_presentation", &serde_json::json!({"presentation_id": "deck-1"})).await.unwrap();
        assert_eq!(out["structuredContent"]["slide_count"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn env_registry_without_token_reports_not_configured() {
        std::env::remove_var("SLIDES_ACCESS_TOKEN");
        std::env::set_var("GATEWAY_CONFIG", "/nonexistent/gateway.toml");
        let reg = build_registry_from_env();
        let err = reg
            .call("list_slides", &serde_json::json!({"presentation_id": "abc"}))
            .await
            .unwrap_err();
        assert!(err.contains("SLIDES_ACCESS_TOKEN not configured"));
        std::env::remove_var("GATEWAY_CONFIG");
    }
}
