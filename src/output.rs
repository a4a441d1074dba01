use serde_json::Value;

/// Renders a fetch result as 2-space indented JSON. `None` prints as `null`.
pub fn render(result: &Option<Value>) -> String {
    // Serializing a Value only fails for non-string map keys, which Value cannot hold.
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_object() {
        assert_eq!(render(&Some(json!({"a": 1}))), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_render_absent() {
        assert_eq!(render(&None), "null");
    }

    #[test]
    fn test_render_nested() {
        let value = json!({"list": [1, "two"], "empty": {}});
        assert_eq!(
            render(&Some(value)),
            "{\n  \"list\": [\n    1,\n    \"two\"\n  ],\n  \"empty\": {}\n}"
        );
    }

    #[test]
    fn test_render_scalar() {
        assert_eq!(render(&Some(json!("hi"))), "\"hi\"");
        assert_eq!(render(&Some(json!(false))), "false");
    }
}
