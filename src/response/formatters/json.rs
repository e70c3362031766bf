use serde::Serialize;

/// JSON formatter for responses, calculator reports and catalog pages
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format as pretty-printed JSON
    pub fn format<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(value)
    }

    /// Format as compact JSON (no whitespace)
    pub fn format_compact<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
        serde_json::to_string(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::types::*;
    use crate::router::Topic;

    fn sample() -> Response {
        let mut response = Response::new(Some(Topic::Soil));
        response.push(Section::InfoGrid {
            cards: vec![InfoCard::new("🧪 Ideal pH Range", "6.0-7.5 for most crops")],
        });
        response
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&sample()).unwrap();

        assert!(json.contains("\"topic\": \"Soil\""));
        assert!(json.contains("\"kind\": \"info_grid\""));
        assert!(json.contains("\"header\": \"🧪 Ideal pH Range\""));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&sample()).unwrap();

        assert!(!json.contains('\n'));
        let back: Response = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
