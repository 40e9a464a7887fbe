// * Weakly-typed view over a scraped portal record.
// * Upstream data is noisy: fields may be absent, wrongly typed, or hold
// * placeholder garbage. Every accessor here is total — it returns a default
// * or None instead of erroring, so the refinery never has to handle a
// * field-level failure.

use serde_json::Value;

/// One raw listing record as delivered by the source portal.
///
/// Wraps an arbitrary JSON value; accessors degrade gracefully when the
/// underlying value is not an object or a field has the wrong type.
#[derive(Debug, Clone, Default)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Raw field lookup. None when the record is not an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Non-empty string field. Empty strings count as absent, matching the
    /// source portal's habit of shipping `""` for unset fields.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }

    /// Numeric field, accepting JSON numbers and numeric-prefixed strings
    /// ("1,095" parses as 1.0; "950/mo" as 950.0). Non-finite values are
    /// treated as absent.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
            Value::String(s) => lenient_float(s),
            _ => None,
        }
    }

    /// Integer field with the same leniency as [`number`](Self::number);
    /// fractional values truncate toward zero.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
            Value::String(s) => lenient_int(s),
            _ => None,
        }
    }

    /// Source-flag truthiness: absent, null, false, 0, NaN, and "" are
    /// false; everything else (including the string "false") is true.
    pub fn truthy(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// String-array field. Empty when the field is not an array; non-string
    /// elements within an array are skipped.
    pub fn text_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Nested-record array field. Every element is wrapped regardless of its
    /// type so array length and order survive malformed entries.
    pub fn records(&self, key: &str) -> Vec<RawRecord> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().cloned().map(RawRecord::new).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Parses the leading integer of a string: optional sign, then digits.
/// Trailing garbage is ignored ("12 beds" parses as 12).
pub fn lenient_int(s: &str) -> Option<i64> {
    let t = s.trim_start();
    let (sign, rest) = match t.strip_prefix('-') {
        Some(r) => (-1i64, r),
        None => (1i64, t.strip_prefix('+').unwrap_or(t)),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|v| sign * v)
}

/// Parses the leading decimal number of a string: optional sign, digits,
/// optional fraction. Trailing garbage is ignored ("1095.50/person" parses
/// as 1095.5; "1,095" as 1.0 — comma is not a digit).
pub fn lenient_float(s: &str) -> Option<f64> {
    let t = s.trim_start();
    let (neg, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };

    let bytes = rest.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_len = end;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        // * A bare "." with no digits on either side is not a number
        if int_len == 0 && end == int_len + 1 {
            return None;
        }
    }
    if int_len == 0 && end == 0 {
        return None;
    }

    rest[..end]
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| if neg { -f } else { f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_skips_empty_and_wrong_type() {
        let raw = RawRecord::from(json!({"a": "hello", "b": "", "c": 5}));
        assert_eq!(raw.text("a"), Some("hello"));
        assert_eq!(raw.text("b"), None);
        assert_eq!(raw.text("c"), None);
        assert_eq!(raw.text("missing"), None);
    }

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        let raw = RawRecord::from(json!({
            "n": 950,
            "s": "1095.50",
            "suffix": "800/mo",
            "junk": "call for price",
            "list": [1, 2]
        }));
        assert_eq!(raw.number("n"), Some(950.0));
        assert_eq!(raw.number("s"), Some(1095.5));
        assert_eq!(raw.number("suffix"), Some(800.0));
        assert_eq!(raw.number("junk"), None);
        assert_eq!(raw.number("list"), None);
    }

    #[test]
    fn test_integer_truncates() {
        let raw = RawRecord::from(json!({"f": 2.9, "s": "3 bed", "neg": "-1"}));
        assert_eq!(raw.integer("f"), Some(2));
        assert_eq!(raw.integer("s"), Some(3));
        assert_eq!(raw.integer("neg"), Some(-1));
    }

    #[test]
    fn test_truthy_semantics() {
        let raw = RawRecord::from(json!({
            "t": true,
            "f": false,
            "zero": 0,
            "one": 1,
            "empty": "",
            "word": "yes",
            "null": null
        }));
        assert!(raw.truthy("t"));
        assert!(!raw.truthy("f"));
        assert!(!raw.truthy("zero"));
        assert!(raw.truthy("one"));
        assert!(!raw.truthy("empty"));
        assert!(raw.truthy("word"));
        assert!(!raw.truthy("null"));
        assert!(!raw.truthy("missing"));
    }

    #[test]
    fn test_text_list_defends_against_garbage() {
        let raw = RawRecord::from(json!({
            "ok": ["Pool", "Gym"],
            "mixed": ["Pool", 7, null, "Gym"],
            "scalar": "Pool"
        }));
        assert_eq!(raw.text_list("ok"), vec!["Pool", "Gym"]);
        assert_eq!(raw.text_list("mixed"), vec!["Pool", "Gym"]);
        assert!(raw.text_list("scalar").is_empty());
        assert!(raw.text_list("missing").is_empty());
    }

    #[test]
    fn test_records_preserves_length_and_order() {
        let raw = RawRecord::from(json!({"plans": [{"bed": 1}, "junk", {"bed": 3}]}));
        let plans = raw.records("plans");
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[0].integer("bed"), Some(1));
        assert_eq!(plans[1].integer("bed"), None);
        assert_eq!(plans[2].integer("bed"), Some(3));
    }

    #[test]
    fn test_accessors_total_on_non_object() {
        let raw = RawRecord::from(json!("not an object"));
        assert_eq!(raw.text("x"), None);
        assert_eq!(raw.number("x"), None);
        assert!(!raw.truthy("x"));
        assert!(raw.text_list("x").is_empty());
        assert!(raw.records("x").is_empty());
    }

    #[test]
    fn test_lenient_parsers() {
        assert_eq!(lenient_int("12abc"), Some(12));
        assert_eq!(lenient_int("  +7"), Some(7));
        assert_eq!(lenient_int("abc"), None);
        assert_eq!(lenient_int(""), None);
        assert_eq!(lenient_float(".5"), Some(0.5));
        assert_eq!(lenient_float("1,095"), Some(1.0));
        assert_eq!(lenient_float("-20.25sqft"), Some(-20.25));
        assert_eq!(lenient_float("."), None);
        assert_eq!(lenient_float("no digits"), None);
    }
}
