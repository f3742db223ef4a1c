use serde::Serialize;
use serde_json::Value;

/// One category/amount pair as the chart sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseRecord {
    pub category: String,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Never fails: whatever is missing or unreadable becomes "" or 0.
    pub fn from_json(value: &Value) -> Self {
        let category = match value.get("category") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        };

        let amount = value.get("amount").map(coerce_amount).unwrap_or(0.);

        Self { category, amount }
    }
}

/// Numeric coercion of a JSON amount, 0 when it isn't a number.
pub fn coerce_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.),
        Value::String(s) => s.trim().parse().unwrap_or(0.),
        Value::Bool(true) => 1.,
        _ => 0.,
    };

    if amount.is_finite() {
        amount
    } else {
        0.
    }
}

/// A body that isn't an array counts as "no data".
pub fn records_from_payload(payload: &Value) -> Vec<ExpenseRecord> {
    match payload.as_array() {
        Some(items) => items.iter().map(ExpenseRecord::from_json).collect(),
        None => vec![],
    }
}

pub fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Food", 124.50),
        ExpenseRecord::new("Transport", 48.20),
        ExpenseRecord::new("Subscriptions", 19.99),
        ExpenseRecord::new("Uni Supplies", 36.00),
    ]
}
