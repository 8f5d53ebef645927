//! PostgREST filter building
//!
//! Provides type-safe filter construction for table queries

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    // Comparison operators
    Eq(String, FilterValue),
    Neq(String, FilterValue),
    Gt(String, FilterValue),
    Gte(String, FilterValue),
    Lt(String, FilterValue),
    Lte(String, FilterValue),

    // Logical operators
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Null,
}

/// Comparison method a caller may ask for in a filter directive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMethod {
    #[default]
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMethod::Eq => "eq",
            FilterMethod::Neq => "neq",
            FilterMethod::Gt => "gt",
            FilterMethod::Gte => "gte",
            FilterMethod::Lt => "lt",
            FilterMethod::Lte => "lte",
        }
    }
}

impl FromStr for FilterMethod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "eq" | "equals" => Ok(FilterMethod::Eq),
            "neq" => Ok(FilterMethod::Neq),
            "gt" => Ok(FilterMethod::Gt),
            "gte" => Ok(FilterMethod::Gte),
            "lt" => Ok(FilterMethod::Lt),
            "lte" => Ok(FilterMethod::Lte),
            other => anyhow::bail!("Unknown filter method '{}'", other),
        }
    }
}

impl Filter {
    // Comparison operators
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn neq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Neq(field.into(), value.into())
    }

    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Gt(field.into(), value.into())
    }

    pub fn gte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Gte(field.into(), value.into())
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Lt(field.into(), value.into())
    }

    pub fn lte(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Lte(field.into(), value.into())
    }

    /// Build a comparison from a method chosen at runtime
    pub fn compare(method: FilterMethod, field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let field = field.into();
        let value = value.into();
        match method {
            FilterMethod::Eq => Self::Eq(field, value),
            FilterMethod::Neq => Self::Neq(field, value),
            FilterMethod::Gt => Self::Gt(field, value),
            FilterMethod::Gte => Self::Gte(field, value),
            FilterMethod::Lt => Self::Lt(field, value),
            FilterMethod::Lte => Self::Lte(field, value),
        }
    }

    // Logical operators
    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }

    /// Render as query string pairs, e.g. `("status", "eq.checked-in")`
    ///
    /// A top-level `And` expands into one pair per member, which PostgREST
    /// combines with AND semantics.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        match self {
            Filter::Eq(field, FilterValue::Null) => vec![(field.clone(), "is.null".to_string())],
            Filter::Eq(field, value) => vec![(field.clone(), format!("eq.{}", value.to_param_string()))],
            Filter::Neq(field, value) => vec![(field.clone(), format!("neq.{}", value.to_param_string()))],
            Filter::Gt(field, value) => vec![(field.clone(), format!("gt.{}", value.to_param_string()))],
            Filter::Gte(field, value) => vec![(field.clone(), format!("gte.{}", value.to_param_string()))],
            Filter::Lt(field, value) => vec![(field.clone(), format!("lt.{}", value.to_param_string()))],
            Filter::Lte(field, value) => vec![(field.clone(), format!("lte.{}", value.to_param_string()))],

            Filter::And(filters) => filters.iter().flat_map(|f| f.to_query_pairs()).collect(),
            Filter::Or(filters) => {
                let parts: Vec<String> = filters.iter().map(|f| f.to_logic_string()).collect();
                vec![("or".to_string(), format!("({})", parts.join(",")))]
            }
            Filter::Not(filter) => vec![("not".to_string(), format!("({})", filter.to_logic_string()))],
        }
    }

    /// Render in the nested form used inside `or=(...)`/`and(...)` groups
    pub fn to_logic_string(&self) -> String {
        match self {
            Filter::Eq(field, FilterValue::Null) => format!("{}.is.null", field),
            Filter::Eq(field, value) => format!("{}.eq.{}", field, value.to_logic_string()),
            Filter::Neq(field, value) => format!("{}.neq.{}", field, value.to_logic_string()),
            Filter::Gt(field, value) => format!("{}.gt.{}", field, value.to_logic_string()),
            Filter::Gte(field, value) => format!("{}.gte.{}", field, value.to_logic_string()),
            Filter::Lt(field, value) => format!("{}.lt.{}", field, value.to_logic_string()),
            Filter::Lte(field, value) => format!("{}.lte.{}", field, value.to_logic_string()),

            Filter::And(filters) => {
                let parts: Vec<String> = filters.iter().map(|f| f.to_logic_string()).collect();
                format!("and({})", parts.join(","))
            }
            Filter::Or(filters) => {
                let parts: Vec<String> = filters.iter().map(|f| f.to_logic_string()).collect();
                format!("or({})", parts.join(","))
            }
            Filter::Not(filter) => format!("not.{}", filter.to_logic_string()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_logic_string())
    }
}

impl FilterValue {
    /// Value as written in a plain query parameter
    pub fn to_param_string(&self) -> String {
        match self {
            FilterValue::String(s) => s.clone(),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Boolean(b) => b.to_string(),
            FilterValue::Null => "null".to_string(),
        }
    }

    /// Value inside a logic group; reserved characters force double quotes
    pub fn to_logic_string(&self) -> String {
        match self {
            FilterValue::String(s) if s.contains([',', '.', ':', '(', ')', '"', '\\', ' ']) => {
                format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
            }
            other => other.to_param_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            FilterValue::String(s) => Value::from(s.clone()),
            FilterValue::Number(n) => Value::from(*n),
            FilterValue::Integer(i) => Value::from(*i),
            FilterValue::Boolean(b) => Value::from(*b),
            FilterValue::Null => Value::Null,
        }
    }
}

// Convenient From implementations for FilterValue
impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<&Value> for FilterValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => FilterValue::String(s.clone()),
            Value::Bool(b) => FilterValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FilterValue::Integer(i),
                None => FilterValue::Number(n.as_f64().unwrap_or_default()),
            },
            Value::Null => FilterValue::Null,
            other => FilterValue::String(other.to_string()),
        }
    }
}
