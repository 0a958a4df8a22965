//! Caller-supplied business inputs
//!
//! All three types are built by the caller per request and never mutated by
//! NexH. `BusinessContext::data` is untrusted display data; `SkillSet` is
//! caller-owned configuration and is echoed verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Skill block consulted by the analysis and briefing health checks
pub const HEALTH_CHECK_RULES: &str = "health_check_rules";

/// Skill block holding the diagnosis decision logic
pub const DIAGNOSIS_LOGIC: &str = "diagnosis_logic";

/// Skill block listing the clients a briefing may target
pub const STRATEGIC_CANDIDATES: &str = "strategic_candidates";

/// Skill block holding simulation tuning parameters
pub const SIMULATION_PARAMETERS: &str = "simulation_parameters";

/// The caller's domain facts for one request
///
/// # Examples
///
/// ```
/// use nexh_domain::BusinessContext;
/// use serde_json::json;
///
/// let ctx = BusinessContext::new("Beauty Salon")
///     .with_country("KR")
///     .with_data("days_absent", json!(75));
/// assert_eq!(ctx.industry, "Beauty Salon");
/// assert_eq!(ctx.data["days_absent"], 75);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessContext {
    /// Industry label, free text
    #[serde(default)]
    pub industry: String,

    /// Caller's own market, free text
    #[serde(default, alias = "user_country", skip_serializing_if = "Option::is_none")]
    pub user_country: Option<String>,

    /// Arbitrary business records; never treated as instructions
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl BusinessContext {
    /// Create a context for an industry with no data
    pub fn new(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            ..Self::default()
        }
    }

    /// Set the caller's country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.user_country = Some(country.into());
        self
    }

    /// Add one entry to the data mapping
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// Named rule blocks supplied by the caller
///
/// Keys are kept in a `BTreeMap`, so iteration and serialization order never
/// depend on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(BTreeMap<String, Value>);

impl SkillSet {
    /// Create an empty skill set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a named rule block
    pub fn with(mut self, name: impl Into<String>, rules: Value) -> Self {
        self.0.insert(name.into(), rules);
        self
    }

    /// Look up a rule block by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of rule blocks
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no rule blocks are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `health_check_rules`, or `{}` when absent
    pub fn health_check_rules(&self) -> Cow<'_, Value> {
        self.object_or_empty(HEALTH_CHECK_RULES)
    }

    /// `diagnosis_logic`, or `{}` when absent
    pub fn diagnosis_logic(&self) -> Cow<'_, Value> {
        self.object_or_empty(DIAGNOSIS_LOGIC)
    }

    /// `simulation_parameters`, or `{}` when absent
    pub fn simulation_parameters(&self) -> Cow<'_, Value> {
        self.object_or_empty(SIMULATION_PARAMETERS)
    }

    /// `strategic_candidates`, or `[]` when absent
    pub fn strategic_candidates(&self) -> Cow<'_, Value> {
        match self.0.get(STRATEGIC_CANDIDATES) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(Value::Array(Vec::new())),
        }
    }

    fn object_or_empty(&self, name: &str) -> Cow<'_, Value> {
        match self.0.get(name) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(Value::Object(Map::new())),
        }
    }
}

/// Benchmark data from the best-performing market, injected into briefings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalContext {
    /// Country currently leading the industry
    #[serde(default, alias = "leader_country", skip_serializing_if = "Option::is_none")]
    pub leader_country: Option<String>,

    /// Service trending in the leading market
    #[serde(default, alias = "top_service", skip_serializing_if = "Option::is_none")]
    pub top_service: Option<String>,

    /// Average conversion rate in percent
    #[serde(default, alias = "avg_conversion_rate", skip_serializing_if = "Option::is_none")]
    pub avg_conversion_rate: Option<f64>,
}

impl GlobalContext {
    /// Whether the context carries nothing worth rendering
    ///
    /// Blank strings count as absent.
    pub fn is_empty(&self) -> bool {
        let blank = |s: &Option<String>| s.as_deref().map_or(true, |v| v.trim().is_empty());
        blank(&self.leader_country) && blank(&self.top_service) && self.avg_conversion_rate.is_none()
    }
}
