use crate::models::RouteQuery;
use std::collections::HashMap;

pub const FIELD_SOURCE: &str = "source";
pub const FIELD_DESTINATION: &str = "destination";
pub const FIELD_TIME_OF_DAY: &str = "timeOfDay";

/// Raw values of the search form, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct QueryForm {
    fields: HashMap<String, String>,
}

impl QueryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// No validation: blank or missing fields become empty strings.
    pub fn to_query(&self) -> RouteQuery {
        RouteQuery::new(
            self.get(FIELD_SOURCE),
            self.get(FIELD_DESTINATION),
            self.get(FIELD_TIME_OF_DAY),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for QueryForm
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        QueryForm {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
