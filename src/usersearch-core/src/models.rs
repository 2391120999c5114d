use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// User represents a single search hit as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "About")]
    pub about: String,
    #[serde(rename = "Gender")]
    pub gender: String,
}

/// Sort direction. The integer values are part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    Asc,
    #[default]
    AsIs,
    Desc,
}

impl OrderBy {
    pub fn as_i32(self) -> i32 {
        match self {
            OrderBy::Asc => -1,
            OrderBy::AsIs => 0,
            OrderBy::Desc => 1,
        }
    }
}

impl TryFrom<i32> for OrderBy {
    type Error = SearchError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(OrderBy::Asc),
            0 => Ok(OrderBy::AsIs),
            1 => Ok(OrderBy::Desc),
            _ => Err(SearchError::InvalidOrderBy),
        }
    }
}

/// Fields the search endpoint knows how to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Age,
    Name,
}

/// Used when a request leaves `order_field` empty
pub const DEFAULT_ORDER_FIELD: &str = "Name";

impl OrderField {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderField::Id => "Id",
            OrderField::Age => "Age",
            OrderField::Name => "Name",
        }
    }
}

impl FromStr for OrderField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Id" => Ok(OrderField::Id),
            "Age" => Ok(OrderField::Age),
            "Name" => Ok(OrderField::Name),
            other => Err(SearchError::InvalidOrderField(other.to_string())),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SearchRequest is what a caller asks the client for.
///
/// `limit` and `offset` are signed on purpose: callers may hand in anything
/// and the client is responsible for rejecting it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    pub order_field: String,
    pub order_by: OrderBy,
}

/// SearchResponse is one page of users
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// True when at least one more user exists past this page
    pub next_page: bool,
}

/// Raw query string of the search endpoint, validated by the handler
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub order_field: String,
    #[serde(default)]
    pub order_by: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// ErrorResponse is the body of a 400 answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_wire_values() {
        assert_eq!(OrderBy::Asc.as_i32(), -1);
        assert_eq!(OrderBy::AsIs.as_i32(), 0);
        assert_eq!(OrderBy::Desc.as_i32(), 1);
        assert_eq!(OrderBy::default(), OrderBy::AsIs);
    }

    #[test]
    fn test_order_by_rejects_unknown_integer() {
        assert!(matches!(
            OrderBy::try_from(2),
            Err(SearchError::InvalidOrderBy)
        ));
        assert_eq!(OrderBy::try_from(-1).unwrap(), OrderBy::Asc);
    }

    #[test]
    fn test_order_field_parse() {
        assert_eq!("Age".parse::<OrderField>().unwrap(), OrderField::Age);
        let err = "Gender".parse::<OrderField>().unwrap_err();
        assert_eq!(err.to_string(), "OrderField Gender invalid");
    }

    #[test]
    fn test_user_uses_pascal_case_keys() {
        let json = r#"{"Id":7,"Name":"Boyd Wolf","Age":22,"About":"x","Gender":"male"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Boyd Wolf");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["Gender"], "male");
    }

    #[test]
    fn test_user_array_rejects_object() {
        let result: Result<Vec<User>, _> = serde_json::from_str(r#"{"not_a_user_array": true}"#);
        assert!(result.is_err());
    }
}
