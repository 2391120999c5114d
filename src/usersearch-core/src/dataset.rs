use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::SearchError;
use crate::models::{OrderBy, OrderField, User};

/// UserRecord is one row of the backing dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub is_active: bool,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub about: String,
    pub age: i64,
    #[serde(default)]
    pub gender: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            name: self.full_name(),
            age: self.age,
            about: self.about.clone(),
            gender: self.gender.clone(),
        }
    }
}

/// A validated search against a dataset
#[derive(Debug, Clone)]
pub struct DatasetQuery {
    pub query: String,
    pub order_field: OrderField,
    pub order_by: OrderBy,
    pub offset: usize,
    pub limit: usize,
}

/// Dataset is the in-memory user table served by the search endpoint.
///
/// Rows keep their load order; that order is what `OrderBy::AsIs` returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub rows: Vec<UserRecord>,
}

impl Dataset {
    pub fn new(rows: Vec<UserRecord>) -> Self {
        Self { rows }
    }

    /// Load a dataset from a JSON file of the form `{"rows": [...]}`
    pub fn load(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        tracing::debug!(path, rows = dataset.rows.len(), "Loaded dataset");
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Filter, sort and window the rows
    pub fn search(&self, q: &DatasetQuery) -> Vec<User> {
        let needle = q.query.to_lowercase();

        let mut users: Vec<User> = self
            .rows
            .iter()
            .map(UserRecord::to_user)
            .filter(|u| {
                needle.is_empty()
                    || u.name.to_lowercase().contains(&needle)
                    || u.about.to_lowercase().contains(&needle)
            })
            .collect();

        if q.order_by != OrderBy::AsIs {
            users.sort_by(|a, b| {
                let ord = compare(a, b, q.order_field);
                if q.order_by == OrderBy::Desc {
                    ord.reverse()
                } else {
                    ord
                }
            });
        }

        users.into_iter().skip(q.offset).take(q.limit).collect()
    }
}

fn compare(a: &User, b: &User, field: OrderField) -> Ordering {
    match field {
        OrderField::Id => a.id.cmp(&b.id),
        OrderField::Age => a.age.cmp(&b.age),
        OrderField::Name => a.name.cmp(&b.name),
    }
}

impl DatasetQuery {
    /// Validate raw query-string values in the order the endpoint reports them
    pub fn parse(
        query: &str,
        order_field: &str,
        order_by: Option<&str>,
        limit: Option<&str>,
        offset: Option<&str>,
    ) -> std::result::Result<Self, SearchError> {
        let limit: i64 = limit
            .and_then(|v| v.parse().ok())
            .ok_or(SearchError::MalformedLimit)?;
        if limit <= 0 {
            return Err(SearchError::InvalidLimit);
        }

        let offset: i64 = offset
            .and_then(|v| v.parse().ok())
            .ok_or(SearchError::MalformedOffset)?;
        if offset < 0 {
            return Err(SearchError::InvalidOffset);
        }

        let order_by = order_by
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or(SearchError::InvalidOrderBy)
            .and_then(OrderBy::try_from)?;

        let order_field = if order_field.is_empty() {
            OrderField::Name
        } else {
            order_field.parse()?
        };

        Ok(Self {
            query: query.to_string(),
            order_field,
            order_by,
            offset: offset as usize,
            limit: limit as usize,
        })
    }
}
