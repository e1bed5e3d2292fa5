use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity key of a story. The search API sends strings, older fixtures use numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::Number(n) => write!(f, "{n}"),
            ObjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId::Number(value)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        ObjectId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u32,
    pub points: i64,
    #[serde(rename = "objectID")]
    pub object_id: ObjectId,
}
