use crate::database::WriteOutcome;
use crate::domain::{Cat, CatFields};
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone, Display)]
#[display("{} (#{})", name, id)]
pub struct DbCat {
    pub id: i64,
    pub name: String,
    pub tag: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<DbCat> for Cat {
    fn from(db_cat: DbCat) -> Self {
        Cat {
            id: db_cat.id,
            name: db_cat.name,
            tag: db_cat.tag,
            description: db_cat.description,
            image: db_cat.image,
        }
    }
}

// the browser speaks `descreption` and `img`, keep those names on the wire
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonCat {
    pub id: i64,
    pub name: String,
    pub tag: String,
    #[serde(rename = "descreption")]
    pub description: String,
    #[serde(rename = "img")]
    pub image: Option<String>,
}

impl From<Cat> for JsonCat {
    fn from(cat: Cat) -> Self {
        JsonCat {
            id: cat.id,
            name: cat.name,
            tag: cat.tag,
            description: cat.description,
            image: cat.image,
        }
    }
}

/// Request body for `POST /cats` and `PUT /cats/{id}`.
///
/// Every field may be missing or `null`; text fields then fall back to empty.
/// Numbers and booleans are kept as their text form.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct JsonCatPayload {
    #[serde(deserialize_with = "loose_text::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "loose_text::deserialize")]
    pub tag: Option<String>,
    #[serde(rename = "descreption", deserialize_with = "loose_text::deserialize")]
    pub description: Option<String>,
    #[serde(rename = "img", deserialize_with = "loose_text::deserialize")]
    pub image: Option<String>,
}

mod loose_text {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text),
            Some(other) => Some(other.to_string()),
        };
        Ok(text)
    }
}

impl From<JsonCatPayload> for CatFields {
    fn from(payload: JsonCatPayload) -> Self {
        CatFields {
            name: payload.name.unwrap_or_default(),
            tag: payload.tag.unwrap_or_default(),
            description: payload.description.unwrap_or_default(),
            image: payload.image,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JsonWriteResult {
    pub affected_rows: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i64>,
}

impl From<WriteOutcome> for JsonWriteResult {
    fn from(outcome: WriteOutcome) -> Self {
        JsonWriteResult {
            affected_rows: outcome.rows_affected,
            insert_id: outcome.last_insert_id,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct JsonMessage {
    pub message: String,
}
