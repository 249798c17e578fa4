use serde::{Deserialize, Deserializer, Serialize};

/// A named, optionally hierarchical record with metadata and timestamps.
///
/// `id` is assigned by the store on insert and immutable afterwards.
/// `date_create` is written once; `last_time_update` is refreshed on every
/// update. `parent_id` forms an implicit tree with no referential integrity
/// enforced at this layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Always present on the wire as a string; a null timestamp column in a
    /// store row becomes the empty string.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_create: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_time_update: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_body() {
        let subject: Subject =
            serde_json::from_str(r#"{"name":"Engineering","type":"department"}"#).unwrap();
        assert_eq!(subject.id, 0);
        assert_eq!(subject.name, "Engineering");
        assert_eq!(subject.subject_type.as_deref(), Some("department"));
        assert!(subject.parent_id.is_none());
        assert_eq!(subject.date_create, "");
    }

    #[test]
    fn test_serialize_skips_absent_optionals() {
        let subject = Subject {
            id: 7,
            name: "Engineering".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Engineering");
        assert!(json.get("comment").is_none());
        assert!(json.get("type").is_none());
        assert!(json.get("parent_id").is_none());
        // Timestamps are always present as strings, never omitted.
        assert_eq!(json["date_create"], "");
        assert_eq!(json["last_time_update"], "");
    }

    #[test]
    fn test_round_trips_store_row_json() {
        let row = r#"{
            "id": 3,
            "comment": "imported",
            "date_create": "2024-01-10T09:30:00",
            "description": "engineering org",
            "last_time_update": "2024-02-01T12:00:00",
            "name": "Engineering",
            "type": "department",
            "parent_id": 1
        }"#;
        let subject: Subject = serde_json::from_str(row).unwrap();
        assert_eq!(subject.parent_id, Some(1));
        assert_eq!(subject.date_create, "2024-01-10T09:30:00");
    }

    #[test]
    fn test_null_timestamp_columns_become_empty_strings() {
        let row = r#"{"id":1,"name":"x","date_create":null,"last_time_update":null}"#;
        let subject: Subject = serde_json::from_str(row).unwrap();
        assert_eq!(subject.date_create, "");
        assert_eq!(subject.last_time_update, "");

        let json = serde_json::to_value(&subject).unwrap();
        assert_eq!(json["date_create"], "");
        assert_eq!(json["last_time_update"], "");
    }
}
