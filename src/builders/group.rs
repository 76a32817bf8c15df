use std::collections::HashMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::address::{to_email_data, AddressInput};
use crate::builders::require;
use crate::error::{Result, SendlixError};
use crate::proto::{
    CheckEmailInGroupRequest, FailureHandler, GroupEntry, InsertEmailToGroupRequest,
    RemoveEmailFromGroupRequest,
};
use crate::utils::constants::DEFAULT_FAILURE_POLICY;

/// One member to add to a group.
///
/// When read from loose input (JSON, YAML) a mapping is a `Record` if it has
/// a `substitutions` key or its `email` value is itself a mapping. Anything
/// else is a plain address. A record whose `email` is a bare string picks up
/// a sibling `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEntryInput {
    Address(AddressInput),
    Record {
        email: AddressInput,
        substitutions: HashMap<String, String>,
    },
}

impl GroupEntryInput {
    pub fn with_substitutions<I, K, V>(email: impl Into<AddressInput>, substitutions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        GroupEntryInput::Record {
            email: email.into(),
            substitutions: substitutions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn from_value(value: Value) -> std::result::Result<Self, serde_json::Error> {
        match value {
            Value::Object(map) if is_record(&map) && map.contains_key("email") => {
                record_from_map(map)
            }
            other => Ok(GroupEntryInput::Address(serde_json::from_value(other)?)),
        }
    }

    fn to_entry(&self) -> Result<GroupEntry> {
        let (email, substitutions) = match self {
            GroupEntryInput::Address(email) => (email, HashMap::new()),
            GroupEntryInput::Record {
                email,
                substitutions,
            } => (email, substitutions.clone()),
        };
        Ok(GroupEntry {
            email: Some(to_email_data(email)?),
            substitutions,
        })
    }
}

fn is_record(map: &Map<String, Value>) -> bool {
    map.contains_key("substitutions") || matches!(map.get("email"), Some(Value::Object(_)))
}

fn record_from_map(mut map: Map<String, Value>) -> std::result::Result<GroupEntryInput, serde_json::Error> {
    let substitutions = match map.remove("substitutions") {
        None | Some(Value::Null) => HashMap::new(),
        Some(value) => serde_json::from_value(value)?,
    };
    let email = match (map.remove("email"), map.remove("name")) {
        (Some(Value::String(email)), Some(Value::String(name))) => AddressInput::Record {
            email: Some(email),
            name: Some(name),
        },
        (Some(email), _) => serde_json::from_value(email)?,
        (None, _) => return Err(serde_json::Error::custom("record without 'email'")),
    };
    Ok(GroupEntryInput::Record {
        email,
        substitutions,
    })
}

impl<'de> Deserialize<'de> for GroupEntryInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        GroupEntryInput::from_value(value).map_err(D::Error::custom)
    }
}

impl From<AddressInput> for GroupEntryInput {
    fn from(email: AddressInput) -> Self {
        GroupEntryInput::Address(email)
    }
}

impl From<&str> for GroupEntryInput {
    fn from(email: &str) -> Self {
        GroupEntryInput::Address(email.into())
    }
}

impl From<String> for GroupEntryInput {
    fn from(email: String) -> Self {
        GroupEntryInput::Address(email.into())
    }
}

/// One entry or many; both insert the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupEntries(pub Vec<GroupEntryInput>);

impl GroupEntries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'de> Deserialize<'de> for GroupEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .map(GroupEntryInput::from_value)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(GroupEntries)
                .map_err(D::Error::custom),
            single => GroupEntryInput::from_value(single)
                .map(|entry| GroupEntries(vec![entry]))
                .map_err(D::Error::custom),
        }
    }
}

impl From<GroupEntryInput> for GroupEntries {
    fn from(entry: GroupEntryInput) -> Self {
        GroupEntries(vec![entry])
    }
}

impl From<Vec<GroupEntryInput>> for GroupEntries {
    fn from(entries: Vec<GroupEntryInput>) -> Self {
        GroupEntries(entries)
    }
}

impl From<&str> for GroupEntries {
    fn from(email: &str) -> Self {
        GroupEntries(vec![email.into()])
    }
}

impl From<AddressInput> for GroupEntries {
    fn from(email: AddressInput) -> Self {
        GroupEntries(vec![email.into()])
    }
}

impl From<Vec<&str>> for GroupEntries {
    fn from(emails: Vec<&str>) -> Self {
        GroupEntries(emails.into_iter().map(GroupEntryInput::from).collect())
    }
}

/// Map a policy name (any case) onto [`FailureHandler`].
pub fn resolve_failure_handler(value: &str) -> Result<FailureHandler> {
    FailureHandler::from_str_name(&value.to_uppercase()).ok_or_else(|| {
        SendlixError::InvalidEnumValue {
            value: value.to_owned(),
            expected: FailureHandler::NAMES.iter().map(|n| n.to_string()).collect(),
        }
    })
}

pub fn build_insert_request(
    group_id: &str,
    entries: &GroupEntries,
    failure_policy: Option<&str>,
) -> Result<InsertEmailToGroupRequest> {
    require(&[("groupId", !group_id.is_empty()), ("entries", !entries.is_empty())])?;
    let on_failure = resolve_failure_handler(failure_policy.unwrap_or(DEFAULT_FAILURE_POLICY))?;

    let entries = entries
        .0
        .iter()
        .map(GroupEntryInput::to_entry)
        .collect::<Result<Vec<_>>>()?;

    debug!(group_id, entries = entries.len(), on_failure = on_failure.as_str_name(), "built group insert request");
    Ok(InsertEmailToGroupRequest {
        group_id: group_id.to_owned(),
        entries,
        on_failure: on_failure as i32,
    })
}

pub fn build_remove_request(group_id: &str, email: &str) -> Result<RemoveEmailFromGroupRequest> {
    require(&[("groupId", !group_id.is_empty()), ("email", !email.is_empty())])?;
    Ok(RemoveEmailFromGroupRequest {
        group_id: group_id.to_owned(),
        email: email.to_owned(),
    })
}

pub fn build_check_request(group_id: &str, email: &str) -> Result<CheckEmailInGroupRequest> {
    require(&[("groupId", !group_id.is_empty()), ("email", !email.is_empty())])?;
    Ok(CheckEmailInGroupRequest {
        group_id: group_id.to_owned(),
        email: email.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: Value) -> GroupEntryInput {
        GroupEntryInput::from_value(value).unwrap()
    }

    #[test]
    fn flat_record_without_substitutions_is_plain_address() {
        let parsed = entry(json!({"email": "b@example.com", "name": "B"}));
        assert_eq!(
            parsed,
            GroupEntryInput::Address(AddressInput::named("b@example.com", "B"))
        );
    }

    #[test]
    fn nested_email_with_substitutions_keeps_both() {
        let parsed = entry(json!({
            "email": {"email": "b@example.com", "name": "B"},
            "substitutions": {"tier": "pro"}
        }));
        let built = parsed.to_entry().unwrap();
        let email = built.email.unwrap();
        assert_eq!(email.email, "b@example.com");
        assert_eq!(email.name, "B");
        assert_eq!(built.substitutions.get("tier").map(String::as_str), Some("pro"));
    }

    #[test]
    fn nested_email_alone_is_record() {
        let parsed = entry(json!({"email": {"email": "c@example.com"}}));
        assert!(matches!(parsed, GroupEntryInput::Record { ref substitutions, .. } if substitutions.is_empty()));
    }

    #[test]
    fn sibling_name_survives_on_record() {
        let parsed = entry(json!({
            "email": "d@example.com",
            "name": "D",
            "substitutions": {"plan": "free"}
        }));
        let built = parsed.to_entry().unwrap();
        assert_eq!(built.email.unwrap().name, "D");
    }

    #[test]
    fn single_entry_and_sequence_both_accepted() {
        let one: GroupEntries = serde_json::from_value(json!("a@example.com")).unwrap();
        let many: GroupEntries =
            serde_json::from_value(json!(["a@example.com", {"email": "b@example.com"}])).unwrap();
        assert_eq!(one.len(), 1);
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn failure_policy_lookup() {
        assert_eq!(resolve_failure_handler("abort").unwrap(), FailureHandler::Abort);
        assert_eq!(resolve_failure_handler("CONTINUE").unwrap(), FailureHandler::Continue);

        let err = resolve_failure_handler("retry").unwrap_err();
        match err {
            SendlixError::InvalidEnumValue { value, expected } => {
                assert_eq!(value, "retry");
                assert_eq!(expected, vec!["ABORT", "CONTINUE"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn insert_requires_group_and_entries() {
        let err = build_insert_request("", &GroupEntries::default(), None).unwrap_err();
        match err {
            SendlixError::MissingField { fields } => assert_eq!(fields, vec!["groupId", "entries"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remove_and_check_require_both_fields() {
        assert!(matches!(
            build_remove_request("g", ""),
            Err(SendlixError::MissingField { .. })
        ));
        assert!(matches!(
            build_check_request("", "a@example.com"),
            Err(SendlixError::MissingField { .. })
        ));
    }
}
