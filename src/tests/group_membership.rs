#[cfg(test)]
mod test {
    use std::sync::atomic::Ordering;

    use serde_json::json;

    use crate::proto::{FailureHandler, UpdateResponse};
    use crate::tests::common::{mock_client, mock_client_with, MockTransport};
    use crate::{AddressInput, GroupEntries, GroupEntryInput, SendlixError};

    #[tokio::test]
    async fn insert_builds_entries() {
        let (client, mock) = mock_client("secret.2");
        let entries: GroupEntries = serde_json::from_value(json!([
            {"email": "a@example.com"},
            {"email": {"email": "b@example.com", "name": "B"}, "substitutions": {"tier": "pro"}}
        ]))
        .unwrap();

        client
            .group()
            .insert_into_group("group-1", entries, None)
            .await
            .unwrap();

        let inserts = mock.inserts.lock().unwrap();
        let recorded = &inserts[0];
        assert_eq!(recorded.authorization.as_deref(), Some("Bearer fixture-token"));

        let request = &recorded.message;
        assert_eq!(request.group_id, "group-1");
        assert_eq!(request.on_failure, FailureHandler::Abort as i32);
        assert_eq!(request.entries.len(), 2);
        assert_eq!(request.entries[0].email.as_ref().unwrap().email, "a@example.com");
        assert!(request.entries[0].substitutions.is_empty());
        assert_eq!(request.entries[1].email.as_ref().unwrap().name, "B");
        assert_eq!(request.entries[1].substitutions["tier"], "pro");
    }

    #[tokio::test]
    async fn insert_accepts_single_typed_entry_and_policy() {
        let (client, mock) = mock_client("secret.2");
        let entry = GroupEntryInput::with_substitutions(
            AddressInput::named("c@example.com", "C"),
            [("first_name", "Cee")],
        );

        client
            .group()
            .insert_into_group("group-2", entry, Some("continue"))
            .await
            .unwrap();

        let inserts = mock.inserts.lock().unwrap();
        let request = &inserts[0].message;
        assert_eq!(request.on_failure, FailureHandler::Continue as i32);
        assert_eq!(request.entries.len(), 1);
        assert_eq!(request.entries[0].substitutions["first_name"], "Cee");
    }

    #[tokio::test]
    async fn insert_rejects_unknown_policy_without_calling() {
        let (client, mock) = mock_client("secret.2");
        let err = client
            .group()
            .insert_into_group("group-1", "a@example.com", Some("retry"))
            .await
            .unwrap_err();

        assert!(matches!(err, SendlixError::InvalidEnumValue { .. }));
        assert!(err.to_string().contains("ABORT, CONTINUE"));
        assert_eq!(mock.dispatched(), 0);
        assert_eq!(mock.fetches(), 0);
    }

    #[tokio::test]
    async fn insert_failure_flag_raises_with_message() {
        let mock = MockTransport::new();
        *mock.update_response.lock().unwrap() = UpdateResponse {
            success: Some(false),
            message: "failure".into(),
        };
        let (client, _mock) = mock_client_with("secret.2", mock);

        let err = client
            .group()
            .insert_into_group("group-1", "a@example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, SendlixError::OperationFailed(ref m) if m == "failure"));
    }

    #[tokio::test]
    async fn insert_rejects_invalid_member_address() {
        let (client, mock) = mock_client("secret.2");
        let err = client
            .group()
            .insert_into_group("group-1", vec!["ok@example.com", "broken"], None)
            .await
            .unwrap_err();
        assert!(matches!(err, SendlixError::InvalidAddress(ref a) if a == "broken"));
        assert_eq!(mock.dispatched(), 0);
    }

    #[tokio::test]
    async fn remove_sends_group_and_email() {
        let (client, mock) = mock_client("secret.2");
        client
            .group()
            .remove_from_group("group-1", "a@example.com")
            .await
            .unwrap();

        let removes = mock.removes.lock().unwrap();
        assert_eq!(removes[0].message.group_id, "group-1");
        assert_eq!(removes[0].message.email, "a@example.com");
    }

    #[tokio::test]
    async fn remove_failure_without_message_uses_default() {
        let mock = MockTransport::new();
        *mock.update_response.lock().unwrap() = UpdateResponse {
            success: Some(false),
            message: String::new(),
        };
        let (client, _mock) = mock_client_with("secret.2", mock);

        let err = client
            .group()
            .remove_from_group("group-1", "a@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "RemoveEmailFromGroup failed");
    }

    #[tokio::test]
    async fn response_without_flag_is_trusted() {
        let mock = MockTransport::new();
        *mock.update_response.lock().unwrap() = UpdateResponse::default();
        let (client, _mock) = mock_client_with("secret.2", mock);

        client
            .group()
            .remove_from_group("group-1", "a@example.com")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn contains_reports_membership() {
        let (client, mock) = mock_client("secret.2");
        assert!(client
            .group()
            .contains_in_group("group-1", "a@example.com")
            .await
            .unwrap());

        mock.exists.store(false, Ordering::SeqCst);
        assert!(!client
            .group()
            .contains_in_group("group-1", "a@example.com")
            .await
            .unwrap());

        assert_eq!(mock.checks.lock().unwrap().len(), 2);
        assert_eq!(mock.fetches(), 1, "both checks share one token");
    }

    #[tokio::test]
    async fn contains_requires_both_fields() {
        let (client, mock) = mock_client("secret.2");
        let err = client
            .group()
            .contains_in_group("", "")
            .await
            .unwrap_err();
        match err {
            SendlixError::MissingField { fields } => assert_eq!(fields, vec!["groupId", "email"]),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(mock.dispatched(), 0);
    }
}
