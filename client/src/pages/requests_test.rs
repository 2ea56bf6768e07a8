use super::*;

fn item(status: RequestStatus) -> RequestItem {
    RequestItem {
        id: "req-1".to_owned(),
        provider_name: "Dr. Lee".to_owned(),
        requested_date: "2024-06-01".to_owned(),
        requested_time: "09:30:00".to_owned(),
        message: "Follow-up".to_owned(),
        status,
        ..RequestItem::default()
    }
}

#[test]
fn pending_requests_are_editable_by_patients_only() {
    let pending = item(RequestStatus::Pending);
    assert_eq!(allowed_actions(Some(Role::Patient), &pending), (true, false));
    assert_eq!(allowed_actions(Some(Role::Provider), &pending), (false, true));
    assert_eq!(allowed_actions(None, &pending), (false, false));
}

#[test]
fn decided_requests_are_frozen() {
    assert_eq!(allowed_actions(Some(Role::Patient), &item(RequestStatus::Approved)), (false, false));
    assert_eq!(allowed_actions(Some(Role::Provider), &item(RequestStatus::Rejected)), (false, false));
}

#[test]
fn edit_sends_only_changes() {
    let original = item(RequestStatus::Pending);
    let update = edit_update(&original, "Follow-up", "2024-06-02", "10:00").unwrap();
    assert_eq!(
        update,
        UpdateRequest {
            date: Some("2024-06-02".to_owned()),
            time: Some("10:00:00".to_owned()),
            ..UpdateRequest::default()
        }
    );
}

#[test]
fn unchanged_edit_is_none() {
    let original = item(RequestStatus::Pending);
    assert_eq!(edit_update(&original, " Follow-up ", "2024-06-01", "09:30"), None);
    assert_eq!(edit_update(&original, "", "", ""), None);
}

#[test]
fn decision_carries_optional_response() {
    assert_eq!(
        decision_update(RequestStatus::Approved, "  See you then "),
        UpdateRequest {
            status: Some(RequestStatus::Approved),
            response: Some("See you then".to_owned()),
            ..UpdateRequest::default()
        }
    );
    assert_eq!(decision_update(RequestStatus::Rejected, " ").response, None);
}
