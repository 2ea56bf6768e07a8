use super::*;

fn request(id: &str, status: RequestStatus, created_at: &str) -> RequestItem {
    RequestItem {
        id: id.to_owned(),
        status,
        created_at: created_at.to_owned(),
        ..RequestItem::default()
    }
}

#[test]
fn summary_counts_each_status() {
    let requests = vec![
        request("1", RequestStatus::Pending, "2024-05-01T10:00:00"),
        request("2", RequestStatus::Approved, "2024-05-02T10:00:00"),
        request("3", RequestStatus::Pending, "2024-05-03T10:00:00"),
    ];
    let summary = RequestSummary::from_requests(&requests);
    assert_eq!(summary, RequestSummary { pending: 2, approved: 1, rejected: 0 });
    assert_eq!(summary.total(), 3);
}

#[test]
fn summary_of_nothing_is_zero() {
    assert_eq!(RequestSummary::from_requests(&[]).total(), 0);
}

#[test]
fn recent_requests_are_newest_first_and_limited() {
    let requests = vec![
        request("old", RequestStatus::Pending, "2024-01-01T00:00:00"),
        request("new", RequestStatus::Pending, "2024-03-01T00:00:00"),
        request("mid", RequestStatus::Rejected, "2024-02-01T00:00:00"),
    ];
    let ids: Vec<String> = recent_requests(&requests, 2).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, ["new", "mid"]);
}
