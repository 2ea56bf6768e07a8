use super::*;

#[test]
fn request_path_appends_id() {
    assert_eq!(request_path("appt-1"), "/api/requests/appt-1");
}

#[test]
fn normalize_time_adds_seconds_to_hh_mm() {
    assert_eq!(normalize_time("09:30"), "09:30:00");
    assert_eq!(normalize_time(" 14:05 "), "14:05:00");
}

#[test]
fn normalize_time_leaves_other_shapes_alone() {
    assert_eq!(normalize_time("09:30:00"), "09:30:00");
    assert_eq!(normalize_time("9am"), "9am");
    assert_eq!(normalize_time(":30"), ":30");
}

#[test]
fn build_create_request_trims_and_omits_blanks() {
    let req = build_create_request(" prov-1 ", " Need a consultation ", "", "  ", None).unwrap();
    assert_eq!(
        req,
        CreateRequest {
            provider_id: "prov-1".to_owned(),
            message: "Need a consultation".to_owned(),
            date: None,
            time: None,
            npi_num: None,
        }
    );
}

#[test]
fn build_create_request_normalizes_time_and_keeps_npi() {
    let req = build_create_request("prov-1", "Help", "2025-01-10", "09:00", Some(1_234_567_890)).unwrap();
    assert_eq!(req.date.as_deref(), Some("2025-01-10"));
    assert_eq!(req.time.as_deref(), Some("09:00:00"));
    assert_eq!(req.npi_num, Some(1_234_567_890));
}

#[test]
fn build_create_request_requires_provider_and_message() {
    assert_eq!(build_create_request("", "Help", "", "", None), Err("Choose a provider first."));
    assert_eq!(
        build_create_request("prov-1", "   ", "", "", None),
        Err("Add a short message for the provider.")
    );
}
