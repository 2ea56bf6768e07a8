use super::*;

#[test]
fn insurance_line_lists_plans() {
    let plans = vec!["Aetna".to_owned(), " ".to_owned(), "Blue Cross".to_owned()];
    assert_eq!(insurance_line(&plans).as_deref(), Some("Accepts: Aetna, Blue Cross"));
}

#[test]
fn insurance_line_empty_without_plans() {
    assert_eq!(insurance_line(&[]), None);
    assert_eq!(insurance_line(&[String::new()]), None);
}
