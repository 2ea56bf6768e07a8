use super::*;

fn response(shown: usize, total: usize) -> SearchResponse {
    SearchResponse {
        result_count: total,
        results: (0..shown)
            .map(|i| ProviderSummary { id: format!("p-{i}"), ..ProviderSummary::default() })
            .collect(),
    }
}

#[test]
fn heading_for_no_results() {
    assert_eq!(result_heading(&response(0, 0)), "No providers matched your search.");
}

#[test]
fn heading_for_one_result() {
    assert_eq!(result_heading(&response(1, 1)), "1 provider found");
}

#[test]
fn heading_mentions_truncation() {
    assert_eq!(result_heading(&response(10, 42)), "Showing 10 of 42 providers");
}

#[test]
fn heading_trusts_results_over_a_low_count() {
    assert_eq!(result_heading(&response(3, 0)), "3 providers found");
}
