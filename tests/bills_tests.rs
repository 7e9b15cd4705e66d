//! Bill endpoints against a stubbed Congress.gov server.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use congress_api::{BillType, CongressApiError, Limit, ListOptions, SortOrder, ValidationError};
use serde_json::json;

#[tokio::test]
async fn get_bill_sends_key_and_format() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076"))
        .and(header("x-api-key", TEST_KEY))
        .and(header("accept", "application/json"))
        .and(query_param("format", "json"))
        .and(query_param_is_missing("limit"))
        .respond_with(json_ok(json!({
            "bill": {
                "congress": 117,
                "number": "3076",
                "type": "HR",
                "title": "Postal Service Reform Act of 2022",
                "policyArea": {"name": "Government Operations and Politics"},
                "laws": [{"number": "117-108", "type": "Public Law"}],
                "actions": {"count": 74, "url": "https://api.congress.gov/v3/bill/117/hr/3076/actions"}
            },
            "request": {"billNumber": "3076", "billType": "hr", "congress": "117", "format": "json"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.bills().get_bill(BillType::Hr, 3076, Some(117)).await.unwrap();

    let bill = response.bill;
    assert_eq!(bill.number.as_deref(), Some("3076"));
    assert_eq!(bill.title.as_deref(), Some("Postal Service Reform Act of 2022"));
    assert_eq!(bill.laws[0].number.as_deref(), Some("117-108"));
    assert_eq!(bill.actions.unwrap().count, Some(74));
    let request = response.request.unwrap();
    assert_eq!(request.params["billNumber"], "3076");
}

#[tokio::test]
async fn congress_defaults_to_configured_value() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/118/s/1"))
        .respond_with(json_ok(json!({"bill": {"congress": 118, "number": "1", "type": "S"}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.bills().get_bill(BillType::S, 1, None).await.unwrap();
    assert_eq!(response.bill.congress, Some(118));
}

#[tokio::test]
async fn list_by_type_uses_default_limit_and_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hjres"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "20"))
        .and(query_param("fromDateTime", "2022-01-01T00:00:00Z"))
        .and(query_param("sort", "updateDate+desc"))
        .and(query_param_is_missing("toDateTime"))
        .respond_with(json_ok(json!({
            "bills": [
                {"congress": 117, "number": 7, "type": "HJRES", "title": "Joint resolution"}
            ],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new()
        .from_datetime(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        .sort(SortOrder::UpdateDateDesc);
    let response = client
        .bills()
        .list_by_type(BillType::Hjres, Some(117), &options)
        .await
        .unwrap();

    assert_eq!(response.bills.len(), 1);
    assert_eq!(response.bills[0].number.as_deref(), Some("7"));
    assert_eq!(response.pagination.unwrap().count, Some(1));
}

#[tokio::test]
async fn list_all_honours_explicit_limit_and_offset() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill"))
        .and(query_param("offset", "40"))
        .and(query_param("limit", "5"))
        .respond_with(json_ok(json!({"bills": [], "pagination": {"count": 0}})))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new().offset(40).limit(Limit::Count(5));
    let response = client.bills().list_all(&options).await.unwrap();
    assert!(response.bills.is_empty());
}

#[tokio::test]
async fn actions_fetch_every_page_by_default() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/actions"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "250"))
        .respond_with(json_ok(json!({
            "actions": [
                {"actionDate": "2022-04-06", "text": "Became Public Law No: 117-108.", "type": "President"},
                {"actionDate": "2022-04-06", "text": "Signed by President.", "type": "President"}
            ],
            "pagination": {"count": 3, "next": "https://api.congress.gov/v3/bill/117/hr/3076/actions?offset=2&limit=250"},
            "request": {"page": "first"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/actions"))
        .and(query_param("offset", "2"))
        .respond_with(json_ok(json!({
            "actions": [
                {"actionDate": "2021-05-11", "text": "Introduced in House", "type": "IntroReferral"}
            ],
            "pagination": {"count": 3},
            "request": {"page": "last"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_actions(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();

    assert_eq!(response.actions.len(), 3);
    assert_eq!(response.actions[2].text.as_deref(), Some("Introduced in House"));
    let pagination = response.pagination.unwrap();
    assert_eq!(pagination.count, Some(3));
    assert!(pagination.next.is_none());
    assert_eq!(response.request.unwrap().params["page"], "last");
}

#[tokio::test]
async fn subjects_merge_across_pages() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/subjects"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "subjects": {
                "legislativeSubjects": [{"name": "Congressional oversight"}, {"name": "Postal service"}],
                "policyArea": {"name": "Government Operations and Politics"}
            },
            "pagination": {"count": 3, "next": "next-page"}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/subjects"))
        .and(query_param("offset", "2"))
        .respond_with(json_ok(json!({
            "subjects": {"legislativeSubjects": [{"name": "Retirement"}]},
            "pagination": {"count": 3}
        })))
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_subjects(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();

    let names: Vec<_> = response
        .subjects
        .legislative_subjects
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, ["Congressional oversight", "Postal service", "Retirement"]);
    assert_eq!(
        response.subjects.policy_area.unwrap().name.as_deref(),
        Some("Government Operations and Politics")
    );
}

#[tokio::test]
async fn related_bills_use_api_path_spelling() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/relatedbills"))
        .and(query_param("limit", "10"))
        .respond_with(json_ok(json!({
            "relatedBills": [{
                "congress": 117,
                "number": 1720,
                "type": "S",
                "relationshipDetails": [{"identifiedBy": "CRS", "type": "Related bill"}]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_related_bills(BillType::Hr, 3076, Some(117), &ListOptions::new().limit(Limit::Count(10)))
        .await
        .unwrap();
    assert_eq!(response.related_bills[0].number, "1720");
}

#[tokio::test]
async fn committees_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/committees"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "committees": [
                {"name": "Oversight and Reform Committee", "chamber": "House", "systemCode": "hsgo00", "type": "Standing"}
            ],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_committees(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.committees[0].system_code.as_deref(), Some("hsgo00"));
}

#[tokio::test]
async fn cosponsors_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/cosponsors"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "cosponsors": [
                {"bioguideId": "C001078", "fullName": "Rep. Connolly, Gerald E. [D-VA-11]"}
            ],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_cosponsors(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.cosponsors[0].bioguide_id.as_deref(), Some("C001078"));
}

#[tokio::test]
async fn summaries_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/summaries"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "summaries": [
                {"actionDate": "2021-05-11", "actionDesc": "Introduced in House", "versionCode": "00"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_summaries(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.summaries[0].action_desc.as_deref(), Some("Introduced in House"));
}

#[tokio::test]
async fn text_versions_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/text"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "textVersions": [
                {"date": "2022-04-06T04:00:00Z", "type": "Enrolled Bill", "formats": []}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_text(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.text_versions[0].version_type.as_deref(), Some("Enrolled Bill"));
}

#[tokio::test]
async fn titles_send_date_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/titles"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .and(query_param("fromDateTime", "2022-01-01T00:00:00Z"))
        .and(query_param("toDateTime", "2022-12-31T00:00:00Z"))
        .respond_with(json_ok(json!({
            "titles": [
                {"title": "Postal Service Reform Act of 2022", "titleType": "Display Title"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new()
        .from_datetime(Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap())
        .to_datetime(Utc.with_ymd_and_hms(2022, 12, 31, 0, 0, 0).unwrap());
    let response = client
        .bills()
        .get_titles(BillType::Hr, 3076, Some(117), &options)
        .await
        .unwrap();
    assert_eq!(response.titles[0].title, "Postal Service Reform Act of 2022");
}

#[tokio::test]
async fn bill_amendments_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/3076/amendments"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "amendments": [{"congress": 117, "number": "173", "type": "HAMDT"}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .bills()
        .get_amendments(BillType::Hr, 3076, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.amendments[0].number.as_deref(), Some("173"));
}

#[tokio::test]
async fn invalid_arguments_fail_before_any_request() {
    let (server, client) = setup().await;

    let err = client.bills().get_bill(BillType::Hr, 0, Some(117)).await.unwrap_err();
    assert!(matches!(err, CongressApiError::Validation(ValidationError::BillNumber(0))));

    let err = client
        .bills()
        .list_by_congress(Some(0), &ListOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CongressApiError::Validation(ValidationError::Congress(0))));

    let err = client
        .bills()
        .list_all(&ListOptions::new().limit(Limit::Count(0)))
        .await
        .unwrap_err();
    assert!(matches!(err, CongressApiError::Validation(ValidationError::Limit { .. })));

    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn unknown_bill_is_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/bill/117/hr/999999"))
        .respond_with(wiremock::ResponseTemplate::new(404).set_body_json(json!({"error": "Unknown resource"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.bills().get_bill(BillType::Hr, 999_999, Some(117)).await.unwrap_err();
    assert!(matches!(err, CongressApiError::NotFound(p) if p == "bill/117/hr/999999"));
}
