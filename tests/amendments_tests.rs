//! Amendment endpoints against a stubbed Congress.gov server.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use congress_api::{AmendmentType, CongressApiError, ListOptions, ValidationError};
use serde_json::json;

#[tokio::test]
async fn get_amendment_decodes_detail() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/samdt/2137"))
        .and(header("x-api-key", TEST_KEY))
        .and(query_param("format", "json"))
        .respond_with(json_ok(json!({
            "amendment": {
                "congress": 117,
                "number": "2137",
                "type": "SAMDT",
                "chamber": "Senate",
                "amendedBill": {"congress": 117, "number": "3684", "type": "HR"},
                "latestAction": {"actionDate": "2021-08-01", "text": "Amendment SA 2137 agreed to in Senate"}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_amendment(AmendmentType::Samdt, 2137, Some(117))
        .await
        .unwrap();
    assert_eq!(response.amendment.chamber.as_deref(), Some("Senate"));
    assert_eq!(
        response.amendment.latest_action.unwrap().action_date.as_deref(),
        Some("2021-08-01")
    );
}

#[tokio::test]
async fn list_by_congress_defaults_to_twenty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "amendments": [{"congress": 117, "number": "173", "type": "SUAMDT"}],
            "pagination": {"count": 4201, "next": "https://api.congress.gov/v3/amendment/117?offset=20&limit=20"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .list_by_congress(Some(117), &ListOptions::new())
        .await
        .unwrap();

    assert_eq!(response.amendments[0].amendment_type.as_deref(), Some("SUAMDT"));
    assert!(response.pagination.unwrap().next.is_some());
}

#[tokio::test]
async fn text_is_fetched_for_supported_amendments() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/hamdt/287/text"))
        .and(query_param("limit", "250"))
        .respond_with(json_ok(json!({
            "textVersions": [{
                "date": "2022-07-14T04:00:00Z",
                "type": "Offered",
                "formats": [{"type": "PDF", "url": "https://www.congress.gov/117/crec/2022/07/13/168/116/CREC-2022-07-13-pt1-PgH6296.pdf"}]
            }],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_text(AmendmentType::Hamdt, 287, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.text_versions[0].formats.len(), 1);
}

#[tokio::test]
async fn text_before_117th_congress_is_rejected_locally() {
    let (server, client) = setup().await;

    let err = client
        .amendments()
        .get_text(AmendmentType::Samdt, 1, Some(116), &ListOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CongressApiError::Validation(ValidationError::TextUnsupportedCongress { given: 116, min: 117 })
    ));

    assert!(requests(&server).await.is_empty());
}

#[tokio::test]
async fn unprinted_senate_amendment_text_is_requested() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/118/suamdt/1405/text"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({"textVersions": [], "pagination": {"count": 0}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_text(AmendmentType::Suamdt, 1405, None, &ListOptions::new())
        .await
        .unwrap();
    assert!(response.text_versions.is_empty());
}

#[tokio::test]
async fn list_all_defaults_to_twenty_with_window() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .and(query_param("toDateTime", "2023-06-30T12:00:00Z"))
        .respond_with(json_ok(json!({
            "amendments": [{"congress": 118, "number": "10", "type": "HAMDT"}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = ListOptions::new().to_datetime(Utc.with_ymd_and_hms(2023, 6, 30, 12, 0, 0).unwrap());
    let response = client.amendments().list_all(&options).await.unwrap();
    assert_eq!(response.amendments[0].number.as_deref(), Some("10"));
}

#[tokio::test]
async fn list_by_type_defaults_to_twenty() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/hamdt"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "amendments": [{"congress": 117, "number": "287", "type": "HAMDT"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .list_by_type(AmendmentType::Hamdt, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.amendments[0].amendment_type.as_deref(), Some("HAMDT"));
}

#[tokio::test]
async fn actions_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/samdt/2137/actions"))
        .and(query_param("limit", "250"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "actions": [{"actionDate": "2021-08-01", "text": "Amendment SA 2137 agreed to in Senate by Yea-Nay Vote. 69 - 28."}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_actions(AmendmentType::Samdt, 2137, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.actions.len(), 1);
}

#[tokio::test]
async fn amendments_to_amendment_default_to_all_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/samdt/2137/amendments"))
        .and(query_param("limit", "250"))
        .respond_with(json_ok(json!({
            "amendments": [{"congress": 117, "number": "2173", "type": "SAMDT"}],
            "pagination": {"count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_amendments(AmendmentType::Samdt, 2137, Some(117), &ListOptions::new())
        .await
        .unwrap();
    assert_eq!(response.amendments[0].number.as_deref(), Some("2173"));
}

#[tokio::test]
async fn cosponsors_follow_next_links() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/amendment/117/samdt/2137/cosponsors"))
        .and(query_param("offset", "0"))
        .respond_with(json_ok(json!({
            "cosponsors": [{"bioguideId": "P000449", "fullName": "Sen. Portman, Rob [R-OH]"}],
            "pagination": {"count": 2, "next": "more"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/amendment/117/samdt/2137/cosponsors"))
        .and(query_param("offset", "1"))
        .respond_with(json_ok(json!({
            "cosponsors": [{"bioguideId": "M001183", "fullName": "Sen. Manchin, Joe, III [D-WV]"}],
            "pagination": {"count": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .amendments()
        .get_cosponsors(AmendmentType::Samdt, 2137, Some(117), &ListOptions::new())
        .await
        .unwrap();
    let ids: Vec<_> = response
        .cosponsors
        .iter()
        .filter_map(|c| c.bioguide_id.as_deref())
        .collect();
    assert_eq!(ids, ["P000449", "M001183"]);
}

#[tokio::test]
async fn amendment_number_must_be_positive() {
    let (server, client) = setup().await;
    let err = client
        .amendments()
        .get_actions(AmendmentType::Hamdt, 0, None, &ListOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, CongressApiError::Validation(ValidationError::AmendmentNumber(0))));
    assert!(requests(&server).await.is_empty());
}
