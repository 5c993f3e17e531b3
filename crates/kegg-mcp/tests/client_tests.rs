//! KEGG client tests against a wiremock server.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kegg_mcp::client::KeggClient;
use kegg_mcp::config::Config;
use kegg_mcp::models::NOT_FOUND;

const PATHWAY_ENTRY: &str = "\
ENTRY       hsa04012                    Pathway
NAME        ErbB signaling pathway - Homo sapiens (human)
DRUG        D00001  D00002
            D00003
CLASS       Environmental Information Processing; Signal transduction
///
";

const ASPIRIN_ENTRY: &str = "\
ENTRY       D00109                      Drug
NAME        Aspirin (JP18/USP);
            Acetylsalicylic acid
CLASS       Analgesic
TARGET      PTGS1 [HSA:5742] [KO:K00509]
            PTGS2 [HSA:5743] [KO:K11987]
PATHWAY     hsa00590  Arachidonic acid metabolism
///
";

fn client(mock_server: &MockServer) -> KeggClient {
    KeggClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

#[tokio::test]
async fn test_list_pathway_drugs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/path:hsa04012"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PATHWAY_ENTRY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let drugs = client(&mock_server).list_pathway_drugs("path:hsa04012").await.unwrap();
    assert_eq!(drugs, vec!["D00001", "D00002", "D00003"]);
}

#[tokio::test]
async fn test_pathway_without_drug_block_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/path:map00010"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("ENTRY       map00010\nNAME        Glycolysis\n///\n"),
        )
        .mount(&mock_server)
        .await;

    let drugs = client(&mock_server).list_pathway_drugs("path:map00010").await.unwrap();
    assert!(drugs.is_empty());
}

#[tokio::test]
async fn test_pathway_error_status_body_is_still_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/path:map99999"))
        .respond_with(ResponseTemplate::new(404).set_body_string(""))
        .mount(&mock_server)
        .await;

    let drugs = client(&mock_server).list_pathway_drugs("path:map99999").await.unwrap();
    assert!(drugs.is_empty());
}

#[tokio::test]
async fn test_get_drug_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/D00109"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ASPIRIN_ENTRY))
        .mount(&mock_server)
        .await;

    let record = client(&mock_server).get_drug_info("D00109").await.unwrap();
    assert_eq!(record.drug_id, "D00109");
    assert_eq!(record.name, "Aspirin (JP18/USP);");
    assert_eq!(record.class, "Analgesic");
    assert_eq!(
        record.targets,
        vec!["PTGS1 [HSA:5742] [KO:K00509]", "PTGS2 [HSA:5743] [KO:K11987]"]
    );
}

#[tokio::test]
async fn test_drug_error_status_gives_defaults() {
    let mock_server = MockServer::start().await;

    // Error body that would otherwise parse as a NAME line
    Mock::given(method("GET"))
        .and(path("/get/D99999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("NAME        Bogus\n"))
        .mount(&mock_server)
        .await;

    let record = client(&mock_server).get_drug_info("D99999").await.unwrap();
    assert_eq!(record.drug_id, "D99999");
    assert_eq!(record.name, NOT_FOUND);
    assert_eq!(record.class, NOT_FOUND);
    assert!(record.targets.is_empty());
}

#[tokio::test]
async fn test_drug_without_fields_gives_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/D00001"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ENTRY       D00001\n///\n"))
        .mount(&mock_server)
        .await;

    let record = client(&mock_server).get_drug_info("D00001").await.unwrap();
    assert!(!record.has_name());
    assert!(!record.has_class());
    assert!(record.targets.is_empty());
}

#[tokio::test]
async fn test_invalid_ids_make_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    for bad in ["hsa04012", "path:HSA04012", "path:", "path:hsa04012/../x", ""] {
        let err = client.list_pathway_drugs(bad).await.unwrap_err();
        assert!(err.is_invalid_input(), "{bad:?} accepted");
    }
    for bad in ["d00109", "D", "DX1", "D00109 ", "C00031", "D١٢"] {
        let err = client.get_drug_info(bad).await.unwrap_err();
        assert!(err.is_invalid_input(), "{bad:?} accepted");
    }
}

#[tokio::test]
async fn test_transport_failure_is_an_error() {
    // Nothing listens on port 1
    let client = KeggClient::new(Config::for_testing("http://127.0.0.1:1")).unwrap();

    let err = client.get_drug_info("D00109").await.unwrap_err();
    assert!(!err.is_invalid_input());
    assert!(err.to_string().starts_with("HTTP error"));
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/D00109"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ASPIRIN_ENTRY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&format!("{}/", mock_server.uri()));
    let client = KeggClient::new(config).unwrap();
    assert!(!client.base_url().ends_with('/'));
    client.get_drug_info("D00109").await.unwrap();
}

#[tokio::test]
async fn test_entry_response_records_requested_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/get/D00109"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client(&mock_server).get_entry("D00109").await.unwrap();
    assert!(!response.is_success());
    assert_eq!(response.url, format!("{}/get/D00109", mock_server.uri()));
}
