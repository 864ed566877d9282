//! End-to-end tests for the extractor service.
//!
//! PDFs are generated in memory with `lopdf`, uploaded through the router
//! as multipart bodies, and the responses checked:
//! - JSON preview of the municipal layout
//! - JSON preview of the INSS layout
//! - Spreadsheet download headers and sheets
//! - Error cases

use std::io::{Cursor, Read};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use serde_json::Value;
use tower::ServiceExt;

use extrator_previdenciario::api::{AppState, create_router};
use extrator_previdenciario::config::ConfigLoader;
use extrator_previdenciario::document::DecodedDocument;
use extrator_previdenciario::extraction::{is_sorted_by_month, run_extraction};
use extrator_previdenciario::models::{Extraction, Layout};

// =============================================================================
// Test Helpers
// =============================================================================

const BOUNDARY: &str = "integration-boundary";

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/extractor.yaml").expect("Failed to load config");
    create_router(AppState::new(config))
}

/// Builds a PDF with one page per entry; each line is its own text object.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let pages = pages
        .iter()
        .map(|lines| {
            lines
                .iter()
                .enumerate()
                .flat_map(|(i, line)| {
                    vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 10.into()]),
                        Operation::new("Td", vec![50.into(), (780 - 14 * i as i64).into()]),
                        Operation::new("Tj", vec![Object::string_literal(*line)]),
                        Operation::new("ET", vec![]),
                    ]
                })
                .collect::<Vec<Operation>>()
        })
        .collect();
    build_pdf_from_operations(pages)
}

/// Content operations that draw every line inside a single text object,
/// moving down a row with `Td` between lines.
fn single_text_object(font: &str, lines: &[&str]) -> Vec<Operation> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), 10.into()]),
        Operation::new("Td", vec![50.into(), 780.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));
    operations
}

/// Builds a PDF from raw page content. Every page can use `F1`, a Courier
/// font, and `F2`, a composite font whose encoding cannot be resolved.
fn build_pdf_from_operations(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let broken_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => "Unknown",
        "Encoding" => "Identity-H",
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id, "F2" => broken_font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn multipart_body(layout: &str, file: &[u8]) -> Vec<u8> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"layout\"\r\n\r\n{layout}\r\n\
         --{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"extrato.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(file);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn post_upload(router: Router, uri: &str, layout: &str, file: &[u8]) -> Response {
    router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    "Content-Type",
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(multipart_body(layout, file)))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn post_preview(layout: &str, file: &[u8]) -> (StatusCode, Value) {
    let response = post_upload(create_router_for_test(), "/extract/preview", layout, file).await;
    let status = response.status();
    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    (status, json)
}

fn municipal_pdf() -> Vec<u8> {
    build_pdf(&[
        &[
            "PREFEITURA MUNICIPAL DE FLORIANOPOLIS",
            "ANO: 2021",
            "0020 VENCIMENTO ESTATUTARIO 1.000,00 1.100,00",
        ],
        &[
            "ANO: 2020",
            "0020 VENCIMENTO ESTATUTARIO 900,00",
        ],
    ])
}

fn inss_pdf() -> Vec<u8> {
    build_pdf(&[&[
        "CERTIDAO DE TEMPO DE CONTRIBUICAO",
        "02/2020 1.300,00 | 01/2020 1.234,56",
    ]])
}

// =============================================================================
// Preview
// =============================================================================

#[tokio::test]
async fn test_municipal_preview_assigns_months_by_position() {
    let (status, json) = post_preview("prefeitura", &municipal_pdf()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["layout"], "prefeitura");

    let tables = json["tables"].as_array().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["sheet"], "Sheet1");

    let rows = tables[0]["rows"].as_array().unwrap();
    let months: Vec<&str> = rows.iter().map(|r| r["Mês"].as_str().unwrap()).collect();
    assert_eq!(months, vec!["01/2020", "01/2021", "02/2021"]);
    assert_eq!(rows[1]["Salário"], "1000.00");
    assert_eq!(rows[2]["Salário"], "1100.00");
}

#[tokio::test]
async fn test_rows_in_one_text_object_are_separate_lines() {
    let pdf = build_pdf_from_operations(vec![single_text_object(
        "F1",
        &[
            "PREFEITURA MUNICIPAL DE FLORIANOPOLIS",
            "ANO: 2021",
            "0020 VENCIMENTO ESTATUTARIO 1.000,00 1.100,00",
            "0030 GRATIFICACAO 500,00",
        ],
    )]);
    let (status, json) = post_preview("prefeitura", &pdf).await;
    assert_eq!(status, StatusCode::OK);

    let rows = json["tables"][0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Mês"], "01/2021");
    assert_eq!(rows[0]["Salário"], "1000.00");
    assert_eq!(rows[1]["Mês"], "02/2021");
    assert_eq!(rows[1]["Salário"], "1100.00");
}

#[tokio::test]
async fn test_inss_preview_has_both_tables() {
    let (status, json) = post_preview("inss", &inss_pdf()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["warning"].as_str().unwrap().contains("confira"));

    let tables = json["tables"].as_array().unwrap();
    assert_eq!(tables[0]["sheet"], "Salários");
    assert_eq!(tables[1]["sheet"], "Tempo de Contribuição");

    let salaries = tables[0]["rows"].as_array().unwrap();
    assert_eq!(salaries.len(), 2);
    assert_eq!(salaries[0]["Mês"], "01/2020");
    assert_eq!(salaries[0]["Salário"], "1234.56");
    assert!(tables[1]["rows"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_layout_gives_empty_tables() {
    let (status, json) = post_preview("prefeitura", &inss_pdf()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["tables"][0]["rows"].as_array().unwrap().is_empty());
}

// =============================================================================
// Download
// =============================================================================

#[tokio::test]
async fn test_inss_download_is_named_workbook() {
    let response = post_upload(create_router_for_test(), "/extract", "inss", &inss_pdf()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert_eq!(
        headers["content-type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        headers["content-disposition"],
        "attachment; filename=\"INSS_completo.xlsx\""
    );

    let bytes = body_bytes(response).await;
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut workbook_xml = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut workbook_xml)
        .unwrap();
    assert!(workbook_xml.contains("Salários"));
    assert!(workbook_xml.contains("Tempo de Contribuição"));
}

#[tokio::test]
async fn test_municipal_download_is_named_workbook() {
    let response = post_upload(
        create_router_for_test(),
        "/extract",
        "Prefeitura Municipal de Florianópolis",
        &municipal_pdf(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"Prefeitura_salarios.xlsx\""
    );
    assert!(body_bytes(response).await.starts_with(b"PK"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_unselected_layout_produces_no_output() {
    let response = post_upload(create_router_for_test(), "/extract", "", &inss_pdf()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["code"], "LAYOUT_NOT_SELECTED");
}

#[tokio::test]
async fn test_truncated_pdf_is_rejected() {
    let pdf = inss_pdf();
    let (status, json) = post_preview("inss", &pdf[..16]).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_PDF");
}

// =============================================================================
// Library surface
// =============================================================================

#[test]
fn test_generated_pdf_decodes_page_by_page() {
    let document = DecodedDocument::from_pdf_bytes(&municipal_pdf()).unwrap();
    assert_eq!(document.page_count(), 2);
    let pages: Vec<&str> = document.text_pages().collect();
    assert!(pages[0].contains("ANO: 2021"));
    assert!(pages[1].contains("ANO: 2020"));
}

#[test]
fn test_single_text_object_decodes_one_line_per_row() {
    let pdf = build_pdf_from_operations(vec![single_text_object(
        "F1",
        &["ANO: 2021", "0020 VENCIMENTO ESTATUTARIO 1.000,00 1.100,00"],
    )]);
    let document = DecodedDocument::from_pdf_bytes(&pdf).unwrap();
    let page = document.text_pages().next().unwrap();
    let lines: Vec<&str> = page.lines().collect();
    assert_eq!(
        lines,
        vec!["ANO: 2021", "0020 VENCIMENTO ESTATUTARIO 1.000,00 1.100,00"]
    );
}

#[test]
fn test_unresolvable_font_does_not_drop_page() {
    let mut operations = single_text_object("F2", &["IGNORED HEADER"]);
    operations.extend(single_text_object(
        "F1",
        &["ANO: 2021", "0020 VENCIMENTO ESTATUTARIO 1.000,00"],
    ));
    let pdf = build_pdf_from_operations(vec![operations]);

    let document = DecodedDocument::from_pdf_bytes(&pdf).unwrap();
    let page = document.text_pages().next().unwrap();
    assert!(page.contains("ANO: 2021"));
    assert!(!page.contains("IGNORED"));

    let extraction = run_extraction(Layout::MunicipalFlorianopolis, &document);
    assert_eq!(extraction.record_count(), 1);
    assert_eq!(extraction.salaries()[0].month, "01/2021");
}

#[test]
fn test_full_inss_statement() {
    let document = DecodedDocument::from_page_texts([
        "CERTIDÃO DE TEMPO DE CONTRIBUIÇÃO\n\
         Empregador:\n\
         ACME INDUSTRIA LTDA\n\
         Função: Analista\n\
         Período Contribuição: 01/01/2010 a 31/12/2010\n\
         Competência | 12/2010 2.000,00 | 11/2010 1.950,00",
        "",
        "Empregador: GLOBEX S.A.\n\
         Período Contribuição: 01/01/2011 a 31/12/2012\n\
         01/2011 2.100,00 | 10.000,50 sem competência",
    ]);

    let Extraction::Inss {
        salaries,
        contribution_periods,
    } = run_extraction(Layout::InssCtc, &document)
    else {
        panic!("expected INSS extraction");
    };

    let months: Vec<&str> = salaries.iter().map(|s| s.month.as_str()).collect();
    assert_eq!(months, vec!["11/2010", "12/2010", "01/2011"]);
    assert!(is_sorted_by_month(&salaries));

    assert_eq!(contribution_periods.len(), 2);
    assert_eq!(
        contribution_periods[0].employer.as_deref(),
        Some("ACME INDUSTRIA LTDA")
    );
    assert_eq!(contribution_periods[1].employer.as_deref(), Some("GLOBEX S.A."));
    assert_eq!(contribution_periods[1].role.as_deref(), Some("Analista"));
}
