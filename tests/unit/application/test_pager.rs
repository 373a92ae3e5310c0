use async_trait::async_trait;
use kis_overseas_client::application::interfaces::transport::Transport;
use kis_overseas_client::application::pager::{Pager, fetch_table};
use kis_overseas_client::error::AppError;
use kis_overseas_client::model::cursor::CursorKeys;
use kis_overseas_client::model::requests::{ApiMethod, RequestDescriptor};
use kis_overseas_client::model::responses::RawResponse;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Transport that replays canned pages and records what was sent
struct ScriptedTransport {
    pages: Mutex<VecDeque<Result<RawResponse, AppError>>>,
    sent: Mutex<Vec<(String, RequestDescriptor)>>,
}

impl ScriptedTransport {
    fn new(pages: Vec<Result<RawResponse, AppError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<(String, RequestDescriptor)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        request: &RequestDescriptor,
        tr_cont: &str,
    ) -> Result<RawResponse, AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((tr_cont.to_string(), request.clone()));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::InvalidInput("script exhausted".to_string())))
    }

    fn page_delay(&self) -> Duration {
        Duration::ZERO
    }
}

fn page(tr_cont: Option<&str>, body: Value) -> Result<RawResponse, AppError> {
    Ok(RawResponse {
        tr_cont: tr_cont.map(String::from),
        body,
    })
}

fn nccs_request() -> RequestDescriptor {
    RequestDescriptor::new(
        "/uapi/overseas-stock/v1/trading/inquire-nccs",
        "TTTS3018R",
        ApiMethod::Get,
    )
    .param("OVRS_EXCG_CD", "NASD")
}

fn rows(symbols: &[&str]) -> Value {
    Value::Array(
        symbols
            .iter()
            .map(|s| json!({"pdno": s, "nccs_qty": "1"}))
            .collect(),
    )
}

#[tokio::test]
async fn test_single_page_without_continuation() {
    let transport = ScriptedTransport::new(vec![page(
        None,
        json!({"rt_cd": "0", "msg_cd": "KIOK0000", "msg1": "ok", "output": rows(&["AAPL", "TSLA"])}),
    )]);

    let table = Pager::new(&transport, nccs_request(), "output", CursorKeys::Width200)
        .collect()
        .await
        .unwrap();

    assert_eq!(table.len(), 2);
    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "");
    assert_eq!(sent[0].1.get("CTX_AREA_FK200"), Some(""));
    assert_eq!(sent[0].1.get("CTX_AREA_NK200"), Some(""));
}

#[tokio::test]
async fn test_pages_follow_cursor_until_last() {
    let transport = ScriptedTransport::new(vec![
        page(
            Some("M"),
            json!({
                "rt_cd": "0", "msg_cd": "", "msg1": "",
                "ctx_area_fk200": "FK1", "ctx_area_nk200": "NK1",
                "output": rows(&["AAPL", "TSLA"])
            }),
        ),
        page(
            Some("F"),
            json!({
                "rt_cd": "0", "msg_cd": "", "msg1": "",
                "CTX_AREA_FK200": "FK2", "CTX_AREA_NK200": "NK2",
                "output": rows(&["MSFT"])
            }),
        ),
        page(
            Some("D"),
            json!({"rt_cd": "0", "msg_cd": "", "msg1": "", "output": rows(&["NVDA"])}),
        ),
    ]);

    let table = Pager::new(&transport, nccs_request(), "output", CursorKeys::Width200)
        .collect()
        .await
        .unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.column("pdno").unwrap(),
        &["AAPL", "TSLA", "MSFT", "NVDA"]
    );

    let sent = transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[1].0, "N");
    assert_eq!(sent[1].1.get("CTX_AREA_FK200"), Some("FK1"));
    assert_eq!(sent[1].1.get("CTX_AREA_NK200"), Some("NK1"));
    assert_eq!(sent[2].1.get("CTX_AREA_NK200"), Some("NK2"));
    // Other parameters are untouched
    assert_eq!(sent[2].1.get("OVRS_EXCG_CD"), Some("NASD"));
}

#[tokio::test]
async fn test_no_data_gives_empty_table() {
    let transport = ScriptedTransport::new(vec![page(
        Some("D"),
        json!({"rt_cd": "0", "msg_cd": "KIOK0560", "msg1": "조회할 자료가 없습니다", "output": []}),
    )]);

    let mut pager = Pager::new(&transport, nccs_request(), "output", CursorKeys::Width200);
    let first = pager.next_page().await.unwrap().unwrap();
    assert!(first.is_empty());
    assert!(pager.is_done());
    assert!(pager.next_page().await.is_none());
}

#[tokio::test]
async fn test_error_ends_sequence_and_discards_pages() {
    let transport = ScriptedTransport::new(vec![
        page(
            Some("M"),
            json!({"rt_cd": "0", "msg_cd": "", "msg1": "", "ctx_area_nk200": "NK1", "output": rows(&["AAPL"])}),
        ),
        page(
            None,
            json!({"rt_cd": "1", "msg_cd": "EGW00201", "msg1": "초당 거래건수를 초과하였습니다."}),
        ),
    ]);

    let result = Pager::new(&transport, nccs_request(), "output", CursorKeys::Width200)
        .collect()
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.msg_cd(), Some("EGW00201"));
    assert_eq!(transport.sent().len(), 2);
}

#[tokio::test]
async fn test_next_page_yields_error_once() {
    let transport = ScriptedTransport::new(vec![Err(AppError::Unauthorized)]);
    let mut pager = Pager::new(&transport, nccs_request(), "output", CursorKeys::Width200);

    assert!(matches!(
        pager.next_page().await,
        Some(Err(AppError::Unauthorized))
    ));
    assert!(pager.next_page().await.is_none());
    assert_eq!(pager.pages_fetched(), 0);
}

#[tokio::test]
async fn test_reset_restarts_from_first_page() {
    let more = json!({
        "rt_cd": "0", "msg_cd": "", "msg1": "",
        "ctx_area_fk100": "A", "ctx_area_nk100": "B",
        "output1": rows(&["AAPL"])
    });
    let transport = ScriptedTransport::new(vec![page(Some("M"), more.clone()), page(Some("M"), more)]);
    let request = RequestDescriptor::new(
        "/uapi/overseas-stock/v1/trading/inquire-period-trans",
        "CTOS4001R",
        ApiMethod::Get,
    );

    let mut pager = Pager::new(&transport, request, "output1", CursorKeys::Width100);
    pager.next_page().await.unwrap().unwrap();
    assert_eq!(pager.request().get("CTX_AREA_NK100"), Some("B"));

    pager.reset();
    assert_eq!(pager.pages_fetched(), 0);
    assert!(!pager.is_done());
    assert_eq!(pager.request().get("CTX_AREA_NK100"), Some(""));

    pager.next_page().await.unwrap().unwrap();
    let sent = transport.sent();
    assert_eq!(sent[1].0, "");
    assert_eq!(sent[1].1.get("CTX_AREA_FK100"), Some(""));
}

#[tokio::test]
async fn test_fetch_table_object_section_is_one_row() {
    let transport = ScriptedTransport::new(vec![page(
        None,
        json!({
            "rt_cd": "0", "msg_cd": "", "msg1": "",
            "output1": [{"a": "1"}],
            "output2": {"tot_evlu_pfls_amt": "10.5", "frcr_pchs_amt1": "100"}
        }),
    )]);

    let table = fetch_table(&transport, &nccs_request(), "output2").await.unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0, "tot_evlu_pfls_amt"), Some("10.5"));
    assert_eq!(transport.sent()[0].0, "");
}

#[tokio::test]
async fn test_fetch_table_failure_even_with_sections() {
    let transport = ScriptedTransport::new(vec![page(
        None,
        json!({"rt_cd": "7", "msg_cd": "OPSQ0002", "msg1": "없는 서비스 코드", "output": [{"a": "1"}]}),
    )]);

    let err = fetch_table(&transport, &nccs_request(), "output")
        .await
        .unwrap_err();
    assert!(err.is_api());
}

#[test]
fn test_collect_blocking_with_plain_keys() {
    let transport = ScriptedTransport::new(vec![
        page(
            Some("F"),
            json!({"rt_cd": "0", "ctx_area_fk": "K1", "ctx_area_nk": "N1", "output": rows(&["A"])}),
        ),
        page(
            None,
            json!({"rt_cd": "0", "ctx_area_fk": "", "ctx_area_nk": "", "output": rows(&["B"])}),
        ),
    ]);

    let pager = Pager::new(&transport, nccs_request(), "output", CursorKeys::Plain);
    let table = tokio_test::block_on(pager.collect()).unwrap();

    assert_eq!(table.column("pdno").unwrap(), ["A", "B"]);
    let sent = transport.sent();
    assert_eq!(sent[1].0, "N");
    assert_eq!(sent[1].1.get("CTX_AREA_NK"), Some("N1"));
}
