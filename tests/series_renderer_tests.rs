mod common;

use std::sync::Arc;

use common::MockClient;
use graphfetcher::renderer::series::{SeriesRenderer, SeriesStatus};
use graphfetcher::renderer::GraphRenderer;
use ratatui::{buffer::Buffer, layout::Rect};

const GRAPHITE_JSON: &[u8] = br#"[{"target": "sw1.cpu", "datapoints": [[10.0, 1700000000], [null, 1700000060], [30.0, 1700000120]]}]"#;

async fn settle(renderer: &mut SeriesRenderer) {
    for _ in 0..20 {
        tokio::task::yield_now().await;
        renderer.process_messages();
    }
}

fn buffer_text(buf: &Buffer) -> String {
    buf.content().iter().map(|cell| cell.symbol()).collect()
}

#[tokio::test]
async fn test_creation_requests_json_and_becomes_ready() {
    let client = Arc::new(MockClient {
        body: Some(GRAPHITE_JSON.to_vec()),
        ..MockClient::default()
    });
    let mut renderer = SeriesRenderer::new(client.clone(), "/render/cpu?timeframe=day");

    assert!(renderer.is_loading());
    assert_eq!(client.gets(), vec!["/render/cpu?timeframe=day&format=json"]);

    settle(&mut renderer).await;

    match renderer.status() {
        SeriesStatus::Ready(series) => {
            assert_eq!(series[0].target, "sw1.cpu");
            assert_eq!(series[0].datapoints.len(), 3);
        }
        other => panic!("expected ready, got {:?}", other),
    }
}

#[tokio::test]
async fn test_repointing_keeps_the_instance_and_refetches() {
    let client = Arc::new(MockClient {
        body: Some(GRAPHITE_JSON.to_vec()),
        ..MockClient::default()
    });
    let mut renderer = SeriesRenderer::new(client.clone(), "/render/cpu?timeframe=day");

    renderer.set_data_url("/render/cpu?timeframe=year");
    renderer.request();

    assert_eq!(renderer.data_url(), "/render/cpu?timeframe=year");
    assert_eq!(client.gets().len(), 2);
    assert_eq!(client.gets()[1], "/render/cpu?timeframe=year&format=json");
}

#[tokio::test]
async fn test_failure_renders_inline_error() {
    let client = Arc::new(MockClient::default());
    let mut renderer = SeriesRenderer::new(client, "/render/cpu?timeframe=day");

    settle(&mut renderer).await;

    assert!(matches!(renderer.status(), SeriesStatus::Failed(_)));

    let area = Rect::new(0, 0, 40, 3);
    let mut buf = Buffer::empty(area);
    renderer.render(area, &mut buf);
    assert!(buffer_text(&buf).contains("Error loading graph"));
}

#[tokio::test]
async fn test_older_answer_drained_last_replaces_newer_chart() {
    let client = Arc::new(MockClient {
        body: Some(GRAPHITE_JSON.to_vec()),
        failing_gets: vec!["/render/cpu?timeframe=day&format=json".to_string()],
        ..MockClient::default()
    });
    let day = client.hold("/render/cpu?timeframe=day&format=json");
    let mut renderer = SeriesRenderer::new(client.clone(), "/render/cpu?timeframe=day");

    renderer.set_data_url("/render/cpu?timeframe=year");
    renderer.request();
    settle(&mut renderer).await;

    assert!(matches!(renderer.status(), SeriesStatus::Ready(_)));
    assert!(renderer.is_loading());

    day.send(()).unwrap();
    settle(&mut renderer).await;

    assert!(matches!(renderer.status(), SeriesStatus::Failed(_)));
    assert!(!renderer.is_loading());
}
