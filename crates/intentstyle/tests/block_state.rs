use intentstyle::block::{
    migrate_collapse_state, normalize, redirect_to_first_pipeline, Block, JsonFileStore,
    KeyValueStore, MemoryStore, Message, NormalizeError, OutputRecord, Query, Route, Router,
};
use serde_json::json;

#[derive(Default)]
struct RecordingRouter {
    query: Query,
    pushed: Vec<Route>,
}

impl Router for RecordingRouter {
    fn query(&self) -> Query {
        self.query.clone()
    }

    fn push(&mut self, route: Route) {
        self.pushed.push(route);
    }
}

#[test]
fn migration_round_trip_moves_both_flags() {
    let mut store = MemoryStore::new();
    store.set("A/load/codeCollapsed", true).unwrap();
    store.set("A/load/outputCollapsed", false).unwrap();

    let report = migrate_collapse_state(&mut store, &[Block::new("load")], "A", "B");

    assert!(report.is_clean());
    assert_eq!(report.moved.len(), 2);
    assert_eq!(store.get("A/load/codeCollapsed").unwrap(), None);
    assert_eq!(store.get("A/load/outputCollapsed").unwrap(), None);
    assert_eq!(store.get("B/load/codeCollapsed").unwrap(), Some(true));
    assert_eq!(store.get("B/load/outputCollapsed").unwrap(), Some(false));
}

#[test]
fn migration_persists_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("collapse.json");
    std::fs::write(
        &path,
        r#"{"old/b1/codeCollapsed": true, "old/b2/outputCollapsed": true}"#,
    )
    .unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    let blocks = [Block::new("b1"), Block::new("b2"), Block::new("b3")];
    let report = migrate_collapse_state(&mut store, &blocks, "old", "new");
    assert_eq!(report.moved.len(), 2);
    assert_eq!(report.absent, 4);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        on_disk,
        json!({"new/b1/codeCollapsed": true, "new/b2/outputCollapsed": true})
    );
}

#[test]
fn normalization_keeps_one_message_per_output() {
    let blocks: Vec<Block> = serde_json::from_value(json!([
        {
            "uuid": "load",
            "content": "df = load()",
            "outputs": [
                {"sample_data": {"columns": ["id"], "rows": [[1]]}, "type": "table"},
                {"text_data": "{\"shape\": [1, 1]}"},
                {"text_data": ""}
            ]
        },
        {"uuid": "notes", "content": "# notes"}
    ]))
    .unwrap();

    let normalized = normalize(&blocks).unwrap();

    assert_eq!(
        normalized.messages["load"],
        vec![
            Message::Sample {
                data: json!({"columns": ["id"], "rows": [[1]]}),
                output_type: Some("table".into()),
            },
            Message::Parsed(json!({"shape": [1, 1]})),
            Message::Text(Some(String::new())),
        ]
    );
    assert!(!normalized.messages.contains_key("notes"));
    assert_eq!(normalized.content.len(), 2);
}

#[test]
fn malformed_text_payload_fails_normalization() {
    let blocks = [Block::new("broken").with_output(OutputRecord::text("{not valid json"))];
    match normalize(&blocks) {
        Err(NormalizeError::Parse { block, index, .. }) => {
            assert_eq!(block, "broken");
            assert_eq!(index, 0);
        }
        Ok(normalized) => panic!("expected parse error, got {normalized:?}"),
    }
}

#[test]
fn redirect_with_no_pipelines_does_nothing() {
    let mut router = RecordingRouter::default();
    let pipelines: Vec<String> = Vec::new();
    assert!(!redirect_to_first_pipeline(&pipelines, &mut router));
    assert!(router.pushed.is_empty());
}

#[test]
fn redirect_keeps_current_query() {
    let mut router = RecordingRouter {
        query: Query::from([("tab".to_string(), "triggers".to_string())]),
        ..RecordingRouter::default()
    };
    assert!(redirect_to_first_pipeline(&["daily_etl", "backfill"], &mut router));
    assert_eq!(
        router.pushed,
        vec![Route::new("/pipelines/daily_etl")
            .with_query(Query::from([("tab".to_string(), "triggers".to_string())]))]
    );
}
