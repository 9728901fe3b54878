use super::support::{unavailable, MemoryStore, StubModel};
use crate::adapter::JsonResultStore;
use crate::domain::{SubjectName, SupplementResult, DEFAULT_SUBJECTS};
use crate::usecase::{AnalyzeUseCase, BatchUseCase};
use common::adapter::{NoopLog, StdFileSystem};
use common::domain::{ApiKey, StateDir};
use common::error::Error;
use common::llm::{GeminiProvider, LlmDriver, ModelAlias};
use common::ports::outbound::env_resolver::DEFAULT_API_BASE;
use common::ports::outbound::{EnvResolver, HttpRequest, HttpResponse, HttpTransport};
use serde_json::{json, Number};
use std::sync::{Arc, Mutex};

fn batch(model: StubModel, store: MemoryStore) -> BatchUseCase<StubModel> {
    BatchUseCase::new(
        AnalyzeUseCase::new(model, Arc::new(NoopLog)),
        Box::new(store),
        Arc::new(NoopLog),
    )
}

#[test]
fn test_results_are_saved_in_input_order() {
    let model = StubModel::new(unavailable, |p| {
        if p.contains("Ashwagandha") {
            Ok(json!({"efficacy": 6}))
        } else {
            Ok(json!({}))
        }
    });
    let store = MemoryStore::default();
    let results = batch(model, store.clone()).run(&SubjectName::defaults()).unwrap();

    let names: Vec<&str> = results.iter().map(|r| r.supplement.as_str()).collect();
    assert_eq!(names, DEFAULT_SUBJECTS.to_vec());
    assert_eq!(results[1].efficacy, Some(Number::from(6)));
    assert_eq!(store.saved.lock().unwrap().as_ref(), Some(&results));
}

#[test]
fn test_failure_midway_saves_nothing() {
    let model = StubModel::new(unavailable, |p| {
        if p.contains("Ashwagandha") {
            Err(Error::json("Model text is not valid JSON"))
        } else {
            Ok(json!({}))
        }
    });
    let store = MemoryStore::default();
    let err = batch(model, store.clone())
        .run(&SubjectName::defaults())
        .unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(store.saved.lock().unwrap().is_none());
}

struct NoKeyEnv;

impl EnvResolver for NoKeyEnv {
    fn api_key(&self) -> Result<ApiKey, Error> {
        Err(Error::env("GEMINI_API_KEY environment variable not set"))
    }
    fn api_base(&self) -> String {
        DEFAULT_API_BASE.to_string()
    }
    fn resolve_state_dir(&self) -> Result<StateDir, Error> {
        Err(Error::env("no state dir in tests"))
    }
}

struct KeyEnv;

impl EnvResolver for KeyEnv {
    fn api_key(&self) -> Result<ApiKey, Error> {
        Ok(ApiKey::new("k"))
    }
    fn api_base(&self) -> String {
        DEFAULT_API_BASE.to_string()
    }
    fn resolve_state_dir(&self) -> Result<StateDir, Error> {
        Err(Error::env("no state dir in tests"))
    }
}

/// 検索付きには fenced JSON、通常には候補なしを返す
struct CannedTransport {
    sent: Mutex<Vec<HttpRequest>>,
}

impl HttpTransport for CannedTransport {
    fn post_json(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        self.sent.lock().unwrap().push(request.clone());
        let body = if request.body.get("tools").is_some() {
            let text = "```json\n{\"efficacy\": 9, \"citations\": [\"PMID:1\", \"PMID:2\"]}\n```";
            json!({"candidates": [{"content": {"parts": [{"text": text}]}}]}).to_string()
        } else {
            json!({"candidates": []}).to_string()
        };
        Ok(HttpResponse { status: 200, body })
    }
}

fn gemini_batch(
    env: Arc<dyn EnvResolver>,
    transport: Arc<CannedTransport>,
    path: &std::path::Path,
) -> BatchUseCase<LlmDriver<GeminiProvider>> {
    let provider = GeminiProvider::new(ModelAlias::Flash, env, transport, Arc::new(NoopLog));
    BatchUseCase::new(
        AnalyzeUseCase::new(LlmDriver::new(provider), Arc::new(NoopLog)),
        Box::new(JsonResultStore::new(Arc::new(StdFileSystem), path)),
        Arc::new(NoopLog),
    )
}

#[test]
fn test_without_key_writes_name_only_records_and_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("supplement_results.json");
    let transport = Arc::new(CannedTransport { sent: Mutex::new(Vec::new()) });
    gemini_batch(Arc::new(NoKeyEnv), transport.clone(), &path)
        .run(&SubjectName::defaults())
        .unwrap();

    assert!(transport.sent.lock().unwrap().is_empty());
    let saved: Vec<SupplementResult> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let expected: Vec<SupplementResult> = DEFAULT_SUBJECTS
        .iter()
        .map(|n| SupplementResult::empty(n))
        .collect();
    assert_eq!(saved, expected);
}

#[test]
fn test_with_gemini_provider_prefers_search_answer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("supplement_results.json");
    let transport = Arc::new(CannedTransport { sent: Mutex::new(Vec::new()) });
    let results = gemini_batch(Arc::new(KeyEnv), transport.clone(), &path)
        .run(&[SubjectName::new("Resveratrol")])
        .unwrap();

    assert_eq!(transport.sent.lock().unwrap().len(), 2);
    assert_eq!(results[0].supplement, "Resveratrol");
    assert_eq!(results[0].efficacy, Some(Number::from(9)));
    assert_eq!(
        results[0].citations,
        Some(vec!["PMID:1".to_string(), "PMID:2".to_string()])
    );
}
