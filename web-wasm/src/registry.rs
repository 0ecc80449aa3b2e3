//! テーブルフィルタの登録
//!
//! 設定ごとに独立して登録し、1件の失敗が他の登録を妨げないようにする。

use std::rc::Rc;

use gloo::events::EventListener;
use serde::Serialize;
use tabla_filtros_common::{FilterConfig, Result};
use web_sys::Document;

use crate::dom::TableBinding;

/// 登録結果（有効になったフィルタ条件）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub name_filter: bool,
    pub date_filter: bool,
}

/// 1設定分の登録レポート（JS側へ返す）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationReport {
    pub name_input_id: String,
    pub table_selector: String,
    pub registered: bool,
    pub name_filter: bool,
    pub date_filter: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegistrationReport {
    fn new(config: &FilterConfig, outcome: &Result<Registration>) -> Self {
        let (registration, error) = match outcome {
            Ok(registration) => (Some(*registration), None),
            Err(e) => (None, Some(e.to_string())),
        };

        Self {
            name_input_id: config.name_input_id.clone(),
            table_selector: config.table_selector.clone(),
            registered: registration.is_some(),
            name_filter: registration.is_some_and(|r| r.name_filter),
            date_filter: registration.is_some_and(|r| r.date_filter),
            error,
        }
    }
}

/// 1テーブル分のフィルタを登録
///
/// 名前欄は `input`（キー入力ごと）、日付欄は `change`（確定時）で再評価する。
pub fn register(document: &Document, config: &FilterConfig) -> Result<Registration> {
    let binding = Rc::new(TableBinding::locate(document, config)?);

    let registration = Registration {
        name_filter: binding.name_input().is_some(),
        date_filter: binding.date_input().is_some(),
    };

    if let Some(input) = binding.name_input() {
        let binding = Rc::clone(&binding);
        EventListener::new(input.event_target(), "input", move |_| run_filters(&binding)).forget();
    } else {
        info_log!("[tabla-filtros] #{} が見つからないため名前フィルタは無効", config.name_input_id);
    }

    if let Some(input) = binding.date_input() {
        let binding = Rc::clone(&binding);
        EventListener::new(input.event_target(), "change", move |_| run_filters(&binding)).forget();
    } else {
        info_log!("[tabla-filtros] #{} が見つからないため日付フィルタは無効", config.date_input_id);
    }

    Ok(registration)
}

fn run_filters(binding: &TableBinding) {
    if let Err(e) = binding.apply_filters() {
        warn_log!("[tabla-filtros] フィルタ適用失敗: {}", e);
    }
}

/// 1設定を登録してレポートを返す（エラーは伝播させない）
pub fn register_one(document: &Document, config: &FilterConfig) -> RegistrationReport {
    let outcome = register(document, config);
    match &outcome {
        Ok(r) => info_log!(
            "[tabla-filtros] {} を登録 (name={}, date={})",
            config.table_selector,
            r.name_filter,
            r.date_filter
        ),
        Err(e) => warn_log!("[tabla-filtros] {} の登録をスキップ: {}", config.name_input_id, e),
    }
    RegistrationReport::new(config, &outcome)
}

/// 複数設定を順に登録
pub fn register_all(document: &Document, configs: &[FilterConfig]) -> Vec<RegistrationReport> {
    configs
        .iter()
        .map(|config| register_one(document, config))
        .collect()
}
