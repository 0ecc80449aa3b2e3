//! Tabla Filtros (WASM)
//!
//! サーバー描画済みの一覧テーブルに名前・日付フィルタを付ける。

#[macro_use]
mod logging;

pub mod dom;
pub mod registry;

use gloo::events::EventListener;
use tabla_filtros_common::{default_configs, FilterConfig};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub use registry::{register, register_all, register_one, Registration, RegistrationReport};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Some(document) = current_document() {
        init(&document);
    }
}

/// 既定のテーブル設定を登録
///
/// DOM構築前なら `DOMContentLoaded` まで待つ。
pub fn init(document: &Document) {
    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(document, "DOMContentLoaded", move |_| {
            register_all(&target, &default_configs());
        })
        .forget();
    } else {
        register_all(document, &default_configs());
    }
}

/// JSから1テーブル分のフィルタを登録
///
/// `options`: `{ nameInputId, dateInputId, tableSelector, dateColumnIndex }`
/// 登録できなかった場合（不正なoptionsを含む）は `false` を返す。
#[wasm_bindgen(js_name = "initTableFilters")]
pub fn init_table_filters(options: JsValue) -> bool {
    let config: FilterConfig = match serde_wasm_bindgen::from_value(options) {
        Ok(config) => config,
        Err(e) => {
            warn_log!("[tabla-filtros] 不正なフィルタ設定: {}", e);
            return false;
        }
    };
    let Some(document) = current_document() else {
        return false;
    };

    register_one(&document, &config).registered
}

/// JSから複数テーブル分のフィルタを登録し、各結果を配列で返す
///
/// 不正なoptionsの場合は空配列。
#[wasm_bindgen(js_name = "initTableFiltersAll")]
pub fn init_table_filters_all(options: JsValue) -> JsValue {
    let configs: Vec<FilterConfig> = match serde_wasm_bindgen::from_value(options) {
        Ok(configs) => configs,
        Err(e) => {
            warn_log!("[tabla-filtros] 不正なフィルタ設定: {}", e);
            return js_sys::Array::new().into();
        }
    };
    let Some(document) = current_document() else {
        return js_sys::Array::new().into();
    };

    let reports = register_all(&document, &configs);
    serde_wasm_bindgen::to_value(&reports).unwrap_or_else(|e| {
        warn_log!("[tabla-filtros] 登録結果の変換失敗: {}", e);
        js_sys::Array::new().into()
    })
}

fn current_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}
