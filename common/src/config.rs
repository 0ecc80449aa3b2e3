//! フィルタ設定モジュール
//!
//! 入力欄ID・テーブルセレクタ・日付列の組を1テーブル分の設定として扱う。

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// 日付列のデフォルト位置（2列目）
pub const DEFAULT_DATE_COLUMN: usize = 1;

fn default_date_column() -> usize {
    DEFAULT_DATE_COLUMN
}

/// `null` も未指定と同じく既定列として扱う
fn deserialize_date_column<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or(DEFAULT_DATE_COLUMN))
}

/// 1テーブル分のフィルタ設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// 名前・テキスト入力欄のID（未指定なら名前フィルタ無効）
    #[serde(default)]
    pub name_input_id: String,
    /// 日付入力欄のID（未指定なら日付フィルタ無効）
    #[serde(default)]
    pub date_input_id: String,
    /// テーブルのCSSセレクタ
    pub table_selector: String,
    /// 日付比較に使う列（0始まり）
    #[serde(default = "default_date_column", deserialize_with = "deserialize_date_column")]
    pub date_column_index: usize,
}

impl FilterConfig {
    pub fn new(
        name_input_id: impl Into<String>,
        date_input_id: impl Into<String>,
        table_selector: impl Into<String>,
    ) -> Self {
        Self {
            name_input_id: name_input_id.into(),
            date_input_id: date_input_id.into(),
            table_selector: table_selector.into(),
            date_column_index: DEFAULT_DATE_COLUMN,
        }
    }

    /// 日付列を指定
    pub fn with_date_column(mut self, index: usize) -> Self {
        self.date_column_index = index;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<()> {
        if self.table_selector.trim().is_empty() {
            return Err(Error::Config(format!(
                "tableSelector が空です (nameInputId={})",
                self.name_input_id
            )));
        }
        Ok(())
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// JSON配列から複数の設定を読み込み
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let configs: Vec<Self> = serde_json::from_str(json)?;
        Ok(configs)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(feature = "wasm"))]
    pub fn list_from_file(path: &std::path::Path) -> Result<Vec<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::list_from_json(&content)
    }
}

/// ページ読み込み時に登録する既定のテーブル設定
///
/// 商品・顧客・請求書の各一覧画面に対応する。
pub fn default_configs() -> Vec<FilterConfig> {
    vec![
        FilterConfig::new("productos_filter_name", "productos_filter_date", ".table")
            .with_date_column(4),
        FilterConfig::new("clientes_filter_name", "clientes_filter_date", ".table"),
        FilterConfig::new("facturas_filter_name", "facturas_filter_date", ".table"),
    ]
}
