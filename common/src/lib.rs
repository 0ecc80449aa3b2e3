//! Tabla Filtros Common Library
//!
//! テーブル行フィルタの設定・行モデル・判定ロジック。
//! ブラウザ(WASM)側から利用され、DOMに依存しない。

pub mod config;
pub mod error;
pub mod filter;
pub mod row;

pub use config::{default_configs, FilterConfig, DEFAULT_DATE_COLUMN};
pub use error::{Error, Result};
pub use filter::{compute_visibility, date_matches, is_visible, text_matches, FilterState, Visibility};
pub use row::Row;
