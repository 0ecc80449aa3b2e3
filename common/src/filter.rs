//! 行フィルタ判定モジュール
//!
//! テキスト一致と日付一致の2条件で各行の表示/非表示を決める。
//! DOMには触れない純粋関数のみ。

use crate::row::Row;

/// 入力欄から読み取ったフィルタ値
///
/// 評価のたびに入力欄から作り直し、保持はしない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// 前後空白を除去し小文字化した名前フィルタ
    pub name: String,
    /// 日付フィルタ（入力値そのまま）
    pub date: String,
}

impl FilterState {
    /// 入力欄の値からフィルタ状態を作る
    ///
    /// 入力欄が存在しない場合は `None` を渡す（その条件は常に一致）。
    pub fn from_inputs(name: Option<&str>, date: Option<&str>) -> Self {
        Self {
            name: name.map(|v| v.trim().to_lowercase()).unwrap_or_default(),
            date: date.map(str::to_string).unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.date.is_empty()
    }
}

/// 行の表示状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// `style.display` に設定する値
    pub fn as_display(&self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "none",
        }
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

impl From<bool> for Visibility {
    fn from(shown: bool) -> Self {
        if shown {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }
}

/// テキスト一致判定
pub fn text_matches(state: &FilterState, row: &Row) -> bool {
    if state.name.is_empty() {
        return true;
    }
    row.text.to_lowercase().contains(&state.name)
}

/// 日付一致判定
///
/// 日付列まで届かない行は、日付フィルタが有効なら不一致。
pub fn date_matches(state: &FilterState, row: &Row, date_column: usize) -> bool {
    if state.date.is_empty() {
        return true;
    }
    match row.cell(date_column) {
        Some(cell) => cell.trim().contains(state.date.as_str()),
        None => false,
    }
}

pub fn is_visible(state: &FilterState, row: &Row, date_column: usize) -> bool {
    text_matches(state, row) && date_matches(state, row, date_column)
}

/// 全行の表示状態を計算（入力順を保持）
pub fn compute_visibility(state: &FilterState, rows: &[Row], date_column: usize) -> Vec<Visibility> {
    rows.iter()
        .map(|row| Visibility::from(is_visible(state, row, date_column)))
        .collect()
}
