//! テーブル行モデル

/// 1行分のセルテキスト
///
/// `text` は行全体のテキスト（ブラウザでは `tr.textContent`）で、
/// セル間の空白などを含むためセルの単純連結とは一致しないことがある。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
    pub text: String,
}

impl Row {
    pub fn new(cells: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            cells,
            text: text.into(),
        }
    }

    /// セルを連結して行テキストとする
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let text = cells.concat();
        Self { cells, text }
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
