//! DOMバインディング
//!
//! 設定に従ってテーブルと入力欄を探し、行の読み取りと表示切替を行う。
//! 表示/非表示の判定自体は `tabla_filtros_common::filter` に任せる。

use tabla_filtros_common::{
    compute_visibility, Error, FilterConfig, FilterState, Result, Row, Visibility,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// データ行のセレクタ
const ROW_SELECTOR: &str = "tbody tr";
/// セルのセレクタ
const CELL_SELECTOR: &str = "td";

pub(crate) fn dom_error(err: JsValue) -> Error {
    Error::Dom(format!("{:?}", err))
}

/// フィルタ値を読み取る入力欄
///
/// `<input>` / `<select>` / `<textarea>` のいずれか。
pub enum FilterInput {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
    TextArea(HtmlTextAreaElement),
}

impl FilterInput {
    /// IDで入力欄を探す（値を持たない要素は無視）
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?;
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Some(Self::Input(input)),
            Err(element) => element,
        };
        let element = match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => return Some(Self::Select(select)),
            Err(element) => element,
        };
        element.dyn_into::<HtmlTextAreaElement>().ok().map(Self::TextArea)
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    pub fn event_target(&self) -> &EventTarget {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::Select(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }
}

/// 1テーブル分の要素参照
pub struct TableBinding {
    table: Element,
    name_input: Option<FilterInput>,
    date_input: Option<FilterInput>,
    date_column: usize,
}

impl TableBinding {
    /// 設定に対応する要素を探す
    ///
    /// テーブルが見つからなければ `Error::TableNotFound`。
    /// 入力欄は無くてもよい（その条件は無効になる）。
    pub fn locate(document: &Document, config: &FilterConfig) -> Result<Self> {
        config.validate()?;

        let table = document
            .query_selector(&config.table_selector)
            .map_err(dom_error)?
            .ok_or_else(|| Error::TableNotFound(config.table_selector.clone()))?;

        Ok(Self {
            table,
            name_input: FilterInput::find(document, &config.name_input_id),
            date_input: FilterInput::find(document, &config.date_input_id),
            date_column: config.date_column_index,
        })
    }

    pub fn name_input(&self) -> Option<&FilterInput> {
        self.name_input.as_ref()
    }

    pub fn date_input(&self) -> Option<&FilterInput> {
        self.date_input.as_ref()
    }

    /// 入力欄の現在値からフィルタ状態を作る
    pub fn filter_state(&self) -> FilterState {
        let name = self.name_input.as_ref().map(FilterInput::value);
        let date = self.date_input.as_ref().map(FilterInput::value);
        FilterState::from_inputs(name.as_deref(), date.as_deref())
    }

    /// tbody内の行を読み取る（評価のたびに取り直す）
    fn rows(&self) -> Result<Vec<(HtmlElement, Row)>> {
        let nodes = self
            .table
            .query_selector_all(ROW_SELECTOR)
            .map_err(dom_error)?;

        let mut rows = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };

            let cell_nodes = element.query_selector_all(CELL_SELECTOR).map_err(dom_error)?;
            let cells = (0..cell_nodes.length())
                .filter_map(|j| cell_nodes.get(j))
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect();
            let text = element.text_content().unwrap_or_default();

            rows.push((element, Row::new(cells, text)));
        }
        Ok(rows)
    }

    /// フィルタを評価して各行の `display` を更新
    pub fn apply_filters(&self) -> Result<Vec<Visibility>> {
        let state = self.filter_state();
        let (elements, rows): (Vec<HtmlElement>, Vec<Row>) = self.rows()?.into_iter().unzip();

        let visibility = compute_visibility(&state, &rows, self.date_column);
        for (element, v) in elements.iter().zip(&visibility) {
            element
                .style()
                .set_property("display", v.as_display())
                .map_err(dom_error)?;
        }
        Ok(visibility)
    }
}
