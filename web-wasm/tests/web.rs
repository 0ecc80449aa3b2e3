//! ブラウザ上での登録・フィルタ適用テスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行する。

#![cfg(target_arch = "wasm32")]

use tabla_filtros_common::{default_configs, FilterConfig};
use tabla_filtros_wasm::{init, init_table_filters, register, register_all};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// テスト用のテーブルと入力欄を作る
fn fixture(prefix: &str, with_date_input: bool) -> Element {
    let doc = document();
    let container = doc.create_element("div").unwrap();
    let date_input = if with_date_input {
        format!(r#"<input type="text" id="{prefix}_date">"#)
    } else {
        String::new()
    };
    container.set_inner_html(&format!(
        r#"<input type="text" id="{prefix}_name">{date_input}
        <table id="{prefix}_table">
            <thead><tr><th>Nombre</th><th>Fecha</th></tr></thead>
            <tbody>
                <tr><td>Widget A</td><td> 2024-01-01 </td></tr>
                <tr><td>Gadget B</td><td>2023-05-05</td></tr>
                <tr><td>Sin fecha</td></tr>
            </tbody>
        </table>"#
    ));
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn config(prefix: &str) -> FilterConfig {
    FilterConfig::new(
        format!("{prefix}_name"),
        format!("{prefix}_date"),
        format!("#{prefix}_table"),
    )
}

/// 入力欄に値を設定してイベントを発火（input/select共通）
fn type_into(id: &str, value: &str, event: &str) {
    let el = document().get_element_by_id(id).unwrap();
    js_sys::Reflect::set(&el, &"value".into(), &value.into()).unwrap();
    let target: &EventTarget = el.as_ref();
    target.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

/// 表示中の行の1列目テキスト
fn visible_rows(prefix: &str) -> Vec<String> {
    visible_rows_in(&format!("#{prefix}_table"))
}

fn visible_rows_in(table_selector: &str) -> Vec<String> {
    let rows = document()
        .query_selector_all(&format!("{table_selector} tbody tr"))
        .unwrap();
    (0..rows.length())
        .filter_map(|i| rows.get(i))
        .map(|n| n.dyn_into::<HtmlElement>().unwrap())
        .filter(|row| row.style().get_property_value("display").unwrap() != "none")
        .map(|row| row.query_selector("td").unwrap().unwrap().text_content().unwrap())
        .collect()
}

#[wasm_bindgen_test]
fn test_name_filter_on_input_event() {
    let container = fixture("t1", true);
    let registration = register(&document(), &config("t1")).unwrap();
    assert!(registration.name_filter);
    assert!(registration.date_filter);

    type_into("t1_name", "  WIDGET ", "input");
    assert_eq!(visible_rows("t1"), vec!["Widget A"]);

    // 空に戻すと全行表示
    type_into("t1_name", "", "input");
    assert_eq!(visible_rows("t1").len(), 3);

    container.remove();
}

#[wasm_bindgen_test]
fn test_date_filter_on_change_event() {
    let container = fixture("t2", true);
    register(&document(), &config("t2")).unwrap();

    type_into("t2_date", "2023", "change");
    assert_eq!(visible_rows("t2"), vec!["Gadget B"]);

    // 日付欄はinputイベントでは再評価しない
    type_into("t2_date", "2024", "input");
    assert_eq!(visible_rows("t2"), vec!["Gadget B"]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_both_filters_hide_everything() {
    let container = fixture("t3", true);
    register(&document(), &config("t3")).unwrap();

    type_into("t3_date", "2023", "change");
    type_into("t3_name", "widget", "input");
    assert!(visible_rows("t3").is_empty());

    container.remove();
}

#[wasm_bindgen_test]
fn test_missing_date_input_disables_date_filter() {
    let container = fixture("t4", false);
    let registration = register(&document(), &config("t4")).unwrap();
    assert!(registration.name_filter);
    assert!(!registration.date_filter);

    type_into("t4_name", "a", "input");
    assert_eq!(visible_rows("t4"), vec!["Widget A", "Gadget B", "Sin fecha"]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_missing_table_does_not_block_others() {
    let container = fixture("t5", true);
    let configs = vec![
        FilterConfig::new("nope_name", "nope_date", "#does_not_exist"),
        FilterConfig::new("t5_name", "t5_date", "##invalid"),
        config("t5"),
    ];

    let reports = register_all(&document(), &configs);
    assert_eq!(reports.len(), 3);
    assert!(!reports[0].registered);
    assert!(reports[0].error.as_deref().unwrap().contains("Table not found"));
    assert!(!reports[1].registered);
    assert!(reports[2].registered);

    type_into("t5_name", "gadget", "input");
    assert_eq!(visible_rows("t5"), vec!["Gadget B"]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_reapply_is_idempotent() {
    let container = fixture("t6", true);
    register(&document(), &config("t6")).unwrap();

    type_into("t6_date", "01", "change");
    let first = visible_rows("t6");
    type_into("t6_date", "01", "change");
    assert_eq!(visible_rows("t6"), first);
    assert_eq!(first, vec!["Widget A"]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_init_registers_default_tables() {
    let doc = document();
    let container = doc.create_element("div").unwrap();
    container.set_inner_html(
        r#"<input type="text" id="productos_filter_name">
        <input type="date" id="productos_filter_date">
        <table class="table">
            <thead><tr><th>Código</th><th>Nombre</th><th>Stock</th><th>Precio</th><th>Alta</th></tr></thead>
            <tbody>
                <tr><td>P-01</td><td>Tornillo</td><td>10</td><td>2023-01-01</td><td>2024-02-10</td></tr>
                <tr><td>P-02</td><td>Tuerca</td><td>5</td><td>2024-02-10</td><td>2023-07-01</td></tr>
                <tr><td>P-03</td><td>Arandela</td></tr>
            </tbody>
        </table>"#,
    );
    doc.body().unwrap().append_child(&container).unwrap();

    init(&doc);

    // 日付は5列目で比較する（4列目の日付には反応しない）
    type_into("productos_filter_date", "2024-02-10", "change");
    assert_eq!(visible_rows_in(".table"), vec!["P-01"]);

    type_into("productos_filter_date", "", "change");
    type_into("productos_filter_name", "tuerca", "input");
    assert_eq!(visible_rows_in(".table"), vec!["P-02"]);

    // 顧客・請求書の設定は入力欄がないので両条件とも無効
    let reports = register_all(&doc, &default_configs()[1..]);
    assert!(reports.iter().all(|r| r.registered && !r.name_filter && !r.date_filter));
    type_into("productos_filter_name", "", "input");
    assert_eq!(visible_rows_in(".table").len(), 3);

    container.remove();
}

#[wasm_bindgen_test]
fn test_select_as_date_input() {
    let doc = document();
    let container = fixture("t7", false);
    let select = doc.create_element("select").unwrap();
    select.set_id("t7_date");
    select.set_inner_html(r#"<option value="">-</option><option value="2023">2023</option>"#);
    container.append_child(&select).unwrap();

    let registration = register(&doc, &config("t7")).unwrap();
    assert!(registration.date_filter);

    type_into("t7_date", "2023", "change");
    assert_eq!(visible_rows("t7"), vec!["Gadget B"]);

    container.remove();
}

#[wasm_bindgen_test]
fn test_init_table_filters_lenient_options() {
    let container = fixture("t8", true);

    // dateInputId 省略・dateColumnIndex null でも登録できる
    let options = js_sys::JSON::parse(
        r##"{ "nameInputId": "t8_name", "tableSelector": "#t8_table", "dateColumnIndex": null }"##,
    )
    .unwrap();
    assert!(init_table_filters(options));

    type_into("t8_date", "2023", "change");
    assert_eq!(visible_rows("t8").len(), 3);
    type_into("t8_name", "gadget", "input");
    assert_eq!(visible_rows("t8"), vec!["Gadget B"]);

    // 不正なoptionsは例外にせず false
    assert!(!init_table_filters(js_sys::JSON::parse("42").unwrap()));
    let missing = js_sys::JSON::parse(r##"{ "tableSelector": "#nope_table" }"##).unwrap();
    assert!(!init_table_filters(missing));

    container.remove();
}
