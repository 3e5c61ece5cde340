//! Webクライアントエントリポイント
//!
//! このクレートは、経費アップロード用のファイル送信ウィジェットを提供します。
//! WebAssemblyにコンパイルされ、ブラウザ上で実行されます。

mod app;
mod components;
mod state;
mod utils;

use expense_upload_common::UploadConfig;
use wasm_bindgen::prelude::*;
use web_sys::{window, Element};

use crate::app::{App, AppProps};
use crate::utils::storage;

/// Webクライアントの初期化
///
/// デフォルト設定にローカルストレージの保存内容を重ねてウィジェットをマウントします。
#[wasm_bindgen]
pub fn initialize() -> Result<(), JsValue> {
    init_runtime();
    mount(stored_config())
}

/// 設定を指定してWebクライアントを初期化
///
/// `config_json` は部分的なJSONでもよく、省略された項目はデフォルト値になります。
#[wasm_bindgen]
pub fn initialize_with_config(config_json: &str) -> Result<(), JsValue> {
    init_runtime();

    let mut config = UploadConfig::default();
    config
        .merge_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    mount(config)
}

/// 設定をローカルストレージに保存 (次回の `initialize` から有効)
///
/// 保存済みの設定に `config_json` を重ねるため、以前の上書き内容は残ります。
#[wasm_bindgen]
pub fn save_config(config_json: &str) -> Result<(), JsValue> {
    let mut config = stored_config();
    config
        .merge_json(config_json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    storage::save_settings(&config)
}

/// バージョン情報を取得
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// 保存された設定を読み込む (未保存または不正な場合はデフォルト設定)
fn stored_config() -> UploadConfig {
    storage::load_settings::<UploadConfig>()
        .filter(|config| match config.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("保存された設定が不正なため破棄します: {}", e);
                false
            }
        })
        .unwrap_or_default()
}

/// パニックフックとロガーを設定
fn init_runtime() {
    // パニック時のフックを設定
    #[cfg(feature = "development")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    // ロガーを初期化
    wasm_logger::init(wasm_logger::Config::default());
}

/// アプリケーションコンテナを取得してウィジェットをマウント
fn mount(config: UploadConfig) -> Result<(), JsValue> {
    log::info!(
        "Webクライアントを初期化中... (送信先: {}, 形式: {})",
        config.endpoint,
        config.variant.as_str()
    );

    let container = app_container()?;
    yew::Renderer::<App>::with_root_and_props(container, AppProps { config }).render();

    log::info!("Webクライアントの初期化が完了しました");
    Ok(())
}

/// `#app` 要素を取得 (存在しない場合は作成)
fn app_container() -> Result<Element, JsValue> {
    let window = window().ok_or_else(|| JsValue::from_str("ウィンドウが見つかりません"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("ドキュメントが見つかりません"))?;

    if let Some(container) = document.get_element_by_id("app") {
        return Ok(container);
    }

    log::warn!("アプリケーションコンテナが見つかりません。新しく作成します。");
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("ドキュメントのボディが見つかりません"))?;

    let app_div = document.create_element("div")?;
    app_div.set_id("app");
    app_div.set_class_name("expense-upload-app");
    body.append_child(&app_div)?;

    Ok(app_div)
}
