//! ダウンロードユーティリティ
//!
//! 受信したバイト列を一時的なオブジェクトURLにし、アンカー要素のクリックでダウンロードさせます。

use gloo::file::{Blob, ObjectUrl};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlAnchorElement};

/// バイト列をファイルとしてダウンロードさせる
///
/// ブラウザはダウンロード完了を通知しないため、オブジェクトURLは
/// `revoke_delay_ms` 経過後に解放します (完了を保証するものではありません)。
pub fn trigger_download(
    filename: &str,
    content_type: &str,
    bytes: &[u8],
    revoke_delay_ms: u32,
) -> Result<(), JsValue> {
    let document = window()
        .and_then(|win| win.document())
        .ok_or_else(|| JsValue::from_str("ドキュメントが見つかりません"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("ドキュメントのボディが見つかりません"))?;

    // ObjectUrlはドロップ時に解放される
    let url = ObjectUrl::from(Blob::new_with_options(bytes, Some(content_type)));

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.set_attribute("style", "display: none")?;

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    log::info!("ダウンロードを開始しました: {} ({} バイト)", filename, bytes.len());

    Timeout::new(revoke_delay_ms, move || {
        log::debug!("オブジェクトURLを解放します");
        drop(url);
    })
    .forget();

    Ok(())
}
