//! ネットワークユーティリティ
//!
//! fetchとFormDataを使ってマルチパートフォームを送信するトランスポートを提供します。

use async_trait::async_trait;
use expense_upload_common::{
    CommonError, FileEntry, FormPart, RawResponse, ResponseBody, ResponseVariant, Result,
    UploadTransport,
};
use js_sys::{Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::utils::files::BrowserFile;

/// ブラウザのfetchを使うトランスポート
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl UploadTransport for BrowserTransport {
    type File = BrowserFile;

    async fn post(
        &self,
        endpoint: &str,
        parts: &[FormPart<'_, BrowserFile>],
        variant: ResponseVariant,
    ) -> Result<RawResponse> {
        let form = build_form_data(parts).map_err(|e| CommonError::Other(js_message(&e)))?;

        // Content-Typeはブラウザが境界文字列付きで設定する
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(&form.into());

        let request = Request::new_with_str_and_init(endpoint, &init)
            .map_err(|e| CommonError::NetworkError(js_message(&e)))?;
        let window = web_sys::window()
            .ok_or_else(|| CommonError::Other("ウィンドウが見つかりません".to_string()))?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| CommonError::NetworkError(js_message(&e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| CommonError::NetworkError(js_message(&e)))?;

        let status = response.status();
        let content_type = response.headers().get("content-type").ok().flatten();
        log::debug!("レスポンスヘッダー: status={}, content-type={:?}", status, content_type);

        let body = read_body(&response, variant)
            .await
            .map_err(|e| CommonError::DecodeError(js_message(&e)))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

/// フォームのパートからFormDataを作成
fn build_form_data(parts: &[FormPart<'_, BrowserFile>]) -> std::result::Result<FormData, JsValue> {
    let form = FormData::new()?;
    for part in parts {
        match part {
            FormPart::File { field, file } => {
                form.append_with_blob_and_filename(field, file.inner(), &file.name())?;
            }
            FormPart::Text { field, value } => {
                form.append_with_str(field, value)?;
            }
        }
    }
    Ok(form)
}

/// 形式に応じて本文を読み込む
async fn read_body(
    response: &Response,
    variant: ResponseVariant,
) -> std::result::Result<ResponseBody, JsValue> {
    if variant.reads_binary() {
        let buffer = JsFuture::from(response.array_buffer()?).await?;
        Ok(ResponseBody::Binary(Uint8Array::new(&buffer).to_vec()))
    } else {
        let text = JsFuture::from(response.text()?).await?;
        Ok(ResponseBody::Text(text.as_string().unwrap_or_default()))
    }
}

/// JavaScriptのエラー値からメッセージを取り出す
pub fn js_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
