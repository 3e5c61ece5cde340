//! レスポンス処理
//!
//! サーバーからのレスポンスを、画像表示またはダウンロードのどちらかの結果に変換します。

use chrono::Datelike;

use crate::config::{FailurePolicy, ResponseVariant};
use crate::error::{CommonError, Result};
use crate::naming::download_filename;

/// ダウンロード時に使うデフォルトのMIMEタイプ
pub const DEFAULT_ARCHIVE_MIME: &str = "application/zip";

/// アーカイブとして受け付けるContent-Type
const ARCHIVE_CONTENT_TYPES: [&str; 4] = [
    "application/zip",
    "application/x-zip-compressed",
    "application/x-zip",
    "application/octet-stream",
];

/// レスポンス本文
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// テキストとして読み込んだ本文
    Text(String),
    /// バイナリとして読み込んだ本文
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// 本文の先頭をテキストとして取得 (エラー表示用)
    fn preview(&self) -> String {
        match self {
            ResponseBody::Text(text) => text.clone(),
            ResponseBody::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    fn into_text(self) -> Result<String> {
        match self {
            ResponseBody::Text(text) => Ok(text),
            ResponseBody::Binary(bytes) => String::from_utf8(bytes)
                .map_err(|e| CommonError::DecodeError(e.to_string())),
        }
    }

    fn into_bytes(self) -> Vec<u8> {
        match self {
            ResponseBody::Text(text) => text.into_bytes(),
            ResponseBody::Binary(bytes) => bytes,
        }
    }
}

/// トランスポートから受け取った生のレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// Content-Typeヘッダー
    pub content_type: Option<String>,
    /// 本文
    pub body: ResponseBody,
}

impl RawResponse {
    /// 2xxかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// パラメータを除いたMIMEタイプ (小文字)
    pub fn mime_essence(&self) -> Option<String> {
        self.content_type.as_ref().map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        })
    }
}

/// 送信結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// そのまま画像のsrcとして使う値
    Image {
        /// 画像のsrc
        src: String,
    },
    /// ダウンロードさせるファイル
    Download {
        /// ファイル名
        filename: String,
        /// MIMEタイプ
        content_type: String,
        /// 中身
        bytes: Vec<u8>,
    },
}

impl SubmissionResult {
    /// 結果の種類 (ログ用)
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionResult::Image { .. } => "image",
            SubmissionResult::Download { .. } => "download",
        }
    }
}

/// レスポンスを送信結果に変換する
///
/// `completed_at` はレスポンス本文を読み終えた時刻で、ダウンロードファイル名に使われます。
/// `FailurePolicy::PassThrough` の場合はステータスもContent-Typeも確認せずに本文を使います。
pub fn interpret_response<D: Datelike>(
    variant: ResponseVariant,
    policy: FailurePolicy,
    raw: RawResponse,
    completed_at: &D,
) -> Result<SubmissionResult> {
    let strict = policy == FailurePolicy::Strict;

    if strict && !raw.is_success() {
        return Err(CommonError::http_status(raw.status, &raw.body.preview()));
    }
    if !raw.is_success() {
        log::warn!("ステータス {} を無視して本文を使用します", raw.status);
    }

    match variant {
        ResponseVariant::Image => {
            let src = raw.body.into_text()?;
            if strict && src.trim().is_empty() {
                return Err(CommonError::EmptyResponse);
            }
            Ok(SubmissionResult::Image { src })
        }
        ResponseVariant::Archive => {
            let essence = raw.mime_essence().filter(|mime| !mime.is_empty());
            if strict {
                if let Some(mime) = &essence {
                    if !ARCHIVE_CONTENT_TYPES.contains(&mime.as_str()) {
                        return Err(CommonError::UnexpectedContentType(mime.clone()));
                    }
                }
            }

            let content_type = essence.unwrap_or_else(|| DEFAULT_ARCHIVE_MIME.to_string());
            Ok(SubmissionResult::Download {
                filename: download_filename(completed_at),
                content_type,
                bytes: raw.body.into_bytes(),
            })
        }
    }
}
