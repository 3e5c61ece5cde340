//! ファイル送信
//!
//! 選択されたファイルを設定されたエンドポイントへ送信し、結果を返します。
//! HTTP通信そのものは [`UploadTransport`] の実装 (ブラウザではfetch) が担当します。
//! タイムアウト、再試行、送信中リクエストのキャンセルは行いません。

use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::config::{ResponseVariant, UploadConfig};
use crate::error::{CommonError, Result};
use crate::form::{build_form, FormPart};
use crate::response::{interpret_response, RawResponse, SubmissionResult};
use crate::selection::{FileEntry, FileSet};

/// マルチパートフォームを送信するトランスポート
///
/// ブラウザのハンドルは `Send` ではないため、`?Send` で定義しています。
#[async_trait(?Send)]
pub trait UploadTransport {
    /// 送信できるファイルの型
    type File: FileEntry;

    /// フォームを1回だけPOSTし、本文を `variant` に応じてテキストまたはバイナリで読み込む
    async fn post(
        &self,
        endpoint: &str,
        parts: &[FormPart<'_, Self::File>],
        variant: ResponseVariant,
    ) -> Result<RawResponse>;
}

/// 送信処理
pub struct Uploader<T> {
    config: UploadConfig,
    transport: T,
    clock: fn() -> DateTime<Local>,
}

impl<T: UploadTransport> Uploader<T> {
    /// 設定とトランスポートから作成
    pub fn new(config: UploadConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            transport,
            clock: Local::now,
        })
    }

    /// 完了時刻の取得方法を差し替える
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    /// 現在の設定
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// トランスポート
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// ファイルを送信する
    ///
    /// ファイルが選択されていない場合はリクエストを送らずに `EmptySelection` を返します。
    pub async fn submit(&self, files: &FileSet<T::File>, label: &str) -> Result<SubmissionResult> {
        if !files.can_submit() {
            log::debug!("ファイルが選択されていないため送信しません");
            return Err(CommonError::EmptySelection);
        }

        let variant = self.config.variant;
        let parts = build_form(files, label, variant)?;
        log::info!(
            "{} へ {} 件のファイルを送信します (形式: {})",
            self.config.endpoint,
            files.len(),
            variant.as_str()
        );

        let raw = self
            .transport
            .post(&self.config.endpoint, &parts, variant)
            .await?;
        log::info!("レスポンスを受信しました: ステータス {}", raw.status);

        let completed_at = (self.clock)();
        let result = interpret_response(variant, self.config.failure_policy, raw, &completed_at);
        match &result {
            Ok(result) => log::debug!("送信結果: {}", result.kind()),
            Err(e) => log::warn!("送信に失敗しました: {}", e),
        }
        result
    }
}
