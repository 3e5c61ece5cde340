//! 設定管理
//!
//! 送信先エンドポイントやレスポンスの扱いなど、ウィジェットの設定を提供します。
//! 設定は起動時に注入され、ブラウザ側ではJSONとしてローカルストレージに保存されます。

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// デフォルトの送信先
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3333";

/// オブジェクトURLを解放するまでのデフォルト待機時間 (ミリ秒)
pub const DEFAULT_REVOKE_DELAY_MS: u32 = 150;

/// 待機時間の上限 (ミリ秒)
const MAX_REVOKE_DELAY_MS: u32 = 60_000;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON エラー
    #[error("JSONの解析に失敗しました: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 設定がオブジェクトではない
    #[error("設定はJSONオブジェクトである必要があります")]
    NotAnObject,

    /// 不正なエンドポイント
    #[error("エンドポイント '{0}' はhttp://またはhttps://で始まる必要があります")]
    InvalidEndpoint(String),

    /// 不正な待機時間
    #[error("revoke_delay_ms は60000以下である必要があります (指定値: {0})")]
    InvalidRevokeDelay(u32),

    /// 不正な拡張子フィルタ
    #[error("拡張子フィルタ '{0}' はドットで始まる必要があります")]
    InvalidAcceptEntry(String),
}

/// レスポンスの扱い方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseVariant {
    /// 本文をテキストとして読み、そのまま画像のsrcに使う
    Image,
    /// 本文をバイナリとして読み、zipとしてダウンロードさせる
    #[default]
    Archive,
}

impl ResponseVariant {
    /// ラベル (`name` フィールド) を送信するか
    pub fn sends_label(&self) -> bool {
        matches!(self, ResponseVariant::Archive)
    }

    /// 本文をバイナリとして読むか
    pub fn reads_binary(&self) -> bool {
        matches!(self, ResponseVariant::Archive)
    }

    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseVariant::Image => "image",
            ResponseVariant::Archive => "archive",
        }
    }
}

/// 失敗時の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// ステータスとContent-Typeを検証し、失敗を利用者に表示する
    #[default]
    Strict,
    /// ステータスを無視して本文をそのまま使う
    PassThrough,
}

/// アップロード設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// 送信先URL
    pub endpoint: String,
    /// レスポンスの扱い方
    pub variant: ResponseVariant,
    /// 失敗時の扱い
    pub failure_policy: FailurePolicy,
    /// ダウンロード後にオブジェクトURLを解放するまでの時間 (ミリ秒)
    pub revoke_delay_ms: u32,
    /// ファイル選択ダイアログの拡張子フィルタ
    pub accept: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            variant: ResponseVariant::default(),
            failure_policy: FailurePolicy::default(),
            revoke_delay_ms: DEFAULT_REVOKE_DELAY_MS,
            accept: crate::selection::DEFAULT_ACCEPT
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl UploadConfig {
    /// 指定したエンドポイントでデフォルト設定を作成
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// JSON文字列から設定を読み込む (省略された項目はデフォルト値)
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: UploadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON文字列に変換
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// 部分的なJSONで現在の設定を上書きする
    pub fn merge_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let overrides: Value = serde_json::from_str(json)?;
        let overrides = match overrides {
            Value::Object(map) => map,
            _ => return Err(ConfigError::NotAnObject),
        };

        let mut current = match serde_json::to_value(&*self)? {
            Value::Object(map) => map,
            _ => return Err(ConfigError::NotAnObject),
        };

        for (key, value) in overrides {
            if current.contains_key(&key) {
                current.insert(key, value);
            } else {
                log::warn!("未知の設定キーを無視します: {}", key);
            }
        }

        let merged: UploadConfig = serde_json::from_value(Value::Object(current))?;
        merged.validate()?;
        *self = merged;
        Ok(())
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        let host = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"));
        match host {
            Some(rest) if !rest.is_empty() => {}
            _ => return Err(ConfigError::InvalidEndpoint(self.endpoint.clone())),
        }

        if self.revoke_delay_ms > MAX_REVOKE_DELAY_MS {
            return Err(ConfigError::InvalidRevokeDelay(self.revoke_delay_ms));
        }

        if let Some(entry) = self.accept.iter().find(|entry| !entry.starts_with('.')) {
            return Err(ConfigError::InvalidAcceptEntry(entry.clone()));
        }

        Ok(())
    }
}
