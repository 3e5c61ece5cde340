//! エラー型定義
//!
//! ファイル送信ウィジェットで使用する共通エラー型を定義します。

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;

/// 共通エラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommonError {
    /// ファイルが選択されていない
    #[error("送信するファイルが選択されていません")]
    EmptySelection,

    /// ネットワークエラー (レスポンスを取得できなかった)
    #[error("ネットワークエラー: {0}")]
    NetworkError(String),

    /// 2xx以外のステータス
    #[error("サーバーがステータス {status} を返しました: {body_preview}")]
    HttpStatus {
        /// HTTPステータスコード
        status: u16,
        /// レスポンス本文の先頭部分
        body_preview: String,
    },

    /// 画像として使える本文が返されなかった
    #[error("レスポンス本文が空です")]
    EmptyResponse,

    /// 想定外のContent-Type
    #[error("想定外のContent-Typeです: {0}")]
    UnexpectedContentType(String),

    /// 本文の読み取りエラー
    #[error("レスポンスの読み取りに失敗しました: {0}")]
    DecodeError(String),

    /// 設定エラー
    #[error("設定エラー: {0}")]
    ConfigError(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

impl CommonError {
    /// 対応するエラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            CommonError::EmptySelection => ErrorCode::EmptySelection,
            CommonError::NetworkError(_) => ErrorCode::NetworkError,
            CommonError::HttpStatus { .. } => ErrorCode::HttpStatus,
            CommonError::EmptyResponse => ErrorCode::EmptyResponse,
            CommonError::UnexpectedContentType(_) => ErrorCode::UnexpectedContentType,
            CommonError::DecodeError(_) => ErrorCode::DecodeError,
            CommonError::ConfigError(_) => ErrorCode::ConfigError,
            CommonError::Other(_) => ErrorCode::Other,
        }
    }

    /// ステータスエラーを作成 (本文は先頭のみ保持)
    pub fn http_status(status: u16, body: &str) -> Self {
        const PREVIEW_CHARS: usize = 120;
        let body_preview: String = body.chars().take(PREVIEW_CHARS).collect();
        CommonError::HttpStatus { status, body_preview }
    }
}

impl From<ConfigError> for CommonError {
    fn from(err: ConfigError) -> Self {
        CommonError::ConfigError(err.to_string())
    }
}

/// エラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// ファイル未選択
    EmptySelection = 1,
    /// ネットワークエラー
    NetworkError = 2,
    /// HTTPステータスエラー
    HttpStatus = 3,
    /// 空のレスポンス
    EmptyResponse = 4,
    /// Content-Type不一致
    UnexpectedContentType = 5,
    /// 読み取りエラー
    DecodeError = 6,
    /// 設定エラー
    ConfigError = 7,
    /// その他のエラー
    Other = 99,
}

impl ErrorCode {
    /// エラーコードから文字列表現を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptySelection => "EmptySelection",
            ErrorCode::NetworkError => "NetworkError",
            ErrorCode::HttpStatus => "HttpStatus",
            ErrorCode::EmptyResponse => "EmptyResponse",
            ErrorCode::UnexpectedContentType => "UnexpectedContentType",
            ErrorCode::DecodeError => "DecodeError",
            ErrorCode::ConfigError => "ConfigError",
            ErrorCode::Other => "Other",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 結果型のエイリアス
pub type Result<T> = std::result::Result<T, CommonError>;
