//! ユーティリティモジュール
//!
//! このモジュールには、Webクライアントで使用される様々なユーティリティ関数や構造体が含まれています。

pub mod download;
pub mod files;
pub mod format;
pub mod network;
pub mod storage;

// 主要ユーティリティを再エクスポート
pub use download::trigger_download;
pub use files::BrowserFile;
pub use network::{js_message, BrowserTransport};
