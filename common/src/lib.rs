//! 経費アップロード共通ライブラリ
//!
//! このクレートは、ファイル送信ウィジェットの中核となる処理を提供します。
//! ブラウザに依存しないため、WebAssemblyとネイティブの両方でビルド・テストできます。

pub mod config;
pub mod error;
pub mod form;
pub mod naming;
pub mod response;
pub mod selection;
pub mod submit;

// 主要コンポーネントを再エクスポート
pub use config::{FailurePolicy, ResponseVariant, UploadConfig};
pub use error::{CommonError, ErrorCode, Result};
pub use form::{build_form, file_field_name, FormPart};
pub use naming::download_filename;
pub use response::{interpret_response, RawResponse, ResponseBody, SubmissionResult};
pub use selection::{AcceptFilter, FileEntry, FileSet};
pub use submit::{UploadTransport, Uploader};

/// ライブラリのバージョン
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
