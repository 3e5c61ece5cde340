//! Webクライアントのコンポーネントモジュール
//!
//! このモジュールには、ファイル送信ウィジェットを構成するYewコンポーネントが含まれています。

pub mod file_list;
pub mod result_view;
pub mod upload_form;

// 主要コンポーネントをre-export
pub use file_list::FileList;
pub use result_view::ResultView;
pub use upload_form::UploadForm;
