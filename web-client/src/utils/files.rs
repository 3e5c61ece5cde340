//! ブラウザのファイルハンドル
//!
//! `<input type="file">` で選択された `File` を共通ライブラリのファイルとして扱います。

use expense_upload_common::FileEntry;
use web_sys::{File, HtmlInputElement};

/// ブラウザの `File` のラッパー
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserFile(File);

impl BrowserFile {
    /// 元の `File` を取得
    pub fn inner(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        Self(file)
    }
}

impl FileEntry for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// 入力要素で選択されているファイルを選択順に取得
pub fn files_from_input(input: &HtmlInputElement) -> Vec<BrowserFile> {
    let Some(list) = input.files() else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|index| list.get(index))
        .map(BrowserFile::from)
        .collect()
}
