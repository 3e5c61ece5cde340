//! ファイル選択
//!
//! ファイル選択ダイアログで選ばれたファイルの集合と、拡張子フィルタを提供します。

/// デフォルトの拡張子フィルタ
pub const DEFAULT_ACCEPT: [&str; 4] = [".pdf", ".png", ".jpg", ".jpeg"];

/// 選択されたファイルのハンドル
///
/// 中身のバイト列は実行環境 (ブラウザの `File` など) が保持し、
/// このクレートは名前・MIMEタイプ・サイズのみを参照します。
pub trait FileEntry {
    /// ファイル名
    fn name(&self) -> String;

    /// MIMEタイプ (不明な場合は空文字列)
    fn mime_type(&self) -> String;

    /// サイズ (バイト)
    fn size(&self) -> u64;
}

/// 選択中のファイル集合
///
/// 選択のたびに丸ごと置き換えられ、以前の選択とは統合されません。
#[derive(Debug, Clone, PartialEq)]
pub struct FileSet<F> {
    files: Vec<F>,
}

impl<F> Default for FileSet<F> {
    fn default() -> Self {
        Self { files: Vec::new() }
    }
}

impl<F: FileEntry> FileSet<F> {
    /// 空のファイル集合を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 選択内容を置き換える
    pub fn replace(&mut self, files: Vec<F>) {
        log::debug!("ファイル選択を置き換えます: {} -> {} 件", self.files.len(), files.len());
        self.files = files;
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 件数
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// 選択順に走査
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.files.iter()
    }

    /// 選択順のファイル名
    pub fn names(&self) -> Vec<String> {
        self.files.iter().map(FileEntry::name).collect()
    }

    /// 合計サイズ (バイト)
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(FileEntry::size).sum()
    }

    /// 送信可能かどうか (送信ボタンの有効/無効に対応)
    pub fn can_submit(&self) -> bool {
        !self.is_empty()
    }
}

impl<F> From<Vec<F>> for FileSet<F> {
    fn from(files: Vec<F>) -> Self {
        Self { files }
    }
}

/// 拡張子フィルタ
///
/// ダイアログ上の目安に過ぎず、フィルタに合わないファイルも送信対象から外しません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptFilter {
    extensions: Vec<String>,
}

impl Default for AcceptFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPT.iter().map(|ext| ext.to_string()).collect())
    }
}

impl AcceptFilter {
    /// 拡張子のリストからフィルタを作成
    pub fn new(extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// `<input accept>` 属性の値
    pub fn attribute(&self) -> String {
        self.extensions.join(", ")
    }

    /// ファイル名がフィルタに合うか (大文字小文字は区別しない)
    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    /// フィルタに合わないファイル名を取得
    pub fn rejected<F: FileEntry>(&self, files: &FileSet<F>) -> Vec<String> {
        files
            .iter()
            .map(FileEntry::name)
            .filter(|name| !self.accepts(name))
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// テスト用のファイル
    #[derive(Debug, Clone, PartialEq)]
    pub struct MemoryFile {
        pub name: String,
        pub mime_type: String,
        pub bytes: Vec<u8>,
    }

    impl MemoryFile {
        pub fn new(name: &str, mime_type: &str, bytes: &[u8]) -> Self {
            Self {
                name: name.to_string(),
                mime_type: mime_type.to_string(),
                bytes: bytes.to_vec(),
            }
        }
    }

    impl FileEntry for MemoryFile {
        fn name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime_type.clone()
        }

        fn size(&self) -> u64 {
            self.bytes.len() as u64
        }
    }

    #[test]
    fn test_replace_keeps_only_latest_selection() {
        let mut files = FileSet::new();
        assert!(files.is_empty());
        assert!(!files.can_submit());

        files.replace(vec![
            MemoryFile::new("a.png", "image/png", b"a"),
            MemoryFile::new("b.jpg", "image/jpeg", b"bb"),
        ]);
        files.replace(vec![MemoryFile::new("invoice.pdf", "application/pdf", b"pdf")]);

        assert_eq!(files.names(), vec!["invoice.pdf"]);
        assert_eq!(files.total_size(), 3);
        assert!(files.can_submit());

        files.replace(Vec::new());
        assert!(files.is_empty());
        assert!(!files.can_submit());
    }

    #[test]
    fn test_selection_order_is_preserved() {
        let files = FileSet::from(vec![
            MemoryFile::new("z.pdf", "application/pdf", b""),
            MemoryFile::new("a.pdf", "application/pdf", b""),
            MemoryFile::new("m.pdf", "application/pdf", b""),
        ]);
        assert_eq!(files.names(), vec!["z.pdf", "a.pdf", "m.pdf"]);
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_accept_filter() {
        let filter = AcceptFilter::default();
        assert_eq!(filter.attribute(), ".pdf, .png, .jpg, .jpeg");
        assert!(filter.accepts("Receipt.PDF"));
        assert!(filter.accepts("photo.jpeg"));
        assert!(!filter.accepts("notes.txt"));
        assert!(!filter.accepts("pdf"));

        let files = FileSet::from(vec![
            MemoryFile::new("a.png", "image/png", b""),
            MemoryFile::new("notes.txt", "text/plain", b""),
        ]);
        assert_eq!(filter.rejected(&files), vec!["notes.txt"]);
        // フィルタは目安なので集合自体は変わらない
        assert_eq!(files.len(), 2);
    }
}
