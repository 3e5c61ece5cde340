//! マルチパートフォーム
//!
//! 選択されたファイルとラベルから、送信するフォームの各パートを組み立てます。
//! 実際のエンコード (境界文字列の付与など) は実行環境のトランスポートに任せます。

use crate::config::ResponseVariant;
use crate::error::{CommonError, Result};
use crate::selection::{FileEntry, FileSet};

/// ラベルを送るフィールド名
pub const LABEL_FIELD: &str = "name";

/// ファイルのフィールド名の接頭辞
const FILE_FIELD_PREFIX: &str = "file";

/// 位置に対応するファイルのフィールド名 (`file0`, `file1`, ...)
pub fn file_field_name(index: usize) -> String {
    format!("{}{}", FILE_FIELD_PREFIX, index)
}

/// フォームの1パート
#[derive(Debug, PartialEq)]
pub enum FormPart<'a, F> {
    /// ファイルパート
    File {
        /// フィールド名
        field: String,
        /// 送信するファイル
        file: &'a F,
    },
    /// テキストパート
    Text {
        /// フィールド名
        field: String,
        /// 値
        value: String,
    },
}

impl<'a, F> FormPart<'a, F> {
    /// フィールド名を取得
    pub fn field(&self) -> &str {
        match self {
            FormPart::File { field, .. } | FormPart::Text { field, .. } => field,
        }
    }
}

/// 送信するフォームを組み立てる
///
/// ファイルは選択順に `file<index>` として並び、レスポンスをアーカイブとして
/// 扱う場合のみ末尾に `name` パートが付きます (ラベルが空でも送信します)。
pub fn build_form<'a, F: FileEntry>(
    files: &'a FileSet<F>,
    label: &str,
    variant: ResponseVariant,
) -> Result<Vec<FormPart<'a, F>>> {
    if files.is_empty() {
        return Err(CommonError::EmptySelection);
    }

    let mut parts: Vec<FormPart<'a, F>> = files
        .iter()
        .enumerate()
        .map(|(index, file)| FormPart::File {
            field: file_field_name(index),
            file,
        })
        .collect();

    if variant.sends_label() {
        parts.push(FormPart::Text {
            field: LABEL_FIELD.to_string(),
            value: label.to_string(),
        });
    }

    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::tests::MemoryFile;

    fn field_names<F>(parts: &[FormPart<'_, F>]) -> Vec<String> {
        parts.iter().map(|part| part.field().to_string()).collect()
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let files: FileSet<MemoryFile> = FileSet::new();
        assert_eq!(
            build_form(&files, "march", ResponseVariant::Archive),
            Err(CommonError::EmptySelection)
        );
    }

    #[test]
    fn test_single_file_with_label() {
        let files = FileSet::from(vec![MemoryFile::new("invoice.pdf", "application/pdf", b"%PDF")]);
        let parts = build_form(&files, "march", ResponseVariant::Archive).unwrap();

        assert_eq!(parts.len(), 2);
        match &parts[0] {
            FormPart::File { field, file } => {
                assert_eq!(field, "file0");
                assert_eq!(file.name, "invoice.pdf");
            }
            other => panic!("unexpected part: {:?}", other),
        }
        assert_eq!(
            parts[1],
            FormPart::Text {
                field: "name".to_string(),
                value: "march".to_string(),
            }
        );
    }

    #[test]
    fn test_positional_field_names() {
        let files = FileSet::from(
            (0..12)
                .map(|i| MemoryFile::new(&format!("r{}.png", i), "image/png", b""))
                .collect::<Vec<_>>(),
        );
        let parts = build_form(&files, "", ResponseVariant::Image).unwrap();

        let expected: Vec<String> = (0..12).map(file_field_name).collect();
        assert_eq!(field_names(&parts), expected);
        for (index, part) in parts.iter().enumerate() {
            match part {
                FormPart::File { file, .. } => assert_eq!(file.name, format!("r{}.png", index)),
                other => panic!("unexpected part: {:?}", other),
            }
        }
    }

    #[test]
    fn test_label_sent_only_for_archive() {
        let files = FileSet::from(vec![
            MemoryFile::new("a.png", "image/png", b""),
            MemoryFile::new("b.jpg", "image/jpeg", b""),
        ]);

        let image = build_form(&files, "ignored", ResponseVariant::Image).unwrap();
        assert_eq!(field_names(&image), vec!["file0", "file1"]);

        // 空のラベルでも name パートは1つだけ送る
        let archive = build_form(&files, "", ResponseVariant::Archive).unwrap();
        assert_eq!(field_names(&archive), vec!["file0", "file1", "name"]);
        let labels: Vec<_> = archive
            .iter()
            .filter(|part| part.field() == LABEL_FIELD)
            .collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(
            labels[0],
            &FormPart::Text {
                field: "name".to_string(),
                value: String::new(),
            }
        );
    }
}
