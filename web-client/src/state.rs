//! アプリケーション状態管理
//!
//! ウィジェットの状態 (選択ファイル、ラベル、送信結果) を管理するモジュールです。
//! 状態はページ内だけのもので、リロードすると破棄されます。

use std::rc::Rc;

use expense_upload_common::{FileEntry, FileSet};
use yew::prelude::*;

/// 一覧表示用のファイル情報
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    /// ファイル名
    pub name: String,
    /// サイズ (バイト)
    pub size: u64,
}

/// 送信処理の結果
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// 画像を表示した
    Image(String),
    /// ファイルをダウンロードさせた
    Downloaded(String),
}

/// ウィジェットへの操作
#[derive(Debug)]
pub enum WidgetAction<F> {
    /// ファイル選択を置き換える
    SelectFiles(Vec<F>),
    /// ラベルを変更する
    SetLabel(String),
    /// 送信を開始した
    SubmitStarted,
    /// 送信が終わった (エラー時はメッセージ)
    SubmitFinished(Result<SubmitOutcome, String>),
}

/// ウィジェットの状態
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetState<F> {
    /// 選択中のファイル
    pub files: FileSet<F>,
    /// ラベル
    pub label: String,
    /// 送信中のリクエスト数
    pub in_flight: usize,
    /// 表示中の画像のsrc
    pub image_src: Option<String>,
    /// 最後にダウンロードさせたファイル名
    pub last_download: Option<String>,
    /// エラーメッセージ
    pub error: Option<String>,
}

impl<F> Default for WidgetState<F> {
    fn default() -> Self {
        Self {
            files: FileSet::default(),
            label: String::new(),
            in_flight: 0,
            image_src: None,
            last_download: None,
            error: None,
        }
    }
}

impl<F: FileEntry> WidgetState<F> {
    /// 送信中かどうか
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    /// 一覧表示用のファイル情報
    pub fn file_summaries(&self) -> Vec<FileSummary> {
        self.files
            .iter()
            .map(|file| FileSummary {
                name: file.name(),
                size: file.size(),
            })
            .collect()
    }
}

impl<F> Reducible for WidgetState<F>
where
    F: FileEntry + Clone + 'static,
{
    type Action = WidgetAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            WidgetAction::SelectFiles(files) => next.files.replace(files),
            WidgetAction::SetLabel(label) => next.label = label,
            WidgetAction::SubmitStarted => {
                next.in_flight += 1;
                next.error = None;
            }
            // 複数の送信が重なった場合は後から終わったものが表示される
            WidgetAction::SubmitFinished(outcome) => {
                next.in_flight = next.in_flight.saturating_sub(1);
                match outcome {
                    // 空の本文では画像を表示しない
                    Ok(SubmitOutcome::Image(src)) => {
                        next.image_src = Some(src).filter(|src| !src.is_empty());
                    }
                    Ok(SubmitOutcome::Downloaded(filename)) => next.last_download = Some(filename),
                    Err(message) => {
                        next.image_src = None;
                        next.last_download = None;
                        next.error = Some(message);
                    }
                }
            }
        }

        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct NamedFile(&'static str, u64);

    impl FileEntry for NamedFile {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn mime_type(&self) -> String {
            String::new()
        }

        fn size(&self) -> u64 {
            self.1
        }
    }

    fn apply(
        state: Rc<WidgetState<NamedFile>>,
        action: WidgetAction<NamedFile>,
    ) -> Rc<WidgetState<NamedFile>> {
        state.reduce(action)
    }

    fn finish(
        state: Rc<WidgetState<NamedFile>>,
        outcome: Result<SubmitOutcome, String>,
    ) -> Rc<WidgetState<NamedFile>> {
        let state = apply(state, WidgetAction::SubmitStarted);
        apply(state, WidgetAction::SubmitFinished(outcome))
    }

    #[test]
    fn test_selection_replaces_previous_files() {
        let state = Rc::new(WidgetState::default());
        let state = apply(state, WidgetAction::SelectFiles(vec![NamedFile("a.png", 10)]));
        let state = apply(
            state,
            WidgetAction::SelectFiles(vec![NamedFile("b.jpg", 20), NamedFile("c.pdf", 30)]),
        );

        assert_eq!(
            state.file_summaries(),
            vec![
                FileSummary { name: "b.jpg".to_string(), size: 20 },
                FileSummary { name: "c.pdf".to_string(), size: 30 },
            ]
        );
        assert!(state.files.can_submit());
    }

    #[test]
    fn test_overlapping_submissions() {
        let state = Rc::new(WidgetState::<NamedFile>::default());
        let state = apply(state, WidgetAction::SubmitStarted);
        let state = apply(state, WidgetAction::SubmitStarted);
        assert!(state.is_submitting());

        let state = apply(
            state,
            WidgetAction::SubmitFinished(Ok(SubmitOutcome::Image(
                "data:image/png;base64,AAAA".into(),
            ))),
        );
        assert!(state.is_submitting());

        let state = apply(
            state,
            WidgetAction::SubmitFinished(Ok(SubmitOutcome::Image("/uploads/output.jpg".into()))),
        );
        assert!(!state.is_submitting());
        assert_eq!(state.image_src.as_deref(), Some("/uploads/output.jpg"));
    }

    #[test]
    fn test_error_cleared_on_next_submit() {
        let state = Rc::new(WidgetState::<NamedFile>::default());
        let state = apply(state, WidgetAction::SubmitStarted);
        let state = apply(state, WidgetAction::SubmitFinished(Err("[NetworkError] 失敗".into())));
        assert_eq!(state.error.as_deref(), Some("[NetworkError] 失敗"));

        let state = apply(state, WidgetAction::SubmitStarted);
        assert_eq!(state.error, None);

        let state = apply(
            state,
            WidgetAction::SubmitFinished(Ok(SubmitOutcome::Downloaded(
                "expenses_jan2024.zip".into(),
            ))),
        );
        assert_eq!(state.last_download.as_deref(), Some("expenses_jan2024.zip"));
        assert_eq!(state.in_flight, 0);
    }

    #[test]
    fn test_label_is_replaced() {
        let state = Rc::new(WidgetState::<NamedFile>::default());
        let state = apply(state, WidgetAction::SetLabel("mar".into()));
        let state = apply(state, WidgetAction::SetLabel("march".into()));
        assert_eq!(state.label, "march");
    }

    #[test]
    fn test_empty_image_body_hides_preview() {
        let state = Rc::new(WidgetState::<NamedFile>::default());
        let state = finish(
            state,
            Ok(SubmitOutcome::Image("data:image/png;base64,AAAA".into())),
        );
        assert_eq!(state.image_src.as_deref(), Some("data:image/png;base64,AAAA"));

        let state = finish(state, Ok(SubmitOutcome::Image(String::new())));
        assert_eq!(state.image_src, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let state = Rc::new(WidgetState::<NamedFile>::default());
        let state = finish(state, Ok(SubmitOutcome::Image("/uploads/output.jpg".into())));
        let state = finish(
            state,
            Ok(SubmitOutcome::Downloaded("expenses_feb2024.zip".into())),
        );
        assert!(state.image_src.is_some());
        assert!(state.last_download.is_some());

        let state = finish(state, Err("[HttpStatus] 500".into()));
        assert_eq!(state.image_src, None);
        assert_eq!(state.last_download, None);
        assert_eq!(state.error.as_deref(), Some("[HttpStatus] 500"));
    }
}
