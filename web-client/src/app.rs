//! Webクライアントアプリケーション
//!
//! Yewを使用したファイル送信ウィジェットのメインアプリケーションを実装します。

use expense_upload_common::{AcceptFilter, FileSet, SubmissionResult, UploadConfig, Uploader};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{FileList, ResultView, UploadForm};
use crate::state::{SubmitOutcome, WidgetAction, WidgetState};
use crate::utils::{js_message, trigger_download, BrowserFile, BrowserTransport};

/// アプリケーションのプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct AppProps {
    /// 起動時に注入された設定
    pub config: UploadConfig,
}

/// メインアプリケーション
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer(WidgetState::<BrowserFile>::default);
    let filter = AcceptFilter::new(props.config.accept.clone());

    // ファイル選択ハンドラー
    let on_files_change = {
        let state = state.clone();
        let filter = filter.clone();

        Callback::from(move |files: Vec<BrowserFile>| {
            log::info!("{} 件のファイルが選択されました", files.len());

            // フィルタは目安なので、合わないファイルも選択に含める
            let rejected = filter.rejected(&FileSet::from(files.clone()));
            if !rejected.is_empty() {
                log::warn!("対象外の拡張子のファイルが含まれています: {:?}", rejected);
            }

            state.dispatch(WidgetAction::SelectFiles(files));
        })
    };

    // ラベル変更ハンドラー
    let on_label_change = {
        let state = state.clone();
        Callback::from(move |label: String| {
            state.dispatch(WidgetAction::SetLabel(label));
        })
    };

    // 送信ハンドラー
    let on_submit = {
        let state = state.clone();
        let config = props.config.clone();

        Callback::from(move |_: ()| {
            if !state.files.can_submit() {
                return;
            }

            let files = state.files.clone();
            let label = state.label.clone();
            let config = config.clone();
            let state = state.clone();

            state.dispatch(WidgetAction::SubmitStarted);
            spawn_local(async move {
                let outcome = submit_files(config, files, label).await;
                state.dispatch(WidgetAction::SubmitFinished(outcome));
            });
        })
    };

    html! {
        <div class="app-container">
            <UploadForm
                accept={filter.attribute()}
                show_label={props.config.variant.sends_label()}
                label={state.label.clone()}
                can_submit={state.files.can_submit()}
                submitting={state.is_submitting()}
                on_files_change={on_files_change}
                on_label_change={on_label_change}
                on_submit={on_submit}
            />

            <FileList files={state.file_summaries()} />

            <ResultView
                image_src={state.image_src.clone().map(AttrValue::from)}
                last_download={state.last_download.clone().map(AttrValue::from)}
                error={state.error.clone().map(AttrValue::from)}
            />
        </div>
    }
}

/// ファイルを送信し、結果に応じて画像表示またはダウンロードを行う
async fn submit_files(
    config: UploadConfig,
    files: FileSet<BrowserFile>,
    label: String,
) -> Result<SubmitOutcome, String> {
    let revoke_delay_ms = config.revoke_delay_ms;
    let uploader = Uploader::new(config, BrowserTransport)
        .map_err(|e| format!("[{}] {}", e.code(), e))?;

    match uploader.submit(&files, &label).await {
        Ok(SubmissionResult::Image { src }) => Ok(SubmitOutcome::Image(src)),
        Ok(SubmissionResult::Download {
            filename,
            content_type,
            bytes,
        }) => {
            trigger_download(&filename, &content_type, &bytes, revoke_delay_ms).map_err(|e| {
                let message = js_message(&e);
                log::error!("ダウンロードに失敗しました: {}", message);
                message
            })?;
            Ok(SubmitOutcome::Downloaded(filename))
        }
        Err(e) => {
            log::error!("送信エラー: {}", e);
            Err(format!("[{}] {}", e.code(), e))
        }
    }
}
