//! 送信フォームコンポーネント
//!
//! ファイル選択、ラベル入力、送信ボタンを提供するコンポーネントです。

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::files::{files_from_input, BrowserFile};

/// 送信フォームのプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct UploadFormProps {
    /// `<input accept>` の値
    pub accept: AttrValue,
    /// ラベル入力欄を表示するか
    pub show_label: bool,
    /// 現在のラベル
    pub label: AttrValue,
    /// 送信可能か (ファイルが1つ以上選択されている)
    pub can_submit: bool,
    /// 送信中か
    pub submitting: bool,
    /// ファイル選択時のコールバック
    pub on_files_change: Callback<Vec<BrowserFile>>,
    /// ラベル変更時のコールバック
    pub on_label_change: Callback<String>,
    /// 送信時のコールバック
    pub on_submit: Callback<()>,
}

/// 送信フォームコンポーネント
#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    // ファイルが選択された時のハンドラー
    let on_file_change = {
        let on_files_change = props.on_files_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_files_change.emit(files_from_input(&input));
            }
        })
    };

    // ラベルが入力された時のハンドラー
    let on_label_input = {
        let on_label_change = props.on_label_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_label_change.emit(input.value());
            }
        })
    };

    // フォームが送信された時のハンドラー
    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        let can_submit = props.can_submit;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if can_submit {
                on_submit.emit(());
            }
        })
    };

    html! {
        <form class="upload-form" onsubmit={on_form_submit}>
            <div class="form-group">
                <input
                    type="file"
                    id="files"
                    accept={props.accept.clone()}
                    multiple={true}
                    onchange={on_file_change}
                />
            </div>

            if props.show_label {
                <div class="form-group">
                    <label for="label">{"名前:"}</label>
                    <input
                        type="text"
                        id="label"
                        value={props.label.clone()}
                        oninput={on_label_input}
                    />
                </div>
            }

            <div class="form-actions">
                <button type="submit" class="upload-button" disabled={!props.can_submit}>
                    {"アップロード"}
                </button>
                if props.submitting {
                    <span class="submitting">{"送信中..."}</span>
                }
            </div>
        </form>
    }
}
