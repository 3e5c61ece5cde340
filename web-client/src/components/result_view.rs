//! 送信結果コンポーネント
//!
//! 返された画像、ダウンロードしたファイル名、エラーを表示します。

use yew::prelude::*;

/// 送信結果のプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct ResultViewProps {
    /// 画像のsrc (レスポンス本文そのまま)
    pub image_src: Option<AttrValue>,
    /// 最後にダウンロードしたファイル名
    pub last_download: Option<AttrValue>,
    /// エラーメッセージ
    pub error: Option<AttrValue>,
}

/// 送信結果表示コンポーネント
#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    html! {
        <div class="result-view">
            if let Some(error) = &props.error {
                <div class="error-message">
                    <h3>{"エラー"}</h3>
                    <p>{error.clone()}</p>
                </div>
            }

            if let Some(filename) = &props.last_download {
                <p class="download-info">{format!("{} をダウンロードしました", filename)}</p>
            }

            if let Some(src) = &props.image_src {
                <img class="result-image" style="max-width: 200px" src={src.clone()} alt="送信結果" />
            }
        </div>
    }
}
