//! 選択ファイル一覧コンポーネント

use yew::prelude::*;

use crate::state::FileSummary;
use crate::utils::format::format_bytes;

/// 選択ファイル一覧のプロパティ
#[derive(Properties, Clone, PartialEq)]
pub struct FileListProps {
    /// 選択順のファイル
    pub files: Vec<FileSummary>,
}

/// 選択ファイル一覧
#[function_component(FileList)]
pub fn file_list(props: &FileListProps) -> Html {
    html! {
        <ul class="file-list">
            { for props.files.iter().enumerate().map(|(index, file)| html! {
                <li key={index}>
                    <span class="file-name">{ file.name.clone() }</span>
                    <span class="file-size">{ format!(" ({})", format_bytes(file.size)) }</span>
                </li>
            }) }
        </ul>
    }
}
