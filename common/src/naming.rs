//! ダウンロードファイル名

use chrono::{Datelike, Local};

/// 英語の月の略称 (小文字)
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// ファイル名の接頭辞
const FILENAME_PREFIX: &str = "expenses_";

/// アーカイブの拡張子
const ARCHIVE_EXTENSION: &str = "zip";

/// 月と年を `jan2024` の形式にする
pub fn month_year<D: Datelike>(date: &D) -> String {
    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    format!("{}{:04}", month, date.year())
}

/// ダウンロードさせるファイル名 (`expenses_jan2024.zip`)
pub fn download_filename<D: Datelike>(date: &D) -> String {
    format!("{}{}.{}", FILENAME_PREFIX, month_year(date), ARCHIVE_EXTENSION)
}

/// 現在時刻 (ローカル) からファイル名を作成
pub fn download_filename_now() -> String {
    download_filename(&Local::now())
}
