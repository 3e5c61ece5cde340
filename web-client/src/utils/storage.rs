//! ストレージユーティリティ
//!
//! ブラウザのローカルストレージを使用して設定の保存と読み込みを行うユーティリティ関数を提供します。

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use wasm_bindgen::prelude::*;
use web_sys::{window, Storage};

/// 設定を保存するキー
const SETTINGS_KEY: &str = "expense-upload.config";

/// ローカルストレージから設定を読み込む
pub fn load_settings<T>() -> Option<T>
where
    T: for<'de> Deserialize<'de> + Debug,
{
    let storage = get_local_storage()?;

    match storage.get_item(SETTINGS_KEY) {
        Ok(Some(value)) => match serde_json::from_str::<T>(&value) {
            Ok(settings) => {
                log::info!("設定を読み込みました: {:?}", settings);
                Some(settings)
            }
            Err(e) => {
                log::error!("設定のデシリアライズに失敗しました: {}", e);
                None
            }
        },
        Ok(None) => {
            log::info!("保存された設定がありません。デフォルト設定を使用します。");
            None
        }
        Err(e) => {
            log::error!("設定の読み込みに失敗しました: {:?}", e);
            None
        }
    }
}

/// ローカルストレージに設定を保存する
pub fn save_settings<T>(settings: &T) -> Result<(), JsValue>
where
    T: Serialize + Debug,
{
    let storage = get_local_storage().ok_or_else(|| {
        log::error!("ローカルストレージを取得できませんでした");
        JsValue::from_str("ローカルストレージを取得できませんでした")
    })?;

    let json = serde_json::to_string(settings).map_err(|e| {
        log::error!("設定のシリアライズに失敗しました: {}", e);
        JsValue::from_str(&format!("設定のシリアライズに失敗しました: {}", e))
    })?;

    storage.set_item(SETTINGS_KEY, &json).map_err(|e| {
        log::error!("設定の保存に失敗しました: {:?}", e);
        JsValue::from_str(&format!("設定の保存に失敗しました: {:?}", e))
    })?;

    log::info!("設定を保存しました: {:?}", settings);
    Ok(())
}

/// ローカルストレージを取得
fn get_local_storage() -> Option<Storage> {
    window()
        .and_then(|win| win.local_storage().ok())
        .flatten()
}
