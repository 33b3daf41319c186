//! ナビゲーションペイロード
//!
//! 画面遷移に添付する一時データ。履歴stateへシリアライズして運び、
//! 受け取った側が一度だけ消費する（現在の履歴エントリをreplaceして
//! 消すことで、戻る・進むでの再適用を防ぐ）。

use catalog_common::{Filters, Product};
use leptos_router::location::State;
use leptos_router::NavigateOptions;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// フラッシュ通知の自動消去までの時間
pub const FLASH_HIDE_MS: u32 = 2500;

/// 作成・更新完了の一回限り通知
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flash {
    Created,
    Updated,
}

impl Flash {
    pub fn message(self) -> &'static str {
        match self {
            Flash::Created => "Product created",
            Flash::Updated => "Product updated",
        }
    }
}

/// 遷移に添付するペイロード
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

/// 履歴stateからペイロードを読む（無ければNone）
pub fn payload_from_state(state: &State) -> Option<NavPayload> {
    let value = state.to_js_value();
    if value.is_null() || value.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(value).ok()
}

/// ペイロード付きの遷移オプション
pub fn with_payload(payload: &NavPayload, replace: bool) -> NavigateOptions {
    let value = serde_wasm_bindgen::to_value(payload).unwrap_or(JsValue::NULL);
    NavigateOptions {
        replace,
        state: State::new(Some(value)),
        ..Default::default()
    }
}

/// ペイロードなしのreplace遷移オプション（ペイロードの消費に使う）
pub fn replace_without_payload() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// クエリ文字列サフィックス（"?"付き、空なら空文字列）
///
/// `Location::search`の値が"?"始まりでもそうでなくても受け付ける。
pub fn search_suffix(search: &str) -> String {
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("?{}", trimmed)
    }
}

/// フィルタ状態をURLクエリ文字列へエンコードする（"?"なし）
pub fn encode_filters(filters: &Filters) -> String {
    filters
        .to_pairs()
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                key,
                String::from(js_sys::encode_uri_component(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_serialize() {
        assert_eq!(serde_json::to_string(&Flash::Created).unwrap(), "\"created\"");
        assert_eq!(serde_json::to_string(&Flash::Updated).unwrap(), "\"updated\"");
    }

    #[test]
    fn test_flash_message() {
        assert_eq!(Flash::Created.message(), "Product created");
        assert_eq!(Flash::Updated.message(), "Product updated");
    }

    #[test]
    fn test_nav_payload_json_round_trip() {
        let payload = NavPayload {
            product: Some(Product {
                id: 42,
                title: "Widget".to_string(),
                price: 9.99,
                category: "tools".to_string(),
                ..Default::default()
            }),
            flash: Some(Flash::Updated),
        };

        let json = serde_json::to_string(&payload).expect("シリアライズ失敗");
        let restored: NavPayload = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(restored.flash, Some(Flash::Updated));
        assert_eq!(restored.product.map(|p| p.id), Some(42));
    }

    #[test]
    fn test_search_suffix() {
        assert_eq!(search_suffix(""), "");
        assert_eq!(search_suffix("?"), "");
        assert_eq!(search_suffix("q=mug"), "?q=mug");
        assert_eq!(search_suffix("?q=mug&page=2"), "?q=mug&page=2");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// 履歴state経由のペイロード往復
    #[wasm_bindgen_test]
    fn test_payload_through_history_state() {
        let payload = NavPayload {
            product: Some(Product {
                id: 7,
                title: "Mug".to_string(),
                price: 3.5,
                category: "kitchen".to_string(),
                ..Default::default()
            }),
            flash: Some(Flash::Created),
        };

        let options = with_payload(&payload, true);
        let restored = payload_from_state(&options.state).expect("ペイロードが読めること");
        assert_eq!(restored.flash, Some(Flash::Created));
        assert_eq!(restored.product.map(|p| p.id), Some(7));
    }

    /// stateが空ならペイロードなし
    #[wasm_bindgen_test]
    fn test_empty_state_has_no_payload() {
        assert!(payload_from_state(&State::new(None)).is_none());
    }
}
