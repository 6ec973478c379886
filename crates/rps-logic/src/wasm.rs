//! WASM bindings for a browser front-end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{resolve_labels, Move, Session};

/// A game session owned by the page
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// Create a session; pass a seed for a reproducible opponent
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> WasmSession {
        let inner = match seed {
            Some(seed) => Session::seeded(seed),
            None => Session::from_entropy(),
        };
        WasmSession { inner }
    }

    /// Play a round from a button label
    ///
    /// # Returns
    /// The serialized RoundRecord
    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(&mut self, label: &str) -> Result<JsValue, JsError> {
        let record = self.inner
            .play_label(label)
            .map_err(|e| JsError::new(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&record)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Scores plus full history as a plain object
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Snapshot as a JSON string, for logging or download
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        serde_json::to_string(self.inner.snapshot())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }
}

/// Decide a round between two labels without touching any session
#[wasm_bindgen(js_name = determineWinner)]
pub fn determine_winner(player: &str, computer: &str) -> Result<JsValue, JsError> {
    let outcome = resolve_labels(player, computer)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&outcome)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Labels for the move buttons, in display order
#[wasm_bindgen(js_name = moveLabels)]
pub fn move_labels() -> Vec<String> {
    Move::ALL.iter().map(|m| m.label().to_string()).collect()
}
