//! wasm-bindgen entry points for the browser build.
//!
//! The exported page wires each keypad button's click handler and the
//! document `keydown` handler to these methods and writes the returned
//! readout into the display element.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::console;

use super::calculator::WasmCalculator;
use super::keypad::DISPLAY_ID;

/// Browser-facing calculator handle.
#[derive(Debug, Default)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator in the initial state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WasmCalculator::new(),
        }
    }

    /// The current readout text.
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    /// Handles a keypad button click by element id. Returns the readout
    /// after the press, or `None` for unknown ids.
    pub fn handle_button(&mut self, id: &str) -> Option<String> {
        self.inner.press_button(id)
    }

    /// Handles a `keydown` by its `KeyboardEvent.key` value. Returns the
    /// readout after the press, or `None` for ignored keys.
    pub fn handle_key(&mut self, key: &str) -> Option<String> {
        self.inner.press_key(key)
    }

    /// Resets to the initial state.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Builds the calculator markup inside the container element: the
    /// readout plus one button per key, carrying the stable element ids
    /// the page script wires `handle_button` to. For hosts that embed the
    /// calculator into an existing page instead of using the exported one.
    pub fn mount(&self, container_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str("container element not found"))?;

        let readout = document.create_element("div")?;
        readout.set_id(DISPLAY_ID);
        readout.set_text_content(Some(self.inner.display()));
        container.append_child(&readout)?;

        let keypad = self.inner.keypad();
        for row in 0..keypad.row_count() {
            let row_el = document.create_element("div")?;
            row_el.set_class_name("keypad-row");
            for button in keypad.row(row) {
                let el: web_sys::HtmlButtonElement =
                    document.create_element("button")?.dyn_into()?;
                el.set_id(&button.id);
                el.set_text_content(Some(&button.label));
                row_el.append_child(&el)?;
            }
            container.append_child(&row_el)?;
        }
        Ok(())
    }
}

/// Module initialisation hook.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calculadora wasm initialised".into());
}
