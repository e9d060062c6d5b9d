use crate::*;
use wasm_bindgen::prelude::*;

// Re-export the codecs for JavaScript hosts

#[wasm_bindgen]
pub struct WasmPath(Path);

#[wasm_bindgen]
pub struct WasmAddress(Address);

// Path implementation
#[wasm_bindgen]
impl WasmPath {
    #[wasm_bindgen(constructor)]
    pub fn new(s: &str) -> Self {
        Self(Path::from(s))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }

    #[wasm_bindgen]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// counts of the segments, branch counts negated.
    /// a zero count is a no-op in either mode, so -0 needs no care.
    #[wasm_bindgen]
    pub fn to_count_array(&self) -> js_sys::Array {
        self.0
            .segments()
            .iter()
            .map(|s| match s.mode {
                Mode::Next => s.count as f64,
                Mode::Branch => -(s.count as f64),
            })
            .map(JsValue::from)
            .collect::<js_sys::Array>()
    }
}

// Address implementation
#[wasm_bindgen]
impl WasmAddress {
    #[wasm_bindgen(constructor)]
    pub fn new(depth: usize, sibling: usize) -> Self {
        Self(Address::from((depth, sibling)))
    }

    #[wasm_bindgen]
    pub fn from_string(s: &str) -> Result<Self, JsValue> {
        Address::try_from(s)
            .map(Self)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }

    #[wasm_bindgen]
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    #[wasm_bindgen]
    pub fn sibling(&self) -> usize {
        self.0.sibling
    }

    #[wasm_bindgen]
    pub fn is_root(&self) -> bool {
        self.0.is_root()
    }
}
