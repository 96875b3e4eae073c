// src/c_api.rs
// Raw pointers and catch_unwind: no panic may cross the FFI boundary.
use crate::core::engine::TransliterationEngine;
use crate::core::types::Script;
use crate::error::TranslitError;
use libc::c_char;
use serde::Serialize;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

static mut ENGINE: *mut TransliterationEngine = ptr::null_mut();

/// Inputs larger than this are rejected before reaching the engine.
const MAX_INPUT_BYTES: usize = 1 << 20;

/// What every FFI call returns, serialized to JSON: either the word list or
/// an error message, never both.
#[derive(Serialize)]
struct Response {
    words: Vec<String>,
    error: Option<String>,
}

impl Response {
    fn ok(words: Vec<String>) -> Self {
        Self { words, error: None }
    }

    fn err(e: TranslitError) -> Self {
        Self {
            words: Vec::new(),
            error: Some(e.to_string()),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"words":[],"error":"serialization failed"}"#.to_string())
    }
}

#[no_mangle]
pub extern "C" fn olchiki_engine_init() {
    let result = catch_unwind(|| unsafe {
        if !ENGINE.is_null() {
            return;
        }
        ENGINE = Box::into_raw(Box::new(TransliterationEngine::new()));
    });
    if result.is_err() {
        eprintln!("[translit FATAL] panic during engine initialization");
        unsafe { ENGINE = ptr::null_mut() };
    }
}

#[no_mangle]
pub extern "C" fn olchiki_engine_destroy() {
    unsafe {
        if ENGINE.is_null() {
            return;
        }
        drop(Box::from_raw(ENGINE));
        ENGINE = ptr::null_mut();
    }
}

/// Validates the untyped C input before the engine ever sees it: the engine
/// itself is total over strings, so this is the only place `InvalidInput`
/// can arise.
fn read_input(ptr: *const c_char) -> Result<&'static str, TranslitError> {
    if ptr.is_null() {
        return Err(TranslitError::InvalidInput("null pointer".to_string()));
    }
    let c_str = unsafe { CStr::from_ptr(ptr) };
    if c_str.to_bytes().len() > MAX_INPUT_BYTES {
        return Err(TranslitError::InvalidInput(format!(
            "input exceeds {MAX_INPUT_BYTES} bytes"
        )));
    }
    c_str
        .to_str()
        .map_err(|_| TranslitError::InvalidInput("input is not valid UTF-8".to_string()))
}

/// Transliterates `text` into the script named by `script` ("latin" or
/// "devanagari") and returns a JSON `{"words": [...], "error": null}` string.
/// The caller owns the returned pointer and must release it with
/// `olchiki_free_string`.
#[no_mangle]
pub extern "C" fn olchiki_transliterate(
    text: *const c_char,
    script: *const c_char,
) -> *mut c_char {
    let response = catch_unwind(AssertUnwindSafe(|| {
        let parsed = read_input(text).and_then(|input| {
            let script = read_input(script)?.parse::<Script>()?;
            Ok((input, script))
        });
        match parsed {
            Ok((input, script)) => unsafe {
                match ENGINE.as_ref() {
                    Some(engine) => {
                        Response::ok(engine.transliterate(input, script).to_vec())
                    }
                    None => Response::err(TranslitError::InvalidInput(
                        "engine not initialized".to_string(),
                    )),
                }
            },
            Err(e) => Response::err(e),
        }
    }));

    let json = match response {
        Ok(r) => r.to_json(),
        Err(_) => {
            eprintln!("[translit FATAL] panic in olchiki_transliterate");
            r#"{"words":[],"error":"internal panic"}"#.to_string()
        }
    };
    CString::new(json)
        .unwrap_or_else(|_| CString::new(r#"{"words":[],"error":"interior NUL"}"#).unwrap())
        .into_raw()
}

#[no_mangle]
pub extern "C" fn olchiki_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn call(text: &str, script: &str) -> serde_json::Value {
        let text = CString::new(text).unwrap();
        let script = CString::new(script).unwrap();
        let raw = olchiki_transliterate(text.as_ptr(), script.as_ptr());
        let json = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        olchiki_free_string(raw);
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn round_trips_through_json() {
        olchiki_engine_init();
        let v = call("ᱚᱛᱟᱲ ᱮᱥ ᱚᱞᱚ", "latin");
        assert_eq!(v["error"], serde_json::Value::Null);
        assert_eq!(v["words"][0], "otāṛ");
        assert_eq!(v["words"][2], "olo");

        let v = call("ᱚᱛᱟᱲ", "devanagari");
        assert_eq!(v["words"][0], "ओताड\u{93c}");

        let v = call("ᱚᱛᱟᱲ", "klingon");
        assert!(v["error"].as_str().unwrap().contains("unknown script"));
        assert_eq!(v["words"].as_array().unwrap().len(), 0);
        olchiki_engine_destroy();
    }
}
