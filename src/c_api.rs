// C ABI for editors and input-method front ends.
// Every entry point catches panics; the converter sits behind a Mutex so
// calls from several threads are serialized.
use crate::config::Settings;
use crate::logging::init_tracing;
use crate::Converter;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, MutexGuard};

static ENGINE: Mutex<Option<Converter>> = Mutex::new(None);

fn lock_engine() -> MutexGuard<'static, Option<Converter>> {
    ENGINE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Reads a C string, treating null or invalid UTF-8 as absent.
unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    // Interior NULs can't cross the boundary.
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(e) => {
            let mut bytes = e.into_vec();
            bytes.retain(|&b| b != 0);
            CString::new(bytes).map_or(ptr::null_mut(), CString::into_raw)
        }
    }
}

/// Runs `f`, returning `fallback` if it panics. Needs an unwinding build;
/// the release profile keeps `panic = "unwind"` for this.
fn guarded<T>(what: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        tracing::error!(call = what, "panic caught at the C boundary");
        fallback
    })
}

#[no_mangle]
pub extern "C" fn romanised_engine_init() {
    guarded("romanised_engine_init", (), || {
        init_tracing();
        let mut engine = lock_engine();
        if engine.is_some() {
            return;
        }
        let settings = Settings::from_env();
        *engine = Some(Converter::from_file_or_new(&settings.special_words_path));
        tracing::info!(path = %settings.special_words_path.display(), "romanised engine initialized");
    });
}

#[no_mangle]
pub extern "C" fn romanised_engine_destroy() {
    guarded("romanised_engine_destroy", (), || {
        if let Some(engine) = lock_engine().take() {
            if let Err(e) = engine.save_special_words() {
                tracing::error!(error = %e, "failed to save special words");
            }
        }
    });
}

/// Converts `text`; `smart` is nonzero for smart mode. Works before init,
/// with no special words. The result must be released with
/// `romanised_free_string`.
#[no_mangle]
pub extern "C" fn romanised_convert(text: *const c_char, smart: c_int) -> *mut c_char {
    let Some(raw) = (unsafe { read_str(text) }) else {
        return ptr::null_mut();
    };
    let converted = guarded("romanised_convert", raw.to_string(), || match lock_engine().as_ref() {
        Some(engine) => engine.convert(raw, smart != 0),
        None => crate::convert(raw, smart != 0),
    });
    into_c_string(converted)
}

/// Returns 1 when the word was added, 0 otherwise (engine not initialized or
/// bad arguments).
#[no_mangle]
pub extern "C" fn romanised_add_special_word(word: *const c_char, spelling: *const c_char) -> c_int {
    let (Some(word), Some(spelling)) = (unsafe { read_str(word) }, unsafe { read_str(spelling) }) else {
        return 0;
    };
    if word.is_empty() || spelling.is_empty() {
        return 0;
    }
    let added = guarded("romanised_add_special_word", false, || match lock_engine().as_mut() {
        Some(engine) => {
            engine.special_words_mut().insert(word, spelling);
            true
        }
        None => false,
    });
    c_int::from(added)
}

#[no_mangle]
pub extern "C" fn romanised_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
