use crate::SyncByteCache;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_int};
use std::ptr;

// C values are stored as owned strings; their accounted size is their
// byte length, so `max_bytes` bounds key bytes plus value bytes.
type CCache = SyncByteCache<String>;

#[no_mangle]
pub extern "C" fn cache_create(max_bytes: usize) -> *mut c_void {
    let cache = Box::new(CCache::new(max_bytes));
    Box::into_raw(cache) as *mut c_void
}

#[no_mangle]
pub extern "C" fn cache_destroy(ptr: *mut c_void) {
    if !ptr.is_null() {
        unsafe {
            let _ = Box::from_raw(ptr as *mut CCache);
        }
    }
}

#[no_mangle]
pub extern "C" fn cache_add(ptr: *mut c_void, key: *const c_char, value: *const c_char) -> c_int {
    if ptr.is_null() || key.is_null() || value.is_null() {
        return 0;
    }

    unsafe {
        let cache = &*(ptr as *mut CCache);
        let key_str = match CStr::from_ptr(key).to_str() {
            Ok(s) => s,
            Err(_) => return 0,
        };
        let value_str = match CStr::from_ptr(value).to_str() {
            Ok(s) => s,
            Err(_) => return 0,
        };

        cache.add(key_str.to_string(), value_str.to_string());
        1
    }
}

#[no_mangle]
pub extern "C" fn cache_get(ptr: *mut c_void, key: *const c_char) -> *mut c_char {
    if ptr.is_null() || key.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        let cache = &*(ptr as *mut CCache);
        let key_str = match CStr::from_ptr(key).to_str() {
            Ok(s) => s,
            Err(_) => return ptr::null_mut(),
        };

        match cache.get(key_str) {
            Some(value) => match CString::new(value) {
                Ok(c_str) => c_str.into_raw(),
                Err(_) => ptr::null_mut(),
            },
            None => ptr::null_mut(),
        }
    }
}

#[no_mangle]
pub extern "C" fn cache_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}

#[no_mangle]
pub extern "C" fn cache_len(ptr: *mut c_void) -> usize {
    if ptr.is_null() {
        return 0;
    }
    unsafe {
        let cache = &*(ptr as *mut CCache);
        cache.len()
    }
}
