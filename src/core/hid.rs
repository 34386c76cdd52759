//! WebHID transport glue.
//!
//! `navigator.hid` is reached through direct JavaScript interop via the
//! Reflect API; the WebHID interfaces sit behind unstable `web-sys` cfgs,
//! so the handful of calls this app needs are made dynamically instead.
//!
//! The transport owns the JS handle of the open device and publishes every
//! state transition through [`DeviceService`].

use std::cell::RefCell;

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::config::{SAVE_COMMAND, SAVE_REPORT_ID, VENDOR_ID, VENDOR_USAGE_PAGE};
use crate::core::DeviceService;
use crate::core::error::HidError;
use crate::core::lifecycle::Lifecycle;
use crate::models::{Capability, CapabilitySet, ConnectionState, DeviceSnapshot};

thread_local! {
    /// JS handle of the device currently open. Only the transport touches it.
    static ACTIVE: RefCell<Option<Object>> = const { RefCell::new(None) };
}

/// Get the `navigator.hid` object.
fn get_hid() -> Result<Object, HidError> {
    let window = web_sys::window().ok_or(HidError::NoWindow)?;
    let navigator = window.navigator();
    Reflect::get(&navigator, &"hid".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(HidError::Unsupported)
}

/// Platform capability gate: does this browser expose WebHID?
///
/// Checked exactly once at startup; the device session is never wired when
/// this returns false.
pub fn is_available() -> bool {
    get_hid().is_ok()
}

/// Look a method up on a JS object.
fn get_fn(target: &JsValue, name: &str) -> Result<Function, HidError> {
    Reflect::get(target, &name.into())
        .map_err(|_| HidError::RequestFailed(name.to_string()))?
        .dyn_into::<Function>()
        .map_err(|_| HidError::RequestFailed(name.to_string()))
}

fn js_u32(target: &JsValue, name: &str) -> u32 {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as u32
}

fn js_bool(target: &JsValue, name: &str) -> bool {
    Reflect::get(target, &name.into())
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// The `device` property of a connect/disconnect event.
fn event_device(event: &JsValue) -> Option<Object> {
    Reflect::get(event, &"device".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
}

/// Capability probe: each feature the device supports is advertised as one
/// top-level collection on the vendor usage page.
fn probe_capabilities(device: &Object) -> CapabilitySet {
    let collections = Reflect::get(device, &"collections".into())
        .map(|c| Array::from(&c))
        .unwrap_or_else(|_| Array::new());

    collections
        .iter()
        .filter_map(|collection| {
            if js_u32(&collection, "usagePage") == VENDOR_USAGE_PAGE {
                Capability::from_usage(js_u32(&collection, "usage") as u8)
            } else {
                None
            }
        })
        .collect()
}

/// Documentation file stem for the device, derived from its USB identity.
fn doc_filename(device: &Object) -> String {
    format!(
        "{:04x}-{:04x}",
        js_u32(device, "vendorId"),
        js_u32(device, "productId")
    )
}

fn snapshot_of(device: &Object, state: ConnectionState) -> DeviceSnapshot {
    DeviceSnapshot {
        state,
        capabilities: probe_capabilities(device),
        filename: doc_filename(device),
    }
}

/// Shows the browser device chooser and opens the first selection.
///
/// Must be called from a user gesture; browsers reject the chooser
/// otherwise.
pub async fn request_device(service: DeviceService) -> Result<(), HidError> {
    let hid = get_hid()?;

    let filter = Object::new();
    Reflect::set(&filter, &"vendorId".into(), &JsValue::from(VENDOR_ID))
        .map_err(|_| HidError::RequestFailed("filter".to_string()))?;
    let filters = Array::new();
    filters.push(&filter);
    let args = Object::new();
    Reflect::set(&args, &"filters".into(), &filters)
        .map_err(|_| HidError::RequestFailed("filters".to_string()))?;

    let request = get_fn(&hid, "requestDevice")?;
    let promise: Promise = request
        .call1(&hid, &args)
        .map_err(|e| HidError::RequestFailed(format!("{:?}", e)))?
        .into();
    let devices = JsFuture::from(promise)
        .await
        .map_err(|e| HidError::RequestFailed(format!("{:?}", e)))?;

    let device = Array::from(&devices).get(0);
    if device.is_undefined() {
        return Err(HidError::NoDevice);
    }
    open_device(device.unchecked_into(), service).await
}

/// Opens the first previously granted device, if any.
///
/// Lets a reload reconnect without showing the chooser again. Returns
/// whether a device was found.
pub async fn open_granted_device(service: DeviceService) -> Result<bool, HidError> {
    let hid = get_hid()?;
    let get_devices = get_fn(&hid, "getDevices")?;
    let promise: Promise = get_devices
        .call0(&hid)
        .map_err(|e| HidError::RequestFailed(format!("{:?}", e)))?
        .into();
    let devices = JsFuture::from(promise)
        .await
        .map_err(|e| HidError::RequestFailed(format!("{:?}", e)))?;

    let device = Array::from(&devices).get(0);
    if device.is_undefined() {
        return Ok(false);
    }
    open_device(device.unchecked_into(), service).await?;
    Ok(true)
}

/// Runs the open handshake and publishes the resulting transitions:
/// `Connected` as soon as the device is in hand, `Opened` once the
/// handshake completes.
async fn open_device(device: Object, service: DeviceService) -> Result<(), HidError> {
    service.publish(snapshot_of(&device, ConnectionState::Connected));

    if !js_bool(&device, "opened") {
        let open = get_fn(&device, "open")?;
        let promise: Promise = open
            .call0(&device)
            .map_err(|e| HidError::OpenFailed(format!("{:?}", e)))?
            .into();
        JsFuture::from(promise)
            .await
            .map_err(|e| HidError::OpenFailed(format!("{:?}", e)))?;
    }

    ACTIVE.with(|a| *a.borrow_mut() = Some(device.clone()));
    service.publish(snapshot_of(&device, ConnectionState::Opened));
    Ok(())
}

/// Asks the device to persist staged changes (vendor feature report).
pub async fn save_settings() -> Result<(), HidError> {
    let device = ACTIVE
        .with(|a| a.borrow().clone())
        .ok_or(HidError::NoDevice)?;

    let send = get_fn(&device, "sendFeatureReport")?;
    let payload = Uint8Array::new_with_length(1);
    payload.set_index(0, SAVE_COMMAND);
    let promise: Promise = send
        .call2(&device, &JsValue::from(SAVE_REPORT_ID), &payload)
        .map_err(|e| HidError::WriteFailed(format!("{:?}", e)))?
        .into();
    JsFuture::from(promise)
        .await
        .map_err(|e| HidError::WriteFailed(format!("{:?}", e)))?;
    Ok(())
}

/// Registers connect/disconnect listeners on `navigator.hid`.
///
/// Plugging a previously granted device back in re-runs the open handshake;
/// unplugging the active device publishes a detached snapshot. Both paths
/// are bounded by `lifecycle`, so emissions after teardown stop mutating
/// state.
///
/// # Note
/// The closures are intentionally leaked with `forget()`: the listeners
/// persist for the lifetime of the page in this single-page application.
pub fn watch_connections(service: DeviceService, lifecycle: &Lifecycle) -> Result<(), HidError> {
    let hid = get_hid()?;
    let add = get_fn(&hid, "addEventListener")?;

    let on_connect = lifecycle.guard(move |device: Object| {
        spawn_local(async move {
            if let Err(e) = open_device(device, service).await {
                web_sys::console::warn_1(&format!("device open failed: {}", e).into());
            }
        });
    });
    let connect = Closure::wrap(Box::new(move |event: JsValue| {
        if let Some(device) = event_device(&event) {
            on_connect(device);
        }
    }) as Box<dyn Fn(JsValue)>);
    add.call2(&hid, &"connect".into(), connect.as_ref())
        .map_err(|_| HidError::RequestFailed("connect listener".to_string()))?;
    connect.forget();

    let on_disconnect = lifecycle.guard(move |_: ()| service.publish(DeviceSnapshot::default()));
    let disconnect = Closure::wrap(Box::new(move |event: JsValue| {
        let Some(device) = event_device(&event) else {
            return;
        };
        // Only the active device matters; other HID hardware coming and
        // going must not clear the session.
        let was_active = ACTIVE.with(|a| {
            let mut active = a.borrow_mut();
            if active.as_ref().is_some_and(|d| Object::is(d, &device)) {
                *active = None;
                true
            } else {
                false
            }
        });
        if was_active {
            on_disconnect(());
        }
    }) as Box<dyn Fn(JsValue)>);
    add.call2(&hid, &"disconnect".into(), disconnect.as_ref())
        .map_err(|_| HidError::RequestFailed("disconnect listener".to_string()))?;
    disconnect.forget();

    Ok(())
}
