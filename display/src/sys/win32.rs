use std::mem::size_of;

use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    DEVMODEW, ENUM_CURRENT_SETTINGS, EnumDisplayMonitors, EnumDisplaySettingsW, GetMonitorInfoW,
    HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
};
use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, GetAwarenessFromDpiAwarenessContext,
    GetDpiForMonitor, GetThreadDpiAwarenessContext, MDT_EFFECTIVE_DPI,
    PROCESS_PER_MONITOR_DPI_AWARE, SetProcessDpiAwareness, SetProcessDpiAwarenessContext,
};
use windows::Win32::UI::WindowsAndMessaging::SetProcessDPIAware;
use windows::core::{BOOL, PCWSTR};

use crate::space::to_i32;
use crate::{CoordinateSpace, Display, Error, Point, Rect, Size};

const MONITORINFOF_PRIMARY: u32 = 1;
const BASE_DPI: f64 = 96.0;

/// Try every awareness API from newest to oldest, re-checking after each.
pub fn make_dpi_aware() -> bool {
    if thread_is_aware() {
        return true;
    }

    // SAFETY: plain process-wide setters with no pointer arguments. A failure
    // (e.g. awareness already fixed by the manifest) is detected by the check.
    let _ = unsafe { SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) };
    if thread_is_aware() {
        return true;
    }
    let _ = unsafe { SetProcessDpiAwareness(PROCESS_PER_MONITOR_DPI_AWARE) };
    if thread_is_aware() {
        return true;
    }
    let _ = unsafe { SetProcessDPIAware() };
    if thread_is_aware() {
        return true;
    }

    log::warn!("could not make the process DPI aware, falling back to logical coordinates");
    false
}

fn thread_is_aware() -> bool {
    // SAFETY: no arguments beyond the context handle returned by the first call.
    let awareness = unsafe { GetAwarenessFromDpiAwarenessContext(GetThreadDpiAwarenessContext()) };
    awareness.0 > 0
}

pub fn enumerate() -> Result<Vec<Display>, Error> {
    let space = CoordinateSpace::current();

    let mut handles: Vec<HMONITOR> = Vec::new();
    // SAFETY: `handles` outlives the call and the callback only pushes to it.
    let ok = unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(collect_monitor),
            LPARAM(std::ptr::from_mut(&mut handles) as isize),
        )
    };
    if !ok.as_bool() {
        return Err(Error::Platform("EnumDisplayMonitors failed".into()));
    }

    Ok(handles
        .into_iter()
        .filter_map(|handle| describe(handle, space))
        .collect())
}

unsafe extern "system" fn collect_monitor(
    handle: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    data: LPARAM,
) -> BOOL {
    // SAFETY: `data` is the `Vec` owned by `enumerate`, alive for the whole enumeration.
    let handles = unsafe { &mut *(data.0 as *mut Vec<HMONITOR>) };
    handles.push(handle);
    BOOL::from(true)
}

fn describe(handle: HMONITOR, space: CoordinateSpace) -> Option<Display> {
    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = size_of::<MONITORINFOEXW>() as u32;
    // SAFETY: `info` is a correctly sized MONITORINFOEXW whose first field is MONITORINFO.
    let ok = unsafe { GetMonitorInfoW(handle, std::ptr::from_mut(&mut info).cast::<MONITORINFO>()) };
    let id = handle.0 as usize as u64;
    if !ok.as_bool() {
        log::warn!("GetMonitorInfoW failed for monitor {id:#x}, skipping it");
        return None;
    }

    let rc = info.monitorInfo.rcMonitor;
    let logical = Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top);
    let is_primary = info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0;

    let Some(physical) = device_rect(&info) else {
        log::warn!("display settings unavailable for monitor {id:#x}, using logical bounds");
        return Some(
            Display::new(id, logical.origin, logical.size, 1.0, space).with_main(is_primary),
        );
    };

    let (origin, scale) = match space {
        CoordinateSpace::Physical => (
            physical.origin,
            monitor_dpi(handle).map_or(1.0, |dpi| f64::from(dpi) / BASE_DPI),
        ),
        CoordinateSpace::Scaled => (
            logical.origin,
            ratio(physical.size.width, logical.size.width),
        ),
    };
    Some(Display::new(id, origin, physical.size, scale, space).with_main(is_primary))
}

/// The monitor's current mode: physical position and resolution, unaffected
/// by DPI virtualization.
fn device_rect(info: &MONITORINFOEXW) -> Option<Rect> {
    let mut mode = DEVMODEW {
        dmSize: size_of::<DEVMODEW>() as u16,
        ..Default::default()
    };
    // SAFETY: `szDevice` is NUL-terminated by GetMonitorInfoW and `mode` is sized.
    let ok = unsafe {
        EnumDisplaySettingsW(
            PCWSTR(info.szDevice.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut mode,
        )
    };
    if !ok.as_bool() {
        return None;
    }

    // SAFETY: display devices fill the position variant of the union.
    let position = unsafe { mode.Anonymous1.Anonymous2.dmPosition };
    Some(Rect::from_parts(
        Point::new(position.x, position.y),
        Size::new(to_i32(mode.dmPelsWidth), to_i32(mode.dmPelsHeight)),
    ))
}

fn monitor_dpi(handle: HMONITOR) -> Option<u32> {
    let (mut x, mut y) = (0, 0);
    // SAFETY: both out-pointers reference live locals.
    unsafe { GetDpiForMonitor(handle, MDT_EFFECTIVE_DPI, &mut x, &mut y) }.ok()?;
    (x > 0).then_some(x)
}

fn ratio(physical: i32, logical: i32) -> f64 {
    if logical > 0 {
        f64::from(physical) / f64::from(logical)
    } else {
        1.0
    }
}
