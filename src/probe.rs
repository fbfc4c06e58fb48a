//! Process-level peak memory probe.
//!
//! Samples the operating system's resident-set high-water mark for the
//! current process, normalized to megabytes. On Linux this parses `VmHWM`
//! from `/proc/self/status`; on other Unix platforms it falls back to
//! `getrusage(2)`, scaling for the platform's native unit (macOS reports
//! `ru_maxrss` in bytes, the other Unixes in kilobytes). Elsewhere a
//! zero-valued fallback is returned so the crate still compiles everywhere.

/// Returns the process peak resident memory in megabytes.
///
/// The underlying counter is a high-water mark, not instantaneous usage:
/// the difference of two probes is zero when no new peak was reached in
/// between, and cannot see memory freed in between. Callers computing a
/// per-trial delta inherit that approximation.
#[must_use]
pub fn peak_memory_mb() -> f64 {
    peak_rss_mb()
}

#[cfg(target_os = "linux")]
fn peak_rss_mb() -> f64 {
    if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
        for line in status.lines() {
            if let Some(rest) = line.strip_prefix("VmHWM:") {
                let trimmed = rest.trim().trim_end_matches("kB").trim();
                if let Ok(kb) = trimmed.parse::<f64>() {
                    return kb / 1024.0;
                }
            }
        }
    }
    0.0
}

#[cfg(all(unix, not(target_os = "linux")))]
fn peak_rss_mb() -> f64 {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        return 0.0;
    }
    let usage = unsafe { usage.assume_init() };
    #[allow(clippy::cast_precision_loss)]
    let raw = usage.ru_maxrss as f64;
    if cfg!(target_os = "macos") {
        raw / (1024.0 * 1024.0)
    } else {
        raw / 1024.0
    }
}

#[cfg(not(unix))]
fn peak_rss_mb() -> f64 {
    0.0
}
