//!
//! # Common components
//!

pub mod engines;
pub mod namespace;

mod cfg;

#[cfg(test)]
mod test;

pub use cfg::EngineCfg;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use ruc::*;
use std::{
    env,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

pub const NULL: &[u8] = &[];

pub type RawBytes = Vec<u8>;
pub type RawKey = RawBytes;
pub type RawValue = RawBytes;

pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;
pub const GB: u64 = 1 << 30;

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

const BASE_DIR_VAR: &str = "NSKV_BASE_DIR";

static NSKV_BASE_DIR: Lazy<Mutex<PathBuf>> = Lazy::new(|| Mutex::new(gen_data_dir()));

/////////////////////////////////////////////////////////////////////////////
/////////////////////////////////////////////////////////////////////////////

#[inline(always)]
fn gen_data_dir() -> PathBuf {
    let d = env::var(BASE_DIR_VAR)
        .or_else(|_| env::var("HOME").map(|h| format!("{}/.nskv", h)))
        .unwrap_or_else(|_| "/tmp/.nskv".to_owned());
    PathBuf::from(d)
}

/// ${NSKV_BASE_DIR}
#[inline(always)]
pub fn nskv_get_base_dir() -> PathBuf {
    NSKV_BASE_DIR.lock().clone()
}

/// Set ${NSKV_BASE_DIR} manually, only allowed once per process.
#[inline(always)]
pub fn nskv_set_base_dir(dir: impl Into<PathBuf>) -> Result<()> {
    static HAS_INITED: AtomicBool = AtomicBool::new(false);

    if HAS_INITED.swap(true, Ordering::Relaxed) {
        Err(eg!("NSKV base dir has been initialized !!"))
    } else {
        let dir = dir.into();
        env::set_var(BASE_DIR_VAR, dir.as_os_str());
        *NSKV_BASE_DIR.lock() = dir;
        Ok(())
    }
}
