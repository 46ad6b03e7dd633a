pub mod basic_list;
pub mod basic_queue;

use nskv::RocksEngine;
use std::sync::Arc;

pub fn tmp_db() -> Arc<RocksEngine> {
    let dir = format!("/tmp/nskv_testing/bench_{}", rand::random::<u128>());
    Arc::new(RocksEngine::open_path(&dir).unwrap())
}
