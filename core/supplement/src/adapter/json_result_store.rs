//! JSON 配列ファイルへの保存

use crate::domain::SupplementResult;
use crate::ports::outbound::ResultStore;
use common::error::Error;
use common::ports::outbound::FileSystem;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 既定の出力先（カレントディレクトリからの相対パス）
pub const DEFAULT_OUTPUT: &str = "supplement_results.json";

/// レコード配列を 2 スペースインデントの JSON で 1 ファイルに書く
pub struct JsonResultStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl JsonResultStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ResultStore for JsonResultStore {
    fn save(&self, results: &[SupplementResult]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(results)?;
        self.fs.write(&self.path, &json)
    }
}
