pub mod excel;

use std::path::{Path, PathBuf};

/// 出力先がディレクトリ（または拡張子なし）ならファイル名を付ける
pub fn output_path(output: &Path, file_name: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}
