use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> Result<String>;
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn data_file(&self) -> Option<&Path>;
}
