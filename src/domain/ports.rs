/// Classifies a single, already-trimmed line.
pub trait LineValidator: Send + Sync {
    fn is_valid(&self, line: &str) -> bool;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
}
