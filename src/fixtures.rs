#[cfg(test)]
pub mod test {
    use std::path::PathBuf;

    use tempfile::TempDir;

    pub const SAMPLE: &str = "\
[default]
user = soso
password = test
port = 36000

[wap0]
host = 192.168.1.100

[db1]
host = 10.0.0.5
port = 22
";

    /// Write [`SAMPLE`] to `xtools.ini` inside `dir` and return its path.
    pub fn write_sample(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("xtools.ini");
        std::fs::write(&path, SAMPLE).unwrap();
        path
    }
}
