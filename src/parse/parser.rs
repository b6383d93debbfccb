/// The fields of one meaningful input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based physical line number.
    pub line: usize,
    pub fields: Vec<String>,
}
