/// Page-ordered text pulled out of a PDF. Pages that carry no extractable
/// text are kept as empty blocks so page numbering stays consistent with the
/// source document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pages: Vec<PageText>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    /// 1-indexed page number.
    pub number: u32,
    pub text: String,
}

impl ExtractedText {
    pub fn new(pages: Vec<PageText>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageText] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// True when no page contains any non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.text.trim().is_empty())
    }
}
