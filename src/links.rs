/// Why raw input produced no links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// Input was empty or whitespace only
    Blank,
    /// No line survived trimming
    NoLinks,
}

/// Ordered list of trimmed, non-empty links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkList(Vec<String>);

impl LinkList {
    /// Split raw multi-line input into links, one per line
    pub fn parse(input: &str) -> Result<Self, InvalidInput> {
        if input.trim().is_empty() {
            return Err(InvalidInput::Blank);
        }

        let links = input
            .split('\n')
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        if links.is_empty() {
            return Err(InvalidInput::NoLinks);
        }

        Ok(Self(links))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
